use std::collections::HashMap;

/// Read-only view of the request signals a resolution strategy may consult:
/// headers, host and URL path. Built at the HTTP boundary so the domain never
/// depends on framework request types.
#[derive(Clone, Debug)]
pub struct ResolutionSignals {
    headers: HashMap<String, String>,
    host: String,
    path: String,
}

impl ResolutionSignals {
    pub fn new(
        headers: HashMap<String, String>,
        host: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        let headers = headers
            .into_iter()
            .map(|(name, value)| (name.to_lowercase(), value))
            .collect();

        Self {
            headers,
            host: host.into(),
            path: path.into(),
        }
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(&name.to_lowercase()).map(String::as_str)
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}
