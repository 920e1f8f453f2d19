#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ResolutionSource {
    Claim,
    Subdomain,
    Header,
    Path,
}

impl ResolutionSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResolutionSource::Claim => "claim",
            ResolutionSource::Subdomain => "subdomain",
            ResolutionSource::Header => "header",
            ResolutionSource::Path => "path",
        }
    }
}

impl std::fmt::Display for ResolutionSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
