use std::time::Duration;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub postgres_host: String,
    pub postgres_port: u16,
    pub postgres_user: String,
    pub postgres_password: String,
    pub postgres_admin_database: String,
    pub tenant_resolver_chain: Vec<String>,
    pub tenant_header_name: String,
    pub tenant_claim_key: String,
    pub key_derivation_iterations: u32,
    pub tenant_pool_max_connections: u32,
    pub tenant_pool_acquire_timeout_ms: u64,
    pub tenant_pool_dispose_grace_ms: u64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8081".to_string())
                .parse()
                .unwrap_or(8081),
            postgres_host: std::env::var("POSTGRES_HOST")
                .unwrap_or_else(|_| "127.0.0.1".to_string()),
            postgres_port: std::env::var("POSTGRES_PORT")
                .unwrap_or_else(|_| "5432".to_string())
                .parse()
                .unwrap_or(5432),
            postgres_user: std::env::var("POSTGRES_USER")
                .unwrap_or_else(|_| "postgres".to_string()),
            postgres_password: std::env::var("POSTGRES_PASSWORD")
                .unwrap_or_else(|_| "admin".to_string()),
            postgres_admin_database: std::env::var("POSTGRES_ADMIN_DATABASE")
                .unwrap_or_else(|_| "postgres".to_string()),
            tenant_resolver_chain: read_resolver_chain(),
            tenant_header_name: std::env::var("TENANT_HEADER_NAME")
                .unwrap_or_else(|_| "x-tenant-id".to_string())
                .to_lowercase(),
            tenant_claim_key: std::env::var("TENANT_CLAIM_KEY")
                .unwrap_or_else(|_| "tenant_id".to_string()),
            key_derivation_iterations: std::env::var("KEY_DERIVATION_ITERATIONS")
                .unwrap_or_else(|_| "100000".to_string())
                .parse()
                .unwrap_or(100_000),
            tenant_pool_max_connections: std::env::var("TENANT_POOL_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "5".to_string())
                .parse()
                .unwrap_or(5),
            tenant_pool_acquire_timeout_ms: std::env::var("TENANT_POOL_ACQUIRE_TIMEOUT_MS")
                .unwrap_or_else(|_| "5000".to_string())
                .parse()
                .unwrap_or(5000),
            tenant_pool_dispose_grace_ms: std::env::var("TENANT_POOL_DISPOSE_GRACE_MS")
                .unwrap_or_else(|_| "10000".to_string())
                .parse()
                .unwrap_or(10_000),
        }
    }

    pub fn admin_database_url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.postgres_user,
            self.postgres_password,
            self.postgres_host,
            self.postgres_port,
            self.postgres_admin_database
        )
    }

    pub fn database_url_for(&self, database_name: &str) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.postgres_user,
            self.postgres_password,
            self.postgres_host,
            self.postgres_port,
            database_name
        )
    }

    pub fn tenant_pool_acquire_timeout(&self) -> Duration {
        Duration::from_millis(self.tenant_pool_acquire_timeout_ms)
    }

    pub fn tenant_pool_dispose_grace(&self) -> Duration {
        Duration::from_millis(self.tenant_pool_dispose_grace_ms)
    }
}

fn read_resolver_chain() -> Vec<String> {
    std::env::var("TENANT_RESOLVER_CHAIN")
        .ok()
        .map(|raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(|s| s.to_lowercase())
                .collect::<Vec<_>>()
        })
        .filter(|chain| !chain.is_empty())
        .unwrap_or_else(|| {
            vec![
                "claim".to_string(),
                "subdomain".to_string(),
                "header".to_string(),
                "path".to_string(),
            ]
        })
}
