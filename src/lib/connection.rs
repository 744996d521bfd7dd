use anyhow::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionParams {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub user: String,
    pub password: Option<String>,
}

// Decomposes a connection URL into the parameters pg_dump wants. The scheme
// is not validated and a missing host or port falls back to localhost:5432.
// An empty database name is passed through as-is and left for pg_dump to
// reject.
pub fn parse_database_url(database_url: &str) -> Result<ConnectionParams> {
    let parsed = url::Url::parse(database_url)?;

    let host = match parsed.host_str() {
        Some(h) if !h.is_empty() => h.to_string(),
        _ => "localhost".to_string(),
    };

    Ok(ConnectionParams {
        host,
        port: parsed.port().unwrap_or(5432),
        database: parsed.path().trim_start_matches('/').to_string(),
        user: parsed.username().to_string(),
        password: parsed.password().map(|p| p.to_string()),
    })
}
