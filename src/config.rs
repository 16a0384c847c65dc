use std::env;

use crate::services::api_resolver::{self, ResolverInput};

#[derive(Debug, Clone)]
pub struct Settings {
    pub host: String,
    pub port: u16,

    // configured default, before workspace detection
    pub api_url: String,
    pub public_origin: Option<String>,
    pub workspace_host_pattern: String,
    pub workspace_api_port: u16,

    pub request_timeout_secs: u64,

    /// Base URL every view talks to. Resolved once at startup.
    pub api_base: String,
}

impl Settings {
    /// Re-run base URL resolution after fields were changed by hand (tests, overrides).
    pub fn resolve_api_base(&mut self) {
        self.api_base = api_resolver::resolve_api_base(&ResolverInput {
            default_base: &self.api_url,
            origin: self.public_origin.as_deref(),
            workspace_pattern: &self.workspace_host_pattern,
            ui_port: self.port,
            api_port: self.workspace_api_port,
        });
    }
}

fn env_u16(key: &str, default: u16) -> u16 {
    env::var(key)
        .ok()
        .and_then(|s| s.trim().parse::<u16>().ok())
        .unwrap_or(default)
}

fn non_empty(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

// Cloud workspaces expose forwarded ports as https://<name>-<port>.<domain>
fn workspace_origin(port: u16) -> Option<String> {
    let name = non_empty("CODESPACE_NAME")?;
    let domain = non_empty("GITHUB_CODESPACES_PORT_FORWARDING_DOMAIN")?;
    Some(format!("https://{name}-{port}.{domain}"))
}

pub fn load() -> Settings {
    // Loads .env if present (no crash if missing)
    dotenvy::dotenv().ok();

    let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = env_u16("PORT", 3000);

    let api_url = non_empty("API_URL").unwrap_or_else(|| "http://localhost:8000".to_string());
    let public_origin = non_empty("PUBLIC_ORIGIN").or_else(|| workspace_origin(port));

    let workspace_host_pattern =
        non_empty("WORKSPACE_HOST_PATTERN").unwrap_or_else(|| "app.github.dev".to_string());
    let workspace_api_port = env_u16("WORKSPACE_API_PORT", 8000);

    let request_timeout_secs = env::var("REQUEST_TIMEOUT_SECS")
        .ok()
        .and_then(|s| s.trim().parse::<u64>().ok())
        .filter(|s| *s > 0)
        .unwrap_or(10);

    let mut settings = Settings {
        host,
        port,
        api_url,
        public_origin,
        workspace_host_pattern,
        workspace_api_port,
        request_timeout_secs,
        api_base: String::new(),
    };
    settings.resolve_api_base();
    settings
}
