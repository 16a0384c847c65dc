use std::sync::OnceLock;

use regex::Regex;
use reqwest::Url;

pub struct ResolverInput<'a> {
    pub default_base: &'a str,
    /// Public origin of the dashboard, e.g. `https://box-3000.app.github.dev`.
    pub origin: Option<&'a str>,
    pub workspace_pattern: &'a str,
    pub ui_port: u16,
    pub api_port: u16,
}

// <name>-<port>.<rest>
fn forwarded_host_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(?P<name>[^.]+)-(?P<port>\d+)(?P<rest>\..+)$").expect("static regex")
    })
}

fn trim_base(s: &str) -> String {
    s.trim().trim_end_matches('/').to_string()
}

/// Compute the backend base URL. `${base}/api/...` must resolve to the backend.
///
/// A configured default is used unless the dashboard runs behind a cloud
/// workspace's forwarded-port hostname, in which case the backend lives on the
/// same hostname with the dashboard port suffix swapped for the backend's.
pub fn resolve_api_base(input: &ResolverInput<'_>) -> String {
    match input.origin.and_then(|o| workspace_api_origin(o, input)) {
        Some(base) => base,
        None => trim_base(input.default_base),
    }
}

fn workspace_api_origin(origin: &str, input: &ResolverInput<'_>) -> Option<String> {
    if input.workspace_pattern.is_empty() {
        return None;
    }

    let mut url = Url::parse(origin.trim()).ok()?;
    let host = url.host_str()?.to_string();
    if !host.contains(input.workspace_pattern) {
        return None;
    }

    let caps = forwarded_host_re().captures(&host)?;
    if caps["port"].parse::<u16>().ok()? != input.ui_port {
        return None;
    }

    let new_host = format!("{}-{}{}", &caps["name"], input.api_port, &caps["rest"]);
    url.set_host(Some(&new_host)).ok()?;

    Some(trim_base(url.origin().ascii_serialization().as_str()))
}
