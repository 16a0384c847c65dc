use reqwest::Url;
use serde::Serialize;

pub struct NavItem {
    pub href: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

pub const NAV_ITEMS: [NavItem; 5] = [
    NavItem { href: "/", label: "Dashboard", icon: "🏠" },
    NavItem { href: "/products", label: "Products", icon: "📦" },
    NavItem { href: "/trending", label: "Trending", icon: "🔥" },
    NavItem { href: "/analytics", label: "Analytics", icon: "📊" },
    NavItem { href: "/alerts", label: "Alerts", icon: "🔔" },
];

/// `/` only matches itself; every other entry matches by prefix.
pub fn is_active(href: &str, path: &str) -> bool {
    if href == "/" {
        return path == "/";
    }
    path.starts_with(href)
}

#[derive(Debug, Serialize)]
pub struct NavEntry {
    pub href: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub active: bool,
}

/// Top bar state: the current route and whether the mobile menu is open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavShell {
    path: String,
    mobile_open: bool,
}

impl NavShell {
    pub fn new(path: &str) -> Self {
        Self {
            path: normalize(path),
            mobile_open: false,
        }
    }

    pub fn with_menu(mut self, open: bool) -> Self {
        self.mobile_open = open;
        self
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn mobile_open(&self) -> bool {
        self.mobile_open
    }

    pub fn toggle_menu(&mut self) {
        self.mobile_open = !self.mobile_open;
    }

    /// Following a link always closes the mobile menu.
    pub fn navigate(&mut self, path: &str) {
        self.path = normalize(path);
        self.mobile_open = false;
    }

    pub fn entries(&self) -> Vec<NavEntry> {
        NAV_ITEMS
            .iter()
            .map(|it| NavEntry {
                href: it.href,
                label: it.label,
                icon: it.icon,
                active: is_active(it.href, &self.path),
            })
            .collect()
    }

    /// `/nav` URL that re-renders this bar with the menu flipped.
    pub fn toggle_url(&self) -> String {
        let Ok(mut url) = Url::parse("http://localhost/nav") else {
            return "/nav".to_string();
        };
        url.query_pairs_mut()
            .append_pair("path", &self.path)
            .append_pair("open", if self.mobile_open { "false" } else { "true" });
        match url.query() {
            Some(q) => format!("/nav?{q}"),
            None => "/nav".to_string(),
        }
    }

    pub fn to_ctx(&self) -> serde_json::Value {
        serde_json::json!({
            "path": self.path,
            "entries": self.entries(),
            "mobile_open": self.mobile_open,
            "toggle_url": self.toggle_url(),
        })
    }
}

// Drop query/fragment and make sure the path is rooted.
fn normalize(path: &str) -> String {
    let path = path.split(['?', '#']).next().unwrap_or("").trim();
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    }
}
