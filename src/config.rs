// src/config.rs

#[cfg(target_arch = "wasm32")]
const DEFAULT_API_BASE: &str = "/api";
#[cfg(not(target_arch = "wasm32"))]
const DEFAULT_NATIVE_API_BASE: &str = "http://127.0.0.1:8000";

/// URLs de los endpoints del backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub auth_url: String,
    pub progress_url: String,
    pub chat_url: String,
    pub teacher_url: String,
    pub materials_url: String,
}

impl ApiConfig {
    pub fn from_base(base: &str) -> Self {
        let base = trim_trailing_slashes(base);
        Self {
            auth_url: format!("{base}/auth"),
            progress_url: format!("{base}/progress"),
            chat_url: format!("{base}/chat"),
            teacher_url: format!("{base}/teacher"),
            materials_url: format!("{base}/materials"),
        }
    }

    /// Base + overrides individuales. `lookup` recibe el nombre de la variable.
    pub fn from_lookup(default_base: &str, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let base = lookup("EDU_PORTAL_API_BASE")
            .and_then(|v| normalize_endpoint(&v))
            .unwrap_or_else(|| default_base.to_string());
        let mut config = Self::from_base(&base);

        let overrides: [(&str, &mut String); 5] = [
            ("EDU_PORTAL_AUTH_URL", &mut config.auth_url),
            ("EDU_PORTAL_PROGRESS_URL", &mut config.progress_url),
            ("EDU_PORTAL_CHAT_URL", &mut config.chat_url),
            ("EDU_PORTAL_TEACHER_URL", &mut config.teacher_url),
            ("EDU_PORTAL_MATERIALS_URL", &mut config.materials_url),
        ];
        for (key, slot) in overrides {
            if let Some(url) = lookup(key).and_then(|v| normalize_endpoint(&v)) {
                *slot = trim_trailing_slashes(&url);
            }
        }
        config
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn resolve() -> Self {
        let config = Self::from_lookup(DEFAULT_NATIVE_API_BASE, |key| std::env::var(key).ok());
        log::info!("Backend configurado en {}", config.auth_url);
        config
    }

    #[cfg(target_arch = "wasm32")]
    pub fn resolve() -> Self {
        let base = api_base_from_build_env()
            .or_else(api_base_from_querystring)
            .or_else(api_base_from_meta)
            .or_else(api_base_from_local_storage)
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        log::info!("Backend configurado en {base}");
        Self::from_base(&base)
    }
}

fn normalize_endpoint(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn trim_trailing_slashes(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed == "/" {
        return String::new();
    }
    trimmed.trim_end_matches('/').to_string()
}

#[cfg(target_arch = "wasm32")]
fn api_base_from_build_env() -> Option<String> {
    option_env!("EDU_PORTAL_API_BASE").and_then(normalize_endpoint)
}

#[cfg(target_arch = "wasm32")]
fn api_base_from_querystring() -> Option<String> {
    let window = web_sys::window()?;
    let search = window.location().search().ok()?;
    let query = search.strip_prefix('?').unwrap_or(search.as_str());

    for pair in query.split('&') {
        let (key, value) = match pair.split_once('=') {
            Some((k, v)) => (k, v),
            None => (pair, ""),
        };

        if key == "api_base" {
            let decoded = js_sys::decode_uri_component(value).ok()?;
            let decoded = decoded.as_string()?;
            return normalize_endpoint(&decoded);
        }
    }

    None
}

#[cfg(target_arch = "wasm32")]
fn api_base_from_meta() -> Option<String> {
    let window = web_sys::window()?;
    let document = window.document()?;
    let meta = document
        .query_selector("meta[name='edu-portal-api-base']")
        .ok()??;

    meta.get_attribute("content")
        .as_deref()
        .and_then(normalize_endpoint)
}

#[cfg(target_arch = "wasm32")]
fn api_base_from_local_storage() -> Option<String> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok()??;
    storage
        .get_item("edu_portal_api_base")
        .ok()?
        .as_deref()
        .and_then(normalize_endpoint)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn from_base_normalizes_trailing_slash() {
        let config = ApiConfig::from_base("https://edu.example.com/api/");
        assert_eq!(config.auth_url, "https://edu.example.com/api/auth");
        assert_eq!(config.materials_url, "https://edu.example.com/api/materials");
    }

    #[test]
    fn root_base_yields_absolute_paths() {
        let config = ApiConfig::from_base("/");
        assert_eq!(config.chat_url, "/chat");
    }

    #[test]
    fn lookup_overrides_single_endpoints() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("EDU_PORTAL_API_BASE", "http://10.0.0.2:9000"),
            ("EDU_PORTAL_CHAT_URL", "https://chat.example.com/fn/"),
            ("EDU_PORTAL_TEACHER_URL", "   "),
        ]);
        let config =
            ApiConfig::from_lookup("http://unused", |k| vars.get(k).map(|v| v.to_string()));

        assert_eq!(config.auth_url, "http://10.0.0.2:9000/auth");
        assert_eq!(config.chat_url, "https://chat.example.com/fn");
        // Un valor en blanco no cuenta como override
        assert_eq!(config.teacher_url, "http://10.0.0.2:9000/teacher");
    }

    #[test]
    fn lookup_without_vars_uses_default_base() {
        let config = ApiConfig::from_lookup("http://127.0.0.1:8000", |_| None);
        assert_eq!(config, ApiConfig::from_base("http://127.0.0.1:8000"));
    }
}
