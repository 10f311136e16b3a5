use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    /// Extra provider templates, tried before the built-in defaults
    pub providers: Vec<String>,
    /// Optional per-request deadline in seconds
    pub timeout_secs: Option<u64>,
    pub debug: bool,
}

pub fn load_config() -> anyhow::Result<Config> {
    let providers = std::env::var("IPLOCATION_PROVIDERS")
        .map(|v| split_providers(&v))
        .unwrap_or_default();

    let timeout_secs = std::env::var("IPLOCATION_TIMEOUT_SECS")
        .ok()
        .and_then(|v| v.parse().ok());

    let debug = std::env::var("DEBUG").is_ok();

    Ok(Config {
        providers,
        timeout_secs,
        debug,
    })
}

/// Split a comma-separated provider list, dropping empty entries.
fn split_providers(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.providers.is_empty());
        assert!(config.timeout_secs.is_none());
        assert!(!config.debug);
    }

    #[test]
    fn test_split_providers() {
        let providers = split_providers("http://a.test/*, http://b.test/*/json ,");
        assert_eq!(providers, vec!["http://a.test/*", "http://b.test/*/json"]);
    }

    #[test]
    fn test_split_providers_empty() {
        assert!(split_providers("").is_empty());
        assert!(split_providers(" , ,").is_empty());
    }
}
