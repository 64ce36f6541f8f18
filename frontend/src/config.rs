use log::Level;

#[derive(Clone, Debug, PartialEq)]
pub struct TrackerConfig {
    pub api_base: String,
    pub currency_symbol: String,
    pub reload_after_mutation: bool,
    pub log_level: Level,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        TrackerConfig {
            api_base: String::new(),
            currency_symbol: "$".to_string(),
            reload_after_mutation: true,
            log_level: Level::Info,
        }
    }
}

impl TrackerConfig {
    /// Builds the config from `data-*` attribute lookups, keeping the default
    /// for anything missing or unreadable.
    pub fn from_attributes<F>(attr: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = TrackerConfig::default();

        let api_base = attr("data-api-base")
            .map(|base| base.trim().trim_end_matches('/').to_string())
            .unwrap_or(defaults.api_base);

        let currency_symbol = attr("data-currency-symbol")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.currency_symbol);

        let reload_after_mutation = attr("data-reload-after-mutation")
            .and_then(|raw| parse_flag(&raw))
            .unwrap_or(defaults.reload_after_mutation);

        let log_level = attr("data-log-level")
            .and_then(|raw| raw.trim().parse::<Level>().ok())
            .unwrap_or(defaults.log_level);

        TrackerConfig {
            api_base,
            currency_symbol,
            reload_after_mutation,
            log_level,
        }
    }

    pub fn load() -> Self {
        let body = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body());
        match body {
            Some(body) => TrackerConfig::from_attributes(|name| body.get_attribute(name)),
            None => TrackerConfig::default(),
        }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
