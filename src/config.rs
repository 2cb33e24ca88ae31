use log::debug;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub simulate_latency: bool,
}

impl AppConfig {
    /// Reads settings from the environment; call after `dotenv` has run.
    pub fn from_env() -> Self {
        let raw = std::env::var("NIGHTOUT_SIMULATE_LATENCY").unwrap_or_else(|_| "true".to_string());
        let simulate_latency = parse_flag(&raw);
        debug!("NIGHTOUT_SIMULATE_LATENCY={raw} -> {simulate_latency}");
        AppConfig { simulate_latency }
    }
}

fn parse_flag(raw: &str) -> bool {
    !matches!(
        raw.trim().to_lowercase().as_str(),
        "false" | "0" | "off" | "no"
    )
}
