use std::env;
use std::path::PathBuf;

/// Runtime configuration, read from the environment once at startup and
/// passed explicitly to whatever needs it. No global state.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Presence log CSV read by every statistics query.
    pub data_csv: PathBuf,
    /// Local copy of the intranet user feed XML.
    pub data_xml: PathBuf,
    /// Address the HTTP server binds to.
    pub bind_addr: String,
    /// Remote user feed URL, used only by the fetch-users binary.
    pub feed_url: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            data_csv: var_or("DATA_CSV", "data/sample_data.csv").into(),
            data_xml: var_or("DATA_XML", "data/users.xml").into(),
            bind_addr: var_or("BIND_ADDR", "127.0.0.1:8080"),
            feed_url: var_or("XML_FEED", "https://intranet.example.com/api/users.xml"),
        }
    }
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| {
        log::info!("{key} not set, using default: {default}");
        default.to_string()
    })
}
