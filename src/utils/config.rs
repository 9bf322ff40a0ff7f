const DEFAULT_SCHEDULE_URL: &str = "https://api.jolpi.ca/ergast/f1/current/?format=json";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

#[derive(Debug, Clone)]
pub struct Config {
    pub schedule_url: String,
    pub bind_addr: String,
}

impl Config {
    pub fn init() -> Self {
        Config {
            schedule_url: std::env::var("F1_SCHEDULE_URL")
                .unwrap_or_else(|_| DEFAULT_SCHEDULE_URL.to_string()),
            bind_addr: std::env::var("BIND_ADDR")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
        }
    }
}
