use std::env;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_HISTORY_DAYS: u32 = 365; // Trailing year, needed by the year window
const DEFAULT_SAMPLE_INTERVAL_MINS: u64 = 30;

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub bind_addr: String,
    pub history_days: u32,
    pub sample_interval_mins: u64,
}

impl ServiceConfig {
    pub fn new() -> Result<Self, Box<dyn std::error::Error>> {
        // Load environment variables
        dotenv::dotenv().ok();

        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

        let history_days = match env::var("HISTORY_DAYS") {
            Ok(value) => value
                .parse()
                .map_err(|_| format!("HISTORY_DAYS must be a number, got '{}'", value))?,
            Err(_) => DEFAULT_HISTORY_DAYS,
        };

        let sample_interval_mins = match env::var("SAMPLE_INTERVAL_MINS") {
            Ok(value) => value
                .parse()
                .map_err(|_| format!("SAMPLE_INTERVAL_MINS must be a number, got '{}'", value))?,
            Err(_) => DEFAULT_SAMPLE_INTERVAL_MINS,
        };

        if sample_interval_mins == 0 {
            return Err("SAMPLE_INTERVAL_MINS must be greater than zero".into());
        }

        Ok(ServiceConfig {
            bind_addr,
            history_days,
            sample_interval_mins,
        })
    }
}
