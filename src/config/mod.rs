use std::env;

use lazy_static::lazy_static;

lazy_static! {
    pub static ref CONFIG: Config = Config::from_env();
}

#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
    pub request_timeout_secs: u64,
    pub stale_after_secs: u64,
    pub cache_max_age_secs: u64,
    pub admin_email: String,
    pub admin_password: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        Self {
            api_base_url: env::var("API_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            request_timeout_secs: env::var("REQUEST_TIMEOUT_SECS")
                .unwrap_or_else(|_| "60".to_string())
                .parse()
                .expect("REQUEST_TIMEOUT_SECS must be a valid number"),
            stale_after_secs: env::var("STALE_AFTER_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .expect("STALE_AFTER_SECS must be a valid number"),
            cache_max_age_secs: env::var("CACHE_MAX_AGE_SECS")
                .unwrap_or_else(|_| "300".to_string())
                .parse()
                .expect("CACHE_MAX_AGE_SECS must be a valid number"),
            admin_email: env::var("ADMIN_EMAIL")
                .unwrap_or_else(|_| "admin@example.com".to_string()),
            admin_password: env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "changeme".to_string()),
        }
    }
}
