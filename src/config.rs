use dotenvy::dotenv;
use log::error;
use serde::Deserialize;
use std::env;

const CONFIG_PATH_ENV: &str = "CONFIG_PATH";

#[derive(Deserialize, Debug, Default, Clone)]
pub struct Config {
    pub db_path: String,
    pub resend_api_key: String,
    pub email_from: String,
    pub producer_timeout_seconds: u32,
    pub scrape_timeout_seconds: u32,
    pub email_timeout_seconds: u32,
    pub olx_base_url: Option<String>,
    pub http_bind_address: Option<String>,
}

pub fn create_test_config() -> Config {
    Config {
        db_path: "xxx".to_string(),
        resend_api_key: "xxx".to_string(),
        email_from: "Alertino <onboarding@resend.dev>".to_string(),
        producer_timeout_seconds: 60,
        scrape_timeout_seconds: 30,
        email_timeout_seconds: 30,
        olx_base_url: None,
        http_bind_address: None,
    }
}

pub fn read_config() -> Config {
    dotenv().ok();
    env::var(CONFIG_PATH_ENV)
        .map_err(|_| format!("{CONFIG_PATH_ENV} .env not set"))
        .and_then(|config_path| std::fs::read(config_path).map_err(|e| e.to_string()))
        .and_then(|bytes| toml::from_slice(&bytes).map_err(|e| e.to_string()))
        .unwrap_or_else(|err| {
            error!("failed to read config: {err}");
            std::process::exit(1);
        })
}
