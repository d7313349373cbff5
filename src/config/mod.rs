use std::env;
use std::path::PathBuf;

use lazy_static::lazy_static;

use crate::constants::{ADMIN_PATH, DASHBOARD_PATH, LOGIN_PATH};

lazy_static! {
    pub static ref CONFIG: Config = Config::from_env();
}

#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub session_file: PathBuf,
    pub login_path: String,
    pub dashboard_path: String,
    pub admin_path: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        Self {
            api_url: env::var("PORTAL_API_URL")
                .unwrap_or_else(|_| "http://localhost:8080/api".to_string()),
            session_file: env::var("PORTAL_SESSION_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./.portal-session.json")),
            login_path: env::var("PORTAL_LOGIN_PATH").unwrap_or_else(|_| LOGIN_PATH.to_string()),
            dashboard_path: env::var("PORTAL_DASHBOARD_PATH")
                .unwrap_or_else(|_| DASHBOARD_PATH.to_string()),
            admin_path: env::var("PORTAL_ADMIN_PATH").unwrap_or_else(|_| ADMIN_PATH.to_string()),
        }
    }

    /// Configuration pointing at an explicit API base URL, with default routes.
    pub fn with_api_url(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            session_file: PathBuf::from("./.portal-session.json"),
            login_path: LOGIN_PATH.to_string(),
            dashboard_path: DASHBOARD_PATH.to_string(),
            admin_path: ADMIN_PATH.to_string(),
        }
    }
}
