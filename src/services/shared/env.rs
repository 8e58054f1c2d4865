use dotenvy::{dotenv, from_filename, var};
use log::{info, warn};

use super::constants::{DEFAULT_BACKEND_URL, DEFAULT_PORT, REPORT_TITLE};

pub fn check_for_env_variables() {
    // nothing is mandatory, every setting has a default
    match get_env_variable("REPORT_BACKEND_URL") {
        Some(url) => info!("Report backend set to {} ✅", url),
        None => warn!(
            "REPORT_BACKEND_URL not set, falling back to {} ⚠️",
            DEFAULT_BACKEND_URL
        ),
    };
    match get_env_variable("VERBOSITY") {
        Some(verbosity) => info!("Log verbosity set to {} ✅", verbosity),
        None => info!("VERBOSITY not set, logging at INFO."),
    };
}

pub fn get_env_variable(variable_to_get: &str) -> Option<String> {
    let environment = var("RUST_ENV").unwrap_or_else(|_| "development".into());

    match environment.as_str() {
        "development" => from_filename(".env.dev").ok(),
        "production" => from_filename(".env.prod").ok(),
        _ => dotenv().ok(),
    };
    var(variable_to_get).ok()
}

/// Backend base URL: the explicit argument wins over `REPORT_BACKEND_URL`.
pub fn backend_url(explicit: Option<String>) -> String {
    explicit
        .or_else(|| get_env_variable("REPORT_BACKEND_URL"))
        .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string())
}

pub fn server_port(explicit: Option<u16>) -> u16 {
    explicit
        .or_else(|| get_env_variable("PORT").and_then(|port| port.parse().ok()))
        .unwrap_or(DEFAULT_PORT)
}

pub fn report_title() -> String {
    get_env_variable("REPORT_TITLE").unwrap_or_else(|| REPORT_TITLE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_values_win() {
        assert_eq!(
            backend_url(Some("http://10.0.0.2:5001".to_string())),
            "http://10.0.0.2:5001"
        );
        assert_eq!(server_port(Some(9000)), 9000);
    }
}
