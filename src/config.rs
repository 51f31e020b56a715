use crate::error::config::ConfigError;

pub struct Config {
    pub port: u16,
    pub database_url: String,
    pub jwt_secret: String,
    pub jwt_expiry_hours: i64,
    pub google_client_id: String,
    pub google_client_secret: String,
    pub google_callback_url: String,
    pub google_auth_url: String,
    pub google_token_url: String,
    pub google_userinfo_url: String,
    pub frontend_url: String,
    pub market_data_url: String,
    pub earnings_refresh_threshold: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            port: parsed_or("PORT", 3000)?,
            database_url: required("DATABASE_URL")?,
            jwt_secret: required("JWT_SECRET")?,
            jwt_expiry_hours: parsed_or("JWT_EXPIRY_HOURS", 24)?,
            google_client_id: required("GOOGLE_CLIENT_ID")?,
            google_client_secret: required("GOOGLE_CLIENT_SECRET")?,
            google_callback_url: required("GOOGLE_CALLBACK_URL")?,
            google_auth_url: or_default(
                "GOOGLE_AUTH_URL",
                "https://accounts.google.com/o/oauth2/v2/auth",
            ),
            google_token_url: or_default("GOOGLE_TOKEN_URL", "https://oauth2.googleapis.com/token"),
            google_userinfo_url: or_default(
                "GOOGLE_USERINFO_URL",
                "https://www.googleapis.com/oauth2/v2/userinfo",
            ),
            frontend_url: or_default("FRONTEND_URL", "http://localhost:5173"),
            market_data_url: or_default("MARKET_DATA_URL", "https://query1.finance.yahoo.com"),
            earnings_refresh_threshold: parsed_or("EARNINGS_REFRESH_THRESHOLD", 5)?,
        })
    }
}

fn required(var: &str) -> Result<String, ConfigError> {
    std::env::var(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
}

fn or_default(var: &str, default: &str) -> String {
    std::env::var(var).unwrap_or_else(|_| default.to_string())
}

fn parsed_or<T: std::str::FromStr>(var: &str, default: T) -> Result<T, ConfigError> {
    match std::env::var(var) {
        Ok(value) => value.parse().map_err(|_| ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: format!("could not parse {value:?}"),
        }),
        Err(_) => Ok(default),
    }
}
