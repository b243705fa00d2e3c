use std::env;

pub const DEFAULT_MAIL_ENDPOINT: &str = "https://api.resend.com/emails";

#[derive(Clone, Debug)]
pub struct EnvConfig {
    pub port: u16,
    pub db_url: String,
    pub system_admin_email: String,
    pub jwt: JwtConfig,
    pub mail: MailConfig,
}

#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    pub ttl_hours: i64,
}

#[derive(Clone, Debug)]
pub struct MailConfig {
    /// `None` disables delivery; sends then fail with `MailError::Disabled`.
    pub api_key: Option<String>,
    pub endpoint: String,
    pub from: String,
}

impl EnvConfig {
    fn get_env(key: &str) -> String {
        env::var(key).unwrap_or_else(|_| panic!("Environment variable {} not set", key))
    }

    fn get_env_or(key: &str, default: &str) -> String {
        env::var(key).unwrap_or_else(|_| default.to_string())
    }

    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        let db_url: String = Self::get_env("DATABASE_URL");
        let api_key = env::var("MAIL_API_KEY").ok().filter(|k| !k.trim().is_empty());

        EnvConfig {
            port: Self::get_env_or("PORT", "8080").parse().unwrap_or(8080),
            db_url,
            system_admin_email: Self::get_env("SYSTEM_ADMIN_EMAIL"),
            jwt: JwtConfig {
                secret: Self::get_env("JWT_SECRET"),
                ttl_hours: Self::get_env_or("JWT_TTL_HOURS", "24").parse().unwrap_or(24),
            },
            mail: MailConfig {
                api_key,
                endpoint: Self::get_env_or("MAIL_ENDPOINT", DEFAULT_MAIL_ENDPOINT),
                from: Self::get_env_or("MAIL_FROM", "noreply@example.com"),
            },
        }
    }
}
