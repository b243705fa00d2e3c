use std::sync::Arc;
use tempfile::TempDir;
use workshop_server::config::{EnvConfig, JwtConfig, MailConfig};
use workshop_server::db::database_service::DatabaseService;

pub mod client;

pub const SYSTEM_ADMIN_EMAIL: &str = "sysadmin@test.com";

pub struct TestContext {
    pub db: Arc<DatabaseService>,
    pub config: EnvConfig,
    pub _dir: TempDir,
}

impl TestContext {
    pub async fn new() -> TestContext {
        Self::with_config(get_test_config()).await
    }

    /// Points mail delivery at `endpoint` (a mock server) with a test key.
    #[allow(dead_code)]
    pub async fn with_mail_endpoint(endpoint: String) -> TestContext {
        let mut config = get_test_config();
        config.mail.api_key = Some("test-mail-key".to_string());
        config.mail.endpoint = endpoint;
        Self::with_config(config).await
    }

    async fn with_config(mut config: EnvConfig) -> TestContext {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let db_url = format!("sqlite://{}?mode=rwc", dir.path().join("test.db").display());
        config.db_url = db_url.clone();

        let db = Arc::new(
            DatabaseService::new(&db_url)
                .await
                .expect("Failed to initialize DatabaseService")
        );

        TestContext {
            db,
            config,
            _dir: dir,
        }
    }
}

pub fn get_test_config() -> EnvConfig {
    EnvConfig {
        port: 8080,
        db_url: "set per test".to_string(),
        system_admin_email: SYSTEM_ADMIN_EMAIL.to_string(),
        jwt: JwtConfig {
            secret: "test-secret".to_string(),
            ttl_hours: 24,
        },
        mail: MailConfig {
            api_key: None,
            endpoint: "http://127.0.0.1:9/emails".to_string(),
            from: "noreply@test.com".to_string(),
        },
    }
}

// Test data helpers
#[allow(dead_code)]
pub mod test_data {
    use serde_json::{json, Value};

    pub const PASSWORD: &str = "s3cret-pass";

    pub fn registration(username: &str, role: &str, club_code: &str) -> Value {
        json!({
            "username": username,
            "email": format!("{username}@test.com"),
            "password": PASSWORD,
            "role": role,
            "clubCode": club_code,
        })
    }

    pub fn workshop(name: &str) -> Value {
        json!({
            "workshopName": name,
            "date": "2026-11-14",
            "time": "18:30",
            "location": "Main hall",
            "topic": "Soldering basics",
            "description": "Bring safety glasses.",
            "maxParticipants": 12,
        })
    }
}
