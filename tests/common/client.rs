use actix_web::{
    body::MessageBody,
    dev::{Service, ServiceResponse},
    http::StatusCode,
    test, web, App,
};
use entity::role::{Role, Roles};
use entity::user::Model as UserModel;
use serde_json::Value;
use std::sync::Arc;
use workshop_server::{
    config::EnvConfig,
    db::database_service::DatabaseService,
    types::user::DBUserCreate,
    utils::{hash::hash_password, jwt::issue_token},
};

use super::test_data::PASSWORD;

pub struct TestClient {
    pub db: Arc<DatabaseService>,
    pub config: EnvConfig,
}

#[allow(dead_code)]
impl TestClient {
    pub fn new(db: Arc<DatabaseService>, config: EnvConfig) -> Self {
        TestClient { db, config }
    }

    pub fn create_app(&self) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .app_data(web::Data::new(self.config.clone()))
            .configure(workshop_server::routes::configure_routes)
    }

    /// Inserts a user directly, bypassing the HTTP flows. Password is `test_data::PASSWORD`.
    pub async fn create_user(&self, username: &str, club_code: &str, roles: &[Role]) -> UserModel {
        self.db
            .create_user(DBUserCreate {
                username: username.to_string(),
                email: format!("{username}@test.com"),
                password_hash: hash_password(PASSWORD).expect("Failed to hash password"),
                roles: Roles::new(roles.iter().copied()),
                club_code: club_code.to_string(),
            })
            .await
            .expect("Failed to create user")
    }

    pub async fn create_club_admin(&self, username: &str, club_code: &str) -> UserModel {
        self.create_user(username, club_code, &[Role::Admin, Role::ClubMember]).await
    }

    pub fn token_for(&self, user: &UserModel) -> String {
        issue_token(user, &self.config.jwt).expect("Failed to issue token")
    }
}

/// Calls the app and returns the status with the JSON body (`Null` when empty).
#[allow(dead_code)]
pub async fn send<S, R, B, E>(app: &S, req: R) -> (StatusCode, Value)
where
    S: Service<R, Response = ServiceResponse<B>, Error = E>,
    E: std::fmt::Debug,
    B: MessageBody,
{
    let resp = test::call_service(app, req).await;
    let status = resp.status();
    let bytes = test::read_body(resp).await;
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, body)
}
