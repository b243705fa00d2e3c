pub mod database_service;
pub mod registration_request;
pub mod user;
pub mod workshop_request;
