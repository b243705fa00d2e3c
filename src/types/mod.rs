pub mod claims;
pub mod error;
pub mod mail;
pub mod registration;
pub mod response;
pub mod user;
pub mod workshop;
