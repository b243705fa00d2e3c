pub mod check_admin;
pub mod login;
pub mod register;
