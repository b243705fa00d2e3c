pub mod hash;
pub mod jwt;
pub mod mail;
pub mod webutils;
