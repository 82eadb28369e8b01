pub mod adaptors;
pub mod auth;
