//! Users Entity Module

pub mod user;

pub use user::{normalize_email, User, UserStatus};
