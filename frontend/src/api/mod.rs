mod auth;
pub mod client;
pub mod types;

pub use auth::LOGIN_PATH;
pub use client::*;
pub use types::*;
