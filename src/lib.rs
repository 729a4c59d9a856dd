pub mod auth;
pub mod error;
pub mod extractor;
pub mod state;
pub mod traits;
pub mod types;
