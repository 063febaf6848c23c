pub mod api;
pub mod config;
pub mod data;
pub mod error;
pub mod host;
pub mod models;
pub mod render;
pub mod service;
pub mod state;

pub use api::router;
pub use config::AppConfig;
pub use error::{ApiError, LoadError};
pub use service::estimate;
pub use state::AppState;
