pub mod loader;

pub use loader::{load_document, load_json, DataDoc};
