pub mod api;
pub mod config;
pub mod db;
pub mod domain;
pub mod models;

// Re-export commonly used types
pub use config::AppConfig;
pub use db::DatabaseError;
pub use domain::vocabulary::{Deity, OfferingStatus, SortField, SortOrder, Tempo, Vocabulary};
pub use domain::validate::ValidationError;
