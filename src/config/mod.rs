/// Database connection and table creation
pub mod database;

/// Environment-sourced application settings
pub mod settings;

pub use settings::AppConfig;
