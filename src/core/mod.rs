

pub mod config;
pub mod error;

pub use self::config::ShopsenseConfig;
pub use self::error::{Result, ShopsenseError};
