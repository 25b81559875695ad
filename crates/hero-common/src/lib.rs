pub mod errors;

pub use errors::{AssetError, ConfigError, HeroError};

pub type Result<T> = std::result::Result<T, HeroError>;
