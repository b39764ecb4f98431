pub mod error;
#[cfg(feature = "cli")]
pub mod logger;
#[cfg(feature = "cli")]
pub mod validation;
