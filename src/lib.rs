pub mod adapters;
#[cfg(feature = "cli")]
pub mod config;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, InputFormat};

pub use adapters::sql::ScanValue;
pub use domain::int32::Int32;
pub use domain::ports::{Scanner, Valuer};
pub use utils::error::{ErrorKind, NullError, Result};
