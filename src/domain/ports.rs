use crate::adapters::sql::ScanValue;
use crate::utils::error::Result;

/// Populated from a value handed over by a SQL driver binding layer.
pub trait Scanner {
    fn scan(&mut self, src: ScanValue) -> Result<()>;
}

/// Produces the value a SQL driver binding layer should store.
pub trait Valuer {
    fn value(&self) -> ScanValue;
}
