//! Data module - CSV loading and cleaning

mod cleaner;
mod loader;

pub use cleaner::{BookRecord, CleanerError, DataCleaner};
pub use loader::{BookLoader, LoaderError};
