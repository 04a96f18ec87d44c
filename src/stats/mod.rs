//! Stats module - Sales binning, bestseller ranking and genre trends

mod aggregator;
mod calculator;

pub use aggregator::GenreTrends;
pub use calculator::{top_sellers, SalesHistogram, TopBook};
