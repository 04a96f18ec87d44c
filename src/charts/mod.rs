//! Charts module - Chart drawing

mod plotter;

pub use plotter::{ChartData, ChartPlotter};
