//! GUI module - Transient chart window

mod app;
mod chart_viewer;

pub use app::ChartSlideshow;
pub use chart_viewer::ChartViewer;
