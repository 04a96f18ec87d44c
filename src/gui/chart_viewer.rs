//! Chart Viewer Widget
//! Central panel showing one chart card: a heading and the plot below it.

use crate::charts::{ChartData, ChartPlotter};
use egui::RichText;

pub struct ChartViewer;

impl ChartViewer {
    /// Draw the chart card filling the available space.
    pub fn show(ui: &mut egui::Ui, chart: &ChartData) {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(chart.title()).size(18.0).strong());
        });
        ui.add_space(8.0);

        egui::Frame::none()
            .rounding(8.0)
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .inner_margin(12.0)
            .show(ui, |ui| {
                ChartPlotter::draw(ui, chart);
            });
    }
}
