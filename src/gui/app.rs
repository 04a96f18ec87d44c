//! Chart Slideshow Application
//! Shows each chart for a fixed interval in one window, then closes it.

use crate::charts::ChartData;
use crate::gui::ChartViewer;
use eframe::egui;
use std::time::{Duration, Instant};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ViewerError {
    #[error("Chart window failed: {0}")]
    Window(String),
}

/// What the slideshow should do on the current frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideStep {
    /// Chart at this index has just come on screen.
    Entered(usize),
    /// Current chart stays up for the remaining time.
    Waiting(Duration),
    /// Every chart has been shown.
    Finished,
}

/// Timing of the slideshow, independent of any window.
#[derive(Debug, Clone)]
pub struct SlideSchedule {
    current: usize,
    total: usize,
    shown_at: Option<Instant>,
    display: Duration,
}

impl SlideSchedule {
    pub fn new(total: usize, display: Duration) -> Self {
        Self {
            current: 0,
            total,
            shown_at: None,
            display,
        }
    }

    /// Index of the chart on screen, if any is left.
    pub fn current(&self) -> Option<usize> {
        (self.current < self.total).then_some(self.current)
    }

    /// Advance the clock to `now`.
    pub fn tick(&mut self, now: Instant) -> SlideStep {
        if self.current >= self.total {
            return SlideStep::Finished;
        }

        let Some(shown_at) = self.shown_at else {
            self.shown_at = Some(now);
            return SlideStep::Entered(self.current);
        };

        let elapsed = now.saturating_duration_since(shown_at);
        if elapsed < self.display {
            return SlideStep::Waiting(self.display - elapsed);
        }

        self.current += 1;
        if self.current >= self.total {
            return SlideStep::Finished;
        }
        self.shown_at = Some(now);
        SlideStep::Entered(self.current)
    }
}

/// Window cycling through the prepared charts.
pub struct ChartSlideshow {
    charts: Vec<ChartData>,
    schedule: SlideSchedule,
}

impl ChartSlideshow {
    pub fn new(charts: Vec<ChartData>, display: Duration) -> Self {
        let schedule = SlideSchedule::new(charts.len(), display);
        Self { charts, schedule }
    }

    /// Open the window and block until every chart has been shown.
    pub fn run(charts: Vec<ChartData>, display: Duration) -> Result<(), ViewerError> {
        let Some(first) = charts.first() else {
            log::warn!("No charts to display");
            return Ok(());
        };

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size(first.window_size())
                .with_title(first.title()),
            ..Default::default()
        };

        eframe::run_native(
            "Bestseller Explorer",
            options,
            Box::new(move |_cc| Ok(Box::new(ChartSlideshow::new(charts, display)))),
        )
        .map_err(|e| ViewerError::Window(e.to_string()))
    }
}

impl eframe::App for ChartSlideshow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        match self.schedule.tick(Instant::now()) {
            SlideStep::Entered(idx) => {
                let chart = &self.charts[idx];
                log::info!("Showing chart {}/{}: {}", idx + 1, self.charts.len(), chart.title());
                ctx.send_viewport_cmd(egui::ViewportCommand::Title(chart.title()));
                ctx.send_viewport_cmd(egui::ViewportCommand::InnerSize(
                    chart.window_size().into(),
                ));
                ctx.request_repaint_after(self.schedule.display);
            }
            SlideStep::Waiting(remaining) => ctx.request_repaint_after(remaining),
            SlideStep::Finished => {
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                return;
            }
        }

        if let Some(chart) = self.schedule.current().and_then(|i| self.charts.get(i)) {
            egui::CentralPanel::default().show(ctx, |ui| {
                ChartViewer::show(ui, chart);
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn first_tick_enters_first_chart() {
        let mut schedule = SlideSchedule::new(3, Duration::from_secs(3));
        let start = Instant::now();

        assert_eq!(schedule.tick(start), SlideStep::Entered(0));
        assert_eq!(schedule.current(), Some(0));
    }

    #[test]
    fn chart_stays_up_for_the_display_interval() {
        let mut schedule = SlideSchedule::new(3, Duration::from_secs(3));
        let start = Instant::now();
        schedule.tick(start);

        assert_eq!(
            schedule.tick(start + Duration::from_secs(1)),
            SlideStep::Waiting(Duration::from_secs(2))
        );
        assert_eq!(
            schedule.tick(start + Duration::from_secs(3)),
            SlideStep::Entered(1)
        );
    }

    #[test]
    fn finishes_after_last_chart() {
        let mut schedule = SlideSchedule::new(2, Duration::from_secs(3));
        let start = Instant::now();

        schedule.tick(start);
        schedule.tick(start + Duration::from_secs(3));
        assert_eq!(
            schedule.tick(start + Duration::from_secs(6)),
            SlideStep::Finished
        );
        assert_eq!(schedule.current(), None);
        assert_eq!(
            schedule.tick(start + Duration::from_secs(9)),
            SlideStep::Finished
        );
    }

    #[test]
    fn empty_slideshow_finishes_immediately() {
        let mut schedule = SlideSchedule::new(0, Duration::from_secs(3));
        assert_eq!(schedule.tick(Instant::now()), SlideStep::Finished);
    }
}
