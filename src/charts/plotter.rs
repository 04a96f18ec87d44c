//! Chart Plotter Module
//! Draws the three bestseller charts with egui_plot. Plots are static: zoom,
//! drag, scroll and double-click reset are all disabled.

use crate::stats::{GenreTrends, SalesHistogram, TopBook};
use egui::Color32;
use egui_plot::{
    Bar, BarChart, Corner, GridInput, GridMark, Legend, Line, MarkerShape, Plot, PlotPoints,
    Points,
};

/// Histogram fill (blue, alpha 0.7)
pub const HISTOGRAM_COLOR: Color32 = Color32::from_rgba_premultiplied(0, 0, 179, 179);

/// Bestseller bar fill (purple, alpha 0.7)
pub const TOP_BOOKS_COLOR: Color32 = Color32::from_rgba_premultiplied(90, 0, 90, 179);

pub const PALETTE: [Color32; 10] = [
    Color32::from_rgb(31, 119, 180),  // Blue
    Color32::from_rgb(255, 127, 14),  // Orange
    Color32::from_rgb(44, 160, 44),   // Green
    Color32::from_rgb(214, 39, 40),   // Red
    Color32::from_rgb(148, 103, 189), // Purple
    Color32::from_rgb(140, 86, 75),   // Brown
    Color32::from_rgb(227, 119, 194), // Pink
    Color32::from_rgb(127, 127, 127), // Grey
    Color32::from_rgb(188, 189, 34),  // Olive
    Color32::from_rgb(23, 190, 207),  // Cyan
];

/// Copies per plotted unit on the sales axes.
const MILLION: f64 = 1_000_000.0;

/// One prepared chart, ready to draw.
#[derive(Debug, Clone)]
pub enum ChartData {
    SalesHistogram(SalesHistogram),
    /// The best sellers, plus the requested list length for the title.
    TopBooks { books: Vec<TopBook>, top_n: usize },
    GenreTrends(GenreTrends),
}

impl ChartData {
    pub fn title(&self) -> String {
        match self {
            ChartData::SalesHistogram(_) => "Distribution of Bestseller Sales".to_string(),
            ChartData::TopBooks { top_n, .. } => format!("Top {} Bestselling Books", top_n),
            ChartData::GenreTrends(_) => "Genre Popularity Over Time".to_string(),
        }
    }

    /// Window inner size in points.
    pub fn window_size(&self) -> [f32; 2] {
        match self {
            ChartData::SalesHistogram(_) => [1000.0, 500.0],
            ChartData::TopBooks { .. } | ChartData::GenreTrends(_) => [1200.0, 600.0],
        }
    }
}

/// Creates the bestseller charts using egui_plot.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Get color for a genre line.
    pub fn get_genre_color(genre_index: usize) -> Color32 {
        PALETTE[genre_index % PALETTE.len()]
    }

    /// Draw whichever chart `chart` holds.
    pub fn draw(ui: &mut egui::Ui, chart: &ChartData) {
        match chart {
            ChartData::SalesHistogram(hist) => Self::draw_sales_histogram(ui, hist),
            ChartData::TopBooks { books, .. } => Self::draw_top_books(ui, books),
            ChartData::GenreTrends(trends) => Self::draw_genre_trends(ui, trends),
        }
    }

    fn static_plot<'a>(id: &str) -> Plot<'a> {
        Plot::new(id)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .allow_boxed_zoom(false)
            .allow_double_click_reset(false)
    }

    /// `(center, height, width)` of each histogram bar, in millions of copies.
    pub fn histogram_bars(hist: &SalesHistogram) -> Vec<(f64, f64, f64)> {
        let width = hist.bin_width() / MILLION;
        hist.centers()
            .into_iter()
            .zip(&hist.counts)
            .map(|(center, &count)| (center / MILLION, count as f64, width))
            .collect()
    }

    /// Histogram of sales: x = sales (millions), y = number of books.
    pub fn draw_sales_histogram(ui: &mut egui::Ui, hist: &SalesHistogram) {
        let bars: Vec<Bar> = Self::histogram_bars(hist)
            .into_iter()
            .map(|(center, count, width)| {
                Bar::new(center, count)
                    .width(width)
                    .fill(HISTOGRAM_COLOR)
                    .stroke(egui::Stroke::new(1.0, Color32::BLACK))
            })
            .collect();

        Self::static_plot("sales_histogram")
            .x_axis_label("Approximate Sales (millions)")
            .y_axis_label("Number of Books")
            .show_grid([false, true])
            .include_y(0.0)
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(BarChart::new(bars).name("Books"));
            });
    }

    /// Rows of the horizontal bar chart as `(y, sales in millions, title)`.
    /// The largest seller gets the highest `y`, so it is drawn at the top.
    pub fn top_book_rows(books: &[TopBook]) -> Vec<(f64, f64, String)> {
        let n = books.len();
        books
            .iter()
            .enumerate()
            .map(|(i, b)| ((n - 1 - i) as f64, b.sales / MILLION, b.book.clone()))
            .collect()
    }

    /// Horizontal bars labeled by title, largest at the top.
    pub fn draw_top_books(ui: &mut egui::Ui, books: &[TopBook]) {
        let rows = Self::top_book_rows(books);
        let labels: Vec<(f64, String)> = rows.iter().map(|(y, _, t)| (*y, t.clone())).collect();
        let positions: Vec<f64> = rows.iter().map(|(y, _, _)| *y).collect();

        let bars: Vec<Bar> = rows
            .into_iter()
            .map(|(y, sales, title)| Bar::new(y, sales).width(0.8).name(title))
            .collect();

        Self::static_plot("top_books")
            .x_axis_label("Approximate Sales (millions)")
            .y_axis_label("Book Title")
            .show_grid([true, false])
            .include_x(0.0)
            .y_axis_min_width(220.0)
            .y_grid_spacer(move |_input: GridInput| {
                positions
                    .iter()
                    .map(|&value| GridMark {
                        value,
                        step_size: 1.0,
                    })
                    .collect()
            })
            .y_axis_formatter(move |mark, _range| {
                labels
                    .iter()
                    .find(|(y, _)| (y - mark.value).abs() < 1e-6)
                    .map(|(_, title)| title.clone())
                    .unwrap_or_default()
            })
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(
                    BarChart::new(bars)
                        .horizontal()
                        .color(TOP_BOOKS_COLOR)
                        .name("Approximate sales"),
                );
            });
    }

    /// Points of one genre's line, in decade order.
    pub fn genre_line_points(trends: &GenreTrends, genre: &str) -> Vec<[f64; 2]> {
        trends
            .series(genre)
            .into_iter()
            .map(|(decade, count)| [decade as f64, count as f64])
            .collect()
    }

    /// One line per primary genre over decades.
    pub fn draw_genre_trends(ui: &mut egui::Ui, trends: &GenreTrends) {
        let decades: Vec<f64> = trends.decades.iter().map(|&d| d as f64).collect();

        Self::static_plot("genre_trends")
            .x_axis_label("Decade")
            .y_axis_label("Number of Bestsellers")
            .show_grid([false, true])
            .include_y(0.0)
            .legend(Legend::default().position(Corner::RightTop))
            .x_grid_spacer(move |_input: GridInput| {
                decades
                    .iter()
                    .map(|&value| GridMark {
                        value,
                        step_size: 10.0,
                    })
                    .collect()
            })
            .x_axis_formatter(|mark, _range| format!("{:.0}", mark.value))
            .show(ui, |plot_ui| {
                for (idx, genre) in trends.genres.iter().enumerate() {
                    let color = Self::get_genre_color(idx);
                    let points = Self::genre_line_points(trends, genre);

                    plot_ui.line(
                        Line::new(PlotPoints::from_iter(points.iter().copied()))
                            .color(color)
                            .width(1.5)
                            .name(genre),
                    );
                    plot_ui.points(
                        Points::new(PlotPoints::from_iter(points.iter().copied()))
                            .shape(MarkerShape::Circle)
                            .filled(true)
                            .radius(3.0)
                            .color(color)
                            .name(genre),
                    );
                }
            });
    }
}
