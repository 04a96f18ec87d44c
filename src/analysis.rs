//! Bestseller Analysis
//! Runs load -> clean -> aggregate and hands the prepared charts to the viewer.

use crate::charts::ChartData;
use crate::config::Settings;
use crate::data::{BookLoader, BookRecord, DataCleaner};
use crate::stats::{top_sellers, GenreTrends, SalesHistogram, TopBook};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error(transparent)]
    Loader(#[from] crate::data::LoaderError),
    #[error(transparent)]
    Cleaner(#[from] crate::data::CleanerError),
}

/// Everything the three charts are drawn from.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub records: Vec<BookRecord>,
    pub histogram: SalesHistogram,
    pub top_books: Vec<TopBook>,
    pub trends: GenreTrends,
    /// Requested length of the bestseller list.
    pub top_n: usize,
}

impl Analysis {
    /// Load and clean the CSV at `path`, then build every chart view.
    pub fn from_csv(
        path: impl AsRef<Path>,
        bins: usize,
        top_n: usize,
    ) -> Result<Self, AnalysisError> {
        let raw = BookLoader::load_csv(path)?;
        let cleaned = DataCleaner::clean(&raw)?;
        let records = DataCleaner::records(&cleaned)?;
        Ok(Self::from_records(records, bins, top_n))
    }

    pub fn from_settings(settings: &Settings) -> Result<Self, AnalysisError> {
        Self::from_csv(&settings.file_path, settings.bins, settings.top_n)
    }

    pub fn from_records(records: Vec<BookRecord>, bins: usize, top_n: usize) -> Self {
        let histogram = SalesHistogram::from_records(&records, bins);
        let top_books = top_sellers(&records, top_n);
        let trends = GenreTrends::from_records(&records);

        Self {
            records,
            histogram,
            top_books,
            trends,
            top_n,
        }
    }

    /// Charts in display order.
    pub fn charts(&self) -> Vec<ChartData> {
        vec![
            ChartData::SalesHistogram(self.histogram.clone()),
            ChartData::TopBooks {
                books: self.top_books.clone(),
                top_n: self.top_n,
            },
            ChartData::GenreTrends(self.trends.clone()),
        ]
    }

    /// Log what each chart would show, for runs without a display.
    pub fn log_summary(&self) {
        if self.histogram.is_empty() {
            log::warn!("No parseable sales values; histogram and bestseller list are empty");
        }
        if self.trends.is_empty() {
            log::warn!("No books with both a genre and a year; genre trends are empty");
        }

        log::info!(
            "{} books, {} with sales, {} binned into {} bins of {:.2}M",
            self.records.len(),
            self.records
                .iter()
                .filter(|r| r.approximate_sales.is_some())
                .count(),
            self.histogram.total(),
            self.histogram.counts.len(),
            self.histogram.bin_width() / 1_000_000.0
        );

        for (rank, book) in self.top_books.iter().enumerate() {
            log::info!("#{:<2} {} ({:.1}M)", rank + 1, book.book, book.sales / 1_000_000.0);
        }

        match self.trends.to_dataframe() {
            Ok(table) => log::info!("Genre trends by decade:\n{}", table),
            Err(e) => log::warn!("Could not build genre trend table: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const CSV: &str = "\
,Book,Author(s),Genre,First published,Approximate sales
0,A Tale of Two Cities,Charles Dickens,Historical fiction,1859,200 million
1,The Little Prince,Antoine de Saint-Exupéry,\"Fantasy, Children's fiction\",1943,200 million
2,Harry Potter and the Philosopher's Stone,J. K. Rowling,Fantasy,1997,120 million
3,And Then There Were None,Agatha Christie,Mystery,1939,100 million
4,Dream of the Red Chamber,Cao Xueqin,Family saga,1791,100 million
5,The Hobbit,J. R. R. Tolkien,Fantasy,1937,100 million
6,Untitled Draft,Nobody,,2001,unknown
7,The Lost Book,Anonymous,Romance,c. 1990,15 million
";

    fn fixture() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(CSV.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn pipeline_builds_all_three_views() {
        let file = fixture();

        let analysis = Analysis::from_csv(file.path(), 20, 3).unwrap();

        assert_eq!(analysis.records.len(), 8);
        assert_eq!(analysis.histogram.total(), 7);

        let top: Vec<&str> = analysis.top_books.iter().map(|t| t.book.as_str()).collect();
        assert_eq!(
            top,
            vec![
                "A Tale of Two Cities",
                "The Little Prince",
                "Harry Potter and the Philosopher's Stone"
            ]
        );

        assert_eq!(analysis.trends.decades, vec![1790, 1850, 1930, 1940, 1990]);
        assert_eq!(
            analysis.trends.genres,
            vec!["family saga", "fantasy", "historical fiction", "mystery"]
        );
        assert_eq!(analysis.trends.count(1930, "fantasy"), 1);
        assert_eq!(analysis.trends.count(1940, "fantasy"), 1);
        assert_eq!(analysis.trends.count(1990, "mystery"), 0);
    }

    #[test]
    fn absurd_years_do_not_abort_the_pipeline() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(
            b",Book,Genre,First published,Approximate sales\n\
              0,Far Future,Fantasy,1e300,5 million\n\
              1,Too Long,Fantasy,99999999999999999999,3 million\n\
              2,Dune,Science fiction,1965,20 million\n",
        )
        .unwrap();
        file.flush().unwrap();

        let analysis = Analysis::from_csv(file.path(), 20, 10).unwrap();

        assert_eq!(analysis.records[0].first_published, None);
        assert_eq!(analysis.trends.decades, vec![1960]);
        assert_eq!(analysis.trends.genres, vec!["science fiction"]);
        assert_eq!(analysis.top_books.len(), 3);
    }

    #[test]
    fn charts_come_in_display_order() {
        let analysis = Analysis::from_records(Vec::new(), 20, 10);
        let titles: Vec<String> = analysis.charts().iter().map(|c| c.title()).collect();

        assert_eq!(
            titles,
            vec![
                "Distribution of Bestseller Sales",
                "Top 10 Bestselling Books",
                "Genre Popularity Over Time"
            ]
        );
    }

    #[test]
    fn missing_file_surfaces_loader_error() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings {
            file_path: dir.path().join("missing.csv"),
            ..Settings::default()
        };

        assert!(matches!(
            Analysis::from_settings(&settings),
            Err(AnalysisError::Loader(_))
        ));
    }
}
