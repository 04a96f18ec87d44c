//! CSV Data Loader Module
//! Handles bestseller CSV loading and index column removal using Polars.

use polars::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Column holding the book title.
pub const BOOK_COL: &str = "Book";
/// Column holding the (possibly comma-separated) genre list.
pub const GENRE_COL: &str = "Genre";
/// Column holding the year of first publication.
pub const YEAR_COL: &str = "First published";
/// Column holding the free-text sales description.
pub const SALES_COL: &str = "Approximate sales";

pub const REQUIRED_COLUMNS: [&str; 4] = [BOOK_COL, GENRE_COL, YEAR_COL, SALES_COL];

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to load CSV: {0}")]
    CsvError(#[from] PolarsError),
    #[error("Missing required column '{0}'")]
    MissingColumn(String),
}

/// Handles CSV file loading with Polars.
pub struct BookLoader;

impl BookLoader {
    /// Load a bestseller CSV. Every column is read as text; the cleaner
    /// owns numeric coercion.
    pub fn load_csv(file_path: impl AsRef<Path>) -> Result<DataFrame, LoaderError> {
        let file_path = PathBuf::from(file_path.as_ref());

        let df = LazyCsvReader::new(&file_path)
            .with_has_header(true)
            .with_infer_schema_length(Some(0))
            .finish()?
            .collect()?;

        let df = Self::drop_index_column(df)?;
        Self::check_required_columns(&df)?;

        log::info!(
            "Loaded {}: {} rows, {} columns",
            file_path.display(),
            df.height(),
            df.width()
        );
        Ok(df)
    }

    /// Whether a header names the stray row-index column written by
    /// dataframe exporters (blank, or `Unnamed: 0` style).
    pub fn is_index_column(name: &str) -> bool {
        let name = name.trim();
        name.is_empty() || name.starts_with("Unnamed:")
    }

    /// Drop the unnamed index column if the file carries one.
    pub fn drop_index_column(df: DataFrame) -> Result<DataFrame, LoaderError> {
        let index_col = df
            .get_column_names()
            .into_iter()
            .find(|name| Self::is_index_column(name.as_str()))
            .map(|name| name.to_string());

        match index_col {
            Some(name) => {
                log::debug!("Dropping index column {:?}", name);
                Ok(df.drop(&name)?)
            }
            None => Ok(df),
        }
    }

    fn check_required_columns(df: &DataFrame) -> Result<(), LoaderError> {
        let columns = Self::get_columns(df);
        for required in REQUIRED_COLUMNS {
            if !columns.iter().any(|c| c == required) {
                return Err(LoaderError::MissingColumn(required.to_string()));
            }
        }
        Ok(())
    }

    /// Get list of column names from a DataFrame.
    pub fn get_columns(df: &DataFrame) -> Vec<String> {
        df.get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn drops_blank_index_column() {
        let file = write_csv(
            ",Book,Genre,First published,Approximate sales\n\
             0,Dune,Science fiction,1965,20 million\n\
             1,Emma,Romance,1815,unknown\n",
        );

        let df = BookLoader::load_csv(file.path()).unwrap();

        assert_eq!(
            BookLoader::get_columns(&df),
            vec!["Book", "Genre", "First published", "Approximate sales"]
        );
        assert_eq!(df.height(), 2);
    }

    #[test]
    fn drops_unnamed_prefixed_index_column() {
        let file = write_csv(
            "Unnamed: 0,Book,Genre,First published,Approximate sales\n\
             0,Dune,Science fiction,1965,20 million\n",
        );

        let df = BookLoader::load_csv(file.path()).unwrap();

        assert!(!BookLoader::get_columns(&df).contains(&"Unnamed: 0".to_string()));
        assert_eq!(df.width(), 4);
    }

    #[test]
    fn tolerates_missing_index_column() {
        let file = write_csv(
            "Book,Genre,First published,Approximate sales\n\
             Dune,Science fiction,1965,20 million\n",
        );

        let df = BookLoader::load_csv(file.path()).unwrap();
        assert_eq!(df.width(), 4);
    }

    #[test]
    fn reads_every_column_as_text() {
        let file = write_csv(
            ",Book,Genre,First published,Approximate sales\n\
             0,Dune,Science fiction,1965,20 million\n",
        );

        let df = BookLoader::load_csv(file.path()).unwrap();
        let year = df.column(YEAR_COL).unwrap();
        assert_eq!(year.dtype(), &DataType::String);
    }

    #[test]
    fn reports_missing_required_column() {
        let file = write_csv(
            ",Book,Genre,Approximate sales\n\
             0,Dune,Science fiction,20 million\n",
        );

        let err = BookLoader::load_csv(file.path()).unwrap_err();
        assert!(matches!(err, LoaderError::MissingColumn(ref c) if c == YEAR_COL));
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does-not-exist.csv");

        assert!(matches!(
            BookLoader::load_csv(&path),
            Err(LoaderError::CsvError(_))
        ));
    }

    #[test]
    fn recognizes_index_column_names() {
        assert!(BookLoader::is_index_column(""));
        assert!(BookLoader::is_index_column("  "));
        assert!(BookLoader::is_index_column("Unnamed: 0"));
        assert!(!BookLoader::is_index_column("Book"));
    }
}
