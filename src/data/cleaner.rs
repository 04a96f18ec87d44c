//! Data Cleaner Module
//! Turns the raw text columns into typed values: sales text to copy counts,
//! year text to numbers, genre text to a normalized lowercase string.

use crate::data::loader::{BOOK_COL, GENRE_COL, SALES_COL, YEAR_COL};
use once_cell::sync::Lazy;
use polars::prelude::*;
use regex::Regex;
use thiserror::Error;

/// First integer-or-decimal token in a sales description.
static SALES_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+\.?\d*)").unwrap());

/// Sales descriptions are quoted in millions of copies.
pub const SALES_MULTIPLIER: f64 = 1_000_000.0;

/// Largest year magnitude kept; decade arithmetic stays within `i64` below it.
pub const YEAR_LIMIT: f64 = 1e15;

/// Code point of the zero in every run of ten Unicode decimal digits, sorted.
const DECIMAL_ZEROS: [u32; 68] = [
    0x0030, 0x0660, 0x06F0, 0x07C0, 0x0966, 0x09E6, 0x0A66, 0x0AE6,
    0x0B66, 0x0BE6, 0x0C66, 0x0CE6, 0x0D66, 0x0DE6, 0x0E50, 0x0ED0,
    0x0F20, 0x1040, 0x1090, 0x17E0, 0x1810, 0x1946, 0x19D0, 0x1A80,
    0x1A90, 0x1B50, 0x1BB0, 0x1C40, 0x1C50, 0xA620, 0xA8D0, 0xA900,
    0xA9D0, 0xA9F0, 0xAA50, 0xABF0, 0xFF10, 0x104A0, 0x10D30, 0x11066,
    0x110F0, 0x11136, 0x111D0, 0x112F0, 0x11450, 0x114D0, 0x11650, 0x116C0,
    0x11730, 0x118E0, 0x11950, 0x11C50, 0x11D50, 0x11DA0, 0x11F50, 0x16A60,
    0x16AC0, 0x16B50, 0x1D7CE, 0x1D7D8, 0x1D7E2, 0x1D7EC, 0x1D7F6, 0x1E140,
    0x1E2F0, 0x1E4F0, 0x1E950, 0x1FBF0,
];

#[derive(Error, Debug)]
pub enum CleanerError {
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
}

/// One cleaned row of the bestseller table.
#[derive(Debug, Clone, PartialEq)]
pub struct BookRecord {
    pub book: String,
    pub genre: Option<String>,
    pub first_published: Option<f64>,
    pub approximate_sales: Option<f64>,
}

/// Extract an absolute copy count from a free-text sales value.
///
/// Takes the *first* number in the text, so `"Book 2: 5 million"` reads as
/// two million. Text without any digits yields `None`.
pub fn parse_sales(value: &str) -> Option<f64> {
    let token = SALES_NUMBER.captures(value)?.get(1)?;
    let ascii: String = token.as_str().chars().map(to_ascii_digit).collect::<Option<_>>()?;
    let millions: f64 = ascii.parse().ok()?;
    Some(millions * SALES_MULTIPLIER)
}

/// Map a decimal digit from any script (as matched by `\d`) to its ASCII
/// form. The decimal point passes through.
fn to_ascii_digit(c: char) -> Option<char> {
    if c.is_ascii_digit() || c == '.' {
        return Some(c);
    }
    let cp = c as u32;
    let run = DECIMAL_ZEROS.partition_point(|&zero| zero <= cp).checked_sub(1)?;
    let value = cp - DECIMAL_ZEROS[run];
    char::from_digit(value, 10)
}

/// Coerce a year to a number; anything that is not a plain finite number
/// within [`YEAR_LIMIT`] becomes `None`.
pub fn parse_year(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|year| year.is_finite() && year.abs() <= YEAR_LIMIT)
}

/// Lowercase and trim a genre string.
pub fn normalize_genre(value: &str) -> String {
    value.to_lowercase().trim().to_string()
}

/// Handles column cleaning and typed row extraction.
pub struct DataCleaner;

impl DataCleaner {
    /// Clean the sales, year and genre columns. Other columns are left as
    /// loaded; null cells stay null.
    pub fn clean(df: &DataFrame) -> Result<DataFrame, CleanerError> {
        let sales: Vec<Option<f64>> = df
            .column(SALES_COL)?
            .str()?
            .into_iter()
            .map(|v| v.and_then(parse_sales))
            .collect();

        let years: Vec<Option<f64>> = df
            .column(YEAR_COL)?
            .str()?
            .into_iter()
            .map(|v| v.and_then(parse_year))
            .collect();

        let genres: Vec<Option<String>> = df
            .column(GENRE_COL)?
            .str()?
            .into_iter()
            .map(|v| v.map(normalize_genre))
            .collect();

        log::debug!(
            "Cleaned {} rows: {} without sales, {} without year, {} without genre",
            df.height(),
            sales.iter().filter(|v| v.is_none()).count(),
            years.iter().filter(|v| v.is_none()).count(),
            genres.iter().filter(|v| v.is_none()).count(),
        );

        let mut cleaned = df.clone();
        cleaned.with_column(Column::new(SALES_COL.into(), sales))?;
        cleaned.with_column(Column::new(YEAR_COL.into(), years))?;
        cleaned.with_column(Column::new(GENRE_COL.into(), genres))?;
        Ok(cleaned)
    }

    /// Extract typed rows from a cleaned table, preserving row order.
    pub fn records(df: &DataFrame) -> Result<Vec<BookRecord>, CleanerError> {
        let books = df.column(BOOK_COL)?.str()?;
        let genres = df.column(GENRE_COL)?.str()?;
        let years = df.column(YEAR_COL)?.f64()?;
        let sales = df.column(SALES_COL)?.f64()?;

        let records = books
            .into_iter()
            .zip(genres)
            .zip(years)
            .zip(sales)
            .map(|(((book, genre), year), sales)| BookRecord {
                book: book.unwrap_or_default().to_string(),
                genre: genre.map(str::to_string),
                first_published: year,
                approximate_sales: sales,
            })
            .collect();

        Ok(records)
    }
}
