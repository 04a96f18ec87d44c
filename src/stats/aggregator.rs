//! Genre Trend Aggregator
//! Counts books per (decade, primary genre) and reshapes the counts into a
//! decade-indexed table with one column per genre.

use crate::data::BookRecord;
use polars::prelude::*;
use std::collections::{BTreeMap, BTreeSet};

/// Name of the index column in [`GenreTrends::to_dataframe`].
pub const DECADE_COL: &str = "Decade";

/// First comma-separated token of a normalized genre.
pub fn primary_genre(genre: &str) -> String {
    match genre.split_once(',') {
        Some((first, _)) => first.trim().to_string(),
        None => genre.trim().to_string(),
    }
}

/// Year rounded down to a multiple of ten; `None` when the result does not
/// fit in an `i64`.
pub fn decade(year: f64) -> Option<i64> {
    let tens = (year / 10.0).floor();
    if !tens.is_finite() || tens.abs() >= (i64::MAX / 10) as f64 {
        return None;
    }
    (tens as i64).checked_mul(10)
}

/// Book counts per decade and primary genre, zero-filled.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenreTrends {
    /// Decades in ascending order (table rows).
    pub decades: Vec<i64>,
    /// Primary genres in sorted order (table columns).
    pub genres: Vec<String>,
    /// `counts[row][col]` for `decades[row]` and `genres[col]`.
    pub counts: Vec<Vec<u32>>,
}

impl GenreTrends {
    /// Aggregate records that have both a genre and a year.
    pub fn from_records(records: &[BookRecord]) -> Self {
        let mut grouped: BTreeMap<(i64, String), u32> = BTreeMap::new();
        let mut genre_set: BTreeSet<String> = BTreeSet::new();

        for record in records {
            let year_decade = record.first_published.and_then(decade);
            let (Some(genre), Some(year_decade)) = (&record.genre, year_decade) else {
                continue;
            };
            let genre = primary_genre(genre);
            genre_set.insert(genre.clone());
            *grouped.entry((year_decade, genre)).or_insert(0) += 1;
        }

        let decades: Vec<i64> = grouped
            .keys()
            .map(|(d, _)| *d)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let genres: Vec<String> = genre_set.into_iter().collect();

        let counts = decades
            .iter()
            .map(|&d| {
                genres
                    .iter()
                    .map(|g| grouped.get(&(d, g.clone())).copied().unwrap_or(0))
                    .collect()
            })
            .collect();

        log::debug!(
            "Genre trends: {} decades x {} genres",
            decades.len(),
            genres.len()
        );

        Self {
            decades,
            genres,
            counts,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.decades.is_empty()
    }

    /// Count for one cell; unknown decades or genres read as zero.
    pub fn count(&self, decade: i64, genre: &str) -> u32 {
        let row = self.decades.iter().position(|&d| d == decade);
        let col = self.genres.iter().position(|g| g == genre);
        match (row, col) {
            (Some(r), Some(c)) => self.counts[r][c],
            _ => 0,
        }
    }

    /// `(decade, count)` points for one genre, in decade order.
    pub fn series(&self, genre: &str) -> Vec<(i64, u32)> {
        if !self.genres.iter().any(|g| g == genre) {
            return Vec::new();
        }
        self.decades
            .iter()
            .map(|&d| (d, self.count(d, genre)))
            .collect()
    }

    /// The table as a DataFrame: a `Decade` column plus one count column per
    /// genre.
    pub fn to_dataframe(&self) -> PolarsResult<DataFrame> {
        let mut columns = Vec::with_capacity(self.genres.len() + 1);
        columns.push(Column::new(DECADE_COL.into(), self.decades.clone()));

        for (col, genre) in self.genres.iter().enumerate() {
            let values: Vec<u32> = self.counts.iter().map(|row| row[col]).collect();
            columns.push(Column::new(genre.as_str().into(), values));
        }

        DataFrame::new(columns)
    }
}
