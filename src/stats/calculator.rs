//! Sales Statistics Module
//! Histogram binning and bestseller ranking over cleaned records.

use crate::data::BookRecord;
use std::cmp::Ordering;

/// Equal-width histogram of the present sales values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SalesHistogram {
    /// `bins + 1` ascending bin edges; empty when there were no values.
    pub edges: Vec<f64>,
    /// Number of values per bin.
    pub counts: Vec<usize>,
}

impl SalesHistogram {
    /// Bin sales over `[min, max]`. Every bin is half-open except the last,
    /// which also includes `max`.
    pub fn from_records(records: &[BookRecord], bins: usize) -> Self {
        let values: Vec<f64> = records.iter().filter_map(|r| r.approximate_sales).collect();
        Self::from_values(&values, bins)
    }

    pub fn from_values(values: &[f64], bins: usize) -> Self {
        if values.is_empty() || bins == 0 {
            return Self::default();
        }

        let (mut lo, mut hi) = values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });
        if lo == hi {
            lo -= 0.5;
            hi += 0.5;
        }

        let width = (hi - lo) / bins as f64;
        let edges: Vec<f64> = (0..=bins).map(|i| lo + width * i as f64).collect();

        let mut counts = vec![0usize; bins];
        for &v in values {
            let idx = (((v - lo) / width).floor() as usize).min(bins - 1);
            counts[idx] += 1;
        }

        Self { edges, counts }
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn bin_width(&self) -> f64 {
        match self.edges.as_slice() {
            [first, second, ..] => second - first,
            _ => 0.0,
        }
    }

    /// Center of each bin, in the same unit as the edges.
    pub fn centers(&self) -> Vec<f64> {
        self.edges.windows(2).map(|w| (w[0] + w[1]) / 2.0).collect()
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

/// A ranked bestseller.
#[derive(Debug, Clone, PartialEq)]
pub struct TopBook {
    pub book: String,
    pub sales: f64,
}

/// The `n` records with the largest sales, largest first. Records without
/// sales are skipped; ties keep their original row order.
pub fn top_sellers(records: &[BookRecord], n: usize) -> Vec<TopBook> {
    let mut ranked: Vec<TopBook> = records
        .iter()
        .filter_map(|r| {
            r.approximate_sales.map(|sales| TopBook {
                book: r.book.clone(),
                sales,
            })
        })
        .collect();

    // sort_by is stable
    ranked.sort_by(|a, b| b.sales.partial_cmp(&a.sales).unwrap_or(Ordering::Equal));
    ranked.truncate(n);
    ranked
}
