//! Deduplicator (stage 3)
//! Drops repeated records by DR_NO, keeping the first occurrence in feed order.

use log::info;
use polars::prelude::*;
use std::collections::HashSet;

use crate::data::schema::{self, DR_NO};
use crate::pipeline::PipelineError;

/// Remove duplicate records by DR_NO; returns the table and the removed count.
///
/// Row order of first-seen records is preserved. Afterwards DR_NO is a unique
/// key.
pub fn drop_duplicates(df: &DataFrame) -> Result<(DataFrame, usize), PipelineError> {
    let ids = schema::column_values(df, DR_NO)?;

    let mut seen = HashSet::with_capacity(ids.len());
    let keep: Vec<bool> = ids.iter().map(|id| seen.insert(id.as_str())).collect();

    let mask = BooleanChunked::from_slice("keep".into(), &keep);
    let deduped = df.filter(&mask)?;
    let removed = df.height() - deduped.height();

    info!("removed {removed} duplicate records by {DR_NO}");
    Ok((deduped, removed))
}
