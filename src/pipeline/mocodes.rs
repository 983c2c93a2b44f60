//! MO Expander (stage 6)
//! Expands the space-delimited MO-code string into a uniform set of
//! MO_Desc_N description columns.

use log::info;
use polars::prelude::*;

use crate::data::loader::MoCodebook;
use crate::data::schema::{self, MOCODES, MO_DESC_PREFIX, NONE_SENTINEL};
use crate::pipeline::PipelineError;

/// Expand MO codes into MO_Desc_1..N columns; returns the table and N.
///
/// The column count is fixed table-wide to the maximum token count of any
/// single record; shorter records are right-padded with "None". Two passes:
/// one to expand and find the width, one to materialize the padded columns.
pub fn expand(
    df: &DataFrame,
    codebook: &MoCodebook,
) -> Result<(DataFrame, usize), PipelineError> {
    let expanded: Vec<Vec<String>> = schema::column_values(df, MOCODES)?
        .iter()
        .map(|raw| expand_record(raw, codebook))
        .collect();
    let width = expanded.iter().map(Vec::len).max().unwrap_or(1);

    let mut out = df.clone();
    for slot in 0..width {
        let values: Vec<String> = expanded
            .iter()
            .map(|descs| {
                descs
                    .get(slot)
                    .cloned()
                    .unwrap_or_else(|| NONE_SENTINEL.to_string())
            })
            .collect();
        let name = format!("{}{}", MO_DESC_PREFIX, slot + 1);
        out.with_column(Column::new(name.into(), values))?;
    }

    info!("expanded MO codes into {width} description columns");
    Ok((out, width))
}

/// Expand one record's MO-code field into descriptions.
///
/// A blank or "Unknown" field (case-insensitive) expands to a single "None";
/// codes missing from the codebook expand to "None" as well.
fn expand_record(raw: &str, codebook: &MoCodebook) -> Vec<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("unknown") {
        return vec![NONE_SENTINEL.to_string()];
    }
    trimmed
        .split_whitespace()
        .map(|code| codebook.describe(code))
        .collect()
}
