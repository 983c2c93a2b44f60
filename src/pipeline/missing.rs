//! Missing-Value Normalizer (stage 2)
//! Coerces every column to text and replaces nulls and blank cells with the
//! "Unknown" sentinel, so later stages never branch on null.

use log::info;
use polars::prelude::*;

use crate::data::schema::UNKNOWN;
use crate::pipeline::PipelineError;

/// Fill every null or blank/whitespace-only cell with "Unknown".
///
/// Postcondition (checked): the returned table has zero null cells and every
/// column is a string column.
pub fn fill_missing(df: &DataFrame) -> Result<DataFrame, PipelineError> {
    let mut out = df.clone();
    let mut filled_cells = 0usize;

    for col in df.get_columns() {
        let as_text = col.cast(&DataType::String)?;
        let ca = as_text.str()?;
        let values: Vec<String> = ca
            .into_iter()
            .map(|v| match v {
                Some(s) if !s.trim().is_empty() => s.to_string(),
                _ => {
                    filled_cells += 1;
                    UNKNOWN.to_string()
                }
            })
            .collect();
        out.with_column(Column::new(col.name().clone(), values))?;
    }

    let remaining: usize = out.get_columns().iter().map(|c| c.null_count()).sum();
    if remaining > 0 {
        return Err(PipelineError::Invariant {
            stage: "missing-value normalizer",
            detail: format!("{remaining} null cells remain after fill"),
        });
    }

    info!(
        "filled {} missing or blank cells across {} columns",
        filled_cells,
        out.width()
    );
    Ok(out)
}
