//! Category Classifier (stage 7)
//! Labels each record with a severity category from the crime description.

use log::{debug, info};
use polars::prelude::*;
use std::collections::BTreeMap;

use crate::data::schema::{self, CRIME_CATEGORY, CRM_CD_DESC};
use crate::pipeline::PipelineError;
use crate::vocab;

/// Append the Crime_Category column from the controlled vocabulary.
///
/// Exact string match only; any description outside the vocabulary is "Other".
pub fn classify(df: &DataFrame) -> Result<DataFrame, PipelineError> {
    let categories: Vec<String> = schema::column_values(df, CRM_CD_DESC)?
        .iter()
        .map(|desc| vocab::crime_category(desc).to_string())
        .collect();

    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for category in &categories {
        *counts.entry(category.as_str()).or_default() += 1;
    }
    for (category, count) in &counts {
        debug!("category {category}: {count} records");
    }
    let distinct = counts.len();

    let mut out = df.clone();
    out.with_column(Column::new(CRIME_CATEGORY.into(), categories))?;

    info!("crime categories assigned ({distinct} distinct)");
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptions_map_with_other_fallback() {
        let df = DataFrame::new(vec![Column::new(
            CRM_CD_DESC.into(),
            vec!["BURGLARY", "NOT-A-REAL-CRIME", "ROBBERY", "Unknown"],
        )])
        .unwrap();

        let out = classify(&df).unwrap();
        assert_eq!(
            schema::column_values(&out, CRIME_CATEGORY).unwrap(),
            vec!["Property Crime", "Other", "Violent Crime", "Other"]
        );
    }
}
