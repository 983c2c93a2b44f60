//! Demographic Normalizer (stage 5)
//! Canonicalizes victim age, sex and descent, and derives the age bucket.

use log::info;
use polars::prelude::*;

use crate::data::schema::{
    self, UNKNOWN, VICT_AGE, VICT_AGE_GROUP, VICT_DESCENT, VICT_SEX,
};
use crate::pipeline::PipelineError;
use crate::vocab;

/// Age buckets, left-open/right-closed: lo < age <= hi.
const AGE_BUCKETS: [(f64, f64, &str); 8] = [
    (0.0, 12.0, "Child (0-12)"),
    (12.0, 18.0, "Teen (13-18)"),
    (18.0, 25.0, "Young Adult (19-25)"),
    (25.0, 35.0, "Adult (26-35)"),
    (35.0, 50.0, "Middle Age (36-50)"),
    (50.0, 65.0, "Senior (51-65)"),
    (65.0, 100.0, "Elderly (66-100)"),
    (100.0, 150.0, "Super Elderly (100+)"),
];

/// Normalize victim demographics and append the age-group column.
///
/// When both normalized sex and descent are "Unknown" the age is considered
/// unreliable and forced to "Unknown" before bucketing.
pub fn normalize(df: &DataFrame) -> Result<DataFrame, PipelineError> {
    let mut ages = schema::column_values(df, VICT_AGE)?;
    for age in &mut ages {
        if is_zero(age) {
            *age = UNKNOWN.to_string();
        }
    }

    let sexes: Vec<String> = schema::column_values(df, VICT_SEX)?
        .into_iter()
        .map(normalize_sex)
        .collect();
    let descents: Vec<String> = schema::column_values(df, VICT_DESCENT)?
        .iter()
        .map(|code| vocab::descent_name(code).to_string())
        .collect();

    let mut overridden = 0usize;
    for i in 0..ages.len() {
        if sexes[i] == UNKNOWN && descents[i] == UNKNOWN && ages[i] != UNKNOWN {
            ages[i] = UNKNOWN.to_string();
            overridden += 1;
        }
    }

    let groups: Vec<String> = ages.iter().map(|age| age_group(age).to_string()).collect();

    let mut out = df.clone();
    out.with_column(Column::new(VICT_AGE.into(), ages))?;
    out.with_column(Column::new(VICT_SEX.into(), sexes))?;
    out.with_column(Column::new(VICT_DESCENT.into(), descents))?;
    out.with_column(Column::new(VICT_AGE_GROUP.into(), groups))?;

    info!("victim demographics normalized ({overridden} low-confidence ages discarded)");
    Ok(out)
}

/// Partial sex mapping: blank/X become "Unknown", M/F expand, anything else
/// passes through unchanged. Left open pending vocabulary confirmation.
fn normalize_sex(code: String) -> String {
    match code.as_str() {
        "" | "X" => UNKNOWN.to_string(),
        "M" => "Male".to_string(),
        "F" => "Female".to_string(),
        _ => code,
    }
}

/// True for the "0"/numeric-zero age sentinel the feed uses for no-victim
/// records.
fn is_zero(age: &str) -> bool {
    age.trim().parse::<f64>().map(|v| v == 0.0).unwrap_or(false)
}

/// Bucket an age string; unparseable or out-of-range values map to "Unknown".
pub fn age_group(age: &str) -> &'static str {
    let Ok(value) = age.trim().parse::<f64>() else {
        return UNKNOWN;
    };
    for (lo, hi, label) in AGE_BUCKETS {
        if value > lo && value <= hi {
            return label;
        }
    }
    UNKNOWN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bucket_boundaries_are_right_closed() {
        assert_eq!(age_group("12"), "Child (0-12)");
        assert_eq!(age_group("13"), "Teen (13-18)");
        assert_eq!(age_group("34"), "Adult (26-35)");
        assert_eq!(age_group("101"), "Super Elderly (100+)");
        assert_eq!(age_group("0"), "Unknown");
        assert_eq!(age_group("999"), "Unknown");
        assert_eq!(age_group("-3"), "Unknown");
        assert_eq!(age_group("Unknown"), "Unknown");
    }

    #[test]
    fn sex_mapping_is_partial() {
        assert_eq!(normalize_sex("M".to_string()), "Male");
        assert_eq!(normalize_sex("F".to_string()), "Female");
        assert_eq!(normalize_sex("X".to_string()), "Unknown");
        assert_eq!(normalize_sex("".to_string()), "Unknown");
        // Unmapped codes pass through unchanged.
        assert_eq!(normalize_sex("H".to_string()), "H");
    }

    #[test]
    fn unreliable_demographics_discard_age() {
        let df = DataFrame::new(vec![
            Column::new(VICT_AGE.into(), vec!["34", "34", "0"]),
            Column::new(VICT_SEX.into(), vec!["X", "M", "F"]),
            Column::new(VICT_DESCENT.into(), vec!["X", "W", "B"]),
        ])
        .unwrap();

        let out = normalize(&df).unwrap();
        let groups = schema::column_values(&out, VICT_AGE_GROUP).unwrap();
        // Row 0: sex and descent both Unknown, so age 34 is not trusted.
        assert_eq!(groups, vec!["Unknown", "Adult (26-35)", "Unknown"]);
        assert_eq!(
            schema::column_values(&out, VICT_AGE).unwrap(),
            vec!["Unknown", "34", "Unknown"]
        );
        assert_eq!(
            schema::column_values(&out, VICT_DESCENT).unwrap(),
            vec!["Unknown", "White", "Black"]
        );
    }
}
