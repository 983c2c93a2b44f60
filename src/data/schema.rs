//! Dataset Schema Module
//! Column names for the raw LAPD crime table and the derived columns,
//! plus small helpers shared by the cleaning stages.

use polars::prelude::*;

/// Sentinel written in place of missing or unmappable values.
pub const UNKNOWN: &str = "Unknown";
/// Sentinel written in place of absent or unmatched MO descriptions.
pub const NONE_SENTINEL: &str = "None";

// Raw columns referenced by the cleaning stages.
pub const DR_NO: &str = "DR_NO";
pub const DATE_RPTD: &str = "Date Rptd";
pub const DATE_OCC: &str = "DATE OCC";
pub const TIME_OCC: &str = "TIME OCC";
pub const CRM_CD_DESC: &str = "Crm Cd Desc";
pub const MOCODES: &str = "Mocodes";
pub const VICT_AGE: &str = "Vict Age";
pub const VICT_SEX: &str = "Vict Sex";
pub const VICT_DESCENT: &str = "Vict Descent";

// Derived columns appended by the pipeline.
pub const DAY_OF_WEEK: &str = "DayOfWeek";
pub const MONTH: &str = "Month";
pub const VICT_AGE_GROUP: &str = "Vict Age Group";
pub const CRIME_CATEGORY: &str = "Crime_Category";
pub const MO_DESC_PREFIX: &str = "MO_Desc_";

/// The 28 columns every raw crime extract must carry, in dataset order.
pub const REQUIRED_COLUMNS: [&str; 28] = [
    "DR_NO",
    "Date Rptd",
    "DATE OCC",
    "TIME OCC",
    "AREA",
    "AREA NAME",
    "Rpt Dist No",
    "Part 1-2",
    "Crm Cd",
    "Crm Cd Desc",
    "Mocodes",
    "Vict Age",
    "Vict Sex",
    "Vict Descent",
    "Premis Cd",
    "Premis Desc",
    "Weapon Used Cd",
    "Weapon Desc",
    "Status",
    "Status Desc",
    "Crm Cd 1",
    "Crm Cd 2",
    "Crm Cd 3",
    "Crm Cd 4",
    "LOCATION",
    "Cross Street",
    "LAT",
    "LON",
];

/// Zero-pad an MO code to the canonical 4-character form ("400" -> "0400").
pub fn zero_pad_code(code: &str) -> String {
    format!("{:0>4}", code.trim())
}

/// Read a column as owned text values, casting non-text dtypes.
///
/// Nulls come back as the "Unknown" sentinel; after the missing-value
/// stage there are none left to map.
pub fn column_values(df: &DataFrame, name: &str) -> PolarsResult<Vec<String>> {
    let col = df.column(name)?.cast(&DataType::String)?;
    let ca = col.str()?;
    Ok(ca
        .into_iter()
        .map(|v| v.unwrap_or(UNKNOWN).to_string())
        .collect())
}
