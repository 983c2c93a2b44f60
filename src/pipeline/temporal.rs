//! Temporal Normalizer (stage 4)
//! Canonicalizes report/occurrence dates, derives weekday and month names,
//! and converts the military occurrence time to a 12-hour clock.

use chrono::{NaiveDate, NaiveDateTime};
use log::info;
use polars::prelude::*;

use crate::data::schema::{self, DATE_OCC, DATE_RPTD, DAY_OF_WEEK, MONTH, TIME_OCC, UNKNOWN};
use crate::pipeline::PipelineError;

/// Normalize both date columns to MM/DD/YYYY, derive DayOfWeek and Month from
/// the occurrence date, and rewrite TIME OCC as hh:mm AM/PM.
///
/// Unparseable fields become "Unknown"; no row is ever dropped here.
pub fn normalize(df: &DataFrame) -> Result<DataFrame, PipelineError> {
    let occurred: Vec<Option<NaiveDate>> = schema::column_values(df, DATE_OCC)?
        .iter()
        .map(|s| parse_date(s))
        .collect();
    let reported: Vec<Option<NaiveDate>> = schema::column_values(df, DATE_RPTD)?
        .iter()
        .map(|s| parse_date(s))
        .collect();

    let weekdays: Vec<String> = occurred.iter().map(|d| format_date(d, "%A")).collect();
    let months: Vec<String> = occurred.iter().map(|d| format_date(d, "%B")).collect();
    let occ_text: Vec<String> = occurred.iter().map(|d| format_date(d, "%m/%d/%Y")).collect();
    let rptd_text: Vec<String> = reported.iter().map(|d| format_date(d, "%m/%d/%Y")).collect();
    let times: Vec<String> = schema::column_values(df, TIME_OCC)?
        .iter()
        .map(|t| military_to_12h(t))
        .collect();

    let mut out = df.clone();
    out.with_column(Column::new(DATE_OCC.into(), occ_text))?;
    out.with_column(Column::new(DATE_RPTD.into(), rptd_text))?;
    out.with_column(Column::new(TIME_OCC.into(), times))?;
    out.with_column(Column::new(DAY_OF_WEEK.into(), weekdays))?;
    out.with_column(Column::new(MONTH.into(), months))?;

    info!("dates reformatted to MM/DD/YYYY; weekday, month and 12-hour time derived");
    Ok(out)
}

/// Parse a source date field. The feed carries "MM/DD/YYYY hh:mm:ss AM/PM"
/// timestamps; bare-date fallbacks cover re-export of already-cleaned data.
fn parse_date(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%m/%d/%Y %I:%M:%S %p") {
        return Some(dt.date());
    }
    for fmt in ["%m/%d/%Y", "%Y-%m-%d"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }
    None
}

fn format_date(date: &Option<NaiveDate>, fmt: &str) -> String {
    match date {
        Some(d) => d.format(fmt).to_string(),
        None => UNKNOWN.to_string(),
    }
}

/// Convert 4-digit military time text ("1345") to "01:45 PM".
///
/// Malformed input (non-numeric, too long, out-of-range hour or minute) yields
/// "Unknown"; this conversion never fails.
pub fn military_to_12h(raw: &str) -> String {
    let t = raw.trim();
    if t.is_empty() || t.len() > 4 || !t.bytes().all(|b| b.is_ascii_digit()) {
        return UNKNOWN.to_string();
    }
    let padded = format!("{t:0>4}");
    let (hour, minute): (u32, u32) = match (padded[..2].parse(), padded[2..].parse()) {
        (Ok(h), Ok(m)) => (h, m),
        _ => return UNKNOWN.to_string(),
    };
    if hour > 23 || minute > 59 {
        return UNKNOWN.to_string();
    }

    let (hour12, suffix) = match hour {
        0 => (12, "AM"),
        1..=11 => (hour, "AM"),
        12 => (12, "PM"),
        _ => (hour - 12, "PM"),
    };
    format!("{hour12:02}:{minute:02} {suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn military_time_conversion() {
        assert_eq!(military_to_12h("1345"), "01:45 PM");
        assert_eq!(military_to_12h("0000"), "12:00 AM");
        assert_eq!(military_to_12h("1200"), "12:00 PM");
        assert_eq!(military_to_12h("2359"), "11:59 PM");
        // Short forms arrive when the feed stored the time as a number.
        assert_eq!(military_to_12h("330"), "03:30 AM");
        assert_eq!(military_to_12h("9999"), "Unknown");
        assert_eq!(military_to_12h("12a5"), "Unknown");
        assert_eq!(military_to_12h("Unknown"), "Unknown");
        assert_eq!(military_to_12h(""), "Unknown");
    }

    #[test]
    fn dates_and_derivations() {
        let df = DataFrame::new(vec![
            Column::new(
                DATE_OCC.into(),
                vec!["01/08/2020 12:00:00 AM", "garbage", "07/04/2021 03:15:00 PM"],
            ),
            Column::new(
                DATE_RPTD.into(),
                vec!["01/10/2020 12:00:00 AM", "Unknown", "07/05/2021 12:00:00 AM"],
            ),
            Column::new(TIME_OCC.into(), vec!["1345", "abcd", "0000"]),
        ])
        .unwrap();

        let out = normalize(&df).unwrap();
        assert_eq!(
            schema::column_values(&out, DATE_OCC).unwrap(),
            vec!["01/08/2020", "Unknown", "07/04/2021"]
        );
        assert_eq!(
            schema::column_values(&out, DATE_RPTD).unwrap(),
            vec!["01/10/2020", "Unknown", "07/05/2021"]
        );
        assert_eq!(
            schema::column_values(&out, DAY_OF_WEEK).unwrap(),
            vec!["Wednesday", "Unknown", "Sunday"]
        );
        assert_eq!(
            schema::column_values(&out, MONTH).unwrap(),
            vec!["January", "Unknown", "July"]
        );
        assert_eq!(
            schema::column_values(&out, TIME_OCC).unwrap(),
            vec!["01:45 PM", "Unknown", "12:00 AM"]
        );
    }
}
