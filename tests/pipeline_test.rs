//! End-to-end run over a synthetic crime extract: full config-to-export path,
//! Parquet round-trip, and idempotence.

use polars::prelude::*;
use std::fs::{self, File};
use std::path::Path;

use crime_pipeline::config::PipelineConfig;
use crime_pipeline::data::schema::{self, REQUIRED_COLUMNS};
use crime_pipeline::pipeline::{CleaningPipeline, PipelineReport};

fn write_crime_csv(path: &Path) {
    let header = REQUIRED_COLUMNS.join(",");
    // 28 fields per row; record 100 is duplicated with a different payload.
    let rows = [
        "100,01/10/2020 12:00:00 AM,01/08/2020 12:00:00 AM,1345,1,Central,0145,1,510,BURGLARY,0400 0416 9999,34,M,W,101,STREET,200,KNIFE,IC,Invest Cont,510,,,,100 MAIN ST,,34.05,-118.25",
        "100,01/11/2020 12:00:00 AM,01/09/2020 12:00:00 AM,2230,1,Central,0145,1,510,BURGLARY,0400,25,F,H,101,STREET,,,IC,Invest Cont,510,,,,100 MAIN ST,,34.05,-118.25",
        "200,02/02/2021 12:00:00 AM,garbage,abcd,7,Wilshire,0712,2,998,NOT-A-REAL-CRIME,Unknown,34,X,X,502,HOUSE,,,AA,Adult Arrest,998,,,,200 OAK AVE,ELM ST,34.06,-118.30",
        "300,07/05/2021 12:00:00 AM,07/04/2021 12:00:00 AM,0000,3,Southwest,0355,1,210,ROBBERY,,0,F,B,102,SIDEWALK,400,STRONG-ARM,IC,Invest Cont,210,,,,300 PINE RD,,34.00,-118.28",
    ];
    fs::write(path, format!("{header}\n{}\n", rows.join("\n"))).unwrap();
}

fn write_mo_csv(path: &Path) {
    fs::write(
        path,
        "Code,Description\n0400,Force used\n0416,Hit with weapon\n",
    )
    .unwrap();
}

fn run_into(dir: &Path) -> PipelineReport {
    let crime_path = dir.join("crime.csv");
    let mo_path = dir.join("mo_codes.csv");
    write_crime_csv(&crime_path);
    write_mo_csv(&mo_path);

    let config = PipelineConfig {
        crime_data_path: crime_path,
        mo_codes_path: mo_path,
        output_dir: dir.join("out"),
        preview_rows: 5000,
    };
    CleaningPipeline::new(config).run().unwrap()
}

fn reload(path: &Path) -> DataFrame {
    ParquetReader::new(File::open(path).unwrap()).finish().unwrap()
}

#[test]
fn full_run_produces_canonical_dataset() {
    let dir = tempfile::tempdir().unwrap();
    let report = run_into(dir.path());

    assert_eq!(report.rows_loaded, 4);
    assert_eq!(report.duplicates_removed, 1);
    assert_eq!(report.rows_out, 3);
    assert_eq!(report.mo_desc_columns, 3);
    // 28 raw columns + DayOfWeek, Month, Vict Age Group, Crime_Category + 3 MO.
    assert_eq!(report.columns_out, 35);

    let df = reload(&report.parquet_path);
    assert_eq!(df.height(), 3);
    assert_eq!(df.width(), 35);

    // Every column round-trips as text with no nulls.
    for col in df.get_columns() {
        assert_eq!(col.dtype(), &DataType::String, "{}", col.name());
        assert_eq!(col.null_count(), 0, "{}", col.name());
    }

    assert_eq!(
        schema::column_values(&df, "DR_NO").unwrap(),
        vec!["100", "200", "300"]
    );
    assert_eq!(
        schema::column_values(&df, "TIME OCC").unwrap(),
        vec!["01:45 PM", "Unknown", "12:00 AM"]
    );
    assert_eq!(
        schema::column_values(&df, "DATE OCC").unwrap(),
        vec!["01/08/2020", "Unknown", "07/04/2021"]
    );
    assert_eq!(
        schema::column_values(&df, "DayOfWeek").unwrap(),
        vec!["Wednesday", "Unknown", "Sunday"]
    );
    assert_eq!(
        schema::column_values(&df, "Month").unwrap(),
        vec!["January", "Unknown", "July"]
    );
    assert_eq!(
        schema::column_values(&df, "Vict Sex").unwrap(),
        vec!["Male", "Unknown", "Female"]
    );
    assert_eq!(
        schema::column_values(&df, "Vict Descent").unwrap(),
        vec!["White", "Unknown", "Black"]
    );
    // Record 200 had a parsable age but no trusted demographics; record 300
    // carried the zero-age sentinel.
    assert_eq!(
        schema::column_values(&df, "Vict Age Group").unwrap(),
        vec!["Adult (26-35)", "Unknown", "Unknown"]
    );
    assert_eq!(
        schema::column_values(&df, "MO_Desc_1").unwrap(),
        vec!["Force used", "None", "None"]
    );
    assert_eq!(
        schema::column_values(&df, "MO_Desc_2").unwrap(),
        vec!["Hit with weapon", "None", "None"]
    );
    assert_eq!(
        schema::column_values(&df, "MO_Desc_3").unwrap(),
        vec!["None", "None", "None"]
    );
    assert_eq!(
        schema::column_values(&df, "Crime_Category").unwrap(),
        vec!["Property Crime", "Other", "Violent Crime"]
    );
    // Blank source cells became the sentinel, not nulls.
    assert_eq!(
        schema::column_values(&df, "Cross Street").unwrap(),
        vec!["Unknown", "ELM ST", "Unknown"]
    );
}

#[test]
fn preview_export_truncates_to_configured_rows() {
    let dir = tempfile::tempdir().unwrap();
    let report = run_into(dir.path());

    let preview = fs::read_to_string(&report.preview_path).unwrap();
    // Header plus all three rows (fewer than the configured preview cap).
    assert_eq!(preview.lines().count(), 4);
    assert!(preview.lines().next().unwrap().starts_with("DR_NO,"));
}

#[test]
fn reruns_are_byte_identical() {
    let dir_a = tempfile::tempdir().unwrap();
    let dir_b = tempfile::tempdir().unwrap();
    let report_a = run_into(dir_a.path());
    let report_b = run_into(dir_b.path());

    let preview_a = fs::read(&report_a.preview_path).unwrap();
    let preview_b = fs::read(&report_b.preview_path).unwrap();
    assert_eq!(preview_a, preview_b);

    let df_a = reload(&report_a.parquet_path);
    let df_b = reload(&report_b.parquet_path);
    assert!(df_a.equals(&df_b));
}
