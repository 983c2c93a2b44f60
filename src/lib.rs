//! LAPD Crime Data Cleaning & Curation Pipeline
//!
//! A single-run batch pipeline that turns the raw 28-column LAPD crime
//! extract into a canonical, null-free, all-text dataset: missing values
//! filled, duplicates dropped, dates/times normalized, victim demographics
//! canonicalized, MO codes expanded into description columns, and each
//! record labeled with a severity category. The result is persisted as
//! Parquet plus a CSV preview for inspection.

pub mod config;
pub mod data;
pub mod export;
pub mod pipeline;
pub mod vocab;
