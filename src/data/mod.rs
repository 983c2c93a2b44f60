//! Data access: raw source loading and dataset schema.

pub mod loader;
pub mod schema;

pub use loader::{CrimeLoader, LoaderError, MoCodebook};
