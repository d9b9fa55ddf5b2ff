//! Dataset ingestion: delimited text to validated sample points.
//!
//! Parsing is deliberately forgiving. Structural problems yield an
//! empty dataset and row-level problems drop the row; neither is
//! surfaced as a hard error, so a malformed file degrades to "fewer
//! points" rather than a crash.

/// Priority-ordered header synonym matching for the five semantic columns.
pub mod columns;

/// Synthetic fallback dataset used when no CSV resource can be read.
pub mod fallback;

/// Startup/reload systems that read CSV text and swap the dataset wholesale.
pub mod dataset_loader;

/// Row parsing, validation, and the elevation-to-depth sign convention.
pub mod normalise;

/// Raw delimited text to header list plus ordered field maps.
pub mod table;
