//! File output formats.

/// CSV export of batch evaluations.
pub mod export;
