//! Degree statistics and independence checks.

mod analyzer;

pub use analyzer::GraphAnalyzer;
