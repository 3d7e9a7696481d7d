//! Rules module - pattern catalog, scan engine, and result types

pub mod catalog;
pub mod engine;
pub mod results;

pub use catalog::{catalog, Rule, RuleDef};
pub use engine::ScanEngine;
pub use results::{Finding, ScanResults, Severity, SeverityCounts};
