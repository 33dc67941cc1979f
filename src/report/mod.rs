//! Report assembly.
//!
//! Turns the five analyzer results into an [`AuditReport`]: status ratings,
//! benchmarks and the weighted total score.

mod scoring;
mod types;

pub use scoring::{build_report, weighted_total};
pub use types::{
    AuditReport, Benchmarks, Categories, Category, CategoryReport, CategoryResults, Status,
};
