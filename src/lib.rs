//! Performance scoring and hierarchical rollup engine.
//!
//! Scores institutional performance indicators against yearly targets,
//! classifies them into performance bands, and rolls scores up the
//! plan → objective → goal → indicator hierarchy. Pure functions of an
//! immutable [`model::PlanSnapshot`]; no I/O, no persistence.

pub mod ctx;
pub mod eval;
pub mod math;
pub mod model;
pub mod report;
pub mod schema;
pub mod score;

pub use ctx::{EvalCtx, EvalOptions};
pub use eval::evaluate;
