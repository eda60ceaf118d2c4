//! Reactor run records and resumption planning.
//!
//! A multi-module build runs its projects in topological order and records
//! one outcome per finished project. When the run ends with failures,
//! [`resume::plan`] turns the record into the minimal instruction set for
//! the next invocation: the project to resume from and the already-built
//! projects that are safe to skip.

pub mod outcome;
pub mod project;
pub mod resume;
