//! Core data types for the Javelin build reactor.
//!
//! This crate defines the shared model consumed by the planning crates:
//! project coordinates, declared dependencies, dependency-management tables,
//! models under assembly, and the provenance arena that records which file's
//! content became visible through which import.
//!
//! This crate is intentionally free of async code and file I/O.

pub mod coordinate;
pub mod dependency;
pub mod errors;
pub mod management;
pub mod model;
pub mod provenance;
