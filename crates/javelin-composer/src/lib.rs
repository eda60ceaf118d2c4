//! Model composition: merging imported dependency management into a target
//! model.
//!
//! A model's effective dependency-management table combines its own
//! declarations with tables imported from other models. The importer keeps
//! first-declaration-wins semantics and, when location tracking is enabled,
//! records which import made each file's constraints visible, so diagnostics
//! can explain where a managed version came from.

pub mod diagnostics;
pub mod importer;
