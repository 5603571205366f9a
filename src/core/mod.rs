// WorkflowView - core/mod.rs
//
// Core business logic layer.
// Dependencies: regex and the util layer only.
// Must NOT depend on: platform, app, or the filesystem directly.

pub mod filter;
pub mod model;
pub mod scan;
