// WorkflowView - app/mod.rs
//
// Application layer: orchestration of a scan.
// Dependencies: core, platform, util.

pub mod scan;
