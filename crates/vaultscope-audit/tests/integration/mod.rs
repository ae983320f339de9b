//! Integration test scenarios.

mod audit_pipeline;
mod resilience;
