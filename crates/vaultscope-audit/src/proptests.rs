//! Property-based tests for the aggregation pipeline.
