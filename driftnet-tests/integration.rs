//! Integration tests for Driftnet
//!
//! These tests verify the flow from raw provider listings through the
//! classification engine to the final catalog views, including the
//! concurrent provider fan-out and its degradation behavior.

#[path = "integration/catalog_pipeline.rs"]
mod catalog_pipeline;

#[path = "integration/provider_degradation.rs"]
mod provider_degradation;
