//! Shared test utilities for mailbrief integration tests.
//!
//! This module provides:
//! - `TestHarness` wiring an in-memory database to a pipeline
//! - Scripted analyzers that succeed or fail per subject

pub mod analyzers;
pub mod harness;

pub use analyzers::ScriptedAnalyzer;
pub use harness::TestHarness;
