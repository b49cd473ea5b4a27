//! Crate-level tests for tinct-syntax.
