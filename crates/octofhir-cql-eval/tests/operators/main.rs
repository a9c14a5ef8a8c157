//! Operator integration tests for CQL evaluation
//!
//! These tests verify operator behavior including:
//! - Null handling of operands and elements per operator
//! - Declared-width numeric accumulation
//! - Error kinds and messages
//! - Purity of repeated evaluation

mod dispatch;
