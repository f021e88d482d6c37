//! Deterministic, pure logic for the doc fixer.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! strings and return deterministic outputs suitable for tests.

pub mod newline;
pub mod transform;
pub mod types;
