//! Batch fixer for VitePress component docs.
//!
//! Rewrites `<script setup>` blocks that import `onMounted` from `vue` into
//! plain scripts that register a `DOMContentLoaded` listener behind a
//! `typeof window` guard. Files are rewritten in place only when their content
//! changes.
//!
//! - **[`core`]**: Pure, deterministic logic (substitution rules, newline
//!   normalization, outcome types). No I/O.
//! - **[`io`]**: Side-effecting operations (config, discovery, file rewrite).
//!
//! [`run`] drives a whole directory and [`report`] renders the result.

pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod report;
pub mod run;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
