//! Output formatting
//!
//! Human-readable console reports and JSON report files.

pub mod json;
pub mod text;
