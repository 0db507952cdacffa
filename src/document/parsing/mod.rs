//! Document parsing utilities
//!
//! This module contains the run-level text extraction and the
//! paragraph classification heuristics.

pub(crate) mod classify;
pub(crate) mod formatting;
