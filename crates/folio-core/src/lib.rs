//! Cross-cutting runtime pieces shared across folio tools.

pub mod retry;
pub mod tracing;
