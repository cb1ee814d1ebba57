//! Shared row and record types for the folio workspace.
//!
//! Every row type serializes to the snake_case column layout the tabular
//! store expects, with dates as ISO `YYYY-MM-DD` strings and nullable
//! columns as `Option`.

pub mod award;
pub mod certification;
pub mod education;
pub mod identity;
pub mod profile;
pub mod project;
