//! Certification rows for the `certifications` table.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One certification entry on a user's portfolio.
///
/// `langscore` is a language-test score attached to some certifications;
/// the column is nullable and most rows leave it empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CertificationRow {
    pub user_id: Uuid,
    pub title: String,
    pub license: u32,
    pub issued_date: NaiveDate,
    pub issuer: String,
    pub langscore: Option<u32>,
    pub author: Option<String>,
}
