//! Award rows for the `awards` table.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One award entry on a user's portfolio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AwardRow {
    pub user_id: Uuid,
    pub title: String,
    pub info: Option<String>,
    pub issuer: Option<String>,
    pub date: NaiveDate,
    pub author: Option<String>,
}
