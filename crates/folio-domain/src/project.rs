//! Project rows for the `projects` table.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One project entry on a user's portfolio.
///
/// `author` is the display name copied at creation time; it is not kept in
/// sync with later profile renames.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRow {
    pub user_id: Uuid,
    pub title: String,
    pub role: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub author: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_serialize_dates_as_iso_day_strings() {
        let row = ProjectRow {
            user_id: Uuid::new_v4(),
            title: "프로젝트 1".to_owned(),
            role: Some("FE".to_owned()),
            description: Some("목업 프로젝트 설명 1".to_owned()),
            start_date: Some(NaiveDate::from_ymd_opt(2021, 3, 1).unwrap()),
            end_date: Some(NaiveDate::from_ymd_opt(2022, 11, 1).unwrap()),
            author: Some("김민준".to_owned()),
        };
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["start_date"], "2021-03-01");
        assert_eq!(json["end_date"], "2022-11-01");
    }
}
