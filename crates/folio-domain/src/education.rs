//! Education rows for the `educations` table.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One education entry on a user's portfolio. `title` is the school name,
/// matching the column layout shared with the other record tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationRow {
    pub user_id: Uuid,
    pub title: String,
    pub major: String,
    pub grades: u8,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub author: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_serialize_grades_as_number() {
        let row = EducationRow {
            user_id: Uuid::new_v4(),
            title: "서울대학교".to_owned(),
            major: "컴퓨터공학".to_owned(),
            grades: 4,
            start_date: NaiveDate::from_ymd_opt(2018, 3, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2022, 2, 20).unwrap(),
            author: Some("정하은".to_owned()),
        };
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["grades"], 4);
        assert_eq!(json["start_date"], "2018-03-01");
        assert_eq!(json["end_date"], "2022-02-20");
    }
}
