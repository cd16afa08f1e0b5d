use crate::notify::Alert;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PossibleHabit {
    pub id: String,
    pub title: String,
}

/// One day's habit configuration as returned by `GET /day`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayInfo {
    pub possible_habits: Vec<PossibleHabit>,
    #[serde(default)]
    pub completed_habits: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct DayParams {
    pub date: String,
}

#[derive(Debug, Deserialize)]
pub struct HabitParams {
    pub date: String,
    pub habit_id: String,
}

#[derive(Debug, Deserialize)]
pub struct DeleteRequest {
    pub choice: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HabitRow {
    pub id: String,
    pub title: String,
    pub checked: bool,
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayView {
    pub date: String,
    pub loading: bool,
    pub is_date_in_past: bool,
    pub day_of_week: String,
    pub day_and_month: String,
    pub progress: u8,
    pub habits: Vec<HabitRow>,
    pub empty: bool,
    pub past_notice: Option<&'static str>,
    pub alerts: Vec<Alert>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_info_reads_camel_case_payload() {
        let payload = r#"{
            "possibleHabits": [{"id": "a", "title": "Read"}, {"id": "b", "title": "Run"}],
            "completedHabits": ["a"]
        }"#;

        let info: DayInfo = serde_json::from_str(payload).unwrap();
        assert_eq!(info.possible_habits.len(), 2);
        assert_eq!(info.possible_habits[1].title, "Run");
        assert_eq!(info.completed_habits, vec!["a".to_string()]);
    }

    #[test]
    fn day_info_tolerates_missing_completed_list() {
        let info: DayInfo = serde_json::from_str(r#"{"possibleHabits": []}"#).unwrap();
        assert!(info.completed_habits.is_empty());
    }

    #[test]
    fn day_info_rejects_payload_without_habits() {
        assert!(serde_json::from_str::<DayInfo>(r#"{"completedHabits": []}"#).is_err());
    }
}
