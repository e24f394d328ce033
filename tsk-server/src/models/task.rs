//! Task request bodies and list filter

use serde::Deserialize;

/// Body of `POST /tasks` and `PUT /tasks/{id}`.
///
/// `title` and `description` may be omitted (empty string); `parent_id` may
/// be omitted or `null` for a top-level task.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TaskFields {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category_id: i64,
    pub parent_id: Option<i64>,
}

/// Body of `POST /tasks/reorder`. Array position is the new order.
#[derive(Debug, Clone, Deserialize)]
pub struct ReorderRequest {
    #[serde(default)]
    pub tasks: Vec<ReorderEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ReorderEntry {
    pub id: i64,
    pub parent_id: Option<i64>,
}

/// Raw query string of `GET /tasks`.
#[derive(Debug, Default, Deserialize)]
pub struct TaskFilterParams {
    pub category_id: Option<String>,
}

/// Parsed task list filter.
///
/// An empty `category_id` means no filter. A value that is not an integer
/// can never equal a category id, so it selects nothing rather than failing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TaskFilter {
    #[default]
    All,
    Category(i64),
    Unmatched,
}

impl From<TaskFilterParams> for TaskFilter {
    fn from(params: TaskFilterParams) -> Self {
        match params.category_id.as_deref().map(str::trim) {
            None | Some("") => Self::All,
            Some(raw) => raw.parse().map_or(Self::Unmatched, Self::Category),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_default_description_and_parent() {
        let fields: TaskFields =
            serde_json::from_str(r#"{"title": "Write docs", "category_id": 1}"#).unwrap();
        assert_eq!(fields.description, "");
        assert_eq!(fields.parent_id, None);
    }

    #[test]
    fn fields_default_title() {
        let fields: TaskFields = serde_json::from_str(r#"{"category_id": 1}"#).unwrap();
        assert_eq!(fields.title, "");
        assert_eq!(fields.description, "");
    }

    #[test]
    fn reorder_defaults_to_empty_batch() {
        let req: ReorderRequest = serde_json::from_str("{}").unwrap();
        assert!(req.tasks.is_empty());
    }

    #[test]
    fn fields_require_category() {
        let result = serde_json::from_str::<TaskFields>(r#"{"title": "x", "description": ""}"#);
        assert!(result.is_err());
    }

    #[test]
    fn reorder_entry_null_parent() {
        let req: ReorderRequest =
            serde_json::from_str(r#"{"tasks": [{"id": 2, "parent_id": null}, {"id": 1}]}"#).unwrap();
        assert_eq!(
            req.tasks,
            vec![
                ReorderEntry { id: 2, parent_id: None },
                ReorderEntry { id: 1, parent_id: None },
            ]
        );
    }

    fn filter(raw: Option<&str>) -> TaskFilter {
        TaskFilter::from(TaskFilterParams {
            category_id: raw.map(str::to_owned),
        })
    }

    #[test]
    fn filter_parses_category() {
        assert_eq!(filter(Some("3")), TaskFilter::Category(3));
        assert_eq!(filter(Some(" 3 ")), TaskFilter::Category(3));
    }

    #[test]
    fn filter_empty_means_all() {
        assert_eq!(filter(None), TaskFilter::All);
        assert_eq!(filter(Some("")), TaskFilter::All);
    }

    #[test]
    fn filter_non_numeric_matches_nothing() {
        assert_eq!(filter(Some("work")), TaskFilter::Unmatched);
    }
}
