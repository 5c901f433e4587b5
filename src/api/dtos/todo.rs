use serde::{Deserialize, Serialize};

use crate::api::errors::TodoApiError;
use crate::models::todo_model::{NewTodo, TodoChangeset, MAX_DESCRIPTION_LEN, MAX_TITLE_LEN};

#[derive(Debug, Deserialize, Serialize)]
pub struct CreateTodoDTO {
    pub title: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct UpdateTodoDTO {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
}

impl CreateTodoDTO {
    /// Check the create payload and turn it into an insert row.
    /// `description` defaults to the empty string when absent.
    pub fn validate(self) -> Result<NewTodo, TodoApiError> {
        let title = match self.title {
            Some(title) if !title.is_empty() => title,
            _ => return Err(TodoApiError::BadRequest(String::from("Title is required"))),
        };

        check_title_len(&title)?;

        let description = self.description.unwrap_or_default();

        check_description_len(&description)?;

        Ok(NewTodo::new(title, description))
    }
}

impl UpdateTodoDTO {
    /// Check the update payload and turn it into a partial update row
    /// carrying only the fields that were present.
    ///
    /// An explicitly empty `title` is rejected rather than ignored; omitting
    /// `title` keeps the stored value.
    pub fn validate(self) -> Result<TodoChangeset, TodoApiError> {
        if self.title.is_none() && self.description.is_none() && self.completed.is_none() {
            return Err(TodoApiError::BadRequest(String::from("No data provided")));
        }

        if let Some(title) = &self.title {
            if title.is_empty() {
                return Err(TodoApiError::BadRequest(String::from(
                    "Title cannot be empty",
                )));
            }

            check_title_len(title)?;
        }

        if let Some(description) = &self.description {
            check_description_len(description)?;
        }

        Ok(TodoChangeset {
            title: self.title,
            description: self.description,
            completed: self.completed,
        })
    }
}

fn check_title_len(title: &str) -> Result<(), TodoApiError> {
    if title.len() > MAX_TITLE_LEN {
        return Err(TodoApiError::BadRequest(format!(
            "Title must be at most {} characters",
            MAX_TITLE_LEN
        )));
    }

    Ok(())
}

fn check_description_len(description: &str) -> Result<(), TodoApiError> {
    if description.len() > MAX_DESCRIPTION_LEN {
        return Err(TodoApiError::BadRequest(format!(
            "Description must be at most {} characters",
            MAX_DESCRIPTION_LEN
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_defaults_description_and_completed() {
        let dto: CreateTodoDTO = serde_json::from_str(r#"{"title": "Buy milk"}"#).unwrap();

        let new_todo = dto.validate().unwrap();

        assert_eq!(new_todo.title, "Buy milk");
        assert_eq!(new_todo.description, "");
        assert!(!new_todo.completed);
    }

    #[test]
    fn create_rejects_missing_title() {
        let dto: CreateTodoDTO = serde_json::from_str("{}").unwrap();

        let err = dto.validate().unwrap_err();

        assert_eq!(err.to_string(), "Title is required");
    }

    #[test]
    fn create_rejects_empty_title() {
        let dto: CreateTodoDTO = serde_json::from_str(r#"{"title": ""}"#).unwrap();

        assert!(dto.validate().is_err());
    }

    #[test]
    fn create_rejects_overlong_fields() {
        let dto = CreateTodoDTO {
            title: Some("x".repeat(MAX_TITLE_LEN + 1)),
            description: None,
        };
        assert!(dto.validate().is_err());

        let dto = CreateTodoDTO {
            title: Some(String::from("ok")),
            description: Some("x".repeat(MAX_DESCRIPTION_LEN + 1)),
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn update_rejects_empty_payload() {
        let dto: UpdateTodoDTO = serde_json::from_str("{}").unwrap();

        let err = dto.validate().unwrap_err();

        assert_eq!(err.to_string(), "No data provided");
    }

    #[test]
    fn update_carries_only_present_fields() {
        let dto: UpdateTodoDTO = serde_json::from_str(r#"{"completed": true}"#).unwrap();

        let changes = dto.validate().unwrap();

        assert_eq!(changes.title, None);
        assert_eq!(changes.description, None);
        assert_eq!(changes.completed, Some(true));
    }

    #[test]
    fn update_rejects_explicitly_empty_title() {
        let dto: UpdateTodoDTO = serde_json::from_str(r#"{"title": ""}"#).unwrap();

        let err = dto.validate().unwrap_err();

        assert_eq!(err.to_string(), "Title cannot be empty");
    }
}
