use crate::schema::todos;
use diesel::{AsChangeset, Insertable, Queryable};
use serde::{Deserialize, Serialize};

pub const MAX_TITLE_LEN: usize = 100;
pub const MAX_DESCRIPTION_LEN: usize = 200;

/// A stored todo. The serde field names are the wire contract:
/// `{id, title, description, completed}` for both single-entity and
/// collection responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Queryable)]
pub struct Todo {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub completed: bool,
}

/// Insert row. `id` is assigned by the database, never supplied here.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = todos)]
pub struct NewTodo {
    pub title: String,
    pub description: String,
    pub completed: bool,
}

impl NewTodo {
    pub fn new(title: String, description: String) -> Self {
        Self {
            title,
            description,
            completed: false,
        }
    }
}

/// Partial update row. `None` fields are left untouched by the update.
#[derive(Debug, Default, AsChangeset)]
#[diesel(table_name = todos)]
pub struct TodoChangeset {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
}
