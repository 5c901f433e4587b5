//! Durable storage of todos, one SQLite table.
//!
//! Every write is a single SQL statement, so SQLite's per-statement
//! atomicity makes each operation all-or-nothing: a successful return is
//! durably visible to subsequent reads, a failure leaves nothing behind.

use diesel::prelude::*;

use crate::api::errors::TodoApiError;
use crate::models::todo_model::{NewTodo, Todo, TodoChangeset};

/// Create the todos table if it does not exist. Called once at startup.
pub fn init_schema(conn: &mut SqliteConnection) -> QueryResult<usize> {
    diesel::sql_query(
        "CREATE TABLE IF NOT EXISTS todos (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title VARCHAR(100) NOT NULL,
            description VARCHAR(200) NOT NULL DEFAULT '',
            completed BOOLEAN NOT NULL DEFAULT 0
        )",
    )
    .execute(conn)
}

/// Insert a new todo and return the stored row with its assigned id.
pub fn create(conn: &mut SqliteConnection, new_todo: NewTodo) -> Result<Todo, TodoApiError> {
    use crate::schema::todos::dsl::*;

    let inserted = diesel::insert_into(todos)
        .values(&new_todo)
        .get_result(conn)?;

    Ok(inserted)
}

pub fn get(conn: &mut SqliteConnection, todo_id: i32) -> Result<Todo, TodoApiError> {
    use crate::schema::todos::dsl::*;

    let todo = todos
        .find(todo_id)
        .first::<Todo>(conn)
        .optional()?
        .ok_or_else(|| TodoApiError::NotFound(String::from("Todo")))?;

    Ok(todo)
}

/// All todos in insertion order.
pub fn list(conn: &mut SqliteConnection) -> Result<Vec<Todo>, TodoApiError> {
    use crate::schema::todos::dsl::*;

    let todos_list = todos.order(id.asc()).load::<Todo>(conn)?;

    Ok(todos_list)
}

/// Overwrite only the fields present in `changes` and return the updated
/// row. The update and the returned snapshot are one RETURNING statement.
pub fn update(
    conn: &mut SqliteConnection,
    todo_id: i32,
    changes: TodoChangeset,
) -> Result<Todo, TodoApiError> {
    use crate::schema::todos::dsl::*;

    let updated = diesel::update(todos.find(todo_id))
        .set(&changes)
        .get_result::<Todo>(conn)
        .optional()?
        .ok_or_else(|| TodoApiError::NotFound(String::from("Todo")))?;

    Ok(updated)
}

pub fn delete(conn: &mut SqliteConnection, todo_id: i32) -> Result<(), TodoApiError> {
    use crate::schema::todos::dsl::*;

    let delete_count = diesel::delete(todos.find(todo_id)).execute(conn)?;

    if delete_count == 0 {
        return Err(TodoApiError::NotFound(String::from("Todo")));
    }

    Ok(())
}
