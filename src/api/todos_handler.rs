use actix_web::{web, HttpResponse};
use serde_json::json;

use super::errors::TodoApiError;
use crate::api::dtos::todo::{CreateTodoDTO, UpdateTodoDTO};
use crate::models::Pool;
use crate::repository;

/// Create a new todo
pub async fn create_todo(
    request_data: web::Json<CreateTodoDTO>,
    pool: web::Data<Pool>,
) -> Result<HttpResponse, actix_web::Error> {
    let new_todo = request_data.into_inner().validate()?;

    let inserted = web::block(move || {
        let conn = &mut pool.get()?;
        repository::create(conn, new_todo)
    })
    .await??;

    Ok(HttpResponse::Created().json(&inserted))
}

/// Get all todos
pub async fn get_todos(pool: web::Data<Pool>) -> Result<HttpResponse, actix_web::Error> {
    let list = web::block(move || {
        let conn = &mut pool.get()?;
        repository::list(conn)
    })
    .await??;

    Ok(HttpResponse::Ok().json(&list))
}

/// Get a single todo by id
pub async fn get_todo(
    params: web::Path<String>,
    pool: web::Data<Pool>,
) -> Result<HttpResponse, actix_web::Error> {
    let todo_id = parse_id(&params.into_inner())?;

    let todo = web::block(move || {
        let conn = &mut pool.get()?;
        repository::get(conn, todo_id)
    })
    .await??;

    Ok(HttpResponse::Ok().json(&todo))
}

/// Update the fields present in the request body, leaving the rest unchanged
pub async fn update_todo(
    params: web::Path<String>,
    request_data: web::Json<UpdateTodoDTO>,
    pool: web::Data<Pool>,
) -> Result<HttpResponse, actix_web::Error> {
    let todo_id = parse_id(&params.into_inner())?;

    let changes = request_data.into_inner().validate()?;

    let updated = web::block(move || {
        let conn = &mut pool.get()?;
        repository::update(conn, todo_id, changes)
    })
    .await??;

    Ok(HttpResponse::Ok().json(&updated))
}

/// Delete a todo
pub async fn delete_todo(
    params: web::Path<String>,
    pool: web::Data<Pool>,
) -> Result<HttpResponse, actix_web::Error> {
    let todo_id = parse_id(&params.into_inner())?;

    web::block(move || {
        let conn = &mut pool.get()?;
        repository::delete(conn, todo_id)
    })
    .await??;

    Ok(HttpResponse::Ok().json(json!({ "message": "Todo deleted" })))
}

/// A path segment that does not parse as an id cannot name an existing todo,
/// so it gets the same 404 as an unknown id.
fn parse_id(raw: &str) -> Result<i32, TodoApiError> {
    raw.parse()
        .map_err(|_| TodoApiError::NotFound(String::from("Todo")))
}
