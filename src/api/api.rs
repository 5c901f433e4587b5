use actix_web::{self, web, App, HttpServer};
use diesel::r2d2::ConnectionManager;
use diesel::SqliteConnection;
use r2d2::Pool;

use crate::config::{API_URL, DATABASE_URL};
use crate::{models, repository};

use super::{errors::TodoApiError, todos_handler};

/// Route table for the todo resource: one route per (verb, path) pair.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/todo")
            .route("", web::post().to(todos_handler::create_todo))
            .route("", web::get().to(todos_handler::get_todos))
            .route("/{id}", web::get().to(todos_handler::get_todo))
            .route("/{id}", web::put().to(todos_handler::update_todo))
            .route("/{id}", web::delete().to(todos_handler::delete_todo)),
    );
}

/// Malformed or absent JSON bodies get the service's `{error}` shape
/// instead of actix's default error rendering.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| TodoApiError::BadRequest(err.to_string()).into())
}

#[actix_web::main]
pub async fn start_server() -> std::io::Result<()> {
    dotenv::dotenv().ok();

    std::env::set_var(
        "RUST_LOG",
        "todo_api=debug,actix_web=info,actix_server=info",
    );

    env_logger::init();

    let manager = ConnectionManager::<SqliteConnection>::new(DATABASE_URL.as_str());

    let pool: models::Pool = Pool::builder()
        .build(manager)
        .expect("Failed to open todo database");

    {
        let conn = &mut pool.get().expect("Failed to check out a connection");
        repository::init_schema(conn).expect("Failed to create todos table");
    }

    log::info!("Starting server on {}", API_URL.as_str());

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .app_data(json_config())
            .configure(routes)
    })
    .workers(1) // Num of threads
    .bind(API_URL.as_str())?
    .run()
    .await
}
