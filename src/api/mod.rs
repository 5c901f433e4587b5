pub mod api;
pub mod dtos;
pub mod errors;
pub mod todos_handler;
