// src/presentation/http/mod.rs
pub mod controllers;
pub mod error;
pub mod extractors;
pub mod flash;
pub mod forms;
pub mod middleware;
pub mod routes;
pub mod session;
pub mod state;
pub mod templates;
pub mod views;

pub use routes::build_router;
pub use state::{HttpState, WebSettings};
