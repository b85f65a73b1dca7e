//! HTTP surface: `POST /extract` and `GET /health`.

pub mod error;
pub mod handlers;
pub mod server;
pub mod types;

pub use error::ApiError;
pub use server::{router, serve};
