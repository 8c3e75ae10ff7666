//! HTTP request handlers.

pub mod auth_handler;
pub mod video_handler;

pub use auth_handler::auth_routes;
pub use video_handler::video_routes;
