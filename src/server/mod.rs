pub mod http_server;
pub mod response;
pub mod service;

pub use http_server::{HttpServer, ServerHandle};
pub use service::IntakeService;
