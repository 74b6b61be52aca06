//! Server startup: logging and HTTP assembly

pub mod http;
pub mod logging;

pub use http::http_server;
pub use logging::init_logging;
