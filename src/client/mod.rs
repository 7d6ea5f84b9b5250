pub mod hooks;
pub mod http_client;

pub use hooks::{LoggingHook, RequestHook};
pub use http_client::HttpClient;
