pub mod client;
pub mod user_agent;

pub use client::build_http_client;
