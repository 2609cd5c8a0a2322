pub mod client;
pub mod config;
pub mod http;

pub use client::{Client, RequestOptions};
pub use config::Config;
pub use http::{ApiError, SendOptions, Transport};
