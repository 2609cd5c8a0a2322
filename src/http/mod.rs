//! HTTP transport and response error classification.

mod error;
mod transport;

pub use error::{check_status, ApiError};
pub use transport::{Credentials, SendOptions, Transport};
