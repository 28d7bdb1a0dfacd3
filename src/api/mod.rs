pub mod client;
pub mod operations;

pub use client::{ApiClient, ApiConfig};
pub use operations::Operation;
