mod client;
mod error;
#[cfg(test)]
pub(crate) mod fake;

pub use client::{HttpBackend, TransitBackend};
pub use error::ApiError;
