//! Transport to the account API.

pub mod routes;

mod http;
mod service;

pub use http::{HttpAccountApi, HttpApiSettings};
pub use service::AccountApi;
#[cfg(test)]
pub use service::MockAccountApi;
