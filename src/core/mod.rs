// src/core/mod.rs

pub mod error;
pub mod net;

pub use error::FetchError;
pub use net::{HttpResponse, HttpTransport, SharedTransport, Transport};
