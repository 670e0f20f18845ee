//! Request handlers for transformation endpoints.
//!
//! Handlers are plain functions over decoded request bodies so they can be
//! exercised without a running server; the route layer only does extraction.

mod convert;
mod path;
mod structure;

pub use convert::*;
pub use path::*;
pub use structure::*;

use serde::Serialize;

/// Success envelope shared by every transformation endpoint.
#[derive(Debug, Serialize)]
pub struct ResultResponse<T> {
    pub result: T,
}

impl<T> ResultResponse<T> {
    pub fn new(result: T) -> Self {
        Self { result }
    }
}
