//! # Tastebook Shared
//!
//! Request/response types shared between the HTTP layer and any client code.

pub mod dto;
pub mod response;

pub use response::ErrorResponse;
