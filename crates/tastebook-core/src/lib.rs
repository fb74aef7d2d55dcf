//! # Tastebook Core
//!
//! The domain layer of the Tastebook backend.
//! This crate contains pure business logic with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod reviews;
pub mod social;
