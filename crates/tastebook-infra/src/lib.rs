//! # Tastebook Infrastructure
//!
//! Concrete implementations of the ports defined in `tastebook-core`:
//! PostgreSQL repositories and the follow-edge store via SeaORM, JWT + Argon2
//! authentication, an in-memory cache, and a governor-based rate limiter.

pub mod auth;
pub mod cache;
pub mod database;
pub mod rate_limit;

pub use auth::{Argon2PasswordService, JwtTokenService};
pub use cache::InMemoryCache;
pub use database::DatabaseConfig;
pub use rate_limit::{InMemoryRateLimiter, RateLimitConfig};
