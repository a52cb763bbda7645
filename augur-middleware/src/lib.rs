#![doc = include_str!("../README.md")]
//! augur-middleware
//!
//! Re-exports for middleware wrappers.

mod builder;
mod cache;

pub use crate::builder::ConnectorBuilder;
pub use crate::cache::{CacheMiddleware, CachingConnector};
