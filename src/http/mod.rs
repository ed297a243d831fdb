//! HTTP transport layer for the demo service
//!
//! Provides the route handlers for the greeting page, the health and info
//! endpoints, and the random-fact API.

pub mod handlers;
