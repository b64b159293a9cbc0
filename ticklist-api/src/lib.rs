//! # Ticklist API Server Library
//!
//! Core functionality for the Ticklist API server.
//!
//! ## Modules
//!
//! - `app`: Application state and router builder
//! - `config`: Configuration management
//! - `cookies`: Session and flash cookie plumbing
//! - `error`: Error handling and HTTP response mapping
//! - `flash`: One-shot user notices
//! - `middleware`: Session resolution and security headers
//! - `routes`: Route handlers

pub mod app;
pub mod config;
pub mod cookies;
pub mod error;
pub mod flash;
pub mod middleware;
pub mod routes;
