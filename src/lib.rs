//! HOSTCODE - Competitive Programming Client
//!
//! This library provides the client core for the HOSTCODE contest platform:
//! browsing contests and problems, registering, submitting solutions and
//! reading judge results.
//!
//! # Features
//!
//! - Contest phase classification with live countdowns
//! - Registration popup state machine gated on agreeing to the terms
//! - Persistent login backed by a cookie jar
//! - Per-status aggregation of judge test results
//!
//! # Architecture
//!
//! - **API**: typed REST client behind the `HostcodeApi` trait
//! - **Services**: page-level flows (thin layer over the API)
//! - **Models**: server payloads and derived values
//! - **Session**: login state and credential storage

pub mod api;
pub mod config;
pub mod constants;
pub mod countdown;
pub mod error;
pub mod models;
pub mod registration;
pub mod render;
pub mod services;
pub mod session;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;
