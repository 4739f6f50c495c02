//! Server-side bot logic and HTTP application.
//!
//! The process runs one or two Discord bots next to a small axum application. Both share
//! one database pool and one proposal lock backend.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers
//! - **Service Layer** (`service/`) - Proposals, donator perk checks, and flavor text
//! - **Data Layer** (`data/`) - Database operations over SeaORM entities
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Error types and HTTP response mapping
//! - **Bot** (`bot/`) - Discord client setup and the serenity proposal transport
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state
//! - **Startup** (`startup`) - Database, session, and lock backend initialization
//! - **Router** (`router`) - Axum route configuration

pub mod bot;
pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
