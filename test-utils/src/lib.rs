//! Marriagebot Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the marriagebot
//! application. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases and factories for the Serenity objects the proposal flow consumes.
//!
//! # Overview
//!
//! The test utilities consist of these components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **serenity**: Factories for Serenity model objects
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_lock_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_lock_tables()
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod serenity;
