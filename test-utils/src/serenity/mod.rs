//! Test factories for creating Serenity API objects.
//!
//! These factories create valid Serenity objects by deserializing JSON, simulating
//! what Discord's API would return.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::create_test_user;
//!
//! #[tokio::test]
//! async fn test_proposal() {
//!     let initiator = create_test_user(1, "initiator", false);
//!     let target = create_test_user(2, "target", false);
//!
//!     // Use in your tests...
//! }
//! ```
//!
//! # Available Factories
//!
//! - `user::create_test_user` - Create Serenity User objects

pub mod user;

pub use user::create_test_user;
