//! Guild Cloner Test Utils
//!
//! Provides shared testing utilities for the guild cloner. This crate offers a builder
//! pattern for creating test contexts with in-memory SQLite databases, factories for
//! stored rows, and factories for Serenity models.
//!
//! # Overview
//!
//! The test utilities consist of these main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory** / **fixture**: Stored and in-memory `guild_template` rows
//! - **serenity**: Serenity `Guild`, `Role` and `GuildChannel` objects built from JSON
//!
//! # Usage
//!
//! Use `TestBuilder` to create a test context with the required database tables:
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_template_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_template_tables()
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
pub mod factory;
pub mod fixture;
pub mod serenity;
