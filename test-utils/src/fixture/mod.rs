//! Test fixtures providing reusable test data without database insertion.
//!
//! Unlike factories, fixtures do NOT insert data into the database.
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let template = fixture::guild_template::entity();
//! ```

pub mod guild_template;
