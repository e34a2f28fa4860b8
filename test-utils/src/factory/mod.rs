//! Factory methods for creating stored test data.
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! // Create with defaults
//! let template = factory::create_template(&db).await?;
//!
//! // Using builder pattern for customization
//! let template = factory::guild_template::GuildTemplateFactory::new(&db)
//!     .name("weekly")
//!     .source_guild(123, "Source")
//!     .build()
//!     .await?;
//! ```

pub mod guild_template;
pub mod helpers;

pub use guild_template::create_template;
