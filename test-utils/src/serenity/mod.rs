//! Test factories for creating Serenity API objects.
//!
//! These factories create valid Serenity structs by deserializing JSON, simulating
//! what Discord's gateway would send.
//!
//! # Usage
//!
//! ```rust,ignore
//! use serenity::all::ChannelType;
//! use test_utils::serenity::{
//!     channel::TestChannelBuilder, guild::TestGuildBuilder, role::test_role_json,
//! };
//!
//! let guild = TestGuildBuilder::new(1, "Source")
//!     .role(test_role_json(1, "@everyone", 0, 0, 0, false))
//!     .role(test_role_json(10, "Mod", 0x3498DB, 2, 8, false))
//!     .channel(TestChannelBuilder::new(1, 20, "General", ChannelType::Category).json())
//!     .build();
//! ```
//!
//! # Available Factories
//!
//! - `guild::create_test_guild` / `guild::TestGuildBuilder` - Serenity Guild objects
//! - `role::create_test_role` / `role::test_role_json` - Serenity Role objects
//! - `channel::create_test_channel` / `channel::TestChannelBuilder` - Serenity GuildChannel objects

pub mod channel;
pub mod guild;
pub mod role;

pub use channel::create_test_channel;
pub use guild::create_test_guild;
pub use role::create_test_role;
