//! SeaORM entity definitions.

pub mod prelude;

pub mod guild_template;
