pub use super::guild_template::Entity as GuildTemplate;
