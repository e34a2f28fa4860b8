use std::collections::HashMap;

/// Translation table from source guild IDs to destination guild IDs.
///
/// Created once per replication run and seeded with the guild ID pair, because
/// overwrites addressed to the "everyone" role use the guild ID as their target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdRemapper {
    map: HashMap<u64, u64>,
}

impl IdRemapper {
    /// Creates a remapper seeded with `source_guild_id -> destination_guild_id`.
    pub fn seeded(source_guild_id: u64, destination_guild_id: u64) -> Self {
        let mut map = HashMap::new();
        map.insert(source_guild_id, destination_guild_id);

        Self { map }
    }

    /// Records that `source_id` was recreated as `destination_id`.
    pub fn set(&mut self, source_id: u64, destination_id: u64) {
        self.map.insert(source_id, destination_id);
    }

    /// Returns the destination ID for `source_id`, or `source_id` itself if unmapped.
    pub fn resolve(&self, source_id: u64) -> u64 {
        self.get(source_id).unwrap_or(source_id)
    }

    /// Returns the destination ID for `source_id` only if it was mapped.
    pub fn get(&self, source_id: u64) -> Option<u64> {
        self.map.get(&source_id).copied()
    }

    /// Number of mapped IDs, including the guild seed.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
