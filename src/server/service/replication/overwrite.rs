use crate::server::{
    model::guild::PermissionOverwriteParam, service::replication::remap::IdRemapper,
};

/// Rewrites overwrite targets from source IDs to destination IDs.
///
/// Order, kind and allow/deny bitmasks are preserved. Targets missing from the
/// remapper, such as individual members, are kept as they are and may not exist in
/// the destination guild.
///
/// # Arguments
/// - `overwrites` - Overwrites of a source channel, in Discord order
/// - `remapper` - Source-to-destination ID table of the current run
///
/// # Returns
/// - `Vec<PermissionOverwriteParam>` - Translated overwrites in the same order
pub fn translate_overwrites(
    overwrites: &[PermissionOverwriteParam],
    remapper: &IdRemapper,
) -> Vec<PermissionOverwriteParam> {
    overwrites
        .iter()
        .map(|overwrite| PermissionOverwriteParam {
            target_id: remapper.resolve(overwrite.target_id),
            ..overwrite.clone()
        })
        .collect()
}
