use std::time::Duration;

use crate::server::{
    error::replication::ReplicationError,
    model::{
        guild::{ChannelKind, GuildSnapshot},
        replication::{CloneOptions, PhaseKind},
    },
    service::replication::{
        call::CallPolicy,
        clone::CloneService,
        test::{
            fake::{FakeDiscord, RecordingProgress, FIRST_CREATED_ID},
            fixture,
        },
    },
};

const SOURCE_ID: u64 = 1;
const DESTINATION_ID: u64 = 2;
const VIEW_CHANNEL: u64 = 1 << 10;

/// Source guild with one category "General" holding a text channel "chat", a role
/// "Mod" and a managed bot role. "chat" hides itself from everyone except "Mod".
fn general_chat_mod_source() -> GuildSnapshot {
    let mut source = fixture::guild(SOURCE_ID, "Source");

    let mut moderator = fixture::role(10, "Mod", 2);
    moderator.permissions = 8;
    moderator.color = 0x3498DB;
    moderator.hoist = true;
    source.roles = vec![
        fixture::role(SOURCE_ID, "@everyone", 0),
        moderator,
        fixture::managed_role(11, "Bot", 1),
    ];

    let mut chat = fixture::text_channel(21, "chat", Some(20), 0);
    chat.topic = Some("Talk here".to_string());
    chat.overwrites = vec![
        fixture::role_overwrite(SOURCE_ID, 0, VIEW_CHANNEL),
        fixture::role_overwrite(10, VIEW_CHANNEL, 0),
    ];
    source.channels = vec![fixture::category(20, "General", 0), chat];

    source
}

/// Destination guild with two pre-existing channels.
fn destination() -> GuildSnapshot {
    let mut destination = fixture::guild(DESTINATION_ID, "Target");
    destination.roles = vec![fixture::role(DESTINATION_ID, "@everyone", 0)];
    destination.channels = vec![
        fixture::text_channel(30, "old-general", None, 0),
        fixture::voice_channel(31, "old-voice", None, 1),
    ];
    destination
}

fn service(discord: &FakeDiscord) -> CloneService<'_> {
    CloneService::new(discord, discord, CallPolicy::sequential())
}

/// Tests a full clone of the General/chat/Mod guild with every toggle enabled.
///
/// Verifies that "Mod" is created first with its permissions, the destination's
/// channels are wiped, "General" is created without overwrites, and "chat" is
/// created under the new "General" with overwrites retargeted to the destination's
/// everyone role and the new "Mod".
///
/// Expected: Ok with one role, two deletions and two channel creations
#[tokio::test]
async fn clones_general_chat_mod() {
    let discord = FakeDiscord::new().with_guild(destination());
    let progress = RecordingProgress::default();

    let report = service(&discord)
        .clone_guild(
            &general_chat_mod_source(),
            DESTINATION_ID,
            CloneOptions::default(),
            &progress,
        )
        .await
        .unwrap();

    let roles = discord.created_roles();
    assert_eq!(roles.len(), 1);
    assert_eq!(roles[0].name, "Mod");
    assert_eq!(roles[0].permissions, 8);
    assert_eq!(roles[0].color, 0x3498DB);
    assert!(roles[0].hoist);
    let mod_id = FIRST_CREATED_ID;

    assert_eq!(discord.deleted_channels(), vec![30, 31]);

    let channels = discord.created_channels();
    assert_eq!(channels.len(), 2);

    let general = &channels[0];
    assert_eq!(general.name, "General");
    assert_eq!(general.kind, ChannelKind::Category);
    assert!(general.overwrites.is_empty());
    let general_id = FIRST_CREATED_ID + 1;

    let chat = &channels[1];
    assert_eq!(chat.name, "chat");
    assert_eq!(chat.kind, ChannelKind::Text);
    assert_eq!(chat.parent_id, Some(general_id));
    assert_eq!(chat.topic.as_deref(), Some("Talk here"));
    assert_eq!(
        chat.overwrites,
        vec![
            fixture::role_overwrite(DESTINATION_ID, 0, VIEW_CHANNEL),
            fixture::role_overwrite(mod_id, VIEW_CHANNEL, 0),
        ]
    );

    assert!(report.is_complete());
    assert_eq!(report.guild_id, DESTINATION_ID);
    assert_eq!(report.success_count(), 5);
    assert_eq!(
        progress.messages(),
        vec![
            "Starting clone process...",
            "Cloning roles...",
            "Deleting existing channels...",
            "Cloning categories...",
            "Cloning text channels...",
            "Cloning voice channels...",
            "Clone completed successfully!\nServer: Target",
        ]
    );
}

/// Tests the same clone with permission cloning disabled.
///
/// Expected: role created with zero permissions and the channel without overwrites
#[tokio::test]
async fn clones_without_permissions() {
    let discord = FakeDiscord::new().with_guild(destination());
    let progress = RecordingProgress::default();
    let options = CloneOptions {
        clone_permissions: false,
        ..CloneOptions::default()
    };

    let report = service(&discord)
        .clone_guild(&general_chat_mod_source(), DESTINATION_ID, options, &progress)
        .await
        .unwrap();

    let roles = discord.created_roles();
    assert_eq!(roles.len(), 1);
    assert_eq!(roles[0].permissions, 0);

    let channels = discord.created_channels();
    assert_eq!(channels.len(), 2);
    assert!(channels.iter().all(|channel| channel.overwrites.is_empty()));
    assert_eq!(channels[1].parent_id, Some(FIRST_CREATED_ID + 1));

    assert!(report.is_complete());
}

/// Tests that an unknown destination aborts before any mutation.
///
/// Expected: Err(DestinationNotFound), no calls, a single error notification
#[tokio::test]
async fn rejects_unknown_destination() {
    let discord = FakeDiscord::new();
    let progress = RecordingProgress::default();

    let result = service(&discord)
        .clone_guild(
            &general_chat_mod_source(),
            999,
            CloneOptions::default(),
            &progress,
        )
        .await;

    assert_eq!(result, Err(ReplicationError::DestinationNotFound(999)));
    assert!(discord.calls().is_empty());

    let messages = progress.messages();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].starts_with("Error: Destination server 999 not found"));
}

/// Tests that a destination where the bot is not an administrator is rejected.
///
/// Expected: Err(InsufficientPermission), no calls
#[tokio::test]
async fn rejects_destination_without_administrator() {
    let mut target = destination();
    target.administrator = false;
    let discord = FakeDiscord::new().with_guild(target);
    let progress = RecordingProgress::default();

    let result = service(&discord)
        .clone_guild(
            &general_chat_mod_source(),
            DESTINATION_ID,
            CloneOptions::default(),
            &progress,
        )
        .await;

    assert_eq!(
        result,
        Err(ReplicationError::InsufficientPermission {
            guild_id: DESTINATION_ID,
            guild_name: "Target".to_string(),
        })
    );
    assert!(discord.calls().is_empty());
    assert_eq!(progress.messages().len(), 1);
}

/// Tests that disabling channels leaves the destination's channels untouched.
///
/// Expected: only role creation calls, and only the role phase announced
#[tokio::test]
async fn roles_only_keeps_destination_channels() {
    let discord = FakeDiscord::new().with_guild(destination());
    let progress = RecordingProgress::default();
    let options = CloneOptions {
        clone_channels: false,
        ..CloneOptions::default()
    };

    let report = service(&discord)
        .clone_guild(&general_chat_mod_source(), DESTINATION_ID, options, &progress)
        .await
        .unwrap();

    assert_eq!(discord.created_roles().len(), 1);
    assert!(discord.deleted_channels().is_empty());
    assert!(discord.created_channels().is_empty());
    assert_eq!(report.phases.len(), 1);
    assert_eq!(
        progress.messages(),
        vec![
            "Starting clone process...",
            "Cloning roles...",
            "Clone completed successfully!\nServer: Target",
        ]
    );
}

/// Tests that overwrites on the everyone role are retargeted even when roles are
/// not cloned.
///
/// Expected: the everyone overwrite points at the destination guild, the "Mod"
/// overwrite keeps its source ID
#[tokio::test]
async fn seeds_guild_mapping_without_role_phase() {
    let discord = FakeDiscord::new().with_guild(destination());
    let progress = RecordingProgress::default();
    let options = CloneOptions {
        clone_roles: false,
        ..CloneOptions::default()
    };

    service(&discord)
        .clone_guild(&general_chat_mod_source(), DESTINATION_ID, options, &progress)
        .await
        .unwrap();

    assert!(discord.created_roles().is_empty());

    let channels = discord.created_channels();
    assert_eq!(
        channels[1].overwrites,
        vec![
            fixture::role_overwrite(DESTINATION_ID, 0, VIEW_CHANNEL),
            fixture::role_overwrite(10, VIEW_CHANNEL, 0),
        ]
    );
}

/// Tests that a failing role does not stop the rest of the run.
///
/// Expected: the other roles and channels are created, the failure is recorded in
/// the role phase and the terminal message reports it
#[tokio::test]
async fn isolates_entity_failures() {
    let mut source = general_chat_mod_source();
    source.roles.push(fixture::role(12, "Admin", 5));
    source.roles.push(fixture::role(13, "Member", 1));

    let discord = FakeDiscord::new().with_guild(destination()).fail_on("Mod");
    let progress = RecordingProgress::default();

    let report = service(&discord)
        .clone_guild(&source, DESTINATION_ID, CloneOptions::default(), &progress)
        .await
        .unwrap();

    let names: Vec<String> = discord
        .created_roles()
        .into_iter()
        .map(|role| role.name)
        .collect();
    assert_eq!(names, vec!["Admin", "Mod", "Member"]);
    assert_eq!(discord.created_channels().len(), 2);

    let roles = report.phase(PhaseKind::CreateRoles).unwrap();
    assert_eq!(roles.succeeded, vec!["Admin", "Member"]);
    assert_eq!(roles.failed.len(), 1);
    assert_eq!(roles.failed[0].name, "Mod");

    assert!(!report.is_complete());
    assert_eq!(report.failure_count(), 1);
    assert_eq!(
        progress.messages().last().map(String::as_str),
        Some("Clone completed with 1 failures.\nServer: Target")
    );
}

/// Tests that a failed "Mod" leaves its overwrite on "chat" pointing at the source ID.
///
/// Expected: unmapped overwrite target passed through unchanged
#[tokio::test]
async fn failed_role_overwrite_passes_through() {
    let discord = FakeDiscord::new().with_guild(destination()).fail_on("Mod");
    let progress = RecordingProgress::default();

    service(&discord)
        .clone_guild(
            &general_chat_mod_source(),
            DESTINATION_ID,
            CloneOptions::default(),
            &progress,
        )
        .await
        .unwrap();

    let channels = discord.created_channels();
    assert_eq!(
        channels[1].overwrites[1],
        fixture::role_overwrite(10, VIEW_CHANNEL, 0)
    );
}

/// Tests that rate-limited calls are retried under the call policy.
///
/// Expected: run completes without failures after the retries
#[tokio::test(start_paused = true)]
async fn retries_rate_limited_calls() {
    let discord = FakeDiscord::new()
        .with_guild(destination())
        .rate_limit_next(2);
    let progress = RecordingProgress::default();
    let service = CloneService::new(&discord, &discord, CallPolicy::new(Duration::ZERO, 2));

    let report = service
        .clone_guild(
            &general_chat_mod_source(),
            DESTINATION_ID,
            CloneOptions::default(),
            &progress,
        )
        .await
        .unwrap();

    assert!(report.is_complete());
    assert_eq!(discord.created_roles().len(), 1);
    assert_eq!(discord.attempts(), 7);
}

/// Tests that voice channels are clamped to the destination's bitrate ceiling.
///
/// Expected: voice channel created under the new category with 96 kbps
#[tokio::test]
async fn clamps_voice_bitrate_to_destination() {
    let mut source = general_chat_mod_source();
    let mut lounge = fixture::voice_channel(22, "Lounge", Some(20), 1);
    lounge.bitrate = 384_000;
    lounge.user_limit = 10;
    source.channels.push(lounge);

    let discord = FakeDiscord::new().with_guild(destination());
    let progress = RecordingProgress::default();

    service(&discord)
        .clone_guild(&source, DESTINATION_ID, CloneOptions::default(), &progress)
        .await
        .unwrap();

    let channels = discord.created_channels();
    let lounge = channels
        .iter()
        .find(|channel| channel.name == "Lounge")
        .unwrap();
    assert_eq!(lounge.kind, ChannelKind::Voice);
    assert_eq!(lounge.bitrate, Some(96_000));
    assert_eq!(lounge.user_limit, Some(10));
    assert_eq!(lounge.parent_id, Some(FIRST_CREATED_ID + 1));
}
