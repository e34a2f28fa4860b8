use crate::server::{
    model::replication::{CloneOptions, PhaseKind},
    service::replication::{
        call::CallPolicy,
        driver::PhaseDriver,
        test::{
            fake::{FakeDiscord, FIRST_CREATED_ID},
            fixture,
        },
    },
};

/// Tests that the remapper holds the guild seed plus one entry per created role.
///
/// Expected: length 1 + 3, each source role resolving to its new ID
#[tokio::test]
async fn role_phase_fills_remapper() {
    let mut source = fixture::guild(1, "Source");
    source.roles = vec![
        fixture::role(1, "@everyone", 0),
        fixture::role(10, "Admin", 3),
        fixture::role(11, "Mod", 2),
        fixture::role(12, "Member", 1),
        fixture::managed_role(13, "Bot", 4),
    ];
    let destination = fixture::guild(2, "Target");
    let discord = FakeDiscord::new();

    let mut driver = PhaseDriver::new(
        &discord,
        CallPolicy::sequential(),
        &source,
        &destination,
        CloneOptions::default(),
    );
    let report = driver.run_phase(PhaseKind::CreateRoles).await;

    assert_eq!(report.succeeded, vec!["Admin", "Mod", "Member"]);

    let remapper = driver.remapper();
    assert_eq!(remapper.len(), 4);
    assert_eq!(remapper.get(1), Some(2));
    assert_eq!(remapper.get(10), Some(FIRST_CREATED_ID));
    assert_eq!(remapper.get(11), Some(FIRST_CREATED_ID + 1));
    assert_eq!(remapper.get(12), Some(FIRST_CREATED_ID + 2));
    assert_eq!(remapper.get(13), None);
}

/// Tests that a failed role is not registered in the remapper.
///
/// Expected: length 1 + 1
#[tokio::test]
async fn failed_role_is_not_registered() {
    let mut source = fixture::guild(1, "Source");
    source.roles = vec![fixture::role(10, "Admin", 3), fixture::role(11, "Mod", 2)];
    let destination = fixture::guild(2, "Target");
    let discord = FakeDiscord::new().fail_on("Admin");

    let mut driver = PhaseDriver::new(
        &discord,
        CallPolicy::sequential(),
        &source,
        &destination,
        CloneOptions::default(),
    );
    let report = driver.run_phase(PhaseKind::CreateRoles).await;

    assert_eq!(report.failed.len(), 1);
    assert_eq!(driver.remapper().len(), 2);
    assert_eq!(driver.remapper().get(10), None);
}

/// Tests parent resolution for a channel whose category was recreated and the
/// fallback for a channel whose category was not.
///
/// Expected: "chat" under the new "General", "logs" without a parent
#[tokio::test]
async fn resolves_parent_or_falls_back() {
    let mut source = fixture::guild(1, "Source");
    source.channels = vec![
        fixture::category(20, "General", 0),
        fixture::category(40, "Staff", 1),
        fixture::text_channel(21, "chat", Some(20), 0),
        fixture::text_channel(41, "logs", Some(40), 0),
    ];
    let destination = fixture::guild(2, "Target");
    let discord = FakeDiscord::new().fail_on("Staff");

    let mut driver = PhaseDriver::new(
        &discord,
        CallPolicy::sequential(),
        &source,
        &destination,
        CloneOptions::default(),
    );
    driver.run_phase(PhaseKind::CreateCategories).await;
    let report = driver.run_phase(PhaseKind::CreateTextChannels).await;

    assert_eq!(report.succeeded, vec!["chat", "logs"]);

    let channels = discord.created_channels();
    let chat = channels.iter().find(|c| c.name == "chat").unwrap();
    let logs = channels.iter().find(|c| c.name == "logs").unwrap();
    assert_eq!(chat.parent_id, Some(FIRST_CREATED_ID));
    assert_eq!(logs.parent_id, None);
}

/// Tests that member overwrites pass through and text attributes are copied.
///
/// Expected: member overwrite target unchanged, topic/nsfw/slowmode copied
#[tokio::test]
async fn copies_text_channel_attributes() {
    let mut source = fixture::guild(1, "Source");
    let mut chat = fixture::text_channel(21, "chat", Some(20), 4);
    chat.topic = Some("rules".to_string());
    chat.nsfw = true;
    chat.rate_limit_per_user = 30;
    chat.overwrites = vec![fixture::member_overwrite(777, 1024, 0)];
    source.channels = vec![fixture::category(20, "General", 0), chat];
    let destination = fixture::guild(2, "Target");
    let discord = FakeDiscord::new();

    let mut driver = PhaseDriver::new(
        &discord,
        CallPolicy::sequential(),
        &source,
        &destination,
        CloneOptions::default(),
    );
    driver.run_phase(PhaseKind::CreateCategories).await;
    driver.run_phase(PhaseKind::CreateTextChannels).await;

    let channels = discord.created_channels();
    let chat = &channels[1];
    assert_eq!(chat.topic.as_deref(), Some("rules"));
    assert!(chat.nsfw);
    assert_eq!(chat.rate_limit_per_user, Some(30));
    assert_eq!(chat.position, 4);
    assert_eq!(chat.overwrites, vec![fixture::member_overwrite(777, 1024, 0)]);
}
