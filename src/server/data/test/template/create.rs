use super::*;

/// Tests storing a snapshot as a template.
///
/// Verifies that the source guild is taken from the snapshot and that the stored
/// JSON decodes back into an equal snapshot.
///
/// Expected: Ok with template matching the snapshot
#[tokio::test]
async fn creates_template() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_template_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildTemplateRepository::new(db);
    let source = snapshot(123, "Source");
    let template = repo.create("weekly".to_string(), &source).await?;

    assert_eq!(template.name, "weekly");
    assert_eq!(template.source_guild_id, 123);
    assert_eq!(template.source_guild_name, "Source");
    assert_eq!(template.snapshot, source);

    let stored = entity::prelude::GuildTemplate::find_by_id(template.id)
        .one(db)
        .await?;
    assert!(stored.is_some());

    Ok(())
}

/// Tests that template names are unique.
///
/// Expected: Err classified as a unique constraint violation on the second insert
/// with the same name
#[tokio::test]
async fn rejects_duplicate_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_template_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildTemplateRepository::new(db);
    repo.create("weekly".to_string(), &snapshot(1, "A")).await?;
    let result = repo.create("weekly".to_string(), &snapshot(2, "B")).await;

    let err = result.unwrap_err();
    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}
