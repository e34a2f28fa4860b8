use super::*;

/// Tests finding an existing template by name.
///
/// Expected: Ok(Some) with the stored template
#[tokio::test]
async fn finds_existing_template() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_template_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::guild_template::GuildTemplateFactory::new(db)
        .name("weekly")
        .source_guild(555, "Source")
        .build()
        .await?;

    let repo = GuildTemplateRepository::new(db);
    let template = repo.find_by_name("weekly").await?.unwrap();

    assert_eq!(template.id, stored.id);
    assert_eq!(template.source_guild_id, 555);
    assert_eq!(template.snapshot.guild_id, 555);
    assert_eq!(template.snapshot.name, "Source");

    Ok(())
}

/// Tests finding a template that doesn't exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_template_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_template(db).await?;

    let repo = GuildTemplateRepository::new(db);
    let result = repo.find_by_name("missing").await?;

    assert!(result.is_none());

    Ok(())
}
