use super::*;

/// Tests that templates are returned newest first.
///
/// Expected: Ok with templates ordered by created_at descending
#[tokio::test]
async fn returns_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_template_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    factory::guild_template::GuildTemplateFactory::new(db)
        .name("old")
        .created_at(now - Duration::days(2))
        .build()
        .await?;
    factory::guild_template::GuildTemplateFactory::new(db)
        .name("new")
        .created_at(now)
        .build()
        .await?;
    factory::guild_template::GuildTemplateFactory::new(db)
        .name("middle")
        .created_at(now - Duration::days(1))
        .build()
        .await?;

    let repo = GuildTemplateRepository::new(db);
    let names: Vec<String> = repo
        .get_all()
        .await?
        .into_iter()
        .map(|template| template.name)
        .collect();

    assert_eq!(names, vec!["new", "middle", "old"]);

    Ok(())
}

/// Tests listing when no template is stored.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_without_templates() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_template_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildTemplateRepository::new(db);

    assert!(repo.get_all().await?.is_empty());

    Ok(())
}
