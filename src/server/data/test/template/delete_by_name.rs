use super::*;

/// Tests deleting an existing template.
///
/// Expected: Ok(true) and the row removed
#[tokio::test]
async fn deletes_existing_template() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_template_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::create_template(db).await?;

    let repo = GuildTemplateRepository::new(db);
    let deleted = repo.delete_by_name(&stored.name).await?;

    assert!(deleted);
    assert!(entity::prelude::GuildTemplate::find_by_id(stored.id)
        .one(db)
        .await?
        .is_none());

    Ok(())
}

/// Tests deleting a template that doesn't exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_template_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildTemplateRepository::new(db);

    assert!(!repo.delete_by_name("missing").await?);

    Ok(())
}
