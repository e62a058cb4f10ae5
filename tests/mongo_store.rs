#[path = "common/mod.rs"]
mod common;

use mongodb::bson::{self, doc};

use documentos::{
    models::SeedData,
    state::{DocumentStore, is_admin, load_seed_file, seed_store},
};

use common::{ADMIN_ID, STAFF_ID, company, document};

#[tokio::test]
async fn seeded_store_serves_companies_and_documents() {
    let ctx = match common::setup_mongo().await {
        Some(c) => c,
        None => return,
    };
    let store = &ctx.store;

    assert!(store.is_empty().await.unwrap());

    let data = SeedData {
        companies: vec![company(ADMIN_ID, Some("admin")), company(STAFF_ID, None)],
        documents: vec![
            document("d1", STAFF_ID, Some("2020-05-01")),
            document("d2", ADMIN_ID, None),
            document("d3", STAFF_ID, None),
        ],
    };
    seed_store(store, &data).await.unwrap();

    let found = store.company_by_id(ADMIN_ID).await.unwrap().unwrap();
    assert_eq!(found.role.as_deref(), Some("admin"));
    assert!(store.company_by_id("no-existe").await.unwrap().is_none());

    assert!(is_admin(store, "admin", ADMIN_ID).await);
    assert!(!is_admin(store, "admin", STAFF_ID).await);

    let all = store.list_documents(None).await.unwrap();
    assert_eq!(all.len(), 3);
    let staff: Vec<String> = store
        .list_documents(Some(STAFF_ID))
        .await
        .unwrap()
        .into_iter()
        .map(|d| d.id)
        .collect();
    assert_eq!(staff, vec!["d1", "d3"]);

    // A record another client wrote with a bad field type is skipped, not fatal.
    store
        .documents
        .clone_with_type::<bson::Document>()
        .insert_one(doc! { "_id": "roto", "companyId": 42 })
        .await
        .unwrap();
    let all = store.list_documents(None).await.unwrap();
    assert_eq!(all.len(), 3);

    common::teardown(ctx).await;
}

#[test]
fn missing_seed_file_is_not_an_error() {
    let loaded = load_seed_file("./data/definitely-not-here.json").unwrap();
    assert!(loaded.is_none());
}
