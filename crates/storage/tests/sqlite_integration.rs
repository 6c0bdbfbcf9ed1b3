use storage::keys;
use storage::repository::{KeyValueStore, Storage};
use storage::sqlite::SqliteRepository;

#[tokio::test]
async fn sqlite_kv_round_trip() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_kv_roundtrip?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    assert_eq!(repo.get(keys::PROGRESS).await.expect("get"), None);

    repo.set(keys::PROGRESS, r#"{"algebra":{"easy":true}}"#)
        .await
        .expect("set");
    repo.set(keys::PROGRESS, r#"{"algebra":{"easy":true,"medium":true}}"#)
        .await
        .expect("overwrite");

    let value = repo.get(keys::PROGRESS).await.expect("get");
    assert_eq!(
        value.as_deref(),
        Some(r#"{"algebra":{"easy":true,"medium":true}}"#)
    );
}

#[tokio::test]
async fn sqlite_remove_is_idempotent() {
    let storage = Storage::sqlite("sqlite:file:memdb_kv_remove?mode=memory&cache=shared")
        .await
        .expect("connect");

    storage.kv.set(keys::AUTH_TOKEN, "token").await.expect("set");
    storage.kv.set(keys::USERNAME, "ada").await.expect("set");

    storage.kv.remove(keys::AUTH_TOKEN).await.expect("remove");
    storage.kv.remove(keys::AUTH_TOKEN).await.expect("remove again");

    assert_eq!(storage.kv.get(keys::AUTH_TOKEN).await.expect("get"), None);
    assert_eq!(
        storage.kv.get(keys::USERNAME).await.expect("get").as_deref(),
        Some("ada")
    );
}

#[tokio::test]
async fn migrations_can_run_twice() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_kv_migrate?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("first migrate");
    repo.migrate().await.expect("second migrate");

    repo.set("k", "v").await.expect("set");
    assert_eq!(repo.get("k").await.expect("get").as_deref(), Some("v"));
}
