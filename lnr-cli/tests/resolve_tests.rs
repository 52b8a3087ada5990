// ABOUTME: Integration tests for the cache-backed resolution pipeline
// ABOUTME: Uses a mock GraphQL server plus a temp cache directory

use lnr_cli::cache::CacheStore;
use lnr_cli::resolve::Resolver;
use lnr_cli::types::UserSelections;
use lnr_sdk::LnrClient;
use secrecy::SecretString;
use serde_json::json;
use std::time::Duration;
use tempfile::TempDir;

const TTL: Duration = Duration::from_secs(86_400);

fn client_for(server: &mockito::ServerGuard) -> LnrClient {
    LnrClient::builder()
        .auth_token(SecretString::new(
            "test_api_key".to_string().into_boxed_str(),
        ))
        .base_url(Some(server.url()))
        .build()
        .unwrap()
}

fn cache() -> (CacheStore, TempDir) {
    let dir = TempDir::new().unwrap();
    let store = CacheStore::with_dir(dir.path().to_path_buf());
    (store, dir)
}

fn teams_body(teams: &[(&str, &str)]) -> String {
    json!({
        "data": {
            "teams": {
                "nodes": teams
                    .iter()
                    .map(|(id, name)| json!({ "id": id, "name": name }))
                    .collect::<Vec<_>>(),
                "pageInfo": { "hasNextPage": false, "endCursor": null }
            }
        }
    })
    .to_string()
}

fn labels_body(labels: &[(&str, &str)]) -> String {
    json!({
        "data": {
            "team": {
                "labels": {
                    "nodes": labels
                        .iter()
                        .map(|(id, name)| json!({ "id": id, "name": name }))
                        .collect::<Vec<_>>(),
                    "pageInfo": { "hasNextPage": false, "endCursor": null }
                }
            }
        }
    })
    .to_string()
}

#[tokio::test]
async fn second_resolution_is_served_from_cache() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/graphql")
        .with_header("content-type", "application/json")
        .with_body(teams_body(&[("t1", "Engineering")]))
        .expect(1)
        .create_async()
        .await;

    let client = client_for(&server);
    let (store, _dir) = cache();
    let resolver = Resolver::new(&client, &store);

    let first = resolver.teams().await.unwrap();
    let second = resolver.teams().await.unwrap();

    assert_eq!(first, second);
    assert_eq!(first[0].name, "Engineering");
    // Exactly one network fetch; the second call hit the cache.
    mock.assert_async().await;
}

#[tokio::test]
async fn expired_cache_falls_through_to_network() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/graphql")
        .with_header("content-type", "application/json")
        .with_body(teams_body(&[("t1", "Engineering")]))
        .expect(2)
        .create_async()
        .await;

    let client = client_for(&server);
    let (store, _dir) = cache();
    // Zero TTL means every entry is already stale.
    let resolver = Resolver::with_ttl(&client, &store, Duration::ZERO);

    resolver.teams().await.unwrap();
    resolver.teams().await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn wrong_shaped_cache_entry_is_a_fatal_decode_error() {
    let server = mockito::Server::new_async().await;
    let client = client_for(&server);
    let (store, _dir) = cache();

    // Parses as an entry, but ids are numbers instead of strings.
    store
        .put("teams", &json!([{ "id": 1, "name": 2 }]))
        .unwrap();

    let resolver = Resolver::new(&client, &store);
    let err = resolver.teams().await.unwrap_err();

    assert!(err.to_string().contains("unexpected shape"));
}

#[tokio::test]
async fn team_scoped_entries_do_not_leak_across_teams() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/graphql")
        .with_header("content-type", "application/json")
        .with_body(labels_body(&[("l1", "bug")]))
        .expect(2)
        .create_async()
        .await;

    let client = client_for(&server);
    let (store, _dir) = cache();
    let resolver = Resolver::new(&client, &store);

    resolver.labels("t1").await.unwrap();
    // A different team misses the cache even though t1 is freshly cached.
    resolver.labels("t2").await.unwrap();

    mock.assert_async().await;
    assert!(store.dir().join("labels-t1.json").exists());
    assert!(store.dir().join("labels-t2.json").exists());
}

#[tokio::test]
async fn fetch_failure_propagates() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/graphql")
        .with_header("content-type", "application/json")
        .with_body(json!({ "errors": [{ "message": "workspace unavailable" }] }).to_string())
        .create_async()
        .await;

    let client = client_for(&server);
    let (store, _dir) = cache();
    let resolver = Resolver::new(&client, &store);

    let err = resolver.teams().await.unwrap_err();
    assert!(format!("{err:#}").contains("workspace unavailable"));
    // A failed fetch never writes a cache entry.
    assert!(!store.dir().join("teams.json").exists());
}

fn offline_client() -> LnrClient {
    LnrClient::builder()
        .auth_token(SecretString::new(
            "test_api_key".to_string().into_boxed_str(),
        ))
        .build()
        .unwrap()
}

#[test]
fn unreadable_selections_degrade_to_defaults() {
    let client = offline_client();
    let (store, _dir) = cache();

    store
        .put("user-selections", &json!({ "teamId": 42 }))
        .unwrap();

    let resolver = Resolver::new(&client, &store);
    assert_eq!(resolver.selections(), UserSelections::default());
}

#[test]
fn selections_round_trip() {
    let client = offline_client();
    let (store, _dir) = cache();
    let resolver = Resolver::new(&client, &store);

    let selections = UserSelections {
        team_id: "t1".to_string(),
        assignee_id: "u1".to_string(),
        labels: vec!["bug".to_string(), "ui".to_string()],
        estimate: "3".to_string(),
        status_id: "s1".to_string(),
    };

    resolver.save_selections(&selections);
    assert_eq!(resolver.selections(), selections);
}
