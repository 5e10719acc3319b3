//! End-to-end tests: the real router and PokéAPI client, talking to a fake
//! upstream server on an ephemeral port.

use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde_json::{Value, json};

use pokemon_server::lookup::PokemonLookupService;
use pokemon_server::pokeapi::{PokeApiClient, PokeApiConfig};
use pokemon_server::store::{JsonFileStore, MemoryStore, PokemonStore};
use pokemon_server::web::{AppState, create_router};

/// Fake upstream that knows bulbasaur, returns garbage for "glitch", and
/// 404s for everything else. Like PokéAPI, `/pokemon` itself is a
/// paginated list.
#[derive(Clone, Default)]
struct Upstream {
    hits: Arc<AtomicUsize>,
}

async fn upstream_pokemon(
    State(upstream): State<Upstream>,
    Path(name): Path<String>,
) -> impl IntoResponse {
    upstream.hits.fetch_add(1, Ordering::SeqCst);

    match name.as_str() {
        "bulbasaur" => (
            StatusCode::OK,
            json!({
                "id": 1,
                "name": "bulbasaur",
                "height": 7,
                "weight": 69,
                "sprites": { "front_default": "https://img.pokemondb.net/sprites/bulbasaur.png" },
                "abilities": [ { "ability": { "name": "overgrow" } } ],
                "types": [ { "type": { "name": "grass" } }, { "type": { "name": "poison" } } ]
            })
            .to_string(),
        ),
        "glitch" => (StatusCode::OK, "{\"id\": \"not a number\"}".to_string()),
        _ => (StatusCode::NOT_FOUND, "Not Found".to_string()),
    }
}

async fn upstream_list(State(upstream): State<Upstream>) -> impl IntoResponse {
    upstream.hits.fetch_add(1, Ordering::SeqCst);
    json!({ "count": 1302, "results": [] }).to_string()
}

async fn spawn(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

async fn spawn_upstream() -> (SocketAddr, Upstream) {
    let upstream = Upstream::default();
    let app = Router::new()
        .route("/api/v2/pokemon", get(upstream_list))
        .route("/api/v2/pokemon/:name", get(upstream_pokemon))
        .with_state(upstream.clone());
    (spawn(app).await, upstream)
}

async fn spawn_app<S>(store: S, base_url: String) -> SocketAddr
where
    S: PokemonStore + Send + Sync + 'static,
{
    let client = PokeApiClient::new(PokeApiConfig::new().with_base_url(base_url)).unwrap();
    let state = AppState::new(PokemonLookupService::new(store, client));
    spawn(create_router(state)).await
}

async fn get_json(addr: SocketAddr, path: &str) -> (StatusCode, Value) {
    let response = reqwest::get(format!("http://{addr}{path}")).await.unwrap();
    let status = StatusCode::from_u16(response.status().as_u16()).unwrap();
    let body = response.json().await.unwrap();
    (status, body)
}

#[tokio::test]
async fn bulbasaur_scenario() {
    let (upstream_addr, upstream) = spawn_upstream().await;
    let app = spawn_app(MemoryStore::new(), format!("http://{upstream_addr}/api/v2")).await;

    let (status, body) = get_json(app, "/pokemon/bulbasaur").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "id": 1,
            "name": "bulbasaur",
            "height": 7,
            "weight": 69,
            "spriteUrl": "https://img.pokemondb.net/sprites/bulbasaur.png",
            "abilities": ["overgrow"],
            "types": ["grass", "poison"]
        })
    );
    assert_eq!(upstream.hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn repeat_lookup_served_from_store() {
    let (upstream_addr, upstream) = spawn_upstream().await;
    let app = spawn_app(MemoryStore::new(), format!("http://{upstream_addr}/api/v2")).await;

    let (_, first) = get_json(app, "/pokemon/bulbasaur").await;
    let (status, second) = get_json(app, "/pokemon/BULBASAUR").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(first, second);
    assert_eq!(upstream.hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn empty_name_is_bad_request() {
    let (upstream_addr, upstream) = spawn_upstream().await;
    let app = spawn_app(MemoryStore::new(), format!("http://{upstream_addr}/api/v2")).await;

    for path in ["/pokemon/", "/pokemon/%20%20"] {
        let (status, body) = get_json(app, path).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{path}");
        assert!(body["error"].is_string());
    }
    assert_eq!(upstream.hits.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn unknown_pokemon_is_not_found() {
    let (upstream_addr, _upstream) = spawn_upstream().await;
    let store = MemoryStore::new();
    let app = spawn_app(store.clone(), format!("http://{upstream_addr}/api/v2")).await;

    let (status, body) = get_json(app, "/pokemon/notapokemon").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Pokémon not found" }));
    assert_eq!(store.len().await, 0);
}

#[tokio::test]
async fn unreachable_upstream_is_not_found() {
    // Bind and drop to get a port with nothing listening.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let dead = listener.local_addr().unwrap();
    drop(listener);

    let app = spawn_app(MemoryStore::new(), format!("http://{dead}/api/v2")).await;

    let (status, _) = get_json(app, "/pokemon/bulbasaur").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn malformed_upstream_body_is_bad_gateway() {
    let (upstream_addr, _upstream) = spawn_upstream().await;
    let app = spawn_app(MemoryStore::new(), format!("http://{upstream_addr}/api/v2")).await;

    let (status, body) = get_json(app, "/pokemon/glitch").await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body, json!({ "error": "unexpected response from upstream" }));
}

#[tokio::test]
async fn dot_names_are_not_found_without_upstream_call() {
    let (upstream_addr, upstream) = spawn_upstream().await;
    let store = MemoryStore::new();
    let app = spawn_app(store.clone(), format!("http://{upstream_addr}/api/v2")).await;

    // Leading spaces keep the client from resolving the dot segments itself.
    for path in ["/pokemon/%20.", "/pokemon/%20.."] {
        let (status, body) = get_json(app, path).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{path}");
        assert_eq!(body, json!({ "error": "Pokémon not found" }));
    }
    assert_eq!(upstream.hits.load(Ordering::SeqCst), 0);
    assert_eq!(store.len().await, 0);
}

#[tokio::test]
async fn concurrent_first_lookups_store_one_record() {
    let (upstream_addr, _upstream) = spawn_upstream().await;
    let store = MemoryStore::new();
    let app = spawn_app(store.clone(), format!("http://{upstream_addr}/api/v2")).await;

    let responses =
        futures::future::join_all((0..5).map(|_| get_json(app, "/pokemon/bulbasaur"))).await;

    for (status, body) in responses {
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], 1);
    }
    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn file_store_persists_across_restarts() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pokemon.json");
    let (upstream_addr, upstream) = spawn_upstream().await;
    let base_url = format!("http://{upstream_addr}/api/v2");

    let app = spawn_app(JsonFileStore::open(&path).await.unwrap(), base_url.clone()).await;
    let (status, _) = get_json(app, "/pokemon/bulbasaur").await;
    assert_eq!(status, StatusCode::OK);

    // A second server over the same file never needs upstream.
    let app = spawn_app(JsonFileStore::open(&path).await.unwrap(), base_url).await;
    let (status, body) = get_json(app, "/pokemon/Bulbasaur").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["types"], json!(["grass", "poison"]));
    assert_eq!(upstream.hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn health() {
    let (upstream_addr, _upstream) = spawn_upstream().await;
    let app = spawn_app(MemoryStore::new(), format!("http://{upstream_addr}/api/v2")).await;

    let body = reqwest::get(format!("http://{app}/health"))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert_eq!(body, "ok");
}
