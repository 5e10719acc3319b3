use std::net::SocketAddr;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use pokemon_server::config::AppConfig;
use pokemon_server::lookup::{PokemonLookupService, PokemonProvider};
use pokemon_server::pokeapi::PokeApiClient;
use pokemon_server::store::{JsonFileStore, MemoryStore, PokemonStore};
use pokemon_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("invalid configuration: {e}");
            std::process::exit(2);
        }
    };

    info!(base_url = %config.pokeapi.base_url, "using PokéAPI");
    let client =
        PokeApiClient::new(config.pokeapi.clone()).expect("Failed to create PokéAPI client");

    match &config.store_path {
        Some(path) => {
            let store = JsonFileStore::open(path)
                .await
                .expect("Failed to open store file");
            info!(
                path = %store.path().display(),
                records = store.len().await,
                "using JSON file store"
            );
            serve(store, client, config.bind_addr).await;
        }
        None => {
            info!("using in-memory store");
            serve(MemoryStore::new(), client, config.bind_addr).await;
        }
    }
}

async fn serve<S, P>(store: S, provider: P, addr: SocketAddr)
where
    S: PokemonStore + Send + Sync + 'static,
    P: PokemonProvider + Send + Sync + 'static,
{
    let state = AppState::new(PokemonLookupService::new(store, provider));
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    info!("Pokémon lookup server listening on http://{addr}");
    info!("  GET  /health          - Health check");
    info!("  GET  /pokemon/{{name}}  - Look up a Pokémon");

    axum::serve(listener, app).await.unwrap();
}
