use std::{
    env,
    error::Error,
    fs,
    net::SocketAddr,
    path::{Path, PathBuf},
    sync::Arc,
};

use axum::{extract::State, routing::get, Json, Router};
use shared::Settings;
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use tracing_subscriber::EnvFilter;

const DEFAULT_ADDR: &str = "127.0.0.1:8000";

#[derive(Clone)]
struct AppState {
    settings: Arc<Settings>,
}

/// Server configuration read from the environment.
#[derive(Debug)]
struct Config {
    addr: SocketAddr,
    root: PathBuf,
    settings: Option<PathBuf>,
}

impl Config {
    fn from_env() -> Result<Config, Box<dyn Error>> {
        let addr = env::var("FLIPGRID_ADDR")
            .unwrap_or_else(|_| DEFAULT_ADDR.to_string())
            .parse()?;
        let root = env::var_os("FLIPGRID_ROOT")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));
        let settings = env::var_os("FLIPGRID_SETTINGS").map(PathBuf::from);

        Ok(Config {
            addr,
            root,
            settings,
        })
    }
}

fn load_settings(path: Option<&Path>) -> Result<Settings, Box<dyn Error>> {
    match path {
        Some(path) => {
            let json = fs::read_to_string(path)?;
            Ok(Settings::from_json(&json)?)
        }
        None => Ok(Settings::default()),
    }
}

fn router(root: &Path, settings: Settings) -> Router {
    let state = AppState {
        settings: Arc::new(settings),
    };

    Router::new()
        .nest_service("/pkg", ServeDir::new(root.join("pkg")))
        .nest_service("/static", ServeDir::new(root.join("static")))
        .route_service("/", ServeFile::new(root.join("html/index.html")))
        .route("/settings.json", get(get_settings))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    let settings = load_settings(config.settings.as_deref())?;

    tracing::info!(
        addr = %config.addr,
        root = %config.root.display(),
        grid_size = settings.grid_size,
        "serving flipgrid"
    );

    axum::Server::bind(&config.addr)
        .serve(router(&config.root, settings).into_make_service())
        .await?;

    Ok(())
}

async fn get_settings(State(state): State<AppState>) -> Json<Settings> {
    Json(state.settings.as_ref().clone())
}
