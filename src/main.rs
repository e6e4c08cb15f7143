use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;

use workout_recommender::api::recommend::{AppState, recommend_handler};
use workout_recommender::clients::{DataSource, ExerciseStore, FileStore, RemoteStore};
use workout_recommender::config::Config;
use workout_recommender::services::recommendation::RecommendationService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;

    let data_source = match (&config.catalog_api_url, &config.catalog_path) {
        (Some(url), _) => {
            tracing::info!(%url, "catalog.remote");
            DataSource::Remote(RemoteStore::new(&config)?)
        }
        (None, Some(path)) => DataSource::File(FileStore::load(path)?),
        (None, None) => {
            tracing::info!("catalog.seed");
            DataSource::File(FileStore::seed()?)
        }
    };

    let mut recommendation_service = RecommendationService::new(data_source)
        .with_experience_gate(config.restrict_to_experience);
    if config.seed_fallback {
        let seed = FileStore::seed()?;
        recommendation_service =
            recommendation_service.with_fallback_catalog(seed.fetch_exercises().await?);
    }

    let state = AppState {
        config: config.clone(),
        recommendation_service,
    };

    let app = Router::new()
        .route("/", get(|| async { "Workout recommender is running" }))
        .route("/workouts/recommend", post(recommend_handler::<DataSource>))
        .layer(CorsLayer::permissive())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;
    tracing::info!(port = %config.port, "server.listening");
    axum::serve(listener, app).await?;
    Ok(())
}
