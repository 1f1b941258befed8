use anyhow::Context;
use axum::Router;
use storage::{ChangeFeed, Database};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;
mod middleware;
mod state;

use config::Config;
use middleware::auth::OperatorKeys;
use state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::nominees::handlers::list_nominees,
        features::picks::handlers::list_picks,
        features::picks::handlers::submit_pick,
        features::picks::handlers::remove_pick,
        features::picks::handlers::clear_picks,
        features::leaderboard::handlers::get_leaderboard,
        features::settings::handlers::get_settings,
        features::settings::handlers::announce_winner,
        features::settings::handlers::reset_winner,
        features::odds::handlers::update_odds,
        features::odds::handlers::sync_odds,
        features::events::handlers::stream_events,
    ),
    components(
        schemas(
            storage::dto::nominee::NomineeResponse,
            storage::dto::pick::SubmitPickRequest,
            storage::dto::pick::PickResponse,
            storage::dto::leaderboard::LeaderboardRow,
            storage::dto::settings::AnnounceWinnerRequest,
            storage::dto::settings::ContestSettingsResponse,
            storage::dto::odds::UpdateOddsRequest,
        )
    ),
    tags(
        (name = "nominees", description = "Nominee registry with live odds"),
        (name = "picks", description = "Participant pick ledger"),
        (name = "leaderboard", description = "Derived leaderboard"),
        (name = "settings", description = "Contest state and winner announcement"),
        (name = "odds", description = "Odds store edits and market sync"),
        (name = "events", description = "Live change notifications"),
    ),
    modifiers(&SecurityAddon)
)]
struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("Operator Key")
                        .build(),
                ),
            )
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting prediction pool API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    tracing::info!(
        "Connecting to database at: {}",
        config
            .database_url
            .split('@')
            .next_back()
            .unwrap_or("unknown")
    );
    let db = Database::new(&config.database_url)
        .await
        .context("Failed to initialize database")?;
    tracing::info!("Database connection established");

    tracing::info!("Running database migrations");
    db.run_migrations()
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Database migrations completed successfully");

    let feed = ChangeFeed::new();
    {
        let feed = feed.clone();
        let pool = db.pool().clone();
        tokio::spawn(async move {
            if let Err(e) = feed.run(&pool).await {
                tracing::error!("Change feed listener stopped: {}", e);
            }
        });
    }
    tracing::info!("Change feed listener started");

    let operator_keys = OperatorKeys::from_comma_separated(&config.operator_keys);
    let state = AppState {
        db,
        feed,
        market_slug: config.market_slug.clone(),
    };

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    let app = Router::new()
        .nest("/api/nominees", features::nominees::routes::routes())
        .nest(
            "/api/picks",
            features::picks::routes::routes(operator_keys.clone()),
        )
        .nest("/api/leaderboard", features::leaderboard::routes::routes())
        .nest(
            "/api/settings",
            features::settings::routes::routes(operator_keys.clone()),
        )
        .nest("/api/odds", features::odds::routes::routes(operator_keys))
        .nest("/api/events", features::events::routes::routes())
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .context("Failed to bind server address")?;
    axum::serve(listener, app).await?;

    Ok(())
}
