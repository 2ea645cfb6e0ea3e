mod model;
mod server;

use std::sync::Arc;

use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    config::Config,
    doc::ApiDoc,
    error::AppError,
    middleware::auth::JwtAuthenticator,
    scheduler,
    service::rank::RankJob,
    startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let rank_job = RankJob::new(db.clone());

    scheduler::rank::start_scheduler(rank_job.clone(), &config).await?;

    let state = AppState::new(
        db,
        config.counter_policy,
        Arc::new(JwtAuthenticator::new(&config.jwt_secret)),
        rank_job,
    );

    let app = server::router::router()
        .with_state(state)
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
        .layer(startup::cors_layer(&config)?)
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(config.bind_address.as_str()).await?;

    tracing::info!("Listening on {}", config.bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
