use anyhow::Result;
use sforms_core::application::{
    ports::{security::IdentityVerifier, time::Clock},
    services::ApplicationServices,
};
use sforms_core::config::AppConfig;
use sforms_core::domain::{
    form::{FormReadRepository, FormWriteRepository, SlugOracle},
    submission::SubmissionRepository,
};
use sforms_core::infrastructure::{
    database,
    repositories::{
        PostgresFormReadRepository, PostgresFormWriteRepository, PostgresSubmissionRepository,
    },
    security::identity::BiscuitIdentityVerifier,
    time::SystemClock,
};
use sforms_core::presentation::http::{routes::build_router, state::HttpState};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url(), config.db_max_connections()).await?;
    database::run_migrations(&pool).await?;
    tracing::info!("database migrations applied");

    let form_write_repo: Arc<dyn FormWriteRepository> =
        Arc::new(PostgresFormWriteRepository::new(pool.clone()));
    let form_reader = Arc::new(PostgresFormReadRepository::new(pool.clone()));
    let form_read_repo: Arc<dyn FormReadRepository> = form_reader.clone();
    let slug_oracle: Arc<dyn SlugOracle> = form_reader;
    let submission_repo: Arc<dyn SubmissionRepository> =
        Arc::new(PostgresSubmissionRepository::new(pool));

    let identity_verifier: Arc<dyn IdentityVerifier> = Arc::new(BiscuitIdentityVerifier::new(
        config.biscuit_root_public_key(),
    )?);
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let services = Arc::new(ApplicationServices::new(
        form_write_repo,
        form_read_repo,
        slug_oracle,
        submission_repo,
        identity_verifier,
        clock,
        config.base_url().map(str::to_owned),
    ));

    let app = build_router(HttpState { services }, config.allowed_origins());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
