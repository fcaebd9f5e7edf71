use dramaboard::application::{
    ports::{time::Clock, util::SlugGenerator},
    services::ApplicationServices,
};
use dramaboard::config::{AppConfig, StorageBackend};
use dramaboard::domain::{
    drama::DramaRepository,
    post::{PostReadRepository, PostWriteRepository},
};
use dramaboard::infrastructure::{
    database,
    repositories::{
        InMemoryForumStore, PostgresDramaRepository, PostgresPostReadRepository,
        PostgresPostWriteRepository,
    },
    time::SystemClock,
    util::DefaultSlugGenerator,
};
use dramaboard::presentation::http::{routes::build_router, state::HttpState};
use anyhow::Result;
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

struct Repositories {
    post_write: Arc<dyn PostWriteRepository>,
    post_read: Arc<dyn PostReadRepository>,
    dramas: Arc<dyn DramaRepository>,
}

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err:#}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    let repos = init_repositories(&config).await?;

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);

    let services = Arc::new(ApplicationServices::new(
        repos.post_write,
        repos.post_read,
        repos.dramas,
        clock,
        slugger,
    ));

    let state = HttpState { services };
    let app = build_router(state, config.allowed_origins());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn init_repositories(config: &AppConfig) -> Result<Repositories> {
    match config.storage_backend() {
        StorageBackend::Postgres { url } => {
            let pool = database::init_pool(url, config.database_max_connections()).await?;
            database::run_migrations(&pool).await?;
            tracing::info!("using postgres storage");
            Ok(Repositories {
                post_write: Arc::new(PostgresPostWriteRepository::new(pool.clone())),
                post_read: Arc::new(PostgresPostReadRepository::new(pool.clone())),
                dramas: Arc::new(PostgresDramaRepository::new(pool)),
            })
        }
        StorageBackend::Memory => {
            tracing::warn!("DATABASE_URL not set; posts are kept in memory and lost on exit");
            let store = Arc::new(InMemoryForumStore::new());
            Ok(Repositories {
                post_write: store.clone(),
                post_read: store.clone(),
                dramas: store,
            })
        }
    }
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
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install CTRL+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
