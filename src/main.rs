use anyhow::Result;
use dnews::application::{
    ports::{rendering::ContentRenderer, time::Clock, util::SlugGenerator},
    services::ApplicationServices,
};
use dnews::config::AppConfig;
use dnews::domain::{
    article::{ArticleReadRepository, ArticleWriteRepository, SignatureVerifier},
    bug::BugRepository,
    tag::TagRepository,
    user::UserRepository,
};
use dnews::infrastructure::{
    database,
    rendering::MarkdownRenderer,
    repositories::{
        PostgresArticleReadRepository, PostgresArticleWriteRepository, PostgresBugRepository,
        PostgresTagRepository, PostgresUserRepository,
    },
    security::signify::SignifyVerifier,
    time::SystemClock,
    util::DefaultSlugGenerator,
};
use dnews::presentation::http::{routes::build_router, state::HttpState};
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

    let pool = database::init_pool(
        config.database_url(),
        config.db_max_connections(),
        config.db_acquire_timeout(),
    )
    .await?;
    database::run_migrations(&pool).await?;

    let mut users = PostgresUserRepository::new(pool.clone());
    if let Some(hash) = config.auth_dummy_hash() {
        users = users.with_dummy_hash(hash);
    }
    let user_repo: Arc<dyn UserRepository> = Arc::new(users);
    let article_write_repo: Arc<dyn ArticleWriteRepository> =
        Arc::new(PostgresArticleWriteRepository::new(pool.clone()));
    let article_read_repo: Arc<dyn ArticleReadRepository> =
        Arc::new(PostgresArticleReadRepository::new(pool.clone()));
    let tag_repo: Arc<dyn TagRepository> = Arc::new(PostgresTagRepository::new(pool.clone()));
    let bug_repo: Arc<dyn BugRepository> = Arc::new(PostgresBugRepository::new(pool));

    let verifier: Arc<dyn SignatureVerifier> = Arc::new(SignifyVerifier);
    let renderer: Arc<dyn ContentRenderer> = Arc::new(MarkdownRenderer::default());
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);

    let services = Arc::new(ApplicationServices::new(
        user_repo,
        article_write_repo,
        article_read_repo,
        tag_repo,
        bug_repo,
        verifier,
        renderer,
        clock,
        slugger,
    ));

    let state = HttpState {
        services,
        recent_limit: config.recent_limit(),
        search_limit: config.search_limit(),
    };

    let app = build_router(state);

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
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for CTRL+C");
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
