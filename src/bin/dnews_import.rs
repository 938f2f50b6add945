// src/bin/dnews_import.rs
use anyhow::{Context, Result};
use clap::Parser;
use dnews::application::{
    commands::articles::{ArticleCommandService, ImportArticleCommand, ImportReport},
    ports::{time::Clock, util::SlugGenerator},
};
use dnews::config::AppConfig;
use dnews::domain::article::{
    ArticleWriteRepository, SignatureVerifier, services::ArticleSlugService,
};
use dnews::infrastructure::{
    database, repositories::PostgresArticleWriteRepository, security::signify::SignifyVerifier,
    time::SystemClock, util::DefaultSlugGenerator,
};
use std::{path::PathBuf, process::ExitCode, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Exit status when the signature does not match the document.
const EXIT_SIGNATURE_MISMATCH: u8 = 2;

#[derive(Parser)]
#[command(
    name = "dnews-import",
    about = "Import a signed Markdown article",
    version
)]
struct Cli {
    /// Path to markdown file to import.
    #[arg(long = "mdfile")]
    mdfile: PathBuf,

    /// Path to public key for signature verification.
    #[arg(long = "pubkey")]
    pubkey: Option<PathBuf>,

    /// Path to signature of article.
    #[arg(long = "sig")]
    sig: Option<PathBuf>,

    /// Verify signature (requires --pubkey and --sig).
    #[arg(short = 'v', long = "verify")]
    verify: bool,

    /// Add article to the database.
    #[arg(short = 'a', long = "add")]
    add: bool,

    /// Publish the article immediately.
    #[arg(long)]
    live: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(report) if report.rejected() => {
            eprintln!("Invalid signature! {} was not imported.", report.title);
            ExitCode::from(EXIT_SIGNATURE_MISMATCH)
        }
        Ok(report) => {
            print_report(&report);
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(error = %err, "import failed");
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ImportReport> {
    let config = AppConfig::from_env()?;

    // Connects on first use, so a verify-only run never needs the database.
    let pool = database::lazy_pool(
        config.database_url(),
        config.db_max_connections(),
        config.db_acquire_timeout(),
    )
    .context("invalid DATABASE_URL")?;

    let write_repo: Arc<dyn ArticleWriteRepository> =
        Arc::new(PostgresArticleWriteRepository::new(pool));
    let verifier: Arc<dyn SignatureVerifier> = Arc::new(SignifyVerifier);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let service = ArticleCommandService::new(
        write_repo,
        verifier,
        Arc::new(ArticleSlugService::new(slugger, clock)),
    );

    let mut builder = ImportArticleCommand::builder()
        .document(cli.mdfile)
        .verify(cli.verify)
        .add(cli.add)
        .live(cli.live);
    if let Some(path) = cli.pubkey {
        builder = builder.public_key(path);
    }
    if let Some(path) = cli.sig {
        builder = builder.signature(path);
    }
    let command = builder.build().map_err(anyhow::Error::msg)?;

    Ok(service.import_article(command).await?)
}

fn print_report(report: &ImportReport) {
    println!("title:  {}", report.title);
    println!("author: {}", report.author);
    if report.verified == Some(true) {
        println!("Signature OK");
    }
    if let Some(id) = report.inserted {
        println!("inserted article {id}");
    }
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "warn,dnews=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}
