use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use tracing::{info, warn};

use daylist::config::ServerConfig;
use daylist::rest;
use daylist::store::{FirebaseStore, MemoryStore, TaskStore};
use daylist::AppContext;

#[derive(Parser)]
#[command(
    name = "daylist",
    about = "Daylist — per-user daily task list server",
    version
)]
struct Args {
    /// HTTP server port
    #[arg(long, env = "DAYLIST_PORT")]
    port: Option<u16>,

    /// Bind address (default: 127.0.0.1; use 0.0.0.0 for LAN access)
    #[arg(long, env = "DAYLIST_BIND")]
    bind_address: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "DAYLIST_LOG")]
    log: Option<String>,

    /// Write logs to this file path (rotated daily). Optional.
    #[arg(long, env = "DAYLIST_LOG_FILE")]
    log_file: Option<std::path::PathBuf>,

    /// Path to a TOML config file (default: ./daylist.toml)
    #[arg(long, env = "DAYLIST_CONFIG")]
    config: Option<std::path::PathBuf>,

    /// Firebase Realtime Database base URL (e.g. https://myapp.firebaseio.com)
    #[arg(long, env = "DAYLIST_DATABASE_URL")]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = Arc::new(ServerConfig::new(
        args.config,
        args.port,
        args.bind_address,
        args.log,
        args.log_file,
        args.database_url,
    ));

    // Guard must stay alive for the process lifetime or file logging stops.
    let _log_guard = setup_logging(&config.log, config.log_file.as_deref(), &config.log_format);

    info!(version = env!("CARGO_PKG_VERSION"), "daylist starting");

    let store: Arc<dyn TaskStore> = match &config.database_url {
        Some(url) => {
            info!(url = %url, "using Firebase task store");
            Arc::new(FirebaseStore::new(url, config.database_secret.clone())?)
        }
        None => {
            warn!("no database URL configured — tasks are held in memory and lost on restart");
            Arc::new(MemoryStore::new())
        }
    };

    let ctx = Arc::new(AppContext::new(config, store));
    rest::start_server(ctx).await
}

fn setup_logging(
    log_level: &str,
    log_file: Option<&std::path::Path>,
    log_format: &str,
) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let use_json = log_format == "json";

    let init_stdout_only = || {
        if use_json {
            tracing_subscriber::fmt().json().with_env_filter(log_level).init();
        } else {
            tracing_subscriber::fmt().with_env_filter(log_level).compact().init();
        }
    };

    let Some(path) = log_file else {
        init_stdout_only();
        return None;
    };

    let dir = path.parent().unwrap_or_else(|| std::path::Path::new("."));
    let filename = path
        .file_name()
        .unwrap_or_else(|| std::ffi::OsStr::new("daylist.log"));

    // Ensure the directory exists before tracing-appender tries to open it.
    if let Err(e) = std::fs::create_dir_all(dir) {
        eprintln!(
            "warn: could not create log directory '{}': {e} — falling back to stdout",
            dir.display()
        );
        init_stdout_only();
        return None;
    }

    let appender = tracing_appender::rolling::daily(dir, filename);
    let (non_blocking, guard) = tracing_appender::non_blocking(appender);

    if use_json {
        tracing_subscriber::registry()
            .with(EnvFilter::new(log_level))
            .with(fmt::layer().json())
            .with(fmt::layer().json().with_writer(non_blocking))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(EnvFilter::new(log_level))
            .with(fmt::layer().compact())
            .with(fmt::layer().with_writer(non_blocking))
            .init();
    }

    Some(guard)
}
