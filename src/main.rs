use clap::Parser;
use lsmsearch_api::RestApi;
use lsmsearch_storage::StorageManager;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info, warn, Level};
use tracing_subscriber::FmtSubscriber;

/// Weighted search over a locking-system dataset
#[derive(Parser, Debug)]
#[command(name = "lsmsearch")]
#[command(about = "Ranked free-text search over buildings, locks, groups and media", long_about = None)]
struct Args {
    /// Path to the JSON dataset file
    #[arg(short, long, default_value = "sv_lsm_data.json")]
    data_file: PathBuf,

    /// Address to bind the HTTP API to
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// HTTP API port
    #[arg(long, default_value_t = 5000)]
    http_port: u16,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting LSMSearch v{}", env!("CARGO_PKG_VERSION"));
    info!("Dataset file: {:?}", args.data_file);
    info!("HTTP API port: {}", args.http_port);

    let storage = Arc::new(StorageManager::new(&args.data_file));
    // A bad dataset is reported per request; the server still starts
    if let Err(e) = storage.load() {
        warn!("Dataset not loaded at startup: {}", e);
    }

    let host = args.host.clone();
    let http_port = args.http_port;
    let http_handle = std::thread::spawn(move || {
        info!("Starting HTTP server on {}:{}", host, http_port);
        let sys = actix_web::rt::System::new();
        sys.block_on(async move {
            if let Err(e) = RestApi::start(storage, host, http_port).await {
                error!("HTTP server error: {}", e);
            }
        })
    });

    info!("LSMSearch started successfully");
    info!("Search: http://localhost:{}/api/lsm/search?input=", args.http_port);

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
        _ = tokio::task::spawn_blocking(move || {
            http_handle.join().ok();
        }) => {
            info!("HTTP server stopped");
        }
    }

    info!("Shutting down...");
    Ok(())
}
