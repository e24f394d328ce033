//! tsk - personal task tracker server
//!
//! Opens (or creates) the SQLite database, brings its schema up to date and
//! serves the task API plus an optional front-end directory.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tsk_server::db::{create_pool, migrations};
use tsk_server::{run_server, ServerConfig};

#[derive(Parser, Debug)]
#[command(
    name = "tsk",
    disable_version_flag = true,
    about = "Personal task tracker: categories, nested tasks, drag-and-drop ordering"
)]
struct Cli {
    /// Database file path
    #[arg(long, env = "TSK_DB", default_value = "./trx.db")]
    db: PathBuf,

    /// Address to bind to
    #[arg(long, short = 'b', env = "TSK_BIND", default_value = "0.0.0.0:8080")]
    bind: SocketAddr,

    /// Directory of front-end assets served for non-API paths
    #[arg(long, env = "TSK_STATIC_DIR")]
    static_dir: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(long, env = "TSK_TIMEOUT", default_value = "30")]
    timeout: u64,

    /// Enable debug logging (RUST_LOG still wins when set)
    #[arg(long)]
    debug: bool,

    /// Print version and exit
    #[arg(long, short = 'V')]
    version: bool,
}

fn init_tracing(debug: bool) -> Result<()> {
    let default_level = if debug { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(debug)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    if cli.version {
        println!("tsk version {}", tsk_server::VERSION);
        return Ok(());
    }

    init_tracing(cli.debug).ok();

    info!("Opening database at {}", cli.db.display());
    let pool = create_pool(&cli.db)
        .await
        .with_context(|| format!("Failed to open database {}", cli.db.display()))?;

    migrations::run(&pool)
        .await
        .context("Failed to initialize database schema")?;

    let config = ServerConfig {
        bind_addr: cli.bind,
        static_dir: cli.static_dir,
        request_timeout: Duration::from_secs(cli.timeout),
    };

    info!("Starting tsk {} on http://{}", tsk_server::VERSION, config.bind_addr);

    // Blocks until shutdown
    run_server(pool, config).await.context("Server error")?;

    Ok(())
}
