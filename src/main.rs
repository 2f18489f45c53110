use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use tudu::api::{run_worker, ApiClient};
use tudu::config::Config;
use tudu::shutdown::ShutdownHandle;
use tudu::ui::app::{Action, App};
use tudu::ui::events::EventHandler;

#[derive(Debug, Parser)]
#[command(name = "tudu", version, about = "Terminal client for a remote todo API")]
struct Cli {
    /// Server base URL, overriding the config file.
    #[arg(long)]
    base_url: Option<String>,

    /// Path to an alternative config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log file path (the terminal is owned by the UI).
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(base_url) = cli.base_url {
        config.server.base_url = base_url;
        config.validate()?;
    }

    init_tracing(cli.log_file).context("failed to initialize logging")?;
    tracing::info!(base_url = %config.server.base_url, "starting tudu");

    let client = ApiClient::new(&config.server)?;
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    let shutdown = ShutdownHandle::new();
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let events = EventHandler::new(tick_rate, shutdown.clone());

    let (api_tx, api_rx) = tokio::sync::mpsc::channel(32);
    runtime.spawn(run_worker(client, api_rx, events.sender()));

    let mut app = App::new();
    app.set_api_sender(api_tx);
    app.set_login_url(format!(
        "{}/login",
        config.server.base_url.trim_end_matches('/')
    ));
    app.dispatch(Action::Reload);

    tudu::ui::runtime::run(&mut app, &events, tick_rate, &shutdown)?;
    tracing::info!("tudu exited");
    Ok(())
}

fn init_tracing(log_file: Option<PathBuf>) -> anyhow::Result<()> {
    let path = log_file.unwrap_or_else(default_log_path);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = fs::File::create(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn default_log_path() -> PathBuf {
    let state_dir = dirs::state_dir()
        .or_else(dirs::data_local_dir)
        .unwrap_or_else(|| PathBuf::from("."));
    state_dir.join("tudu").join("tudu.log")
}
