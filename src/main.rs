use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};

use remote_toast::config::Config;
use remote_toast::federation::{self, GlobalLocator, HttpFederation, ToastKind, ToastProps};
use remote_toast::loader::{LoadState, RemoteLoader, TOAST_MODULE_PATH};
use remote_toast::logging;
use remote_toast::remote::server::RemoteServer;
use remote_toast::remote::toast_manifest;
use remote_toast::ui::{self, ToastOptions};

#[derive(Debug, Parser)]
#[command(name = "remote-toast", version, about = "Load a toast component from a remote at runtime")]
struct Cli {
    /// Config file (default: ~/.config/remote-toast/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Serve the toast remote's manifest
    Serve {
        /// Bind address (host:port)
        #[arg(long)]
        bind: Option<String>,
    },
    /// Load the remote toast and show it
    Show(ShowArgs),
}

#[derive(Debug, Args)]
struct ShowArgs {
    /// Toast message
    #[arg(long, default_value = "Hello from the host!")]
    message: String,

    #[arg(long, value_enum, default_value_t = ToastKind::Info)]
    kind: ToastKind,

    /// Remote module path (<remote>/<expose>)
    #[arg(long, default_value = TOAST_MODULE_PATH)]
    module: String,

    /// Export to try before the conventional ones
    #[arg(long)]
    export: Option<String>,

    #[arg(long)]
    timeout_ms: Option<u64>,

    #[arg(long)]
    retry_count: Option<u32>,

    #[arg(long)]
    retry_delay_ms: Option<u64>,

    /// How long the loaded toast stays visible
    #[arg(long)]
    duration_ms: Option<u64>,

    /// Show a loading indicator while the remote loads
    #[arg(long)]
    show_loading: bool,
}

impl ShowArgs {
    /// Apply command-line overrides on top of the file config.
    fn apply(&self, config: &mut Config) {
        if let Some(timeout_ms) = self.timeout_ms {
            config.loader.timeout_ms = timeout_ms;
        }
        if let Some(retry_count) = self.retry_count {
            config.loader.retry_count = retry_count;
        }
        if let Some(retry_delay_ms) = self.retry_delay_ms {
            config.loader.retry_delay_ms = retry_delay_ms;
        }
        if let Some(duration_ms) = self.duration_ms {
            config.toast.duration_ms = duration_ms;
        }
        if self.show_loading {
            config.toast.show_loading_state = true;
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match cli.command {
        Command::Serve { bind } => {
            logging::init_tracing();
            serve(bind.unwrap_or(config.server.bind_addr)).await
        }
        Command::Show(args) => {
            let log_path = Config::config_dir().join("remote-toast.log");
            logging::init_file_tracing(&log_path)
                .with_context(|| format!("Failed to open log file '{}'", log_path.display()))?;
            show(config, args).await
        }
    }
}

async fn serve(bind: String) -> anyhow::Result<()> {
    let server = RemoteServer::bind(&bind, toast_manifest())
        .await
        .with_context(|| format!("Failed to bind remote server to {}", bind))?;
    println!("Serving {}", server.manifest_url()?);
    server
        .run(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await?;
    Ok(())
}

async fn show(mut config: Config, args: ShowArgs) -> anyhow::Result<()> {
    args.apply(&mut config);
    config.validate()?;

    let mut request = config.loader.request_for(&args.module)?;
    if let Some(export) = &args.export {
        request = request.with_export(export.clone());
    }

    federation::register_instance(Arc::new(HttpFederation::new(config.remotes.clone())));
    let loader = RemoteLoader::new(GlobalLocator);

    let props = ToastProps::new(args.message, args.kind)
        .with_duration(config.toast.duration())
        .with_on_close(|| tracing::info!("Toast closed"));
    let options = ToastOptions::from(&config.toast);

    match ui::app::run(&loader, request, props, options).await? {
        LoadState::Failed { error } => bail!("Remote toast failed to load: {}", error),
        _ => Ok(()),
    }
}
