use crate::config::ServiceConfig;
use crate::router::Router;
use crate::runtime_config::RuntimeConfig;
use crate::server::{AppService, HttpServer, ServerHandle};
use crate::spec::{openapi_document, routes};
use crate::store::{InMemoryPetStore, PetRepository};
use crate::telemetry::{init_logging, LogConfig};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Command-line interface for the pet store service
#[derive(Parser, Debug)]
#[command(name = "petstore")]
#[command(about = "Pet store HTTP service", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP service
    Serve {
        /// Address to bind, e.g. 0.0.0.0:8080
        #[arg(long, env = "PETSTORE_ADDR")]
        addr: Option<String>,

        /// YAML service configuration file
        #[arg(short, long, env = "PETSTORE_CONFIG")]
        config: Option<PathBuf>,

        /// Start with an empty store instead of the demo pets
        #[arg(long, default_value_t = false)]
        no_demo: bool,
    },
    /// Print the route table in match order
    Routes,
    /// Print the OpenAPI document
    Openapi {
        #[arg(long, value_enum, default_value_t = DocFormat::Json)]
        format: DocFormat,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum DocFormat {
    Json,
    Yaml,
}

/// Parse the process arguments and run the selected command.
///
/// # Errors
///
/// Returns an error if configuration loading, logging setup or server
/// startup fails.
pub fn run_cli() -> Result<()> {
    run(Cli::parse())
}

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Serve {
            addr,
            config,
            no_demo,
        } => serve(addr, config, no_demo),
        Commands::Routes => print_routes(&mut std::io::stdout().lock()),
        Commands::Openapi { format } => print_openapi(format, &mut std::io::stdout().lock()),
    }
}

/// Write one `METHOD pattern -> handler` line per route, in match order.
pub fn print_routes(out: &mut impl Write) -> Result<()> {
    let router = Router::new(routes());
    for route in router.routes() {
        writeln!(
            out,
            "{:<7} {:<20} -> {}",
            route.method.as_str(),
            route.path_pattern,
            route.handler_name
        )?;
    }
    Ok(())
}

pub fn print_openapi(format: DocFormat, out: &mut impl Write) -> Result<()> {
    let doc = openapi_document(&routes());
    match format {
        DocFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &doc)?;
            writeln!(out)?;
        }
        DocFormat::Yaml => {
            let yaml = serde_yaml::to_string(&doc).context("failed to render OpenAPI YAML")?;
            out.write_all(yaml.as_bytes())?;
        }
    }
    Ok(())
}

fn serve(addr: Option<String>, config: Option<PathBuf>, no_demo: bool) -> Result<()> {
    let _log_guard = init_logging(&LogConfig::from_env())?;

    let mut service_config = match &config {
        Some(path) => ServiceConfig::load(path)?,
        None => ServiceConfig::default(),
    };
    if let Some(addr) = addr {
        service_config.http.addr = addr;
    }
    if no_demo {
        service_config.seed.demo = false;
    }

    RuntimeConfig::from_env().apply();

    let store: InMemoryPetStore = service_config.build_store();
    info!(
        pets = store.len(),
        demo = service_config.seed.demo,
        "Pet store initialized"
    );
    let service = AppService::for_store(Arc::new(store));

    let handle = HttpServer(service)
        .start(service_config.http.addr.as_str())
        .with_context(|| format!("failed to bind {}", service_config.http.addr))?;
    info!(addr = %handle.addr(), "Listening");

    wait_for_shutdown(handle)
}

#[cfg(unix)]
fn wait_for_shutdown(handle: ServerHandle) -> Result<()> {
    use signal_hook::consts::{SIGINT, SIGTERM};
    use signal_hook::iterator::Signals;

    let mut signals =
        Signals::new([SIGINT, SIGTERM]).context("failed to install signal handlers")?;
    if let Some(signal) = signals.forever().next() {
        info!(signal, "Shutdown signal received");
    }
    handle.stop();
    info!("Server stopped");
    Ok(())
}

#[cfg(not(unix))]
fn wait_for_shutdown(handle: ServerHandle) -> Result<()> {
    handle
        .join()
        .map_err(|e| anyhow::anyhow!("server coroutine panicked: {e:?}"))
}
