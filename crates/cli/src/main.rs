//! tenantctl - provisioning CLI for multi-tenant Elasticsearch/Kibana.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Assemble the typed configuration (CLI flags over `TENANTCTL_*` env).
//! - Execute provisioning and migration commands via the client library.
//!
//! Does NOT handle:
//! - REST API implementation (see `crates/client`).
//! - Configuration persistence.
//!
//! Invariants:
//! - `.env` is loaded BEFORE CLI parsing so clap env defaults can read it.
//! - Output is JSON on stdout; logs and errors go to stderr.

mod args;
mod commands;
mod dispatch;
mod error;

use args::Cli;
use clap::Parser;
use error::{ExitCode, ExitCodeExt};
use secrecy::SecretString;
use tenantctl_config::ConfigLoader;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() {
    // Load .env before CLI parsing so clap env defaults can read .env values
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    // CLI flags take precedence; the loader fills the rest from env.
    let mut loader = ConfigLoader::new();
    if let Some(host) = cli.es_host.clone() {
        loader = loader.with_elasticsearch_host(host);
    }
    if let Some(port) = cli.es_port {
        loader = loader.with_elasticsearch_port(port);
    }
    if let Some(host) = cli.kb_host.clone() {
        loader = loader.with_kibana_host(host);
    }
    if let Some(port) = cli.kb_port {
        loader = loader.with_kibana_port(port);
    }
    if let Some(username) = cli.username.clone() {
        loader = loader.with_username(username);
    }
    if let Some(password) = cli.password.clone() {
        loader = loader.with_password(SecretString::new(password.into()));
    }
    if let Some(index) = cli.index.clone() {
        loader = loader.with_index_name(index);
    }
    if cli.skip_verify {
        loader = loader.with_skip_verify(true);
    }
    if let Some(path) = cli.ca_bundle.clone() {
        loader = loader.with_ca_bundle(path);
    }
    if let Some(timeout_secs) = cli.timeout {
        loader = loader.with_timeout(std::time::Duration::from_secs(timeout_secs));
    }

    let loader = match loader.from_env() {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Failed to load configuration from environment: {}", e);
            std::process::exit(ExitCode::ValidationError.as_i32());
        }
    };
    let config = match loader.build() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to build configuration: {}", e);
            std::process::exit(ExitCode::ValidationError.as_i32());
        }
    };

    let exit_code = match dispatch::run_command(cli.command, &config).await {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}
