//! Woken Architect CLI and REST API entry point.
//!
//! Binary name: `architect`
//!
//! Parses CLI arguments, sets up tracing, then dispatches to a command
//! handler or starts the REST API server.

mod cli;
mod http;
mod state;

use clap::Parser;
use clap_complete::generate;

use architect_observe::tracing_setup::{init_tracing, shutdown_tracing};

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,architect_core=debug,architect_infra=debug,architect_api=debug",
        _ => "trace",
    };
    if let Err(e) = init_tracing(filter, cli.json, cli.otel) {
        eprintln!("Warning: failed to initialize tracing: {e}");
    }

    let result = run(cli).await;
    shutdown_tracing();
    result
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    // Commands that need no credentials
    match &cli.command {
        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            generate(*shell, &mut cmd, "architect", &mut std::io::stdout());
            return Ok(());
        }
        Commands::Presets => {
            cli::presets::list_presets(cli.json)?;
            return Ok(());
        }
        Commands::Schema { remote } => {
            cli::schema::print_schema(*remote)?;
            return Ok(());
        }
        _ => {}
    }

    let state = AppState::init().await?;

    match cli.command {
        Commands::Generate {
            prompt,
            preset,
            copy,
        } => {
            cli::generate::generate(&state, prompt, preset, copy, cli.json).await?;
        }

        Commands::Repl => {
            cli::repl::run_repl(&state).await?;
        }

        Commands::Serve { host, port } => {
            let host = host.unwrap_or_else(|| state.config.server.host.clone());
            let port = port.unwrap_or(state.config.server.port);
            let addr = format!("{host}:{port}");
            let listener = tokio::net::TcpListener::bind(&addr).await?;

            println!(
                "  {} Woken Architect API listening on {}",
                console::style("⚡").bold(),
                console::style(format!("http://{addr}/api/v1")).cyan()
            );
            println!("  {}", console::style("Press Ctrl+C to stop").dim());

            tracing::info!(data_dir = %state.data_dir.display(), %addr, "Starting API server");
            let router = http::router::build_router(state);

            axum::serve(listener, router)
                .with_graceful_shutdown(shutdown_signal())
                .await?;

            println!("\n  Server stopped.");
        }

        Commands::Completions { .. } | Commands::Presets | Commands::Schema { .. } => {
            unreachable!("handled above")
        }
    }

    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
