//! waypoint CLI
//!
//! Command-line front end of the waypoint travel itinerary planner, and
//! host of the itinerary backend (`wp serve`).

mod args;
mod cli;
mod renderer;
mod server;
mod session;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use session::SessionStore;
use waypoint_core::{Config, TravelPlannerBuilder};
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        session_file,
        config,
        backend_url,
        no_color,
        command,
    } = Args::parse();

    let mut config = Config::load(config.as_deref()).context("Failed to load configuration")?;
    if let Some(url) = backend_url {
        config.gateway.backend_url = url;
    }

    let planner = TravelPlannerBuilder::new()
        .with_database_path(database_file)
        .with_gateway_config(config.gateway.clone())
        .build()
        .await
        .context("Failed to initialize planner")?;
    let sessions = SessionStore::new(session_file)?;
    let renderer = TerminalRenderer::new(!no_color);

    info!("waypoint started");

    let cli = Cli::new(planner, renderer, sessions, config.gateway.clone());
    match command {
        Some(Signup(args)) => cli.signup(args).await,
        Some(Login(args)) => cli.login(args).await,
        Some(Logout) => cli.logout(),
        Some(Whoami) => cli.whoami(),
        Some(Generate(args)) => cli.generate(args).await,
        Some(Show(args)) => cli.show(args).await,
        Some(History) | None => cli.history().await,
        Some(Serve(args)) => {
            info!("Starting itinerary backend");
            server::run_http_server(&config.backend, args.bind)
                .await
                .context("Itinerary backend failed")
        }
    }
}
