use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{CredentialsArgs, GenerateArgs, ServeArgs, ShowArgs};

/// Plan trips with a local language model
///
/// waypoint turns an origin, destination, date range, interests and pace
/// into a day-by-day itinerary. Itineraries come from an itinerary backend
/// (`wp serve`, which prompts Ollama); when it is unreachable a simple
/// template is used instead. Every itinerary is kept in your history.
#[derive(Parser)]
#[command(version, about, name = "wp")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/waypoint/waypoint.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Path to the login session file. Defaults to
    /// $XDG_STATE_HOME/waypoint/session.json
    #[arg(long, global = true)]
    pub session_file: Option<PathBuf>,

    /// Path to the YAML configuration file. Defaults to
    /// $XDG_CONFIG_HOME/waypoint/config.yaml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Base URL of the itinerary backend, overriding the configuration
    #[arg(long, global = true)]
    pub backend_url: Option<String>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the waypoint CLI
///
/// With no command, `wp` shows the history of the logged-in user.
#[derive(Subcommand)]
pub enum Commands {
    /// Create an account
    Signup(CredentialsArgs),
    /// Log in and remember the session
    Login(CredentialsArgs),
    /// Forget the current session
    Logout,
    /// Show who is logged in
    Whoami,
    /// Generate an itinerary for a trip
    #[command(alias = "g")]
    Generate(GenerateArgs),
    /// List saved itineraries, newest first
    #[command(alias = "h")]
    History,
    /// Show one saved itinerary
    Show(ShowArgs),
    /// Run the itinerary backend HTTP server
    Serve(ServeArgs),
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_args_are_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_no_command_is_allowed() {
        let args = Args::try_parse_from(["wp", "--no-color"]).unwrap();
        assert!(args.command.is_none());
        assert!(args.no_color);
    }

    #[test]
    fn test_aliases() {
        let args = Args::try_parse_from(["wp", "g"]).unwrap();
        assert!(matches!(args.command, Some(Commands::Generate(_))));
        let args = Args::try_parse_from(["wp", "h"]).unwrap();
        assert!(matches!(args.command, Some(Commands::History)));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = Args::try_parse_from([
            "wp",
            "history",
            "--database-file",
            "/tmp/w.db",
            "--backend-url",
            "http://127.0.0.1:9",
        ])
        .unwrap();
        assert_eq!(args.database_file, Some(PathBuf::from("/tmp/w.db")));
        assert_eq!(args.backend_url.as_deref(), Some("http://127.0.0.1:9"));
    }
}
