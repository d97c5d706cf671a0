//! Command-line argument wrappers and command handlers.
//!
//! Each command's arguments live in a clap `Args` struct that converts into
//! the matching core parameter type, keeping clap out of `waypoint-core`:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → TravelPlanner
//! ```

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use jiff::{civil::Date, Zoned};
use log::debug;
use waypoint_core::{
    models::{Pace, TripRequest},
    params::{Credentials, ShowItinerary},
    GatewayConfig, OperationStatus, TravelPlanner,
};

use crate::{renderer::TerminalRenderer, session::SessionStore};

/// Email and password
#[derive(Args)]
pub struct CredentialsArgs {
    /// Account email address
    pub email: String,
    /// Account password (at least 6 characters)
    pub password: String,
}

impl From<CredentialsArgs> for Credentials {
    fn from(val: CredentialsArgs) -> Self {
        Credentials {
            email: val.email,
            password: val.password,
        }
    }
}

/// Travel pace
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum PaceArg {
    /// Few activities, plenty of downtime
    Relaxed,
    /// A typical sightseeing day
    Normal,
    /// Packed schedule
    Tight,
}

impl From<PaceArg> for Pace {
    fn from(val: PaceArg) -> Self {
        match val {
            PaceArg::Relaxed => Pace::Relaxed,
            PaceArg::Normal => Pace::Normal,
            PaceArg::Tight => Pace::Tight,
        }
    }
}

/// Generate an itinerary
///
/// Dates default to today. The backend may take a few minutes to answer;
/// when it cannot be reached a template itinerary is produced instead.
#[derive(Args)]
pub struct GenerateArgs {
    /// City the trip starts from
    #[arg(long, default_value = "Ho Chi Minh City")]
    pub origin: String,

    /// City to visit
    #[arg(long, default_value = "Da Nang")]
    pub destination: String,

    /// First day of the trip (YYYY-MM-DD)
    #[arg(long)]
    pub start: Option<Date>,

    /// Last day of the trip, inclusive (YYYY-MM-DD)
    #[arg(long)]
    pub end: Option<Date>,

    /// Comma-separated interests
    #[arg(long, value_delimiter = ',', default_value = "Food,Nature")]
    pub interests: Vec<String>,

    /// Travel pace
    #[arg(long, value_enum, default_value_t = PaceArg::Normal)]
    pub pace: PaceArg,

    /// Model for the backend to use. Defaults to the configured model
    #[arg(long)]
    pub model: Option<String>,
}

impl GenerateArgs {
    /// Builds the trip request, filling dates with `today` and the model with
    /// `default_model` where not given.
    pub fn into_trip(self, today: Date, default_model: &str) -> TripRequest {
        TripRequest {
            origin: self.origin,
            destination: self.destination,
            start_date: self.start.unwrap_or(today),
            end_date: self.end.unwrap_or(today),
            interests: self
                .interests
                .into_iter()
                .map(|i| i.trim().to_string())
                .filter(|i| !i.is_empty())
                .collect(),
            pace: self.pace.into(),
            model: self.model.unwrap_or_else(|| default_model.to_string()),
        }
    }
}

/// Show a saved itinerary
#[derive(Args)]
pub struct ShowArgs {
    /// Id of the itinerary, as listed by `wp history`
    pub timestamp: i64,
}

impl From<ShowArgs> for ShowItinerary {
    fn from(val: ShowArgs) -> Self {
        ShowItinerary {
            timestamp: val.timestamp,
        }
    }
}

/// Run the itinerary backend
#[derive(Args)]
pub struct ServeArgs {
    /// Address to listen on. Defaults to the configured bind address
    #[arg(long)]
    pub bind: Option<SocketAddr>,
}

/// Command handlers for user-facing operations.
pub struct Cli {
    planner: TravelPlanner,
    renderer: TerminalRenderer,
    sessions: SessionStore,
    gateway: GatewayConfig,
}

impl Cli {
    pub fn new(
        planner: TravelPlanner,
        renderer: TerminalRenderer,
        sessions: SessionStore,
        gateway: GatewayConfig,
    ) -> Self {
        Self {
            planner,
            renderer,
            sessions,
            gateway,
        }
    }

    pub async fn signup(&self, args: CredentialsArgs) -> Result<()> {
        let user = self.planner.signup(&args.into()).await?;
        self.renderer.render(&user.to_string())?;
        self.renderer
            .render("\nRun `wp login <email> <password>` to start planning.\n")
    }

    pub async fn login(&self, args: CredentialsArgs) -> Result<()> {
        let session = self.planner.login(&args.into()).await?;
        self.sessions.save(&session)?;
        self.renderer.render(&session.to_string())
    }

    pub fn logout(&self) -> Result<()> {
        let status = if self.sessions.clear()? {
            OperationStatus::success("Logged out")
        } else {
            OperationStatus::failure("Not logged in")
        };
        self.renderer.render(&status.to_string())
    }

    pub fn whoami(&self) -> Result<()> {
        let session = self.sessions.require()?;
        self.renderer.render(&session.to_string())
    }

    pub async fn generate(&self, args: GenerateArgs) -> Result<()> {
        let session = self.sessions.require()?;
        let trip = args.into_trip(Zoned::now().date(), &self.gateway.model);
        trip.validate()?;

        debug!("Trip request: {trip:?}");
        eprintln!(
            "Generating your itinerary. This can take up to {} seconds...",
            self.gateway.timeout_secs
        );

        let draft = self
            .planner
            .draft_itinerary(&trip)
            .await
            .context("Failed to generate itinerary")?;
        self.renderer.render(&draft.to_string())?;

        let record = self
            .planner
            .save_itinerary(&session, &draft)
            .await
            .context("Failed to save itinerary")?;
        self.renderer
            .render(&format!("\nSaved to history as {}.\n", record.timestamp))
    }

    pub async fn history(&self) -> Result<()> {
        let session = self.sessions.require()?;
        let history = self
            .planner
            .history(&session)
            .await
            .context("Failed to load history")?;
        self.renderer.render(&history.to_string())
    }

    pub async fn show(&self, args: ShowArgs) -> Result<()> {
        let session = self.sessions.require()?;
        let record = self.planner.show_itinerary(&session, &args.into()).await?;
        self.renderer.render(&record.to_string())
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use jiff::civil::date;

    use super::*;

    #[derive(Parser)]
    struct TestGenerate {
        #[command(flatten)]
        args: GenerateArgs,
    }

    #[test]
    fn test_generate_defaults() {
        let parsed = TestGenerate::try_parse_from(["generate"]).unwrap();
        let today = date(2024, 5, 20);
        let trip = parsed.args.into_trip(today, "llama3");

        assert_eq!(trip.origin, "Ho Chi Minh City");
        assert_eq!(trip.destination, "Da Nang");
        assert_eq!(trip.start_date, today);
        assert_eq!(trip.end_date, today);
        assert_eq!(trip.interests, vec!["Food", "Nature"]);
        assert_eq!(trip.pace, Pace::Normal);
        assert_eq!(trip.model, "llama3");
    }

    #[test]
    fn test_generate_options() {
        let parsed = TestGenerate::try_parse_from([
            "generate",
            "--origin",
            "Hanoi",
            "--start",
            "2024-03-01",
            "--end",
            "2024-03-03",
            "--interests",
            "Museums, Nightlife,",
            "--pace",
            "tight",
            "--model",
            "mistral",
        ])
        .unwrap();
        let trip = parsed.args.into_trip(date(2000, 1, 1), "llama3");

        assert_eq!(trip.origin, "Hanoi");
        assert_eq!(trip.start_date, date(2024, 3, 1));
        assert_eq!(trip.end_date, date(2024, 3, 3));
        assert_eq!(trip.interests, vec!["Museums", "Nightlife"]);
        assert_eq!(trip.pace, Pace::Tight);
        assert_eq!(trip.model, "mistral");
    }

    #[test]
    fn test_invalid_date_is_rejected_by_parser() {
        assert!(TestGenerate::try_parse_from(["generate", "--start", "June 1st"]).is_err());
    }

    #[test]
    fn test_unknown_pace_is_rejected() {
        assert!(TestGenerate::try_parse_from(["generate", "--pace", "frantic"]).is_err());
    }
}
