// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Sweat Junkies command-line client.
//!
//! Loads the session store from the backend and prints the requested view.

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use std::sync::Arc;
use sweat_junkies::{
    config::Config,
    models::{NewActivity, NewRace, ProfileUpdate, Registration},
    services::{ApiClient, AuthService, CredentialStore, FileCredentialStore},
    time_utils::parse_form_date,
    views, SessionStore,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "sweat-junkies", version, about = "Track workouts and race results")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Log in and store the session token
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "SWEAT_JUNKIES_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Forget the stored session token
    Logout,
    /// Create an account
    Register {
        #[arg(long)]
        email: String,
        #[arg(long, env = "SWEAT_JUNKIES_PASSWORD", hide_env_values = true)]
        password: String,
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
    },
    #[command(flatten)]
    View(ViewCommand),
}

/// Commands that load the session store and print a view.
#[derive(Subcommand)]
enum ViewCommand {
    /// Show the dashboard
    Dashboard,
    /// List activities, or add one
    Activities {
        #[command(subcommand)]
        action: Option<ActivityAction>,
    },
    /// List race results, or add one
    Races {
        #[command(subcommand)]
        action: Option<RaceAction>,
    },
    /// List every race with its participants
    Participants,
    /// Edit the athlete profile
    Profile(ProfileArgs),
}

#[derive(Subcommand)]
enum ActivityAction {
    Add {
        #[arg(long)]
        description: String,
        /// YYYY-MM-DD
        #[arg(long)]
        date: String,
        /// Minutes
        #[arg(long)]
        duration: u32,
    },
}

#[derive(Subcommand)]
enum RaceAction {
    Add {
        #[arg(long)]
        name: String,
        /// YYYY-MM-DD
        #[arg(long)]
        date: String,
        #[arg(long)]
        distance: String,
        /// Finish time (hh:mm:ss)
        #[arg(long)]
        time: String,
    },
}

#[derive(Args)]
struct ProfileArgs {
    #[arg(long)]
    first_name: Option<String>,
    #[arg(long)]
    email: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let cli = Cli::parse();
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::debug!(api_url = %config.api_url, "Starting Sweat Junkies client");

    let credentials: Arc<dyn CredentialStore> =
        Arc::new(FileCredentialStore::new(config.storage_path.clone()));

    match cli.command {
        Command::Login { email, password } => {
            let auth = AuthService::new(ApiClient::from_config(&config)?, credentials);
            let athlete = auth.login(&email, &password).await?;
            println!("Welcome back, {}!", athlete.display_first_name());
        }
        Command::Logout => {
            let auth = AuthService::new(ApiClient::from_config(&config)?, credentials);
            auth.logout()?;
            println!("Logged out.");
        }
        Command::Register {
            email,
            password,
            first_name,
            last_name,
        } => {
            let auth = AuthService::new(ApiClient::from_config(&config)?, credentials);
            auth.register(&Registration {
                email,
                password,
                first_name,
                last_name,
            })
            .await?;
            println!("Registered. Log in to continue.");
        }
        Command::View(command) => {
            let store = SessionStore::from_config(&config, credentials)?;
            store.initialize().await;
            run_view(&store, command).await?;
        }
    }

    Ok(())
}

/// Run a store-backed command and print its view.
async fn run_view(store: &SessionStore, command: ViewCommand) -> anyhow::Result<()> {
    let mut out = String::new();

    match command {
        ViewCommand::Dashboard => {
            let today = chrono::Local::now().date_naive();
            views::dashboard::render(store, today, &mut out)?;
        }
        ViewCommand::Activities { action } => {
            if let Some(ActivityAction::Add {
                description,
                date,
                duration,
            }) = action
            {
                let draft = NewActivity {
                    description,
                    date: parse_form_date(&date)?,
                    duration,
                };
                store.add_activity(&draft).await?;
            }
            views::activities::render(store, &mut out)?;
        }
        ViewCommand::Races { action } => {
            if let Some(RaceAction::Add {
                name,
                date,
                distance,
                time,
            }) = action
            {
                let draft = NewRace {
                    race_name: name,
                    date: parse_form_date(&date)?,
                    distance,
                    finish_time: time,
                };
                store.add_race(&draft).await?;
            }
            views::races::render_results(store, &mut out)?;
        }
        ViewCommand::Participants => {
            // The view prints the failure from the error slot.
            if let Err(e) = store.refresh_race_participants().await {
                tracing::debug!(error = %e, "Race participants refresh failed");
            }
            views::races::render_participants(store, &mut out)?;
        }
        ViewCommand::Profile(args) => {
            let update = ProfileUpdate {
                first_name: args.first_name,
                email: args.email,
            };
            let athlete = store.update_profile(&update).await?;
            out.push_str(&format!(
                "Profile saved: {} {} <{}>\n",
                athlete.first_name, athlete.last_name, athlete.email
            ));
        }
    }

    print!("{}", out);
    Ok(())
}

/// Initialize structured JSON logging on stderr.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("sweat_junkies=info,warn")),
        )
        .with(format)
        .init();
}
