//! Societies CLI - browse and manage societies from the terminal.
//!
//! # Usage
//!
//! ```bash
//! # Validate a token and keep it in the token file
//! societies login --token "$TOKEN" --remember
//!
//! # List your societies, admin ones only
//! societies societies --role admin
//!
//! # Pending join requests for society 4, with request 12 in the details panel
//! societies requests 4 --status pending --show 12
//!
//! # Approve it
//! societies approve 4 12
//!
//! # Change settings (saves the full settings object)
//! societies settings set 4 privacy.visibility=private notifications.weekly_digest=on
//! ```
//!
//! # Environment Variables
//!
//! See `societies_client::config` for the full list; `SOCIETIES_API_URL` is
//! required for every command except `support faqs`.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use societies_client::{ClientConfig, ConfigError, LogFormat};
use societies_core::view::{RoleFilter, SettingsTab, StatusFilter};
use societies_core::{JoinRequestId, SocietyId, TicketCategory};

mod commands;
mod render;

#[derive(Parser)]
#[command(name = "societies")]
#[command(author, version, about = "Societies platform client")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a session token and optionally persist it
    Login {
        /// Session token issued by the platform
        #[arg(short, long)]
        token: String,

        /// Keep the token in the token file across runs
        #[arg(long)]
        remember: bool,
    },
    /// Forget the persisted token
    Logout,
    /// List your societies
    Societies {
        /// Role filter (`all`, `admin`, `member`)
        #[arg(short, long, default_value = "all")]
        role: RoleFilter,

        /// Print the search route for a query
        #[arg(short, long)]
        search: Option<String>,
    },
    /// List join requests for a society
    Requests {
        society: SocietyId,

        /// Status filter (`all`, `pending`, `approved`, `rejected`)
        #[arg(short, long, default_value = "all")]
        status: StatusFilter,

        /// Show one request in the details panel
        #[arg(long)]
        show: Option<JoinRequestId>,
    },
    /// Approve a pending join request
    Approve {
        society: SocietyId,
        request: JoinRequestId,
    },
    /// Reject a pending join request
    Reject {
        society: SocietyId,
        request: JoinRequestId,
    },
    /// View or change society settings
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
    /// Leave a society
    Leave { society: SocietyId },
    /// Delete a society
    Delete {
        society: SocietyId,

        /// Confirm the deletion
        #[arg(long)]
        confirm: bool,
    },
    /// Contact support or browse FAQs
    Support {
        #[command(subcommand)]
        action: SupportAction,
    },
}

#[derive(Subcommand)]
enum SettingsAction {
    /// Show one settings panel
    Show {
        society: SocietyId,

        /// Panel (`general`, `privacy`, `permissions`, `notifications`, `danger`)
        #[arg(short, long, default_value = "general")]
        tab: SettingsTab,
    },
    /// Apply `<path>=<value>` edits, then save
    Set {
        society: SocietyId,

        /// Edits such as `privacy.visibility=private`
        #[arg(required = true)]
        assignments: Vec<String>,
    },
}

#[derive(Subcommand)]
enum SupportAction {
    /// Submit a support ticket
    Ticket {
        /// Category (`general`, `technical`, `account`, `billing`, `feedback`)
        #[arg(short, long, default_value = "general")]
        category: TicketCategory,

        #[arg(short, long)]
        subject: String,

        #[arg(short, long)]
        message: String,
    },
    /// List the frequently asked questions
    Faqs {
        /// Only show entries mentioning this text
        #[arg(short, long)]
        search: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let config = ClientConfig::from_env();

    init_tracing(config.as_ref().map_or(LogFormat::Text, |c| c.log_format));

    let result: Result<(), Box<dyn std::error::Error>> = run(cli, config).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

/// Defaults to info level for the societies crates if `RUST_LOG` is not set.
fn init_tracing(format: LogFormat) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "societies_client=info,societies_cli=info".into());

    let json = format == LogFormat::Json;
    let json_layer = json.then(|| tracing_subscriber::fmt::layer().json().flatten_event(true));
    let text_layer = (!json).then(tracing_subscriber::fmt::layer);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .init();
}

async fn run(
    cli: Cli,
    config: Result<ClientConfig, ConfigError>,
) -> Result<(), Box<dyn std::error::Error>> {
    // FAQs are bundled and need no backend.
    if let Commands::Support {
        action: SupportAction::Faqs { search },
    } = &cli.command
    {
        commands::support::faqs(search.as_deref());
        return Ok(());
    }

    let config = config?;
    match cli.command {
        Commands::Login { token, remember } => {
            commands::auth::login(&config, token, remember).await?;
        }
        Commands::Logout => commands::auth::logout(&config)?,
        Commands::Societies { role, search } => {
            let api = commands::connect(&config)?;
            commands::societies::list(&api, role, search.as_deref()).await;
        }
        Commands::Requests {
            society,
            status,
            show,
        } => {
            let api = commands::connect(&config)?;
            commands::requests::list(&api, society, status, show).await?;
        }
        Commands::Approve { society, request } => {
            let api = commands::connect(&config)?;
            commands::requests::approve(&api, society, request).await?;
        }
        Commands::Reject { society, request } => {
            let api = commands::connect(&config)?;
            commands::requests::reject(&api, society, request).await?;
        }
        Commands::Settings { action } => {
            let api = commands::connect(&config)?;
            match action {
                SettingsAction::Show { society, tab } => {
                    commands::settings::show(&api, society, tab).await;
                }
                SettingsAction::Set {
                    society,
                    assignments,
                } => commands::settings::set(&api, society, &assignments).await?,
            }
        }
        Commands::Leave { society } => {
            let api = commands::connect(&config)?;
            commands::settings::leave(&api, society).await?;
        }
        Commands::Delete { society, confirm } => {
            let api = commands::connect(&config)?;
            commands::settings::delete(&api, society, confirm).await;
        }
        Commands::Support { action } => match action {
            SupportAction::Ticket {
                category,
                subject,
                message,
            } => {
                let api = commands::connect(&config)?;
                commands::support::ticket(&api, category, subject, message).await?;
            }
            SupportAction::Faqs { search } => commands::support::faqs(search.as_deref()),
        },
    }
    Ok(())
}
