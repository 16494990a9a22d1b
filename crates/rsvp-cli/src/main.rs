//! RSVP CLI - Command-line client for the wedding guest registry.

use clap::{Parser, Subcommand};
use rsvp_cli::{
    commands::{self, CompanionAnswer},
    RsvpClient, DEFAULT_SERVER,
};
use rsvp_registry::Host;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// RSVP - wedding guest registry client
#[derive(Parser, Debug)]
#[command(name = "rsvp")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Node URL
    #[arg(long, env = "RSVP_SERVER", default_value = DEFAULT_SERVER)]
    server: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List guests and the head-count summary
    List,

    /// Show one guest
    Show {
        /// Guest name
        name: String,
    },

    /// Invite a guest
    Add {
        /// Guest name
        name: String,
        /// Inviting host (Molly or James)
        #[arg(long)]
        host: Host,
        /// The guest is family
        #[arg(long)]
        family: bool,
    },

    /// Record a guest's answers
    Update {
        /// Guest name
        name: String,
        /// Dietary restrictions ('none' if none)
        #[arg(long)]
        dietary: String,
        /// Name of the companion the guest is bringing
        #[arg(long, conflicts_with = "not_bringing", requires = "companion_dietary")]
        bringing: Option<String>,
        /// Dietary restrictions of the companion
        #[arg(long, requires = "bringing")]
        companion_dietary: Option<String>,
        /// The guest is coming alone
        #[arg(long)]
        not_bringing: bool,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("rsvp_cli={log_level},rsvp_registry={log_level}").into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let client = RsvpClient::new(cli.server)?;
    tracing::debug!(server = %client.base_url(), "Using node");

    match cli.command {
        Commands::List => commands::list(&client).await?,
        Commands::Show { name } => commands::show(&client, &name).await?,
        Commands::Add { name, host, family } => {
            commands::add(&client, &name, host, family).await?;
        }
        Commands::Update {
            name,
            dietary,
            bringing,
            companion_dietary,
            not_bringing,
        } => {
            let companion = match (bringing, not_bringing) {
                (Some(name), _) => CompanionAnswer::Bringing {
                    name,
                    dietary: companion_dietary.unwrap_or_default(),
                },
                (None, true) => CompanionAnswer::NotBringing,
                (None, false) => CompanionAnswer::Unknown,
            };
            commands::update(&client, &name, &dietary, companion).await?;
        }
    }
    Ok(())
}
