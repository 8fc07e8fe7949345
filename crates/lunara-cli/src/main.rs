use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "lunara", version, about = "Lunara cycle tracking CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Current cycle position
    Phase {
        #[command(subcommand)]
        action: commands::phase::PhaseAction,
    },
    /// Cycle history log
    Log {
        #[command(subcommand)]
        action: commands::log::LogAction,
    },
    /// Statistics over logged cycles
    Stats {
        #[command(subcommand)]
        action: commands::stats::StatsAction,
    },
    /// Tracker settings
    Settings {
        #[command(subcommand)]
        action: commands::settings::SettingsAction,
    },
    /// Per-phase guidance
    Guidance {
        #[command(subcommand)]
        action: commands::guidance::GuidanceAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Generate shell completions
    Completions {
        /// The shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Logs go to stderr with ANSI disabled so the JSON on stdout stays
/// machine-readable.
fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false),
        )
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging();

    let result = match cli.command {
        Commands::Phase { action } => commands::phase::run(action),
        Commands::Log { action } => commands::log::run(action),
        Commands::Stats { action } => commands::stats::run(action),
        Commands::Settings { action } => commands::settings::run(action),
        Commands::Guidance { action } => commands::guidance::run(action),
        Commands::Config { action } => commands::config::run(action),
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "lunara", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
