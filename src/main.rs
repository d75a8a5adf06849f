mod api;
mod cli;
mod config;
mod display;
mod error;
mod models;
mod payload;
mod renderer;
mod services;
mod session;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use cli::draft::DraftOptions;
use cli::{Context, GlobalArgs};

#[derive(Parser)]
#[command(name = "kdcli", version)]
#[command(about = "KidsDiary CLI: prepare tomorrow's diary draft from the terminal", long_about = None)]
struct Cli {
    /// Path to config file (defaults to ~/.kdcli/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Session token to use instead of the stored session
    #[arg(long, global = true)]
    token: Option<String>,

    /// Show debug logs on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the drafts, or create/update the draft
    Draft {
        /// List the drafts (default)
        #[arg(short, long, conflicts_with = "create")]
        list: bool,

        /// Create a new draft, or replace the existing one
        #[arg(short, long)]
        create: bool,

        /// Publish the draft today
        #[arg(short = 'T', long, conflicts_with = "date")]
        today: bool,

        /// Publish the draft on this date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,

        /// Message to the teacher ("\n" starts a new line)
        #[arg(short, long)]
        message: Option<String>,

        /// Pick-up person
        #[arg(short, long)]
        pick_up_person: Option<String>,

        /// Food menu
        #[arg(short, long)]
        food_menu: Option<String>,

        /// Attach the last n album photos
        #[arg(short = 'L', long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=2))]
        use_last_photos: u8,

        /// Print the draft instead of sending it
        #[arg(long, requires = "create")]
        dry_run: bool,
    },
    /// Log in and store the session
    Login {
        #[arg(short, long)]
        user: String,

        /// Prompted for when omitted
        #[arg(short, long)]
        password: Option<String>,
    },
    /// Remove the stored session
    Logout,
    /// Album photo commands
    Photo {
        /// List the photos (default)
        #[arg(short, long, conflicts_with = "last")]
        list: bool,

        /// Print only the URLs of the last n photos, oldest first
        #[arg(long)]
        last: Option<usize>,
    },
    /// Print the version
    Version,
    /// Configuration commands
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Initialize config.toml with the default settings
    Init {
        /// Path where to create the config file
        #[arg(long)]
        path: Option<PathBuf>,
    },
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "kdcli=debug" } else { "warn" };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let global = GlobalArgs {
        config: cli.config,
        token: cli.token,
    };

    let result = match cli.command {
        Commands::Draft {
            list: _,
            create,
            today,
            date,
            message,
            pick_up_person,
            food_menu,
            use_last_photos,
            dry_run,
        } => Context::load(global).and_then(|ctx| {
            cli::draft::run(
                &ctx,
                DraftOptions {
                    create,
                    today,
                    date,
                    message,
                    pick_up_person,
                    food_menu,
                    use_last_photos: usize::from(use_last_photos),
                    dry_run,
                },
            )
        }),
        Commands::Login { user, password } => {
            Context::load(global).and_then(|ctx| cli::auth::login(&ctx, &user, password))
        }
        Commands::Logout => cli::auth::logout(),
        Commands::Photo { list: _, last } => {
            Context::load(global).and_then(|ctx| cli::photo::run(&ctx, last))
        }
        Commands::Version => cli::version(),
        Commands::Config { command } => match command {
            ConfigCommands::Init { path } => cli::config::init(path.or(global.config)),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
