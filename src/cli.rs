//! CLI definitions and entry point

use clap::{Parser, Subcommand};

use crate::commands;
use newsproof::core::models::RecordStatus;
use newsproof::core::ports::ContractBackend;
use newsproof::output::OutputMode;

/// newsproof - News records with simulated confidential verification
#[derive(Parser, Debug)]
#[command(
    name = "newsproof",
    version,
    about = "News records with simulated confidential verification",
    long_about = "Submit, list, verify and dispute news records stored on a key/value contract.\n\n\
                  Records are enumerated through an index entry. Content encryption is a\n\
                  base64 placeholder, not real homomorphic encryption."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a default config file
    Init {
        /// Contract backend: file, memory
        #[arg(short, long, default_value = "file")]
        backend: ContractBackend,

        /// Overwrite an existing config
        #[arg(short, long)]
        force: bool,
    },

    /// Connect a wallet account to the session
    Connect {
        /// Account address
        account: String,
    },

    /// Disconnect the session's account
    Disconnect,

    /// List news records, newest first
    List {
        /// Filter by status: pending, verified, disputed
        #[arg(short, long)]
        status: Option<RecordStatus>,
    },

    /// Show a single record
    Show {
        /// Record ID
        id: String,

        /// Decode the placeholder ciphertext
        #[arg(long)]
        reveal: bool,
    },

    /// Submit a news record
    Submit {
        /// News organization or source
        #[arg(short, long)]
        source: String,

        /// Category (Politics, Technology, Business, ...)
        #[arg(short, long, default_value = "")]
        category: String,

        /// News content
        #[arg(short = 'm', long)]
        content: String,
    },

    /// Mark a record as verified (credibility 95)
    Verify {
        /// Record ID
        id: String,
    },

    /// Mark a record as disputed (credibility 25)
    Dispute {
        /// Record ID
        id: String,
    },

    /// Check contract availability and session
    Status,

    /// Show dashboard statistics
    Stats,

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Init { backend, force }) => commands::init(backend, force, output_mode),
        Some(Command::Connect { account }) => commands::connect(&account, output_mode),
        Some(Command::Disconnect) => commands::disconnect(output_mode),
        Some(Command::List { status }) => commands::list(status, output_mode),
        Some(Command::Show { id, reveal }) => commands::show(&id, reveal, output_mode),
        Some(Command::Submit {
            source,
            category,
            content,
        }) => commands::submit(source, category, content, output_mode),
        Some(Command::Verify { id }) => commands::verify(&id, output_mode),
        Some(Command::Dispute { id }) => commands::dispute(&id, output_mode),
        Some(Command::Status) => commands::status(output_mode),
        Some(Command::Stats) => commands::stats(output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": newsproof::VERSION
                    })
                );
            } else {
                println!("newsproof v{}", newsproof::VERSION);
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": newsproof::VERSION,
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("newsproof v{}", newsproof::VERSION);
                println!("\nRun 'newsproof --help' for usage");
                println!("Run 'newsproof init' to get started");
            }
            Ok(())
        },
    }
}
