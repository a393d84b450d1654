mod adapters;
mod repl;
mod terminal_output;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tokio::io::BufReader;
use tracing::{info, warn};

use chatline_commands::{ClientState, Collaborators, CommandRegistry, CommandRouter, EmotionDictionary};
use chatline_config::{ClientConfig, YamlPreferenceStore};
use chatline_core::{MessageCatalog, SystemClock};
use chatline_protocol::{spawn_transport, NetworkEgress, PacketVersion};

use adapters::{JsonLineTransport, LoggedEffects, LoggedSubsystems, StaticMap};

#[derive(Parser)]
#[command(name = "chatline")]
#[command(about = "Chatline: slash-command console for the game client")]
#[command(version)]
struct Cli {
    /// Config file (default: `<config dir>/config.yaml`)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the configured packet version
    #[arg(long, global = true)]
    packet_version: Option<u32>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Read chat lines from stdin (default)
    Run {
        /// Map the session starts on
        #[arg(long, default_value = "prontera")]
        map: String,
    },
    /// List the registered chat commands
    Commands,
    /// Write the effective config back to disk
    InitConfig,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_dir = chatline_config::config_dir();
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| chatline_config::config_file_path(&config_dir));

    let mut config = match chatline_config::load_and_prepare(&config_path).await {
        Ok(config) => config,
        Err(e) => {
            terminal_output::note_error(&format!("{e:#}"));
            std::process::exit(1);
        }
    };
    if let Some(version) = cli.packet_version {
        config.packet_version = Some(version);
    }

    match config.log_dir() {
        Some(dir) => chatline_logging::init_logger(dir, config.log_level()),
        None => chatline_logging::init_console_logger(config.log_level()),
    }

    match cli.command.unwrap_or(Commands::Run { map: "prontera".to_string() }) {
        Commands::Run { map } => run_console(&config, &config_dir, map).await?,
        Commands::Commands => print_commands(),
        Commands::InitConfig => {
            chatline_config::write_config(&config, &config_path).await?;
            println!("Wrote {}", config_path.display());
        }
    }

    Ok(())
}

async fn run_console(config: &ClientConfig, config_dir: &Path, map: String) -> Result<()> {
    let packet_version: PacketVersion = config.packet_version();
    info!(%packet_version, map = %map, "Starting chatline console");

    let store = Arc::new(YamlPreferenceStore::new(config.preferences_dir(config_dir)));
    let prefs = store.load().unwrap_or_else(|e| {
        warn!(error = %e, "Failed to restore preferences; using defaults");
        terminal_output::note_warn("Saved preferences could not be read; using defaults");
        Default::default()
    });

    let messages = load_messages(config).await?;
    let emotions = EmotionDictionary::with_overrides(config.emotions.clone());

    let (egress, rx) = NetworkEgress::channel();
    let transport = spawn_transport(rx, Arc::new(JsonLineTransport::stdout()));

    let env = Collaborators {
        messages: Arc::new(messages),
        emotions: Arc::new(emotions),
        store,
        effects: Arc::new(LoggedEffects),
        subsystems: Arc::new(LoggedSubsystems),
        map: Arc::new(StaticMap::new(map)),
        clock: Arc::new(SystemClock::new()),
        egress,
    };

    let mut state = ClientState::new(packet_version);
    state.prefs = prefs;
    state.bonus_window = config.bonus_window();
    let mut router = CommandRouter::new(state, env);

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    repl::run(&mut router, stdin, &mut stdout, terminal_output::supports_color()).await?;

    // Dropping the router drops the last egress, which ends the pump.
    drop(router);
    transport.await.context("Transport task panicked")?;
    info!("Console closed");
    Ok(())
}

async fn load_messages(config: &ClientConfig) -> Result<MessageCatalog> {
    let Some(path) = &config.messages_file else {
        warn!("No messages file configured; lines will show message ids");
        return Ok(MessageCatalog::new());
    };
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read messages file: {}", path.display()))?;
    let catalog = MessageCatalog::from_msgstringtable(&raw);
    info!(path = %path.display(), entries = catalog.len(), "Loaded message table");
    Ok(catalog)
}

fn print_commands() {
    let rows = command_rows(&CommandRegistry::new());
    print!(
        "{}",
        terminal_output::render_table(&["Command", "Category", "Keywords", "Description"], &rows)
    );
}

/// One table row per command, named by its primary keyword.
fn command_rows(registry: &CommandRegistry) -> Vec<Vec<String>> {
    registry
        .all()
        .iter()
        .map(|def| {
            let mut keywords = def.aliases.join(", ");
            if def.takes_argument {
                keywords.push_str(" <name>");
            }
            vec![
                def.primary_alias().to_string(),
                format!("{:?}", def.category).to_lowercase(),
                keywords,
                def.description.clone(),
            ]
        })
        .collect()
}
