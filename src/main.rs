mod adapters;
mod core;
mod global_constants;
mod plugins;
mod ports;

#[cfg(test)]
mod test_doubles;

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;

use crate::adapters::{GoogleImageSearchBackend, HttpImageProbe};
use crate::core::interfaces::adapters::ChatPlugin;
use crate::core::models::BotSettings;
use crate::core::orchestrators::{ChatBot, ImageSearchOrchestrator};
use crate::global_constants::{APPLICATION_NAME, LOG_TAG_MAIN};
use crate::plugins::{GisCommandPlugin, IdentityPlugin};
use crate::ports::ConsoleChatPort;

#[derive(Debug, Parser)]
#[command(
    name = "gesture-gis",
    version,
    about = "Chat bot that answers `gis <phrase>` with a random matching image"
)]
struct Cli {
    /// Settings file (defaults to the per-user config directory)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Channel for input lines that do not start with `#channel`
    #[arg(long, value_name = "CHANNEL")]
    channel: Option<String>,

    /// Name the bot answers to
    #[arg(long, value_name = "NAME")]
    name: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    log::info!("{} Starting {}", LOG_TAG_MAIN, APPLICATION_NAME);

    let mut settings = BotSettings::load(cli.config.as_deref()).unwrap_or_else(|e| {
        log::warn!("{} Failed to load settings: {}, using defaults", LOG_TAG_MAIN, e);
        BotSettings::default()
    });
    if let Some(channel) = cli.channel {
        settings.default_channel = channel;
    }
    if let Some(name) = cli.name {
        settings.bot_name = name;
    }
    let settings = Arc::new(settings);

    let http_client = reqwest::Client::builder()
        .timeout(settings.gis.probe_timeout())
        .build()?;

    let image_search = Arc::new(ImageSearchOrchestrator::build(
        Arc::new(GoogleImageSearchBackend::new(
            http_client.clone(),
            settings.gis.search_url.clone(),
        )),
        Arc::new(HttpImageProbe::new(http_client)),
        settings.gis.deadline(),
    ));

    let plugins: Vec<Arc<dyn ChatPlugin>> = vec![
        Arc::new(IdentityPlugin::new(settings.bot_name.clone())),
        Arc::new(GisCommandPlugin::new(Arc::clone(&settings), image_search)),
    ];
    let bot = Arc::new(ChatBot::build(plugins));

    log::info!(
        "{} {} listening on stdin (default channel {})",
        LOG_TAG_MAIN,
        settings.bot_name,
        settings.default_channel
    );

    let console = ConsoleChatPort::initialize(settings.default_channel.clone());
    console
        .run(bot, tokio::io::stdin(), tokio::io::stdout())
        .await?;

    log::info!("{} Exiting", LOG_TAG_MAIN);
    Ok(())
}
