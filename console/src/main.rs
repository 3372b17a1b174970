mod config;
mod input;
mod render;

use clap::Parser;
use std::io;
use std::path::PathBuf;
use trigram_common::config::Validate;
use trigram_common::games::SessionRng;
use trigram_common::games::trigram::{
    BotType, FirstPlayerMode, SessionResult, TrigramSession, TrigramSessionSettings,
};
use trigram_common::{log, logger};

use config::{ConsoleConfig, get_config_manager};
use input::TerminalInput;
use render::ConsoleRenderer;

#[derive(Parser)]
#[command(name = "trigram", about = "Place C, S and E on a 3x3 board against a minimax bot")]
struct Args {
    /// Config file, defaults to trigram_config.yaml next to the executable
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    seed: Option<u64>,

    /// random, computer or human
    #[arg(long)]
    first: Option<FirstPlayerMode>,

    /// minimax or random
    #[arg(long)]
    bot: Option<BotType>,

    #[arg(long)]
    verbose: bool,

    #[arg(long)]
    log_prefix: Option<String>,

    /// Write the effective configuration back to the config file
    #[arg(long)]
    save_config: bool,
}

impl Args {
    fn apply_to(&self, config: &mut ConsoleConfig) {
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(first) = self.first {
            config.first_player = first;
        }
        if let Some(bot) = self.bot {
            config.bot = bot;
        }
        if self.verbose {
            config.verbose = true;
        }
        if let Some(prefix) = &self.log_prefix {
            config.log_prefix = Some(prefix.clone());
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config_manager = get_config_manager(args.config.clone());
    let mut config = config_manager.get_config()?;
    args.apply_to(&mut config);
    config.validate()?;

    logger::init_logger(config.log_prefix.clone(), config.verbose);
    log!("Using config file {}", config_manager.path().display());

    if args.save_config {
        config_manager.set_config(&config)?;
        log!("Saved configuration");
    }

    let mut rng = config
        .seed
        .map(SessionRng::new)
        .unwrap_or_else(SessionRng::from_random);
    log!("Session seed {}", rng.seed());

    let settings = TrigramSessionSettings {
        first_player_mode: config.first_player,
        bot_type: config.bot,
    };
    let mut input = TerminalInput::new(io::stdin().lock(), io::stdout());
    let mut renderer = ConsoleRenderer::new(
        io::stdout(),
        config.computer_name.clone(),
        config.human_name.clone(),
    );

    match TrigramSession::run(&settings, &mut rng, &mut input, &mut renderer) {
        SessionResult::Finished(status) => log!("Finished with {:?}", status),
        SessionResult::InputClosed => {
            println!("Input closed, game abandoned.");
            log!("Input closed before the game ended");
        }
    }

    Ok(())
}
