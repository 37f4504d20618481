//! Terminal front end: play the herbal memory game or browse the
//! seasonal gallery.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, info};

use herbal_memory::gallery::{GalleryView, SampleCatalog, Season, SeasonalGallery};
use herbal_memory::view::{win_message, BoardView};
use herbal_memory::{GameEvent, MemoryGame, SelectOutcome, Settings};

#[derive(Parser, Debug)]
#[command(name = "herbal-memory")]
#[command(about = "Herbal memory game and seasonal plant gallery")]
#[command(version)]
struct Args {
    /// TOML settings file with [game] and [[pairs]] sections
    #[arg(short, long, env = "HERBAL_MEMORY_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play the memory game (default)
    Play {
        /// Fixed layout seed
        #[arg(long)]
        seed: Option<u64>,

        /// Milliseconds a mismatched pair stays face-up
        #[arg(long)]
        mismatch_delay_ms: Option<u64>,

        /// Tiles per row
        #[arg(long, default_value_t = BoardView::DEFAULT_COLUMNS)]
        columns: usize,
    },
    /// Show sample plants for a season (defaults to the current one)
    Gallery {
        season: Option<Season>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "herbal_memory=warn".into()),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let mut settings = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            Settings::from_toml_str(&text).with_context(|| format!("parsing {}", path.display()))?
        }
        None => Settings::default(),
    };

    match args.command {
        Some(Command::Gallery { season }) => {
            show_gallery(season);
            Ok(())
        }
        Some(Command::Play { seed, mismatch_delay_ms, columns }) => {
            if let Some(seed) = seed {
                settings.game.seed = Some(seed);
            }
            if let Some(ms) = mismatch_delay_ms {
                settings.game.mismatch_delay_ms = ms;
            }
            play(&settings, columns)
        }
        None => play(&settings, BoardView::DEFAULT_COLUMNS),
    }
}

fn show_gallery(season: Option<Season>) {
    let mut gallery = SeasonalGallery::for_today(SampleCatalog::builtin());
    if let Some(season) = season {
        gallery.select(season);
    }

    println!("== {} ==", gallery.selected().label());
    match gallery.view() {
        GalleryView::Plants(plants) => {
            for plant in plants {
                println!();
                println!("{} ({})", plant.name, plant.scientific_name);
                println!("  {}", plant.medicinal_properties);
                println!("  Seasonal care tips: {}", plant.care_tips);
            }
        }
        GalleryView::Empty { message } => println!("{message}"),
    }
}

fn play(settings: &Settings, columns: usize) -> Result<()> {
    let pairs = settings.pair_set().context("invalid pair set")?;
    let mut game = MemoryGame::new(pairs, settings.game.clone());
    info!(pairs = game.pairs().len(), "starting game");

    println!("Pick a card by number, 'r' to reset, 'q' to quit.");
    draw(&game, columns);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        match line.trim() {
            "q" | "quit" => break,
            "r" | "reset" => game.reset(),
            input => match input.parse::<usize>() {
                Ok(position) => {
                    if let SelectOutcome::Mismatch(ticket) = game.select_card(position) {
                        draw(&game, columns);
                        thread::sleep(ticket.delay);
                        if !game.complete_reversion(&ticket) {
                            debug!(generation = %ticket.generation, "reversion ticket no longer current");
                        }
                    }
                }
                Err(_) => println!("Not a card number: {input}"),
            },
        }

        for event in game.drain_events() {
            if let GameEvent::Won { moves } = event {
                draw(&game, columns);
                thread::sleep(Duration::from_millis(game.config().win_notice_delay_ms));
                println!("{}", win_message(moves));
                println!("'r' to play again, 'q' to quit.");
            }
        }
        if !game.is_won() {
            draw(&game, columns);
        }
        io::stdout().flush()?;
    }

    Ok(())
}

fn draw(game: &MemoryGame, columns: usize) {
    println!();
    println!("{}", BoardView::capture(game).with_columns(columns));
}
