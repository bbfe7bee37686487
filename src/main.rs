//! Wordle Tiles console
//!
//! Interactive stand-in for a chat transport: reads commands and guesses from
//! stdin and writes each rendered board to a PNG file.

use anyhow::{bail, Context, Result};
use image::ImageFormat;
use log::warn;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use wordle_tiles::{
    Canvas, Config, Dictionary, GameError, Games, GuessReply, SetMode, TileAtlas,
    WORD_LENGTH,
};

const BANNER_TEXT: &str = include_str!("text/banner.txt");
const USAGE_TEXT: &str = include_str!("text/usage.txt");

const DEFAULT_CONFIG: &str = "config.json";

type ChatId = i64;

fn print_banner() {
    for line in BANNER_TEXT.lines().take(6) {
        println!("{}", line);
    }
}

fn load_config(explicit: Option<PathBuf>) -> Result<Config> {
    match explicit {
        Some(path) => {
            let config = Config::load(&path)?;
            let base = path.parent().unwrap_or(Path::new("."));
            Ok(config.relative_to(base))
        }
        None if Path::new(DEFAULT_CONFIG).exists() => Ok(Config::load(Path::new(DEFAULT_CONFIG))?),
        None => Ok(Config::default()),
    }
}

fn save_board(canvas: &Canvas, output_dir: &Path) -> Result<PathBuf> {
    let path = output_dir.join("wordle.png");
    canvas
        .save_with_format(&path, ImageFormat::Png)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

fn show_board(canvas: &Canvas, output_dir: &Path) {
    match save_board(canvas, output_dir) {
        Ok(path) => println!("[board: {}]", path.display()),
        Err(e) => warn!("{:#}", e),
    }
}

fn handle_guess(games: &Games<ChatId, StdRng>, chat: ChatId, text: &str, output_dir: &Path) {
    match games.submit_guess(&chat, text) {
        Ok(GuessReply::NewRow { canvas, just_won }) => {
            show_board(&canvas, output_dir);
            if just_won {
                println!("Congrats on solving it! /share or /new");
                println!("🔥💃🔥");
            }
        }
        Ok(GuessReply::AlreadyWon { canvas }) => {
            println!("Already solved. You can play /new Wordle or /share tiles with friends.");
            show_board(&canvas, output_dir);
        }
        Ok(GuessReply::InvalidWord) => println!("Not a valid english word!"),
        Err(GameError::UnknownSession) => {}
        Err(e) => warn!("{}", e),
    }
}

enum Flow {
    Continue,
    Quit,
}

/// Handle one slash command, writing any reply to `out`.
fn run_command(
    games: &Games<ChatId, StdRng>,
    chat: &mut ChatId,
    parts: &[&str],
    out: &mut impl Write,
) -> io::Result<Flow> {
    let Some(command) = parts.first() else {
        return Ok(Flow::Continue);
    };

    match command.to_lowercase().as_str() {
        "/help" | "/h" => writeln!(out, "{}", BANNER_TEXT)?,
        "/quit" | "/exit" | "/q" => {
            writeln!(out, "Goodbye!")?;
            return Ok(Flow::Quit);
        }
        "/new" => match games.create_session(*chat) {
            Ok(()) => writeln!(out, "Created and joined Wordle.")?,
            Err(GameError::Disabled) => {}
            Err(e) => warn!("{}", e),
        },
        "/enable" => {
            games.set_session_mode(*chat, SetMode::Active);
            writeln!(out, "Wordle is enabled for this chat.")?;
        }
        "/disable" => {
            games.set_session_mode(*chat, SetMode::Disabled);
            writeln!(out, "Wordle is disabled for this chat.")?;
        }
        "/share" => match games.share_text(chat) {
            Ok(grid) if grid.is_empty() => writeln!(out, "No guesses yet.")?,
            Ok(grid) => writeln!(out, "{}", grid)?,
            Err(_) => writeln!(out, "No game in progress. Use /new to start one.")?,
        },
        "/chat" => match parts.get(1).and_then(|s| s.parse().ok()) {
            Some(id) => {
                *chat = id;
                if games.is_disabled(chat) {
                    writeln!(out, "Wordle is disabled in chat {}.", chat)?;
                }
            }
            None => writeln!(out, "Usage: /chat <id>")?,
        },
        _ => {
            writeln!(out, "Unknown command: {}", command)?;
            writeln!(out, "Type /help for available commands.")?;
        }
    }

    Ok(Flow::Continue)
}

fn run_interactive(games: Games<ChatId, StdRng>, output_dir: &Path) -> Result<()> {
    print_banner();
    println!("Type /help for commands or /new to get started.");
    println!();

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut chat: ChatId = 0;

    loop {
        print!("[chat {}] > ", chat);
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let text = line.trim();
        if text.is_empty() {
            continue;
        }

        if !text.starts_with('/') {
            if text.chars().count() == WORD_LENGTH {
                handle_guess(&games, chat, text, output_dir);
            }
            continue;
        }

        let parts: Vec<&str> = text.split_whitespace().collect();
        if let Flow::Quit = run_command(&games, &mut chat, &parts, &mut stdout)? {
            break;
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();
    let mut config_path = None;
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                println!("{}", USAGE_TEXT);
                return Ok(());
            }
            "--config" => {
                let Some(path) = args.get(i + 1) else {
                    bail!("--config requires a path");
                };
                config_path = Some(PathBuf::from(path));
                i += 1;
            }
            other => bail!("Unknown argument: {}\nUse --help for usage information.", other),
        }
        i += 1;
    }

    let config = load_config(config_path).context("loading configuration")?;
    let dictionary = Dictionary::load(&config.answers, &config.valid_guesses)
        .context("loading word lists")?;
    let atlas = TileAtlas::load(&config.letters, config.tile_size).context("loading letter sheet")?;
    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let games = Games::new(Arc::new(dictionary), Arc::new(atlas), config.scoring, rng)?;

    run_interactive(games, &config.output_dir)
}
