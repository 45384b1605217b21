//! Terminal front-end for the rules engine
//!
//! Reads one command per line from stdin. A square (`e2`) or a pair of grid
//! indices (`4,6`) is a click; everything else is a command, see `help`.

use anyhow::{Context, Result};
use chess_rules::core::{load_settings, save_settings, settings_path, EngineSettings};
use chess_rules::game::components::{Color, PieceKind, Square};
use chess_rules::game::error::{GameError, GameResult};
use chess_rules::game::resources::{CapturedPieces, PromotionChooser, PromotionPiece};
use chess_rules::session::{ClickOutcome, GameSession};
use chess_rules::ui::{render_board, RenderOptions};
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "chess-rules", version, about = "Two-player chess in the terminal")]
struct Cli {
    /// Settings file (defaults to the platform config directory)
    #[arg(long, value_name = "PATH")]
    settings: Option<PathBuf>,

    /// Draw pieces as letters instead of unicode glyphs
    #[arg(long)]
    ascii: bool,

    /// Hide file letters and rank numbers
    #[arg(long)]
    no_coordinates: bool,

    /// Log filter directive, overridden by RUST_LOG
    #[arg(long, value_name = "FILTER")]
    log: Option<String>,

    /// Write the effective settings back to the settings file
    #[arg(long)]
    save_settings: bool,
}

impl Cli {
    fn apply_to(&self, settings: &mut EngineSettings) {
        if self.ascii {
            settings.unicode_pieces = false;
        }
        if self.no_coordinates {
            settings.show_coordinates = false;
        }
        if let Some(filter) = &self.log {
            settings.log_filter = filter.clone();
        }
    }
}

/// Asks for the promotion piece on stdin; an empty answer cancels
struct StdinPromotion;

impl PromotionChooser for StdinPromotion {
    fn choose(&mut self, color: Color, square: Square) -> Option<PromotionPiece> {
        loop {
            print!(
                "{} pawn promotes on {}. Choose q/r/b/n (empty cancels): ",
                color.name(),
                square
            );
            io::stdout().flush().ok();

            let mut line = String::new();
            match io::stdin().read_line(&mut line) {
                Ok(0) | Err(_) => return None,
                Ok(_) => {}
            }
            let answer = line.trim();
            if answer.is_empty() {
                return None;
            }
            match answer.parse() {
                Ok(piece) => return Some(piece),
                Err(err) => println!("{}", err),
            }
        }
    }
}

/// `e2` or `4,6`
fn parse_click(input: &str) -> GameResult<Square> {
    match input.split_once(',') {
        Some((file, rank)) => {
            let file = file.trim().parse::<u8>();
            let rank = rank.trim().parse::<u8>();
            match (file, rank) {
                (Ok(file), Ok(rank)) => Square::try_new(file, rank),
                _ => Err(GameError::InvalidNotation {
                    input: input.to_string(),
                }),
            }
        }
        None => input.parse(),
    }
}

fn print_help() {
    println!("Commands:");
    println!("  e2 | 4,6        click a square");
    println!("  history         numbered move list");
    println!("  export <path>   write the history as JSON");
    println!("  captured        captured pieces and material balance");
    println!("  help | quit");
    println!();
}

fn print_captured(captured: &CapturedPieces) {
    let kinds = [
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Pawn,
        PieceKind::King,
    ];
    for color in [Color::Light, Color::Dark] {
        let listed: Vec<String> = kinds
            .iter()
            .filter(|&&kind| captured.count(color, kind) > 0)
            .map(|&kind| format!("{:?} x{}", kind, captured.count(color, kind)))
            .collect();
        println!("{} lost: {}", color.name(), listed.join(", "));
    }
    println!("Material balance (White): {:+}", captured.material_advantage());
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let path = cli.settings.clone().unwrap_or_else(settings_path);
    let mut settings = load_settings(&path);
    cli.apply_to(&mut settings);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    if cli.save_settings {
        save_settings(&settings, &path)
            .with_context(|| format!("saving settings to {}", path.display()))?;
        info!("[SETTINGS] Saved to {}", path.display());
    }

    let options = RenderOptions::from(&settings);
    let mut session = GameSession::new();
    let mut captured = CapturedPieces::default();
    let mut chooser = StdinPromotion;

    print_help();
    print!("{}", render_board(session.board(), session.selection(), options));

    loop {
        print!("{} to move> ", session.color_to_move().name());
        io::stdout().flush().ok();

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            break;
        }
        let cmd = line.trim();
        if cmd.is_empty() {
            continue;
        }

        match cmd {
            "help" => print_help(),
            "quit" | "exit" => break,
            "history" => println!("{}", session.history().dump()),
            "captured" => print_captured(&captured),
            _ if cmd.starts_with("export ") => {
                let target = cmd.trim_start_matches("export ").trim();
                let json = session.history().to_json()?;
                match std::fs::write(target, json) {
                    Ok(()) => println!("History written to {}", target),
                    Err(err) => warn!("[MOVE] Could not export history to {}: {}", target, err),
                }
            }
            _ => {
                let square = match parse_click(cmd) {
                    Ok(square) => square,
                    Err(err) => {
                        println!("{}", err);
                        continue;
                    }
                };
                match session.click(square, &mut chooser) {
                    ClickOutcome::Ignored => println!("Nothing to select on {}", square),
                    ClickOutcome::Selected(_) | ClickOutcome::Deselected => {}
                    ClickOutcome::Rejected { from, to } => {
                        println!("Illegal move {} -> {}", from, to)
                    }
                    ClickOutcome::PromotionCancelled { .. } => println!("Promotion cancelled"),
                    ClickOutcome::Moved(report) => {
                        if let Some(piece) = report.captured {
                            captured.add_capture(piece);
                        }
                        println!("{}", report.record);
                    }
                }
                print!("{}", render_board(session.board(), session.selection(), options));
            }
        }
    }

    Ok(())
}
