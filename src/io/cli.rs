//! Command-line interface: data checks, headless simulation and terminal play

use crate::algorithm::solver::{AutoPlayer, LevelReport};
use crate::io::configuration::{
    DEFAULT_GAMES, DEFAULT_MOVE_TIME_MS, DEFAULT_SEED, GIF_FRAME_DELAY_MS, REPLAY_SUFFIX,
    SNAPSHOT_CELL_SIZE, SNAPSHOT_SUFFIX,
};
use crate::io::data::GameData;
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::{export_board_as_png, palette};
use crate::io::progress::ProgressManager;
use crate::io::render::render_board;
use crate::io::visualization::ReplayCapture;
use crate::session::{GameSession, SelectOutcome, SessionStatus};
use crate::spatial::Position;
use clap::{Args, Parser, Subcommand};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

#[derive(Parser, Debug)]
#[command(name = "tilelink")]
#[command(
    author,
    version,
    about = "Connect matching tiles with at most two bends"
)]
/// Command-line arguments for the tile-matching game
pub struct Cli {
    /// What to do with the game data
    #[command(subcommand)]
    pub command: Command,

    /// Suppress progress bars and informational logs
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate a data file and its assets
    Check {
        /// Path to `data.json`
        #[arg(value_name = "DATA")]
        data: PathBuf,
    },
    /// Auto-play games and report scores
    Simulate(SimulateArgs),
    /// Play in the terminal
    Play(PlayArgs),
}

/// Options for headless simulation
#[derive(Args, Debug)]
pub struct SimulateArgs {
    /// Path to `data.json`
    #[arg(value_name = "DATA")]
    pub data: PathBuf,

    /// Random seed for reproducible layouts and moves
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Number of games to play
    #[arg(short, long, default_value_t = DEFAULT_GAMES)]
    pub games: usize,

    /// Simulated thinking time per move in milliseconds
    #[arg(short, long, default_value_t = DEFAULT_MOVE_TIME_MS)]
    pub move_time_ms: u64,

    /// Write a PNG of every level's starting board
    #[arg(long)]
    pub snapshot: bool,

    /// Write a GIF replay of every level
    #[arg(short, long)]
    pub visualize: bool,

    /// Directory for snapshots and replays
    #[arg(short, long, default_value = "tilelink-out")]
    pub output_dir: PathBuf,
}

/// Options for terminal play
#[derive(Args, Debug)]
pub struct PlayArgs {
    /// Path to `data.json`
    #[arg(value_name = "DATA")]
    pub data: PathBuf,

    /// Random seed for reproducible layouts
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Zero-based level to start on
    #[arg(short, long, default_value_t = 0)]
    pub level: usize,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// One line of terminal input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayCommand {
    /// Click the cell at the given position
    Select(Position),
    /// Show an available pair
    Hint,
    /// Reshuffle the remaining tiles
    Shuffle,
    /// Deal the current level again
    Restart,
    /// Move on after clearing a level
    Next,
    /// Leave the game
    Quit,
}

/// Parse a line such as `2 3`, `hint` or `q`
pub fn parse_command(line: &str) -> Option<PlayCommand> {
    let mut words = line.split_whitespace();
    let first = words.next()?;
    let command = match first.to_ascii_lowercase().as_str() {
        "h" | "hint" => PlayCommand::Hint,
        "s" | "shuffle" => PlayCommand::Shuffle,
        "r" | "restart" => PlayCommand::Restart,
        "n" | "next" => PlayCommand::Next,
        "q" | "quit" | "exit" => PlayCommand::Quit,
        _ => {
            let row = first.parse().ok()?;
            let col = words.next()?.parse().ok()?;
            PlayCommand::Select(Position::new(row, col))
        }
    };
    words.next().is_none().then_some(command)
}

/// Run the parsed command line
///
/// Reports and the board are written to `output`; terminal play reads its
/// commands from `input`.
///
/// # Errors
///
/// Returns an error if the data file is missing or invalid, an export
/// fails, or writing to `output` fails
pub fn run<R: BufRead, W: Write>(cli: &Cli, input: R, output: &mut W) -> Result<()> {
    match &cli.command {
        Command::Check { data } => check(data, output),
        Command::Simulate(args) => simulate(args, cli.should_show_progress(), output),
        Command::Play(args) => play(args, input, output),
    }
}

fn check<W: Write>(path: &Path, output: &mut W) -> Result<()> {
    let data = GameData::load(path)?;
    let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
    let assets = data.verify_assets(base_dir)?;

    writeln!(output, "{}: {} levels, {assets} assets", path.display(), data.levels.len())?;
    for (index, level) in data.levels.iter().enumerate() {
        writeln!(
            output,
            "  level {index}: {}x{} board, {} kinds, {}s, x{}",
            level.rows,
            level.cols,
            level.num_animal_types,
            level.time_limit_seconds,
            level.score_multiplier
        )?;
    }
    Ok(())
}

fn level_file(dir: &Path, game: usize, level: usize, suffix: &str, extension: &str) -> PathBuf {
    dir.join(format!("game{game}_level{level}{suffix}.{extension}"))
}

fn simulate<W: Write>(args: &SimulateArgs, show_progress: bool, output: &mut W) -> Result<()> {
    if args.games == 0 {
        return Err(invalid_parameter("games", &args.games, &"must be at least 1"));
    }
    let data = GameData::load(&args.data)?;
    let colors = palette(
        data.levels
            .iter()
            .map(|level| level.num_animal_types)
            .max()
            .unwrap_or(0),
    );
    let move_time = Duration::from_millis(args.move_time_ms);

    let mut progress = show_progress.then(ProgressManager::new);
    if let Some(ref mut pm) = progress {
        pm.initialize(args.games);
    }

    let mut reports = Vec::with_capacity(args.games);
    for game in 0..args.games {
        let seed = args.seed.wrapping_add(game as u64);
        let mut session = GameSession::new(data.levels.clone(), seed)?;
        let mut player = AutoPlayer::new(seed, move_time);
        let mut capture = args
            .visualize
            .then(|| ReplayCapture::new(colors.clone(), SNAPSHOT_CELL_SIZE));

        if let Some(ref mut pm) = progress {
            pm.start_game(game, session.level_count());
        }

        let mut levels: Vec<LevelReport> = Vec::with_capacity(session.level_count());
        loop {
            let level = session.level_index();
            if args.snapshot {
                let path = level_file(&args.output_dir, game, level, SNAPSHOT_SUFFIX, "png");
                export_board_as_png(session.board(), &colors, SNAPSHOT_CELL_SIZE, &path)?;
            }

            let report = player.play_level(&mut session, capture.as_mut())?;
            tracing::info!(
                game,
                level,
                status = ?report.status,
                score = report.score,
                matches = report.matches,
                "level finished"
            );

            if let Some(ref mut replay) = capture {
                let path = level_file(&args.output_dir, game, level, REPLAY_SUFFIX, "gif");
                replay.export_gif(&path, GIF_FRAME_DELAY_MS)?;
                replay.clear();
            }
            if let Some(ref mut pm) = progress {
                pm.complete_level(game, report.score);
            }

            levels.push(report);
            if !session.advance_level()? {
                break;
            }
        }

        let completed = session.status() == SessionStatus::Completed;
        if let Some(ref mut pm) = progress {
            pm.complete_game(game, completed);
        }
        reports.push((seed, levels, session.score(), completed));
    }

    if let Some(ref pm) = progress {
        pm.finish();
    }

    for (game, (seed, levels, score, completed)) in reports.iter().enumerate() {
        let outcome = if *completed { "completed" } else { "lost" };
        writeln!(output, "game {game} (seed {seed}): {outcome}, score {score}")?;
        for report in levels {
            writeln!(
                output,
                "  level {}: {:?} after {:.1}s, {} matches, {} reshuffles, score {}",
                report.level,
                report.status,
                report.elapsed.as_secs_f64(),
                report.matches,
                report.reshuffles,
                report.score
            )?;
        }
    }
    Ok(())
}

fn write_status<W: Write>(session: &GameSession, output: &mut W) -> Result<()> {
    writeln!(
        output,
        "level {}/{}  score {}  time {}s  tiles {}",
        session.level_index() + 1,
        session.level_count(),
        session.score(),
        session.remaining().as_secs(),
        session.board().tile_count()
    )?;
    Ok(())
}

fn play<R: BufRead, W: Write>(args: &PlayArgs, input: R, output: &mut W) -> Result<()> {
    let data = GameData::load(&args.data)?;
    let mut session = GameSession::new(data.levels, args.seed)?;
    if args.level != 0 {
        session.start_level(args.level)?;
    }

    write!(output, "{}", render_board(session.board(), None, None))?;
    write_status(&session, output)?;

    let mut last_tick = Instant::now();
    for line in input.lines() {
        let line = line?;
        let now = Instant::now();
        let status = session.update(now.duration_since(last_tick));
        last_tick = now;
        if status == SessionStatus::TimeUp {
            writeln!(output, "Time is up. Type 'restart' or 'quit'.")?;
        }

        let Some(command) = parse_command(&line) else {
            writeln!(output, "Commands: <row> <col>, hint, shuffle, restart, next, quit")?;
            continue;
        };

        let mut path = None;
        match command {
            PlayCommand::Quit => break,
            PlayCommand::Select(pos) => match session.select(pos)? {
                SelectOutcome::Ignored => writeln!(output, "Nothing to select at {pos}")?,
                SelectOutcome::Selected(_) | SelectOutcome::Deselected(_) => {}
                SelectOutcome::Rejected { previous, current } => {
                    writeln!(output, "{previous} and {current} cannot be connected")?;
                }
                SelectOutcome::Matched(event) => {
                    writeln!(
                        output,
                        "Matched {} with {} bends, +{}",
                        event.kind,
                        event.path.bends(),
                        event.points + event.clear_bonus
                    )?;
                    path = Some(event.path);
                }
            },
            PlayCommand::Hint => match session.hint() {
                Some(hint) => writeln!(output, "Try {} and {}", hint.first, hint.second)?,
                None => writeln!(output, "No hint available")?,
            },
            PlayCommand::Shuffle => {
                let count = session.shuffle()?;
                writeln!(output, "Reshuffled {count} time(s)")?;
            }
            PlayCommand::Restart => session.restart_level()?,
            PlayCommand::Next => {
                if !session.advance_level()? {
                    writeln!(output, "Clear the board first")?;
                }
            }
        }

        write!(
            output,
            "{}",
            render_board(session.board(), session.selection(), path.as_ref())
        )?;
        write_status(&session, output)?;
        match session.status() {
            SessionStatus::LevelCleared => writeln!(output, "Level cleared! Type 'next'.")?,
            SessionStatus::Completed => {
                writeln!(output, "All levels cleared. Final score {}", session.score())?;
                break;
            }
            SessionStatus::Playing | SessionStatus::TimeUp => {}
        }
    }

    Ok(())
}
