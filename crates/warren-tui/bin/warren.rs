//! Dungeon generation viewer.
//!
//! Main entry point: generates a dungeon from command-line options and
//! opens the interactive terminal view, or dumps the layout as JSON with
//! `--export`.

use std::io;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use warren_core::config::GenerationConfig;
use warren_core::dungeon::generate;
use warren_core::path::PathStrategy;
use warren_core::{DEFAULT_HEIGHT, DEFAULT_WIDTH, GenRng};
use warren_tui::{App, Theme};

/// Dungeon generation viewer
#[derive(Parser, Debug)]
#[command(name = "warren")]
#[command(author, version, about = "warren - generate and explore dungeon layouts", long_about = None)]
struct Args {
    /// Generation seed (random if omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Dungeon width in tiles
    #[arg(short = 'W', long, default_value_t = DEFAULT_WIDTH)]
    width: i32,

    /// Dungeon height in tiles
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    height: i32,

    /// Lower bound of the per-split minimum room size draw
    #[arg(long, default_value_t = 8)]
    min_room: i32,

    /// Upper bound (exclusive) of the per-split minimum room size draw
    #[arg(long, default_value_t = 12)]
    max_room: i32,

    /// Door span in tiles (2-5)
    #[arg(short, long, default_value_t = 3)]
    door_size: i32,

    /// Fraction of the smallest rooms offered up for pruning
    #[arg(long, default_value_t = 0.1)]
    prune: f64,

    /// Use the greedy depth-first search instead of A*
    #[arg(long)]
    greedy: bool,

    /// Light terminal background palette
    #[arg(long)]
    light: bool,

    /// Print the generated layout as JSON and exit
    #[arg(long)]
    export: bool,
}

fn main() -> io::Result<()> {
    let args = Args::parse();

    let config = GenerationConfig {
        seed: args.seed.unwrap_or_else(|| GenRng::from_entropy().seed()),
        width: args.width,
        height: args.height,
        min_room: (args.min_room, args.max_room),
        door_size: args.door_size,
        prune_fraction: args.prune,
    };

    if args.export {
        return export_layout(&config);
    }

    let strategy = if args.greedy {
        PathStrategy::Greedy
    } else {
        PathStrategy::AStar
    };
    let theme = if args.light {
        Theme::light()
    } else {
        Theme::dark()
    };
    let mut app = App::new(config, strategy, theme).map_err(io::Error::other)?;

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = run(&mut terminal, &mut app);

    // Restore the terminal before reporting any error
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|frame| app.draw(frame))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }
        if app.should_quit {
            return Ok(());
        }
    }
}

fn export_layout(config: &GenerationConfig) -> io::Result<()> {
    let dungeon = generate(config).map_err(io::Error::other)?;

    let layout = serde_json::json!({
        "config": config,
        "start_room": dungeon.start_room,
        "rooms": dungeon.room_rects(),
        "doors": dungeon.door_rects(),
        "grid": dungeon.grid.codes(),
    });
    println!("{}", serde_json::to_string_pretty(&layout)?);
    Ok(())
}
