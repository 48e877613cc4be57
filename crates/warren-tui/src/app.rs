//! Application state and rendering for the dungeon viewer.

use std::collections::HashSet;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use strum::IntoEnumIterator;

use warren_core::config::GenerationConfig;
use warren_core::dungeon::{Dungeon, Tile, generate};
use warren_core::error::GenError;
use warren_core::path::{CellPos, PathStrategy, path_cost};

use crate::theme::Theme;

/// Viewer state: one generated dungeon plus cursor and path selection
pub struct App {
    pub config: GenerationConfig,
    pub dungeon: Dungeon,
    pub theme: Theme,
    pub strategy: PathStrategy,
    pub cursor: (i32, i32),
    pub path_start: Option<(i32, i32)>,
    pub path_goal: Option<(i32, i32)>,
    pub path: Vec<CellPos>,
    pub status: String,
    pub should_quit: bool,
}

impl App {
    /// Generate the initial dungeon and center the cursor on the
    /// starting room.
    pub fn new(
        config: GenerationConfig,
        strategy: PathStrategy,
        theme: Theme,
    ) -> Result<Self, GenError> {
        let dungeon = generate(&config)?;
        let cursor = dungeon.arena[dungeon.start_room].bounds.center();
        let status = format!(
            "seed {} | {} rooms, {} doors",
            config.seed,
            dungeon.rooms.len(),
            dungeon.doors.len()
        );
        Ok(Self {
            config,
            dungeon,
            theme,
            strategy,
            cursor,
            path_start: None,
            path_goal: None,
            path: Vec::new(),
            status,
            should_quit: false,
        })
    }

    /// Regenerate with the current seed
    pub fn regenerate(&mut self) {
        match generate(&self.config) {
            Ok(dungeon) => {
                self.cursor = dungeon.arena[dungeon.start_room].bounds.center();
                self.status = format!(
                    "seed {} | {} rooms, {} doors",
                    self.config.seed,
                    dungeon.rooms.len(),
                    dungeon.doors.len()
                );
                self.dungeon = dungeon;
                self.path_start = None;
                self.path_goal = None;
                self.path.clear();
            }
            Err(err) => self.status = format!("generation failed: {err}"),
        }
    }

    /// Bump the seed and regenerate
    pub fn reseed(&mut self) {
        self.config.seed = self.config.seed.wrapping_add(1);
        self.regenerate();
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('r') => self.regenerate(),
            KeyCode::Char('n') => self.reseed(),
            KeyCode::Left | KeyCode::Char('h') => self.move_cursor(-1, 0),
            KeyCode::Right | KeyCode::Char('l') => self.move_cursor(1, 0),
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(0, -1),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(0, 1),
            KeyCode::Char('s') => {
                self.path_start = Some(self.cursor);
                self.recompute_path();
            }
            KeyCode::Char('e') => {
                self.path_goal = Some(self.cursor);
                self.recompute_path();
            }
            KeyCode::Char('t') => {
                self.strategy = match self.strategy {
                    PathStrategy::AStar => PathStrategy::Greedy,
                    PathStrategy::Greedy => PathStrategy::AStar,
                };
                self.recompute_path();
            }
            KeyCode::Char('c') => {
                self.path_start = None;
                self.path_goal = None;
                self.path.clear();
                self.status = "path cleared".to_string();
            }
            _ => {}
        }
    }

    fn move_cursor(&mut self, dx: i32, dy: i32) {
        let grid = &self.dungeon.grid;
        self.cursor.0 = (self.cursor.0 + dx).clamp(0, grid.width() - 1);
        self.cursor.1 = (self.cursor.1 + dy).clamp(0, grid.height() - 1);
    }

    fn recompute_path(&mut self) {
        let (Some(start), Some(goal)) = (self.path_start, self.path_goal) else {
            return;
        };
        self.path = self.dungeon.find_path(
            (f64::from(start.0), f64::from(start.1)),
            (f64::from(goal.0), f64::from(goal.1)),
            self.strategy,
        );
        let label = match self.strategy {
            PathStrategy::AStar => "A*",
            PathStrategy::Greedy => "greedy",
        };
        self.status = if self.path.is_empty() {
            format!("{label}: no path")
        } else {
            format!(
                "{label}: {} waypoints, cost {:.1}",
                self.path.len(),
                path_cost(&self.path)
            )
        };
    }

    /// Draw the full frame: map plus a two-line footer
    pub fn draw(&self, frame: &mut Frame) {
        let [map_area, footer_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(2)]).areas(frame.area());

        frame.render_widget(self.map_widget(), map_area);
        frame.render_widget(self.footer_widget(), footer_area);
    }

    fn map_widget(&self) -> Paragraph<'_> {
        let theme = &self.theme;
        let grid = &self.dungeon.grid;
        let on_path: HashSet<(i32, i32)> =
            self.path.iter().map(|cell| (cell.x, cell.y)).collect();

        let mut lines = Vec::with_capacity(grid.height() as usize);
        for y in 0..grid.height() {
            let mut spans = Vec::with_capacity(grid.width() as usize);
            for x in 0..grid.width() {
                let tile = grid.get(x, y).unwrap_or(Tile::Empty);
                let (symbol, color) = if self.path_start == Some((x, y)) {
                    ('S', theme.endpoint)
                } else if self.path_goal == Some((x, y)) {
                    ('G', theme.endpoint)
                } else if on_path.contains(&(x, y)) {
                    ('*', theme.path)
                } else {
                    let color = match tile {
                        Tile::Empty => theme.map_empty,
                        Tile::Floor => theme.map_floor,
                        Tile::Wall => theme.map_wall,
                        Tile::DoorH | Tile::DoorV => theme.map_door,
                    };
                    (tile.symbol(), color)
                };

                let mut style = Style::default().fg(color);
                if self.cursor == (x, y) {
                    style = style.bg(theme.cursor_bg);
                }
                spans.push(Span::styled(symbol.to_string(), style));
            }
            lines.push(Line::from(spans));
        }

        Paragraph::new(lines).block(
            Block::bordered()
                .title(" warren ")
                .border_style(Style::default().fg(theme.border)),
        )
    }

    fn footer_widget(&self) -> Paragraph<'_> {
        let theme = &self.theme;
        let legend: String = Tile::iter()
            .map(|tile| format!("{} {}  ", tile.symbol(), tile))
            .collect();

        let lines = vec![
            Line::from(Span::styled(
                self.status.clone(),
                Style::default().fg(theme.accent),
            )),
            Line::from(Span::styled(
                format!(
                    "q quit  r regen  n reseed  arrows move  s start  e end  t strategy  c clear | {legend}"
                ),
                Style::default().fg(theme.text_dim),
            )),
        ];
        Paragraph::new(lines)
    }
}
