//! Grid walker model shared by the terminal front-end and the headless
//! mode.
//!
//! A [`Walker`] owns the world, the BFS result and an [`Agent`] that moves
//! one cell along the path on every [`Msg::Tick`].

pub mod config;

use std::path::PathBuf;

use gridwalk_core::{
    Cell, ConfigError, Coord, Dims, Direction, GridModel, Surroundings, WorldConfig,
    app::Effect,
    grid::Grid,
    messages::{Key, Msg},
    style::{AttrMask, Color, Style},
};
use gridwalk_paths::{DistanceMap, Path, PathError, PathResult, UNREACHABLE, shortest_path};

/// Status lines below the map.
pub const STATUS_ROWS: i32 = 2;
/// Minimum screen width so the status lines fit.
pub const MIN_SCREEN_COLS: i32 = 56;
/// Terminal columns per world cell.
const CELL_COLS: i32 = 2;

// Colours
const COL_FREE: Color = Color::WHITE;
const COL_OBSTACLE: Color = Color::BLACK;
const COL_TARGET: Color = Color::GREEN;
const COL_AGENT: Color = Color::BLUE;
const COL_TRAIL: Color = Color::from_rgb(90, 90, 110);
const COL_HEAT_NEAR: Color = Color::from_rgb(120, 220, 140);
const COL_HEAT_FAR: Color = Color::from_rgb(220, 120, 120);
const COL_STATUS_FG: Color = Color::from_rgb(200, 200, 200);
const COL_ERROR_FG: Color = Color::RED;

/// Exit status of a headless run whose target cannot be reached.
pub const EXIT_UNREACHABLE: u8 = 2;

const HELP_LINE: &str = "q quit  space pause  r restart  d heatmap";

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Anything that stops the demo before or while it runs.
#[derive(Debug, thiserror::Error)]
pub enum DemoError {
    #[error("invalid world: {0}")]
    Config(#[from] ConfigError),
    #[error("cannot plan a path: {0}")]
    Path(#[from] PathError),
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("cannot parse {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

// ---------------------------------------------------------------------------
// Planning
// ---------------------------------------------------------------------------

/// A validated world together with its search result.
#[derive(Clone, Debug)]
pub struct Plan {
    pub model: GridModel,
    pub start: Coord,
    pub target: Coord,
    pub result: PathResult,
}

/// Validate `cfg`, build the world and run the path finder once.
///
/// Configuration problems and an invalid start are errors; an unreachable
/// target is a normal [`PathResult::Unreachable`].
pub fn plan(cfg: &WorldConfig) -> Result<Plan, DemoError> {
    let model = cfg.build()?;
    let result = shortest_path(&model, cfg.start, cfg.target)?;
    match &result {
        PathResult::Found(path) => log::info!(
            "path {} -> {} found: {} steps",
            cfg.start,
            cfg.target,
            path.steps()
        ),
        PathResult::Unreachable => {
            log::warn!("target {} is unreachable from {}", cfg.target, cfg.start)
        }
    }
    Ok(Plan {
        model,
        start: cfg.start,
        target: cfg.target,
        result,
    })
}

/// Render a search result for headless mode, together with the process exit
/// status.
///
/// A found path prints one `ROW COL` line per cell followed by
/// `steps: N`, and exits 0. An unreachable target prints `unreachable` and
/// exits with [`EXIT_UNREACHABLE`].
pub fn headless_report(result: &PathResult) -> (String, u8) {
    match result {
        PathResult::Found(path) => {
            let mut out = String::new();
            for c in path {
                out.push_str(&format!("{} {}\n", c.row, c.col));
            }
            out.push_str(&format!("steps: {}\n", path.steps()));
            (out, 0)
        }
        PathResult::Unreachable => ("unreachable\n".to_string(), EXIT_UNREACHABLE),
    }
}

// ---------------------------------------------------------------------------
// Agent
// ---------------------------------------------------------------------------

/// The walking agent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Agent {
    pub pos: Coord,
}

impl Agent {
    /// Move one cell in `dir`.
    pub fn step(&mut self, dir: Direction) {
        self.pos = self.pos.step(dir);
    }

    /// Which neighbouring cells the agent could move to.
    pub fn sense(&self, model: &GridModel) -> Surroundings {
        model.sense(self.pos)
    }
}

// ---------------------------------------------------------------------------
// Walker
// ---------------------------------------------------------------------------

/// Animation state for one run.
pub struct Walker {
    model: GridModel,
    start: Coord,
    target: Coord,
    path: Option<Path>,
    agent: Agent,
    /// Index into the path of the agent's current cell.
    step: usize,
    last_move: Option<Direction>,
    paused: bool,
    show_heat: bool,
    heat: DistanceMap,
}

impl Walker {
    pub fn new(plan: Plan) -> Self {
        let mut heat = DistanceMap::new(plan.model.dims());
        heat.compute(&plan.model, &[plan.start], UNREACHABLE);
        Self {
            start: plan.start,
            target: plan.target,
            path: plan.result.into_path(),
            agent: Agent { pos: plan.start },
            step: 0,
            last_move: None,
            paused: false,
            show_heat: false,
            heat,
            model: plan.model,
        }
    }

    /// Screen size needed to draw the world and the status lines.
    pub fn screen_dims(&self) -> Dims {
        let d = self.model.dims();
        Dims::new(
            d.rows + STATUS_ROWS,
            (d.cols * CELL_COLS).max(MIN_SCREEN_COLS),
        )
    }

    pub fn agent(&self) -> Agent {
        self.agent
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_ref()
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Whether the agent stands on the target.
    pub fn arrived(&self) -> bool {
        self.path.is_some() && self.agent.pos == self.target
    }

    /// Advance the agent one cell along the path. Returns the move made,
    /// or `None` when there is nothing left to walk.
    pub fn advance(&mut self) -> Option<Direction> {
        let path = self.path.as_ref()?;
        let next = *path.cells().get(self.step + 1)?;
        // Consecutive path cells are always one cardinal step apart.
        let dir = Direction::between(self.agent.pos, next)?;
        self.agent.step(dir);
        self.step += 1;
        self.last_move = Some(dir);
        log::trace!("agent moved {dir} to {}", self.agent.pos);
        if self.arrived() {
            log::info!("agent reached {} in {} steps", self.target, self.step);
        }
        Some(dir)
    }

    /// Put the agent back on the start cell.
    pub fn restart(&mut self) {
        self.agent.pos = self.start;
        self.step = 0;
        self.last_move = None;
    }

    /// The text of the first status line.
    pub fn status_line(&self) -> String {
        let Some(path) = &self.path else {
            return format!(
                "no path: target {} is unreachable from {}",
                self.target, self.start
            );
        };
        if self.arrived() {
            return format!("arrived at {} in {} steps", self.target, path.steps());
        }
        let open = self
            .agent
            .sense(&self.model)
            .open()
            .map(Direction::name)
            .collect::<Vec<_>>()
            .join(" ");
        let moved = self.last_move.map_or("-", Direction::name);
        let paused = if self.paused { " [paused]" } else { "" };
        format!(
            "step {}/{}  move {moved}  open: {open}{paused}",
            self.step,
            path.steps()
        )
    }

    fn cell_color(&self, c: Coord) -> Color {
        if self.model.is_blocked(c) {
            return COL_OBSTACLE;
        }
        if c == self.target {
            return COL_TARGET;
        }
        if c == self.agent.pos {
            return COL_AGENT;
        }
        if self.show_heat {
            if let (Some(d), Some(max)) = (self.heat.at(c), self.heat.max_distance()) {
                let t = if max == 0 { 0.0 } else { d as f32 / max as f32 };
                return COL_HEAT_NEAR.lerp(COL_HEAT_FAR, t);
            }
        }
        COL_FREE
    }

    fn cell_glyph(&self, c: Coord) -> (char, Color) {
        if c == self.agent.pos {
            return ('@', COL_AGENT);
        }
        let ahead = self
            .path
            .as_ref()
            .is_some_and(|p| p.cells()[self.step + 1..].contains(&c));
        if ahead && c != self.target {
            ('·', COL_TRAIL)
        } else {
            (' ', Color::DEFAULT)
        }
    }
}

impl gridwalk_core::Model for Walker {
    fn update(&mut self, msg: Msg) -> Option<Effect> {
        match msg {
            Msg::Init => None,
            Msg::Quit => Some(Effect::End),
            Msg::Tick { .. } => {
                if !self.paused {
                    self.advance();
                }
                None
            }
            Msg::KeyDown { key, .. } => match key {
                Key::Escape | Key::Char('q') => Some(Effect::End),
                Key::Space => {
                    self.paused = !self.paused;
                    None
                }
                Key::Char('r') => {
                    self.restart();
                    None
                }
                Key::Char('d') => {
                    self.show_heat = !self.show_heat;
                    None
                }
                _ => None,
            },
            Msg::Screen { .. } => None,
        }
    }

    fn draw(&self, grid: &mut Grid) {
        grid.fill(Cell::default());

        for c in self.model.dims() {
            let bg = self.cell_color(c);
            let (ch, fg) = self.cell_glyph(c);
            let style = Style::default().with_fg(fg).with_bg(bg);
            let left = Coord::new(c.row, c.col * CELL_COLS);
            grid.set(left, Cell { ch, style });
            grid.set(left.shift(0, 1), Cell::blank(bg));
        }

        let status_row = self.model.dims().rows;
        let status_style = if self.path.is_some() {
            Style::default().with_fg(COL_STATUS_FG)
        } else {
            Style::default()
                .with_fg(COL_ERROR_FG)
                .with_attrs(AttrMask::BOLD)
        };
        grid.print(
            Coord::new(status_row, 0),
            &self.status_line(),
            status_style,
        );
        grid.print(
            Coord::new(status_row + 1, 0),
            HELP_LINE,
            Style::default()
                .with_fg(COL_STATUS_FG)
                .with_attrs(AttrMask::DIM),
        );
    }
}
