//! The Elm-architecture application loop: [`Model`], [`Driver`], [`Effect`],
//! [`App`].

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::{Duration, Instant};

use crate::grid::{Frame, Grid, compute_frame};
use crate::messages::Msg;

// ---------------------------------------------------------------------------
// Context (cancellation token)
// ---------------------------------------------------------------------------

/// A simple cooperative-cancellation token backed by an [`AtomicBool`].
#[derive(Clone, Debug)]
pub struct Context {
    done: Arc<AtomicBool>,
}

impl Context {
    /// Create a new, non-cancelled context.
    pub fn new() -> Self {
        Self {
            done: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Whether cancellation has been requested.
    #[inline]
    pub fn is_done(&self) -> bool {
        self.done.load(Ordering::Relaxed)
    }

    /// Request cancellation.
    #[inline]
    pub fn cancel(&self) {
        self.done.store(true, Ordering::Relaxed);
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Effect
// ---------------------------------------------------------------------------

/// A side-effect returned by [`Model::update`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Signal the application loop to stop.
    End,
}

// ---------------------------------------------------------------------------
// Model trait
// ---------------------------------------------------------------------------

/// The application model (Elm architecture).
pub trait Model {
    /// Process a message, optionally returning a side-effect.
    fn update(&mut self, msg: Msg) -> Option<Effect>;

    /// Render the current state into `grid`.
    fn draw(&self, grid: &mut Grid);
}

// ---------------------------------------------------------------------------
// Driver trait
// ---------------------------------------------------------------------------

/// Back-end driver (e.g. a terminal).
pub trait Driver {
    /// Initialise the back-end.
    fn init(&mut self) -> Result<(), Box<dyn std::error::Error>>;

    /// Poll for input messages, sending them through `tx`.
    ///
    /// Should wait at most a few milliseconds so the animation clock keeps
    /// running, and return early once `ctx.is_done()`.
    fn poll_msgs(
        &mut self,
        ctx: &Context,
        tx: Sender<Msg>,
    ) -> Result<(), Box<dyn std::error::Error>>;

    /// Flush a computed frame to the screen.
    fn flush(&mut self, frame: Frame) -> Result<(), Box<dyn std::error::Error>>;

    /// Clean up / restore the terminal.
    fn close(&mut self);
}

// ---------------------------------------------------------------------------
// AppConfig / App
// ---------------------------------------------------------------------------

/// Configuration for creating an [`App`].
pub struct AppConfig<M: Model, D: Driver> {
    pub model: M,
    pub driver: D,
    /// Screen lines.
    pub rows: i32,
    /// Screen columns.
    pub cols: i32,
    /// Interval between [`Msg::Tick`] messages; `None` disables the clock.
    pub tick: Option<Duration>,
}

/// The main application runner.
pub struct App<M: Model, D: Driver> {
    model: M,
    driver: D,
    rows: i32,
    cols: i32,
    tick: Option<Duration>,
}

impl<M: Model, D: Driver> App<M, D> {
    /// Create a new application from a configuration.
    pub fn new(config: AppConfig<M, D>) -> Self {
        Self {
            model: config.model,
            driver: config.driver,
            rows: config.rows,
            cols: config.cols,
            tick: config.tick,
        }
    }

    /// The model, e.g. to inspect its final state after [`run`](App::run).
    pub fn model(&self) -> &M {
        &self.model
    }

    /// The driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Run the main Model-View-Update loop.
    ///
    /// 1. Initialises the driver.
    /// 2. Sends `Msg::Init` through the model.
    /// 3. Enters the event loop: poll → tick → update → draw → diff → flush.
    /// 4. Stops when the model returns `Effect::End`.
    ///
    /// The driver is closed on every exit path.
    pub fn run(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        self.driver.init()?;
        log::info!("app started ({}x{} screen)", self.rows, self.cols);
        let result = self.event_loop();
        self.driver.close();
        match &result {
            Ok(()) => log::info!("app stopped"),
            Err(e) => log::error!("app stopped with error: {e}"),
        }
        result
    }

    fn event_loop(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        let ctx = Context::new();
        let (tx, rx): (Sender<Msg>, Receiver<Msg>) = mpsc::channel();

        tx.send(Msg::Init).ok();

        // An empty previous grid forces a full first frame.
        let mut prev_grid = Grid::new(0, 0);
        let mut curr_grid = Grid::new(self.rows, self.cols);
        let mut last_tick = Instant::now();

        self.process_pending(&rx, &ctx, &mut prev_grid, &mut curr_grid)?;

        while !ctx.is_done() {
            self.driver.poll_msgs(&ctx, tx.clone())?;
            if ctx.is_done() {
                break;
            }

            if let Some(interval) = self.tick {
                if last_tick.elapsed() >= interval {
                    last_tick = Instant::now();
                    tx.send(Msg::tick()).ok();
                }
            }

            self.process_pending(&rx, &ctx, &mut prev_grid, &mut curr_grid)?;
        }

        Ok(())
    }

    /// Drain queued messages, update the model, draw, diff and flush.
    fn process_pending(
        &mut self,
        rx: &Receiver<Msg>,
        ctx: &Context,
        prev_grid: &mut Grid,
        curr_grid: &mut Grid,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let mut needs_draw = false;

        while let Ok(msg) = rx.try_recv() {
            if let Msg::Screen { .. } = msg {
                // The terminal may have been cleared; redraw everything.
                *prev_grid = Grid::new(0, 0);
            }
            if let Some(Effect::End) = self.model.update(msg) {
                ctx.cancel();
                return Ok(());
            }
            needs_draw = true;
        }

        if needs_draw {
            self.model.draw(curr_grid);
            let frame = compute_frame(prev_grid, curr_grid);
            if !frame.cells.is_empty() {
                log::trace!("flushing {} changed cells", frame.cells.len());
                self.driver.flush(frame)?;
            }
            if !prev_grid.copy_from(curr_grid) {
                *prev_grid = curr_grid.clone();
            }
        }

        Ok(())
    }
}
