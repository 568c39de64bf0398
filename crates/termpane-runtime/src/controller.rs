// ABOUTME: Top-level controller owning the pane tree, terminal driver, and output.
// ABOUTME: Runs the render tick (resize detection, draw, iterate) and dispatches key presses.

use std::io;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{self, MissedTickBehavior};

use termpane_core::{Screen, Size};
use termpane_layout::{Canvas, Pane};
use termpane_terminal::{KeySource, ModeGuard, TerminalDriver, TerminalError};

use crate::{shutdown_signal, InputLoop};

const DEFAULT_TICK: Duration = Duration::from_millis(1000);

/// Pending key presses buffered between the input thread and the event loop
const KEY_QUEUE: usize = 64;

#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    #[error("Terminal error: {0}")]
    Terminal(#[from] TerminalError),

    #[error("Output error: {0}")]
    Io(#[from] io::Error),
}

/// Whether the event loop should keep running after a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Application hooks invoked by the controller.
///
/// `on_draw` runs after the screen is cleared on startup and on every
/// resize, before the panes are drawn. `on_key_press` receives each raw
/// input byte.
pub trait Handler: Send {
    fn on_draw(&mut self, _ctx: &mut Context<'_>) -> io::Result<()> {
        Ok(())
    }

    fn on_key_press(&mut self, _key: u8, _ctx: &mut Context<'_>) -> io::Result<Flow> {
        Ok(Flow::Continue)
    }
}

/// Access to the pane tree and the screen from inside a [`Handler`]
pub struct Context<'a> {
    root: &'a mut Pane,
    screen: &'a mut dyn Screen,
    size: Size,
}

impl Context<'_> {
    /// Last known terminal size
    pub fn size(&self) -> Size {
        self.size
    }

    /// Write at absolute terminal coordinates
    pub fn write(&mut self, x: u16, y: u16, text: &str) -> io::Result<()> {
        self.screen.put(x, y, text)
    }

    /// Drawing surface of the pane called `name`, if it exists
    pub fn canvas(&mut self, name: &str) -> Option<Canvas<'_>> {
        let pane = self.root.find(name)?;
        Some(pane.canvas(&mut *self.screen))
    }
}

/// Owns the pane tree and drives it from terminal size changes and input.
///
/// All pane mutation and output happen on the task running [`run`]; the
/// input thread only queues bytes, so writes never interleave.
///
/// [`run`]: Controller::run
pub struct Controller<D: TerminalDriver, S: Screen> {
    driver: D,
    screen: S,
    root: Pane,
    size: Size,
    tick: Duration,
    handler: Option<Box<dyn Handler>>,
}

impl<D: TerminalDriver, S: Screen> Controller<D, S> {
    pub fn new(driver: D, screen: S, root: Pane) -> Self {
        Self {
            driver,
            screen,
            root,
            size: Size::ZERO,
            tick: DEFAULT_TICK,
            handler: None,
        }
    }

    /// Interval between render ticks
    pub fn with_tick(mut self, tick: Duration) -> Self {
        self.tick = tick;
        self
    }

    pub fn with_handler<H: Handler + 'static>(mut self, handler: H) -> Self {
        self.handler = Some(Box::new(handler));
        self
    }

    pub fn tick_interval(&self) -> Duration {
        self.tick
    }

    /// Cached terminal size from the last successful query
    pub fn size(&self) -> Size {
        self.size
    }

    pub fn root(&self) -> &Pane {
        &self.root
    }

    pub fn screen(&self) -> &S {
        &self.screen
    }

    /// One render loop iteration.
    ///
    /// On a size change the tree is laid out again, the screen cleared, the
    /// handler's `on_draw` called and every pane drawn. Content is iterated
    /// on every call. Returns whether a full redraw happened.
    pub fn render_tick(&mut self) -> io::Result<bool> {
        let resized = self.refresh_size();
        if resized {
            self.screen.clear()?;
            if let Some(handler) = self.handler.as_mut() {
                let mut ctx = Context {
                    root: &mut self.root,
                    screen: &mut self.screen,
                    size: self.size,
                };
                handler.on_draw(&mut ctx)?;
            }
            self.root.draw(&mut self.screen)?;
        }
        self.root.iterate(&mut self.screen)?;
        self.screen.flush()?;
        Ok(resized)
    }

    /// Dispatch one input byte to the handler.
    pub fn key_press(&mut self, key: u8) -> io::Result<Flow> {
        let Some(handler) = self.handler.as_mut() else {
            return Ok(Flow::Continue);
        };
        let mut ctx = Context {
            root: &mut self.root,
            screen: &mut self.screen,
            size: self.size,
        };
        let flow = handler.on_key_press(key, &mut ctx)?;
        self.screen.flush()?;
        Ok(flow)
    }

    fn refresh_size(&mut self) -> bool {
        match self.driver.query_size() {
            Ok(size) if size != self.size => {
                tracing::info!("Terminal resized: {} -> {}", self.size, size);
                self.size = size;
                self.root.set_left(0);
                self.root.set_top(0);
                self.root.set_width(size.width);
                self.root.set_height(size.height);
                true
            }
            Ok(_) => false,
            Err(e) => {
                tracing::debug!("Skipping resize check: {}", e);
                false
            }
        }
    }

    /// Take over the terminal and run until a handler exits or the process
    /// receives a shutdown signal.
    ///
    /// `input` is read on a separate thread, one byte at a time. On every
    /// exit path that thread is stopped and joined before the terminal mode
    /// is restored, so no input is consumed after `run` returns.
    pub async fn run<K>(&mut self, input: K) -> Result<(), RuntimeError>
    where
        K: KeySource + 'static,
    {
        let mut guard = self.driver.enter_raw_no_echo()?;
        tracing::info!("Controller started with {:?} tick", self.tick);

        let (tx, mut keys) = mpsc::channel(KEY_QUEUE);
        let result = match InputLoop::spawn(input, tx) {
            Ok(reader) => {
                let result = self.event_loop(&mut keys).await;
                // a reader blocked on a full queue needs the receiver gone
                drop(keys);
                if let Err(e) = tokio::task::spawn_blocking(move || reader.stop()).await {
                    tracing::error!("Failed to stop input thread: {}", e);
                }
                result
            }
            Err(e) => Err(e.into()),
        };

        if let Err(e) = self.screen.clear().and_then(|_| self.screen.flush()) {
            tracing::warn!("Failed to clear screen on exit: {}", e);
        }
        if let Err(e) = guard.restore_mode() {
            tracing::error!("Failed to restore terminal mode: {}", e);
        }
        tracing::info!("Controller stopped");
        result
    }

    async fn event_loop(&mut self, keys: &mut mpsc::Receiver<u8>) -> Result<(), RuntimeError> {
        self.screen.clear()?;
        self.screen.flush()?;
        let mut input_open = true;

        let mut ticker = time::interval(self.tick);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let shutdown = shutdown_signal();
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    self.render_tick()?;
                }
                key = keys.recv(), if input_open => match key {
                    Some(key) => {
                        if self.key_press(key)? == Flow::Exit {
                            tracing::info!("Exit requested by key handler");
                            return Ok(());
                        }
                    }
                    None => {
                        tracing::debug!("Input closed; continuing without keyboard");
                        input_open = false;
                    }
                },
                _ = &mut shutdown => {
                    tracing::info!("Shutdown signal received");
                    return Ok(());
                }
            }
        }
    }
}
