#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Terminal rendering adapter for reverse_brainrot.
//!
//! The widget runs inside the terminal's alternate screen and relies on the
//! terminal's focus reporting (`CSI ? 1004 h`) to learn when its window gains
//! or loses activation. Terminals without focus reporting never send the
//! notifications, in which case the widget simply stays focused.

mod draw;
mod input;

use std::{
    io::{self, Stdout},
    time::{Duration, Instant},
};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableFocusChange, EnableFocusChange},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{backend::CrosstermBackend, Terminal};
use reverse_brainrot_rendering::{FrameInput, Presentation, RenderingBackend, Scene};
use tracing::{debug, trace};

use self::draw::{draw_scene, Palette};

pub use self::input::InputLatch;

/// Time budget of a single frame. Input is polled until the budget expires.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(100);

type TuiTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Rendering backend that draws into the controlling terminal.
#[derive(Debug, Default)]
pub struct TerminalBackend;

impl TerminalBackend {
    /// Creates a terminal backend.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl RenderingBackend for TerminalBackend {
    fn run<F>(self, presentation: Presentation, mut update_scene: F) -> Result<()>
    where
        F: FnMut(Duration, FrameInput, &mut Scene) -> Result<()>,
    {
        let Presentation {
            window_title,
            background,
            foreground,
            scene,
        } = presentation;
        let palette = Palette {
            background,
            foreground,
        };

        let mut terminal = enter_terminal(&window_title)?;
        let result = run_frames(
            &mut terminal,
            palette,
            &window_title,
            scene,
            &mut update_scene,
        );
        let restored = restore_terminal(&mut terminal);
        result.and(restored)
    }
}

fn run_frames<F>(
    terminal: &mut TuiTerminal,
    palette: Palette,
    title: &str,
    mut scene: Scene,
    update_scene: &mut F,
) -> Result<()>
where
    F: FnMut(Duration, FrameInput, &mut Scene) -> Result<()>,
{
    let mut latch = InputLatch::default();
    let mut last_frame = Instant::now();

    loop {
        let _ = terminal
            .draw(|frame| draw_scene(frame, palette, title, &scene))
            .context("failed to draw frame")?;

        let deadline = last_frame + FRAME_INTERVAL;
        loop {
            let timeout = deadline.saturating_duration_since(Instant::now());
            if !event::poll(timeout).context("failed to poll terminal events")? {
                break;
            }
            let event = event::read().context("failed to read terminal event")?;
            trace!(?event, "terminal event");
            latch.register(&event);
        }

        let now = Instant::now();
        let dt = now.saturating_duration_since(last_frame);
        last_frame = now;

        let input = latch.take();
        if input != FrameInput::default() {
            debug!(?input, "frame input");
        }
        let quit_requested = input.quit_requested;
        update_scene(dt, input, &mut scene)?;

        if quit_requested {
            return Ok(());
        }
    }
}

fn enter_terminal(title: &str) -> Result<TuiTerminal> {
    enable_raw_mode()
        .context("failed to enable raw mode; run the widget inside an interactive terminal")?;

    let mut stdout = io::stdout();
    if let Err(error) = execute!(
        stdout,
        EnterAlternateScreen,
        EnableFocusChange,
        SetTitle(title)
    ) {
        let _ = disable_raw_mode();
        return Err(error).context("failed to initialise terminal");
    }

    match Terminal::new(CrosstermBackend::new(stdout)) {
        Ok(terminal) => Ok(terminal),
        Err(error) => {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), DisableFocusChange, LeaveAlternateScreen);
            Err(error).context("failed to create terminal backend")
        }
    }
}

/// Attempts every restore step, reporting the first failure.
fn restore_terminal(terminal: &mut TuiTerminal) -> Result<()> {
    let raw_mode = disable_raw_mode().context("failed to disable raw mode");
    let screen = execute!(
        terminal.backend_mut(),
        DisableFocusChange,
        LeaveAlternateScreen
    )
    .context("failed to leave alternate screen");
    let cursor = terminal.show_cursor().context("failed to show cursor");
    raw_mode.and(screen).and(cursor)
}
