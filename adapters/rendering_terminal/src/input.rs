//! Translation of terminal events into frame input.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use reverse_brainrot_rendering::FrameInput;

/// Collects terminal events observed between two frames.
///
/// Focus notifications are queued in arrival order; key presses are
/// latched until [`InputLatch::take`] hands them to the simulation.
#[doc(hidden)]
#[derive(Clone, Debug, Default)]
pub struct InputLatch {
    pending: FrameInput,
}

impl InputLatch {
    /// Records a single terminal event.
    pub fn register(&mut self, event: &Event) {
        match event {
            Event::FocusGained => self.pending.activations.push(true),
            Event::FocusLost => self.pending.activations.push(false),
            Event::Key(key) if key.kind == KeyEventKind::Press => self.register_key(key),
            _ => {}
        }
    }

    fn register_key(&mut self, key: &KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if key.code == KeyCode::Char('c') {
                self.pending.quit_requested = true;
            }
            return;
        }

        match key.code {
            KeyCode::Char('c' | 'C' | ' ') | KeyCode::Enter => self.pending.claim_reward = true,
            KeyCode::Char('q' | 'Q') | KeyCode::Esc => self.pending.quit_requested = true,
            _ => {}
        }
    }

    /// Returns the latched input and clears the latch so each action fires once.
    pub fn take(&mut self) -> FrameInput {
        std::mem::take(&mut self.pending)
    }
}
