//! Per-frame orchestration of the world and its systems.

use std::time::Duration;

use anyhow::Result;
use reverse_brainrot_core::{Command, Event};
use reverse_brainrot_rendering::{FrameInput, RenderingError, Scene};
use reverse_brainrot_system_focus_tracker::FocusTracker;
use reverse_brainrot_system_session_stats::{SessionReport, SessionStats};
use reverse_brainrot_system_tick_scheduler::TickScheduler;
use reverse_brainrot_world::{apply, query, World};

/// Owns the world and the systems that feed it commands.
#[derive(Debug, Default)]
pub(crate) struct Simulation {
    world: World,
    focus_tracker: FocusTracker,
    scheduler: TickScheduler,
    stats: SessionStats,
    events: Vec<Event>,
    commands: Vec<Command>,
}

impl Simulation {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Builds a scene from the current world state.
    pub(crate) fn scene(&self) -> Result<Scene, RenderingError> {
        Scene::from_snapshot(&query::snapshot(&self.world))
    }

    pub(crate) fn report(&self) -> &SessionReport {
        self.stats.report()
    }

    /// Runs one frame and refreshes the scene when the world changed.
    pub(crate) fn advance(
        &mut self,
        dt: Duration,
        input: FrameInput,
        scene: &mut Scene,
    ) -> Result<()> {
        if self.step(dt, input) {
            scene.refresh(&query::snapshot(&self.world))?;
        }
        Ok(())
    }

    /// Applies user input before elapsed time so a refocus reported in this
    /// frame is visible to any tick the frame produces.
    ///
    /// Activation signals are forwarded in arrival order, so a refocus that
    /// is immediately followed by another blur still resets the streak.
    fn step(&mut self, dt: Duration, input: FrameInput) -> bool {
        let mut signals = input.activations.into_iter();
        self.focus_tracker
            .handle(&self.events, signals.next(), &mut self.commands);
        for active in signals {
            self.focus_tracker
                .handle(&[], Some(active), &mut self.commands);
        }
        self.events.clear();
        if input.claim_reward {
            self.commands.push(Command::ClaimReward);
        }
        self.apply_pending();

        self.scheduler.handle(&self.events, dt, &mut self.commands);
        self.apply_pending();

        self.stats.handle(&self.events);
        !self.events.is_empty()
    }

    fn apply_pending(&mut self) {
        for command in self.commands.drain(..) {
            apply(&mut self.world, command, &mut self.events);
        }
    }
}
