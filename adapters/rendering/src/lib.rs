#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Shared rendering contracts for reverse_brainrot display surfaces.
//!
//! The display surface is a collaborator of the progression engine: it
//! renders [`Scene`] values derived from progression snapshots and reports
//! user input through [`FrameInput`]. Styling lives here, outside the engine.

use anyhow::Result as AnyResult;
use reverse_brainrot_core::ProgressionSnapshot;
use std::time::Duration;
use thiserror::Error;

/// Opaque RGB color used when presenting frames.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel intensity.
    pub red: u8,
    /// Green channel intensity.
    pub green: u8,
    /// Blue channel intensity.
    pub blue: u8,
}

impl Color {
    /// Creates an opaque color from byte RGB values.
    #[must_use]
    pub const fn from_rgb_u8(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }
}

/// Window background.
pub const BACKGROUND: Color = Color::from_rgb_u8(0x12, 0x12, 0x12);
/// Default text color.
pub const FOREGROUND: Color = Color::from_rgb_u8(0xee, 0xee, 0xee);
/// Filled portion of the experience bar.
pub const XP_BAR_FILL: Color = Color::from_rgb_u8(0x50, 0xc8, 0x78);
/// Empty portion of the experience bar.
pub const XP_BAR_TRACK: Color = Color::from_rgb_u8(0x33, 0x33, 0x33);
/// Text drawn on top of a badge label.
pub const BADGE_TEXT: Color = Color::from_rgb_u8(0x22, 0x22, 0x22);

const DEFAULT_BADGE_COLOR: Color = Color::from_rgb_u8(0xcc, 0xcc, 0xcc);

static BADGE_COLORS: [(&str, Color); 8] = [
    ("None", DEFAULT_BADGE_COLOR),
    ("Copper", Color::from_rgb_u8(0xb8, 0x73, 0x33)),
    ("Bronze", Color::from_rgb_u8(0xcd, 0x7f, 0x32)),
    ("Silver", Color::from_rgb_u8(0xc0, 0xc0, 0xc0)),
    ("Gold", Color::from_rgb_u8(0xff, 0xd7, 0x00)),
    ("Platinum", Color::from_rgb_u8(0xe5, 0xe4, 0xe2)),
    ("Diamond", Color::from_rgb_u8(0xb9, 0xf2, 0xff)),
    ("Emerald", Color::from_rgb_u8(0x50, 0xc8, 0x78)),
];

/// Background color of the badge label for the named tier.
///
/// Unknown names fall back to the neutral grey used for the "None" tier.
#[must_use]
pub fn badge_color(name: &str) -> Color {
    BADGE_COLORS
        .iter()
        .find(|(tier, _)| *tier == name)
        .map_or(DEFAULT_BADGE_COLOR, |(_, color)| *color)
}

/// Errors raised while building presentation values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum RenderingError {
    /// The experience window of a level must span at least one point.
    #[error("experience range must be positive (floor {floor}, ceiling {ceiling})")]
    EmptyXpRange {
        /// Experience at which the level starts.
        floor: u32,
        /// Experience at which the next level starts.
        ceiling: u32,
    },
}

/// Progress through the current level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct XpBar {
    /// Experience gathered inside the level, clamped to `range`.
    pub value: u32,
    /// Experience spanned by the level.
    pub range: u32,
}

impl XpBar {
    /// Creates a bar for `xp` inside the `floor..ceiling` window.
    pub fn new(xp: u32, floor: u32, ceiling: u32) -> Result<Self, RenderingError> {
        if ceiling <= floor {
            return Err(RenderingError::EmptyXpRange { floor, ceiling });
        }

        let range = ceiling - floor;
        Ok(Self {
            value: xp.saturating_sub(floor).min(range),
            range,
        })
    }

    /// Filled fraction in `0.0..=1.0`.
    #[must_use]
    pub fn ratio(&self) -> f64 {
        f64::from(self.value) / f64::from(self.range)
    }

    /// Text drawn over the bar.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}/{}", self.value, self.range)
    }
}

/// Badge shown in the top-right corner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BadgeLabel {
    /// Name of the held tier.
    pub name: &'static str,
    /// Background color of the label.
    pub color: Color,
}

/// Claim button state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClaimButton {
    /// Caption describing the next tier or the exhausted ladder.
    pub label: String,
    /// Whether pressing the button would purchase the next tier.
    pub enabled: bool,
}

impl ClaimButton {
    fn from_snapshot(snapshot: &ProgressionSnapshot) -> Self {
        match (snapshot.next_badge_name, snapshot.next_badge_cost) {
            (Some(name), Some(cost)) => Self {
                label: format!("Claim {name} Badge ({cost} coins)"),
                enabled: snapshot.can_claim_next,
            },
            _ => Self {
                label: "Max tier reached".to_owned(),
                enabled: false,
            },
        }
    }
}

/// Focus readout displayed under the status line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FocusReadout {
    /// The window holds focus.
    Focused,
    /// The window lost focus.
    Unfocused {
        /// Consecutive unfocused seconds since the last streak reset.
        streak: u32,
    },
}

impl FocusReadout {
    /// Caption rendered for the readout.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Focused => "Focused".to_owned(),
            Self::Unfocused { streak: 0 } => "Unfocused".to_owned(),
            Self::Unfocused { streak } => format!("Unfocused for {streak}s"),
        }
    }
}

/// Everything a display surface renders for a single state snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scene {
    /// `Level: L | XP: X | Coins: C` summary.
    pub status_line: String,
    /// Progress through the current level.
    pub xp_bar: XpBar,
    /// Held badge tier.
    pub badge: BadgeLabel,
    /// Glyph of the current pet stage.
    pub pet_glyph: &'static str,
    /// Focus readout.
    pub focus: FocusReadout,
    /// Claim button state.
    pub claim_button: ClaimButton,
}

impl Scene {
    /// Builds a scene from a progression snapshot.
    pub fn from_snapshot(snapshot: &ProgressionSnapshot) -> Result<Self, RenderingError> {
        let xp_bar = XpBar::new(
            snapshot.xp,
            snapshot.xp_floor_for_level,
            snapshot.xp_ceiling_for_next_level,
        )?;
        let focus = if snapshot.focused {
            FocusReadout::Focused
        } else {
            FocusReadout::Unfocused {
                streak: snapshot.penalty_streak,
            }
        };

        Ok(Self {
            status_line: format!(
                "Level: {} | XP: {} | Coins: {}",
                snapshot.level.get(),
                snapshot.xp,
                snapshot.coins
            ),
            xp_bar,
            badge: BadgeLabel {
                name: snapshot.badge_name,
                color: badge_color(snapshot.badge_name),
            },
            pet_glyph: snapshot.pet_glyph,
            focus,
            claim_button: ClaimButton::from_snapshot(snapshot),
        })
    }

    /// Replaces the scene contents with a newer snapshot.
    pub fn refresh(&mut self, snapshot: &ProgressionSnapshot) -> Result<(), RenderingError> {
        *self = Self::from_snapshot(snapshot)?;
        Ok(())
    }
}

/// Input snapshot gathered by adapters before updating the scene.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct FrameInput {
    /// Activation changes reported by the windowing environment this frame,
    /// in arrival order.
    pub activations: Vec<bool>,
    /// Whether the user pressed the claim button this frame.
    pub claim_reward: bool,
    /// Whether the user asked to close the widget.
    pub quit_requested: bool,
}

/// Static configuration handed to a backend when it starts.
#[derive(Clone, Debug)]
pub struct Presentation {
    /// Title shown by surfaces that support one.
    pub window_title: String,
    /// Color used to clear the surface.
    pub background: Color,
    /// Default text color.
    pub foreground: Color,
    /// Initial scene.
    pub scene: Scene,
}

impl Presentation {
    /// Creates a presentation with the default palette.
    #[must_use]
    pub fn new(window_title: impl Into<String>, scene: Scene) -> Self {
        Self {
            window_title: window_title.into(),
            background: BACKGROUND,
            foreground: FOREGROUND,
            scene,
        }
    }
}

/// Rendering backends capable of presenting scenes.
pub trait RenderingBackend {
    /// Runs the rendering backend until it is requested to exit.
    ///
    /// The provided `update_scene` closure receives the wall-clock frame
    /// delta and per-frame input captured by the adapter, and may mutate the
    /// scene before it is drawn. An error returned by the closure stops the
    /// backend after the surface has been restored.
    fn run<F>(self, presentation: Presentation, update_scene: F) -> AnyResult<()>
    where
        F: FnMut(Duration, FrameInput, &mut Scene) -> AnyResult<()>;
}
