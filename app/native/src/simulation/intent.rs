//! Animation intents exchanged with the behavior layer.

use serde::{Deserialize, Serialize};

/// An animation request.
///
/// The driver only reads `mobility` (walking direction and speed factor, 0
/// when standing) and `offset_y` (vertical sprite offset in unscaled pixels).
/// The remaining fields are carried through to the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimData {
    pub clip: String,
    pub is_loop: bool,
    pub is_strict: bool,
    pub offset_y: f64,
    pub mobility: i32,
}

impl AnimData {
    /// A looping, non-strict animation with no offset.
    #[must_use]
    pub fn looping(clip: impl Into<String>, mobility: i32) -> Self {
        Self { clip: clip.into(), is_loop: true, is_strict: false, offset_y: 0.0, mobility }
    }

    /// A one-shot animation that must play to the end.
    #[must_use]
    pub fn once(clip: impl Into<String>) -> Self {
        Self { clip: clip.into(), is_loop: false, is_strict: true, offset_y: 0.0, mobility: 0 }
    }

    #[must_use]
    pub fn with_offset_y(mut self, offset_y: f64) -> Self {
        self.offset_y = offset_y;
        self
    }

    /// Same animation walking the other way.
    #[must_use]
    pub fn reversed(&self) -> Self { self.with_mobility(-self.mobility) }

    #[must_use]
    pub fn with_mobility(&self, mobility: i32) -> Self { Self { mobility, ..self.clone() } }

    /// Whether the request names no clip and should be ignored.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.clip.is_empty() }
}

/// Animation source consulted by the driver every frame.
///
/// Returning `None` leaves the current animation playing.
pub trait Behavior {
    /// Autonomous choice after `dt` seconds.
    fn auto_ctrl(&mut self, dt: f64) -> Option<AnimData>;

    /// Animation while the user drags the pet.
    fn dragging(&mut self) -> Option<AnimData>;

    /// Animation right after a fall ends.
    fn dropped(&mut self) -> Option<AnimData>;

    /// Resting animation, also forced while falling.
    fn default_anim(&mut self) -> Option<AnimData>;
}

/// Minimal behavior: one base animation, plus fixed drag and landing clips.
///
/// Used by headless runs where no sprite state machine is available.
#[derive(Debug, Clone)]
pub struct IdleBehavior {
    base: AnimData,
    announced: bool,
}

impl IdleBehavior {
    /// Stands still.
    #[must_use]
    pub fn new() -> Self { Self::with_base(AnimData::looping("Relax", 0)) }

    /// Walks forever in the direction of `mobility`'s sign.
    #[must_use]
    pub fn walking(mobility: i32) -> Self {
        if mobility == 0 { Self::new() } else { Self::with_base(AnimData::looping("Move", mobility)) }
    }

    #[must_use]
    pub const fn with_base(base: AnimData) -> Self { Self { base, announced: false } }
}

impl Default for IdleBehavior {
    fn default() -> Self { Self::new() }
}

impl Behavior for IdleBehavior {
    fn auto_ctrl(&mut self, _dt: f64) -> Option<AnimData> {
        if self.announced {
            return None;
        }
        self.announced = true;
        Some(self.base.clone())
    }

    fn dragging(&mut self) -> Option<AnimData> { Some(AnimData::looping("Interact", 0)) }

    fn dropped(&mut self) -> Option<AnimData> {
        // Landing interrupts whatever was playing; re-announce afterwards.
        self.announced = false;
        Some(AnimData::once("Landing"))
    }

    fn default_anim(&mut self) -> Option<AnimData> { Some(self.base.clone()) }
}
