//! The color state controller behind an interactive picker.
//!
//! [`ColorState`] owns one canonical [`Hsv`] color and the [`ColorValue`]
//! derived from it. Every accepted mutation replaces both and notifies the
//! `on_change` signal. The `on_change_complete` signal fires once per
//! logical edit: immediately for discrete edits, or once when a drag session
//! ends.
//!
//! ```rust
//! use tincture::{ColorState, HsvPatch};
//!
//! let mut state = ColorState::new("#ff0000");
//! state.start_drag();
//! state.update_from_hsv(HsvPatch::hue(120.0));
//! state.update_from_hsv(HsvPatch::hue(240.0));
//! assert!(state.end_drag());
//! assert!(!state.end_drag());
//! assert_eq!(state.value().hex, "#0000ff");
//! ```

use crate::{
    color::ColorValue,
    config::PickerConfig,
    models::{Hsv, HsvPatch},
    parse::parse_color,
    signal::Signal,
};

/// Whether a batch of live updates is in progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragState {
    /// No drag session is active; updates are discrete edits.
    #[default]
    Idle,
    /// A drag session is active; updates are live previews.
    Dragging,
}

/// Owns the canonical color of a single picker.
#[derive(Debug)]
pub struct ColorState {
    hsv: Hsv,
    value: ColorValue,
    drag: DragState,
    on_change: Signal<ColorValue>,
    on_change_complete: Signal<ColorValue>,
}

impl ColorState {
    /// Create a state seeded from a color string. A seed that does not parse
    /// falls back to fully saturated red.
    pub fn new(seed: &str) -> Self {
        let (hsv, value) = match parse_color(seed) {
            Some(srgb) => {
                let value = ColorValue::from_srgb(srgb);
                (value.hsv, value)
            }
            None => {
                tracing::warn!(seed, "Seed color did not parse, starting on red");
                let hsv = Hsv::red();
                (hsv, ColorValue::from_srgb(hsv.to_srgb()))
            }
        };

        Self {
            hsv,
            value,
            drag: DragState::Idle,
            on_change: Signal::new(),
            on_change_complete: Signal::new(),
        }
    }

    /// Create a state seeded from the configured seed color.
    pub fn from_config(config: &PickerConfig) -> Self {
        Self::new(&config.seed)
    }

    /// The canonical color. It is normalized but never rounded.
    pub fn hsv(&self) -> Hsv {
        self.hsv
    }

    /// The most recently derived color value.
    pub fn value(&self) -> &ColorValue {
        &self.value
    }

    /// The current drag state.
    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    /// Returns true while a drag session is active.
    pub fn is_dragging(&self) -> bool {
        self.drag == DragState::Dragging
    }

    /// Signal fired on every accepted mutation.
    pub fn on_change(&mut self) -> &mut Signal<ColorValue> {
        &mut self.on_change
    }

    /// Signal fired once per discrete edit or drag session.
    pub fn on_change_complete(&mut self) -> &mut Signal<ColorValue> {
        &mut self.on_change_complete
    }

    /// Merge a partial update into the canonical color. Axes missing from the
    /// patch are left untouched.
    ///
    /// During a drag session only `on_change` fires. Outside of one the
    /// update is a discrete edit and `on_change_complete` fires as well.
    pub fn update_from_hsv(&mut self, patch: HsvPatch) -> &ColorValue {
        self.hsv = patch.apply_to(&self.hsv);
        self.value = ColorValue::from_srgb(self.hsv.to_srgb());

        tracing::trace!(
            axes = ?patch.axes(),
            hex = %self.value.hex8,
            dragging = self.is_dragging(),
            "Applied hsv patch"
        );

        self.on_change.emit(&self.value);
        if !self.is_dragging() {
            self.on_change_complete.emit(&self.value);
        }

        &self.value
    }

    /// Replace the color with one parsed from `text`.
    ///
    /// Returns the new value, or `None` if the text is not a color. A failed
    /// parse changes nothing and notifies nobody.
    pub fn set_from_string(&mut self, text: &str) -> Option<ColorValue> {
        let Some(srgb) = parse_color(text) else {
            tracing::debug!(input = text, "Rejected color string");
            return None;
        };

        let value = ColorValue::from_srgb(srgb);
        self.hsv = value.hsv;
        self.value = value;

        tracing::debug!(input = text, hex = %self.value.hex8, "Accepted color string");

        self.on_change.emit(&self.value);
        self.on_change_complete.emit(&self.value);

        Some(self.value.clone())
    }

    /// Begin a drag session. Calling this while already dragging has no
    /// effect.
    pub fn start_drag(&mut self) {
        if self.is_dragging() {
            tracing::trace!("Drag already in progress");
            return;
        }
        self.drag = DragState::Dragging;
    }

    /// End the drag session and fire `on_change_complete` with the final
    /// value. Returns false, and fires nothing, if no session was active.
    pub fn end_drag(&mut self) -> bool {
        if !self.is_dragging() {
            return false;
        }
        self.drag = DragState::Idle;

        tracing::debug!(hex = %self.value.hex8, "Drag session completed");
        self.on_change_complete.emit(&self.value);

        true
    }
}

impl Default for ColorState {
    fn default() -> Self {
        Self::new("#000000")
    }
}
