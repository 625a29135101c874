//! Translate pointer and keyboard input on picker controls into
//! [`HsvPatch`]es for [`ColorState::update_from_hsv`].
//!
//! [`ColorState::update_from_hsv`]: crate::ColorState::update_from_hsv

use crate::{
    color::Component,
    config::KeySteps,
    math::{clamp, normalize_hue},
    models::{Hsv, HsvPatch},
};

/// A picker control that accepts pointer and keyboard input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    /// The 2D saturation (x) / value (y) area.
    Area,
    /// The horizontal hue slider.
    Hue,
    /// The horizontal alpha slider.
    Alpha,
}

/// A pointer position normalized to the bounds of a control, with `(0, 0)` at
/// the top left.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Position {
    /// Horizontal position, `0..=1`.
    pub x: Component,
    /// Vertical position, `0..=1`.
    pub y: Component,
}

impl Position {
    /// Create a position, clamping both coordinates to `0..=1`.
    pub fn new(x: Component, y: Component) -> Self {
        Self {
            x: clamp(x, 0.0, 1.0),
            y: clamp(y, 0.0, 1.0),
        }
    }
}

/// Map a pointer sample on `control` to a patch. A sample on the area always
/// produces a single patch carrying both saturation and value.
pub fn pointer_patch(control: Control, position: Position) -> HsvPatch {
    let Position { x, y } = Position::new(position.x, position.y);

    match control {
        Control::Area => {
            HsvPatch::saturation_value((x * 100.0).round(), ((1.0 - y) * 100.0).round())
        }
        Control::Hue => HsvPatch::hue((x * 360.0).round()),
        Control::Alpha => HsvPatch::alpha((x * 100.0).round() / 100.0),
    }
}

/// Keys understood by picker controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    /// Arrow left.
    Left,
    /// Arrow right.
    Right,
    /// Arrow up.
    Up,
    /// Arrow down.
    Down,
    /// Jump to the minimum.
    Home,
    /// Jump to the maximum.
    End,
}

/// A key press, optionally with the coarse-step modifier held.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyPress {
    /// The key that was pressed.
    pub key: Key,
    /// True if the modifier for larger steps was held.
    pub coarse: bool,
}

impl KeyPress {
    /// A plain key press.
    pub fn new(key: Key) -> Self {
        Self { key, coarse: false }
    }

    /// A key press with the coarse-step modifier held.
    pub fn coarse(key: Key) -> Self {
        Self { key, coarse: true }
    }
}

/// Map a key press on `control` to a patch relative to the current color.
/// Returns `None` for keys the control does not handle.
///
/// Saturation, value and alpha clamp at their limits; hue wraps around.
pub fn key_patch(
    control: Control,
    press: KeyPress,
    hsv: &Hsv,
    steps: &KeySteps,
) -> Option<HsvPatch> {
    let step = if press.coarse { steps.coarse } else { steps.fine };
    let percent = |value: Component| clamp(value, 0.0, 100.0);

    let patch = match (control, press.key) {
        (Control::Area, Key::Right) => HsvPatch::saturation(percent(hsv.saturation + step)),
        (Control::Area, Key::Left) => HsvPatch::saturation(percent(hsv.saturation - step)),
        (Control::Area, Key::Up) => HsvPatch::value(percent(hsv.value + step)),
        (Control::Area, Key::Down) => HsvPatch::value(percent(hsv.value - step)),
        (Control::Area, Key::Home | Key::End) => return None,

        (Control::Hue, Key::Right | Key::Up) => HsvPatch::hue(normalize_hue(hsv.hue + step)),
        (Control::Hue, Key::Left | Key::Down) => HsvPatch::hue(normalize_hue(hsv.hue - step)),
        (Control::Hue, Key::Home) => HsvPatch::hue(0.0),
        (Control::Hue, Key::End) => HsvPatch::hue(359.0),

        (Control::Alpha, key) => {
            let step = if press.coarse {
                steps.alpha_coarse
            } else {
                steps.alpha_fine
            };
            let alpha = match key {
                Key::Right | Key::Up => hsv.alpha + step,
                Key::Left | Key::Down => hsv.alpha - step,
                Key::Home => 0.0,
                Key::End => 1.0,
            };
            // Keep alpha on a 0.01 grid so repeated steps don't drift.
            HsvPatch::alpha(clamp((alpha * 100.0).round() / 100.0, 0.0, 1.0))
        }
    };

    Some(patch)
}
