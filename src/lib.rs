//! tincture converts colors between sRGB, HEX, HSL, HSV, OKLab and OKLCH,
//! parses and formats them as text, and provides the state controller behind
//! an interactive HSVA color picker.

#![deny(missing_docs)]

mod color;
mod config;
pub mod contrast;
mod convert;
mod error;
mod format;
pub mod harmony;
mod history;
pub mod input;
pub mod math;
pub mod models;
mod parse;
mod signal;
mod state;


pub use color::{ColorValue, Component, Components};
pub use config::{KeySteps, PickerConfig};
pub use contrast::{contrast_ratio, meets_contrast_ratio, relative_luminance, Level};
pub use error::{ConfigError, ParseColorError, ParseFormatError, ParseSchemeError};
pub use format::{format_color, Format};
pub use harmony::{harmony, Scheme};
pub use history::ColorHistory;
pub use input::{key_patch, pointer_patch, Control, Key, KeyPress, Position};
pub use models::{Hsl, Hsv, HsvPatch, Model, Oklab, Oklch, Srgb, SrgbLinear};
pub use parse::parse_color;
pub use signal::{Signal, Subscription};
pub use state::{ColorState, DragState};
