use std::{
    cell::RefCell,
    path::{Path, PathBuf},
    rc::Rc,
};

use anyhow::{anyhow, bail, Context};
use clap::{Parser, Subcommand};
use image::{Rgba, RgbaImage};
use tincture::{
    contrast_ratio, harmony, key_patch, meets_contrast_ratio, pointer_patch, ColorHistory,
    ColorState, ColorValue, Component, Control, Format, Hsv, Key, KeyPress, Level, PickerConfig,
    Position, Scheme,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const HUE_STRIP_HEIGHT: u32 = 24;

#[derive(Parser)]
#[command(name = "swatch")]
#[command(about = "Inspect, convert and preview colors")]
struct Cli {
    /// Picker configuration (YAML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a color in one or every format
    Show {
        /// Any supported color string, e.g. "#d2691e" or "oklch(63% 0.15 50)"
        color: String,

        /// Output format; prints every format when omitted
        #[arg(short, long)]
        format: Option<Format>,

        /// Print the full color value as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print a color harmony built around a base color
    Harmony {
        /// Base color
        color: String,

        /// complementary, analogous, triadic, split-complementary, tetradic or monochromatic
        scheme: Scheme,
    },
    /// Print the WCAG contrast ratio between two colors
    Contrast {
        /// Foreground color
        foreground: String,

        /// Background color
        background: String,
    },
    /// Render the saturation/value area and hue strip of a color to a PNG
    Area {
        /// Color whose hue is rendered
        color: String,

        /// Output PNG file path
        #[arg(short, long, default_value = "area.png")]
        output: PathBuf,

        /// Width and height of the area in pixels
        #[arg(short, long, default_value_t = 256)]
        size: u32,
    },
    /// Replay a script of picker events and print the signals they fire
    Replay {
        /// Script file, one event per line
        script: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "swatch=info,tincture=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => PickerConfig::load(path)?,
        None => PickerConfig::default(),
    };

    match cli.command {
        Commands::Show {
            color,
            format,
            json,
        } => show(&color, format, json),
        Commands::Harmony { color, scheme } => run_harmony(&color, scheme, &config),
        Commands::Contrast {
            foreground,
            background,
        } => run_contrast(&foreground, &background),
        Commands::Area {
            color,
            output,
            size,
        } => render_area(&color, &output, size),
        Commands::Replay { script } => replay(&script, &config),
    }
}

fn parse(color: &str) -> anyhow::Result<ColorValue> {
    color
        .parse::<ColorValue>()
        .with_context(|| format!("could not read color argument `{color}`"))
}

fn show(color: &str, format: Option<Format>, json: bool) -> anyhow::Result<()> {
    let value = parse(color)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    match format {
        Some(format) => println!("{}", value.format(format)),
        None => {
            for format in Format::ALL {
                println!("{:<7} {}", format, value.format(format));
            }
        }
    }

    Ok(())
}

fn run_harmony(color: &str, scheme: Scheme, config: &PickerConfig) -> anyhow::Result<()> {
    let value = parse(color)?;

    for srgb in harmony(&value.rgb, scheme) {
        println!("{}", ColorValue::from_srgb(srgb).format(config.format));
    }

    Ok(())
}

fn run_contrast(foreground: &str, background: &str) -> anyhow::Result<()> {
    let (foreground, background) = (parse(foreground)?, parse(background)?);
    let ratio = contrast_ratio(&foreground.rgb, &background.rgb);

    println!("ratio   {ratio:.2}:1");
    for (label, level, large_text) in [
        ("AA", Level::Aa, false),
        ("AA+", Level::Aa, true),
        ("AAA", Level::Aaa, false),
        ("AAA+", Level::Aaa, true),
    ] {
        let verdict = if meets_contrast_ratio(ratio, level, large_text) {
            "pass"
        } else {
            "fail"
        };
        println!("{label:<7} {verdict}");
    }

    Ok(())
}

fn render_area(color: &str, output: &Path, size: u32) -> anyhow::Result<()> {
    if size < 2 {
        bail!("size must be at least 2 pixels");
    }

    let hsv = parse(color)?.hsv;
    let last = (size - 1) as Component;

    let mut img = RgbaImage::new(size, size + HUE_STRIP_HEIGHT);

    img.enumerate_pixels_mut().for_each(|(x, y, pixel)| {
        let patch = if y < size {
            pointer_patch(
                Control::Area,
                Position::new(x as Component / last, y as Component / last),
            )
        } else {
            pointer_patch(Control::Hue, Position::new(x as Component / last, 0.0))
        };

        let srgb = if y < size {
            patch.apply_to(&hsv).to_srgb()
        } else {
            // The strip shows every hue at full saturation and value.
            patch.apply_to(&Hsv::new(0.0, 100.0, 100.0, 1.0)).to_srgb()
        };

        *pixel = Rgba([
            srgb.red,
            srgb.green,
            srgb.blue,
            (srgb.alpha * 255.0).round() as u8,
        ]);
    });

    img.save(output)
        .with_context(|| format!("could not write image to {}", output.display()))?;

    tracing::info!(path = %output.display(), size, hue = hsv.hue, "Rendered area");

    Ok(())
}

/// Apply one line of a replay script to `state`.
///
/// ```text
/// set <color>
/// start | end
/// area <x> <y> | hue <x> | alpha <x>
/// key <area|hue|alpha> <left|right|up|down|home|end> [coarse]
/// ```
fn apply_event(state: &mut ColorState, line: &str, config: &PickerConfig) -> anyhow::Result<()> {
    let words: Vec<&str> = line.split_whitespace().collect();

    let number = |i: usize| -> anyhow::Result<Component> {
        words
            .get(i)
            .ok_or_else(|| anyhow!("missing argument {i}"))?
            .parse::<Component>()
            .with_context(|| format!("argument {i} is not a number"))
    };

    match words.as_slice() {
        ["set", ..] => {
            let text = line.trim_start().trim_start_matches("set").trim();
            if state.set_from_string(text).is_none() {
                tracing::warn!(text, "Ignoring color that did not parse");
            }
        }
        ["start"] => state.start_drag(),
        ["end"] => {
            state.end_drag();
        }
        ["area", _, _] => {
            let patch = pointer_patch(Control::Area, Position::new(number(1)?, number(2)?));
            state.update_from_hsv(patch);
        }
        ["hue", _] => {
            state.update_from_hsv(pointer_patch(Control::Hue, Position::new(number(1)?, 0.0)));
        }
        ["alpha", _] => {
            state.update_from_hsv(pointer_patch(Control::Alpha, Position::new(number(1)?, 0.0)));
        }
        ["key", control, key, rest @ ..] => {
            let control = match *control {
                "area" => Control::Area,
                "hue" => Control::Hue,
                "alpha" => Control::Alpha,
                other => bail!("unknown control `{other}`"),
            };
            let key = match *key {
                "left" => Key::Left,
                "right" => Key::Right,
                "up" => Key::Up,
                "down" => Key::Down,
                "home" => Key::Home,
                "end" => Key::End,
                other => bail!("unknown key `{other}`"),
            };
            let press = match rest {
                ["coarse"] => KeyPress::coarse(key),
                _ => KeyPress::new(key),
            };

            if let Some(patch) = key_patch(control, press, &state.hsv(), &config.steps) {
                state.update_from_hsv(patch);
            }
        }
        _ => bail!("unrecognized event `{line}`"),
    }

    Ok(())
}

fn replay(script: &Path, config: &PickerConfig) -> anyhow::Result<()> {
    let text = std::fs::read_to_string(script)
        .with_context(|| format!("could not read script {}", script.display()))?;

    let mut state = ColorState::from_config(config);
    let history = Rc::new(RefCell::new(ColorHistory::with_capacity(
        config.history_capacity,
    )));

    let format = config.format;
    state
        .on_change()
        .subscribe(move |value: &ColorValue| println!("change   {}", value.format(format)));

    let sink = Rc::clone(&history);
    state
        .on_change_complete()
        .subscribe(move |value: &ColorValue| {
            println!("complete {}", value.format(format));
            sink.borrow_mut().record(value);
        });

    for (number, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        apply_event(&mut state, line, config)
            .with_context(|| format!("{}:{}", script.display(), number + 1))?;
    }

    if state.end_drag() {
        tracing::warn!("Script ended during a drag; completed it");
    }

    println!("history  {}", history.borrow().entries().join(" "));

    Ok(())
}
