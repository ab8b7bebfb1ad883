use anyhow::Context;
use astro_wheel::ephemeris::{load_positions_from_json, ChartPositions};
use astro_wheel::rendering::ThemeKind;
use astro_wheel::wheel::{WheelKind, WheelRenderer, WheelRequest};
use clap::{Parser, ValueEnum};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// One chart.
    Natal,
    /// Midpoint chart of `--input` and `--second`.
    Composite,
    /// `--second` on the outer ring, aspected against `--input`.
    Synastry,
    /// Like synastry, with `--second` holding the transiting positions.
    Transit,
}

impl Mode {
    fn kind(self) -> WheelKind {
        match self {
            Mode::Natal => WheelKind::Natal,
            Mode::Composite => WheelKind::Composite,
            Mode::Synastry => WheelKind::Synastry,
            Mode::Transit => WheelKind::Transit,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ThemeArg {
    Light,
    Dark,
    Mono,
}

impl From<ThemeArg> for ThemeKind {
    fn from(value: ThemeArg) -> Self {
        match value {
            ThemeArg::Light => ThemeKind::Light,
            ThemeArg::Dark => ThemeKind::Dark,
            ThemeArg::Mono => ThemeKind::Mono,
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Chart positions JSON (bodies, 12 cusps, asc, mc) for the primary chart.
    #[arg(long)]
    input: PathBuf,

    /// Second chart, required by composite, synastry and transit.
    #[arg(long)]
    second: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = Mode::Natal)]
    mode: Mode,

    /// Wheel config TOML (otherwise tries configs/wheel.toml, then built-in defaults).
    #[arg(long)]
    config: Option<PathBuf>,

    /// SVG output path (default: stdout).
    #[arg(long)]
    out: Option<PathBuf>,

    /// Also write aspects, house placements and stelliums as JSON.
    #[arg(long)]
    aspects_json: Option<PathBuf>,

    /// Override the configured theme.
    #[arg(long, value_enum)]
    theme: Option<ThemeArg>,

    /// Override the configured canvas width.
    #[arg(long)]
    width: Option<f64>,
}

fn read_positions(path: &Path) -> anyhow::Result<ChartPositions> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read chart positions {}", path.display()))?;
    load_positions_from_json(&text)
        .with_context(|| format!("Invalid chart positions in {}", path.display()))
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut config = wheel_config::load_wheel_config(args.config.as_deref())?;
    if let Some(theme) = args.theme {
        config.theme = theme.into();
    }
    if let Some(width) = args.width {
        config.canvas.width = width;
    }

    let primary = read_positions(&args.input)?;
    let secondary = args.second.as_deref().map(read_positions).transpose()?;
    if args.mode != Mode::Natal && secondary.is_none() {
        anyhow::bail!("--mode {:?} needs --second", args.mode);
    }
    if args.mode == Mode::Natal && secondary.is_some() {
        log::warn!("--second is ignored for a natal wheel");
    }

    let request = WheelRequest {
        kind: args.mode.kind(),
        primary,
        secondary,
    };
    let renderer = WheelRenderer::new(config).context("Invalid wheel configuration")?;
    let output = renderer.render(&request).context("Render failed")?;

    match &args.out {
        Some(path) => {
            fs::write(path, &output.svg)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            log::info!("wrote {}", path.display());
        }
        None => print!("{}", output.svg),
    }

    if let Some(path) = &args.aspects_json {
        let json = serde_json::to_string_pretty(&output)?;
        fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
        log::info!("wrote {} aspects to {}", output.aspects.len(), path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parse_two_chart_mode() {
        let args = Args::try_parse_from([
            "wheel_render",
            "--input",
            "a.json",
            "--second",
            "b.json",
            "--mode",
            "synastry",
            "--theme",
            "light",
        ])
        .unwrap();
        assert_eq!(args.mode.kind(), WheelKind::Synastry);
        assert_eq!(ThemeKind::from(args.theme.unwrap()), ThemeKind::Light);
    }

    #[test]
    fn test_mode_defaults_to_natal() {
        let args = Args::try_parse_from(["wheel_render", "--input", "a.json"]).unwrap();
        assert_eq!(args.mode, Mode::Natal);
        assert!(args.second.is_none());
    }
}
