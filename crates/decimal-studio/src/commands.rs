use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use decimal_engine::theme::{ColorScheme, JsonFileStore, Theme, ThemeSettings};
use decimal_engine::time::{instant_today, ClockSnapshot, SystemClock};
use decimal_time::{
    format_decimal_time, format_percent_of_day, format_standard_time, to_decimal_time, DecimalTime,
    StandardTime,
};
use decimal_ui::raster::rasterize_png;
use decimal_ui::scene::{render_face, FaceConfig};
use decimal_ui::svg::render_svg;

use crate::cli::{Cli, Command, FaceArgs, ThemeAction};
use crate::watch;

pub fn run(cli: Cli) -> anyhow::Result<()> {
    let prefs = Prefs { theme_file: cli.theme_file, prefers: cli.prefers };
    match cli.command {
        Command::Now { json } => {
            let snapshot = ClockSnapshot::sample(&SystemClock, 0);
            print_times(&snapshot.standard, &snapshot.decimal, json)
        }
        Command::Convert { time, json } => print_times(&time, &to_decimal_time(&time), json),
        Command::Watch(args) => watch::run(args),
        Command::Face(args) => face(args, &prefs),
        Command::Theme { action } => theme(action.unwrap_or(ThemeAction::Show), &prefs),
    }
}

/// Where the theme preference lives and how to seed it.
struct Prefs {
    theme_file: Option<PathBuf>,
    prefers: Option<ColorScheme>,
}

impl Prefs {
    fn open(&self) -> anyhow::Result<ThemeSettings<JsonFileStore>> {
        let path = match &self.theme_file {
            Some(path) => path.clone(),
            None => JsonFileStore::default_path()
                .context("no platform config directory; pass --theme-file")?,
        };
        log::debug!("theme preferences at {}", path.display());
        Ok(ThemeSettings::load(JsonFileStore::new(path), self.prefers))
    }
}

// ── now / convert ─────────────────────────────────────────────────────────

fn print_times(standard: &StandardTime, decimal: &DecimalTime, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&times_json(standard, decimal))?);
    } else {
        println!("decimal   {}", format_decimal_time(decimal));
        println!("standard  {}", format_standard_time(standard));
        println!("progress  {}", format_percent_of_day(decimal));
    }
    Ok(())
}

fn times_json(standard: &StandardTime, decimal: &DecimalTime) -> serde_json::Value {
    serde_json::json!({
        "decimal": {
            "text": format_decimal_time(decimal),
            "hours": decimal.hours,
            "minutes": decimal.minutes,
            "seconds": decimal.seconds,
            "total_decimal_seconds": decimal.total_decimal_seconds,
        },
        "standard": {
            "text": format_standard_time(standard),
            "hours": standard.hours,
            "minutes": standard.minutes,
            "seconds": standard.seconds,
            "milliseconds": standard.milliseconds,
        },
        "percent_of_day": decimal.percent_of_day,
    })
}

// ── face ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Svg,
    Png,
}

impl OutputFormat {
    fn from_path(path: &Path) -> anyhow::Result<Self> {
        let ext = path.extension().and_then(|e| e.to_str()).map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("svg") => Ok(OutputFormat::Svg),
            Some("png") => Ok(OutputFormat::Png),
            _ => bail!("cannot tell the output format of {}; use .svg or .png", path.display()),
        }
    }
}

fn face(args: FaceArgs, prefs: &Prefs) -> anyhow::Result<()> {
    let format = OutputFormat::from_path(&args.output)?;

    let snapshot = match args.at {
        Some(at) => {
            let instant = instant_today(at).context("time of day out of range")?;
            ClockSnapshot::at(instant, 0)
        }
        None => ClockSnapshot::sample(&SystemClock, 0),
    };

    let theme = match args.theme {
        Some(theme) => theme,
        None => prefs.open()?.current(),
    };

    let config = FaceConfig {
        width: args.width,
        height: args.height,
        style: args.style,
        show_digital: !args.no_digital,
    };
    if !(config.width > 0.0 && config.height > 0.0) {
        bail!("face size must be positive, got {}x{}", config.width, config.height);
    }

    write_face(&args.output, format, &snapshot, theme, &config, args.scale)?;
    println!("{} ({}, {theme}, {})", args.output.display(), config.style, format_decimal_time(&snapshot.decimal));
    Ok(())
}

fn write_face(
    path: &Path,
    format: OutputFormat,
    snapshot: &ClockSnapshot,
    theme: Theme,
    config: &FaceConfig,
    scale: f32,
) -> anyhow::Result<()> {
    let mut list = render_face(&snapshot.standard, &snapshot.decimal, theme.palette(), config);
    let svg = render_svg(&mut list, config.viewport());
    let bytes = match format {
        OutputFormat::Svg => svg.into_bytes(),
        OutputFormat::Png => rasterize_png(&svg, scale)?,
    };
    fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
    log::info!("wrote {format:?} face to {}", path.display());
    Ok(())
}

// ── theme ─────────────────────────────────────────────────────────────────

fn theme(action: ThemeAction, prefs: &Prefs) -> anyhow::Result<()> {
    if action == ThemeAction::List {
        for theme in Theme::ALL {
            println!("{:<8}{}", theme.id(), theme.label());
        }
        return Ok(());
    }

    let mut settings = prefs.open()?;
    let theme = match action {
        ThemeAction::Set { theme } => {
            settings.set(theme)?;
            theme
        }
        ThemeAction::Lucky => settings.lucky(&mut rand::thread_rng())?,
        ThemeAction::Show | ThemeAction::List => settings.current(),
    };
    println!("{theme}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn output_format_follows_extension() {
        assert_eq!(OutputFormat::from_path(Path::new("a/face.svg")).unwrap(), OutputFormat::Svg);
        assert_eq!(OutputFormat::from_path(Path::new("face.PNG")).unwrap(), OutputFormat::Png);
        assert!(OutputFormat::from_path(Path::new("face.jpg")).is_err());
        assert!(OutputFormat::from_path(Path::new("face")).is_err());
    }

    #[test]
    fn json_reports_both_times() {
        let standard = StandardTime::new(12, 0, 0, 0).unwrap();
        let value = times_json(&standard, &to_decimal_time(&standard));
        assert_eq!(value["decimal"]["text"], "5:00:00");
        assert_eq!(value["standard"]["text"], "12:00:00");
        assert_eq!(value["percent_of_day"], 50.0);
    }

    #[test]
    fn writes_svg_face() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("face.svg");
        let instant = instant_today(StandardTime::new(6, 0, 0, 0).unwrap()).unwrap();
        let snapshot = ClockSnapshot::at(instant, 0);

        write_face(&path, OutputFormat::Svg, &snapshot, Theme::Sunset, &FaceConfig::default(), 1.0).unwrap();

        let svg = fs::read_to_string(&path).unwrap();
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(">06:00:00</text>"));
        assert!(svg.contains(&Theme::Sunset.palette().bg_primary.to_hex()));
    }

    #[test]
    fn theme_set_persists_to_the_file() {
        let dir = tempdir().unwrap();
        let prefs = Prefs { theme_file: Some(dir.path().join("prefs.json")), prefers: None };

        theme(ThemeAction::Set { theme: Theme::Ocean }, &prefs).unwrap();
        assert_eq!(prefs.open().unwrap().current(), Theme::Ocean);
    }

    #[test]
    fn hint_applies_until_a_theme_is_stored() {
        let dir = tempdir().unwrap();
        let prefs = Prefs {
            theme_file: Some(dir.path().join("prefs.json")),
            prefers: Some(ColorScheme::Light),
        };
        assert_eq!(prefs.open().unwrap().current(), Theme::Light);

        theme(ThemeAction::Lucky, &prefs).unwrap();
        assert_ne!(prefs.open().unwrap().current(), Theme::Light);
    }
}
