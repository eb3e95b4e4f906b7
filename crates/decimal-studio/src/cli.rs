use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use decimal_engine::theme::{ColorScheme, Theme};
use decimal_engine::time::TickerConfig;
use decimal_time::{parse_standard_time, StandardTime};
use decimal_ui::scene::FaceStyle;

#[derive(Parser)]
#[command(name = "decimal-clock", version)]
#[command(about = "French Revolutionary decimal time: 10 hours, 100 minutes, 100 seconds", long_about = None)]
pub struct Cli {
    /// Theme preference file (defaults to the platform config directory)
    #[arg(long, global = true, env = "DECIMAL_CLOCK_THEME_FILE")]
    pub theme_file: Option<PathBuf>,
    /// System color scheme, used when no theme has been chosen yet
    #[arg(long, global = true, env = "DECIMAL_CLOCK_PREFERS", value_name = "light|dark")]
    pub prefers: Option<ColorScheme>,
    /// Log filter in env_logger syntax; overrides RUST_LOG
    #[arg(long, global = true, value_name = "FILTER")]
    pub log: Option<String>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the current decimal time
    Now {
        #[arg(long)]
        json: bool,
    },
    /// Convert a standard time of day (HH:MM[:SS[.mmm]])
    Convert {
        #[arg(value_parser = parse_standard_time)]
        time: StandardTime,
        #[arg(long)]
        json: bool,
    },
    /// Show a live, continuously refreshed clock
    Watch(WatchArgs),
    /// Render the clock face to an SVG or PNG file
    Face(FaceArgs),
    /// Show or change the color theme
    Theme {
        #[command(subcommand)]
        action: Option<ThemeAction>,
    },
}

#[derive(Args)]
pub struct WatchArgs {
    /// Refresh interval in milliseconds
    #[arg(long, default_value_t = TickerConfig::DEFAULT_INTERVAL_MS)]
    pub interval_ms: u64,
    /// Stop after this many seconds instead of waiting for Ctrl-C
    #[arg(long)]
    pub duration_secs: Option<f64>,
}

#[derive(Args)]
pub struct FaceArgs {
    /// Output file; the extension picks the format (.svg or .png)
    #[arg(short, long)]
    pub output: PathBuf,
    /// Render this time of day instead of now
    #[arg(long, value_parser = parse_standard_time)]
    pub at: Option<StandardTime>,
    #[arg(long, default_value_t = 480.0)]
    pub width: f32,
    #[arg(long, default_value_t = 800.0)]
    pub height: f32,
    #[arg(long, default_value_t = FaceStyle::Analog)]
    pub style: FaceStyle,
    /// PNG pixel density multiplier
    #[arg(long, default_value_t = 1.0)]
    pub scale: f32,
    /// Hide the small readout inside the analog face
    #[arg(long)]
    pub no_digital: bool,
    /// Override the stored theme
    #[arg(long)]
    pub theme: Option<Theme>,
}

#[derive(Subcommand, Clone, Copy, Debug, PartialEq)]
pub enum ThemeAction {
    /// Print the active theme
    Show,
    /// List available themes
    List,
    /// Choose a theme and remember it
    Set { theme: Theme },
    /// Switch to a random different theme
    Lucky,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn convert_parses_its_argument() {
        let cli = Cli::try_parse_from(["decimal-clock", "convert", "18:30:05.5"]).unwrap();
        match cli.command {
            Command::Convert { time, json } => {
                assert_eq!(time, StandardTime::new(18, 30, 5, 500).unwrap());
                assert!(!json);
            }
            _ => panic!("expected convert"),
        }
    }

    #[test]
    fn convert_rejects_bad_times() {
        assert!(Cli::try_parse_from(["decimal-clock", "convert", "25:00"]).is_err());
    }

    #[test]
    fn face_defaults() {
        let cli = Cli::try_parse_from(["decimal-clock", "face", "-o", "out.svg"]).unwrap();
        let Command::Face(args) = cli.command else {
            panic!("expected face");
        };
        assert_eq!(args.style, FaceStyle::Analog);
        assert_eq!((args.width, args.height, args.scale), (480.0, 800.0, 1.0));
        assert!(args.at.is_none() && args.theme.is_none() && !args.no_digital);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "decimal-clock",
            "theme",
            "set",
            "ocean",
            "--prefers",
            "light",
            "--theme-file",
            "/tmp/prefs.json",
        ])
        .unwrap();
        assert_eq!(cli.prefers, Some(ColorScheme::Light));
        assert_eq!(cli.theme_file, Some(PathBuf::from("/tmp/prefs.json")));
        match cli.command {
            Command::Theme { action } => assert_eq!(action, Some(ThemeAction::Set { theme: Theme::Ocean })),
            _ => panic!("expected theme"),
        }
    }

    #[test]
    fn watch_interval_defaults_to_ticker_default() {
        let cli = Cli::try_parse_from(["decimal-clock", "watch"]).unwrap();
        let Command::Watch(args) = cli.command else {
            panic!("expected watch");
        };
        assert_eq!(args.interval_ms, 20);
        assert_eq!(args.duration_secs, None);
    }
}
