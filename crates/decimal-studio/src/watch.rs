use std::io::{self, Write};
use std::time::Duration;

use anyhow::Context;
use decimal_engine::time::{ClockSnapshot, Ticker, TickerConfig};
use decimal_time::{centiseconds, format_decimal_time, format_percent_of_day, format_standard_time};

use crate::cli::WatchArgs;

/// Runs the live clock on a current-thread runtime until Ctrl-C or the
/// requested duration elapses.
pub fn run(args: WatchArgs) -> anyhow::Result<()> {
    let limit = match args.duration_secs {
        Some(secs) => Some(
            Duration::try_from_secs_f64(secs)
                .with_context(|| format!("invalid --duration-secs {secs}"))?,
        ),
        None => None,
    };

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("starting tokio runtime")?;
    runtime.block_on(watch(TickerConfig::from_millis(args.interval_ms), limit))
}

async fn watch(config: TickerConfig, limit: Option<Duration>) -> anyhow::Result<()> {
    let mut ticker = Ticker::new(config);
    let mut rx = ticker.subscribe();
    ticker.start()?;
    log::info!("watching every {:?}", config.period());

    let deadline = async {
        match limit {
            Some(limit) => tokio::time::sleep(limit).await,
            None => std::future::pending().await,
        }
    };
    tokio::pin!(deadline);

    let mut out = io::stdout().lock();
    loop {
        tokio::select! {
            changed = rx.changed() => {
                if changed.is_err() {
                    break;
                }
                let snapshot = *rx.borrow_and_update();
                write!(out, "\r{}", status_line(&snapshot))?;
                out.flush()?;
            }
            _ = &mut deadline => break,
            signal = tokio::signal::ctrl_c() => {
                signal.context("listening for ctrl-c")?;
                break;
            }
        }
    }

    ticker.stop();
    writeln!(out)?;
    Ok(())
}

/// One redraw of the live display.
fn status_line(snapshot: &ClockSnapshot) -> String {
    format!(
        "{}.{:02}  standard {}  day {:>7}",
        format_decimal_time(&snapshot.decimal),
        centiseconds(&snapshot.decimal),
        format_standard_time(&snapshot.standard),
        format_percent_of_day(&snapshot.decimal),
    )
}

#[cfg(test)]
mod tests {
    use decimal_engine::time::instant_today;
    use decimal_time::StandardTime;

    use super::*;

    #[test]
    fn status_line_layout() {
        let instant = instant_today(StandardTime::new(0, 0, 1, 0).unwrap()).unwrap();
        let line = status_line(&ClockSnapshot::at(instant, 3));
        assert_eq!(line, "0:00:01.15  standard 00:00:01  day   0.00%");
    }

    #[test]
    fn negative_duration_is_rejected() {
        let args = WatchArgs { interval_ms: 20, duration_secs: Some(-1.0) };
        assert!(run(args).is_err());
    }

    #[test]
    fn stops_after_duration() {
        let args = WatchArgs { interval_ms: 5, duration_secs: Some(0.05) };
        run(args).unwrap();
    }
}
