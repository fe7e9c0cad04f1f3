//! Charter - synthetic market chart composer.
//!
//! Generates a random-walk candle series, runs the configured indicators over
//! it and prints the drawable chart layers as JSON.
//!
//! Usage: charter [--timeframe 1h] [--count N] [--price P] [--seed S]
//!                [--sma] [--ema] [--bollinger] [--config PATH] [--line]

use std::env;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use charter_compose::{ChartComposer, IndicatorToggles, LineChart, LineStyle};
use charter_config::Config;
use charter_core::Timeframe;
use charter_data::{DataSource, SyntheticSource};
use charter_geometry::Viewport;

/// Parsed command-line options. `None` falls back to the config file.
#[derive(Debug, Default)]
struct Options {
    timeframe: Option<Timeframe>,
    count: Option<usize>,
    price: Option<f64>,
    seed: Option<u64>,
    sma: bool,
    ema: bool,
    bollinger: bool,
    config: Option<PathBuf>,
    line: bool,
}

impl Options {
    fn toggles(&self) -> Option<IndicatorToggles> {
        (self.sma || self.ema || self.bollinger).then_some(IndicatorToggles {
            sma: self.sma,
            ema: self.ema,
            bollinger: self.bollinger,
        })
    }
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} [options]", program);
    eprintln!("Options:");
    eprintln!("  --timeframe TF   1m, 5m, 15m, 1h, 4h, 1d, 1w or 1M");
    eprintln!("  --count N        Number of candles to generate");
    eprintln!("  --price P        Seed price of the random walk");
    eprintln!("  --seed S         RNG seed for a reproducible series");
    eprintln!("  --sma            Draw the simple moving average");
    eprintln!("  --ema            Draw the exponential moving average");
    eprintln!("  --bollinger      Draw Bollinger Bands");
    eprintln!("  --config PATH    Read settings from PATH");
    eprintln!("  --line           Print a smoothed line chart of closes instead");
    eprintln!();
    eprintln!("Example: {} --timeframe 4h --count 120 --sma --bollinger", program);
}

fn value<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str> {
    args.get(i + 1)
        .map(String::as_str)
        .with_context(|| format!("{} expects a value", flag))
}

/// Parse `args` (program name first). `Ok(None)` means help was requested.
fn parse_args(args: &[String]) -> Result<Option<Options>> {
    let mut options = Options::default();
    let mut i = 1;

    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "--timeframe" => {
                options.timeframe = Some(value(args, i, flag)?.parse()?);
                i += 2;
            }
            "--count" => {
                let raw = value(args, i, flag)?;
                options.count = Some(
                    raw.parse()
                        .with_context(|| format!("invalid count {:?}", raw))?,
                );
                i += 2;
            }
            "--price" => {
                let raw = value(args, i, flag)?;
                options.price = Some(
                    raw.parse()
                        .with_context(|| format!("invalid price {:?}", raw))?,
                );
                i += 2;
            }
            "--seed" => {
                let raw = value(args, i, flag)?;
                options.seed = Some(
                    raw.parse()
                        .with_context(|| format!("invalid seed {:?}", raw))?,
                );
                i += 2;
            }
            "--config" => {
                options.config = Some(PathBuf::from(value(args, i, flag)?));
                i += 2;
            }
            "--sma" => {
                options.sma = true;
                i += 1;
            }
            "--ema" => {
                options.ema = true;
                i += 1;
            }
            "--bollinger" => {
                options.bollinger = true;
                i += 1;
            }
            "--line" => {
                options.line = true;
                i += 1;
            }
            "-h" | "--help" => return Ok(None),
            other => bail!("unknown argument {:?}", other),
        }
    }

    Ok(Some(options))
}

fn run() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("charter");
    let Some(options) = parse_args(&args)? else {
        print_usage(program);
        return Ok(());
    };

    let config = match &options.config {
        Some(path) => {
            Config::load(path).with_context(|| format!("loading config from {}", path.display()))?
        }
        None => Config::load_default(),
    };

    let timeframe = match options.timeframe {
        Some(tf) => tf,
        None => config.general.default_timeframe.parse()?,
    };
    let count = options.count.unwrap_or(config.general.candle_count);
    let price = options.price.unwrap_or(config.general.seed_price);
    let seed = options
        .seed
        .or(config.general.rng_seed)
        .unwrap_or_else(rand::random);
    log::info!(
        "generating {} {} candles from {} (seed {})",
        count,
        timeframe,
        price,
        seed
    );

    let candles = SyntheticSource::new(price, timeframe, count, seed).load()?;

    let json = if options.line {
        let chart = &config.chart;
        let viewport = Viewport::new(chart.width, chart.height, chart.padding_x, chart.padding_y);
        let profile = LineStyle::Balance.profile(&config.smoothing);
        let Some(line) = LineChart::from_candles(&candles, viewport, profile) else {
            bail!("no valid closes to chart");
        };
        serde_json::to_string_pretty(&line)?
    } else {
        let composer = ChartComposer::from_config(&config);
        let toggles = options
            .toggles()
            .unwrap_or_else(|| IndicatorToggles::from(&composer.settings_for(timeframe)));
        let Some(layers) = composer.compose(&candles, timeframe, toggles) else {
            bail!("no candles to chart");
        };
        log::info!(
            "last close {} ({})",
            layers.current_price.price,
            layers.change.text
        );
        serde_json::to_string_pretty(&layers)?
    };

    println!("{}", json);
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("charter")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_parse_all_options() {
        let options = parse_args(&args(&[
            "--timeframe",
            "4h",
            "--count",
            "120",
            "--price",
            "42.5",
            "--seed",
            "9",
            "--sma",
            "--bollinger",
            "--line",
        ]))
        .unwrap()
        .unwrap();

        assert_eq!(options.timeframe, Some(Timeframe::Hour4));
        assert_eq!(options.count, Some(120));
        assert_eq!(options.price, Some(42.5));
        assert_eq!(options.seed, Some(9));
        assert!(options.line);
        assert_eq!(
            options.toggles(),
            Some(IndicatorToggles {
                sma: true,
                ema: false,
                bollinger: true,
            })
        );
    }

    #[test]
    fn test_no_indicator_flags_defer_to_config() {
        let options = parse_args(&args(&[])).unwrap().unwrap();
        assert_eq!(options.toggles(), None);
        assert!(options.config.is_none());
    }

    #[test]
    fn test_help_and_errors() {
        assert!(parse_args(&args(&["--help"])).unwrap().is_none());
        assert!(parse_args(&args(&["--timeframe", "2h"])).is_err());
        assert!(parse_args(&args(&["--count"])).is_err());
        assert!(parse_args(&args(&["--count", "many"])).is_err());
        assert!(parse_args(&args(&["--bogus"])).is_err());
    }
}
