use std::env;
use std::str::FromStr;

use anyhow::{Context, Result, anyhow};
use parse_strategy_bench::{
    BenchConfig, ErrorRate, MonotonicClock, ReportFormat, Scenario, Strategy, TimingMode,
    run_strategy_sweep, run_sweep, sample_document, setup_logging,
};

const USAGE: &str = "Usage: parse-strategy-bench [primitive|records|sample] [count]";

enum Command {
    Sweep(Scenario),
    Sample,
}

fn main() -> Result<()> {
    setup_logging()?;

    let mut args = env::args().skip(1);
    let command = match args.next().as_deref() {
        None | Some("primitive") => Command::Sweep(Scenario::Primitive),
        Some("records") => Command::Sweep(Scenario::Records),
        Some("sample") => Command::Sample,
        Some(other) => return Err(anyhow!("unknown command `{other}`\n{USAGE}")),
    };
    let count = args
        .next()
        .map(|c| c.parse::<usize>().with_context(|| format!("invalid count `{c}`\n{USAGE}")))
        .transpose()?;
    let seed = env_or("BENCH_SEED", BenchConfig::DEFAULT_SEED)?;

    match command {
        Command::Sample => {
            // Half of the entries are corrupted, which makes both cost shapes visible.
            let half = ErrorRate::new(0.5)?;
            let xml = sample_document(seed, count.unwrap_or(10), half)?;
            println!("{xml}");
        }
        Command::Sweep(scenario) => {
            let defaults = BenchConfig::for_scenario(scenario);
            let config = BenchConfig {
                seed,
                count: count.unwrap_or(defaults.count),
                fallback: env_or("BENCH_FALLBACK", defaults.fallback)?,
                mode: env_or::<TimingMode>("BENCH_TIMING", defaults.mode)?,
                ..defaults
            };
            let format = env_or("REPORT_FORMAT", ReportFormat::default())?;
            let mut clock = MonotonicClock::new();
            let stdout = std::io::stdout().lock();

            match env::var("BENCH_STRATEGY").as_deref() {
                Err(_) | Ok("both") => run_sweep(&mut clock, &config, format, stdout)?,
                Ok(name) => {
                    let strategy = Strategy::from_str(name).map_err(|e| anyhow!(e))?;
                    run_strategy_sweep(&mut clock, &config, strategy, format, stdout)?
                }
            }
        }
    }

    Ok(())
}

// Reads an optional setting from the environment; an unset variable yields `default`.
fn env_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .parse()
            .map_err(|e| anyhow!("invalid value `{raw}` for {key}: {e}")),
        Err(env::VarError::NotPresent) => Ok(default),
        Err(e) => {
            tracing::warn!("ignoring {key}: {e}");
            Ok(default)
        }
    }
}
