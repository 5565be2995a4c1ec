use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::Utc;
use rw_app::{AppError, AppResult, Config, config, ingest_service, query};
use rw_atmos::{
    DisplayReading, Inputs, RawOutput, SweepDefinition, SweepVariable, run_sweep,
};
use rw_history::{AppendOutcome, HistoryEntry, to_csv};
use rw_station::{InputKind, parse_input};

#[derive(Parser)]
#[command(name = "racewx")]
#[command(about = "RaceWx CLI - Drag racing weather and density altitude tool", long_about = None)]
struct Cli {
    /// Path to the config YAML file (defaults to ./racewx.yaml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a reading from explicit inputs
    Compute {
        #[command(flatten)]
        inputs: InputArgs,
        /// Print the full unrounded output as JSON
        #[arg(long)]
        json: bool,
        /// Skip the degenerate-input check (NaN/inf propagate)
        #[arg(long)]
        unchecked: bool,
    },
    /// Ingest a saved station payload into history
    Ingest {
        /// Path to the vendor JSON payload
        payload: PathBuf,
        /// Accept observations older than station.max_age_s
        #[arg(long)]
        allow_stale: bool,
    },
    /// Re-ingest a payload file on an interval
    Watch {
        /// Path to the vendor JSON payload (rewritten by an external poller)
        payload: PathBuf,
        /// Seconds between reads
        #[arg(long, default_value_t = 60)]
        interval: u64,
        /// Stop after this many reads (runs until interrupted otherwise)
        #[arg(long)]
        iterations: Option<usize>,
    },
    /// Show recent readings
    History {
        /// Number of readings to show
        #[arg(long, default_value_t = 20, value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..))]
        limit: usize,
        /// Print one metric's series instead of the table (e.g., adr, density_alt)
        #[arg(long)]
        metric: Option<String>,
    },
    /// Export history as CSV
    Export {
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Sweep one input and tabulate the results
    Sweep {
        #[command(flatten)]
        inputs: InputArgs,
        /// Input to vary
        #[arg(long, value_enum)]
        vary: VaryArg,
        /// First value of the varied input
        #[arg(long, allow_hyphen_values = true)]
        from: f64,
        /// Last value of the varied input
        #[arg(long, allow_hyphen_values = true)]
        to: f64,
        /// Number of points, endpoints included
        #[arg(long, default_value_t = 6)]
        points: usize,
    },
    /// Print the effective configuration
    Config,
}

#[derive(clap::Args)]
struct InputArgs {
    /// Dry-bulb temperature (e.g., 80 or 80F)
    #[arg(long, allow_hyphen_values = true)]
    temp: String,
    /// Relative humidity (e.g., 50 or 50%)
    #[arg(long)]
    humidity: String,
    /// Absolute (station) pressure (e.g., 28.9 or 28.9inHg)
    #[arg(long)]
    pressure: String,
}

impl InputArgs {
    fn parse(&self) -> AppResult<Inputs> {
        Ok(Inputs::new(
            parse_input(&self.temp, InputKind::Temperature)?,
            parse_input(&self.humidity, InputKind::Humidity)?,
            parse_input(&self.pressure, InputKind::AbsPressure)?,
        ))
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum VaryArg {
    Temperature,
    Humidity,
    Pressure,
}

impl From<VaryArg> for SweepVariable {
    fn from(arg: VaryArg) -> Self {
        match arg {
            VaryArg::Temperature => SweepVariable::Temperature,
            VaryArg::Humidity => SweepVariable::Humidity,
            VaryArg::Pressure => SweepVariable::Pressure,
        }
    }
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = config::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Compute {
            inputs,
            json,
            unchecked,
        } => cmd_compute(&config, &inputs, json, !unchecked),
        Commands::Ingest {
            payload,
            allow_stale,
        } => cmd_ingest(&config, &payload, allow_stale),
        Commands::Watch {
            payload,
            interval,
            iterations,
        } => cmd_watch(&config, &payload, interval, iterations),
        Commands::History { limit, metric } => cmd_history(&config, limit, metric.as_deref()),
        Commands::Export { output } => cmd_export(&config, output.as_deref()),
        Commands::Sweep {
            inputs,
            vary,
            from,
            to,
            points,
        } => cmd_sweep(&config, &inputs, vary.into(), from, to, points),
        Commands::Config => cmd_config(&config),
    }
}

fn cmd_compute(config: &Config, args: &InputArgs, json: bool, checked: bool) -> AppResult<()> {
    let inputs = args.parse()?;
    let output = ingest_service::compute_inputs(config, inputs, checked)?;

    if json {
        let text = serde_json::to_string_pretty(&output).map_err(std::io::Error::from)?;
        println!("{}", text);
    } else {
        print_reading(&output);
    }
    Ok(())
}

fn cmd_ingest(config: &Config, payload: &Path, allow_stale: bool) -> AppResult<()> {
    let store = ingest_service::open_history(config)?;
    let response = ingest_service::ingest_file(config, &store, payload, Utc::now(), allow_stale)?;
    report_ingest(&response);
    Ok(())
}

fn cmd_watch(
    config: &Config,
    payload: &Path,
    interval: u64,
    iterations: Option<usize>,
) -> AppResult<()> {
    if interval == 0 {
        return Err(AppError::InvalidInput(
            "--interval must be at least 1 second".to_string(),
        ));
    }

    let store = ingest_service::open_history(config)?;
    println!(
        "Watching {} every {} s (Ctrl-C to stop)",
        payload.display(),
        interval
    );

    let mut count = 0usize;
    loop {
        match ingest_service::ingest_file(config, &store, payload, Utc::now(), false) {
            Ok(response) => report_ingest(&response),
            Err(err) => {
                tracing::warn!(%err, "watch read failed");
                eprintln!("✗ {}", err);
            }
        }

        count += 1;
        if iterations.is_some_and(|n| count >= n) {
            break;
        }
        std::thread::sleep(Duration::from_secs(interval));
    }
    Ok(())
}

fn cmd_history(config: &Config, limit: usize, metric: Option<&str>) -> AppResult<()> {
    let store = ingest_service::open_history(config)?;
    let entries = store.recent(limit)?;

    if entries.is_empty() {
        println!("No readings in {}", store.path().display());
        return Ok(());
    }

    if let Some(metric) = metric {
        for (recorded_at, value) in query::extract_series(&entries, metric)? {
            println!("{}  {}", recorded_at, value);
        }
        return Ok(());
    }

    println!(
        "{:<26} {:>6} {:>5} {:>6} {:>6} {:>7} {:>7}",
        "recorded_at", "temp", "hum", "baro", "adr", "da_ft", "corr"
    );
    for entry in &entries {
        print_history_row(entry);
    }

    let summary = query::summarize(&entries)?;
    println!(
        "\n{} readings ({} - {})",
        summary.count, summary.first_recorded_at, summary.last_recorded_at
    );
    print_stats("ADR %", summary.adr_pct);
    print_stats("Density altitude ft", summary.density_alt_ft);
    print_stats("Correction", summary.correction);
    Ok(())
}

fn cmd_export(config: &Config, output: Option<&Path>) -> AppResult<()> {
    let store = ingest_service::open_history(config)?;
    let entries = store.load()?;
    let csv = to_csv(&entries);

    // Write to file or stdout
    if let Some(path) = output {
        std::fs::write(path, csv)?;
        println!(
            "✓ Exported {} readings to {}",
            entries.len(),
            path.display()
        );
    } else {
        print!("{}", csv);
    }
    Ok(())
}

fn cmd_sweep(
    config: &Config,
    args: &InputArgs,
    variable: SweepVariable,
    from: f64,
    to: f64,
    points: usize,
) -> AppResult<()> {
    let base = args.parse()?;
    let sweep = SweepDefinition::new(variable, from, to, points)?;
    println!("{}", sweep);

    println!(
        "{:>8} {:>7} {:>6} {:>7} {:>7}",
        variable.unit(),
        "dew",
        "adr",
        "da_ft",
        "corr"
    );
    for (value, output) in sweep
        .generate_points()
        .into_iter()
        .zip(run_sweep(base, &sweep, &config.calibration))
    {
        let r = DisplayReading::from_raw(&output);
        println!(
            "{:>8.2} {:>7.1} {:>6.1} {:>7.0} {:>7.4}",
            value, r.dew_point_f, r.adr_pct, r.density_alt_ft, r.correction
        );
    }
    Ok(())
}

fn cmd_config(config: &Config) -> AppResult<()> {
    print!("{}", config::to_yaml(config)?);
    Ok(())
}

fn report_ingest(response: &ingest_service::IngestResponse) {
    match response.outcome {
        AppendOutcome::Appended { evicted } => {
            println!("✓ Recorded reading {}", short_id(&response.entry.id));
            if evicted > 0 {
                println!("  ({} oldest readings rolled off)", evicted);
            }
        }
        AppendOutcome::Duplicate => {
            println!("= Observation already recorded");
        }
    }
    if let Some(observed_at) = &response.entry.observed_at {
        println!("  Observed at: {}", observed_at);
    }
    print_reading(&response.output);
}

fn print_reading(output: &RawOutput) {
    let r = DisplayReading::from_raw(output);
    let i = &output.inputs;
    println!(
        "  Inputs: {} °F, {} %, {} inHg",
        i.temp_f, i.humidity_pct, i.abs_pressure_inhg
    );
    println!("  Vapor pressure:   {:.3} inHg", r.vapor_pressure_inhg);
    println!("  Dew point:        {:.1} °F", r.dew_point_f);
    println!("  Humidity grains:  {:.1} gr/lb", r.humidity_grains);
    println!("  ADR:              {:.1} %", r.adr_pct);
    println!("  Density altitude: {:.0} ft", r.density_alt_ft);
    println!(
        "  Correction:       {:.4} (tf {:.4}, hf {:.4}, bf {:.4})",
        r.correction, r.tf, r.hf, r.bf
    );
}

fn print_history_row(entry: &HistoryEntry) {
    let r = &entry.reading;
    println!(
        "{:<26} {:>6.1} {:>5.0} {:>6.2} {:>6.1} {:>7.0} {:>7.4}",
        entry.recorded_at,
        entry.inputs.temp_f,
        entry.inputs.humidity_pct,
        entry.inputs.abs_pressure_inhg,
        r.adr_pct,
        r.density_alt_ft,
        r.correction
    );
}

fn print_stats(label: &str, stats: Option<query::MetricStats>) {
    match stats {
        Some(s) => println!(
            "  {:<20} min {:.4}  max {:.4}  mean {:.4}",
            label, s.min, s.max, s.mean
        ),
        None => println!("  {:<20} no finite values", label),
    }
}

fn short_id(id: &str) -> &str {
    id.get(..12).unwrap_or(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_limit_must_be_positive() {
        assert!(Cli::try_parse_from(["racewx", "history", "--limit", "0"]).is_err());

        let cli = Cli::try_parse_from(["racewx", "history", "--limit", "5"]).unwrap();
        assert!(matches!(cli.command, Commands::History { limit: 5, .. }));
    }

    #[test]
    fn negative_temperature_is_accepted() {
        let cli = Cli::try_parse_from([
            "racewx", "compute", "--temp", "-5F", "--humidity", "40", "--pressure", "29.1",
        ])
        .unwrap();
        match cli.command {
            Commands::Compute { inputs, .. } => {
                assert_eq!(inputs.parse().unwrap().temp_f, -5.0);
            }
            _ => panic!("expected compute"),
        }
    }
}
