use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::{error, info, warn};

use chartkit::config::{load_data, ChartConfig, ChartKind};
use chartkit::plotting::{Change, Chart, PlotState};

#[derive(Parser)]
#[command(name = "chartkit")]
#[command(
    about = "Render line and scatter charts to SVG",
    long_about = "Loads a chart configuration and a data source from JSON and writes the rendered chart as an SVG document."
)]
struct Cli {
    /// Log verbosity level
    #[arg(long, global = true, default_value = "info")]
    log_level: LogLevel,
    /// Write log output to a file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<String>,
    /// Append to log file instead of truncating
    #[arg(long, global = true)]
    append_log: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum KindArg {
    Line,
    Scatter,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a chart to an SVG file
    Render {
        /// Chart configuration (JSON). Defaults are used when omitted.
        #[arg(long)]
        config: Option<String>,
        /// Data source (JSON): a list of points or a list of series.
        #[arg(long, required = true)]
        data: String,
        /// Output SVG path
        #[arg(long, required = true)]
        out: String,
        /// Override the chart kind from the configuration
        #[arg(long)]
        kind: Option<KindArg>,
        /// Override the chart title from the configuration
        #[arg(long)]
        title: Option<String>,
        /// Overwrite the output file if it exists
        #[arg(long)]
        force: bool,
    },
}

fn check_output_path(out: &str, force: bool) -> Result<()> {
    let path = Path::new(out);
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            info!("Creating output directory: {:?}", parent);
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Could not create output directory {:?}", parent))?;
        }
    }
    if !force && path.exists() {
        bail!("Output file {} already exists. Use --force to overwrite.", out);
    }
    Ok(())
}

fn render(
    config: Option<&str>,
    data: &str,
    out: &str,
    kind: Option<KindArg>,
    title: Option<&str>,
    force: bool,
) -> Result<()> {
    check_output_path(out, force)?;

    let mut chart_config = match config {
        Some(path) => ChartConfig::load(path)
            .with_context(|| format!("Error loading chart config {}", path))?,
        None => ChartConfig::default(),
    };
    if let Some(kind) = kind {
        chart_config.kind = match kind {
            KindArg::Line => ChartKind::Line,
            KindArg::Scatter => ChartKind::Scatter,
        };
    }

    let source = load_data(data).with_context(|| format!("Error loading data {}", data))?;
    chart_config.check_data(&source)?;
    info!(
        "Loaded {} point(s) in {} series from {}",
        source.point_count(),
        source.series().len(),
        data
    );

    let mut chart = Chart::from_config(&chart_config);
    chart.apply(Change::DataSource(Some(source)));
    if let Some(title) = title {
        chart.apply(Change::Title(Some(title.to_string())));
    }
    if chart.state() == PlotState::NoData {
        warn!("Data source is empty; only axes will be drawn");
    }

    chart
        .save(out)
        .with_context(|| format!("Error writing chart to {}", out))?;
    info!("Wrote {:?} chart to {}", chart_config.kind, out);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut log_builder = env_logger::Builder::from_default_env();
    log_builder
        .filter_level(cli.log_level.to_level_filter())
        .format_module_path(false);
    if let Some(ref path) = cli.log_file {
        let file = if cli.append_log {
            std::fs::File::options().create(true).append(true).open(path)
        } else {
            std::fs::File::create(path)
        }
        .with_context(|| format!("Could not open log file '{}'", path))?;
        log_builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    log_builder.init();

    match &cli.command {
        Commands::Render {
            config,
            data,
            out,
            kind,
            title,
            force,
        } => {
            if let Err(e) = render(config.as_deref(), data, out, *kind, title.as_deref(), *force) {
                error!("{:#}", e);
                std::process::exit(1);
            }
        }
    }
    Ok(())
}
