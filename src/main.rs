mod render;

use agents::{AgentNetwork, parse_agent};
use analytics::{ChartSet, MetricsEngine};
use anyhow::Context;
use chrono::Utc;
use clap::{Args, Parser, Subcommand};
use configuration::{OutputFormat, SampleSettings, Settings, init_tracing, load_settings};
use dashboard::{Session, export_all};
use ingest::SampleConfig;
use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;

/// The main entry point for the Canopy carbon emissions analyzer.
fn main() -> ExitCode {
    // Parse command-line arguments
    let cli = Cli::parse();

    let settings = match load_settings(cli.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // The guard flushes file logs on drop; keep it until exit.
    let _guard = match init_tracing(&settings.logging) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // Execute the appropriate command
    let result = match cli.command {
        Commands::Sample(args) => handle_sample(args, &settings),
        Commands::Analyze(args) => handle_analyze(args, &settings),
        Commands::Charts(args) => handle_charts(args, &settings),
        Commands::Agents { action } => handle_agents(action, &settings),
        Commands::Summary(args) => handle_summary(args, &settings),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Carbon emissions analysis with simulated multi-agent climate recommendations.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a TOML configuration file (defaults to ./canopy.toml if present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a synthetic emissions dataset as CSV.
    Sample(SampleArgs),
    /// Load, validate and analyze a dataset.
    Analyze(AnalyzeArgs),
    /// Print the four chart series for a dataset.
    Charts(ChartsArgs),
    /// Inspect and consult the simulated agent network.
    Agents {
        #[command(subcommand)]
        action: AgentsCommand,
    },
    /// Print the spoken summary of an analysis.
    Summary(SourceArgs),
}

#[derive(Subcommand)]
enum AgentsCommand {
    /// List the specialist agents in the directory.
    List {
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// Ask one agent for its recommendations on a dataset.
    Consult {
        /// Agent key, e.g. "policy_agent" or "policy".
        agent: String,
        #[command(flatten)]
        source: DataSource,
    },
    /// Open the climate-action collaboration thread with every agent.
    Thread,
}

/// Where the dataset comes from.
#[derive(Args)]
#[group(required = true, multiple = false)]
struct DataSource {
    /// CSV file with Country, Year and Carbon_Emissions columns.
    #[arg(long)]
    input: Option<PathBuf>,

    /// Use the synthetic sample dataset instead of a file.
    #[arg(long)]
    sample: bool,
}

#[derive(Args)]
struct SourceArgs {
    #[command(flatten)]
    source: DataSource,
}

#[derive(Args)]
struct SampleArgs {
    /// Destination CSV file.
    #[arg(long)]
    out: PathBuf,

    /// Number of rows (overrides the configured value).
    #[arg(long)]
    rows: Option<usize>,

    /// Random seed (overrides the configured value).
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Args)]
struct AnalyzeArgs {
    #[command(flatten)]
    source: DataSource,

    /// Skip the multi-agent path and use the data-derived fallback analysis.
    #[arg(long)]
    offline: bool,

    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Write the JSON analysis, CSV data and agent report into this directory.
    #[arg(long)]
    export_dir: Option<PathBuf>,
}

#[derive(Args)]
struct ChartsArgs {
    #[command(flatten)]
    source: DataSource,

    #[arg(long, value_enum)]
    format: Option<OutputFormat>,
}

// ==============================================================================
// Command Logic
// ==============================================================================

fn sample_config(settings: &SampleSettings) -> SampleConfig {
    let config = SampleConfig::new()
        .with_rows(settings.rows)
        .with_range(settings.min_emission, settings.max_emission);
    match settings.seed {
        Some(seed) => config.with_seed(seed),
        None => config,
    }
}

/// Starts a session and loads the requested dataset into it.
fn open_session(source: &DataSource, settings: &Settings) -> anyhow::Result<Session> {
    let mut session = Session::new(Utc::now());
    match &source.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open {}", path.display()))?;
            session.upload_csv(file)?;
        }
        None => {
            session.use_sample(&sample_config(&settings.sample))?;
        }
    }
    Ok(session)
}

fn handle_sample(args: SampleArgs, settings: &Settings) -> anyhow::Result<()> {
    let mut config = sample_config(&settings.sample);
    if let Some(rows) = args.rows {
        config = config.with_rows(rows);
    }
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let dataset = ingest::generate_sample(&config)?;
    let file = File::create(&args.out)
        .with_context(|| format!("Failed to create {}", args.out.display()))?;
    ingest::write_csv(&dataset, file)?;

    println!("Wrote {} records to {}", dataset.len(), args.out.display());
    Ok(())
}

fn handle_analyze(args: AnalyzeArgs, settings: &Settings) -> anyhow::Result<()> {
    let engine = MetricsEngine::new();
    let mut session = open_session(&args.source, settings)?;

    let rich = settings.analysis.rich_analysis_enabled && !args.offline;
    let mut network = AgentNetwork::new(settings.agents.server_url.clone(), session.created_at());
    if rich {
        network.register_analyzer();
    }

    session.analyze(&engine, rich)?;

    match args.format.unwrap_or(settings.output.format) {
        OutputFormat::Json => render::print_json(&session.analysis_document(&network)?)?,
        OutputFormat::Table => {
            let cards = session.metric_cards(&engine)?;
            let collaboration = session.collaboration_summary()?;
            let analysis = session
                .analysis()
                .context("Analysis missing after a successful run")?;
            render::print_analysis(&cards, analysis, collaboration.as_ref());
        }
    }

    if let Some(dir) = &args.export_dir {
        for path in export_all(&session, &network, dir, Utc::now())? {
            println!("Exported {}", path.display());
        }
    }
    Ok(())
}

fn handle_charts(args: ChartsArgs, settings: &Settings) -> anyhow::Result<()> {
    let session = open_session(&args.source, settings)?;
    let dataset = session
        .dataset()
        .context("Dataset missing after a successful load")?;
    let charts = ChartSet::from_dataset(dataset);

    match args.format.unwrap_or(settings.output.format) {
        OutputFormat::Json => render::print_json(&charts)?,
        OutputFormat::Table => {
            for series in charts.iter() {
                println!("{}\n", render::chart(series));
            }
        }
    }
    Ok(())
}

fn handle_agents(action: AgentsCommand, settings: &Settings) -> anyhow::Result<()> {
    let mut network = AgentNetwork::new(settings.agents.server_url.clone(), Utc::now());

    match action {
        AgentsCommand::List { format } => {
            let profiles = network.discover();
            match format.unwrap_or(settings.output.format) {
                OutputFormat::Json => render::print_json(&profiles)?,
                OutputFormat::Table => println!("{}", render::agent_directory(&profiles)),
            }
        }
        AgentsCommand::Consult { agent, source } => {
            let agent = parse_agent(&agent)?;
            let session = open_session(&source, settings)?;
            let dataset = session
                .dataset()
                .context("Dataset missing after a successful load")?;
            render::print_json(&network.consult(agent, dataset))?;
        }
        AgentsCommand::Thread => {
            network.register_analyzer();
            let thread = network.create_thread(network.climate_action_participants(), Utc::now());
            println!("Climate action thread created: {}", thread.thread_id);
            render::print_json(&thread)?;
        }
    }
    Ok(())
}

fn handle_summary(args: SourceArgs, settings: &Settings) -> anyhow::Result<()> {
    let engine = MetricsEngine::new();
    let mut session = open_session(&args.source, settings)?;
    session.analyze(&engine, settings.analysis.rich_analysis_enabled)?;
    println!("{}", session.voice_summary(&engine)?);
    Ok(())
}
