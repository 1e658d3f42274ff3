use anyhow::Result;
use clap::{ArgGroup, Parser, Subcommand};
use hour::OutputFormat;
use hour::commands;
use hour::config;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
#[command(name = "hour")]
#[command(about = "Hours, minutes and seconds arithmetic")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long, global = true, value_enum, help = "Output format (defaults to config)")]
    format: Option<OutputFormat>,

    #[arg(long, global = true, default_value = "warn", help = "Log filter, e.g. debug")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the current time of day
    Now {
        #[arg(long, help = "Include seconds")]
        seconds: bool,
        #[arg(long, conflicts_with = "seconds", help = "Leave seconds out")]
        no_seconds: bool,
    },
    /// Parse H:MM:SS (or H:MM with --no-seconds)
    Parse {
        text: String,
        #[arg(long, help = "Expect H:MM:SS")]
        seconds: bool,
        #[arg(long, conflicts_with = "seconds", help = "Expect H:MM")]
        no_seconds: bool,
    },
    /// Show unit views (value, round, totals) of a duration
    Show { duration: String },
    /// Add two durations
    Add { a: String, b: String },
    /// Subtract B from A
    Sub { a: String, b: String },
    /// Multiply a duration by a whole number
    Scale {
        duration: String,
        #[arg(allow_negative_numbers = true)]
        factor: f64,
    },
    /// Build a duration from minutes or seconds over 60
    #[command(group(ArgGroup::new("unit").required(true).multiple(true).args(["minutes", "seconds"])))]
    From {
        #[arg(long)]
        minutes: Option<u64>,
        #[arg(long)]
        seconds: Option<u64>,
    },
    /// Compare two durations (less, equal, greater)
    Compare { a: String, b: String },
    /// Inspect configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    List,
    Get { key: String },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let config = config::load().unwrap_or_else(|e| {
        tracing::warn!("Ignoring unreadable config: {:#}", e);
        config::Config::default()
    });
    let format = cli.format.unwrap_or(config.output.format);

    match &cli.command {
        Commands::Now {
            seconds,
            no_seconds,
        } => commands::calc::now(&config, *seconds, *no_seconds, format)?,
        Commands::Parse {
            text,
            seconds,
            no_seconds,
        } => commands::calc::parse(&config, text, *seconds, *no_seconds, format)?,
        Commands::Show { duration } => commands::calc::show(duration, format)?,
        Commands::Add { a, b } => commands::calc::add(a, b, format)?,
        Commands::Sub { a, b } => commands::calc::sub(a, b, format)?,
        Commands::Scale { duration, factor } => commands::calc::scale(duration, *factor, format)?,
        Commands::From { minutes, seconds } => {
            commands::calc::from(minutes.unwrap_or(0), seconds.unwrap_or(0), format)?
        }
        Commands::Compare { a, b } => commands::calc::compare(a, b, format)?,
        Commands::Config { action } => match action {
            ConfigAction::List => commands::config::list(&config, &config::default_path()?)?,
            ConfigAction::Get { key } => commands::config::get(key, &config)?,
        },
    }

    Ok(())
}
