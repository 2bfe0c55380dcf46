use clap::Parser;
use log::{info, warn};
use std::path::PathBuf;

use rdash::config::AppConfig;
use rdash::poll::PollLoop;
use rdash::HttpTransport;
use rdash_types::{VariableGroup, VARIABLES};

/// rdash - a polling dashboard for reactor simulation telemetry
#[derive(Parser, Debug, Clone)]
#[command(name = "rdash")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Base URL of the simulation webserver (overrides config)
    #[arg(short, long, value_name = "URL")]
    url: Option<String>,

    /// Seconds between refresh ticks (overrides config)
    #[arg(short, long, value_name = "SECONDS")]
    interval: Option<u64>,

    /// Variables to watch, comma separated (overrides config)
    #[arg(short = 'W', long = "watch", value_name = "VARS", value_delimiter = ',')]
    watch: Vec<String>,

    /// Run a single refresh tick and exit
    #[arg(short, long)]
    once: bool,

    /// List known variables and exit
    #[arg(short, long)]
    list: bool,

    /// Configuration file to load instead of the default location
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Debug verbosity level (0=quiet, 1=info, 2=debug, 3=trace)
    #[arg(short = 'd', long = "debug", value_name = "LEVEL", default_value = "0")]
    debug: u8,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logger with verbosity based on -d/--debug flag
    let log_level = match cli.debug {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    // Allow RUST_LOG to override CLI setting
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    warn!("Starting rdash v{}", env!("CARGO_PKG_VERSION"));

    if cli.list {
        list_known_variables();
        return Ok(());
    }

    let mut config = match &cli.config {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };

    if let Some(url) = cli.url {
        config.server.base_url = url;
    }
    if let Some(interval) = cli.interval {
        config.poll.interval_secs = interval.max(1);
    }
    if !cli.watch.is_empty() {
        config.watch = cli.watch.clone();
    }

    for variable in &config.watch {
        if rdash_types::find_variable(variable).is_none() {
            info!("Watching unregistered variable '{variable}' (fetch accepts any name)");
        }
    }

    let interval = config.poll_interval();
    let transport = HttpTransport::new(config.server.base_url.clone(), config.request_timeout())?;
    info!(
        "Polling {} every {:?} for {} variables",
        config.server.base_url,
        interval,
        config.watch.len()
    );

    let mut poll = PollLoop::new(
        transport,
        config.watch.clone(),
        interval,
        config.poll.history_points,
    );

    if cli.once {
        let results = poll.tick().await;
        print!("{}", poll.render(&results));
        return Ok(());
    }

    poll.run(interval).await;
    Ok(())
}

/// List the registered upstream variables, grouped by dashboard section
fn list_known_variables() {
    let groups = [
        VariableGroup::Core,
        VariableGroup::Time,
        VariableGroup::Coolant,
        VariableGroup::Pumps,
        VariableGroup::Rods,
        VariableGroup::Generators,
        VariableGroup::Turbines,
    ];

    println!("Known variables ({}):", VARIABLES.len());
    for group in groups {
        println!("\n{}:", group.label());
        for meta in rdash_types::variables_in_group(group) {
            match meta.unit {
                Some(unit) => println!("  {:<52} {} [{}]", meta.name, meta.label, unit),
                None => println!("  {:<52} {}", meta.name, meta.label),
            }
        }
    }
}
