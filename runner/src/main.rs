mod runner_config;
mod session;

use clap::Parser;
use snake_engine::{log, logger, SessionRng};

use runner_config::{get_config_manager, RunnerConfig, DEFAULT_CONFIG_FILE_NAME};
use session::run_sessions;

#[derive(Parser)]
#[command(name = "snake_runner")]
#[command(version, about = "Headless driver for the snake simulation")]
struct Args {
    /// YAML file with game parameters and scripted turns
    #[arg(long, default_value = DEFAULT_CONFIG_FILE_NAME)]
    config: String,

    /// Base seed for food placement; session N uses seed + N
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,

    /// Write the default config to --config and exit
    #[arg(long)]
    write_default_config: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Runner".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_manager = get_config_manager(&args.config);

    if args.write_default_config {
        config_manager.set_config(&RunnerConfig::default())?;
        log!("Default config written to {}", args.config);
        return Ok(());
    }

    let config = config_manager.get_config()?;

    let base_seed = args
        .seed
        .unwrap_or_else(|| SessionRng::from_random().seed());
    log!(
        "Running up to {} session(s) on a {}x{} grid, base seed {}",
        config.max_sessions,
        config.game.grid_bottom_right.x + 1,
        config.game.grid_bottom_right.y + 1,
        base_seed
    );

    tokio::select! {
        summaries = run_sessions(&config, base_seed) => {
            let best = summaries.iter().map(|s| s.length).max().unwrap_or(0);
            log!("Played {} session(s), best length {}", summaries.len(), best);
        }
        _ = tokio::signal::ctrl_c() => {
            log!("Interrupted, stopping");
        }
    }

    Ok(())
}
