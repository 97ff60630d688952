//! Labor market driver.
//!
//! Loads configuration, initialises structured logging, prints the model
//! summary, renders the market and dynamics charts and prints the
//! comparative-statics table.

use anyhow::Result;
use tracing::info;

use labor_market::config::AppConfig;
use labor_market::plot::{self, DYNAMICS_FILE_NAME};
use labor_market::LaborMarketModel;

const DEFAULT_CONFIG: &str = "config.toml";

fn main() -> Result<()> {
    // Load .env file if present (non-fatal if missing)
    let _ = dotenv::dotenv();

    init_logging();

    let config_path = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_CONFIG.to_string());
    let cfg = AppConfig::load_or_default(&config_path)?;

    let model = LaborMarketModel::from(cfg.market);
    info!(
        config = %config_path,
        w_bar = cfg.market.w_bar(),
        k = cfg.market.k(),
        "Model ready"
    );

    println!("{}", model.summary());

    if cfg.output.render_charts {
        let dir = &cfg.output.directory;
        for &t in &cfg.output.snapshot_times {
            println!("Generating market chart for t={t:.2}...");
            let path = dir.join(plot::snapshot_file_name(t));
            plot::plot_market(&model, t, None, &path, cfg.chart.market)?;
            println!("Figure saved to {}", path.display());
        }

        println!("Generating dynamics chart...");
        let path = dir.join(DYNAMICS_FILE_NAME);
        plot::plot_dynamics(&model, cfg.output.dynamics_points, &path, cfg.chart.dynamics)?;
        println!("Figure saved to {}", path.display());
    }

    let rule = "=".repeat(60);
    println!("\n{rule}\nComparative Statics Over Time\n{rule}");
    for &t in &cfg.output.statics_times {
        println!("{}", model.snapshot(t));
    }

    Ok(())
}

/// Initialise the `tracing` subscriber.
fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("labor_market=info"));

    let json_logging = std::env::var("LABOR_MARKET_LOG_JSON").is_ok();

    if json_logging {
        fmt()
            .json()
            .with_env_filter(env_filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .init();
    } else {
        fmt()
            .with_env_filter(env_filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .init();
    }
}
