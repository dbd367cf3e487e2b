use anyhow::{Context, Result};

use teammaker_integrations::Config;
use teammaker_integrations::purely_hr::{load_export, load_export_file, parse};

fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize logger
    env_logger::init();

    let config = Config::from_env()?;
    log::debug!("Configuration loaded (environment: {})", config.environment);

    // A path argument wins over PURELYHR_EXPORT_PATH; stdin when neither is set
    let path = std::env::args().nth(1).or_else(|| config.export_path.clone());

    let input = match &path {
        Some(path) => load_export_file(path, config.max_export_bytes)
            .with_context(|| format!("Failed to read time off export {}", path))?,
        None => load_export(std::io::stdin().lock(), config.max_export_bytes)
            .context("Failed to read time off export from stdin")?,
    };

    let requests = parse(input).context("Failed to parse time off export")?;
    log::info!("Parsed {} time off requests", requests.len());

    let output = if config.pretty_output {
        serde_json::to_string_pretty(&requests)?
    } else {
        serde_json::to_string(&requests)?
    };
    println!("{}", output);

    Ok(())
}
