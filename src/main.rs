use clap::Parser;
use value_kinds::utils::{logger, validation::Validate};
use value_kinds::{CliConfig, InputSource, TypeReport};

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting value-kinds");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    let source = InputSource::from_arg(config.input.as_deref());
    let values = match source.read_values().await {
        Ok(values) => values,
        Err(e) => {
            tracing::error!("Reading input failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    };

    let report = TypeReport::from_values(&values);
    tracing::debug!(
        "Classified {} values into {} real types",
        report.total,
        report.counts.len()
    );

    match report.render(config.format) {
        Ok(output) => print!("{}", output),
        Err(e) => {
            tracing::error!("Rendering report failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    }
}
