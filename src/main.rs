use clap::Parser;
use null_int32::utils::{logger, validation::Validate};
use null_int32::CliConfig;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting null-int32 CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let mut failures = 0usize;
    for input in &config.inputs {
        match config.from.decode(input) {
            Ok(value) => {
                println!(
                    "{:?} -> valid={} json={} text={:?}",
                    input,
                    value.valid,
                    value.marshal_json(),
                    value.marshal_text()
                );
            }
            Err(e) => {
                failures += 1;
                tracing::error!("Failed to decode {:?} (kind: {:?}): {}", input, e.kind(), e);
                eprintln!("{:?} -> {}", input, e);
            }
        }
    }

    if failures > 0 {
        tracing::info!("{} of {} inputs failed to decode", failures, config.inputs.len());
        std::process::exit(1);
    }

    Ok(())
}
