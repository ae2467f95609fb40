use clap::Parser;
use itinerary_prettifier::domain::ports::ConfigProvider;
use itinerary_prettifier::utils::error::ErrorSeverity;
use itinerary_prettifier::utils::{logger, validation::Validate};
use itinerary_prettifier::{
    CliConfig, ItineraryEngine, ItineraryPipeline, LocalStorage, TomlConfig,
};

const RESET: &str = "\x1b[0m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const BLUE: &str = "\x1b[34m";
const BOLD: &str = "\x1b[1m";

fn print_error(message: &str) {
    println!("{}{}Error: {}{}", RED, BOLD, message, RESET);
}

fn print_success(message: &str) {
    println!("{}{}Success: {}{}", GREEN, BOLD, message, RESET);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    if let Some(path) = config.config.clone() {
        match TomlConfig::from_file(&path) {
            Ok(toml) => {
                tracing::info!("Loaded configuration from: {}", path);
                config.merge_toml(&toml);
            }
            Err(e) => {
                print_error(&format!("Failed to load config file '{}': {}", path, e));
                std::process::exit(1);
            }
        }
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        tracing::error!("Suggestion: {}", e.recovery_suggestion());
        print_error(&e.user_friendly_message());
        println!("Usage: itinerary-prettifier ./input.txt ./output.txt ./airport-lookup.csv");
        std::process::exit(1);
    }

    let color = config.color_enabled();
    let pipeline = ItineraryPipeline::new(LocalStorage::default(), config);
    let engine = ItineraryEngine::new(pipeline);

    match engine.run().await {
        Ok(report) => {
            print_success("Processing completed successfully!");
            println!("\n{}{}=== Processed Output ==={}\n", BOLD, BLUE, RESET);
            if color {
                println!("{}", report.itinerary.highlighted);
            } else {
                println!("{}", report.itinerary.plain);
            }
        }
        Err(e) => {
            tracing::error!(
                "Processing failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("Recovery suggestion: {}", e.recovery_suggestion());
            print_error(&e.user_friendly_message());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
