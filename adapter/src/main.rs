//! Redis Service Adapter - Entry Point
//!
//! Invoked by the on-demand service broker once per lifecycle event:
//! manifest generation on create/update, credentials on bind/unbind.

use std::env;
use std::io::Write;
use std::process;

use redis_service_adapter::binding::Binder;
use redis_service_adapter::cli::{is_version_request, Adapter, EXIT_FAILURE};
use redis_service_adapter::logs::init_logging;
use redis_service_adapter::manifest::ManifestGenerator;
use redis_service_adapter::options::{BinderOptions, GeneratorOptions};
use redis_service_adapter::settings::Settings;
use redis_service_adapter::utils::version_info;

use tracing::error;

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    // Print version and exit
    if is_version_request(&args) {
        match serde_json::to_string_pretty(&version_info()) {
            Ok(version) => println!("{}", version),
            Err(e) => eprintln!("Failed to render version: {e}"),
        }
        return;
    }

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Unable to read settings file: {e}");
            process::exit(EXIT_FAILURE);
        }
    };

    if let Err(e) = init_logging(settings.log_options()) {
        eprintln!("Failed to initialize logging: {e}");
    }

    let adapter = Adapter::new(
        ManifestGenerator::new(GeneratorOptions::default()),
        Binder::new(BinderOptions {
            expected_platform: settings.expected_platform.clone(),
            ..Default::default()
        }),
    );

    let (code, output) = adapter.run(&args);
    if !output.is_empty() {
        let mut stdout = std::io::stdout().lock();
        if let Err(e) = stdout.write_all(output.as_bytes()).and_then(|_| stdout.flush()) {
            error!("Failed to write response: {}", e);
            process::exit(EXIT_FAILURE);
        }
    }
    process::exit(code);
}
