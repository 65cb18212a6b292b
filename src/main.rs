use bootcamp_service::adapters::inbound::http;
use bootcamp_service::adapters::outbound::network::{
    CapacityServiceClient, TechnologyServiceClient,
};
use bootcamp_service::adapters::outbound::persistence::InMemoryBootcampRepository;
use bootcamp_service::application::use_cases::BootcampUseCase;
use bootcamp_service::cli::Args;
use bootcamp_service::config::{discover_config, load_config_from_path, ServiceSettings};
use bootcamp_service::shared::{ExitCode, Result};
use std::process;
use std::sync::Arc;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() {
    let args = match Args::try_parse_args() {
        Ok(args) => args,
        Err(e) => {
            // --help and --version also arrive here
            let _ = e.print();
            let code = if e.use_stderr() {
                ExitCode::InvalidArguments
            } else {
                ExitCode::Success
            };
            process::exit(code.as_i32());
        }
    };
    init_tracing();

    let code = match run(args).await {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            ExitCode::StartupError
        }
    };

    process::exit(code.as_i32());
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .init();
}

async fn run(args: Args) -> Result<()> {
    // Load config: explicit path, or auto-discovery in the working directory
    let config = match &args.config {
        Some(path) => Some(load_config_from_path(path)?),
        None => discover_config(&std::env::current_dir()?)?,
    };
    let settings = ServiceSettings::resolve(config, &args.overrides())?;
    tracing::info!(
        listen = %settings.listen,
        capacity_url = %settings.capacity_url,
        technology_url = %settings.technology_url,
        concurrency = settings.fan_out.concurrency(),
        timeout_ms = settings.fan_out.call_timeout().as_millis() as u64,
        "configuration loaded"
    );

    // Create adapters (Dependency Injection)
    let request_timeout = settings.fan_out.call_timeout();
    let capacities = CapacityServiceClient::new(&settings.capacity_url, request_timeout)?;
    let technologies = TechnologyServiceClient::new(&settings.technology_url, request_timeout)?;
    let repository = InMemoryBootcampRepository::new();

    // Create use case with injected dependencies
    let use_case = BootcampUseCase::new(repository, capacities, technologies, settings.fan_out);

    let listener = tokio::net::TcpListener::bind(settings.listen).await?;
    http::serve(listener, Arc::new(use_case), shutdown_signal()).await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
