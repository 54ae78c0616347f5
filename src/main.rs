use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use workout_stats::{config::Config, error::WorkoutError, pipeline::report};

fn main() -> Result<(), WorkoutError> {
    let config = Config::from_env();

    // Logs go to stderr so stdout carries only the summary lines
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.log_filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let packages = report::demo_packages();
    tracing::info!("Processing {} sensor packages", packages.len());

    let lines = report::run(&packages).map_err(|err| {
        tracing::error!("Failed to process sensor packages: {}", err);
        err
    })?;

    for line in lines {
        println!("{}", line);
    }

    Ok(())
}
