use clap::Parser;
use leetgen_cli::{Args, Error, run};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let summary = run(&args)?;

    println!("Generated {} phrases and saved to {}", summary.count, summary.file_name);
    Ok(())
}
