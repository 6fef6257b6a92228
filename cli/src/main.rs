use clap::Parser;
use tracing_subscriber::EnvFilter;

/// cpu load generator: walks every integer from 2 upward and reports whether
/// each one is prime, without stopping on its own.
///
/// Takes no options. Kill the process to stop it.
#[derive(Parser, Debug)]
struct PrimeBurn {}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env(/* RUST_LOG env var sets logging level */))
        .with_writer(std::io::stderr /* stdout is the data channel */)
        .init();

    let _args = PrimeBurn::parse();

    tracing::info!(
        "reporting primality of every integer from {} until killed",
        primeburn::driver::FIRST_CANDIDATE
    );

    let mut stdout = std::io::stdout().lock();
    primeburn::driver::run(&mut stdout)?;

    Ok(())
}
