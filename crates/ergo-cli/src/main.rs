use clap::Parser;

mod bootstrap;
mod cli;
mod commands;
mod output;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("ergo error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let flags = cli.global_flags();
    let config = bootstrap::load_config(&flags)?;

    match cli.command {
        cli::Commands::Init => commands::init::handle(&config).await,
        cli::Commands::Assess(args) => commands::assess::handle(&args, &config, &flags).await,
        cli::Commands::History { user } => {
            commands::history::handle(&user, &config, &flags).await
        }
        cli::Commands::Login { user } => {
            commands::session::login(&user, &config, &flags).await
        }
        cli::Commands::Logout { user } => {
            commands::session::logout(&user, &config, &flags).await
        }
        cli::Commands::Heartbeat { user } => {
            commands::session::heartbeat(&user, &config, &flags).await
        }
        cli::Commands::Status => commands::session::status(&config, &flags).await,
        cli::Commands::User { action } => commands::user::handle(&action, &config, &flags).await,
        cli::Commands::Log(args) => commands::log::handle(&args, &config, &flags).await,
    }
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("ERGO_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
