use clap::Parser;

use joyeria_backend::{
    config::{EnvConfig, ScriptDbConfig, defaults::DEFAULT_RUST_LOG},
    logging::init_cli_tracing,
    migration::{
        MigrationCommand, MigrationCommandError,
        cli::Cli,
        commands::run,
    },
};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_cli_tracing(DEFAULT_RUST_LOG);

    if let Err(err) = migrate(cli.command.into()).await {
        tracing::error!("migrate failed: {err}");
        std::process::exit(1);
    }
}

async fn migrate(command: MigrationCommand) -> Result<(), MigrationCommandError> {
    let cfg = ScriptDbConfig::from_env().map_err(MigrationCommandError::Config)?;
    run(&cfg, command).await
}
