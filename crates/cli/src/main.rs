use std::io;

use anyhow::Context;
use clap::Parser;

use cashreg_cli::{Args, Driver};
use cashreg_register::{Register, RegisterConfig};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    cashreg_observability::init(&args.observability());

    let config = RegisterConfig::from_env()
        .context("failed to load configuration from environment")?;
    let config = args.apply(config);
    config.validate().context("invalid configuration")?;
    tracing::info!(
        max_sales = config.max_sales,
        initial_slots = config.initial_catalog_slots,
        first_item_id = config.first_item_id,
        seeded = config.seed.is_some(),
        "starting register session"
    );

    let register = Register::new(config);
    let stdin = io::stdin();
    let stdout = io::stdout();
    Driver::new(register, stdin.lock(), stdout.lock())
        .with_format(args.format)
        .run()
        .context("terminal IO failed")?;
    Ok(())
}
