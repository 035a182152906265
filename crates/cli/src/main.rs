use anyhow::Result;

use quotealloc_cli::config::CliConfig;

fn main() -> Result<()> {
    quotealloc_observability::init();

    let config = CliConfig::from_env()?;
    let records = quotealloc_cli::run(&config)?;

    println!("{}", quotealloc_cli::render(&records, config.pretty)?);
    Ok(())
}
