mod cfg;
mod cli;
mod gateways;

use anyhow::Result;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();
    cli::run()
}
