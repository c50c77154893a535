use anyhow::Result;
use postbox::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run().await
}
