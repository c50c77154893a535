use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod init;
pub mod serve;
pub mod status;

#[derive(Subcommand)]
enum Command {
    /// Create the database schema and the default mailbox row
    Init {},
    /// Run the API server and the sensor polling loops
    Serve {
        /// Set the server host address
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        /// Set the server port
        #[arg(long, default_value = "8000")]
        port: String,
    },
    /// Print the persisted mailbox state
    Status {},
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

pub async fn run() -> Result<()> {
    let args = Cli::parse();

    // Handle each sub command
    match args.command {
        Some(Command::Init {}) => {
            init::run().await?;
        }
        Some(Command::Serve { host, port }) => {
            serve::run(host, port).await;
        }
        Some(Command::Status {}) => {
            status::run().await?;
        }
        None => {}
    }

    Ok(())
}
