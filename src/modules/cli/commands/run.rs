//! Run command implementation

use breed_inquiry_core::BreedInquiryError;
use breed_inquiry_parser::parse_file;
use breed_inquiry_runtime::Runtime;
use clap::Args;
use tracing::info;

/// Run command arguments
#[derive(Args, Debug)]
pub struct RunCommand {
    /// Override server port
    #[arg(short, long)]
    pub port: Option<u16>,
}

impl RunCommand {
    /// Execute the run command
    pub async fn execute(&self, config_path: &str) -> Result<(), BreedInquiryError> {
        info!("Loading configuration from: {}", config_path);

        let config = parse_file(config_path)?;

        // Startup fails here if the database is unreachable
        let runtime = Runtime::with_port_override(config, self.port).await?;
        runtime.run().await?;

        Ok(())
    }
}
