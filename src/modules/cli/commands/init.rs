//! Init command implementation

use breed_inquiry_core::BreedInquiryError;
use breed_inquiry_types::Connector;
use clap::Args;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Init command arguments
#[derive(Args, Debug)]
pub struct InitCommand {
    /// Output directory
    #[arg(short, long, default_value = ".")]
    pub output: String,

    /// Database connector type (mysql or postgres)
    #[arg(short = 'd', long, default_value = "mysql")]
    pub connector: Connector,

    /// Overwrite existing files
    #[arg(long)]
    pub force: bool,
}

impl InitCommand {
    /// Execute the init command
    pub async fn execute(&self) -> Result<(), BreedInquiryError> {
        let output_dir = Path::new(&self.output);
        if !output_dir.exists() {
            fs::create_dir_all(output_dir)?;
        }

        let config_path = self.write(output_dir, "breed-inquiry.yaml", &self.generate_config())?;
        info!("Created: {}", config_path.display());

        let env_path = self.write(output_dir, ".env.example", &self.generate_env_example())?;
        info!("Created: {}", env_path.display());

        println!("\nBreed inquiry configuration initialized.");
        println!("\nNext steps:");
        println!("  1. Copy .env.example to .env and update DATABASE_URL");
        println!("  2. Review breed-inquiry.yaml");
        println!("  3. Run: breed-inquiry run -f breed-inquiry.yaml");

        Ok(())
    }

    fn write(&self, dir: &Path, name: &str, content: &str) -> Result<PathBuf, BreedInquiryError> {
        let path = dir.join(name);
        if path.exists() && !self.force {
            return Err(BreedInquiryError::Config(format!(
                "{} already exists (use --force to overwrite)",
                path.display()
            )));
        }
        fs::write(&path, content)?;
        Ok(path)
    }

    /// Generate configuration file content
    fn generate_config(&self) -> String {
        format!(
            r#"# Breed inquiry configuration
# The database URL placeholder is read from the environment (or .env).

name: breed-inquiry

database:
  connector: {}
  url: "{{{{ env.DATABASE_URL }}}}"
  connect_timeout_secs: 5
  query_timeout_secs: 3
  pool:
    max_open: 100
    max_idle: 10
    max_lifetime_secs: 600

server:
  host: 0.0.0.0
  port: 3000
  request_timeout_secs: 30
  cors:
    allowed_origins: ["*"]
"#,
            self.connector
        )
    }

    /// Generate .env.example content
    fn generate_env_example(&self) -> String {
        format!(
            r#"# Database connection URL
DATABASE_URL={}
"#,
            self.connector.example_url()
        )
    }
}
