use crate::config::{self, Config};
use crate::error::Result;
use std::path::PathBuf;

/// Write a config.toml with the default settings
pub fn init(path: Option<PathBuf>) -> Result<()> {
    let config_path = match path {
        Some(path) => path,
        None => config::default_config_path()?,
    };

    if config_path.exists() {
        eprintln!(
            "Configuration file already exists at: {}",
            config_path.display()
        );
        eprintln!("Remove it first if you want to reinitialize.");
        return Ok(());
    }

    config::save(&Config::default(), &config_path)?;

    println!("Configuration file created: {}", config_path.display());
    println!("\nNext steps:");
    println!(
        "1. Edit {} to adjust the schedule and default texts",
        config_path.display()
    );
    println!("2. Run 'kdcli login --user <name>' to store a session");

    Ok(())
}
