//! `stackdock config` — show and set configuration values.

use anyhow::Result;
use clap::Subcommand;

use crate::application::ports::ConfigStore;
use crate::domain::config::{VALID_CONFIG_KEYS, validate_config_key, validate_config_value};
use crate::output::OutputContext;

/// Config subcommands.
#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,
    /// Read a single configuration value
    Get {
        /// Configuration key
        key: String,
    },
    /// Set configuration value
    Set {
        /// Configuration key
        key: String,
        /// Configuration value
        value: String,
    },
}

/// Run the config command.
///
/// # Errors
///
/// Returns an error on unknown keys, invalid values, or storage failures.
pub fn run(ctx: &OutputContext, store: &impl ConfigStore, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show => show_config(ctx, store),
        ConfigCommand::Get { key } => get_config(store, &key),
        ConfigCommand::Set { key, value } => set_config(ctx, store, &key, &value),
    }
}

fn show_config(ctx: &OutputContext, store: &impl ConfigStore) -> Result<()> {
    let config = store.load()?;
    let path = store.path()?;
    for key in VALID_CONFIG_KEYS {
        let value = match config.get(key) {
            Some(v) if *key == "auth.token" => mask(&v),
            Some(v) => v,
            None => "(unset)".to_string(),
        };
        ctx.line(&format!("{key} = {value}"));
    }
    ctx.dim(&format!("file: {}", path.display()));
    Ok(())
}

fn get_config(store: &impl ConfigStore, key: &str) -> Result<()> {
    validate_config_key(key)?;
    let config = store.load()?;
    if let Some(value) = config.get(key) {
        println!("{value}");
    }
    Ok(())
}

fn set_config(ctx: &OutputContext, store: &impl ConfigStore, key: &str, value: &str) -> Result<()> {
    validate_config_key(key)?;
    validate_config_value(key, value)?;

    let mut config = store.load()?;
    config.set(key, value);
    store.save(&config)?;

    if key == "auth.token" {
        ctx.success(&format!("Set {key} = {}", mask(value)));
    } else {
        ctx.success(&format!("Set {key} = {value}"));
    }
    Ok(())
}

/// Show only the last four characters of a secret. Counts characters, not
/// bytes, so multi-byte tokens never split mid-character.
fn mask(value: &str) -> String {
    let count = value.chars().count();
    if count <= 4 {
        "****".to_string()
    } else {
        let tail: String = value.chars().skip(count - 4).collect();
        format!("****{tail}")
    }
}
