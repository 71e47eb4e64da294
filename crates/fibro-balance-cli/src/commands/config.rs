use clap::Subcommand;
use fibro_balance_core::Config;

use super::{CmdResult, Context};

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Get a config value
    Get {
        /// Config key (e.g. "spoons.default_total", "tracker.trend_window")
        key: String,
    },
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// New value
        value: String,
    },
    /// List all config values
    List,
    /// Reset config to defaults
    Reset,
}

pub fn run(ctx: &Context, action: ConfigAction) -> CmdResult {
    if ctx.ephemeral && matches!(action, ConfigAction::Set { .. } | ConfigAction::Reset) {
        return Err("config cannot be changed with --ephemeral".into());
    }

    match action {
        ConfigAction::Get { key } => match ctx.config.get(&key) {
            Some(value) => println!("{value}"),
            None => return Err(format!("unknown key: {key}").into()),
        },
        ConfigAction::Set { key, value } => {
            let mut config = ctx.config.clone();
            config.set(&key, &value)?;
            config.save()?;
            println!("ok");
        }
        ConfigAction::List => {
            if ctx.json {
                println!("{}", serde_json::to_string_pretty(&ctx.config)?);
            } else {
                let toml = toml_listing(&ctx.config)?;
                print!("{toml}");
            }
        }
        ConfigAction::Reset => {
            Config::default().save()?;
            println!("config reset to defaults");
        }
    }
    Ok(())
}

fn toml_listing(config: &Config) -> Result<String, Box<dyn std::error::Error>> {
    let json = serde_json::to_value(config)?;
    let mut out = String::new();
    if let Some(sections) = json.as_object() {
        for (section, values) in sections {
            if let Some(values) = values.as_object() {
                for (key, value) in values {
                    out.push_str(&format!("{section}.{key} = {value}\n"));
                }
            }
        }
    }
    Ok(out)
}
