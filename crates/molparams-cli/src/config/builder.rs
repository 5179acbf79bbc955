use super::file::load_settings;
use crate::cli::CheckArgs;
use crate::error::{CliError, Result};
use molparams::core::io::settings::Settings;
use molparams::techniques::{SetId, TechniqueCatalog};
use tracing::{debug, info};

/// Builds a catalog from the settings file, then the `--set` overrides on top.
pub fn build_catalog(args: &CheckArgs) -> Result<TechniqueCatalog> {
    let mut settings = load_settings(args.config.as_deref())?;
    settings.merge(parse_set_values(&args.set_values)?);

    let mut catalog = TechniqueCatalog::new();
    info!("Binding settings onto the parameter sets...");
    catalog.apply(&settings)?;
    Ok(catalog)
}

fn parse_set_values(set_values: &[String]) -> Result<Settings> {
    let mut overrides = Settings::new();
    for kv_pair in set_values {
        let (key, value_str) = kv_pair.split_once('=').ok_or_else(|| {
            CliError::Config(format!(
                "Invalid --set format: '{}'. Expected SET.PARAM=VALUE.",
                kv_pair
            ))
        })?;
        let (set, name) = key.trim().split_once('.').ok_or_else(|| {
            CliError::Config(format!(
                "Invalid --set key: '{}'. Expected SET.PARAM (e.g., 'mm_model.cutoff').",
                key
            ))
        })?;
        let set: SetId = set.parse()?;
        let value = parse_value(value_str.trim());
        debug!("Override {}.{} = {}", set, name, value);
        overrides.set(set.as_str(), name, value);
    }
    Ok(overrides)
}

/// Reads an override value as a TOML literal, falling back to a plain string so
/// that `pme` or `1.2 nm` need no quoting on the command line.
fn parse_value(raw: &str) -> toml::Value {
    toml::from_str::<toml::Table>(&format!("value = {}", raw))
        .ok()
        .and_then(|mut table| table.remove("value"))
        .unwrap_or_else(|| toml::Value::String(raw.to_string()))
}
