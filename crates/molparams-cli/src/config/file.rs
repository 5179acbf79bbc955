use crate::error::Result;
use molparams::core::io::settings::Settings;
use std::path::Path;
use tracing::debug;

pub fn load_settings(path: Option<&Path>) -> Result<Settings> {
    match path {
        Some(path) => {
            debug!("Loading settings from file: {:?}", path);
            let settings = Settings::load(path)?;
            debug!(
                sections = settings.sections().count(),
                "Settings file loaded."
            );
            Ok(settings)
        }
        None => {
            debug!("No settings file given; starting from defaults.");
            Ok(Settings::new())
        }
    }
}
