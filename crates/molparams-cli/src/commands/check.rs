use crate::cli::CheckArgs;
use crate::config;
use crate::display;
use crate::error::{CliError, Result};
use molparams::techniques::TechniqueCatalog;
use std::io::{self, Write};
use tracing::info;

pub fn run(args: CheckArgs) -> Result<()> {
    let catalog = config::build_catalog(&args)?;

    let stdout = io::stdout();
    write_effective_values(&mut stdout.lock(), &catalog)?;

    if let Some(path) = &args.output {
        info!("Writing effective settings to {:?}", path);
        catalog
            .effective_settings()
            .write(path)
            .map_err(|e| CliError::Output {
                path: path.clone(),
                source: e.into(),
            })?;
        println!("Effective settings written to {}", path.display());
    }
    Ok(())
}

fn write_effective_values(out: &mut impl Write, catalog: &TechniqueCatalog) -> io::Result<()> {
    for (id, set) in catalog.iter() {
        let rows: Vec<(String, String)> = set
            .iter()
            .map(|p| {
                let marker = if p.is_bound() { "" } else { " (default)" };
                (p.name().to_string(), format!("{}{}", p.effective(), marker))
            })
            .collect();
        display::print_kv_table(out, id.as_str(), &rows)?;
    }
    Ok(())
}
