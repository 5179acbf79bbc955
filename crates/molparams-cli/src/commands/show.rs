use crate::cli::{ShowArgs, ShowFormat};
use crate::display;
use crate::error::{CliError, Result};
use molparams::core::params::ParameterSet;
use molparams::techniques::{SetId, TechniqueCatalog};
use std::io::{self, Write};
use tracing::info;

pub fn run(args: ShowArgs) -> Result<()> {
    let id: SetId = args.set.parse()?;
    let catalog = TechniqueCatalog::new();
    let set = catalog.set(id);
    info!("Showing {} parameters of set '{}'.", set.len(), id);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match args.format {
        ShowFormat::Table => write_table(&mut out, id, set)?,
        ShowFormat::Csv => set
            .write_csv(&mut out)
            .map_err(|e| CliError::Other(anyhow::anyhow!("Failed to write CSV: {}", e)))?,
    }
    Ok(())
}

fn write_table(out: &mut impl Write, id: SetId, set: &ParameterSet) -> io::Result<()> {
    let rows: Vec<Vec<String>> = set
        .iter()
        .map(|p| {
            let choices = p
                .choices()
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            vec![
                p.name().to_string(),
                p.display_name().to_string(),
                p.declared_type().map_or_else(|| "-".to_string(), |t| t.to_string()),
                p.default().to_string(),
                choices,
            ]
        })
        .collect();
    display::print_table(
        out,
        id.as_str(),
        &["Name", "Description", "Type", "Default", "Choices"],
        &rows,
    )?;

    for p in set.iter().filter(|p| !p.default_is_admissible()) {
        writeln!(
            out,
            "  note: default of '{}' is not among its choices; bind a value before use",
            p.name()
        )?;
    }
    Ok(())
}
