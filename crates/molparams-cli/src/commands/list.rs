use crate::display;
use crate::error::Result;
use molparams::techniques::TechniqueCatalog;
use std::io::{self, Write};
use tracing::info;

pub fn run() -> Result<()> {
    let catalog = TechniqueCatalog::new();
    let stdout = io::stdout();
    write_listing(&mut stdout.lock(), &catalog)?;
    info!("Listed {} parameter sets.", catalog.iter().count());
    Ok(())
}

fn write_listing(out: &mut impl Write, catalog: &TechniqueCatalog) -> io::Result<()> {
    let rows: Vec<Vec<String>> = catalog
        .iter()
        .map(|(id, set)| {
            vec![
                id.to_string(),
                set.len().to_string(),
                set.names().collect::<Vec<_>>().join(", "),
            ]
        })
        .collect();
    display::print_table(out, "Parameter Sets", &["Set", "Count", "Parameters"], &rows)
}
