use crate::cli::RequestArgs;
use crate::display;
use crate::error::Result;
use crate::utils::parser;
use molparams::properties::ValidatedRequest;
use std::io::{self, Write};
use tracing::info;

pub fn run(args: RequestArgs) -> Result<()> {
    let request = parser::parse_request(&args.entries)?;
    let validated = request.validate()?;
    info!("Property request with {} entries is well-formed.", request.len());

    let stdout = io::stdout();
    write_summary(&mut stdout.lock(), &validated)?;
    Ok(())
}

fn write_summary(out: &mut impl Write, validated: &ValidatedRequest) -> io::Result<()> {
    let mut rows: Vec<(String, String)> = Vec::new();
    rows.extend(
        validated
            .ground_state()
            .iter()
            .map(|name| (name.clone(), "ground state".to_string())),
    );
    rows.extend(validated.excited_state().iter().map(|(name, states)| {
        let states: Vec<String> = states.iter().map(ToString::to_string).collect();
        (name.clone(), format!("states {}", states.join(", ")))
    }));
    rows.extend(validated.multistate().iter().map(|(name, pairs)| {
        let pairs: Vec<String> = pairs.iter().map(ToString::to_string).collect();
        (name.clone(), format!("pairs {}", pairs.join(", ")))
    }));
    display::print_kv_table(out, "Property Request", &rows)?;

    let implied = validated.ground_state_equivalents();
    if !implied.is_empty() {
        writeln!(
            out,
            "  note: state 0 requests imply ground-state {}",
            implied.join(", ")
        )?;
    }
    if let Some(max) = validated.max_state() {
        writeln!(out, "  highest state referenced: {}", max)?;
    }
    Ok(())
}
