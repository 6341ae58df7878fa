//! Classify reference strings given on the command line.

use sismos_analysis::direction::classify;

use crate::labels::direction_name;

pub fn run(references: Vec<String>) -> anyhow::Result<()> {
    for reference in &references {
        let code = classify(reference);
        println!("{:<8} {:<12} {}", code, direction_name(code), reference);
    }
    Ok(())
}
