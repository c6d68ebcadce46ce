use crate::view::{KindCountRow, ViolationRow};
use crate::{OptionArgs, OutputFormat};
use docscope_core::{MissingCheck, TracingLogger, loader};
use std::path::PathBuf;
use std::process::ExitCode;
use tabled::Table;
use tracing::info;

pub fn run(
    path: PathBuf,
    args: OptionArgs,
    format: OutputFormat,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let options = args.resolve()?;
    let check = MissingCheck::new(options)?;

    info!("Checking symbol tree at: {}...", path.display());
    let tree = loader::load_tree(&path)?;

    let report = check.run(&tree, &TracingLogger);

    match format {
        OutputFormat::Text => {}
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Table => {
            if report.is_clean() {
                println!("No missing documentation found.");
            } else {
                let rows: Vec<ViolationRow> =
                    report.violations.iter().map(ViolationRow::from_violation).collect();
                println!("{}", Table::new(rows));

                let summary: Vec<KindCountRow> = report
                    .by_kind()
                    .into_iter()
                    .map(|(kind, count)| KindCountRow { kind, count })
                    .collect();
                println!("{}", Table::new(summary));
            }
        }
    }

    info!(
        "Checked {} symbols, {} violations.",
        tree.len(),
        report.violation_count
    );

    Ok(if report.is_clean() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
