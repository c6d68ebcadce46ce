use crate::OptionArgs;
use crate::view::ExclusionRow;
use docscope_core::AuditReport;
use std::process::ExitCode;
use tabled::Table;

pub fn run(args: OptionArgs, schema: bool) -> Result<ExitCode, Box<dyn std::error::Error>> {
    if schema {
        let schema = schemars::schema_for!(AuditReport);
        println!("{}", serde_json::to_string_pretty(&schema)?);
        return Ok(ExitCode::SUCCESS);
    }

    let table = args.resolve()?.exclusion_table()?;
    let rows: Vec<ExclusionRow> = table
        .rules()
        .map(|(tier, pattern)| ExclusionRow::new(tier, pattern))
        .collect();

    if rows.is_empty() {
        println!("No exclusions configured.");
    } else {
        println!("{}", Table::new(rows));
    }
    Ok(ExitCode::SUCCESS)
}
