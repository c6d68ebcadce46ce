use crate::view::OptionRow;
use docscope_core::config::OPTION_DECLARATIONS;
use std::process::ExitCode;
use tabled::Table;

pub fn run() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let rows: Vec<OptionRow> = OPTION_DECLARATIONS.iter().map(OptionRow::from).collect();
    println!("{}", Table::new(rows));
    Ok(ExitCode::SUCCESS)
}
