//! Print the fixed grading scale.

use anyhow::Result;
use grade_core::format_band_table;

pub fn run() -> Result<()> {
    print!("{}", format_band_table());
    Ok(())
}
