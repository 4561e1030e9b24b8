use tabled::builder::Builder;
use tabled::settings::Style;

use crate::record::TableData;

/// Render a listing as a bordered table: one header row of column names,
/// then every data row. NULL cells render empty, everything else as-is
/// (including dangling reference ids).
pub fn render(data: &TableData) -> String {
    let mut builder = Builder::default();
    builder.push_record(data.columns.iter().cloned());
    for row in &data.rows {
        builder.push_record(row.iter().map(|cell| cell.clone().unwrap_or_default()));
    }
    builder.build().with(Style::rounded()).to_string()
}
