use crate::core::models::report::CostReport;

/// Render the fixed-width report table.
///
/// Layout:
/// ```text
/// Services                                 Budget
/// Amazon Elastic Compute Cloud             US$  5.00
/// Other                                    US$  1.00
/// Total                                    US$ 11.00
/// ```
///
/// Top rows show latest-day costs; Other and Total are full-period sums.
/// Names longer than `name_width` are padded, never truncated.
pub fn render_table(report: &CostReport, name_width: usize) -> String {
    let mut buffer = format!("{:<width$} {:>5}\n", "Services", "Budget", width = name_width);
    for row in &report.top {
        buffer.push_str(&cost_line(&row.service, row.latest, name_width));
    }
    buffer.push_str(&cost_line("Other", report.other, name_width));
    buffer.push_str(&cost_line("Total", report.total, name_width));
    buffer
}

fn cost_line(name: &str, cost: f64, name_width: usize) -> String {
    format!("{:<width$} US$ {:5.2}\n", name, cost, width = name_width)
}

/// The full webhook message: alert summary plus the table in a code block.
pub fn slack_message(summary: &str, table: &str) -> String {
    format!("{}\n\n```\n{}```", summary, table)
}
