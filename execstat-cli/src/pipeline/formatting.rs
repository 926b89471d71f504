//! Output Formatting
//!
//! Human-readable output. A single file prints exactly three lines:
//!
//! ```text
//! max: 500.00
//! avg: 350.00
//! min: 200.00
//! ```
//!
//! Several files print one such block each, headed by `==> path <==` and
//! separated by a blank line.

use execstat_report::{FileResult, Report};

/// Format a report for terminal display with `precision` decimal places
pub fn format_human_output(report: &Report, precision: usize) -> String {
    let mut output = String::new();

    if let [single] = report.results.as_slice() {
        push_block(&mut output, single, precision);
        return output;
    }

    for (i, result) in report.results.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        output.push_str(&format!("==> {} <==\n", result.path));
        push_block(&mut output, result, precision);
    }

    output
}

fn push_block(output: &mut String, result: &FileResult, precision: usize) {
    let m = &result.metrics;
    output.push_str(&format!("max: {:.*}\n", precision, m.max));
    output.push_str(&format!("avg: {:.*}\n", precision, m.avg));
    output.push_str(&format!("min: {:.*}\n", precision, m.min));
}
