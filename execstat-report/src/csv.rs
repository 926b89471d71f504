//! CSV Output

use crate::report::Report;

const HEADER: &str = "path,scenario,label,count,max,avg,min,median,std_dev,p90,p99";

/// Generate a CSV report with one row per input file.
///
/// Numbers are written with `precision` decimal places.
pub fn generate_csv_report(report: &Report, precision: usize) -> String {
    let mut output = String::from(HEADER);
    output.push('\n');

    for result in &report.results {
        let m = &result.metrics;
        output.push_str(&format!(
            "{},{},{},{},{:.p$},{:.p$},{:.p$},{:.p$},{:.p$},{:.p$},{:.p$}\n",
            escape(&result.path),
            escape(result.scenario.as_deref().unwrap_or("")),
            escape(result.label.as_deref().unwrap_or("")),
            m.count,
            m.max,
            m.avg,
            m.min,
            m.median,
            m.std_dev,
            m.p90,
            m.p99,
            p = precision,
        ));
    }

    output
}

fn escape(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{DurationMetrics, FileResult, ReportMeta, ReportSummary};

    fn report(path: &str, scenario: Option<&str>) -> Report {
        let results = vec![FileResult {
            path: path.to_string(),
            name: None,
            scenario: scenario.map(str::to_string),
            label: Some("14".to_string()),
            skipped_entries: 0,
            metrics: DurationMetrics {
                count: 2,
                max: 500.0,
                avg: 350.0,
                min: 200.0,
                median: 350.0,
                std_dev: 212.132,
                p90: 470.0,
                p99: 497.0,
            },
        }];
        Report {
            meta: ReportMeta {
                schema_version: 1,
                version: "0.1.0".to_string(),
                times_key: "execute_times".to_string(),
                pairs: "first".to_string(),
                scale: 1000.0,
            },
            summary: ReportSummary::from_results(&results),
            results,
        }
    }

    #[test]
    fn test_csv_rows() {
        let csv = generate_csv_report(&report("run.json", Some("mps")), 2);
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], HEADER);
        assert_eq!(
            lines[1],
            "run.json,mps,14,2,500.00,350.00,200.00,350.00,212.13,470.00,497.00"
        );
    }

    #[test]
    fn test_csv_escaping() {
        let csv = generate_csv_report(&report("a,b.json", Some("say \"hi\"")), 0);
        assert!(csv.contains("\"a,b.json\",\"say \"\"hi\"\"\",14,2,500,"));
    }
}
