use crate::report::ComparisonReport;

pub fn render_report_text(report: &ComparisonReport) -> String {
    let mut out = String::new();
    out.push_str(&format!("files: {}\n", report.files.join(", ")));
    out.push_str(&format!("{}\n", report.notice));
    out.push_str(&format!("result: {}\n", report.result));
    out
}
