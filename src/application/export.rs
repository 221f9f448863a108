use crate::domain::entities::report::Report;
use std::fmt::Write;

/// Plain-text (Markdown) rendering of a report for sharing or piping into a
/// document converter.
pub fn render_markdown(report: &Report) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# {}\n", report.title);
    let _ = writeln!(out, "## Executive Summary\n\n{}\n", report.executive_summary);

    out.push_str("## Key Insights\n\n");
    for insight in report.analysis.insights.iter() {
        let _ = writeln!(out, "- {insight}");
    }

    out.push_str("\n## Recommendations\n\n");
    for rec in &report.recommendations {
        let _ = writeln!(out, "- {rec}");
    }

    let _ = writeln!(out, "\nGenerated: {}", report.generated_at.to_rfc3339());
    let _ = writeln!(out, "Risk Level: {}", report.analysis.risk_level);
    let _ = writeln!(
        out,
        "Growth Potential: {:.1}%",
        report.analysis.growth_potential.percent()
    );
    out
}
