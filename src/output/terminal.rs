//! Terminal output formatting with colors and box drawing.

use colored::Colorize;

use crate::result::{AnalysisResult, ConfidenceLevel, ModelFit, Report};

/// Format a Report for human-readable terminal output.
///
/// Shows the verdict, every model fit, and the measured points. Verdicts
/// below the low-confidence threshold and points whose calibration hit the
/// iteration cap are called out with warnings.
pub fn format_report(report: &Report) -> String {
    let mut output = String::new();
    let sep = "\u{2500}".repeat(62);

    output.push_str("complexity-oracle\n");
    output.push_str(&sep);
    output.push('\n');
    output.push('\n');

    output.push_str(&format!(
        "  Sizes: {}, {} batches each ({:?})\n",
        report.points.len(),
        report.metadata.repetitions,
        report.metadata.aggregation
    ));
    output.push_str(&format!(
        "  Clock: {} (resolution {:.6} ms)\n",
        report.metadata.clock, report.metadata.timer_resolution_ms
    ));
    output.push('\n');

    output.push_str(&format_analysis(&report.analysis));

    let capped = report.capped_points();
    if capped > 0 {
        output.push_str(&format!(
            "  {}\n",
            format!(
                "\u{26A0} {} of {} sizes hit the calibration cap; their durations are less reliable",
                capped,
                report.points.len()
            )
            .yellow()
        ));
        output.push('\n');
    }

    output.push_str(&format!("    {:>10}  {:>14}  {:>10}\n", "n", "duration (ms)", "batch"));
    for (point, batch) in report.points.iter().zip(&report.metadata.batches) {
        let marker = if batch.capped { " *" } else { "" };
        output.push_str(&format!(
            "    {:>10}  {:>14.6}  {:>10}{}\n",
            point.n, point.duration, batch.batch_size, marker
        ));
    }
    output.push('\n');

    output.push_str(&sep);
    output.push('\n');
    output.push_str(&format!(
        "Note: Completed in {:.2} s. Complexity is inferred from timings, not proven.\n",
        report.metadata.runtime_secs
    ));

    output
}

/// Format an AnalysisResult: verdict line plus the table of fits.
pub fn format_analysis(analysis: &AnalysisResult) -> String {
    let mut output = String::new();

    let verdict = format!("Best fit: {}", analysis.best_fit);
    let verdict = match analysis.confidence_level() {
        ConfidenceLevel::High => format!("\u{2713} {}", verdict).green().bold(),
        ConfidenceLevel::Moderate => format!("\u{2713} {}", verdict).yellow().bold(),
        ConfidenceLevel::Low => format!("? {}", verdict).red().bold(),
    };
    output.push_str(&format!("  {}\n\n", verdict));
    output.push_str(&format!(
        "    Confidence: {}% ({})\n",
        analysis.confidence,
        format_level(analysis.confidence_level())
    ));

    if analysis.is_low_confidence() {
        output.push_str(&format!(
            "    {}\n",
            "\u{26A0} Low confidence: try larger sizes, a wider size range, or more repetitions"
                .yellow()
        ));
    }
    output.push('\n');

    output.push_str(&format!("    {:<12}  {:>14}\n", "Model", "RMSE (ms)"));
    for fit in &analysis.fits {
        let marker = if fit.model == analysis.best_fit {
            "  \u{2190} best"
        } else {
            ""
        };
        output.push_str(&format!(
            "    {:<12}  {:>14}{}\n",
            fit.model.notation(),
            format_rmse(fit),
            marker
        ));
    }
    output.push('\n');

    output
}

fn format_level(level: ConfidenceLevel) -> String {
    match level {
        ConfidenceLevel::High => "High".green().to_string(),
        ConfidenceLevel::Moderate => "Moderate".yellow().to_string(),
        ConfidenceLevel::Low => "Low".red().to_string(),
    }
}

fn format_rmse(fit: &ModelFit) -> String {
    if fit.rmse.is_finite() {
        format!("{:.6}", fit.rmse)
    } else {
        "n/a".to_string()
    }
}
