//! Text rendering of a finished analysis.

use crate::analyzer::AnalysisReport;

const RULE: &str = "======================================================================";

/// Renders the analysis as a UTF-8 text report.
///
/// Rendering is deterministic: the same analysis always produces the
/// same bytes, so re-analyzing an unchanged input yields an identical
/// report.
pub fn render(analysis: &AnalysisReport) -> String {
    let n = analysis.length;
    let mut lines: Vec<String> = vec![
        RULE.to_string(),
        "Digit Sequence Randomness Analysis".to_string(),
        RULE.to_string(),
        format!("Input file: {}", analysis.input.display()),
        format!("Input digest (SHA-256): {}", analysis.digest),
        format!("Sequence length: {} digits", thousands(n)),
        format!("Mean digit value: {:.4}", analysis.mean),
        format!("Total variance: {:.4}", analysis.total_variance),
        format!("Significance level: {}", analysis.significance_level),
        String::new(),
        "[1] Digit frequencies".to_string(),
    ];

    let (top_digit, top_count) = analysis.counts.most_frequent();
    let (low_digit, low_count) = analysis.counts.least_frequent();
    lines.push(format!(
        "- most frequent: digit {} ({}, {:.4}%)",
        top_digit,
        thousands(top_count),
        percent(top_count, n)
    ));
    lines.push(format!(
        "- least frequent: digit {} ({}, {:.4}%)",
        low_digit,
        thousands(low_count),
        percent(low_count, n)
    ));

    for digit in 0..10u8 {
        let count = analysis.counts.count(digit);
        lines.push(format!(
            "- digit {}: {} ({:.4}%) | deviation: {:+.2}%",
            digit,
            thousands(count),
            percent(count, n),
            analysis.counts.deviation_percent(digit)
        ));
    }

    lines.extend([
        String::new(),
        "[2] Chi-square uniformity test".to_string(),
        format!("- statistic: {:.4}", analysis.uniformity.statistic),
        format!(
            "- degrees of freedom: {}",
            analysis.uniformity.degrees_of_freedom
        ),
        format!("- p-value: {:.4e}", analysis.uniformity.result.p_value),
        format!(
            "- verdict: {}",
            if analysis.uniformity.result.passed {
                "uniform"
            } else {
                "not uniform"
            }
        ),
        String::new(),
        "[3] Runs test".to_string(),
        format!("- observed runs: {}", thousands(analysis.runs.observed)),
        format!("- expected runs: {:.0}", analysis.runs.expected),
        format!("- p-value: {:.4e}", analysis.runs.result.p_value),
        format!(
            "- verdict: {}",
            if analysis.runs.result.passed {
                "random pattern"
            } else {
                "non-random pattern"
            }
        ),
        String::new(),
        "[4] Approximate entropy".to_string(),
        format!("- ApEn: {:.6}", analysis.entropy.value),
        format!("- p-value: {:.4e}", analysis.entropy.result.p_value),
        format!(
            "- verdict: {}",
            if analysis.entropy.result.passed {
                "high complexity (random)"
            } else {
                "low complexity (patterned)"
            }
        ),
        String::new(),
        "[5] Binary derivative test".to_string(),
    ]);

    for (level, p_value) in analysis.derivative.level_p_values.iter().enumerate() {
        lines.push(format!("- level {} p-value: {:.4e}", level + 1, p_value));
    }
    lines.push(format!(
        "- combined p-value: {:.4e}",
        analysis.derivative.combined.p_value
    ));
    lines.push(format!(
        "- verdict: {}",
        if analysis.derivative.combined.passed {
            "no periodic pattern"
        } else {
            "periodic pattern detected"
        }
    ));

    lines.extend([
        String::new(),
        format!("Tests passed: {}/4", analysis.tests_passed),
        format!("Conclusion: {}", analysis.conclusion),
        RULE.to_string(),
    ]);

    let mut text = lines.join("\n");
    text.push('\n');
    text
}

fn percent(count: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    count as f64 / total as f64 * 100.0
}

/// Groups a count with thousands separators.
fn thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
