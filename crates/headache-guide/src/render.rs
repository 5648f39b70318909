use std::fmt::Write as _;

use headache_core::remedies::RemedyKind;
use headache_core::DiagnosisResult;

use crate::config::OutputFormat;
use crate::error::AppError;

pub fn render(result: &DiagnosisResult, format: OutputFormat) -> Result<String, AppError> {
    match format {
        OutputFormat::Text => Ok(render_text(result)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
    }
}

pub fn render_text(result: &DiagnosisResult) -> String {
    let mut out = String::new();

    if result.is_emergency() {
        let _ = writeln!(out, "!! {} !!", result.primary_cause.label().to_uppercase());
        if !result.red_flags.is_empty() {
            out.push_str("\nYou reported:\n");
            for flag in &result.red_flags {
                let _ = writeln!(out, "  - {flag}");
            }
        }
        out.push('\n');
        for line in &result.reasoning {
            let _ = writeln!(out, "{line}");
        }
        let _ = write!(out, "\n{}\n", result.disclaimer);
        return out;
    }

    let _ = writeln!(
        out,
        "{} ({}% confidence)",
        result.primary_cause.label(),
        result.confidence
    );
    let _ = writeln!(out, "{}", result.primary_cause.description());

    if !result.secondary_causes.is_empty() {
        out.push_str("\nAlso possible:\n");
        for s in &result.secondary_causes {
            let _ = writeln!(out, "  - {} ({}%)", s.cause.label(), s.confidence);
        }
    }

    out.push('\n');
    for line in &result.reasoning {
        let _ = writeln!(out, "{line}");
    }

    if !result.remedies.is_empty() {
        out.push_str("\nWhat you can try:\n");
    }
    for (i, remedy) in result.remedies.iter().enumerate() {
        let _ = writeln!(
            out,
            "\n{}. {} [{}, {}]",
            i + 1,
            remedy.title,
            kind_label(remedy.kind),
            remedy.time_to_effect
        );
        let _ = writeln!(out, "   {}", remedy.description);
        for (n, step) in remedy.steps.iter().enumerate() {
            let _ = writeln!(out, "   {}) {step}", n + 1);
        }
        for warning in remedy.warnings {
            let _ = writeln!(out, "   Caution: {warning}");
        }
    }

    let _ = write!(out, "\n{}\n", result.disclaimer);
    out
}

fn kind_label(kind: RemedyKind) -> &'static str {
    match kind {
        RemedyKind::Immediate => "right now",
        RemedyKind::ShortTerm => "today",
        RemedyKind::Preventive => "prevention",
    }
}
