use clap::Args;
use export_ready::error::AppError;
use export_ready::workflows::export_check::{classify_export_readiness, ExportReadinessResponse};
use std::fmt::Write;

#[derive(Args, Debug)]
pub(crate) struct CheckArgs {
    /// Product description, e.g. "Cotton T-Shirt"
    #[arg(long)]
    pub(crate) product: String,
    /// Destination country, e.g. "UK"
    #[arg(long)]
    pub(crate) country: String,
    /// beginner, intermediate, or expert
    #[arg(long)]
    pub(crate) experience: String,
    /// Print the raw JSON response instead of a summary
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_check(args: CheckArgs) -> Result<(), AppError> {
    let response = classify_export_readiness(&args.product, &args.country, &args.experience)?;

    if args.json {
        let body = serde_json::to_string_pretty(&response).map_err(std::io::Error::from)?;
        println!("{body}");
    } else {
        print!("{}", render_summary(&response));
    }
    Ok(())
}

fn section(out: &mut String, title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    let _ = writeln!(out, "\n{title}");
    for item in items {
        let _ = writeln!(out, "  - {item}");
    }
}

pub(crate) fn render_summary(response: &ExportReadinessResponse) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Export readiness: {} -> {} ({})",
        response.product, response.country, response.experience
    );
    let _ = writeln!(
        out,
        "Category {} | risk {} | stage {} | incoterm {}",
        response.product_category,
        response.risk_level.label(),
        response.journey_stage,
        response.recommended_incoterm.label()
    );
    let _ = writeln!(out, "Risk: {}", response.risk_reason);

    let _ = writeln!(out, "\nHS code suggestions");
    for candidate in &response.hs_code_suggestions {
        let _ = writeln!(
            out,
            "  {} {}: {}",
            candidate.code,
            candidate.confidence.label(),
            candidate.description
        );
    }
    if !response.hs_note.is_empty() {
        let _ = writeln!(out, "  note: {}", response.hs_note);
    }

    section(&mut out, "Documents", &response.documents);
    section(&mut out, "Warnings", &response.warnings);
    section(&mut out, "Next steps", &response.next_steps);
    section(&mut out, "Checklist", &response.compliance_checklist);

    if !response.official_links.is_empty() {
        let _ = writeln!(out, "\nOfficial links");
        for link in &response.official_links {
            let _ = writeln!(out, "  - {}: {}", link.label, link.url);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_lists_every_section() {
        let response =
            classify_export_readiness("Cotton Shirt", "UK", "beginner").expect("valid query");
        let summary = render_summary(&response);

        assert!(summary.starts_with("Export readiness: Cotton Shirt -> UK (beginner)"));
        assert!(summary.contains("6205 MEDIUM:"));
        assert!(summary.contains("EORI Number"));
        assert!(summary.contains("Hire a freight forwarder"));
        assert!(summary.contains("https://www.gov.uk/"));
    }

    #[test]
    fn invalid_experience_is_an_error() {
        let args = CheckArgs {
            product: "Rice".to_string(),
            country: "UK".to_string(),
            experience: "guru".to_string(),
            json: true,
        };
        let err = run_check(args).expect_err("rejected");
        assert!(err.to_string().contains("guru"));
    }
}
