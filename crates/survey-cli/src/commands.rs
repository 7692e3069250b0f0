//! Non-interactive subcommands

use anyhow::Context;
use std::io::Write;
use survey_catalog::Catalog;
use survey_flow::SurveySession;
use survey_scoring::{render::render_report, ResultsReport};
use survey_store::KeyValueStore;

/// Print a results report as text or JSON
///
/// # Errors
/// Serialization or IO failure.
pub fn write_report<W: Write>(report: &ResultsReport, json: bool, out: &mut W) -> anyhow::Result<()> {
    if json {
        writeln!(out, "{}", report.to_json()?)?;
    } else {
        write!(out, "{}", render_report(report))?;
    }
    Ok(())
}

/// `results`: report of a completed survey
///
/// # Errors
/// If the survey has not been completed or the stored answers are corrupt.
pub fn results<S: KeyValueStore, W: Write>(
    session: &SurveySession<S>,
    json: bool,
    out: &mut W,
) -> anyhow::Result<()> {
    let report = session
        .results()
        .context("cannot show results (run `survey reset` to start over)")?;
    write_report(&report, json, out)
}

/// `reset`: forget the completed survey
///
/// # Errors
/// Store failure.
pub fn reset<S: KeyValueStore, W: Write>(session: &mut SurveySession<S>, out: &mut W) -> anyhow::Result<()> {
    session.reset().context("failed to clear survey state")?;
    writeln!(out, "Umfrage neu gestartet.")?;
    Ok(())
}

/// `catalog`: scales and their questions
///
/// # Errors
/// Serialization or IO failure.
pub fn catalog<W: Write>(catalog: &Catalog, json: bool, out: &mut W) -> anyhow::Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&catalog.to_document())?)?;
        return Ok(());
    }

    for group in catalog.groups() {
        let scale = group.scale;
        writeln!(
            out,
            "{} ({}–{}: {} … {})",
            scale.name, scale.min, scale.max, scale.min_label, scale.max_label
        )?;
        for question in group.questions {
            let marker = if question.reverse { " (invertiert)" } else { "" };
            writeln!(out, "  {}  {}{marker}", question.id, question.text)?;
        }
    }
    Ok(())
}
