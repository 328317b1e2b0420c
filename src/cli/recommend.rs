//! Recommend command handler.
//!
//! Scores a catalog against a preference profile and renders the ranked
//! recommendation list.

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;

use crate::config::OutputConfig;
use crate::model::PreferenceProfile;
use crate::parsers::parse_catalog;
use crate::recommend::{
    Recommendation, RecommendationEngine, ScoringLimits, SCORING_RULES_VERSION,
};
use crate::reports::{
    auto_detect_format, csv_escape, truncate, write_output, OutputTarget, ReportFormat,
};

/// Full recommend result, serialized for JSON output.
#[derive(Debug, Serialize)]
struct RecommendReport<'a> {
    rules_version: &'static str,
    profile: &'a PreferenceProfile,
    catalog_size: usize,
    inclusion_threshold: i32,
    recommendations: &'a [Recommendation<'a>],
}

/// Run the recommend command. Returns the process exit code
/// (1 when no product clears the inclusion threshold).
pub fn run_recommend(
    catalog_path: &Path,
    profile: &PreferenceProfile,
    limits: ScoringLimits,
    output: &OutputConfig,
    explain: bool,
) -> Result<i32> {
    let catalog = parse_catalog(catalog_path)
        .with_context(|| format!("loading catalog from {}", catalog_path.display()))?;

    let engine = RecommendationEngine::with_limits(limits);
    let recommendations = engine.generate(&catalog, profile);

    let report = RecommendReport {
        rules_version: SCORING_RULES_VERSION,
        profile,
        catalog_size: catalog.len(),
        inclusion_threshold: limits.inclusion_threshold,
        recommendations: &recommendations,
    };

    let target = OutputTarget::from_option(output.file.clone());
    let format = auto_detect_format(output.format, &target);

    let rendered = match format {
        ReportFormat::Json => serde_json::to_string_pretty(&report)?,
        ReportFormat::Csv => format_csv(&recommendations),
        _ => format_table(&report, profile, explain, &engine),
    };

    write_output(&rendered, &target, output.quiet)?;

    Ok(i32::from(recommendations.is_empty()))
}

/// Build a human-readable description of the profile selections.
pub(crate) fn profile_description(profile: &PreferenceProfile) -> String {
    let mut parts = Vec::new();
    if let Some(goal) = profile.goal {
        parts.push(format!("goal={goal:?}"));
    }
    if let Some(age) = profile.age {
        parts.push(format!("age={age:?}"));
    }
    if let Some(level) = profile.activity_level {
        parts.push(format!("activity={level:?}"));
    }
    if !profile.dietary_restrictions.is_empty() {
        let names: Vec<String> = profile
            .dietary_restrictions
            .iter()
            .map(|r| format!("{r:?}"))
            .collect();
        parts.push(format!("restrictions={}", names.join("+")));
    }
    if !profile.preferred_meal_times.is_empty() {
        let names: Vec<String> = profile
            .preferred_meal_times
            .iter()
            .map(|m| format!("{m:?}"))
            .collect();
        parts.push(format!("meals={}", names.join("+")));
    }
    if parts.is_empty() {
        "(no selections)".to_string()
    } else {
        parts.join(" ")
    }
}

/// Format recommendations as a table for terminal output.
fn format_table(
    report: &RecommendReport<'_>,
    profile: &PreferenceProfile,
    explain: bool,
    engine: &RecommendationEngine,
) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Recommendations for {} ({} products scored)\n\n",
        profile_description(profile),
        report.catalog_size
    ));

    if report.recommendations.is_empty() {
        out.push_str(&format!(
            "No product cleared the score threshold ({})\n",
            report.inclusion_threshold
        ));
        return out;
    }

    let name_w = report
        .recommendations
        .iter()
        .map(|r| r.product.name.len())
        .max()
        .unwrap_or(7)
        .clamp(7, 40);

    out.push_str(&format!("{:>5}  {:<name_w$}  {:>8}  REASON\n", "SCORE", "PRODUCT", "PRICE"));

    for rec in report.recommendations {
        let name = truncate(&rec.product.name, name_w);
        out.push_str(&format!(
            "{:>5}  {name:<name_w$}  {:>8.2}  {}\n",
            rec.match_score, rec.product.price, rec.reason,
        ));
        if !rec.benefits.is_empty() {
            out.push_str(&format!(
                "{:>5}  {:<name_w$}  {:>8}  benefits: {}\n",
                "", "", "",
                rec.benefits.join("; "),
            ));
        }
        if explain {
            let breakdown = engine.score(rec.product, profile);
            out.push_str(&format!(
                "{:>5}  {:<name_w$}  {:>8}  {}\n",
                "", "", "",
                breakdown.summary(),
            ));
        }
    }

    out.push_str(&format!(
        "\n{} recommendation(s), rules v{}\n",
        report.recommendations.len(),
        report.rules_version
    ));

    out
}

/// Format recommendations as CSV.
fn format_csv(recommendations: &[Recommendation<'_>]) -> String {
    let mut out = String::from("Product Id,Name,Price,Match Score,Reason,Benefits\n");
    for rec in recommendations {
        out.push_str(&format!(
            "{},{},{},{},{},{}\n",
            csv_escape(rec.product.id.value()),
            csv_escape(&rec.product.name),
            rec.product.price,
            rec.match_score,
            csv_escape(&rec.reason),
            csv_escape(&rec.benefits.join("; ")),
        ));
    }
    out
}
