//! Browse command handler.
//!
//! Renders a filtered, sorted view of the catalog.

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;

use crate::browse::{browse, CatalogFilter, SortKey};
use crate::config::OutputConfig;
use crate::model::Product;
use crate::parsers::parse_catalog;
use crate::reports::{
    auto_detect_format, csv_escape, truncate, write_output, OutputTarget, ReportFormat,
};

/// Full browse result, serialized for JSON output.
#[derive(Debug, Serialize)]
struct BrowseReport<'a> {
    filter: String,
    sort: SortKey,
    catalog_size: usize,
    matches: Vec<&'a Product>,
}

/// Run the browse command. Returns the process exit code
/// (1 when no product matches the filter).
pub fn run_browse(
    catalog_path: &Path,
    filter: &CatalogFilter,
    sort: SortKey,
    output: &OutputConfig,
) -> Result<i32> {
    let catalog = parse_catalog(catalog_path)
        .with_context(|| format!("loading catalog from {}", catalog_path.display()))?;

    let view = browse(&catalog, filter, sort);

    let report = BrowseReport {
        filter: filter.description(),
        sort,
        catalog_size: catalog.len(),
        matches: view,
    };

    let target = OutputTarget::from_option(output.file.clone());
    let format = auto_detect_format(output.format, &target);

    let rendered = match format {
        ReportFormat::Json => serde_json::to_string_pretty(&report)?,
        ReportFormat::Csv => format_csv(&report.matches),
        _ => format_table(&report),
    };

    write_output(&rendered, &target, output.quiet)?;

    Ok(i32::from(report.matches.is_empty()))
}

/// Short display string for a product's flags (e.g. "VG GF OR *").
fn flags_column(product: &Product) -> String {
    let mut flags = Vec::new();
    if product.is_vegan {
        flags.push("VG");
    }
    if product.is_gluten_free {
        flags.push("GF");
    }
    if product.is_organic {
        flags.push("OR");
    }
    if product.featured {
        flags.push("*");
    }
    flags.join(" ")
}

/// Format the browse view as a table for terminal output.
fn format_table(report: &BrowseReport<'_>) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Browse: {} sorted by {} ({} of {} products)\n\n",
        report.filter,
        report.sort,
        report.matches.len(),
        report.catalog_size
    ));

    if report.matches.is_empty() {
        out.push_str("0 products matched\n");
        return out;
    }

    let name_w = report
        .matches
        .iter()
        .map(|p| p.name.len())
        .max()
        .unwrap_or(7)
        .clamp(7, 40);
    let cat_w = report
        .matches
        .iter()
        .map(|p| p.category.slug.len())
        .max()
        .unwrap_or(8)
        .clamp(8, 20);

    out.push_str(&format!(
        "{:<name_w$}  {:>8}  {:<cat_w$}  {:>8}  {:>7}  FLAGS\n",
        "PRODUCT", "PRICE", "CATEGORY", "CALORIES", "PROTEIN",
    ));

    for product in &report.matches {
        let name = truncate(&product.name, name_w);
        let category = truncate(&product.category.slug, cat_w);
        out.push_str(&format!(
            "{name:<name_w$}  {:>8.2}  {category:<cat_w$}  {:>8.0}  {:>7.1}  {}\n",
            product.price,
            product.nutrition.calories,
            product.nutrition.protein,
            flags_column(product),
        ));
    }

    out
}

/// Format the browse view as CSV.
fn format_csv(products: &[&Product]) -> String {
    let mut out = String::from(
        "Id,Name,Price,Category,Calories,Protein,Carbs,Fat,Fiber,Vegan,Gluten Free,Organic,Featured\n",
    );
    for product in products {
        let n = &product.nutrition;
        out.push_str(&format!(
            "{},{},{},{},{},{},{},{},{},{},{},{},{}\n",
            csv_escape(product.id.value()),
            csv_escape(&product.name),
            product.price,
            csv_escape(&product.category.slug),
            n.calories,
            n.protein,
            n.carbs,
            n.fat,
            n.fiber,
            product.is_vegan,
            product.is_gluten_free,
            product.is_organic,
            product.featured,
        ));
    }
    out
}
