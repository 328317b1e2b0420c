//! Compare command handler.
//!
//! Renders a side-by-side attribute comparison of up to four products.

use anyhow::{bail, Context, Result};
use serde::Serialize;
use std::path::Path;

use crate::browse::{ComparisonSet, ToggleOutcome};
use crate::config::OutputConfig;
use crate::model::{Product, ProductId};
use crate::parsers::parse_catalog;
use crate::reports::{
    auto_detect_format, csv_escape, truncate, write_output, OutputTarget, ReportFormat,
};

/// Full compare result, serialized for JSON output.
#[derive(Debug, Serialize)]
struct CompareReport<'a> {
    products: Vec<&'a Product>,
    skipped: Vec<String>,
}

/// Run the compare command.
///
/// Ids beyond the comparison-set capacity and ids not present in the catalog
/// are skipped with a warning rather than failing the command.
pub fn run_compare(catalog_path: &Path, ids: &[String], output: &OutputConfig) -> Result<i32> {
    let catalog = parse_catalog(catalog_path)
        .with_context(|| format!("loading catalog from {}", catalog_path.display()))?;

    let mut set = ComparisonSet::new();
    let mut skipped = Vec::new();

    for raw_id in ids {
        let id = ProductId::new(raw_id.as_str());
        if catalog.get(&id).is_none() {
            tracing::warn!(product_id = %id, "product not in catalog, skipping");
            skipped.push(raw_id.clone());
            continue;
        }
        match set.toggle(&id) {
            ToggleOutcome::Added => {}
            ToggleOutcome::Removed => {
                // The same id twice toggles it back out; surface that rather
                // than silently comparing fewer products.
                tracing::warn!(product_id = %id, "duplicate id removed from comparison");
                skipped.push(raw_id.clone());
            }
            ToggleOutcome::Full => {
                tracing::warn!(product_id = %id, "comparison set is full, skipping");
                skipped.push(raw_id.clone());
            }
        }
    }

    let products = set.products(&catalog);
    if products.is_empty() {
        bail!("none of the given ids are present in the catalog");
    }

    let report = CompareReport { products, skipped };

    let target = OutputTarget::from_option(output.file.clone());
    let format = auto_detect_format(output.format, &target);

    let rendered = match format {
        ReportFormat::Json => serde_json::to_string_pretty(&report)?,
        ReportFormat::Csv => format_csv(&report.products),
        _ => format_table(&report.products),
    };

    write_output(&rendered, &target, output.quiet)?;

    Ok(0)
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

/// Format the comparison as an attribute-per-row table, one column per
/// product.
fn format_table(products: &[&Product]) -> String {
    let label_w: usize = 12;
    let col_w: usize = 18;

    let mut out = String::new();

    let mut push_row = |label: &str, values: Vec<String>| {
        out.push_str(&format!("{label:<label_w$}"));
        for value in values {
            out.push_str(&format!("  {:<col_w$}", truncate(&value, col_w)));
        }
        out.push('\n');
    };

    push_row(
        "",
        products.iter().map(|p| p.name.clone()).collect(),
    );
    push_row(
        "Price",
        products.iter().map(|p| format!("{:.2}", p.price)).collect(),
    );
    push_row(
        "Category",
        products.iter().map(|p| p.category.slug.clone()).collect(),
    );
    push_row(
        "Calories",
        products
            .iter()
            .map(|p| format!("{:.0}", p.nutrition.calories))
            .collect(),
    );
    push_row(
        "Protein",
        products
            .iter()
            .map(|p| format!("{:.1} g", p.nutrition.protein))
            .collect(),
    );
    push_row(
        "Carbs",
        products
            .iter()
            .map(|p| format!("{:.1} g", p.nutrition.carbs))
            .collect(),
    );
    push_row(
        "Fat",
        products
            .iter()
            .map(|p| format!("{:.1} g", p.nutrition.fat))
            .collect(),
    );
    push_row(
        "Fiber",
        products
            .iter()
            .map(|p| format!("{:.1} g", p.nutrition.fiber))
            .collect(),
    );
    push_row(
        "Vegan",
        products.iter().map(|p| yes_no(p.is_vegan).to_string()).collect(),
    );
    push_row(
        "Gluten-free",
        products
            .iter()
            .map(|p| yes_no(p.is_gluten_free).to_string())
            .collect(),
    );
    push_row(
        "Organic",
        products
            .iter()
            .map(|p| yes_no(p.is_organic).to_string())
            .collect(),
    );
    push_row(
        "Featured",
        products.iter().map(|p| yes_no(p.featured).to_string()).collect(),
    );

    out
}

/// Format the comparison as CSV, one row per product.
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
