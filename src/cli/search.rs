// ABOUTME: CLI search command - query the directory from the shell
//
// Searches the embedded dataset (or a config-supplied one) and prints a
// table or JSON, sorted by rating.

use anyhow::{anyhow, Result};
use serde::Serialize;

use super::util::truncate;
use super::{OutputFormat, SearchArgs};
use crate::config::AppConfig;
use crate::directory::{DirectoryStore, SearchFilter};
use crate::models::{Business, Category};

/// A search hit shaped for output
#[derive(Debug, Clone, Serialize)]
pub struct SearchHit {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub city: String,
    pub rating: f64,
    pub review_count: u32,
    pub verified: bool,
}

impl SearchHit {
    fn from_business(business: &Business) -> Self {
        Self {
            id: business.id.clone(),
            name: business.name.clone(),
            category: business.category,
            city: business.city.clone(),
            rating: business.rating,
            review_count: business.review_count,
            verified: business.verified,
        }
    }
}

/// Execute the search command
pub fn execute(args: SearchArgs, format: OutputFormat) -> Result<()> {
    let config = AppConfig::load()?;
    let store = match config.directory.dataset_path {
        Some(ref path) => DirectoryStore::load_from_file(path)?,
        None => DirectoryStore::load_embedded()?,
    };

    let hits = search_directory(&args, &store)?;

    match format {
        OutputFormat::Json => output_json(&hits)?,
        OutputFormat::Text => output_text(&hits),
    }

    Ok(())
}

/// Run the search against a given store (testable version)
pub fn search_directory(args: &SearchArgs, store: &DirectoryStore) -> Result<Vec<SearchHit>> {
    let category = match args.category {
        Some(ref slug) => Some(
            Category::from_slug(slug)
                .ok_or_else(|| anyhow!("Unknown category '{slug}'. Known: {}", known_slugs()))?,
        ),
        None => None,
    };

    let filter = SearchFilter {
        query: args.query.clone(),
        category,
        city: args.city.clone(),
        verified_only: args.verified,
        min_rating: args.min_rating,
    };

    Ok(store
        .search(&filter)
        .into_iter()
        .take(args.limit)
        .map(SearchHit::from_business)
        .collect())
}

fn known_slugs() -> String {
    Category::all()
        .iter()
        .map(|c| c.slug())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Output hits as JSON
fn output_json(hits: &[SearchHit]) -> Result<()> {
    let json = serde_json::to_string_pretty(hits)?;
    println!("{json}");
    Ok(())
}

/// Output hits as a text table
fn output_text(hits: &[SearchHit]) {
    if hits.is_empty() {
        println!("No businesses found.");
        return;
    }

    println!(
        "{:<8} {:<28} {:<22} {:<15} {:<12} VERIFIED",
        "ID", "NAME", "CATEGORY", "CITY", "RATING"
    );
    let separator = "-".repeat(95);
    println!("{separator}");

    for hit in hits {
        let name = truncate(&hit.name, 28);
        let rating = format!("{:.1} ({})", hit.rating, hit.review_count);
        println!(
            "{:<8} {:<28} {:<22} {:<15} {:<12} {}",
            hit.id,
            name,
            hit.category.slug(),
            hit.city,
            rating,
            if hit.verified { "\u{2713}" } else { "" }
        );
    }
}
