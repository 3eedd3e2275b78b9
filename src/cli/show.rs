// ABOUTME: CLI show command - print the full record for one business

use anyhow::Result;

use super::util::find_business;
use super::{OutputFormat, ShowArgs};
use crate::config::AppConfig;
use crate::directory::DirectoryStore;
use crate::models::Business;

/// Execute the show command
pub fn execute(args: ShowArgs, format: OutputFormat) -> Result<()> {
    let config = AppConfig::load()?;
    let store = match config.directory.dataset_path {
        Some(ref path) => DirectoryStore::load_from_file(path)?,
        None => DirectoryStore::load_embedded()?,
    };

    let business = find_business(&args.business, &store)?;

    match format {
        OutputFormat::Json => output_json(business)?,
        OutputFormat::Text => output_text(business),
    }

    Ok(())
}

fn output_json(business: &Business) -> Result<()> {
    let json = serde_json::to_string_pretty(business)?;
    println!("{json}");
    Ok(())
}

fn output_text(business: &Business) {
    let badge = if business.verified { "  \u{2713} verified" } else { "" };
    println!("{} ({}){badge}", business.name, business.id);
    println!("  Category:  {}", business.category.label());
    println!("  Location:  {}, {}", business.location, business.city);
    println!(
        "  Rating:    {:.1} from {} reviews",
        business.rating, business.review_count
    );
    println!();
    println!("  {}", business.description);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    #[test]
    fn test_show_finds_embedded_business() {
        let store = DirectoryStore::load_embedded().unwrap();
        let business = find_business("biz-001", &store).unwrap();
        assert_eq!(business.category, Category::FoodAndCatering);
    }

    #[test]
    fn test_business_json_uses_camel_case_keys() {
        let store = DirectoryStore::load_embedded().unwrap();
        let business = find_business("biz-001", &store).unwrap();
        let json = serde_json::to_value(business).unwrap();
        assert!(json.get("reviewCount").is_some());
        assert!(json.get("review_count").is_none());
    }
}
