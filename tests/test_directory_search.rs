// ABOUTME: Integration tests for directory loading and search, including
// the file-override path used by config

use std::fs;

use bizlist::directory::{DirectoryStore, SearchFilter};
use bizlist::models::Category;
use tempfile::TempDir;

#[test]
fn test_embedded_dataset_is_well_formed() {
    let store = DirectoryStore::load_embedded().unwrap();

    assert!(store.len() >= 10);
    for business in store.all() {
        assert!(!business.id.is_empty());
        assert!(!business.name.is_empty());
        assert!((0.0..=5.0).contains(&business.rating));
    }
}

#[test]
fn test_load_from_file_override() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("custom.json");
    fs::write(
        &path,
        r#"[{
            "id": "biz-900",
            "name": "Test Tailors",
            "category": "fashion-and-beauty",
            "description": "Bespoke agbada and kaftans",
            "location": "12 Allen Avenue",
            "city": "Lagos",
            "rating": 4.0,
            "reviewCount": 7,
            "verified": false,
            "logoUrl": null,
            "bannerUrl": null
        }]"#,
    )
    .unwrap();

    let store = DirectoryStore::load_from_file(&path).unwrap();

    assert_eq!(store.len(), 1);
    let business = store.get("biz-900").unwrap();
    assert_eq!(business.category, Category::FashionAndBeauty);
    assert_eq!(business.review_count, 7);
}

#[test]
fn test_load_from_missing_file_errors() {
    let dir = TempDir::new().unwrap();
    let result = DirectoryStore::load_from_file(&dir.path().join("nope.json"));
    assert!(result.is_err());
}

#[test]
fn test_load_from_malformed_file_errors() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{not json").unwrap();

    let result = DirectoryStore::load_from_file(&path);
    assert!(result.is_err());
}

#[test]
fn test_search_ranks_by_rating_with_review_tiebreak() {
    let store = DirectoryStore::load_embedded().unwrap();
    let results = store.search(&SearchFilter::default());

    assert_eq!(results.first().map(|b| b.name.as_str()), Some("Mama Nkechi Buka"));
    for pair in results.windows(2) {
        assert!(
            pair[0].rating > pair[1].rating
                || (pair[0].rating == pair[1].rating
                    && pair[0].review_count >= pair[1].review_count)
        );
    }
}

#[test]
fn test_all_filters_compose() {
    let store = DirectoryStore::load_embedded().unwrap();
    let filter = SearchFilter {
        query: Some("kitchen".to_string()),
        category: Some(Category::FoodAndCatering),
        city: Some("lagos".to_string()),
        verified_only: true,
        min_rating: Some(4.0),
    };

    let results = store.search(&filter);

    assert!(!results.is_empty());
    for business in results {
        assert_eq!(business.category, Category::FoodAndCatering);
        assert!(business.verified);
        assert!(business.rating >= 4.0);
        assert_eq!(business.city, "Lagos");
    }
}
