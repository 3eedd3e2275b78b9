// ABOUTME: Static business directory - dataset loading and linear search
// The dataset is embedded at build time and can be overridden by a file path
// from config; search is a straight filter over the in-memory records

#![allow(dead_code)]

use std::fs;
use std::path::Path;

use thiserror::Error;
use tracing::{debug, info};

use crate::models::{Business, Category};

/// The dataset shipped with the binary
const EMBEDDED_DATASET: &str = include_str!("../../data/businesses.json");

#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("Failed to read dataset from {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to parse dataset: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Search criteria for the browse view and the `search` CLI command.
/// Every populated field narrows the result set; an empty filter matches all.
#[derive(Debug, Clone, Default)]
pub struct SearchFilter {
    /// Case-insensitive substring match over name, description and location
    pub query: Option<String>,
    pub category: Option<Category>,
    /// Case-insensitive exact city match
    pub city: Option<String>,
    pub verified_only: bool,
    pub min_rating: Option<f64>,
}

impl SearchFilter {
    pub fn is_empty(&self) -> bool {
        self.query.is_none()
            && self.category.is_none()
            && self.city.is_none()
            && !self.verified_only
            && self.min_rating.is_none()
    }

    fn matches(&self, business: &Business) -> bool {
        if let Some(ref query) = self.query {
            let needle = query.to_lowercase();
            if !needle.is_empty() {
                let hit = business.name.to_lowercase().contains(&needle)
                    || business.description.to_lowercase().contains(&needle)
                    || business.location.to_lowercase().contains(&needle);
                if !hit {
                    return false;
                }
            }
        }

        if let Some(category) = self.category {
            if business.category != category {
                return false;
            }
        }

        if let Some(ref city) = self.city {
            if !business.city.eq_ignore_ascii_case(city) {
                return false;
            }
        }

        if self.verified_only && !business.verified {
            return false;
        }

        if let Some(min_rating) = self.min_rating {
            if business.rating < min_rating {
                return false;
            }
        }

        true
    }
}

/// In-memory directory of businesses
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    businesses: Vec<Business>,
}

impl DirectoryStore {
    /// Load the dataset embedded in the binary
    pub fn load_embedded() -> Result<Self, DirectoryError> {
        let businesses: Vec<Business> = serde_json::from_str(EMBEDDED_DATASET)?;
        info!(count = businesses.len(), "loaded embedded business dataset");
        Ok(Self { businesses })
    }

    /// Load a dataset from a JSON file (config override)
    pub fn load_from_file(path: &Path) -> Result<Self, DirectoryError> {
        let content = fs::read_to_string(path).map_err(|source| DirectoryError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let businesses: Vec<Business> = serde_json::from_str(&content)?;
        info!(count = businesses.len(), path = %path.display(), "loaded business dataset");
        Ok(Self { businesses })
    }

    pub fn len(&self) -> usize {
        self.businesses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.businesses.is_empty()
    }

    pub fn all(&self) -> &[Business] {
        &self.businesses
    }

    pub fn get(&self, id: &str) -> Option<&Business> {
        self.businesses.iter().find(|b| b.id == id)
    }

    /// Linear filter over the records, sorted by rating descending with
    /// review count breaking ties
    pub fn search(&self, filter: &SearchFilter) -> Vec<&Business> {
        let mut results: Vec<&Business> =
            self.businesses.iter().filter(|b| filter.matches(b)).collect();

        results.sort_by(|a, b| {
            b.rating
                .partial_cmp(&a.rating)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| b.review_count.cmp(&a.review_count))
        });

        debug!(matched = results.len(), total = self.businesses.len(), "directory search");
        results
    }

    /// Distinct cities present in the dataset, for filter pickers
    pub fn cities(&self) -> Vec<String> {
        let mut cities: Vec<String> =
            self.businesses.iter().map(|b| b.city.clone()).collect();
        cities.sort();
        cities.dedup();
        cities
    }
}
