// ABOUTME: Shared CLI utilities - business lookup and text formatting
//
// Lookup uses prefix matching over both the record id and the business name
// for user convenience.

use anyhow::{anyhow, Result};

use crate::directory::DirectoryStore;
use crate::models::Business;

/// Find a business by id (exact or prefix) or name prefix
///
/// Matching priority:
/// 1. Exact id match
/// 2. Id prefix match (e.g. "biz-00" when unambiguous)
/// 3. Name prefix match (case-insensitive)
///
/// Returns an error if no match is found or if multiple businesses match.
pub fn find_business<'a>(id_or_name: &str, store: &'a DirectoryStore) -> Result<&'a Business> {
    if store.is_empty() {
        return Err(anyhow!("The directory is empty."));
    }

    if let Some(business) = store.get(id_or_name) {
        return Ok(business);
    }

    let needle = id_or_name.to_lowercase();

    let id_matches: Vec<&Business> = store
        .all()
        .iter()
        .filter(|b| b.id.to_lowercase().starts_with(&needle))
        .collect();
    match id_matches.len() {
        1 => return Ok(id_matches[0]),
        n if n > 1 => {
            let ids: Vec<String> = id_matches
                .iter()
                .map(|b| format!("  {} ({})", b.id, b.name))
                .collect();
            return Err(anyhow!(
                "Ambiguous id prefix '{id_or_name}'. Matches:\n{}",
                ids.join("\n")
            ));
        }
        _ => {}
    }

    let name_matches: Vec<&Business> = store
        .all()
        .iter()
        .filter(|b| b.name.to_lowercase().starts_with(&needle))
        .collect();
    match name_matches.len() {
        1 => return Ok(name_matches[0]),
        n if n > 1 => {
            let names: Vec<String> = name_matches
                .iter()
                .map(|b| format!("  {} ({})", b.name, b.id))
                .collect();
            return Err(anyhow!(
                "Ambiguous name prefix '{id_or_name}'. Matches:\n{}",
                names.join("\n")
            ));
        }
        _ => {}
    }

    Err(anyhow!(
        "No business found matching '{id_or_name}'. Try 'bizlist search' to list what's available."
    ))
}

/// Truncate a string to fit in the given width (character-aware for UTF-8)
pub fn truncate(s: &str, max_len: usize) -> String {
    if max_len <= 3 {
        return ".".repeat(max_len);
    }
    let char_count = s.chars().count();
    if char_count <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{truncated}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> DirectoryStore {
        DirectoryStore::load_embedded().unwrap()
    }

    #[test]
    fn test_find_by_exact_id() {
        let store = store();
        let business = find_business("biz-001", &store).unwrap();
        assert_eq!(business.name, "Ada's Kitchen");
    }

    #[test]
    fn test_find_by_name_prefix_case_insensitive() {
        let store = store();
        let business = find_business("swiftdrop", &store).unwrap();
        assert_eq!(business.id, "biz-003");
    }

    #[test]
    fn test_ambiguous_id_prefix() {
        let store = store();
        let result = find_business("biz-0", &store);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Ambiguous"));
    }

    #[test]
    fn test_not_found() {
        let store = store();
        let result = find_business("nonexistent", &store);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("No business found"));
    }

    #[test]
    fn test_truncate_short_string() {
        assert_eq!(truncate("hello", 10), "hello");
    }

    #[test]
    fn test_truncate_long_string() {
        assert_eq!(truncate("hello world", 8), "hello...");
    }

    #[test]
    fn test_truncate_exact_length() {
        assert_eq!(truncate("hello", 5), "hello");
    }
}
