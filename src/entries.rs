//! Static location table
//! Populated once on first access and never mutated afterwards

use std::sync::LazyLock;

use crate::models::Entry;

/// All known entries, in lookup order
pub static ENTRIES: LazyLock<Vec<Entry>> = LazyLock::new(|| {
    vec![
        Entry::new("US-NYC", "New York", "USA"),
        Entry::new("GB-LON", "London", "UK"),
        Entry::new("FR-PAR", "Paris", "France"),
        Entry::new("US-LAX", "Los Angeles", "USA"),
        // Two distinct ids sharing a city name
        Entry::new("DE-HAM", "Hamburg", "Germany"),
        Entry::new("DE-HRB", "Hamburg", "Germany"),
    ]
});

/// Find the entry whose id matches exactly (case-sensitive)
pub fn find_entry<'a>(entries: &'a [Entry], id: &str) -> Option<&'a Entry> {
    entries.iter().find(|e| e.id == id)
}

/// All entries whose name or country contains `query`, ignoring case
pub fn search_entries<'a>(entries: &'a [Entry], query: &str) -> Vec<&'a Entry> {
    let needle = query.to_lowercase();
    entries
        .iter()
        .filter(|e| {
            e.name.to_lowercase().contains(&needle) || e.country.to_lowercase().contains(&needle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique() {
        let ids: HashSet<&str> = ENTRIES.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids.len(), ENTRIES.len());
    }

    #[test]
    fn test_find_entry() {
        let entry = find_entry(&ENTRIES, "FR-PAR").unwrap();
        assert_eq!(entry.name, "Paris");
        assert_eq!(entry.country, "France");
    }

    #[test]
    fn test_find_entry_is_case_sensitive() {
        assert!(find_entry(&ENTRIES, "fr-par").is_none());
        assert!(find_entry(&ENTRIES, "XX-XXX").is_none());
    }

    #[test]
    fn test_search_matches_name_or_country() {
        let ids: Vec<&str> = search_entries(&ENTRIES, "usa").iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["US-NYC", "US-LAX"]);

        let ids: Vec<&str> = search_entries(&ENTRIES, "HAMBURG").iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["DE-HAM", "DE-HRB"]);
    }

    #[test]
    fn test_search_partitions_table() {
        for query in ["an", "o", "Lon", "ger", "zzz"] {
            let hits = search_entries(&ENTRIES, query);
            let needle = query.to_lowercase();
            for entry in ENTRIES.iter() {
                let matches = entry.name.to_lowercase().contains(&needle)
                    || entry.country.to_lowercase().contains(&needle);
                assert_eq!(hits.contains(&entry), matches, "query {:?}, entry {}", query, entry.id);
            }
        }
    }

    #[test]
    fn test_search_no_match() {
        assert!(search_entries(&ENTRIES, "Atlantis").is_empty());
    }
}
