//! tag blacklists
//!
//! A blacklist is a set of entries. An entry without spaces is a single tag. An entry with spaces
//! is a compound that only matches when every one of its tags is present. A tag set is hit when
//! any entry matches.
use {
    crate::models::TagSet,
    hashbrown::HashSet,
    serde::{Deserialize, Serialize},
};

/// a set of blacklist entries
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Blacklist(HashSet<String>);

impl Blacklist {
    /// make an empty blacklist
    pub fn new() -> Self {
        Self::default()
    }

    /// one entry per line, as stored in account settings
    pub fn from_lines(s: &str) -> Self {
        s.split('\n').collect()
    }

    /// add an entry, returning whether it was new
    pub fn insert(&mut self, entry: impl Into<String>) -> bool {
        self.0.insert(entry.into())
    }

    /// remove an entry, returning whether it was present
    pub fn remove(&mut self, entry: &str) -> bool {
        self.0.remove(entry)
    }

    /// whether the exact entry is in the blacklist
    pub fn contains(&self, entry: &str) -> bool {
        self.0.contains(entry)
    }

    /// the number of entries
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// whether there are no entries
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// iterate over the entries, in no particular order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// whether any entry matches the given tags
    pub fn intersects(&self, tags: &TagSet) -> bool {
        self.matching_entry(tags).is_some()
    }

    /// the first entry found that matches the given tags
    ///
    /// which entry is reported when several match is unspecified
    pub fn matching_entry(&self, tags: &TagSet) -> Option<&str> {
        self.iter().find(|entry| entry_matches(entry, tags))
    }
}

/// check one entry against a tag set
///
/// compound entries get doubled spaces collapsed once, then split on single spaces; every piece
/// must be present. other whitespace is left alone.
fn entry_matches(entry: &str, tags: &TagSet) -> bool {
    if entry.contains(' ')
        && entry
            .replace("  ", " ")
            .split(' ')
            .all(|tag| tags.contains(tag))
    {
        return true;
    }

    tags.contains(entry)
}

impl<S: Into<String>> FromIterator<S> for Blacklist {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<S: Into<String>> Extend<S> for Blacklist {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.0.extend(iter.into_iter().map(Into::into));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(t: &[&str]) -> TagSet {
        t.iter().map(|s| s.to_string()).collect()
    }

    fn bl(entries: &[&str]) -> Blacklist {
        entries.iter().copied().collect()
    }

    #[test]
    fn test_single_tag_entry() {
        assert!(bl(&["anthro"]).intersects(&tags(&["male", "anthro"])));
        assert!(!bl(&["feral"]).intersects(&tags(&["male", "anthro"])));
    }

    #[test]
    fn test_compound_entry_needs_every_tag() {
        let candidate = tags(&["male", "anthro"]);

        assert!(bl(&["male anthro"]).intersects(&candidate));
        assert!(!bl(&["male feral"]).intersects(&candidate));
    }

    #[test]
    fn test_any_entry_matches() {
        let list = bl(&["male feral", "gore", "anthro"]);

        assert!(list.intersects(&tags(&["male", "anthro"])));
        assert_eq!(
            list.matching_entry(&tags(&["male", "anthro"])),
            Some("anthro")
        );
        assert!(!list.intersects(&tags(&["female", "feral"])));
    }

    #[test]
    fn test_doubled_space_is_collapsed() {
        assert!(bl(&["male  anthro"]).intersects(&tags(&["male", "anthro"])));
    }

    #[test]
    fn test_other_whitespace_is_not_normalized() {
        let candidate = tags(&["male", "anthro"]);

        assert!(!bl(&[" anthro"]).intersects(&candidate));
        assert!(!bl(&["male\tanthro"]).intersects(&candidate));
        assert!(!bl(&["male   anthro"]).intersects(&candidate));
    }

    #[test]
    fn test_empty_cases() {
        assert!(!Blacklist::new().intersects(&tags(&["male"])));
        assert!(!bl(&["male"]).intersects(&TagSet::new()));
        assert!(!Blacklist::from_lines("").intersects(&tags(&["male"])));
    }

    #[test]
    fn test_from_lines() {
        let list = Blacklist::from_lines("gore\nmale feral\ngore");

        assert_eq!(list.len(), 2);
        assert!(list.contains("male feral"));
    }

    #[test]
    fn test_insert_remove() {
        let mut list = Blacklist::new();

        assert!(list.insert("gore"));
        assert!(!list.insert("gore"));
        assert!(list.remove("gore"));
        assert!(list.is_empty());
    }
}
