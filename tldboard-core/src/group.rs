// Partitioning of user records by website TLD

use crate::record::{UserRecord, json_type_name};
use crate::tld::extract_tld;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Records sharing one TLD, in input order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TldGroup {
    pub tld: String,
    pub users: Vec<UserRecord>,
}

/// Mapping from TLD to its records.
///
/// Keys keep first-seen order, and so do the records under each key. The
/// empty key never appears: records without a classifiable website are
/// dropped and only counted in [`TldGroups::unclassified`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TldGroups {
    groups: Vec<TldGroup>,
    #[serde(skip)]
    index: HashMap<String, usize>,
    unclassified: usize,
}

impl TldGroups {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, tld: String, user: UserRecord) {
        match self.index.get(&tld) {
            Some(&position) => self.groups[position].users.push(user),
            None => {
                self.index.insert(tld.clone(), self.groups.len());
                self.groups.push(TldGroup {
                    tld,
                    users: vec![user],
                });
            }
        }
    }

    /// Number of distinct TLDs.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn get(&self, tld: &str) -> Option<&[UserRecord]> {
        self.index
            .get(tld)
            .map(|&position| self.groups[position].users.as_slice())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|group| group.tld.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &TldGroup> {
        self.groups.iter()
    }

    /// Records placed in some group.
    pub fn total_records(&self) -> usize {
        self.groups.iter().map(|group| group.users.len()).sum()
    }

    /// Records dropped because their TLD came out empty.
    pub fn unclassified(&self) -> usize {
        self.unclassified
    }
}

impl<'a> IntoIterator for &'a TldGroups {
    type Item = &'a TldGroup;
    type IntoIter = std::slice::Iter<'a, TldGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

/// Group a fetched payload by TLD.
///
/// Anything other than a JSON array yields an empty mapping.
pub fn group_by_tld(payload: &Value) -> TldGroups {
    let Some(items) = payload.as_array() else {
        warn!(
            "Expected an array of users, got {}; nothing to group",
            json_type_name(payload)
        );
        return TldGroups::new();
    };

    let records: Vec<UserRecord> = items.iter().cloned().map(UserRecord::new).collect();
    group_records(&records)
}

/// Group already wrapped records by TLD.
pub fn group_records(users: &[UserRecord]) -> TldGroups {
    let mut groups = TldGroups::new();

    for (position, user) in users.iter().enumerate() {
        let tld = extract_tld(user.website());
        if tld.is_empty() {
            debug!("Dropping user #{} without a classifiable website", position);
            groups.unclassified += 1;
            continue;
        }
        groups.push(tld, user.clone());
    }

    debug!(
        "Grouped {} of {} users into {} TLDs",
        groups.total_records(),
        users.len(),
        groups.len()
    );
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unclassified_counted_not_grouped() {
        let groups = group_by_tld(&json!([
            { "name": "A", "website": "a.com" },
            { "name": "B", "website": "" },
            { "name": "C" },
            { "name": "D", "website": 42 },
        ]));

        assert_eq!(groups.len(), 1);
        assert_eq!(groups.total_records(), 1);
        assert_eq!(groups.unclassified(), 3);
        assert!(groups.get("").is_none());
    }

    #[test]
    fn test_non_array_payload() {
        assert!(group_by_tld(&Value::Null).is_empty());
        assert!(group_by_tld(&json!({ "users": [] })).is_empty());
        assert!(group_by_tld(&json!("com")).is_empty());
    }

    #[test]
    fn test_keys_in_first_seen_order() {
        let groups = group_by_tld(&json!([
            { "website": "b.org" },
            { "website": "a.com" },
            { "website": "c.org" },
            { "website": "d.net" },
        ]));

        assert_eq!(groups.keys().collect::<Vec<_>>(), vec!["org", "com", "net"]);
    }
}
