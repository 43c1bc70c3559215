use sea_orm::FromJsonQueryResult;
use serde::{Deserialize, Serialize};

/// Ordered list of strings persisted as a JSON array.
///
/// Stored as JSON rather than a native `text[]` so the same schema works on SQLite.
#[derive(
    Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, FromJsonQueryResult,
)]
#[serde(transparent)]
pub struct StringList(pub Vec<String>);

impl StringList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, value: &str) -> bool {
        self.0.iter().any(|item| item == value)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }
}

impl<S: Into<String>> FromIterator<S> for StringList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl From<Vec<String>> for StringList {
    fn from(values: Vec<String>) -> Self {
        Self(values)
    }
}

impl From<StringList> for Vec<String> {
    fn from(list: StringList) -> Self {
        list.0
    }
}

#[cfg(test)]
mod tests {
    use super::StringList;

    #[test]
    fn serializes_as_a_plain_json_array() {
        let tags: StringList = ["elg", "morning"].into_iter().collect();

        let json = serde_json::to_value(&tags).expect("tags should serialize");
        assert_eq!(json, serde_json::json!(["elg", "morning"]));

        let back: StringList = serde_json::from_value(json).expect("tags should deserialize");
        assert_eq!(back, tags);
    }

    #[test]
    fn keeps_insertion_order_and_duplicates() {
        let tags: StringList = ["b", "a", "b"].into_iter().collect();

        assert_eq!(tags.len(), 3);
        assert_eq!(Vec::from(tags), vec!["b", "a", "b"]);
    }

    #[test]
    fn default_is_empty() {
        assert!(StringList::new().is_empty());
        assert!(!StringList::new().contains("anything"));
    }
}
