use std::{
    fmt,
    str::FromStr,
};

use serde::{
    Deserialize,
    Deserializer,
    Serialize,
    Serializer,
};

/// An ID for a resource.
///
/// IDs are normalized names: lowercase ASCII alphanumeric characters only. Two names that differ
/// only in case, spacing, or punctuation produce the same ID, so "Mr. Mime" and "mrmime" refer to
/// the same species.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id(String);

impl Id {
    /// Is the ID empty?
    ///
    /// Names consisting only of ignored characters normalize to the empty ID.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.0)
    }
}

impl AsRef<str> for Id {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for Id {
    fn from(value: String) -> Self {
        normalize_id(&value)
    }
}

impl From<&str> for Id {
    fn from(value: &str) -> Self {
        normalize_id(value)
    }
}

impl FromStr for Id {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Id::from(s))
    }
}

impl Serialize for Id {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Id {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Source tables key the same resource by display names and by ids interchangeably.
        String::deserialize(deserializer).map(Id::from)
    }
}

fn normalize_id(name: &str) -> Id {
    Id(name
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect())
}

#[cfg(test)]
mod id_test {
    use crate::Id;

    fn assert_normalize_id(input: &str, output: &str) {
        assert_eq!(Id::from(input).as_ref(), output);
    }

    #[test]
    fn removes_non_alphanumeric_characters() {
        assert_normalize_id("Bulbasaur", "bulbasaur");
        assert_normalize_id("CHARMANDER", "charmander");
        assert_normalize_id("Mr. Mime", "mrmime");
        assert_normalize_id("Farfetch'd", "farfetchd");
        assert_normalize_id("Route 119", "route119");
    }

    #[test]
    fn empty_names_produce_empty_id() {
        assert!(Id::from("").is_empty());
        assert!(Id::from("??").is_empty());
        assert!(!Id::from("a").is_empty());
    }

    #[test]
    fn deserializes_normalized() {
        let id: Id = serde_json::from_str(r#""Thunder Stone""#).unwrap();
        assert_eq!(id, Id::from("thunderstone"));
    }
}
