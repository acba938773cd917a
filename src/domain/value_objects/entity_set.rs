use serde::{Deserialize, Serialize};

/// The four entity categories the Entity Extractor reports. Categories the
/// model leaves out deserialize as empty lists, never as missing keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntitySet {
    #[serde(default)]
    pub people: Vec<String>,
    #[serde(default)]
    pub organizations: Vec<String>,
    #[serde(default)]
    pub dates: Vec<String>,
    #[serde(default)]
    pub locations: Vec<String>,
}

impl EntitySet {
    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
            && self.organizations.is_empty()
            && self.dates.is_empty()
            && self.locations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_categories_default_to_empty() {
        let parsed: EntitySet = serde_json::from_str(r#"{"people": ["Ada Lovelace"]}"#).unwrap();

        assert_eq!(parsed.people, vec!["Ada Lovelace".to_string()]);
        assert!(parsed.organizations.is_empty());
        assert!(parsed.dates.is_empty());
        assert!(parsed.locations.is_empty());
    }

    #[test]
    fn test_default_is_empty() {
        let entities = EntitySet::default();
        assert!(entities.is_empty());
    }

    #[test]
    fn test_full_roundtrip() {
        let entities = EntitySet {
            people: vec!["Grace Hopper".to_string()],
            organizations: vec!["US Navy".to_string()],
            dates: vec!["1952".to_string()],
            locations: vec!["Arlington".to_string()],
        };

        let json = serde_json::to_string(&entities).unwrap();
        let parsed: EntitySet = serde_json::from_str(&json).unwrap();
        assert_eq!(entities, parsed);
        assert!(!parsed.is_empty());
    }
}
