use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Lines keyed by name, each with its stations in travel order
///
/// Key order is whatever the service sent; it is never sorted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineCatalog {
    lines: IndexMap<String, Vec<String>>,
}

impl LineCatalog {
    #[must_use]
    pub fn new(lines: IndexMap<String, Vec<String>>) -> Self {
        Self { lines }
    }

    pub fn line_names(&self) -> impl Iterator<Item = &str> {
        self.lines.keys().map(String::as_str)
    }

    #[must_use]
    pub fn stations_of(&self, line: &str) -> Option<&[String]> {
        self.lines.get(line).map(Vec::as_slice)
    }

    #[must_use]
    pub fn contains_line(&self, line: &str) -> bool {
        self.lines.contains_key(line)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl FromIterator<(String, Vec<String>)> for LineCatalog {
    fn from_iter<I: IntoIterator<Item = (String, Vec<String>)>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preserves_response_key_order() {
        let json = r#"{
            "MRT Blue Line": ["Tha Phra", "Hua Lamphong"],
            "BTS Sukhumvit Line": ["Mo Chit", "Siam", "Asok"],
            "Airport Rail Link": ["Phaya Thai", "Suvarnabhumi"]
        }"#;
        let catalog: LineCatalog = serde_json::from_str(json).expect("should parse");

        let names: Vec<&str> = catalog.line_names().collect();
        assert_eq!(names, vec!["MRT Blue Line", "BTS Sukhumvit Line", "Airport Rail Link"]);
    }

    #[test]
    fn test_stations_of_unknown_line() {
        let catalog: LineCatalog =
            [("Gold Line".to_string(), vec!["Krung Thon Buri".to_string()])].into_iter().collect();

        assert_eq!(catalog.stations_of("Gold Line").map(<[String]>::len), Some(1));
        assert!(catalog.stations_of("Grey Line").is_none());
    }
}
