use std::collections::{BTreeMap, BTreeSet};

use log::debug;

use crate::*;

/// Station id → city name, built from the `ville` statements of a dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StationIndex {
    cities: BTreeMap<String, String>,
}

impl StationIndex {
    pub fn from_statements(statements: &[Statement]) -> StationIndex {
        let mut cities = BTreeMap::new();

        for s in statements {
            if s.key() == Key::Ville {
                // last one wins
                if let Some(previous) = cities.insert(s.station_id().to_owned(), s.object.clone()) {
                    debug!("Station {} renamed from {previous} to {}", s.station_id(), s.object);
                }
            }
        }

        StationIndex { cities }
    }

    pub fn city(&self, station_id: &str) -> Option<&str> {
        self.cities.get(station_id).map(String::as_str)
    }

    /// First station, by id, whose city is exactly `city`.
    pub fn station_for_city(&self, city: &str) -> Option<&str> {
        self.cities
            .iter()
            .find(|(_, c)| c.as_str() == city)
            .map(|(id, _)| id.as_str())
    }

    /// Selectable cities, sorted and de-duplicated.
    pub fn cities(&self) -> Vec<&str> {
        let set: BTreeSet<&str> = self.cities.values().map(String::as_str).collect();
        set.into_iter().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.cities.iter().map(|(id, city)| (id.as_str(), city.as_str()))
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }
}

pub fn build_station_city_index(raw: &str) -> Result<StationIndex, DatasetError> {
    let statements = parse_statements(raw)?;
    Ok(StationIndex::from_statements(&statements))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EX: &str = "http://example.org/weather#";

    fn st(station: &str, key: &str, object: &str) -> Statement {
        Statement::new(
            format!("http://example.org/weather/station/{station}"),
            format!("{EX}{key}"),
            object,
        )
    }

    #[test]
    fn indexes_ville_statements_only() {
        let statements = vec![
            st("07149", "ville", "Paris"),
            st("07149", "temperature", "290.15"),
            st("07481", "ville", "Lyon"),
            st("07690", "dateTime", "20240815120000"),
        ];

        let index = StationIndex::from_statements(&statements);

        assert_eq!(index.len(), 2);
        assert_eq!(index.city("07149"), Some("Paris"));
        assert_eq!(index.city("07481"), Some("Lyon"));
        assert_eq!(index.city("07690"), None);
    }

    #[test]
    fn duplicate_ville_last_wins() {
        let statements = vec![
            st("07149", "ville", "Paris-Orly"),
            st("07149", "ville", "Paris"),
        ];
        let index = StationIndex::from_statements(&statements);
        assert_eq!(index.city("07149"), Some("Paris"));
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn idempotent() {
        let statements = vec![
            st("07149", "ville", "Paris"),
            st("07481", "ville", "Lyon"),
            st("07149", "ville", "Paris"),
        ];
        assert_eq!(
            StationIndex::from_statements(&statements),
            StationIndex::from_statements(&statements)
        );
    }

    #[test]
    fn city_lookups() {
        let statements = vec![
            st("07650", "ville", "Marseille"),
            st("07649", "ville", "Marseille"),
            st("07149", "ville", "Paris"),
        ];
        let index = StationIndex::from_statements(&statements);

        assert_eq!(index.station_for_city("Marseille"), Some("07649"));
        assert_eq!(index.station_for_city("Paris"), Some("07149"));
        assert_eq!(index.station_for_city("paris"), None);
        assert_eq!(index.cities(), vec!["Marseille", "Paris"]);
        assert_eq!(
            index.iter().collect::<Vec<_>>(),
            vec![("07149", "Paris"), ("07649", "Marseille"), ("07650", "Marseille")]
        );
    }

    #[test]
    fn from_turtle() {
        let doc = r#"
@prefix ex: <http://example.org/weather#> .
<http://example.org/weather/station/07149> ex:ville "Paris" .
<http://example.org/weather/station/07481> ex:ville "Lyon" ; ex:wind "3.1" .
"#;
        let index = build_station_city_index(doc).unwrap();
        assert_eq!(index.cities(), vec!["Lyon", "Paris"]);
        assert!(build_station_city_index("not turtle at all").is_err());
    }
}
