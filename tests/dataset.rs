use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};
use wxttl::*;

fn dataset() -> Dataset {
    Dataset::load(Path::new(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/data/weather-data.ttl"
    )))
    .unwrap()
}

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 8, d).unwrap()
}

fn at(d: u32, h: u32) -> NaiveDateTime {
    day(d).and_hms_opt(h, 0, 0).unwrap()
}

#[test]
fn index_lists_every_city() {
    let dataset = dataset();

    assert_eq!(dataset.index().cities(), vec!["Lyon", "Marseille", "Paris"]);
    assert_eq!(dataset.index().len(), 3);
    assert_eq!(dataset.index().station_for_city("Paris"), Some("07149"));
    assert_eq!(dataset.index().city("07650"), Some("Marseille"));
}

#[test]
fn paris_day() {
    let report = dataset()
        .query(&WeatherQuery::new("Paris", day(15)), &DateWindow::default())
        .unwrap();

    assert_eq!(report.station_id, "07149");
    assert_eq!(
        report.observations.iter().map(|ob| ob.date_time).collect::<Vec<_>>(),
        vec![at(15, 0), at(15, 3), at(15, 6)]
    );
    for ob in &report.observations {
        assert_eq!(ob.station_id, "07149");
        assert_eq!(ob.city, "Paris");
        assert_eq!(ob.date_time.date(), day(15));
    }

    let obs = &report.observations;
    assert!((obs[0].value(Field::Temperature).unwrap() - 18.2).abs() < 0.01);
    assert_eq!(obs[1].value(Field::Temperature), None);
    assert_eq!(obs[1].value(Field::Humidity), Some(85.));
    assert!((obs[2].value(Field::Max).unwrap() - 24.).abs() < 0.01);
    assert_eq!(obs[2].extra.get("rain").map(String::as_str), Some("0.2"));
}

#[test]
fn gaps_are_estimated_from_neighbours() {
    let report = dataset()
        .query(&WeatherQuery::new("Paris", day(15)), &DateWindow::default())
        .unwrap();

    let temp = approximate(&report.observations, 1, Field::Temperature).unwrap();
    assert!((temp - 17.55).abs() < 0.01);
    assert!(matches!(
        reading(&report.observations, 1, Field::Temperature),
        Reading::Approximated(_)
    ));
    assert!(matches!(
        reading(&report.observations, 0, Field::Temperature),
        Reading::Measured(_)
    ));

    let card = WeatherCard::new(&report, UnitPreferences::default())
        .select(1)
        .to_string();
    assert!(card.starts_with("Météo aujourd'hui à Paris\n"));
    assert!(card.contains("> 03:00  ~17.55 °C\n"));
    assert!(card.contains("Pression        1013.90 hPa\n"));
}

#[test]
fn whole_dataset_without_filters() {
    let text = std::fs::read_to_string(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/data/weather-data.ttl"
    ))
    .unwrap();

    let all = extract_observations(&text, None, None).unwrap();
    assert_eq!(all.len(), 5);
    assert_eq!(all[0].date_time, at(16, 0));
    assert_eq!(all[4].station_id, "07481");
    assert!((all[4].value(Field::Temperature).unwrap() - 20.).abs() < 0.01);
}

#[test]
fn query_failures() {
    let dataset = dataset();
    let window = DateWindow::default();

    let err = dataset
        .query(&WeatherQuery::new("Marseille", day(15)), &window)
        .unwrap_err();
    assert!(matches!(err, QueryError::NoData { .. }));

    let err = dataset
        .query(&WeatherQuery::new("Brest", day(15)), &window)
        .unwrap_err();
    assert!(matches!(err, QueryError::StationNotFound { .. }));
    assert_eq!(err.to_string(), "Station non trouvée pour cette ville.");

    let err = dataset
        .query(
            &WeatherQuery::new("Paris", NaiveDate::from_ymd_opt(2024, 12, 1).unwrap()),
            &window,
        )
        .unwrap_err();
    assert!(matches!(err, QueryError::DateOutOfRange { .. }));
}

#[test]
fn missing_file() {
    let err = Dataset::load(Path::new("/nonexistent/weather-data.ttl")).unwrap_err();
    assert!(matches!(err, DatasetError::Io { .. }));
    assert_eq!(
        QueryError::from(err).to_string(),
        "Une erreur est survenue lors de la recherche des données météo."
    );
}
