//! Single pass over the statement stream that groups readings by station and
//! timestamp, keeping only one station and one calendar day.
//!
//! Readings are attached to the most recently created observation of their
//! station, so the dataset is expected to list each `dateTime` before the
//! values measured at that time. A value that arrives before any accepted
//! `dateTime` of its station is dropped.

use chrono::NaiveDate;
#[allow(unused)]
use log::{debug, error, info, trace, warn};

use crate::*;

#[derive(Debug)]
pub struct Extractor<'a> {
    station_id: Option<&'a str>,
    date: Option<NaiveDate>,
    // in order of each station's first accepted observation
    stations: Vec<(String, Vec<WeatherObservation>)>,
}

impl<'a> Extractor<'a> {
    pub fn new(station_id: Option<&'a str>, date: Option<NaiveDate>) -> Extractor<'a> {
        Extractor {
            station_id,
            date,
            stations: Vec::new(),
        }
    }

    pub fn push(&mut self, statement: &Statement) {
        let station_id = statement.station_id();

        if let Some(target) = self.station_id {
            if station_id != target {
                return;
            }
        }

        match statement.key() {
            Key::DateTime => self.open_observation(station_id, &statement.object),
            key => self.attach(station_id, key, &statement.object),
        }
    }

    pub fn finish(self) -> Vec<WeatherObservation> {
        self.stations
            .into_iter()
            .flat_map(|(_, observations)| observations)
            .map(|mut ob| {
                if ob.city.is_empty() {
                    ob.city = UNKNOWN_CITY.to_owned();
                }
                ob
            })
            .collect()
    }

    fn open_observation(&mut self, station_id: &str, literal: &str) {
        let date_time = match decode_packed_timestamp(literal) {
            Ok(dt) => dt,
            Err(e) => {
                warn!("Skipping dateTime of station {station_id}: {e}");
                return;
            }
        };

        if let Some(date) = self.date {
            if date_time.date() != date {
                trace!("Station {station_id}: {date_time} is not on {date}");
                return;
            }
        }

        let observations = self.observations_mut(station_id);

        if !observations.iter().any(|ob| ob.date_time == date_time) {
            observations.push(WeatherObservation::new(station_id, date_time));
        }
    }

    fn attach(&mut self, station_id: &str, key: Key, object: &str) {
        let Some(latest) = self.latest_mut(station_id) else {
            trace!("Dropping {key} of station {station_id}: no observation yet");
            return;
        };

        let value = strip_literal(object);

        if let Some(field) = Field::from_key(&key) {
            match value.parse::<f32>() {
                Ok(raw) if raw.is_finite() => latest.set_from_source(field, raw),
                _ => {
                    warn!("Station {station_id}: {key} value {value:?} is not a number");
                    clear(latest, field);
                }
            }
            return;
        }

        match key {
            Key::Ville => latest.city = value.to_owned(),
            Key::Other(name) => {
                warn!("Unhandled key \"{name}\" for station {station_id}");
                latest.extra.insert(name, value.to_owned());
            }
            // numeric keys were handled above and dateTime never reaches here
            _ => {}
        }
    }

    fn observations_mut(&mut self, station_id: &str) -> &mut Vec<WeatherObservation> {
        let pos = match self.stations.iter().position(|(id, _)| id == station_id) {
            Some(pos) => pos,
            None => {
                self.stations.push((station_id.to_owned(), Vec::new()));
                self.stations.len() - 1
            }
        };
        &mut self.stations[pos].1
    }

    fn latest_mut(&mut self, station_id: &str) -> Option<&mut WeatherObservation> {
        self.stations
            .iter_mut()
            .find(|(id, _)| id == station_id)
            .and_then(|(_, observations)| observations.last_mut())
    }
}

fn clear(ob: &mut WeatherObservation, field: Field) {
    match field {
        Field::Temperature => ob.temperature = None,
        Field::Max => ob.max = None,
        Field::Min => ob.min = None,
        Field::DewPoint => ob.dew_point = None,
        Field::Humidity => ob.humidity = None,
        Field::Pressure => ob.pressure = None,
        Field::Visibility => ob.visibility = None,
        Field::Wind => ob.wind = None,
    }
}

pub fn extract_from_statements(
    statements: &[Statement],
    station_id: Option<&str>,
    date: Option<NaiveDate>,
) -> Vec<WeatherObservation> {
    let mut extractor = Extractor::new(station_id, date);
    for s in statements {
        extractor.push(s);
    }
    let observations = extractor.finish();

    debug!(
        "Extracted {} observations (station {}, date {})",
        observations.len(),
        station_id.unwrap_or("*"),
        date.map(|d| d.to_string()).unwrap_or_else(|| "*".into())
    );

    observations
}

/// Observations of `station_id` on `date`, in dataset order. An empty result
/// means no data for that selection; only a malformed document is an error.
pub fn extract_observations(
    raw: &str,
    station_id: Option<&str>,
    date: Option<NaiveDate>,
) -> Result<Vec<WeatherObservation>, DatasetError> {
    let statements = parse_statements(raw)?;
    Ok(extract_from_statements(&statements, station_id, date))
}
