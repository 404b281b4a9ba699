use std::path::Path;

use chrono::NaiveDate;
#[allow(unused)]
use log::{debug, error, info, trace, warn};
use serde::{Deserialize, Serialize};

use crate::*;

/// Days a query may ask for, both ends included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateWindow {
    pub first: NaiveDate,
    pub last: NaiveDate,
}

impl Default for DateWindow {
    fn default() -> Self {
        DateWindow {
            first: NaiveDate::from_ymd_opt(2024, 8, 1).expect("valid calendar date"),
            last: NaiveDate::from_ymd_opt(2024, 11, 22).expect("valid calendar date"),
        }
    }
}

impl DateWindow {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.first <= date && date <= self.last
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherQuery {
    pub city: String,
    pub date: NaiveDate,
}

impl WeatherQuery {
    pub fn new(city: impl Into<String>, date: NaiveDate) -> WeatherQuery {
        WeatherQuery { city: city.into(), date }
    }
}

/// Everything the result card needs for one city and day.
#[derive(Debug, Clone, Serialize)]
pub struct DayReport {
    pub station_id: String,
    pub city: String,
    pub date: NaiveDate,
    pub observations: Vec<WeatherObservation>,
}

/// A loaded dataset: the Turtle text plus the station index built from it.
#[derive(Debug, Clone)]
pub struct Dataset {
    text: String,
    index: StationIndex,
}

impl Dataset {
    pub fn load(path: &Path) -> Result<Dataset, DatasetError> {
        let text = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
            path: path.to_owned(),
            source,
        })?;

        let dataset = Dataset::from_text(text)?;
        info!(
            "Loaded {} ({} stations)",
            path.display(),
            dataset.index.len()
        );
        Ok(dataset)
    }

    pub fn from_text(text: impl Into<String>) -> Result<Dataset, DatasetError> {
        let text = text.into();
        let index = build_station_city_index(&text)?;
        Ok(Dataset { text, index })
    }

    pub fn index(&self) -> &StationIndex {
        &self.index
    }

    pub fn query(&self, query: &WeatherQuery, window: &DateWindow) -> Result<DayReport, QueryError> {
        if !window.contains(query.date) {
            return Err(QueryError::DateOutOfRange {
                date: query.date,
                window: *window,
            });
        }

        let station_id = self
            .index
            .station_for_city(&query.city)
            .ok_or_else(|| QueryError::StationNotFound {
                city: query.city.clone(),
            })?;

        debug!("{} resolved to station {station_id}", query.city);

        let observations = extract_observations(&self.text, Some(station_id), Some(query.date))?;

        if observations.is_empty() {
            return Err(QueryError::NoData {
                city: query.city.clone(),
                date: query.date,
            });
        }

        info!(
            "{} observations for {} on {}",
            observations.len(),
            query.city,
            query.date
        );

        Ok(DayReport {
            station_id: station_id.to_owned(),
            city: query.city.clone(),
            date: query.date,
            observations,
        })
    }
}
