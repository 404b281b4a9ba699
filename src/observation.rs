use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use derive_more::Display;
use serde::Serialize;
use strum_macros::EnumIter;

use crate::*;

/// City name used when no `ville` value reached an observation.
pub const UNKNOWN_CITY: &str = "Unknown";

/// One station's readings at one timestamp.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherObservation {
    pub station_id: String,
    pub city: String,
    pub date_time: NaiveDateTime,

    pub temperature: Option<Temperature>, // °C
    pub max: Option<Temperature>,         // °C
    pub min: Option<Temperature>,         // °C
    pub humidity: Option<Fraction>,       // %
    pub pressure: Option<Pressure>,       // Pa
    pub visibility: Option<Distance>,     // m
    pub wind: Option<Speed>,              // m/s
    pub dew_point: Option<Temperature>,   // °C

    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, String>,
}

impl WeatherObservation {
    pub fn new(station_id: &str, date_time: NaiveDateTime) -> WeatherObservation {
        WeatherObservation {
            station_id: station_id.to_owned(),
            city: UNKNOWN_CITY.to_owned(),
            date_time,
            temperature: None,
            max: None,
            min: None,
            humidity: None,
            pressure: None,
            visibility: None,
            wind: None,
            dew_point: None,
            extra: BTreeMap::new(),
        }
    }

    /// The field in its stored unit (°C, %, Pa, m, m/s).
    pub fn value(&self, field: Field) -> Option<f32> {
        match field {
            Field::Temperature => self.temperature.map(|x| x.value_in(Celsius)),
            Field::Max => self.max.map(|x| x.value_in(Celsius)),
            Field::Min => self.min.map(|x| x.value_in(Celsius)),
            Field::DewPoint => self.dew_point.map(|x| x.value_in(Celsius)),
            Field::Humidity => self.humidity.map(|x| x.value_in(Percent)),
            Field::Pressure => self.pressure.map(|x| x.value_in(Pascal)),
            Field::Visibility => self.visibility.map(|x| x.value_in(Meter)),
            Field::Wind => self.wind.map(|x| x.value_in(Mps)),
        }
    }

    /// Stores a raw dataset value. Temperatures arrive in Kelvin and are kept
    /// in Celsius; everything else keeps the dataset's unit.
    pub fn set_from_source(&mut self, field: Field, raw: f32) {
        if field.is_temperature() {
            let celsius = Some(Temperature::new(raw, Kelvin).convert(Celsius));
            match field {
                Field::Max => self.max = celsius,
                Field::Min => self.min = celsius,
                Field::DewPoint => self.dew_point = celsius,
                _ => self.temperature = celsius,
            }
            return;
        }

        match field {
            Field::Humidity => self.humidity = Some(Fraction::new(raw, Percent)),
            Field::Pressure => self.pressure = Some(Pressure::new(raw, Pascal)),
            Field::Visibility => self.visibility = Some(Distance::new(raw, Meter)),
            Field::Wind => self.wind = Some(Speed::new(raw, Mps)),
            // temperatures returned above
            Field::Temperature | Field::Max | Field::Min | Field::DewPoint => {}
        }
    }
}

/// The numeric fields of an observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Field {
    #[display(fmt = "Température")]
    Temperature,
    #[display(fmt = "Max.")]
    Max,
    #[display(fmt = "Min.")]
    Min,
    #[display(fmt = "Humidité")]
    Humidity,
    #[display(fmt = "Pression")]
    Pressure,
    #[display(fmt = "Visibilité")]
    Visibility,
    #[display(fmt = "Vent")]
    Wind,
    #[display(fmt = "Point de rosée")]
    DewPoint,
}

impl Field {
    pub fn from_key(key: &Key) -> Option<Field> {
        match key {
            Key::Temperature => Some(Field::Temperature),
            Key::Max => Some(Field::Max),
            Key::Min => Some(Field::Min),
            Key::Humidity => Some(Field::Humidity),
            Key::Pressure => Some(Field::Pressure),
            Key::Visibility => Some(Field::Visibility),
            Key::Wind => Some(Field::Wind),
            Key::DewPoint => Some(Field::DewPoint),
            Key::Ville | Key::DateTime | Key::Other(_) => None,
        }
    }

    /// Fields that arrive in Kelvin.
    pub fn is_temperature(&self) -> bool {
        matches!(self, Field::Temperature | Field::Max | Field::Min | Field::DewPoint)
    }

    /// Name used in the dataset vocabulary and in CSV headers.
    pub fn key_name(&self) -> &'static str {
        match self {
            Field::Temperature => "temperature",
            Field::Max => "max",
            Field::Min => "min",
            Field::Humidity => "humidity",
            Field::Pressure => "pressure",
            Field::Visibility => "visibility",
            Field::Wind => "wind",
            Field::DewPoint => "dewPoint",
        }
    }
}
