//! Text rendering of a day's report: header with the selected slot's
//! temperature, one entry per time slot, and the detail grid.

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnitPreferences {
    pub temperature: TemperatureUnit,
    pub pressure: PressureUnit,
    pub distance: DistanceUnit,
    pub speed: SpeedUnit,
}

impl Default for UnitPreferences {
    fn default() -> Self {
        UnitPreferences {
            temperature: Celsius,
            pressure: HPa,
            distance: Kilometer,
            speed: Kph,
        }
    }
}

impl UnitPreferences {
    /// Converts a stored value of `field` into the preferred unit.
    pub fn convert(&self, field: Field, value: f32) -> f32 {
        match field {
            Field::Temperature | Field::Max | Field::Min | Field::DewPoint => {
                Temperature::new(value, Celsius).value_in(self.temperature)
            }
            Field::Pressure => Pressure::new(value, Pascal).value_in(self.pressure),
            Field::Visibility => Distance::new(value, Meter).value_in(self.distance),
            Field::Wind => Speed::new(value, Mps).value_in(self.speed),
            Field::Humidity => value,
        }
    }

    pub fn label(&self, field: Field) -> String {
        match field {
            Field::Temperature | Field::Max | Field::Min | Field::DewPoint => self.temperature.to_string(),
            Field::Pressure => self.pressure.to_string(),
            Field::Visibility => self.distance.to_string(),
            Field::Wind => self.speed.to_string(),
            Field::Humidity => Percent.to_string(),
        }
    }
}

pub struct WeatherCard<'a> {
    report: &'a DayReport,
    units: UnitPreferences,
    selected: usize,
}

impl<'a> WeatherCard<'a> {
    pub fn new(report: &'a DayReport, units: UnitPreferences) -> WeatherCard<'a> {
        WeatherCard {
            report,
            units,
            selected: 0,
        }
    }

    /// Selects a time slot; past the end means the last one.
    pub fn select(mut self, slot: usize) -> WeatherCard<'a> {
        self.selected = slot.min(self.report.observations.len().saturating_sub(1));
        self
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// `field` at `slot`, measured or estimated, in the preferred unit.
    pub fn reading(&self, slot: usize, field: Field) -> Reading {
        reading(&self.report.observations, slot, field).map(|v| self.units.convert(field, v))
    }

    fn value_with_unit(&self, slot: usize, field: Field) -> String {
        let reading = self.reading(slot, field);
        let marker = if matches!(reading, Reading::Approximated(_)) { "~" } else { "" };
        format!("{marker}{reading} {}", self.units.label(field))
    }
}

impl Display for WeatherCard<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let observations = &self.report.observations;
        let Some(current) = observations.get(self.selected) else {
            return writeln!(f, "Aucune donnée pour {} le {}", self.report.city, self.report.date);
        };

        writeln!(f, "Météo aujourd'hui à {}", self.report.city)?;
        writeln!(f, "{} · station {}", self.report.date, self.report.station_id)?;
        writeln!(f)?;
        writeln!(f, "    {}", self.value_with_unit(self.selected, Field::Temperature))?;
        writeln!(f)?;

        for (i, ob) in observations.iter().enumerate() {
            let mark = if i == self.selected { '>' } else { ' ' };
            writeln!(
                f,
                "{mark} {}  {}",
                ob.date_time.format("%H:%M"),
                self.value_with_unit(i, Field::Temperature)
            )?;
        }
        writeln!(f)?;

        let s = self.selected;
        writeln!(
            f,
            "{:<16}{} / {}",
            "Max. / Min.",
            self.value_with_unit(s, Field::Max),
            self.value_with_unit(s, Field::Min)
        )?;
        for field in [
            Field::Wind,
            Field::Humidity,
            Field::DewPoint,
            Field::Pressure,
            Field::Visibility,
        ] {
            writeln!(f, "{:<16}{}", field.to_string(), self.value_with_unit(s, field))?;
        }

        if !current.extra.is_empty() {
            writeln!(f)?;
            for (key, value) in &current.extra {
                writeln!(f, "{key:<16}{value}")?;
            }
        }

        Ok(())
    }
}
