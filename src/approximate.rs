//! Presentation-time estimates for fields an observation is missing.
//!
//! Nothing here is stored: a gap is filled from the nearest earlier and later
//! observations of the same day each time it is rendered.

use std::fmt;

use crate::*;

/// A field as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Reading {
    Measured(f32),
    Approximated(f32),
    NotAvailable,
}

impl Reading {
    pub fn value(&self) -> Option<f32> {
        match self {
            Reading::Measured(v) | Reading::Approximated(v) => Some(*v),
            Reading::NotAvailable => None,
        }
    }

    /// Applies a unit conversion to the carried value.
    pub fn map(self, f: impl FnOnce(f32) -> f32) -> Reading {
        match self {
            Reading::Measured(v) => Reading::Measured(f(v)),
            Reading::Approximated(v) => Reading::Approximated(f(v)),
            Reading::NotAvailable => Reading::NotAvailable,
        }
    }
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value() {
            Some(v) => write!(f, "{v:.2}"),
            None => write!(f, "N/A"),
        }
    }
}

fn nearest<'a>(
    mut candidates: impl Iterator<Item = &'a WeatherObservation>,
    field: Field,
) -> Option<f32> {
    candidates.find_map(|ob| ob.value(field))
}

/// Estimate of `field` at `index` from its neighbours: the mean of the nearest
/// earlier and later known values, or whichever one exists.
pub fn approximate(observations: &[WeatherObservation], index: usize, field: Field) -> Option<f32> {
    if index >= observations.len() {
        return None;
    }

    let previous = nearest(observations[..index].iter().rev(), field);
    let next = nearest(observations[index + 1..].iter(), field);

    match (previous, next) {
        (Some(p), Some(n)) => Some((p + n) / 2.),
        (Some(v), None) | (None, Some(v)) => Some(v),
        (None, None) => None,
    }
}

/// The measured value at `index` if there is one, otherwise the estimate.
pub fn reading(observations: &[WeatherObservation], index: usize, field: Field) -> Reading {
    if let Some(v) = observations.get(index).and_then(|ob| ob.value(field)) {
        return Reading::Measured(v);
    }

    match approximate(observations, index, field) {
        Some(v) => Reading::Approximated(v),
        None => Reading::NotAvailable,
    }
}
