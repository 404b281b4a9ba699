//! Weather observations of French stations, read from a Turtle dataset.
//!
//! The dataset is a flat list of statements about stations: each subject is a
//! station (its id is the last path segment), each predicate a field of the
//! `#`-fragmented weather vocabulary (`ville`, `dateTime`, `temperature`, ...).
//! [`build_station_city_index`] maps stations to cities and
//! [`extract_observations`] turns one station's statements for one day into
//! [`WeatherObservation`]s.

mod units;
pub use units::*;

mod error;
pub use error::*;

mod statement;
pub use statement::*;

mod timestamp;
pub use timestamp::*;

mod station;
pub use station::*;

mod observation;
pub use observation::*;

mod extract;
pub use extract::*;

mod approximate;
pub use approximate::*;

mod query;
pub use query::*;

mod card;
pub use card::*;

pub mod export;

mod config;
pub use config::*;
