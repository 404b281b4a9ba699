use std::fmt;

// QUANTITIES ------------------------------------------------------------------

pub trait Unit<T> where
    Self: Clone + Copy + Sized,
    T: Clone + Copy + PartialEq + Eq + fmt::Display + fmt::Debug {

    fn new(value: f32, unit: T) -> Self;
    // read through value_in so the unit is always explicit
    fn unit(&self) -> T;
    fn convert(&self, unit: T) -> Self;
    fn string_with_unit(&self) -> String;
    fn value_in(&self, unit: T) -> f32;
}


pub use hidden::*;

mod hidden {
    use serde::{Deserialize, Serialize};
    use strum_macros::Display;
    use std::fmt;
    use super::*;

    // CONVERSION PLUMBING ---------------------------------------------------

    trait UnitInternal<T> where
        Self: Clone + Copy + Sized,
        T: Clone + Copy + PartialEq + fmt::Display + fmt::Debug {

        fn new(value: f32, unit: T) -> Self;
        fn value(&self) -> f32;
        fn unit(&self) -> T;
        fn convert(&self, unit: T) -> Self;

        fn string_with_unit(&self) -> String {
            format!("{:.2} {}", self.value(), UnitInternal::unit(self))
        }
        fn value_in(&self, unit: T) -> f32 {
            UnitInternal::convert(self, unit).value()
        }
    }

    // FACTOR UNITS ----------------------------------------------------------
    // every unit here except temperature converts by a plain factor

    #[derive(Clone, Copy, Debug, Serialize)]
    pub struct ProportionalUnit<T>
        where T: Proportional + Clone + Copy + fmt::Display + fmt::Debug {
        value: f32,
        unit: T,
    }
    pub trait Proportional {
        // multiplying a value by this converts it into the family's base unit
        fn coefficient(&self) -> f32;
    }
    impl<T> UnitInternal<T> for ProportionalUnit<T> where
        T: Proportional + Clone + Copy + PartialEq + Eq + fmt::Display + fmt::Debug {

        fn new(value: f32, unit: T) -> Self {
            Self {value, unit}
        }
        fn value(&self) -> f32 {self.value}
        fn unit(&self) -> T {self.unit}

        fn convert(&self, unit: T) -> Self {
            if unit == self.unit {
                return *self;
            }
            let value_as_base_unit = self.value * self.unit.coefficient();

            ProportionalUnit {
                unit,
                value: value_as_base_unit / unit.coefficient(),
            }
        }
    }

    impl<T> PartialEq for ProportionalUnit<T> where
        T: Proportional + Clone + Copy + PartialEq + Eq + fmt::Display + fmt::Debug {
        fn eq(&self, other: &Self) -> bool {
            (self.value - UnitInternal::value_in(other, self.unit)).abs() < 1e-3
        }
    }

    impl<T> fmt::Display for ProportionalUnit<T> where
        T: Proportional + Clone + Copy + PartialEq + Eq + fmt::Display + fmt::Debug {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", UnitInternal::string_with_unit(self))
        }
    }

    // MEASUREMENT FAMILIES --------------------------------------------------

    // WIND --------------------------------------------------------------------
    pub type Speed = ProportionalUnit<SpeedUnit>;

    #[derive(Clone, Copy, PartialEq, Eq, Debug, Display, Serialize, Deserialize)]
    pub enum SpeedUnit {
        #[strum(to_string = "m/s")]
        Mps,
        #[strum(to_string = "km/h")]
        Kph,
        #[strum(to_string = "mph")]
        Mph,
        #[strum(to_string = "kts")]
        Kts,
    }
    pub use SpeedUnit::*;

    impl Proportional for SpeedUnit {
        fn coefficient(&self) -> f32 {
            match self {
                Kph => 1.,
                Mps => 3.6,
                Mph => 1.609344,
                Kts => 1.852,
            }
        }
    }

    // PRESSURE ----------------------------------------------------------------
    pub type Pressure = ProportionalUnit<PressureUnit>;

    #[derive(Clone, Copy, PartialEq, Eq, Debug, Display, Serialize, Deserialize)]
    pub enum PressureUnit {
        #[strum(to_string = "Pa")]
        Pascal,
        #[strum(to_string = "hPa")]
        HPa,
        #[strum(to_string = "mbar")]
        Mbar,
        #[strum(to_string = "inHg")]
        InHg,
    }
    pub use PressureUnit::*;

    impl Proportional for PressureUnit {
        fn coefficient(&self) -> f32 {
            match self {
                Pascal => 0.01,
                HPa => 1.,
                Mbar => 1.,
                InHg => 33.86389,
            }
        }
    }

    // DISTANCE ----------------------------------------------------------------
    pub type Distance = ProportionalUnit<DistanceUnit>;

    #[derive(Clone, Copy, PartialEq, Eq, Debug, Display, Serialize, Deserialize)]
    pub enum DistanceUnit {
        #[strum(to_string = "m")]
        Meter,
        #[strum(to_string = "km")]
        Kilometer,
        #[strum(to_string = "mi")]
        Mile,
    }
    pub use DistanceUnit::*;

    impl Proportional for DistanceUnit {
        fn coefficient(&self) -> f32 {
            match self {
                Meter => 1.,
                Kilometer => 1000.,
                Mile => 1609.344,
            }
        }
    }

    // FRACTION ----------------------------------------------------------------
    pub type Fraction = ProportionalUnit<FractionalUnit>;

    #[derive(Clone, Copy, PartialEq, Eq, Debug, Display, Serialize, Deserialize)]
    pub enum FractionalUnit {
        #[strum(to_string = "%")]
        Percent,
        #[strum(to_string = "")]
        Decimal,
    }
    pub use FractionalUnit::*;

    impl Proportional for FractionalUnit {
        fn coefficient(&self) -> f32 {
            match self {
                Percent => 0.01,
                Decimal => 1.,
            }
        }
    }

    // TEMPERATURE -------------------------------------------------------------
    // offset scale, converted through kelvin

    #[derive(Clone, Copy, Debug, Serialize)]
    pub struct Temperature {
        value: f32,
        unit: TemperatureUnit
    }

    #[derive(Clone, Copy, PartialEq, Eq, Debug, Display, Serialize, Deserialize)]
    pub enum TemperatureUnit {
        #[strum(to_string = "K")]
        Kelvin,
        #[strum(to_string = "°C")]
        Celsius,
        #[strum(to_string = "°F")]
        Fahrenheit,
    }
    pub use TemperatureUnit::*;

    impl UnitInternal<TemperatureUnit> for Temperature {
        fn new(value: f32, unit: TemperatureUnit) -> Self {
            Self {value, unit}
        }
        fn value(&self) -> f32 {self.value}
        fn unit(&self) -> TemperatureUnit {self.unit}

        fn convert(&self, unit: TemperatureUnit) -> Self {
            if unit == self.unit {
                return *self;
            }
            let value_in_kelvin = match self.unit {
                Kelvin => self.value,
                Celsius => self.value + 273.15,
                Fahrenheit => (self.value + 459.67)*(5./9.)
            };
            let value_in_new_unit = match unit {
                Kelvin => value_in_kelvin,
                Celsius => value_in_kelvin - 273.15,
                Fahrenheit => (value_in_kelvin*(9./5.)) - 459.67
            };
            Self {
                value: value_in_new_unit,
                unit,
            }
        }
    }

    impl PartialEq for Temperature {
        fn eq(&self, other: &Self) -> bool {
            (self.value - UnitInternal::value_in(other, self.unit)).abs() < 1e-3
        }
    }

    impl fmt::Display for Temperature {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", UnitInternal::string_with_unit(self))
        }
    }


    // BLANKET IMPLS ---------------------------------------------------------

    impl<T, U: UnitInternal<T>> Unit<T> for U where
        Self: Clone + Copy + Sized,
        T: Clone + Copy + PartialEq + Eq +fmt::Display + fmt::Debug {
        fn new(value: f32, unit: T) -> Self {U::new(value, unit)}
        fn unit(&self) -> T {U::unit(self)}
        fn convert(&self, unit: T) -> Self {U::convert(self, unit)}
        fn string_with_unit(&self) -> String {U::string_with_unit(self)}
        fn value_in(&self, unit: T) -> f32 {U::value_in(self, unit)}
    }
}

// TESTS ----------------------------------------------------------------------
