use std::io::Write;

use anyhow::Result;
use strum::IntoEnumIterator;

use crate::*;

pub fn to_json(report: &DayReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// One row per observation, stored units, empty cells for missing values.
/// Estimates are never written.
pub fn write_csv<W: Write>(report: &DayReport, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    let mut header = vec!["station_id", "city", "date_time"];
    header.extend(Field::iter().map(|f| f.key_name()));
    wtr.write_record(&header)?;

    for ob in &report.observations {
        let mut row = vec![
            ob.station_id.clone(),
            ob.city.clone(),
            ob.date_time.format("%Y-%m-%dT%H:%M:%S").to_string(),
        ];
        row.extend(
            Field::iter().map(|f| ob.value(f).map(|v| format!("{v:.2}")).unwrap_or_default()),
        );
        wtr.write_record(&row)?;
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn report() -> DayReport {
        let date = NaiveDate::from_ymd_opt(2024, 8, 15).unwrap();
        let mut ob = WeatherObservation::new("07149", date.and_hms_opt(12, 0, 0).unwrap());
        ob.city = "Paris".into();
        ob.set_from_source(Field::Temperature, 290.15);
        ob.set_from_source(Field::Humidity, 64.);

        DayReport {
            station_id: "07149".into(),
            city: "Paris".into(),
            date,
            observations: vec![ob],
        }
    }

    #[test]
    fn csv_rows() {
        let mut out = vec![];
        write_csv(&report(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines[0],
            "station_id,city,date_time,temperature,max,min,humidity,pressure,visibility,wind,dewPoint"
        );
        assert_eq!(lines[1], "07149,Paris,2024-08-15T12:00:00,17.00,,,64.00,,,,");
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn json_keeps_absent_fields_null() {
        let json: serde_json::Value = serde_json::from_str(&to_json(&report()).unwrap()).unwrap();
        let ob = &json["observations"][0];

        assert_eq!(json["city"], "Paris");
        assert_eq!(ob["date_time"], "2024-08-15T12:00:00");
        assert_eq!(ob["max"], serde_json::Value::Null);
        assert_eq!(ob["temperature"]["unit"], "Celsius");
        assert!(ob.get("extra").is_none());
    }
}
