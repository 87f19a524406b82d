//! Parser for the semicolon separated text representation of an observation value.
//!
//! The text consists of an optional preamble followed by four sections, each
//! introduced by a header line:
//!
//! ```text
//! Stationsnamn;Klimatnummer;Mäthöjd (meter över marken)
//! Lund;53430;2.0
//! Parameternamn;Beskrivning;Enhet
//! Lufttemperatur;momentanvärde, 1 gång/tim;degree celsius
//! Tidsperiod (fr.o.m);Tidsperiod (t.o.m);Höjd (meter över havet);Latitud (decimalgrader);Longitud (decimalgrader)
//! 2021-10-01 10:00:01;2021-10-01 11:00:00;73.0;55.7;13.2
//! Datum;Tid (UTC);Lufttemperatur;Kvalitet
//! 2021-10-01;11:00:00;11.9;G
//! ```

use crate::observations::error::ObservationsError;
use crate::observations::link::Link;
use crate::observations::models::{
    Position, Reading, Value, ValueParameter, ValuePeriod, ValueStation,
};
use chrono::{DateTime, NaiveDateTime, Utc};
use log::{debug, warn};

const STATION_MARKER: &str = "Stationsnamn";
const PARAMETER_MARKER: &str = "Parameternamn";
const PERIOD_MARKER: &str = "Tidsperiod";
const DATA_MARKER: &str = "Datum";

const FIELD_SEPARATOR: char = ';';
const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Section currently being read. Transitions are forward only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Section {
    SeekingStation,
    Station,
    Parameter,
    Period,
    Data,
}

impl Section {
    /// The section introduced by `line`, if it is a header line valid from `self`.
    fn header(self, line: &str) -> Option<Section> {
        match self {
            Section::SeekingStation if line.contains(STATION_MARKER) => Some(Section::Station),
            Section::SeekingStation | Section::Data => None,
            _ => {
                let next = if line.starts_with(PARAMETER_MARKER) {
                    Section::Parameter
                } else if line.starts_with(PERIOD_MARKER) {
                    Section::Period
                } else if line.starts_with(DATA_MARKER) {
                    Section::Data
                } else {
                    return None;
                };
                (next > self).then_some(next)
            }
        }
    }
}

#[derive(Default)]
struct Sections {
    station: Option<ValueStation>,
    parameter: Option<ValueParameter>,
    period: Option<(ValuePeriod, Position)>,
    readings: Vec<Reading>,
}

fn split_fields(line: &str) -> Vec<&str> {
    line.split(FIELD_SEPARATOR)
        .filter(|field| !field.is_empty())
        .collect()
}

fn parse_utc(text: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(text, DATETIME_FORMAT)
        .ok()
        .map(|naive| DateTime::<Utc>::from_naive_utc_and_offset(naive, Utc))
}

fn parse_station_row(line: &str) -> Result<ValueStation, ObservationsError> {
    let fields = split_fields(line);
    if fields.len() < 3 {
        return Err(ObservationsError::InvalidStationData);
    }
    let height = fields[2]
        .parse::<f64>()
        .map_err(|_| ObservationsError::InvalidStationData)?;
    Ok(ValueStation {
        key: fields[1].to_string(),
        name: fields[0].to_string(),
        owner: String::new(),
        owner_category: String::new(),
        height,
    })
}

fn parse_parameter_row(line: &str) -> Result<ValueParameter, ObservationsError> {
    let fields = split_fields(line);
    if fields.len() < 3 {
        return Err(ObservationsError::InvalidParameterData);
    }
    Ok(ValueParameter {
        key: String::new(),
        name: fields[0].to_string(),
        summary: fields[1].to_string(),
        unit: fields[2].to_string(),
    })
}

/// Returns `None` for rows that should be skipped.
fn parse_period_row(line: &str) -> Option<(ValuePeriod, Position)> {
    let fields = split_fields(line);
    if fields.len() < 5 {
        return None;
    }
    let height = fields[2].parse::<f64>().ok()?;
    let latitude = fields[3].parse::<f64>().ok()?;
    let longitude = fields[4].parse::<f64>().ok()?;
    let from = parse_utc(fields[0])?;
    let to = parse_utc(fields[1])?;
    let period = ValuePeriod {
        key: String::new(),
        from,
        to,
        summary: String::new(),
        sampling: String::new(),
    };
    let position = Position {
        from,
        to,
        height,
        latitude,
        longitude,
    };
    Some((period, position))
}

/// Returns `None` for rows that should be skipped.
fn parse_data_row(line: &str) -> Option<Reading> {
    let fields = split_fields(line);
    if fields.len() < 4 {
        warn!("Skipping CSV data row with {} fields: {line}", fields.len());
        return None;
    }
    let stamp = format!("{} {}", fields[0], fields[1]);
    let Some(date) = parse_utc(&stamp) else {
        warn!("Skipping CSV data row with invalid date '{stamp}'");
        return None;
    };
    Some(Reading {
        date,
        value: fields[2].to_string(),
        quality: fields[3].to_string(),
    })
}

/// Parses the text representation of an observation value.
///
/// `link` is the link the text was fetched from and is stored on the result.
///
/// Row level problems in the period and data sections (wrong field count,
/// unparsable numbers or dates) skip the offending row. A missing or malformed
/// station or parameter row, or a period section without a valid row, fails the
/// whole parse. Each header section takes a single row; further rows are ignored.
///
/// # Errors
///
/// * [`ObservationsError::InvalidRowCount`] if the text contains no lines.
/// * [`ObservationsError::InvalidStationData`],
///   [`ObservationsError::InvalidParameterData`] or
///   [`ObservationsError::InvalidPeriodData`] for the section that is absent or invalid.
///
/// # Example
///
/// ```
/// use smhi::{parse_csv_value, Link};
///
/// let text = "Stationsnamn;Klimatnummer;Mäthöjd\n\
///             Lund;53430;2.0\n\
///             Parameternamn;Beskrivning;Enhet\n\
///             Lufttemperatur;momentanvärde;degree celsius\n\
///             Tidsperiod (fr.o.m);Tidsperiod (t.o.m);Höjd;Latitud;Longitud\n\
///             2021-10-01 10:00:01;2021-10-01 11:00:00;73.0;55.7;13.2\n\
///             Datum;Tid (UTC);Lufttemperatur;Kvalitet\n\
///             2021-10-01;11:00:00;11.9;G\n";
/// let link = Link {
///     rel: "data".into(),
///     content_type: "text/plain".into(),
///     href: "https://example.test/data.csv".into(),
/// };
/// let value = parse_csv_value(text, &link).unwrap();
/// assert_eq!(value.station.name, "Lund");
/// assert_eq!(value.value[0].value, "11.9");
/// ```
pub fn parse_csv_value(text: &str, link: &Link) -> Result<Value, ObservationsError> {
    let mut section = Section::SeekingStation;
    let mut parsed = Sections::default();
    let mut saw_line = false;

    let lines = text
        .split('\n')
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.is_empty());

    for line in lines {
        saw_line = true;
        if let Some(next) = section.header(line) {
            debug!("CSV section {:?} -> {:?}", section, next);
            section = next;
            continue;
        }
        match section {
            Section::SeekingStation => {}
            Section::Station => {
                if parsed.station.is_none() {
                    parsed.station = Some(parse_station_row(line)?);
                } else {
                    warn!("Ignoring extra CSV row in station section: {line}");
                }
            }
            Section::Parameter => {
                if parsed.parameter.is_none() {
                    parsed.parameter = Some(parse_parameter_row(line)?);
                } else {
                    warn!("Ignoring extra CSV row in parameter section: {line}");
                }
            }
            Section::Period => {
                if parsed.period.is_some() {
                    warn!("Ignoring extra CSV row in period section: {line}");
                } else if let Some(period) = parse_period_row(line) {
                    parsed.period = Some(period);
                } else {
                    warn!("Skipping invalid CSV period row: {line}");
                }
            }
            Section::Data => {
                if let Some(reading) = parse_data_row(line) {
                    parsed.readings.push(reading);
                }
            }
        }
    }

    if !saw_line {
        return Err(ObservationsError::InvalidRowCount);
    }
    let station = parsed.station.ok_or(ObservationsError::InvalidStationData)?;
    let parameter = parsed
        .parameter
        .ok_or(ObservationsError::InvalidParameterData)?;
    let (period, position) = parsed.period.ok_or(ObservationsError::InvalidPeriodData)?;

    Ok(Value {
        value: parsed.readings,
        updated: period.to,
        parameter,
        station,
        period,
        position: vec![position],
        link: vec![link.clone()],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const STATION: &str = "Stationsnamn;Klimatnummer;Mäthöjd (meter över marken)\nLund;53430;2.0\n";
    const PARAMETER: &str =
        "Parameternamn;Beskrivning;Enhet\nLufttemperatur;momentanvärde, 1 gång/tim;degree celsius\n";
    const PERIOD: &str = "Tidsperiod (fr.o.m);Tidsperiod (t.o.m);Höjd (meter över havet);Latitud (decimalgrader);Longitud (decimalgrader)\n\
                          2021-10-01 10:00:01;2021-10-01 11:00:00;73.0;55.7;13.2\n";
    const DATA_HEADER: &str = "Datum;Tid (UTC);Lufttemperatur;Kvalitet\n";

    fn link() -> Link {
        Link {
            rel: "data".to_string(),
            content_type: "text/plain".to_string(),
            href: "https://example.test/data.csv".to_string(),
        }
    }

    fn blob(parts: &[&str]) -> String {
        parts.concat()
    }

    #[test]
    fn parses_all_sections() {
        let text = blob(&[
            "Preamble line\n",
            STATION,
            PARAMETER,
            PERIOD,
            DATA_HEADER,
            "2021-10-01;10:00:00;11.2;G\n",
            "2021-10-01;11:00:00;11.9;Y\n",
        ]);
        let value = parse_csv_value(&text, &link()).unwrap();

        assert_eq!(value.station.name, "Lund");
        assert_eq!(value.station.key, "53430");
        assert_eq!(value.station.height, 2.0);
        assert_eq!(value.parameter.name, "Lufttemperatur");
        assert_eq!(value.parameter.unit, "degree celsius");
        assert_eq!(
            value.period.to,
            Utc.with_ymd_and_hms(2021, 10, 1, 11, 0, 0).unwrap()
        );
        assert_eq!(value.updated, value.period.to);
        assert_eq!(value.position.len(), 1);
        assert_eq!(value.position[0].latitude, 55.7);
        assert_eq!(value.link, vec![link()]);

        let values: Vec<_> = value.value.iter().map(|r| r.value.as_str()).collect();
        assert_eq!(values, ["11.2", "11.9"]);
        assert_eq!(value.value[1].quality, "Y");
        assert_eq!(
            value.value[0].date,
            Utc.with_ymd_and_hms(2021, 10, 1, 10, 0, 0).unwrap()
        );
    }

    #[test]
    fn malformed_data_rows_are_skipped_in_order() {
        let text = blob(&[
            STATION,
            PARAMETER,
            PERIOD,
            DATA_HEADER,
            "2021-10-01;10:00:00;11.2;G\n",
            "2021-10-01;10:30:00;11.5\n",
            "2021-10-01;11:00:00;11.9;G\n",
        ]);
        let value = parse_csv_value(&text, &link()).unwrap();
        let values: Vec<_> = value.value.iter().map(|r| r.value.as_str()).collect();
        assert_eq!(values, ["11.2", "11.9"]);
    }

    #[test]
    fn unparsable_dates_are_skipped() {
        let text = blob(&[
            STATION,
            PARAMETER,
            PERIOD,
            DATA_HEADER,
            "yesterday;noon;11.2;G\n",
            "2021-10-01;11:00:00;11.9;G\n",
        ]);
        let value = parse_csv_value(&text, &link()).unwrap();
        assert_eq!(value.value.len(), 1);
    }

    #[test]
    fn data_rows_with_trailing_columns_and_crlf() {
        let text = blob(&[
            STATION,
            PARAMETER,
            PERIOD,
            "Datum;Tid (UTC);Lufttemperatur;Kvalitet;;Tidsutsnitt:\r\n",
            "2021-10-01;11:00:00;11.9;G;;Kvalitetskontrollerade historiska data\r\n",
        ]);
        let value = parse_csv_value(&text, &link()).unwrap();
        assert_eq!(value.value.len(), 1);
        assert_eq!(value.value[0].quality, "G");
    }

    #[test]
    fn extra_header_rows_keep_the_first_one() {
        let text = blob(&[
            "Stationsnamn;Klimatnummer;Mäthöjd (meter över marken)\n",
            "Lund;53430;2.0\n",
            "Lund Sol;53431;3.0\n",
            "garbage\n",
            "Parameternamn;Beskrivning;Enhet\n",
            "Lufttemperatur;momentanvärde, 1 gång/tim;degree celsius\n",
            "Vindhastighet\n",
            PERIOD,
            "2021-10-02 10:00:01;2021-10-02 11:00:00;24.0;56.0;12.7\n",
            DATA_HEADER,
        ]);
        let value = parse_csv_value(&text, &link()).unwrap();
        assert_eq!(value.station.name, "Lund");
        assert_eq!(value.station.key, "53430");
        assert_eq!(value.parameter.name, "Lufttemperatur");
        assert_eq!(
            value.period.to,
            Utc.with_ymd_and_hms(2021, 10, 1, 11, 0, 0).unwrap()
        );
    }

    #[test]
    fn no_data_rows_is_valid() {
        let text = blob(&[STATION, PARAMETER, PERIOD, DATA_HEADER]);
        let value = parse_csv_value(&text, &link()).unwrap();
        assert!(value.value.is_empty());
    }

    #[test]
    fn missing_parameter_marker_fails_with_parameter_error() {
        let text = blob(&[
            STATION,
            "Lufttemperatur;momentanvärde, 1 gång/tim;degree celsius\n",
            PERIOD,
            DATA_HEADER,
            "2021-10-01;11:00:00;11.9;G\n",
        ]);
        assert!(matches!(
            parse_csv_value(&text, &link()),
            Err(ObservationsError::InvalidParameterData)
        ));

        let without_section = blob(&[STATION, PERIOD, DATA_HEADER]);
        assert!(matches!(
            parse_csv_value(&without_section, &link()),
            Err(ObservationsError::InvalidParameterData)
        ));
    }

    #[test]
    fn missing_station_fails() {
        let text = blob(&[PARAMETER, PERIOD, DATA_HEADER]);
        assert!(matches!(
            parse_csv_value(&text, &link()),
            Err(ObservationsError::InvalidStationData)
        ));
    }

    #[test]
    fn invalid_station_height_is_fatal() {
        let text = blob(&[
            "Stationsnamn;Stationsnummer;Stationsnät\nLund;53430;SMHIs stationsnät\n",
            PARAMETER,
            PERIOD,
            DATA_HEADER,
        ]);
        assert!(matches!(
            parse_csv_value(&text, &link()),
            Err(ObservationsError::InvalidStationData)
        ));
    }

    #[test]
    fn short_parameter_row_is_fatal() {
        let text = blob(&[
            STATION,
            "Parameternamn;Beskrivning;Enhet\nLufttemperatur;momentanvärde\n",
            PERIOD,
            DATA_HEADER,
        ]);
        assert!(matches!(
            parse_csv_value(&text, &link()),
            Err(ObservationsError::InvalidParameterData)
        ));
    }

    #[test]
    fn invalid_period_rows_are_skipped_until_a_valid_one() {
        let text = blob(&[
            STATION,
            PARAMETER,
            "Tidsperiod (fr.o.m);Tidsperiod (t.o.m);Höjd;Latitud;Longitud\n",
            "2021-10-01 10:00:01;2021-10-01 11:00:00;high;55.7;13.2\n",
            "2021-10-01 10:00:01;2021-10-01 11:00:00;73.0;55.7;13.2\n",
            DATA_HEADER,
        ]);
        let value = parse_csv_value(&text, &link()).unwrap();
        assert_eq!(value.position[0].height, 73.0);
    }

    #[test]
    fn period_without_valid_row_fails() {
        let text = blob(&[
            STATION,
            PARAMETER,
            "Tidsperiod (fr.o.m);Tidsperiod (t.o.m);Höjd;Latitud;Longitud\n",
            "2021-10-01;2021-10-01;73.0;55.7;13.2\n",
            DATA_HEADER,
        ]);
        assert!(matches!(
            parse_csv_value(&text, &link()),
            Err(ObservationsError::InvalidPeriodData)
        ));
    }

    #[test]
    fn empty_text_is_a_row_count_error() {
        assert!(matches!(
            parse_csv_value("", &link()),
            Err(ObservationsError::InvalidRowCount)
        ));
        assert!(matches!(
            parse_csv_value("\n\n\r\n", &link()),
            Err(ObservationsError::InvalidRowCount)
        ));
    }

    #[test]
    fn markers_inside_data_are_plain_rows() {
        let text = blob(&[
            STATION,
            PARAMETER,
            PERIOD,
            DATA_HEADER,
            "Datum;Tid;x;y\n",
            "2021-10-01;11:00:00;11.9;G\n",
        ]);
        let value = parse_csv_value(&text, &link()).unwrap();
        assert_eq!(value.value.len(), 1);
    }
}
