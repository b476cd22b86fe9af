//! AORC forcing records.
//!
//! An AORC forcing file is a comma separated table with one header line and
//! one record per time step:
//!
//! ```text
//! time,APCP_surface,DLWRF_surface,DSWRF_surface,PRES_surface,SPFH_2maboveground,TMP_2maboveground,UGRD_10maboveground,VGRD_10maboveground
//! 2015-12-01 00:00:00,0.0,361.3,0.0,101300.0,0.0065,282.5,-0.8,1.6
//! ```

use crate::errors::{PetError, PetResult};
use crate::state::ForcingSnapshot;
use crate::FloatValue;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Number of meteorological columns following the timestamp.
const N_FORCING_FIELDS: usize = 8;

/// A single parsed forcing line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AorcRecord {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: FloatValue,
    /// Forcing values as read, with precipitation as a rate (kg m-2 s-1)
    pub forcing: ForcingSnapshot,
}

/// Decodes one line of a forcing file into a record.
#[typetag::serde(tag = "type")]
pub trait ForcingRecordParser: Debug + Send + Sync {
    /// Parse a data line.
    ///
    /// `line_number` is the 1-based line number in the file, used for errors.
    fn parse_line(&self, line: &str, line_number: usize) -> PetResult<AorcRecord>;
}

/// Parser for comma separated AORC forcing lines.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AorcLineParser {}

impl AorcLineParser {
    pub fn new() -> Self {
        Self {}
    }
}

fn parse_error(line: usize, message: impl Into<String>) -> PetError {
    PetError::ForcingParse {
        line,
        message: message.into(),
    }
}

fn parse_number<T: std::str::FromStr>(token: &str, what: &str, line: usize) -> PetResult<T> {
    token
        .trim()
        .parse::<T>()
        .map_err(|_| parse_error(line, format!("invalid {} '{}'", what, token.trim())))
}

fn next_timestamp_part<'a, T: std::str::FromStr>(
    parts: &mut impl Iterator<Item = &'a str>,
    what: &str,
    line: usize,
) -> PetResult<T> {
    let part = parts
        .next()
        .ok_or_else(|| parse_error(line, format!("timestamp is missing the {}", what)))?;
    parse_number(part, what, line)
}

#[typetag::serde]
impl ForcingRecordParser for AorcLineParser {
    fn parse_line(&self, line: &str, line_number: usize) -> PetResult<AorcRecord> {
        let mut tokens = line.trim_end_matches(['\r', '\n']).split(',');

        let timestamp = tokens
            .next()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| parse_error(line_number, "missing timestamp"))?;
        let (date, time) = timestamp
            .split_once([' ', 'T'])
            .ok_or_else(|| {
                parse_error(line_number, format!("invalid timestamp '{}'", timestamp))
            })?;

        let mut date_parts = date.split('-');
        let mut time_parts = time.trim().split(':');
        let year: i32 = next_timestamp_part(&mut date_parts, "year", line_number)?;
        let month: u32 = next_timestamp_part(&mut date_parts, "month", line_number)?;
        let day: u32 = next_timestamp_part(&mut date_parts, "day", line_number)?;
        let hour: u32 = next_timestamp_part(&mut time_parts, "hour", line_number)?;
        let minute: u32 = next_timestamp_part(&mut time_parts, "minute", line_number)?;
        let second: FloatValue = match time_parts.next() {
            Some(s) => parse_number(s, "second", line_number)?,
            None => 0.0,
        };

        let datetime = NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|d| d.and_hms_opt(hour, minute, 0))
            .ok_or_else(|| parse_error(line_number, format!("invalid date '{}'", timestamp)))?;
        let time = datetime.and_utc().timestamp() + second.floor() as i64;

        let mut values = [0.0; N_FORCING_FIELDS];
        for (i, value) in values.iter_mut().enumerate() {
            let token = tokens.next().ok_or_else(|| {
                parse_error(
                    line_number,
                    format!("expected {} forcing values, found {}", N_FORCING_FIELDS, i),
                )
            })?;
            *value = parse_number(token, "forcing value", line_number)?;
        }
        let [precip, longwave, shortwave, pressure, humidity, temperature, u_wind, v_wind] =
            values;

        Ok(AorcRecord {
            year,
            month,
            day,
            hour,
            minute,
            second,
            forcing: ForcingSnapshot {
                precip_kg_per_m2: precip,
                incoming_longwave_w_per_m2: longwave,
                incoming_shortwave_w_per_m2: shortwave,
                surface_pressure_pa: pressure,
                specific_humidity_2m_kg_per_kg: humidity,
                air_temperature_2m_k: temperature,
                u_wind_speed_10m_m_per_s: u_wind,
                v_wind_speed_10m_m_per_s: v_wind,
                time,
            },
        })
    }
}
