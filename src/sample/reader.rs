//! Loading of weather/calendar files and composition into labeled samples.
use chrono::NaiveDateTime;
use rand::Rng;
use rand::seq::SliceRandom;

use std::path::Path;
use std::fs::File;
use std::io::{self, BufRead, BufReader};

use crate::checker;
use super::sample_struct::{Sample, WeatherRecord, CalendarEvent};


/// Visibility readings at or above this value are clamped to it.
const VISIBILITY_CEILING: f64 = 9999.0;

/// Summary prefix marking a flown flight (matched case-insensitively).
const FLOWN_PREFIX: &str = "ff";

/// Summary substring marking a cancelled flight
/// (matched case-insensitively; the calendar is kept in Slovak).
const CANCELLED_MARKER: &str = "zrušené";

const WEATHER_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
const CALENDAR_TIMESTAMP_FORMAT: &str = "%Y%m%dT%H%M%SZ";

// Length of the UTC-offset suffix (`+01:00`) on weather timestamps.
const OFFSET_SUFFIX_LEN: usize = 6;


/// Read the weather history CSV at `path`.
/// See [`parse_weather`] for the expected format.
pub fn read_weather_csv<P>(path: P) -> io::Result<Vec<WeatherRecord>>
    where P: AsRef<Path>,
{
    let file = File::open(path)?;
    parse_weather(BufReader::new(file))
}


/// Parse weather history from a semicolon-separated CSV stream.
///
/// The first line is a header and is skipped.
/// Each following line holds a timestamp with a UTC-offset suffix
/// and the six readings in attribute order.
/// Visibility is clamped to the sensor ceiling of `9999` m.
/// Malformed lines surface as `InvalidData` errors.
pub fn parse_weather<R>(reader: R) -> io::Result<Vec<WeatherRecord>>
    where R: BufRead,
{
    let mut lines = reader.lines();

    // Header
    if lines.next().transpose()?.is_none() {
        return Err(invalid_data("The weather CSV is empty"));
    }

    let mut records = Vec::new();
    for line in lines {
        let line = line?;
        if line.trim().is_empty() { continue; }

        let fields = line.split(';').collect::<Vec<_>>();
        if fields.len() < 7 {
            return Err(invalid_data(format!(
                "Expected 7 semicolon-separated fields, got {}: {line}",
                fields.len()
            )));
        }

        let date = parse_weather_timestamp(fields[0])?;
        let max_temp       = parse_reading(fields[1])?;
        let cloud_cover    = parse_reading(fields[2])?;
        let precipitation  = parse_reading(fields[3])?;
        let visibility     = parse_reading(fields[4])?.min(VISIBILITY_CEILING);
        let wind_direction = parse_reading(fields[5])?;
        let wind_speed     = parse_reading(fields[6])?;

        records.push(WeatherRecord {
            date,
            max_temp,
            cloud_cover,
            precipitation,
            visibility,
            wind_direction,
            wind_speed,
        });
    }

    Ok(records)
}


/// Read the flight calendar (ICS) at `path`.
/// See [`parse_calendar`] for the recognized lines.
pub fn read_calendar<P>(path: P) -> io::Result<Vec<CalendarEvent>>
    where P: AsRef<Path>,
{
    let file = File::open(path)?;
    parse_calendar(BufReader::new(file))
}


/// Parse calendar events from an ICS stream.
///
/// Only `BEGIN:VEVENT`, `SUMMARY:`, `DTSTART:`, and `END:VEVENT`
/// lines are interpreted; everything else is passed over.
/// An event missing its summary or carrying an unparseable start time
/// is dropped, not reported.
pub fn parse_calendar<R>(reader: R) -> io::Result<Vec<CalendarEvent>>
    where R: BufRead,
{
    let mut events = Vec::new();

    let mut summary: Option<String> = None;
    let mut date: Option<NaiveDateTime> = None;

    for line in reader.lines() {
        let line = line?;

        if line.starts_with("BEGIN:VEVENT") {
            summary = None;
            date = None;
        } else if let Some(rest) = line.strip_prefix("SUMMARY:") {
            summary = Some(rest.trim().to_string());
        } else if let Some(rest) = line.strip_prefix("DTSTART:") {
            date = NaiveDateTime::parse_from_str(
                rest.trim(), CALENDAR_TIMESTAMP_FORMAT
            ).ok();
        } else if line.starts_with("END:VEVENT") {
            if let (Some(summary), Some(date)) = (summary.take(), date.take()) {
                events.push(CalendarEvent { summary, date });
            }
        }
    }

    Ok(events)
}


/// Compose weather records and calendar events into labeled samples.
///
/// Events outside the weather date range are discarded.
/// A weather day enters the output only if at least one flown flight
/// (summary prefixed `FF`) or one cancellation
/// (summary containing `zrušené`) falls on the same calendar date.
/// The label is `true` iff the day saw no cancellation.
pub fn compose(
    records: &[WeatherRecord],
    events: &[CalendarEvent],
) -> Vec<Sample>
{
    let Some(min_date) = records.iter().map(|r| r.date).min() else {
        return Vec::new();
    };
    let max_date = records.iter().map(|r| r.date).max().unwrap();

    let in_range = events.iter()
        .filter(|e| min_date <= e.date && e.date <= max_date)
        .collect::<Vec<_>>();

    let flown = in_range.iter()
        .copied()
        .filter(|e| e.summary.to_lowercase().starts_with(FLOWN_PREFIX))
        .collect::<Vec<_>>();
    let cancelled = in_range.iter()
        .copied()
        .filter(|e| e.summary.to_lowercase().contains(CANCELLED_MARKER))
        .collect::<Vec<_>>();

    records.iter()
        .filter_map(|record| {
            let day = record.date.date();
            let flown_today = flown.iter()
                .any(|e| e.date.date() == day);
            let cancelled_today = cancelled.iter()
                .any(|e| e.date.date() == day);

            if flown_today || cancelled_today {
                Some(record.labeled(!cancelled_today))
            } else {
                None
            }
        })
        .collect()
}


/// Split `samples` into a training and a test set,
/// stratified by class.
///
/// `n_positive`/`n_negative` positively/negatively labeled samples are
/// drawn into the training set after a Fisher-Yates shuffle per class;
/// everything left over becomes the test set.
/// Both output sets are shuffled again so class runs do not survive.
/// Requesting more samples than a class holds is a precondition panic.
pub fn stratified_split<R>(
    samples: &[Sample],
    n_positive: usize,
    n_negative: usize,
    rng: &mut R,
) -> (Vec<Sample>, Vec<Sample>)
    where R: Rng,
{
    let (mut positives, mut negatives): (Vec<Sample>, Vec<Sample>) =
        samples.iter().copied().partition(|s| s.label());

    checker::check_class_counts(n_positive, positives.len(), "positive");
    checker::check_class_counts(n_negative, negatives.len(), "negative");

    positives.shuffle(rng);
    negatives.shuffle(rng);

    let rest_positives = positives.split_off(n_positive);
    let rest_negatives = negatives.split_off(n_negative);

    let mut train = positives;
    train.extend(negatives);
    let mut test = rest_positives;
    test.extend(rest_negatives);

    train.shuffle(rng);
    test.shuffle(rng);

    (train, test)
}


fn parse_weather_timestamp(field: &str) -> io::Result<NaiveDateTime> {
    let field = field.trim();
    if field.len() <= OFFSET_SUFFIX_LEN {
        return Err(invalid_data(format!("Truncated timestamp: {field}")));
    }
    let stripped = &field[..field.len() - OFFSET_SUFFIX_LEN];

    NaiveDateTime::parse_from_str(stripped, WEATHER_TIMESTAMP_FORMAT)
        .map_err(|e| invalid_data(format!("Bad timestamp {field}: {e}")))
}


fn parse_reading(field: &str) -> io::Result<f64> {
    field.trim()
        .parse::<f64>()
        .map_err(|e| invalid_data(format!("Bad reading {field:?}: {e}")))
}


fn invalid_data<E>(message: E) -> io::Error
    where E: Into<String>,
{
    io::Error::new(io::ErrorKind::InvalidData, message.into())
}
