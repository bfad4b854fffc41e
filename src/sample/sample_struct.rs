//! Defines the labeled sample and the raw input records.
use chrono::NaiveDateTime;
use serde::{Serialize, Deserialize};

use super::attribute::Attribute;


/// One labeled observation:
/// six continuous weather readings and the flight outcome of that day.
/// Samples are immutable once created;
/// the loader produces them wholesale and the tree never mutates them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    max_temp: f64,
    cloud_cover: f64,
    precipitation: f64,
    visibility: f64,
    wind_direction: f64,
    wind_speed: f64,
    label: bool,
}


impl Sample {
    /// Construct a sample from its six readings, in attribute order,
    /// and its class label (`true` means "flown").
    #[inline]
    pub fn new(
        max_temp: f64,
        cloud_cover: f64,
        precipitation: f64,
        visibility: f64,
        wind_direction: f64,
        wind_speed: f64,
        label: bool,
    ) -> Self
    {
        Self {
            max_temp,
            cloud_cover,
            precipitation,
            visibility,
            wind_direction,
            wind_speed,
            label,
        }
    }


    /// Returns the reading for the given attribute.
    #[inline]
    pub fn value(&self, attribute: Attribute) -> f64 {
        match attribute {
            Attribute::MaxTemp       => self.max_temp,
            Attribute::CloudCover    => self.cloud_cover,
            Attribute::Precipitation => self.precipitation,
            Attribute::Visibility    => self.visibility,
            Attribute::WindDirection => self.wind_direction,
            Attribute::WindSpeed     => self.wind_speed,
        }
    }


    /// Returns the reading at attribute index `index`.
    /// Panics for indices outside `0..6`,
    /// see [`Attribute::from_index`].
    #[inline]
    pub fn at(&self, index: usize) -> f64 {
        self.value(Attribute::from_index(index))
    }


    /// Returns the class label.
    #[inline]
    pub fn label(&self) -> bool {
        self.label
    }
}


/// One row of the weather history CSV:
/// a timestamp and the six readings of that day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherRecord {
    /// Observation timestamp (local, offset stripped).
    pub date: NaiveDateTime,
    /// Daily maximum temperature, °C.
    pub max_temp: f64,
    /// Effective cloud cover, %.
    pub cloud_cover: f64,
    /// Precipitation over the last 24 hours, mm.
    pub precipitation: f64,
    /// Horizontal visibility, m, clamped to the sensor ceiling.
    pub visibility: f64,
    /// Wind direction at 10 m, degrees.
    pub wind_direction: f64,
    /// Wind speed at 10 m, kt.
    pub wind_speed: f64,
}


impl WeatherRecord {
    /// Attach a class label, turning the record into a [`Sample`].
    #[inline]
    pub(crate) fn labeled(&self, label: bool) -> Sample {
        Sample::new(
            self.max_temp,
            self.cloud_cover,
            self.precipitation,
            self.visibility,
            self.wind_direction,
            self.wind_speed,
            label,
        )
    }
}


/// One `VEVENT` of the flight calendar: its summary line and start time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    /// The `SUMMARY:` line content.
    pub summary: String,
    /// The `DTSTART:` timestamp.
    pub date: NaiveDateTime,
}
