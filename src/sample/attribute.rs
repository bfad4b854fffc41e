//! Defines the closed set of weather attributes.
use serde::{Serialize, Deserialize};

use std::fmt;


/// The number of attributes every [`Sample`](crate::Sample) carries.
pub(crate) const ATTRIBUTE_COUNT: usize = 6;


/// The six continuous weather attributes, in stable index order.
/// Splitting rules and diagram export refer to attributes
/// through this enum, never through bare column numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Attribute {
    /// Daily maximum temperature, °C.
    MaxTemp,
    /// Effective cloud cover, %.
    CloudCover,
    /// Precipitation over the last 24 hours, mm.
    Precipitation,
    /// Horizontal visibility, m.
    Visibility,
    /// Wind direction at 10 m, degrees.
    WindDirection,
    /// Wind speed at 10 m, kt.
    WindSpeed,
}


impl Attribute {
    /// All attributes in index order `0..6`.
    /// Split selection iterates in this order,
    /// so gain ties resolve to the lowest index.
    pub const ALL: [Self; ATTRIBUTE_COUNT] = [
        Self::MaxTemp,
        Self::CloudCover,
        Self::Precipitation,
        Self::Visibility,
        Self::WindDirection,
        Self::WindSpeed,
    ];


    /// Returns the stable index of this attribute.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Self::MaxTemp       => 0,
            Self::CloudCover    => 1,
            Self::Precipitation => 2,
            Self::Visibility    => 3,
            Self::WindDirection => 4,
            Self::WindSpeed     => 5,
        }
    }


    /// Returns the attribute at `index`.
    /// An index outside `0..6` is a contract violation
    /// and panics immediately.
    #[inline]
    pub fn from_index(index: usize) -> Self {
        match index {
            0 => Self::MaxTemp,
            1 => Self::CloudCover,
            2 => Self::Precipitation,
            3 => Self::Visibility,
            4 => Self::WindDirection,
            5 => Self::WindSpeed,
            _ => panic!(
                "Attribute index {index} is out of range \
                 (expected 0..{ATTRIBUTE_COUNT})"
            ),
        }
    }


    /// Human-readable name with unit, used for diagram export.
    #[inline]
    pub fn name(self) -> &'static str {
        match self {
            Self::MaxTemp       => "Max temperature (°C)",
            Self::CloudCover    => "Cloud cover (%)",
            Self::Precipitation => "Precipitation 24h (mm)",
            Self::Visibility    => "Visibility (m)",
            Self::WindDirection => "Wind direction (°)",
            Self::WindSpeed     => "Wind speed (kt)",
        }
    }
}


impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
