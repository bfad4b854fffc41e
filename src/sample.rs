//! Defines the data model and the loading/composition steps.
mod attribute;
mod sample_struct;
mod reader;

pub use attribute::Attribute;
pub use sample_struct::{
    Sample,
    WeatherRecord,
    CalendarEvent,
};
pub use reader::{
    read_weather_csv,
    parse_weather,
    read_calendar,
    parse_calendar,
    compose,
    stratified_split,
};
