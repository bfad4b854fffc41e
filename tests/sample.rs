use flightcall::prelude::*;

use chrono::NaiveDate;
use rand::SeedableRng;
use rand::rngs::StdRng;

use std::io::Cursor;


const WEATHER_CSV: &str = "\
validdate;t_max_2m_24h:C;effective_cloud_cover:p;precip_24h:mm;visibility:m;wind_dir_10m:d;wind_speed_10m:kn
2023-03-01T00:00:00+01:00;12.5;80.0;0.3;20000.0;270.0;8.0
2023-03-02T00:00:00+01:00;15.0;20.0;0.0;5000.0;90.0;12.0
2023-03-03T00:00:00+01:00;9.0;100.0;4.2;1200.0;180.0;25.0
";

const CALENDAR_ICS: &str = "\
BEGIN:VCALENDAR
BEGIN:VEVENT
SUMMARY:FF Poprad sightseeing
DTSTART:20230301T080000Z
END:VEVENT
BEGIN:VEVENT
SUMMARY:Let zrušené - vietor
DTSTART:20230302T080000Z
END:VEVENT
BEGIN:VEVENT
SUMMARY:FF no start time
END:VEVENT
BEGIN:VEVENT
SUMMARY:FF out of range
DTSTART:20230401T080000Z
END:VEVENT
END:VCALENDAR
";


fn records() -> Vec<WeatherRecord> {
    parse_weather(Cursor::new(WEATHER_CSV)).unwrap()
}


fn events() -> Vec<CalendarEvent> {
    parse_calendar(Cursor::new(CALENDAR_ICS)).unwrap()
}


#[test]
fn weather_rows_parse_with_stripped_offsets() {
    let records = records();

    assert_eq!(records.len(), 3);
    assert_eq!(
        records[0].date,
        NaiveDate::from_ymd_opt(2023, 3, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    );
    assert_eq!(records[0].max_temp, 12.5);
    assert_eq!(records[2].wind_speed, 25.0);
}


#[test]
fn visibility_is_clamped_to_the_sensor_ceiling() {
    let records = records();

    assert_eq!(records[0].visibility, 9999.0);
    assert_eq!(records[1].visibility, 5000.0);
}


#[test]
fn malformed_readings_surface_as_invalid_data() {
    let csv = "header\n2023-03-01T00:00:00+01:00;abc;1;2;3;4;5\n";
    let err = parse_weather(Cursor::new(csv)).unwrap_err();

    assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
}


#[test]
fn calendar_events_require_summary_and_start() {
    let events = events();

    // The event without DTSTART is dropped.
    assert_eq!(events.len(), 3);
    assert_eq!(events[0].summary, "FF Poprad sightseeing");
    assert_eq!(
        events[1].date,
        NaiveDate::from_ymd_opt(2023, 3, 2)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap()
    );
}


#[test]
fn composition_labels_days_by_their_outcomes() {
    let samples = compose(&records(), &events());

    // Day 1 was flown, day 2 cancelled,
    // day 3 saw no events and is excluded,
    // and the April event falls outside the weather range.
    assert_eq!(samples.len(), 2);
    assert!(samples[0].label());
    assert!(!samples[1].label());

    // Readings carry over into the sample unchanged.
    assert_eq!(samples[0].value(Attribute::MaxTemp), 12.5);
    assert_eq!(samples[1].value(Attribute::WindDirection), 90.0);
}


#[test]
fn flown_matching_ignores_case() {
    let records = records();
    let events = vec![CalendarEvent {
        summary: "ff evening hop".to_string(),
        date: NaiveDate::from_ymd_opt(2023, 3, 1)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap(),
    }];

    let samples = compose(&records, &events);

    assert_eq!(samples.len(), 1);
    assert!(samples[0].label());
}


#[test]
fn stratified_split_respects_the_requested_counts() {
    let mut samples = (0..6)
        .map(|i| Sample::new(i as f64, 0.0, 0.0, 0.0, 0.0, 0.0, true))
        .collect::<Vec<_>>();
    samples.extend(
        (6..10).map(|i| Sample::new(i as f64, 0.0, 0.0, 0.0, 0.0, 0.0, false))
    );

    let mut rng = StdRng::seed_from_u64(42);
    let (train, test) = stratified_split(&samples, 4, 2, &mut rng);

    assert_eq!(train.len(), 6);
    assert_eq!(test.len(), 4);
    assert_eq!(train.iter().filter(|s| s.label()).count(), 4);
    assert_eq!(test.iter().filter(|s| s.label()).count(), 2);

    // Together the two sets hold exactly the input samples.
    let mut seen = train.iter()
        .chain(test.iter())
        .map(|s| s.value(Attribute::MaxTemp) as usize)
        .collect::<Vec<_>>();
    seen.sort_unstable();
    assert_eq!(seen, (0..10).collect::<Vec<_>>());
}


#[test]
#[should_panic]
fn oversized_split_requests_are_rejected() {
    let samples = (0..4)
        .map(|i| Sample::new(i as f64, 0.0, 0.0, 0.0, 0.0, 0.0, i % 2 == 0))
        .collect::<Vec<_>>();

    let mut rng = StdRng::seed_from_u64(42);
    stratified_split(&samples, 3, 1, &mut rng);
}
