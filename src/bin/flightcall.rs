//! Console driver: load the data, grow a tree, report, export.
use colored::Colorize;

use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::exit;
use std::time::Instant;

use flightcall::prelude::*;
use flightcall::export::{write_predictions_csv, Report};


const USAGE: &str = "\
Usage: flightcall <weather.csv> <calendar.ics> <n_positive> <n_negative> [out_dir]

  weather.csv    semicolon-separated weather history
  calendar.ics   flight reservation calendar
  n_positive     positive examples drawn into the training set
  n_negative     negative examples drawn into the training set
  out_dir        output root, default `data` (a timestamped
                 sub-directory is created per run)";


fn main() {
    let args = env::args().collect::<Vec<_>>();
    if args.len() < 5 {
        eprintln!("{USAGE}");
        exit(2);
    }

    let weather_path = &args[1];
    let calendar_path = &args[2];
    let n_positive = parse_count(&args[3]);
    let n_negative = parse_count(&args[4]);
    let out_root = args.get(5).map(String::as_str).unwrap_or("data");

    header();

    // ------------------------------------------------------------------
    // Load
    println!("Loading weather data...");
    let records = match read_weather_csv(weather_path) {
        Ok(records) => records,
        Err(e) => fail(&format!(
            "Reading weather data from {weather_path} failed: {e}"
        )),
    };
    if records.is_empty() {
        fail("The weather file holds no records.");
    }

    let first = records.iter().map(|r| r.date).min().unwrap();
    let last = records.iter().map(|r| r.date).max().unwrap();
    println!(
        "{}",
        format!(
            "Loaded {} weather records, {first} to {last}.",
            records.len()
        ).green()
    );
    line_break();

    println!("Loading calendar data...");
    let events = match read_calendar(calendar_path) {
        Ok(events) => events,
        Err(e) => fail(&format!(
            "Reading the calendar from {calendar_path} failed: {e}"
        )),
    };
    println!(
        "{}",
        format!("Loaded {} calendar events.", events.len()).green()
    );
    line_break();

    // ------------------------------------------------------------------
    // Compose & split
    let samples = compose(&records, &events);
    let available_positive = samples.iter().filter(|s| s.label()).count();
    let available_negative = samples.len() - available_positive;

    println!(
        "The composed intersection holds {} samples:\n\
         {available_positive} positive, {available_negative} negative.",
        samples.len()
    );

    if n_positive == 0 || n_positive > available_positive {
        fail(&format!(
            "n_positive must be in 1..={available_positive}."
        ));
    }
    if n_negative == 0 || n_negative > available_negative {
        fail(&format!(
            "n_negative must be in 1..={available_negative}."
        ));
    }

    let mut rng = rand::thread_rng();
    let (train, test) = stratified_split(
        &samples, n_positive, n_negative, &mut rng
    );
    line_break();

    // ------------------------------------------------------------------
    // Build
    println!("Growing the tree...");
    let now = Instant::now();
    let tree = TreeBuilder::new().build(&train);
    let elapsed = now.elapsed().as_millis();

    println!(
        "{}",
        format!(
            "Tree grown in {elapsed} ms: {} leaves, depth {}.",
            tree.leaves(),
            tree.depth()
        ).green()
    );
    line_break();

    // ------------------------------------------------------------------
    // Diagnostics
    let folder = chrono::Local::now().format("%y%m%d-%H%M%S").to_string();
    let mut report = Report::new(&folder, n_positive, n_negative);

    println!("\n{}", "DIAGNOSTICS".bold());
    for (name, dataset) in [
        ("Training data", &train),
        ("Test data", &test),
        ("All data", &samples),
    ] {
        let diagnostics = Diagnostics::measure(&tree, dataset);
        println!("\n{}", name.cyan());
        println!("{diagnostics}");

        report.push(name, diagnostics);
    }
    line_break();

    // ------------------------------------------------------------------
    // Export
    println!("\nWriting files...");
    let out_dir = PathBuf::from(out_root).join(&folder);
    if let Err(e) = fs::create_dir_all(&out_dir) {
        fail(&format!("Creating {} failed: {e}", out_dir.display()));
    }

    let written = [
        tree.write_mermaid(out_dir.join("Mermaid.txt")),
        report.write_text(out_dir.join("Diagnostics.txt")),
        report.write_json(out_dir.join("Diagnostics.json")),
        write_predictions_csv(out_dir.join("TrainData.csv"), &train, &tree),
        write_predictions_csv(out_dir.join("TestData.csv"), &test, &tree),
        write_predictions_csv(out_dir.join("AllData.csv"), &samples, &tree),
    ];
    for result in written {
        if let Err(e) = result {
            fail(&format!("Writing output files failed: {e}"));
        }
    }

    println!(
        "{}",
        format!("Created 6 files in {}.", out_dir.display()).green()
    );
    println!(
        "\nPaste the content of Mermaid.txt into https://mermaid.live \
         to visualize the tree."
    );
}


fn header() {
    line_break();
    println!("flightcall — go/no-go decision trees from weather history");
    line_break();
    println!();
}


fn line_break() {
    println!("{}", "-".repeat(30));
}


fn parse_count(arg: &str) -> usize {
    match arg.parse::<usize>() {
        Ok(n) => n,
        Err(_) => fail(&format!("Not a sample count: {arg}")),
    }
}


fn fail(message: &str) -> ! {
    eprintln!("{}", message.red());
    exit(1);
}
