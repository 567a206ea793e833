use chrono::NaiveDateTime;
use csv::Reader;
use ichimoku_core::common::time::Time;
use ichimoku_core::{Analyzer, IchimokuConfig};
use std::error::Error;
use std::fs::File;
use std::path::Path;
use thiserror::Error as ThisError;

#[derive(Debug)]
struct CsvRecord {
    timestamp: NaiveDateTime,
    open: f64,
    high: f64,
    low: f64,
    close: f64,
    volume: f64,
}

#[derive(Debug, ThisError)]
enum DataError {
    #[error("csv read error: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid timestamp: {0}")]
    Time(#[from] chrono::ParseError),
    #[error("invalid price field: {0}")]
    Price(#[from] std::num::ParseFloatError),
    #[error("record too short: missing field {0}")]
    MissingField(usize),
}

fn main() -> Result<(), Box<dyn Error>> {
    let arg = std::env::args()
        .nth(1)
        .ok_or("usage: ichimoku_cli <csv-file-or-directory>")?;
    let path = Path::new(&arg);

    if path.is_dir() {
        for entry in std::fs::read_dir(path)? {
            let entry = entry?;
            let path = entry.path();

            if path.extension().and_then(|s| s.to_str()) == Some("csv") {
                println!("Processing file: {:?}", path);
                process_csv_file(&path)?;
            }
        }
    } else {
        println!("Processing file: {:?}", path);
        process_csv_file(path)?;
    }

    Ok(())
}

fn process_csv_file(path: &Path) -> Result<(), Box<dyn Error>> {
    let file = File::open(path)?;
    let mut rdr = Reader::from_reader(file);

    let mut analyzer = Analyzer::new(IchimokuConfig::new(None)?);

    for result in rdr.records() {
        let record = result.map_err(DataError::from)?;
        let csv_record = parse_csv_record(&record)?;

        analyzer.add_bar(
            Time::from_naive(csv_record.timestamp),
            csv_record.open,
            csv_record.high,
            csv_record.low,
            csv_record.close,
            csv_record.volume,
        )?;
    }

    let metric = analyzer.metric()?;
    let last = analyzer.kline_list.last().expect("bars were added");

    println!("Number of K-line units: {}", analyzer.kline_list.len());
    println!("Last bar time: {}", last.time);
    println!("{}", serde_json::to_string(&metric)?);
    println!(
        "Last close {} is {} the cloud",
        last.close,
        metric.cloud_position(last.close)
    );

    Ok(())
}

fn parse_csv_record(record: &csv::StringRecord) -> Result<CsvRecord, DataError> {
    let field = |idx: usize| record.get(idx).ok_or(DataError::MissingField(idx));

    let timestamp = NaiveDateTime::parse_from_str(field(0)?, "%Y-%m-%d %H:%M:%S")?;

    Ok(CsvRecord {
        timestamp,
        open: field(1)?.parse()?,
        high: field(2)?.parse()?,
        low: field(3)?.parse()?,
        close: field(4)?.parse()?,
        volume: field(5)?.parse()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_csv_record() {
        let record = csv::StringRecord::from(vec![
            "2024-01-01 09:30:00",
            "10.0",
            "12.0",
            "9.5",
            "11.0",
            "1000",
        ]);
        let parsed = parse_csv_record(&record).unwrap();
        assert_eq!(parsed.open, 10.0);
        assert_eq!(parsed.close, 11.0);
        assert_eq!(parsed.volume, 1000.0);
    }

    #[test]
    fn test_parse_csv_record_short_row() {
        let record = csv::StringRecord::from(vec!["2024-01-01 09:30:00", "10.0"]);
        assert!(matches!(
            parse_csv_record(&record),
            Err(DataError::MissingField(2))
        ));
    }

    #[test]
    fn test_parse_csv_record_bad_price() {
        let record = csv::StringRecord::from(vec![
            "2024-01-01 09:30:00",
            "10.0",
            "twelve",
            "9.5",
            "11.0",
            "1000",
        ]);
        assert!(matches!(
            parse_csv_record(&record),
            Err(DataError::Price(_))
        ));
    }
}
