//! End-to-end tests: Parquet ticks through session preparation to reports

use chrono::{DateTime, Duration, TimeZone, Utc};
use chrono_tz::America::Chicago;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use swing_momentum::config::Config;
use swing_momentum::data::{TickReader, TickWriter};
use swing_momentum::report::SessionReport;
use swing_momentum::session::{group_by_date, prepare_session, price_series, TradeTick};
use swing_momentum::swing::{SwingConfig, SwingEstimator};
use tempfile::TempDir;

/// Session open in exchange-local time, stamped in UTC
fn open(day: u32) -> DateTime<Utc> {
    Chicago
        .with_ymd_and_hms(2016, 10, day, 8, 30, 0)
        .unwrap()
        .with_timezone(&Utc)
}

fn ticks_for(day: u32, prices: &[Decimal]) -> Vec<TradeTick> {
    prices
        .iter()
        .enumerate()
        .map(|(i, p)| {
            TradeTick::new(open(day) + Duration::seconds(i as i64), "SPY", *p, dec!(100))
        })
        .collect()
}

#[test]
fn test_config_example_loads() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/config.toml.example");
    let config = Config::load(path).unwrap();
    assert_eq!(config.session.symbol, "SPY");
    assert_eq!(config.swing.threshold, dec!(0.05));
}

#[test]
fn test_parquet_to_report() {
    let dir = TempDir::new().unwrap();
    let config = Config::default();

    // Repeated prints collapse before the swing scan
    let mut ticks = ticks_for(
        27,
        &[
            dec!(213.00),
            dec!(213.00),
            dec!(213.05),
            dec!(213.05),
            dec!(213.10),
            dec!(213.07),
            dec!(212.98),
        ],
    );
    ticks.extend(ticks_for(28, &[dec!(212.00), dec!(212.02), dec!(212.03)]));

    let path = dir.path().join("spy.parquet");
    TickWriter::new(dir.path().to_path_buf())
        .write_ticks(&path, &ticks)
        .unwrap();
    let loaded = TickReader::new(path).read_ticks().unwrap();
    assert_eq!(loaded.len(), ticks.len());

    let estimator = SwingEstimator::new(SwingConfig::from(&config.swing));
    let mut reports = Vec::new();
    for (date, day) in group_by_date(loaded, config.session.timezone) {
        let prepared = prepare_session(day, "SPY", &config.session.window(), true);
        let prices = price_series(&prepared);
        reports.push(SessionReport::build("SPY", date, &prices, &estimator, 1, 1).unwrap());
    }

    assert_eq!(reports.len(), 2);

    // 213.00, 213.05, 213.10, 213.07, 212.98
    // Seeds 0,1 then 213.10 (+0.05) and 212.98 (-0.12)
    let first = &reports[0];
    assert_eq!(first.ticks, 5);
    assert_eq!(first.pivots, vec![0, 1, 2, 4]);
    assert_eq!(first.accuracy.ratio(), Some(dec!(0.5)));

    // Range never reaches 0.05
    let second = &reports[1];
    assert!(second.pivots.is_empty());
    assert!(second
        .format_table()
        .contains("Momentum accuracy: insufficient data"));
}

#[test]
fn test_reports_serialize_to_json() {
    let estimator = SwingEstimator::new(SwingConfig { threshold: dec!(5) });
    let prices: Vec<Decimal> = [100, 110, 100, 110].iter().map(|&v| Decimal::from(v)).collect();
    let date = open(27).with_timezone(&Chicago).date_naive();

    let reports = vec![SessionReport::build("SPY", date, &prices, &estimator, 1, 1).unwrap()];
    let json = serde_json::to_value(&reports).unwrap();

    assert_eq!(json[0]["accuracy"]["status"], "measured");
    assert_eq!(json[0]["accuracy"]["transitions"], 2);
    assert_eq!(json[0]["accuracy"]["continuations"], 0);
}
