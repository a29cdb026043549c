use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use sales_trend::app::AppState;
use sales_trend::data::{Metric, SalesRecord};
use sales_trend::series::Period;

/// One record per month over `months` consecutive months starting 2023-01,
/// with totals following a simple upward path
fn monthly_records(months: usize) -> Vec<SalesRecord> {
    (0..months)
        .map(|i| SalesRecord {
            date: NaiveDate::from_ymd_opt(2023, 1 + i as u32, 15).unwrap(),
            city: if i % 2 == 0 { "Yangon" } else { "Mandalay" }.to_string(),
            branch: if i % 2 == 0 { "A" } else { "B" }.to_string(),
            product_line: "Health and beauty".to_string(),
            total: 100.0 * (i + 1) as f64,
            profit: 10.0 * (i + 1) as f64,
            rating: 8.0,
        })
        .collect()
}

#[test]
fn starts_in_setup_with_no_dashboard() {
    let state = AppState::new();
    assert!(state.dashboard().is_none());
}

#[test]
fn setup_with_records_opens_the_dashboard() {
    let state = AppState::new().complete_setup(monthly_records(4)).unwrap();
    let dashboard = state.dashboard().expect("dashboard stage");
    assert_eq!(dashboard.records().len(), 4);
}

#[test]
fn setup_with_no_records_is_rejected() {
    assert!(AppState::new().complete_setup(Vec::new()).is_err());
}

#[test]
fn reset_returns_to_setup() {
    let state = AppState::new().complete_setup(monthly_records(4)).unwrap();
    let state = state.reset();
    assert!(state.dashboard().is_none());
}

#[test]
fn filters_by_city_and_branch() {
    let state = AppState::new().complete_setup(monthly_records(4)).unwrap();
    let dashboard = state.dashboard().unwrap();

    let yangon = dashboard.filter(&[], &["Yangon"], &[]);
    assert_eq!(yangon.len(), 2);
    assert!(yangon.iter().all(|r| r.city == "Yangon"));

    let branch_b = dashboard.filter(&[], &[], &["B"]);
    assert_eq!(branch_b.len(), 2);

    // Empty selections mean "all"
    assert_eq!(dashboard.filter(&[], &[], &[]).len(), 4);
}

#[test]
fn filters_by_month() {
    let state = AppState::new().complete_setup(monthly_records(4)).unwrap();
    let dashboard = state.dashboard().unwrap();

    let january: Period = "2023-01".parse().unwrap();
    let selected = dashboard.filter(&[january], &[], &[]);
    assert_eq!(selected.len(), 1);
    assert_eq!(selected[0].total, 100.0);
}

#[test]
fn kpis_summarize_the_selected_records() {
    let records = monthly_records(4);
    let state = AppState::new().complete_setup(records.clone()).unwrap();
    let dashboard = state.dashboard().unwrap();

    let kpis = dashboard.kpis(&records, 6).unwrap();
    assert_eq!(kpis.total_sales, 1000.0);
    assert_eq!(kpis.total_profit, 100.0);
    assert_eq!(kpis.average_rating, 8.0);

    // Totals follow y = 100(x+1); the linear fit extends to 500 next month
    let next = kpis.next_month_sales.expect("forecastable history");
    assert!((next - 500.0).abs() < 1e-6);
}

#[test]
fn next_month_kpi_matches_the_trend_forecast() {
    let records = monthly_records(6);
    let state = AppState::new().complete_setup(records.clone()).unwrap();
    let dashboard = state.dashboard().unwrap();

    let kpis = dashboard.kpis(&records, 6).unwrap();
    let trend = dashboard
        .sales_trend(&records, Metric::TotalSales, 6)
        .unwrap();

    assert_eq!(kpis.next_month_sales, trend.next_period().map(|p| p.value));
}

#[test]
fn kpis_omit_the_forecast_when_history_is_too_short() {
    let records = monthly_records(1);
    let state = AppState::new().complete_setup(records.clone()).unwrap();
    let dashboard = state.dashboard().unwrap();

    let kpis = dashboard.kpis(&records, 6).unwrap();
    assert_eq!(kpis.total_sales, 100.0);
    assert!(kpis.next_month_sales.is_none());
}

#[test]
fn kpis_over_no_records_are_an_error() {
    let state = AppState::new().complete_setup(monthly_records(2)).unwrap();
    let dashboard = state.dashboard().unwrap();
    assert!(dashboard.kpis(&[], 6).is_err());
}

#[test]
fn trend_bundle_covers_the_full_history() {
    let records = monthly_records(6);
    let state = AppState::new().complete_setup(records.clone()).unwrap();
    let dashboard = state.dashboard().unwrap();

    let trend = dashboard
        .sales_trend(&records, Metric::TotalSales, 3)
        .unwrap();

    assert_eq!(trend.history.len(), 6);
    assert_eq!(trend.fitted.len(), 6);
    assert_eq!(trend.future.len(), 3);
    assert_eq!(trend.model_name, "Polynomial Regression (Degree 2)");
}
