use attlog::config::{Config, VacationRange};
use attlog::core::calendar::SchoolCalendar;
use attlog::core::grid::{self, DayState, GRID_DAYS};
use attlog::core::remind::ReminderLogic;
use attlog::core::summary::summarize;
use attlog::store::models::{AttendanceRecord, Status};
use chrono::NaiveDate;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn test_config() -> Config {
    let mut cfg = Config::default();
    cfg.weekly_off = "Sunday".to_string();
    cfg.holiday_region = "IN".to_string();
    cfg.extra_holidays = vec!["02-04-2026".to_string()];
    cfg.vacations = vec![VacationRange {
        start: "15-05-2026".to_string(),
        end: "30-06-2026".to_string(),
    }];
    cfg
}

#[test]
fn weekday_rules() {
    let cal = SchoolCalendar::from_config(&test_config()).unwrap();

    // 2026-03-10 is a Tuesday, 2026-03-08 a Sunday
    assert!(cal.is_school_day(d(2026, 3, 10)));
    assert!(!cal.is_school_day(d(2026, 3, 8)));
}

#[test]
fn holiday_rules() {
    let cal = SchoolCalendar::from_config(&test_config()).unwrap();

    // Republic Day, Independence Day, Gandhi Jayanti
    assert!(!cal.is_school_day(d(2026, 1, 26)));
    assert!(!cal.is_school_day(d(2026, 8, 15)));
    assert!(!cal.is_school_day(d(2026, 10, 2)));

    // Configured extra holiday (a Thursday)
    assert!(!cal.is_school_day(d(2026, 4, 2)));
}

#[test]
fn vacation_rules_include_both_endpoints() {
    let cal = SchoolCalendar::from_config(&test_config()).unwrap();

    assert!(!cal.is_school_day(d(2026, 5, 15)));
    assert!(!cal.is_school_day(d(2026, 6, 1)));
    assert!(!cal.is_school_day(d(2026, 6, 30)));

    // The day before the range starts is an ordinary school day (a Thursday)
    assert!(cal.is_school_day(d(2026, 5, 14)));
    // The day after the range ends is an ordinary school day (a Wednesday)
    assert!(cal.is_school_day(d(2026, 7, 1)));
}

#[test]
fn inverted_vacation_range_is_a_config_error() {
    let mut cfg = test_config();
    cfg.vacations = vec![VacationRange {
        start: "30-06-2026".to_string(),
        end: "15-05-2026".to_string(),
    }];

    assert!(SchoolCalendar::from_config(&cfg).is_err());
}

#[test]
fn unknown_weekly_off_is_rejected() {
    let mut cfg = test_config();
    cfg.weekly_off = "Someday".to_string();

    assert!(SchoolCalendar::from_config(&cfg).is_err());
}

#[test]
fn grid_starts_on_monday_before_the_first() {
    let cal = SchoolCalendar::from_config(&test_config()).unwrap();
    let cells = grid::month_grid(2026, 3, &[], &cal).unwrap();

    // March 1st 2026 is a Sunday; the grid opens on Monday February 23rd
    assert_eq!(cells.len(), GRID_DAYS);
    assert_eq!(cells[0].date, d(2026, 2, 23));
    assert_eq!(cells[GRID_DAYS - 1].date, d(2026, 4, 5));
}

#[test]
fn grid_states_follow_records_and_rules() {
    let cal = SchoolCalendar::from_config(&test_config()).unwrap();

    let mut synced = AttendanceRecord::new(d(2026, 3, 3), Status::Present);
    synced.synced = true;
    let unsynced = AttendanceRecord::new(d(2026, 3, 10), Status::Present);
    let absent = AttendanceRecord::new(d(2026, 3, 17), Status::Absent);

    let records = vec![synced, unsynced, absent];
    let cells = grid::month_grid(2026, 3, &records, &cal).unwrap();

    let state_of = |date: NaiveDate| {
        cells
            .iter()
            .find(|c| c.date == date)
            .map(|c| c.state)
            .unwrap()
    };

    assert_eq!(state_of(d(2026, 3, 3)), DayState::PresentSynced);
    assert_eq!(state_of(d(2026, 3, 10)), DayState::PresentUnsynced);
    assert_eq!(state_of(d(2026, 3, 17)), DayState::Absent);
    assert_eq!(state_of(d(2026, 3, 8)), DayState::NonSchoolDay);
    assert_eq!(state_of(d(2026, 3, 11)), DayState::NoRecord);
}

#[test]
fn reminder_fires_only_on_the_exact_minute_of_a_school_day() {
    let cfg = test_config();
    let cal = SchoolCalendar::from_config(&cfg).unwrap();

    let tuesday = d(2026, 3, 10);
    let sunday = d(2026, 3, 8);

    assert!(ReminderLogic::due(
        &cfg,
        &cal,
        tuesday.and_hms_opt(7, 0, 0).unwrap()
    ));
    assert!(!ReminderLogic::due(
        &cfg,
        &cal,
        tuesday.and_hms_opt(7, 1, 0).unwrap()
    ));
    assert!(!ReminderLogic::due(
        &cfg,
        &cal,
        tuesday.and_hms_opt(8, 0, 0).unwrap()
    ));
    assert!(!ReminderLogic::due(
        &cfg,
        &cal,
        sunday.and_hms_opt(7, 0, 0).unwrap()
    ));
}

#[test]
fn summary_percentages() {
    let records = vec![
        AttendanceRecord::new(d(2026, 3, 3), Status::Present),
        AttendanceRecord::new(d(2026, 3, 10), Status::Present),
        AttendanceRecord::new(d(2026, 3, 17), Status::Present),
        AttendanceRecord::new(d(2026, 3, 24), Status::Absent),
    ];

    let s = summarize(&records);
    assert_eq!(s.total, 4);
    assert_eq!(s.present, 3);
    assert_eq!(s.absent, 1);
    assert!((s.percent - 75.0).abs() < f64::EPSILON);

    let empty = summarize(&[]);
    assert_eq!(empty.total, 0);
    assert_eq!(empty.percent, 0.0);
}
