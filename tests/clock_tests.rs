mod common;
use common::{clock_at, dt, memory_pool};
use timesheets::core::clock::ClockLogic;
use timesheets::core::manual::PresetInput;
use timesheets::core::validate::{ShiftRejection, ShiftRules};
use timesheets::db::initialize::init_db;
use timesheets::db::pool::DbPool;
use timesheets::db::queries::{count_shifts, load_shift, most_recent_shift};
use timesheets::errors::AppError;

#[test]
fn test_clock_out_on_empty_timesheet() {
    let mut pool = DbPool::in_memory().expect("db");
    init_db(&pool.conn).expect("schema");
    let mut input = PresetInput::none();

    let res = ClockLogic::clock_out(
        &mut pool,
        &clock_at("2019-07-01 17:00:00"),
        &ShiftRules::default(),
        &mut input,
        Some("done"),
    );

    assert!(matches!(res, Err(AppError::EmptyTimesheet)));
    assert_eq!(count_shifts(&pool.conn).expect("count"), 0);
    assert_eq!(input.times_asked(), 0);
}

#[test]
fn test_clock_in_opens_shift_at_now() {
    let mut pool = memory_pool();

    let shift = ClockLogic::clock_in(&mut pool, &clock_at("2019-07-01 08:00:00"), "test")
        .expect("clock in");

    let stored = load_shift(&pool.conn, shift.id).expect("load").expect("row");
    assert_eq!(stored.job, "test");
    assert_eq!(stored.start, dt("2019-07-01 08:00:00"));
    assert!(stored.is_open());
    assert_eq!(stored.duration, None);
    assert_eq!(stored.note, None);
}

#[test]
fn test_clock_in_accepts_unknown_job() {
    let mut pool = memory_pool();

    let shift = ClockLogic::clock_in(&mut pool, &clock_at("2019-07-01 08:00:00"), "nope")
        .expect("clock in is never validated");
    assert!(shift.is_open());
}

#[test]
fn test_automatic_clock_out() {
    let mut pool = memory_pool();
    ClockLogic::clock_in(&mut pool, &clock_at("2019-07-01 08:00:00"), "test").expect("in");

    let mut input = PresetInput::new(Some(dt("2019-07-01 09:00:00")));
    let out = ClockLogic::clock_out(
        &mut pool,
        &clock_at("2019-07-01 17:00:00"),
        &ShiftRules::new(10),
        &mut input,
        Some("done"),
    )
    .expect("clock out");

    assert!(!out.was_manual());
    assert_eq!(input.times_asked(), 0);
    assert_eq!(out.shift.end, Some(dt("2019-07-01 17:00:00")));
    assert_eq!(out.shift.duration, Some(9));

    let stored = most_recent_shift(&pool.conn).expect("q").expect("row");
    assert_eq!(stored.end, Some(dt("2019-07-01 17:00:00")));
    assert_eq!(stored.duration, Some(9));
    assert_eq!(stored.note.as_deref(), Some("done"));
}

#[test]
fn test_clock_out_twice_is_not_clocked_in() {
    let mut pool = memory_pool();
    let clock = clock_at("2019-07-01 17:00:00");
    let rules = ShiftRules::default();

    ClockLogic::clock_in(&mut pool, &clock_at("2019-07-01 08:00:00"), "test").expect("in");
    ClockLogic::clock_out(&mut pool, &clock, &rules, &mut PresetInput::none(), None)
        .expect("first out");

    let res = ClockLogic::clock_out(&mut pool, &clock, &rules, &mut PresetInput::none(), None);
    assert!(matches!(res, Err(AppError::NotClockedIn)));
}

#[test]
fn test_forgotten_clock_out_uses_manual_time() {
    let mut pool = memory_pool();
    ClockLogic::clock_in(&mut pool, &clock_at("2019-07-01 08:00:00"), "test").expect("in");

    let mut input = PresetInput::new(Some(dt("2019-07-01 16:30:00")));
    let out = ClockLogic::clock_out(
        &mut pool,
        &clock_at("2019-07-02 09:00:00"),
        &ShiftRules::new(10),
        &mut input,
        Some("late"),
    )
    .expect("manual clock out");

    assert_eq!(input.times_asked(), 1);
    assert_eq!(
        out.fallback,
        Some(ShiftRejection::TooLong {
            duration: 25,
            max_shift: 10
        })
    );
    assert_eq!(out.shift.end, Some(dt("2019-07-01 16:30:00")));
    assert_eq!(out.shift.duration, Some(8));
}

#[test]
fn test_missing_manual_time_leaves_shift_open() {
    let mut pool = memory_pool();
    let opened =
        ClockLogic::clock_in(&mut pool, &clock_at("2019-07-01 08:00:00"), "test").expect("in");

    let mut input = PresetInput::none();
    let res = ClockLogic::clock_out(
        &mut pool,
        &clock_at("2019-07-02 09:00:00"),
        &ShiftRules::new(10),
        &mut input,
        Some("late"),
    );

    assert!(matches!(res, Err(AppError::InvalidManualClockOut(_))));
    assert_eq!(input.times_asked(), 1);

    let stored = load_shift(&pool.conn, opened.id).expect("load").expect("row");
    assert_eq!(stored, opened);
}

#[test]
fn test_invalid_manual_time_leaves_shift_open() {
    let mut pool = memory_pool();
    let opened =
        ClockLogic::clock_in(&mut pool, &clock_at("2019-07-01 08:00:00"), "test").expect("in");
    let clock = clock_at("2019-07-02 09:00:00");
    let rules = ShiftRules::new(10);

    // still too long
    let res = ClockLogic::clock_out(
        &mut pool,
        &clock,
        &rules,
        &mut PresetInput::new(Some(dt("2019-07-01 23:00:00"))),
        None,
    );
    assert!(matches!(res, Err(AppError::InvalidManualClockOut(_))));

    // before clock-in
    let res = ClockLogic::clock_out(
        &mut pool,
        &clock,
        &rules,
        &mut PresetInput::new(Some(dt("2019-07-01 07:00:00"))),
        None,
    );
    assert!(matches!(res, Err(AppError::InvalidManualClockOut(_))));

    let stored = load_shift(&pool.conn, opened.id).expect("load").expect("row");
    assert!(stored.is_open());
    assert_eq!(stored.note, None);
}

#[test]
fn test_clock_out_targets_latest_shift_regardless_of_job() {
    let mut pool = memory_pool();
    let first =
        ClockLogic::clock_in(&mut pool, &clock_at("2019-07-01 08:00:00"), "test").expect("in");
    let second =
        ClockLogic::clock_in(&mut pool, &clock_at("2019-07-01 09:00:00"), "other").expect("in");

    let out = ClockLogic::clock_out(
        &mut pool,
        &clock_at("2019-07-01 12:00:00"),
        &ShiftRules::default(),
        &mut PresetInput::none(),
        None,
    )
    .expect("out");

    assert_eq!(out.shift.id, second.id);
    assert_eq!(out.shift.job, "other");
    assert_eq!(out.shift.duration, Some(3));

    let untouched = load_shift(&pool.conn, first.id).expect("load").expect("row");
    assert!(untouched.is_open());
}
