mod common;
use common::{clock_at, dt};
use timesheets::core::validate::{ShiftRejection, ShiftRules, shift_duration};

const NOW: &str = "2019-07-02 00:00:00";

#[test]
fn test_duration_truncates_to_whole_hours() {
    let start = dt("2019-07-01 08:00:00");

    assert_eq!(shift_duration(start, start), 0);
    assert_eq!(shift_duration(start, dt("2019-07-01 08:59:59")), 0);
    assert_eq!(shift_duration(start, dt("2019-07-01 09:59:00")), 1);
    assert_eq!(shift_duration(start, dt("2019-07-01 17:00:00")), 9);
    assert_eq!(shift_duration(start, dt("2019-07-01 18:00:01")), 10);
}

#[test]
fn test_zero_length_shift_is_valid() {
    let rules = ShiftRules::default();
    let t = dt("2019-07-01 08:00:00");

    assert_eq!(rules.validate(&clock_at(NOW), t, t), Ok(0));
}

#[test]
fn test_end_before_start_is_rejected_first() {
    let rules = ShiftRules::default();
    let clock = clock_at(NOW);

    // also far too long and in the future: the ordering rule still wins
    let res = rules.validate(&clock, dt("2030-01-01 08:00:00"), dt("2019-07-01 08:00:00"));
    assert_eq!(res, Err(ShiftRejection::EndsBeforeStart));

    let res = rules.validate(&clock, dt("2019-07-02 08:00:00"), dt("2019-07-01 17:00:00"));
    assert_eq!(res, Err(ShiftRejection::EndsBeforeStart));
}

#[test]
fn test_max_shift_boundary_uses_floored_hours() {
    let rules = ShiftRules::new(10);
    let clock = clock_at(NOW);
    let start = dt("2019-07-01 08:00:00");

    assert_eq!(rules.validate(&clock, start, dt("2019-07-01 18:00:00")), Ok(10));
    assert_eq!(rules.validate(&clock, start, dt("2019-07-01 18:00:01")), Ok(10));
    assert_eq!(rules.validate(&clock, start, dt("2019-07-01 18:59:59")), Ok(10));
    assert_eq!(
        rules.validate(&clock, start, dt("2019-07-01 19:00:00")),
        Err(ShiftRejection::TooLong {
            duration: 11,
            max_shift: 10
        })
    );
}

#[test]
fn test_too_long_wins_over_future() {
    let rules = ShiftRules::new(10);
    let clock = clock_at(NOW);

    let res = rules.validate(&clock, dt("2019-07-01 20:00:00"), dt("2019-07-02 12:00:00"));
    assert!(matches!(res, Err(ShiftRejection::TooLong { .. })));
}

#[test]
fn test_future_bounds_are_rejected() {
    let rules = ShiftRules::default();
    let clock = clock_at("2019-07-01 12:00:00");

    // end in the future
    assert_eq!(
        rules.validate(&clock, dt("2019-07-01 08:00:00"), dt("2019-07-01 12:00:01")),
        Err(ShiftRejection::InFuture)
    );
    // both in the future
    assert_eq!(
        rules.validate(&clock, dt("2019-07-01 13:00:00"), dt("2019-07-01 14:00:00")),
        Err(ShiftRejection::InFuture)
    );
    // ending exactly now is fine
    assert_eq!(
        rules.validate(&clock, dt("2019-07-01 08:00:00"), dt("2019-07-01 12:00:00")),
        Ok(4)
    );
}

#[test]
fn test_custom_max_shift() {
    let rules = ShiftRules::new(4);
    let clock = clock_at(NOW);
    let start = dt("2019-07-01 08:00:00");

    assert!(rules.is_valid(&clock, start, dt("2019-07-01 12:30:00")));
    assert!(!rules.is_valid(&clock, start, dt("2019-07-01 13:00:00")));
}

#[test]
fn test_rejection_messages() {
    assert_eq!(
        ShiftRejection::EndsBeforeStart.to_string(),
        "Clock-in can't be after clock-out"
    );
    assert_eq!(
        ShiftRejection::InFuture.to_string(),
        "Shifts can't start or end in the future"
    );
    assert!(
        ShiftRejection::TooLong {
            duration: 12,
            max_shift: 10
        }
        .to_string()
        .contains("maximum length of 10 hours")
    );
}
