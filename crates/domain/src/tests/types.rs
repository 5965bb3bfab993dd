// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::day;
use crate::{DayIndex, DomainError, WEEK, WeekDay};

#[test]
fn test_week_has_seven_days_sunday_first() {
    assert_eq!(WEEK.len(), 7);
    assert_eq!(WEEK[0].long_name, "Sunday");
    assert_eq!(WEEK[6].long_name, "Saturday");

    for (position, week_day) in WEEK.iter().enumerate() {
        assert_eq!(usize::from(week_day.index.value()), position);
    }
}

#[test]
fn test_short_labels() {
    let labels: String = WEEK.iter().map(|d| d.short_label).collect();
    assert_eq!(labels, "SMTWTFS");
}

#[test]
fn test_day_index_rejects_out_of_range() {
    assert!(DayIndex::new(6).is_ok());
    assert_eq!(DayIndex::new(7), Err(DomainError::DayIndexOutOfRange(7)));
    assert_eq!(
        DayIndex::try_from(200u8),
        Err(DomainError::DayIndexOutOfRange(200))
    );
}

#[test]
fn test_next_and_prev_wrap_around_the_week() {
    assert_eq!(day(6).next(), day(0));
    assert_eq!(day(0).prev(), day(6));
    assert_eq!(day(3).next(), day(4));
    assert_eq!(day(3).prev(), day(2));
}

#[test]
fn test_adjacency_includes_the_weekend_seam() {
    assert!(day(6).is_adjacent_to(day(0)));
    assert!(day(0).is_adjacent_to(day(6)));
    assert!(day(2).is_adjacent_to(day(3)));
    assert!(!day(2).is_adjacent_to(day(4)));
    assert!(!day(2).is_adjacent_to(day(2)));
}

#[test]
fn test_week_day_lookup() {
    let friday: WeekDay = day(5).week_day();
    assert_eq!(friday.long_name, "Friday");
    assert_eq!(friday.short_label, 'F');
    assert_eq!(friday.abbreviation(), "Fri");
}

#[test]
fn test_parse_day_by_index_or_name() {
    assert_eq!("3".parse::<DayIndex>().unwrap(), day(3));
    assert_eq!("wed".parse::<DayIndex>().unwrap(), day(3));
    assert_eq!("Thursday".parse::<DayIndex>().unwrap(), day(4));
    assert_eq!("th".parse::<DayIndex>().unwrap(), day(4));
    assert_eq!("SA".parse::<DayIndex>().unwrap(), day(6));
}

#[test]
fn test_parse_day_rejects_ambiguous_and_unknown() {
    assert!(matches!(
        "t".parse::<DayIndex>(),
        Err(DomainError::UnknownDay(_))
    ));
    assert!(matches!(
        "funday".parse::<DayIndex>(),
        Err(DomainError::UnknownDay(_))
    ));
    assert_eq!(
        "9".parse::<DayIndex>(),
        Err(DomainError::DayIndexOutOfRange(9))
    );
}
