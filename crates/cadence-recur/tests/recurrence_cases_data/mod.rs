use cadence_core::{Occurrence, Weekday};
use cadence_recur::{ExpansionOptions, Frequency, RecurrencePattern, RecurrenceSet, WeekdayNum};
use chrono::NaiveDateTime;

pub struct RecurrenceCase {
    pub name: &'static str,
    pub build: fn() -> RecurrenceSet,
    pub expected: Option<&'static [&'static str]>,
    pub expected_len: Option<usize>,
    pub limit: usize,
    pub after: Option<&'static str>,
    pub before: Option<&'static str>,
}

fn seed(value: &str) -> Occurrence {
    Occurrence::date_time(parse_stamp(value))
}

#[expect(clippy::too_many_lines)]
pub fn recurrence_cases() -> Vec<RecurrenceCase> {
    vec![
        RecurrenceCase {
            name: "daily_basic",
            build: || {
                RecurrencePattern::builder(Frequency::Daily, seed("2012-02-01T09:30:00"))
                    .with_count(3)
                    .build()
                    .unwrap()
                    .into()
            },
            expected: Some(&[
                "2012-02-01T09:30:00",
                "2012-02-02T09:30:00",
                "2012-02-03T09:30:00",
            ]),
            expected_len: None,
            limit: 100,
            after: None,
            before: None,
        },
        RecurrenceCase {
            name: "weekly_by_day",
            build: || {
                RecurrencePattern::builder(Frequency::Weekly, seed("1997-09-02T09:00:00"))
                    .with_count(3)
                    .with_by_day([
                        WeekdayNum::every(Weekday::Tuesday),
                        WeekdayNum::every(Weekday::Thursday),
                    ])
                    .build()
                    .unwrap()
                    .into()
            },
            expected: Some(&[
                "1997-09-02T09:00:00",
                "1997-09-04T09:00:00",
                "1997-09-09T09:00:00",
            ]),
            expected_len: None,
            limit: 100,
            after: None,
            before: None,
        },
        RecurrenceCase {
            name: "monthly_by_month_day",
            build: || {
                RecurrencePattern::builder(Frequency::Monthly, seed("2012-01-01T09:00:00"))
                    .with_count(3)
                    .with_by_month_day([1])
                    .build()
                    .unwrap()
                    .into()
            },
            expected: Some(&[
                "2012-01-01T09:00:00",
                "2012-02-01T09:00:00",
                "2012-03-01T09:00:00",
            ]),
            expected_len: None,
            limit: 100,
            after: None,
            before: None,
        },
        RecurrenceCase {
            name: "yearly_basic",
            build: || {
                RecurrencePattern::builder(Frequency::Yearly, seed("2012-01-01T09:00:00"))
                    .with_count(3)
                    .build()
                    .unwrap()
                    .into()
            },
            expected: Some(&[
                "2012-01-01T09:00:00",
                "2013-01-01T09:00:00",
                "2014-01-01T09:00:00",
            ]),
            expected_len: None,
            limit: 100,
            after: None,
            before: None,
        },
        RecurrenceCase {
            name: "hourly_basic",
            build: || {
                RecurrencePattern::builder(Frequency::Hourly, seed("2012-01-01T09:00:00"))
                    .with_count(3)
                    .build()
                    .unwrap()
                    .into()
            },
            expected: Some(&[
                "2012-01-01T09:00:00",
                "2012-01-01T10:00:00",
                "2012-01-01T11:00:00",
            ]),
            expected_len: None,
            limit: 100,
            after: None,
            before: None,
        },
        RecurrenceCase {
            name: "minutely_basic",
            build: || {
                RecurrencePattern::builder(Frequency::Minutely, seed("2012-01-01T09:00:00"))
                    .with_count(3)
                    .build()
                    .unwrap()
                    .into()
            },
            expected: Some(&[
                "2012-01-01T09:00:00",
                "2012-01-01T09:01:00",
                "2012-01-01T09:02:00",
            ]),
            expected_len: None,
            limit: 100,
            after: None,
            before: None,
        },
        RecurrenceCase {
            name: "secondly_basic",
            build: || {
                RecurrencePattern::builder(Frequency::Secondly, seed("2012-01-01T09:00:00"))
                    .with_count(3)
                    .build()
                    .unwrap()
                    .into()
            },
            expected: Some(&[
                "2012-01-01T09:00:00",
                "2012-01-01T09:00:01",
                "2012-01-01T09:00:02",
            ]),
            expected_len: None,
            limit: 100,
            after: None,
            before: None,
        },
        RecurrenceCase {
            name: "daily_interval_five",
            build: || {
                RecurrencePattern::builder(Frequency::Daily, seed("2004-09-06T00:00:00"))
                    .with_interval(5)
                    .with_count(50)
                    .build()
                    .unwrap()
                    .into()
            },
            expected: None,
            expected_len: Some(50),
            limit: 100,
            after: None,
            before: None,
        },
        RecurrenceCase {
            name: "yearly_last_monday_of_may",
            build: || {
                RecurrencePattern::builder(Frequency::Yearly, seed("2024-01-01T00:00:00"))
                    .with_count(3)
                    .with_by_month([5])
                    .with_by_day([WeekdayNum::every(Weekday::Monday)])
                    .with_by_set_pos([-1])
                    .build()
                    .unwrap()
                    .into()
            },
            expected: Some(&[
                "2024-05-27T00:00:00",
                "2025-05-26T00:00:00",
                "2026-05-25T00:00:00",
            ]),
            expected_len: None,
            limit: 100,
            after: None,
            before: None,
        },
        RecurrenceCase {
            name: "rdate_exdate",
            build: || {
                let pattern =
                    RecurrencePattern::builder(Frequency::Daily, seed("2012-02-01T09:30:00"))
                        .with_count(3)
                        .build()
                        .unwrap();
                RecurrenceSet::new(pattern)
                    .set_rdates(vec![seed("2012-02-10T09:30:00")])
                    .set_exdates(vec![seed("2012-02-02T09:30:00")])
            },
            expected: Some(&[
                "2012-02-01T09:30:00",
                "2012-02-03T09:30:00",
                "2012-02-10T09:30:00",
            ]),
            expected_len: None,
            limit: 100,
            after: None,
            before: None,
        },
        RecurrenceCase {
            name: "exrule_removes_weekends",
            build: || {
                let pattern =
                    RecurrencePattern::builder(Frequency::Daily, seed("2024-01-01T09:00:00"))
                        .with_count(7)
                        .build()
                        .unwrap();
                let exrule =
                    RecurrencePattern::builder(Frequency::Daily, seed("2024-01-01T09:00:00"))
                        .with_by_day([
                            WeekdayNum::every(Weekday::Saturday),
                            WeekdayNum::every(Weekday::Sunday),
                        ])
                        .build()
                        .unwrap();
                RecurrenceSet::new(pattern).set_exrule(exrule)
            },
            expected: Some(&[
                "2024-01-01T09:00:00",
                "2024-01-02T09:00:00",
                "2024-01-03T09:00:00",
                "2024-01-04T09:00:00",
                "2024-01-05T09:00:00",
            ]),
            expected_len: None,
            limit: 100,
            after: None,
            before: None,
        },
        RecurrenceCase {
            name: "after_before",
            build: || {
                RecurrencePattern::builder(Frequency::Daily, seed("2012-02-01T09:30:00"))
                    .with_count(3)
                    .build()
                    .unwrap()
                    .into()
            },
            expected: Some(&["2012-02-02T09:30:00", "2012-02-03T09:30:00"]),
            expected_len: None,
            limit: 100,
            after: Some("2012-02-01T10:00:00"),
            before: Some("2012-04-01T09:00:00"),
        },
        RecurrenceCase {
            name: "until_is_inclusive",
            build: || {
                RecurrencePattern::builder(Frequency::Daily, seed("2012-02-01T09:30:00"))
                    .with_until(seed("2012-02-03T09:30:00"))
                    .build()
                    .unwrap()
                    .into()
            },
            expected: Some(&[
                "2012-02-01T09:30:00",
                "2012-02-02T09:30:00",
                "2012-02-03T09:30:00",
            ]),
            expected_len: None,
            limit: 100,
            after: None,
            before: None,
        },
        RecurrenceCase {
            name: "rfc_every_day_in_january",
            build: || {
                RecurrencePattern::builder(Frequency::Yearly, seed("1998-01-01T09:00:00"))
                    .with_until(seed("2000-01-31T14:00:00"))
                    .with_by_month([1])
                    .with_by_day([
                        WeekdayNum::every(Weekday::Sunday),
                        WeekdayNum::every(Weekday::Monday),
                        WeekdayNum::every(Weekday::Tuesday),
                        WeekdayNum::every(Weekday::Wednesday),
                        WeekdayNum::every(Weekday::Thursday),
                        WeekdayNum::every(Weekday::Friday),
                        WeekdayNum::every(Weekday::Saturday),
                    ])
                    .build()
                    .unwrap()
                    .into()
            },
            expected: None,
            expected_len: Some(93),
            limit: 200,
            after: None,
            before: None,
        },
        RecurrenceCase {
            name: "impossible_rule_stays_finite",
            build: || {
                RecurrencePattern::builder(Frequency::Monthly, seed("2024-01-01T00:00:00"))
                    .with_count(1)
                    .with_by_month([2])
                    .with_by_month_day([31])
                    .build()
                    .unwrap()
                    .into()
            },
            expected: None,
            expected_len: Some(0),
            limit: 100,
            after: None,
            before: None,
        },
    ]
}

pub fn assert_case(case: &RecurrenceCase) {
    let set = (case.build)();
    let mut options = ExpansionOptions::default().with_max_instances(case.limit);
    if let Some(after) = case.after {
        options.range_start = Some(parse_stamp(after));
    }
    if let Some(before) = case.before {
        options.range_end = Some(parse_stamp(before));
    }

    let expansion = set
        .expand(&options)
        .unwrap_or_else(|err| panic!("Failed to expand {}: {}", case.name, err));
    let actual: Vec<NaiveDateTime> = expansion.dates.iter().map(Occurrence::value).collect();

    if let Some(expected) = case.expected {
        let expected: Vec<NaiveDateTime> = expected.iter().map(|value| parse_stamp(value)).collect();
        assert_eq!(actual, expected, "Case {} did not match", case.name);
    }

    if let Some(expected_len) = case.expected_len {
        assert_eq!(
            actual.len(),
            expected_len,
            "Case {} expected {} occurrences",
            case.name,
            expected_len
        );
    }
}

fn parse_stamp(value: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
        .unwrap_or_else(|err| panic!("Failed to parse stamp {value}: {err}"))
}
