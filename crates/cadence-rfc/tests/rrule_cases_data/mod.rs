use chrono::{DateTime, FixedOffset, NaiveDateTime};

use cadence_rfc::rfc::rrule::{ExpansionOptions, Rule, TimeZoneResolver, expand_in};

pub struct RRuleCase {
    pub name: &'static str,
    /// Floating `YYYYMMDDTHHMMSS` start.
    pub start: &'static str,
    pub tzid: &'static str,
    pub rule: &'static str,
    pub expected: Option<&'static [&'static str]>,
    pub expected_len: Option<usize>,
    pub limit: usize,
    pub after: Option<&'static str>,
    pub before: Option<&'static str>,
}

const NEW_YORK: &str = "America/New_York";

const fn case(
    name: &'static str,
    start: &'static str,
    rule: &'static str,
    expected: &'static [&'static str],
) -> RRuleCase {
    RRuleCase {
        name,
        start,
        tzid: NEW_YORK,
        rule,
        expected: Some(expected),
        expected_len: None,
        limit: 100,
        after: None,
        before: None,
    }
}

const fn counted(
    name: &'static str,
    start: &'static str,
    rule: &'static str,
    expected_len: usize,
) -> RRuleCase {
    RRuleCase {
        name,
        start,
        tzid: NEW_YORK,
        rule,
        expected: None,
        expected_len: Some(expected_len),
        limit: 1000,
        after: None,
        before: None,
    }
}

#[expect(clippy::too_many_lines)]
pub fn rrule_cases() -> Vec<RRuleCase> {
    vec![
        case(
            "daily_count_10",
            "19970902T090000",
            "FREQ=DAILY;COUNT=10",
            &[
                "1997-09-02T09:00:00-04:00",
                "1997-09-03T09:00:00-04:00",
                "1997-09-04T09:00:00-04:00",
                "1997-09-05T09:00:00-04:00",
                "1997-09-06T09:00:00-04:00",
                "1997-09-07T09:00:00-04:00",
                "1997-09-08T09:00:00-04:00",
                "1997-09-09T09:00:00-04:00",
                "1997-09-10T09:00:00-04:00",
                "1997-09-11T09:00:00-04:00",
            ],
        ),
        counted(
            "daily_until",
            "19970902T090000",
            "FREQ=DAILY;UNTIL=19971224T000000",
            113,
        ),
        RRuleCase {
            limit: 5,
            ..case(
                "every_other_day",
                "19970902T090000",
                "FREQ=DAILY;INTERVAL=2",
                &[
                    "1997-09-02T09:00:00-04:00",
                    "1997-09-04T09:00:00-04:00",
                    "1997-09-06T09:00:00-04:00",
                    "1997-09-08T09:00:00-04:00",
                    "1997-09-10T09:00:00-04:00",
                ],
            )
        },
        case(
            "every_10_days",
            "19970902T090000",
            "FREQ=DAILY;INTERVAL=10;COUNT=5",
            &[
                "1997-09-02T09:00:00-04:00",
                "1997-09-12T09:00:00-04:00",
                "1997-09-22T09:00:00-04:00",
                "1997-10-02T09:00:00-04:00",
                "1997-10-12T09:00:00-04:00",
            ],
        ),
        counted(
            "yearly_every_day_in_january",
            "19980101T090000",
            "FREQ=YEARLY;UNTIL=20000131T140000;BYMONTH=1;BYDAY=SU,MO,TU,WE,TH,FR,SA",
            93,
        ),
        counted(
            "daily_in_january",
            "19980101T090000",
            "FREQ=DAILY;UNTIL=20000131T140000;BYMONTH=1",
            93,
        ),
        case(
            "weekly_count_10",
            "19970902T090000",
            "FREQ=WEEKLY;COUNT=10",
            &[
                "1997-09-02T09:00:00-04:00",
                "1997-09-09T09:00:00-04:00",
                "1997-09-16T09:00:00-04:00",
                "1997-09-23T09:00:00-04:00",
                "1997-09-30T09:00:00-04:00",
                "1997-10-07T09:00:00-04:00",
                "1997-10-14T09:00:00-04:00",
                "1997-10-21T09:00:00-04:00",
                "1997-10-28T09:00:00-05:00",
                "1997-11-04T09:00:00-05:00",
            ],
        ),
        counted(
            "weekly_tuesday_thursday_until",
            "19970902T090000",
            "FREQ=WEEKLY;UNTIL=19971007T000000;WKST=SU;BYDAY=TU,TH",
            10,
        ),
        // The Tuesday start is not a MO/WE/FR occurrence
        counted(
            "biweekly_mo_we_fr_until",
            "19970902T090000",
            "FREQ=WEEKLY;INTERVAL=2;UNTIL=19971224T000000;WKST=SU;BYDAY=MO,WE,FR",
            24,
        ),
        case(
            "biweekly_tuesday_thursday",
            "19970902T090000",
            "FREQ=WEEKLY;INTERVAL=2;COUNT=8;WKST=SU;BYDAY=TU,TH",
            &[
                "1997-09-02T09:00:00-04:00",
                "1997-09-04T09:00:00-04:00",
                "1997-09-16T09:00:00-04:00",
                "1997-09-18T09:00:00-04:00",
                "1997-09-30T09:00:00-04:00",
                "1997-10-02T09:00:00-04:00",
                "1997-10-14T09:00:00-04:00",
                "1997-10-16T09:00:00-04:00",
            ],
        ),
        case(
            "monthly_first_friday",
            "19970905T090000",
            "FREQ=MONTHLY;COUNT=10;BYDAY=1FR",
            &[
                "1997-09-05T09:00:00-04:00",
                "1997-10-03T09:00:00-04:00",
                "1997-11-07T09:00:00-05:00",
                "1997-12-05T09:00:00-05:00",
                "1998-01-02T09:00:00-05:00",
                "1998-02-06T09:00:00-05:00",
                "1998-03-06T09:00:00-05:00",
                "1998-04-03T09:00:00-05:00",
                "1998-05-01T09:00:00-04:00",
                "1998-06-05T09:00:00-04:00",
            ],
        ),
        case(
            "bimonthly_first_and_last_sunday",
            "19970907T090000",
            "FREQ=MONTHLY;INTERVAL=2;COUNT=10;BYDAY=1SU,-1SU",
            &[
                "1997-09-07T09:00:00-04:00",
                "1997-09-28T09:00:00-04:00",
                "1997-11-02T09:00:00-05:00",
                "1997-11-30T09:00:00-05:00",
                "1998-01-04T09:00:00-05:00",
                "1998-01-25T09:00:00-05:00",
                "1998-03-01T09:00:00-05:00",
                "1998-03-29T09:00:00-05:00",
                "1998-05-03T09:00:00-04:00",
                "1998-05-31T09:00:00-04:00",
            ],
        ),
        case(
            "monthly_second_to_last_monday",
            "19970922T090000",
            "FREQ=MONTHLY;COUNT=6;BYDAY=-2MO",
            &[
                "1997-09-22T09:00:00-04:00",
                "1997-10-20T09:00:00-04:00",
                "1997-11-17T09:00:00-05:00",
                "1997-12-22T09:00:00-05:00",
                "1998-01-19T09:00:00-05:00",
                "1998-02-16T09:00:00-05:00",
            ],
        ),
        RRuleCase {
            limit: 6,
            ..case(
                "monthly_third_to_last_day",
                "19970928T090000",
                "FREQ=MONTHLY;BYMONTHDAY=-3",
                &[
                    "1997-09-28T09:00:00-04:00",
                    "1997-10-29T09:00:00-05:00",
                    "1997-11-28T09:00:00-05:00",
                    "1997-12-29T09:00:00-05:00",
                    "1998-01-29T09:00:00-05:00",
                    "1998-02-26T09:00:00-05:00",
                ],
            )
        },
        case(
            "monthly_2nd_and_15th",
            "19970902T090000",
            "FREQ=MONTHLY;COUNT=10;BYMONTHDAY=2,15",
            &[
                "1997-09-02T09:00:00-04:00",
                "1997-09-15T09:00:00-04:00",
                "1997-10-02T09:00:00-04:00",
                "1997-10-15T09:00:00-04:00",
                "1997-11-02T09:00:00-05:00",
                "1997-11-15T09:00:00-05:00",
                "1997-12-02T09:00:00-05:00",
                "1997-12-15T09:00:00-05:00",
                "1998-01-02T09:00:00-05:00",
                "1998-01-15T09:00:00-05:00",
            ],
        ),
        case(
            "monthly_first_and_last_day",
            "19970930T090000",
            "FREQ=MONTHLY;COUNT=10;BYMONTHDAY=1,-1",
            &[
                "1997-09-30T09:00:00-04:00",
                "1997-10-01T09:00:00-04:00",
                "1997-10-31T09:00:00-05:00",
                "1997-11-01T09:00:00-05:00",
                "1997-11-30T09:00:00-05:00",
                "1997-12-01T09:00:00-05:00",
                "1997-12-31T09:00:00-05:00",
                "1998-01-01T09:00:00-05:00",
                "1998-01-31T09:00:00-05:00",
                "1998-02-01T09:00:00-05:00",
            ],
        ),
        case(
            "every_18_months_10th_to_15th",
            "19970910T090000",
            "FREQ=MONTHLY;INTERVAL=18;COUNT=10;BYMONTHDAY=10,11,12,13,14,15",
            &[
                "1997-09-10T09:00:00-04:00",
                "1997-09-11T09:00:00-04:00",
                "1997-09-12T09:00:00-04:00",
                "1997-09-13T09:00:00-04:00",
                "1997-09-14T09:00:00-04:00",
                "1997-09-15T09:00:00-04:00",
                "1999-03-10T09:00:00-05:00",
                "1999-03-11T09:00:00-05:00",
                "1999-03-12T09:00:00-05:00",
                "1999-03-13T09:00:00-05:00",
            ],
        ),
        RRuleCase {
            limit: 18,
            ..case(
                "bimonthly_every_tuesday",
                "19970902T090000",
                "FREQ=MONTHLY;INTERVAL=2;BYDAY=TU",
                &[
                    "1997-09-02T09:00:00-04:00",
                    "1997-09-09T09:00:00-04:00",
                    "1997-09-16T09:00:00-04:00",
                    "1997-09-23T09:00:00-04:00",
                    "1997-09-30T09:00:00-04:00",
                    "1997-11-04T09:00:00-05:00",
                    "1997-11-11T09:00:00-05:00",
                    "1997-11-18T09:00:00-05:00",
                    "1997-11-25T09:00:00-05:00",
                    "1998-01-06T09:00:00-05:00",
                    "1998-01-13T09:00:00-05:00",
                    "1998-01-20T09:00:00-05:00",
                    "1998-01-27T09:00:00-05:00",
                    "1998-03-03T09:00:00-05:00",
                    "1998-03-10T09:00:00-05:00",
                    "1998-03-17T09:00:00-05:00",
                    "1998-03-24T09:00:00-05:00",
                    "1998-03-31T09:00:00-05:00",
                ],
            )
        },
        case(
            "yearly_june_july",
            "19970610T090000",
            "FREQ=YEARLY;COUNT=10;BYMONTH=6,7",
            &[
                "1997-06-10T09:00:00-04:00",
                "1997-07-10T09:00:00-04:00",
                "1998-06-10T09:00:00-04:00",
                "1998-07-10T09:00:00-04:00",
                "1999-06-10T09:00:00-04:00",
                "1999-07-10T09:00:00-04:00",
                "2000-06-10T09:00:00-04:00",
                "2000-07-10T09:00:00-04:00",
                "2001-06-10T09:00:00-04:00",
                "2001-07-10T09:00:00-04:00",
            ],
        ),
        case(
            "biyearly_first_quarter",
            "19970310T090000",
            "FREQ=YEARLY;INTERVAL=2;COUNT=10;BYMONTH=1,2,3",
            &[
                "1997-03-10T09:00:00-05:00",
                "1999-01-10T09:00:00-05:00",
                "1999-02-10T09:00:00-05:00",
                "1999-03-10T09:00:00-05:00",
                "2001-01-10T09:00:00-05:00",
                "2001-02-10T09:00:00-05:00",
                "2001-03-10T09:00:00-05:00",
                "2003-01-10T09:00:00-05:00",
                "2003-02-10T09:00:00-05:00",
                "2003-03-10T09:00:00-05:00",
            ],
        ),
        case(
            "triyearly_year_days",
            "19970101T090000",
            "FREQ=YEARLY;INTERVAL=3;COUNT=10;BYYEARDAY=1,100,200",
            &[
                "1997-01-01T09:00:00-05:00",
                "1997-04-10T09:00:00-04:00",
                "1997-07-19T09:00:00-04:00",
                "2000-01-01T09:00:00-05:00",
                "2000-04-09T09:00:00-04:00",
                "2000-07-18T09:00:00-04:00",
                "2003-01-01T09:00:00-05:00",
                "2003-04-10T09:00:00-04:00",
                "2003-07-19T09:00:00-04:00",
                "2006-01-01T09:00:00-05:00",
            ],
        ),
        RRuleCase {
            limit: 3,
            ..case(
                "yearly_20th_monday",
                "19970519T090000",
                "FREQ=YEARLY;BYDAY=20MO",
                &[
                    "1997-05-19T09:00:00-04:00",
                    "1998-05-18T09:00:00-04:00",
                    "1999-05-17T09:00:00-04:00",
                ],
            )
        },
        RRuleCase {
            limit: 3,
            ..case(
                "yearly_monday_of_week_20",
                "19970512T090000",
                "FREQ=YEARLY;BYWEEKNO=20;BYDAY=MO",
                &[
                    "1997-05-12T09:00:00-04:00",
                    "1998-05-11T09:00:00-04:00",
                    "1999-05-17T09:00:00-04:00",
                ],
            )
        },
        RRuleCase {
            limit: 11,
            ..case(
                "yearly_thursdays_in_march",
                "19970313T090000",
                "FREQ=YEARLY;BYMONTH=3;BYDAY=TH",
                &[
                    "1997-03-13T09:00:00-05:00",
                    "1997-03-20T09:00:00-05:00",
                    "1997-03-27T09:00:00-05:00",
                    "1998-03-05T09:00:00-05:00",
                    "1998-03-12T09:00:00-05:00",
                    "1998-03-19T09:00:00-05:00",
                    "1998-03-26T09:00:00-05:00",
                    "1999-03-04T09:00:00-05:00",
                    "1999-03-11T09:00:00-05:00",
                    "1999-03-18T09:00:00-05:00",
                    "1999-03-25T09:00:00-05:00",
                ],
            )
        },
        // The Tuesday start is not a Friday the 13th
        RRuleCase {
            limit: 5,
            ..case(
                "friday_the_13th",
                "19970902T090000",
                "FREQ=MONTHLY;BYDAY=FR;BYMONTHDAY=13",
                &[
                    "1998-02-13T09:00:00-05:00",
                    "1998-03-13T09:00:00-05:00",
                    "1998-11-13T09:00:00-05:00",
                    "1999-08-13T09:00:00-04:00",
                    "2000-10-13T09:00:00-04:00",
                ],
            )
        },
        RRuleCase {
            limit: 10,
            ..case(
                "saturday_after_first_sunday",
                "19970913T090000",
                "FREQ=MONTHLY;BYDAY=SA;BYMONTHDAY=7,8,9,10,11,12,13",
                &[
                    "1997-09-13T09:00:00-04:00",
                    "1997-10-11T09:00:00-04:00",
                    "1997-11-08T09:00:00-05:00",
                    "1997-12-13T09:00:00-05:00",
                    "1998-01-10T09:00:00-05:00",
                    "1998-02-07T09:00:00-05:00",
                    "1998-03-07T09:00:00-05:00",
                    "1998-04-11T09:00:00-04:00",
                    "1998-05-09T09:00:00-04:00",
                    "1998-06-13T09:00:00-04:00",
                ],
            )
        },
        RRuleCase {
            limit: 3,
            ..case(
                "us_presidential_election_day",
                "19961105T090000",
                "FREQ=YEARLY;INTERVAL=4;BYMONTH=11;BYDAY=TU;BYMONTHDAY=2,3,4,5,6,7,8",
                &[
                    "1996-11-05T09:00:00-05:00",
                    "2000-11-07T09:00:00-05:00",
                    "2004-11-02T09:00:00-05:00",
                ],
            )
        },
        case(
            "third_tuesday_wednesday_or_thursday",
            "19970904T090000",
            "FREQ=MONTHLY;COUNT=3;BYDAY=TU,WE,TH;BYSETPOS=3",
            &[
                "1997-09-04T09:00:00-04:00",
                "1997-10-07T09:00:00-04:00",
                "1997-11-06T09:00:00-05:00",
            ],
        ),
        RRuleCase {
            limit: 7,
            ..case(
                "second_to_last_weekday",
                "19970929T090000",
                "FREQ=MONTHLY;BYDAY=MO,TU,WE,TH,FR;BYSETPOS=-2",
                &[
                    "1997-09-29T09:00:00-04:00",
                    "1997-10-30T09:00:00-05:00",
                    "1997-11-27T09:00:00-05:00",
                    "1997-12-30T09:00:00-05:00",
                    "1998-01-29T09:00:00-05:00",
                    "1998-02-26T09:00:00-05:00",
                    "1998-03-30T09:00:00-05:00",
                ],
            )
        },
        case(
            "every_3_hours_until",
            "19970902T090000",
            "FREQ=HOURLY;INTERVAL=3;UNTIL=19970902T170000",
            &[
                "1997-09-02T09:00:00-04:00",
                "1997-09-02T12:00:00-04:00",
                "1997-09-02T15:00:00-04:00",
            ],
        ),
        case(
            "every_15_minutes",
            "19970902T090000",
            "FREQ=MINUTELY;INTERVAL=15;COUNT=6",
            &[
                "1997-09-02T09:00:00-04:00",
                "1997-09-02T09:15:00-04:00",
                "1997-09-02T09:30:00-04:00",
                "1997-09-02T09:45:00-04:00",
                "1997-09-02T10:00:00-04:00",
                "1997-09-02T10:15:00-04:00",
            ],
        ),
        case(
            "every_hour_and_a_half",
            "19970902T090000",
            "FREQ=MINUTELY;INTERVAL=90;COUNT=4",
            &[
                "1997-09-02T09:00:00-04:00",
                "1997-09-02T10:30:00-04:00",
                "1997-09-02T12:00:00-04:00",
                "1997-09-02T13:30:00-04:00",
            ],
        ),
        RRuleCase {
            after: Some("1997-09-02T00:00:00-04:00"),
            before: Some("1997-09-03T23:59:59-04:00"),
            ..counted(
                "daily_every_20_minutes_in_office_hours",
                "19970902T090000",
                "FREQ=DAILY;BYHOUR=9,10,11,12,13,14,15,16;BYMINUTE=0,20,40",
                48,
            )
        },
        RRuleCase {
            after: Some("1997-09-02T00:00:00-04:00"),
            before: Some("1997-09-03T23:59:59-04:00"),
            ..counted(
                "minutely_every_20_minutes_in_office_hours",
                "19970902T090000",
                "FREQ=MINUTELY;INTERVAL=20;BYHOUR=9,10,11,12,13,14,15,16",
                48,
            )
        },
        case(
            "week_start_monday",
            "19970805T090000",
            "FREQ=WEEKLY;INTERVAL=2;COUNT=4;BYDAY=TU,SU;WKST=MO",
            &[
                "1997-08-05T09:00:00-04:00",
                "1997-08-10T09:00:00-04:00",
                "1997-08-19T09:00:00-04:00",
                "1997-08-24T09:00:00-04:00",
            ],
        ),
        case(
            "week_start_sunday",
            "19970805T090000",
            "FREQ=WEEKLY;INTERVAL=2;COUNT=4;BYDAY=TU,SU;WKST=SU",
            &[
                "1997-08-05T09:00:00-04:00",
                "1997-08-17T09:00:00-04:00",
                "1997-08-19T09:00:00-04:00",
                "1997-08-31T09:00:00-04:00",
            ],
        ),
        case(
            "invalid_month_days_are_skipped",
            "20070115T090000",
            "FREQ=MONTHLY;BYMONTHDAY=15,30;COUNT=5",
            &[
                "2007-01-15T09:00:00-05:00",
                "2007-01-30T09:00:00-05:00",
                "2007-02-15T09:00:00-05:00",
                "2007-03-15T09:00:00-04:00",
                "2007-03-30T09:00:00-04:00",
            ],
        ),
        RRuleCase {
            tzid: "UTC",
            after: Some("2012-02-01T10:00:00+00:00"),
            before: Some("2012-04-01T09:00:00+00:00"),
            ..case(
                "after_before",
                "20120201T093000",
                "FREQ=DAILY;COUNT=3",
                &["2012-02-02T09:30:00+00:00", "2012-02-03T09:30:00+00:00"],
            )
        },
        case(
            "dst_new_york",
            "20210313T090000",
            "FREQ=DAILY;COUNT=3",
            &[
                "2021-03-13T09:00:00-05:00",
                "2021-03-14T09:00:00-04:00",
                "2021-03-15T09:00:00-04:00",
            ],
        ),
        RRuleCase {
            tzid: "Europe/Berlin",
            limit: 10,
            ..counted("pre_standard_time_start", "18930401T010000", "FREQ=DAILY", 10)
        },
    ]
}

pub fn assert_case(case: &RRuleCase) {
    let rule: Rule = case
        .rule
        .parse()
        .unwrap_or_else(|err| panic!("Failed to parse {}: {}", case.name, err));
    let start = NaiveDateTime::parse_from_str(case.start, "%Y%m%dT%H%M%S")
        .unwrap_or_else(|err| panic!("Failed to parse start of {}: {}", case.name, err));

    let mut resolver = TimeZoneResolver::new();
    let occurrences = expand_in(
        &rule,
        start,
        case.tzid,
        &mut resolver,
        ExpansionOptions::default(),
    )
    .unwrap_or_else(|err| panic!("Failed to expand {}: {}", case.name, err));
    let tz = resolver
        .resolve(case.tzid)
        .unwrap_or_else(|err| panic!("Failed to resolve {}: {}", case.tzid, err));

    let dates = match (case.after, case.before) {
        (Some(after), Some(before)) => occurrences.between(
            &parse_rfc3339(after).with_timezone(&tz),
            &parse_rfc3339(before).with_timezone(&tz),
        ),
        _ => occurrences.take_all(case.limit),
    };
    let actual_timestamps: Vec<i64> = dates.iter().map(DateTime::timestamp).collect();

    if let Some(expected) = case.expected {
        let expected_timestamps: Vec<i64> = expected
            .iter()
            .map(|value| parse_rfc3339(value).timestamp())
            .collect();
        assert_eq!(
            actual_timestamps, expected_timestamps,
            "Case {} did not match",
            case.name
        );
    }

    if let Some(expected_len) = case.expected_len {
        assert_eq!(
            dates.len(),
            expected_len,
            "Case {} expected {} occurrences",
            case.name,
            expected_len
        );
    }
}

fn parse_rfc3339(value: &str) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(value)
        .unwrap_or_else(|err| panic!("Failed to parse rfc3339 value {value}: {err}"))
}
