use std::collections::VecDeque;
use std::iter::FusedIterator;

use chrono::{
    DateTime, Datelike, Days, Months, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone,
    Timelike,
};

use super::calendar::{days_in_month, days_in_year, days_since};
use super::filter::DateFilter;
use super::options::ExpansionOptions;
use super::timezone::resolve_local;
use crate::rfc::rrule::core::{Frequency, Rule};

const SECONDS_PER_DAY: i64 = 86_400;

/// A rule compiled against a start time: resolved filters, time lists and termination.
#[derive(Debug, Clone)]
struct Plan {
    freq: Frequency,
    interval: u32,
    count: Option<u32>,
    until: Option<NaiveDateTime>,
    filter: DateFilter,
    by_hour: Vec<u32>,
    by_minute: Vec<u32>,
    by_second: Vec<u32>,
    minutes: Vec<u32>,
    seconds: Vec<u32>,
    /// Times of day for DAILY and longer periods.
    times: Vec<NaiveTime>,
    set_pos: Vec<i32>,
}

impl Plan {
    fn new(rule: &Rule, start: NaiveDateTime) -> Self {
        let hours = expansion(rule.by_hour(), start.hour());
        let minutes = expansion(rule.by_minute(), start.minute());
        let mut seconds = expansion(rule.by_second(), start.second());
        seconds.retain(|s| *s < 60);

        let (minute_list, second_list) = (&minutes, &seconds);
        let times = hours
            .iter()
            .flat_map(|h| {
                minute_list.iter().flat_map(move |m| {
                    second_list
                        .iter()
                        .filter_map(move |s| NaiveTime::from_hms_opt(*h, *m, *s))
                })
            })
            .collect();

        Self {
            freq: rule.freq(),
            interval: rule.interval(),
            count: rule.count(),
            until: rule.until(),
            filter: DateFilter::new(rule, start.date()),
            by_hour: sorted(rule.by_hour()),
            by_minute: sorted(rule.by_minute()),
            by_second: sorted(rule.by_second()),
            minutes,
            seconds,
            times,
            set_pos: rule.by_set_pos().iter().map(|p| p.value()).collect(),
        }
    }

    /// Length of one sub-daily step in seconds.
    fn step_seconds(&self) -> i64 {
        i64::from(self.interval) * self.freq.unit_seconds().unwrap_or(SECONDS_PER_DAY)
    }

    /// Anchor of the period containing `start`.
    fn first_period(
        &self,
        start: NaiveDateTime,
        week_start: chrono::Weekday,
    ) -> Option<NaiveDateTime> {
        let date = start.date();
        match self.freq {
            Frequency::Yearly => {
                Some(NaiveDate::from_ymd_opt(date.year(), 1, 1)?.and_time(NaiveTime::MIN))
            }
            Frequency::Monthly => Some(date.with_day(1)?.and_time(NaiveTime::MIN)),
            Frequency::Weekly => {
                let back = Days::new(u64::from(days_since(date.weekday(), week_start)));
                Some(date.checked_sub_days(back)?.and_time(NaiveTime::MIN))
            }
            Frequency::Daily => Some(date.and_time(NaiveTime::MIN)),
            Frequency::Hourly => date.and_hms_opt(start.hour(), 0, 0),
            Frequency::Minutely => date.and_hms_opt(start.hour(), start.minute(), 0),
            Frequency::Secondly => date.and_hms_opt(start.hour(), start.minute(), start.second()),
        }
    }

    /// Anchor of the period `interval` periods after `anchor`.
    fn advance(&self, anchor: NaiveDateTime) -> Option<NaiveDateTime> {
        let date = anchor.date();
        let next = match self.freq {
            Frequency::Yearly => {
                let year = date.year().checked_add(i32::try_from(self.interval).ok()?)?;
                NaiveDate::from_ymd_opt(year, 1, 1)?
            }
            Frequency::Monthly => date.checked_add_months(Months::new(self.interval))?,
            Frequency::Weekly => date.checked_add_days(Days::new(7 * u64::from(self.interval)))?,
            Frequency::Daily => date.checked_add_days(Days::new(u64::from(self.interval)))?,
            Frequency::Hourly | Frequency::Minutely | Frequency::Secondly => {
                return TimeDelta::try_seconds(self.step_seconds())
                    .and_then(|step| anchor.checked_add_signed(step));
            }
        };
        Some(next.and_time(NaiveTime::MIN))
    }

    /// First sub-daily step that falls on a later day than `anchor`.
    fn skip_day(&self, anchor: NaiveDateTime) -> Option<NaiveDateTime> {
        let step = self.step_seconds();
        let remaining = SECONDS_PER_DAY - i64::from(anchor.num_seconds_from_midnight());
        let jumps = (remaining - 1) / step + 1;
        TimeDelta::try_seconds(jumps * step).and_then(|delta| anchor.checked_add_signed(delta))
    }

    /// Returns whether the rule can never produce a time of day.
    ///
    /// Sub-daily steps only visit times of day congruent to the start modulo
    /// `gcd(step, 1 day)`, so a time filter may exclude every one of them.
    fn never_matches(&self, anchor: NaiveDateTime) -> bool {
        match self.freq {
            Frequency::Yearly | Frequency::Monthly | Frequency::Weekly | Frequency::Daily => {
                self.times.is_empty()
            }
            Frequency::Hourly | Frequency::Minutely | Frequency::Secondly => {
                let expands_nothing = match self.freq {
                    Frequency::Hourly => self.minutes.is_empty() || self.seconds.is_empty(),
                    Frequency::Minutely => self.seconds.is_empty(),
                    _ => false,
                };
                expands_nothing || !self.reachable(anchor)
            }
        }
    }

    fn reachable(&self, anchor: NaiveDateTime) -> bool {
        let cycle = gcd(self.step_seconds(), SECONDS_PER_DAY);
        let first = i64::from(anchor.num_seconds_from_midnight()) % cycle;
        let mut time = first;
        while time < SECONDS_PER_DAY {
            let (h, m, s) = split_seconds(time);
            if self.time_passes(h, m, s) {
                return true;
            }
            time += cycle;
        }
        false
    }

    /// Checks the time units a sub-daily step fixes against their BYxxx lists.
    fn time_passes(&self, hour: u32, minute: u32, second: u32) -> bool {
        let hour_ok = allows(&self.by_hour, hour);
        match self.freq {
            Frequency::Hourly => hour_ok,
            Frequency::Minutely => hour_ok && allows(&self.by_minute, minute),
            Frequency::Secondly => {
                hour_ok && allows(&self.by_minute, minute) && allows(&self.by_second, second)
            }
            Frequency::Daily | Frequency::Weekly | Frequency::Monthly | Frequency::Yearly => true,
        }
    }

    /// Candidates of one sub-daily step: the fixed units are filtered, the
    /// smaller ones expanded.
    fn sub_daily_candidates(&self, anchor: NaiveDateTime) -> Vec<NaiveDateTime> {
        let date = anchor.date();
        let (hour, minute, second) = (anchor.hour(), anchor.minute(), anchor.second());
        if !self.time_passes(hour, minute, second) {
            return Vec::new();
        }
        match self.freq {
            Frequency::Hourly => self
                .minutes
                .iter()
                .flat_map(|m| {
                    self.seconds
                        .iter()
                        .filter_map(move |s| date.and_hms_opt(hour, *m, *s))
                })
                .collect(),
            Frequency::Minutely => self
                .seconds
                .iter()
                .filter_map(|s| date.and_hms_opt(hour, minute, *s))
                .collect(),
            _ => vec![anchor],
        }
    }

    /// Every candidate of the period at `anchor`, sorted, after BYSETPOS.
    fn candidates(&self, anchor: NaiveDateTime) -> Vec<NaiveDateTime> {
        let date = anchor.date();
        let candidates: Vec<NaiveDateTime> = match self.freq {
            Frequency::Yearly | Frequency::Monthly | Frequency::Weekly | Frequency::Daily => {
                let len = match self.freq {
                    Frequency::Yearly => days_in_year(date.year()),
                    Frequency::Monthly => days_in_month(date.year(), date.month()),
                    Frequency::Weekly => 7,
                    _ => 1,
                };
                date.iter_days()
                    .take(usize::try_from(len).unwrap_or(0))
                    .filter(|day| self.filter.matches(*day))
                    .flat_map(|day| self.times.iter().map(move |time| day.and_time(*time)))
                    .collect()
            }
            Frequency::Hourly | Frequency::Minutely | Frequency::Secondly => {
                self.sub_daily_candidates(anchor)
            }
        };

        if self.set_pos.is_empty() {
            candidates
        } else {
            select_positions(&candidates, &self.set_pos)
        }
    }
}

/// Lazy, chronologically ordered occurrences of a [`Rule`].
///
/// Only the current period's candidates are held in memory, so unbounded
/// rules can be consumed indefinitely. Re-iterating requires a new expansion.
pub struct Occurrences<Tz: TimeZone> {
    plan: Plan,
    start: DateTime<Tz>,
    start_local: NaiveDateTime,
    options: ExpansionOptions,
    cursor: Option<NaiveDateTime>,
    buffer: VecDeque<NaiveDateTime>,
    emitted: u32,
    last: Option<DateTime<Tz>>,
    finished: bool,
}

impl<Tz: TimeZone> Occurrences<Tz> {
    /// ## Summary
    /// Starts expanding `rule` from `start`, in the timezone of `start`.
    ///
    /// `start` itself is yielded only if it matches the rule. UNTIL is compared
    /// with candidates as a local wall-clock time in that timezone.
    #[must_use]
    pub fn new(rule: &Rule, start: DateTime<Tz>, options: ExpansionOptions) -> Self {
        let start_local = start.naive_local();
        Self::from_local_start(rule, start, start_local, options)
    }

    /// Expands with `start_local` as the intended wall-clock start, which may
    /// differ from `start` when the latter was shifted out of a DST gap.
    pub(super) fn from_local_start(
        rule: &Rule,
        start: DateTime<Tz>,
        start_local: NaiveDateTime,
        options: ExpansionOptions,
    ) -> Self {
        // Candidates carry whole seconds only
        let start = start.with_nanosecond(0).unwrap_or(start);
        let start_local = start_local.with_nanosecond(0).unwrap_or(start_local);
        let plan = Plan::new(rule, start_local);
        let cursor = plan.first_period(start_local, rule.week_start().to_chrono());

        let finished = cursor.is_none_or(|anchor| plan.never_matches(anchor));
        if finished {
            tracing::debug!(rule = %rule, "Rule can never produce an occurrence");
        }

        Self {
            plan,
            start,
            start_local,
            options,
            cursor,
            buffer: VecDeque::new(),
            emitted: 0,
            last: None,
            finished,
        }
    }

    /// Collects the occurrences within `after..=before`.
    #[must_use]
    pub fn between(self, after: &DateTime<Tz>, before: &DateTime<Tz>) -> Vec<DateTime<Tz>> {
        self.take_while(|occurrence| occurrence <= before)
            .filter(|occurrence| occurrence >= after)
            .collect()
    }

    /// Collects at most `limit` occurrences.
    #[must_use]
    pub fn take_all(self, limit: usize) -> Vec<DateTime<Tz>> {
        self.take(limit).collect()
    }

    /// Number of occurrences yielded so far.
    #[must_use]
    pub const fn emitted(&self) -> u32 {
        self.emitted
    }

    /// Materializes the next period into the buffer.
    ///
    /// Returns `false` once no further period can produce candidates.
    fn fill(&mut self) -> bool {
        let Some(anchor) = self.cursor else {
            tracing::debug!("Expansion reached the end of the representable date range");
            return false;
        };
        if anchor.year() > self.options.max_year {
            tracing::debug!(max_year = self.options.max_year, "Expansion reached max year");
            return false;
        }
        if let Some(until) = self.plan.until
            && anchor > until
        {
            tracing::debug!(until = %until, "Expansion passed UNTIL");
            return false;
        }

        if self.plan.freq.is_sub_daily() && !self.plan.filter.matches(anchor.date()) {
            self.cursor = self.plan.skip_day(anchor);
            return true;
        }

        self.cursor = self.plan.advance(anchor);
        let candidates = self.plan.candidates(anchor);
        tracing::trace!(period = %anchor, candidates = candidates.len(), "Expanded period");
        self.buffer.extend(candidates);
        true
    }
}

impl<Tz: TimeZone> Iterator for Occurrences<Tz> {
    type Item = DateTime<Tz>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.finished {
                return None;
            }
            if let Some(count) = self.plan.count
                && self.emitted >= count
            {
                tracing::debug!(count, "Expansion reached COUNT");
                self.finished = true;
                return None;
            }

            let Some(candidate) = self.buffer.pop_front() else {
                if !self.fill() {
                    self.finished = true;
                }
                continue;
            };

            if candidate < self.start_local {
                continue;
            }
            if let Some(until) = self.plan.until
                && candidate > until
            {
                tracing::debug!(until = %until, "Expansion passed UNTIL");
                self.finished = true;
                return None;
            }

            let resolved = if candidate == self.start_local {
                Some(self.start.clone())
            } else {
                resolve_local(candidate, &self.start.timezone(), self.options.dst_gap)
            };
            let Some(occurrence) = resolved else {
                continue;
            };
            // DST shifts can map distinct local times onto the same or an earlier instant
            if occurrence < self.start || self.last.as_ref().is_some_and(|last| occurrence <= *last)
            {
                continue;
            }

            self.emitted += 1;
            self.last = Some(occurrence.clone());
            return Some(occurrence);
        }
    }
}

impl<Tz: TimeZone> FusedIterator for Occurrences<Tz> {}

/// Picks 1-based positions (negative from the end) out of a sorted period.
fn select_positions(candidates: &[NaiveDateTime], positions: &[i32]) -> Vec<NaiveDateTime> {
    let len = i64::try_from(candidates.len()).unwrap_or(i64::MAX);
    let mut selected: Vec<NaiveDateTime> = positions
        .iter()
        .filter_map(|pos| {
            let index = if *pos > 0 {
                i64::from(*pos) - 1
            } else {
                len + i64::from(*pos)
            };
            usize::try_from(index)
                .ok()
                .and_then(|i| candidates.get(i).copied())
        })
        .collect();
    selected.sort_unstable();
    selected.dedup();
    selected
}

fn sorted(values: &[u8]) -> Vec<u32> {
    let mut out: Vec<u32> = values.iter().copied().map(u32::from).collect();
    out.sort_unstable();
    out.dedup();
    out
}

/// BYxxx time list, or the start's own value when the part is absent.
fn expansion(values: &[u8], default: u32) -> Vec<u32> {
    if values.is_empty() {
        vec![default]
    } else {
        sorted(values)
    }
}

fn allows(values: &[u32], value: u32) -> bool {
    values.is_empty() || values.contains(&value)
}

fn split_seconds(time: i64) -> (u32, u32, u32) {
    let time = u32::try_from(time).unwrap_or(0);
    (time / 3600, time / 60 % 60, time % 60)
}

fn gcd(a: i64, b: i64) -> i64 {
    if b == 0 { a } else { gcd(b, a % b) }
}
