//! Running totals of parsed durations.

use chrono::Duration;

use crate::parser::Minutes;

/// Sum of several durations, optionally measured against a budget.
///
/// Individual entries are bounded, the total is not: a day's worth of task
/// entries can add up past a single entry's ceiling.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    entries: Vec<Minutes>,
    budget: Option<Minutes>,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_budget(mut self, budget: Minutes) -> Self {
        self.budget = Some(budget);
        self
    }

    pub fn add(&mut self, minutes: Minutes) {
        self.entries.push(minutes);
    }

    pub fn entries(&self) -> &[Minutes] {
        &self.entries
    }

    pub const fn budget(&self) -> Option<Minutes> {
        self.budget
    }

    /// Total of all entries in minutes.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|m| u64::from(m.get())).sum()
    }

    pub fn total_duration(&self) -> Duration {
        self.entries
            .iter()
            .fold(Duration::zero(), |acc, m| acc + m.as_duration())
    }

    /// Budget minus total; negative when over budget.
    pub fn remaining(&self) -> Option<Duration> {
        self.budget
            .map(|budget| budget.as_duration() - self.total_duration())
    }
}

impl Extend<Minutes> for Tally {
    fn extend<I: IntoIterator<Item = Minutes>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

impl FromIterator<Minutes> for Tally {
    fn from_iter<I: IntoIterator<Item = Minutes>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
            budget: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    fn m(text: &str) -> Minutes {
        parse(text).unwrap()
    }

    #[test]
    fn empty_tally_is_zero() {
        let tally = Tally::new();
        assert_eq!(tally.total(), 0);
        assert_eq!(tally.total_duration(), Duration::zero());
        assert_eq!(tally.remaining(), None);
    }

    #[test]
    fn total_may_exceed_single_entry_ceiling() {
        let tally: Tally = [m("20h"), m("10h"), m("45m")].into_iter().collect();
        assert_eq!(tally.total(), 30 * 60 + 45);
        assert_eq!(tally.entries().len(), 3);
    }

    #[test]
    fn remaining_against_budget() {
        let mut tally = Tally::new().with_budget(m("8h"));
        tally.add(m("2h 30m"));
        tally.extend([m("1,5h"), m("30")]);
        assert_eq!(tally.total(), 270);
        assert_eq!(tally.remaining(), Some(Duration::minutes(210)));
    }

    #[test]
    fn remaining_goes_negative_when_over_budget() {
        let mut tally = Tally::new().with_budget(m("1h"));
        tally.add(m("1h 15m"));
        assert_eq!(tally.remaining(), Some(Duration::minutes(-15)));
        assert_eq!(tally.budget(), Some(m("60")));
    }
}
