// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Per-province totals folded from regency counts.

use core::iter::Sum;
use core::ops::Add;

use serde::Serialize;

use crate::province::Province;
use crate::regency::Regency;

/// Derived totals for a group of regencies.
///
/// An empty group yields [`Aggregate::default`], all zeros.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Aggregate {
    pub total_cctv: u64,
    pub online_count: u64,
    pub alert_count: u64,
    pub regency_count: usize,
}

impl Aggregate {
    /// Folds the given regencies with integer addition.
    pub fn from_regencies<'a, I>(regencies: I) -> Self
    where
        I: IntoIterator<Item = &'a Regency>,
    {
        regencies
            .into_iter()
            .fold(Self::default(), |acc, regency| acc + Self::of(regency))
    }

    /// The contribution of a single regency.
    #[must_use]
    pub fn of(regency: &Regency) -> Self {
        Self {
            total_cctv: u64::from(regency.cctv_count),
            online_count: u64::from(regency.online_count),
            alert_count: u64::from(regency.alert_count),
            regency_count: 1,
        }
    }

    #[must_use]
    pub const fn has_alerts(&self) -> bool {
        self.alert_count > 0
    }
}

impl Add for Aggregate {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            total_cctv: self.total_cctv + rhs.total_cctv,
            online_count: self.online_count + rhs.online_count,
            alert_count: self.alert_count + rhs.alert_count,
            regency_count: self.regency_count + rhs.regency_count,
        }
    }
}

impl Sum for Aggregate {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

/// A province paired with its freshly computed totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProvinceSummary<'a> {
    pub province: &'a Province,
    pub aggregate: Aggregate,
}

/// Computes the totals of every province, preserving dataset order.
pub fn summarize(provinces: &[Province]) -> Vec<ProvinceSummary<'_>> {
    provinces
        .iter()
        .map(|province| ProvinceSummary {
            province,
            aggregate: province.aggregate(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn regency(cctv: u32, online: u32, alerts: u32) -> Regency {
        Regency::new("r", "R", cctv, online, alerts, "https://example.invalid/")
    }

    #[test]
    fn empty_group_is_all_zero() {
        let none: [Regency; 0] = [];
        assert_eq!(Aggregate::from_regencies(&none), Aggregate::default());
    }

    #[test]
    fn add_is_field_wise() {
        let total = Aggregate::of(&regency(3, 2, 1)) + Aggregate::of(&regency(4, 4, 0));

        assert_eq!(
            total,
            Aggregate {
                total_cctv: 7,
                online_count: 6,
                alert_count: 1,
                regency_count: 2,
            }
        );
    }

    #[test]
    fn sums_do_not_overflow_u32() {
        let big = [regency(u32::MAX, u32::MAX, 0), regency(u32::MAX, 0, 0)];

        let aggregate = Aggregate::from_regencies(&big);
        assert_eq!(aggregate.total_cctv, 2 * u64::from(u32::MAX));
    }
}
