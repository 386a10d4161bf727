// ABOUTME: Day-of-week assignment of sports for the representative training week
// ABOUTME: Spaces identical sports evenly and breaks up back-to-back repeats
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Day assignment
//!
//! Sports are placed on the available weekdays most-frequent first. Each
//! sport aims at evenly spaced target indices and takes the nearest free day
//! index, searching outward from the target. A single cleanup pass then moves
//! the later day of any calendar-consecutive pair carrying the same sport to
//! the last free index. The cleanup does not re-check the days it moves, so
//! a repeat it creates elsewhere may remain.

use chrono::Weekday;
use pierre_plan_core::errors::{AppError, AppResult};
use pierre_plan_core::models::Sport;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::SessionPolicy;
use crate::workload::SportCounts;

/// One sport placed on one weekday
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledSession {
    /// Day of the session
    pub weekday: Weekday,
    /// Sport of the session
    pub sport: Sport,
}

/// Sports placed on the weekdays of one representative week
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekAssignment {
    sessions: Vec<ScheduledSession>,
}

impl WeekAssignment {
    /// Sessions ordered Monday to Sunday
    #[must_use]
    pub fn sessions(&self) -> &[ScheduledSession] {
        &self.sessions
    }

    /// Number of sessions in the week
    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Whether the week has no sessions
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Sessions of one sport in the week
    #[must_use]
    pub fn count_for(&self, sport: Sport) -> u32 {
        self.sessions.iter().filter(|s| s.sport == sport).count() as u32
    }

    /// Weekdays carrying a session of `sport`
    #[must_use]
    pub fn weekdays_for(&self, sport: Sport) -> Vec<Weekday> {
        self.sessions
            .iter()
            .filter(|s| s.sport == sport)
            .map(|s| s.weekday)
            .collect()
    }
}

/// Assigns sports to weekdays
pub struct DayAssignmentScheduler;

impl DayAssignmentScheduler {
    /// Place every requested session on the available weekdays
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when no weekday is available, and `OverCapacity`
    /// when single-session days cannot hold the requested sessions.
    pub fn assign(
        counts: &SportCounts,
        available_days: &[Weekday],
        policy: SessionPolicy,
    ) -> AppResult<WeekAssignment> {
        let mut days = available_days.to_vec();
        days.sort_by_key(Weekday::num_days_from_monday);
        days.dedup();
        if days.is_empty() {
            return Err(AppError::invalid_input(
                "At least one available weekday is required",
            ));
        }

        let day_count = days.len() as u32;
        let multi = policy.allow_multiple_sessions_per_day;

        if !multi {
            if let Some((sport, count)) = counts.iter().find(|&(_, &count)| count > day_count) {
                return Err(AppError::over_capacity(format!(
                    "{count} {sport} sessions requested but only {day_count} weekdays available"
                )));
            }
        }

        let counts = if multi {
            counts.clone()
        } else {
            balance_aerobic_load(counts, day_count)
        };

        let total: u32 = counts.values().sum();
        if !multi && total > day_count {
            return Err(AppError::over_capacity(format!(
                "{total} sessions requested but only {day_count} weekdays available"
            )));
        }

        let capacity = (total.div_ceil(day_count)).max(1) as usize;
        let mut load: Vec<Vec<Sport>> = vec![Vec::new(); days.len()];

        for (sport, count) in placement_order(&counts) {
            place_sport(&mut load, sport, count, capacity)?;
        }
        separate_repeats(&mut load, &days, capacity);

        for sports in &mut load {
            sports.sort();
        }
        let sessions: Vec<ScheduledSession> = days
            .iter()
            .zip(&load)
            .flat_map(|(&weekday, sports)| {
                sports
                    .iter()
                    .map(move |&sport| ScheduledSession { weekday, sport })
            })
            .collect();

        debug!(
            sessions = sessions.len(),
            weekdays = days.len(),
            capacity,
            "Assigned sports to weekdays"
        );
        Ok(WeekAssignment { sessions })
    }
}

/// Rebuild running and cycling by alternation when they overflow the slots swimming leaves
fn balance_aerobic_load(counts: &SportCounts, day_count: u32) -> SportCounts {
    let running = counts.get(&Sport::Running).copied().unwrap_or(0);
    let cycling = counts.get(&Sport::Cycling).copied().unwrap_or(0);
    let swimming = counts.get(&Sport::Swimming).copied().unwrap_or(0);
    let budget = day_count.saturating_sub(swimming);

    if running == 0 || cycling == 0 || running + cycling <= budget || budget == 0 {
        return counts.clone();
    }

    let mut balanced = counts.clone();
    let (mut run_slots, mut ride_slots) = (0, 0);
    for slot in 0..budget {
        if slot % 2 == 0 {
            run_slots += 1;
        } else {
            ride_slots += 1;
        }
    }
    balanced.insert(Sport::Running, run_slots);
    if ride_slots == 0 {
        balanced.remove(&Sport::Cycling);
    } else {
        balanced.insert(Sport::Cycling, ride_slots);
    }

    warn!(
        running,
        cycling,
        budget,
        run_slots,
        ride_slots,
        "Running and cycling exceed available days, alternating sessions"
    );
    balanced
}

/// Most frequent sport first, ties in enumeration order
fn placement_order(counts: &SportCounts) -> Vec<(Sport, u32)> {
    let mut order: Vec<(Sport, u32)> = counts
        .iter()
        .filter(|&(_, &count)| count > 0)
        .map(|(&sport, &count)| (sport, count))
        .collect();
    order.sort_by(|a, b| b.1.cmp(&a.1));
    order
}

fn place_sport(
    load: &mut [Vec<Sport>],
    sport: Sport,
    count: u32,
    capacity: usize,
) -> AppResult<()> {
    let day_count = load.len();
    let interval = day_count as f64 / f64::from(count);

    for i in 0..count {
        let target = ((f64::from(i) * interval).round() as usize).min(day_count - 1);
        let slot = nearest_slot(load, target, |day| {
            day.len() < capacity && !day.contains(&sport)
        })
        .or_else(|| nearest_slot(load, target, |day| day.len() < capacity))
        .ok_or_else(|| {
            AppError::internal(format!("No free weekday left for {sport} session {i}"))
        })?;
        load[slot].push(sport);
    }
    Ok(())
}

/// Closest index to `target` accepted by `is_free`, checking below before above
fn nearest_slot<F>(load: &[Vec<Sport>], target: usize, is_free: F) -> Option<usize>
where
    F: Fn(&[Sport]) -> bool,
{
    let day_count = load.len();
    (0..day_count).find_map(|radius| {
        let below = target
            .checked_sub(radius)
            .filter(|&index| is_free(&load[index]));
        let above =
            Some(target + radius).filter(|&index| index < day_count && is_free(&load[index]));
        below.or(above)
    })
}

/// Move the later of two calendar-consecutive same-sport sessions to the last free day
fn separate_repeats(load: &mut [Vec<Sport>], days: &[Weekday], capacity: usize) {
    for index in 1..days.len() {
        let consecutive =
            days[index].num_days_from_monday() == days[index - 1].num_days_from_monday() + 1;
        if !consecutive {
            continue;
        }

        let repeated: Vec<Sport> = load[index]
            .iter()
            .copied()
            .filter(|sport| load[index - 1].contains(sport))
            .collect();

        for sport in repeated {
            let destination = (0..load.len())
                .rev()
                .find(|&candidate| candidate != index && load[candidate].len() < capacity);

            match destination {
                Some(destination) => {
                    if let Some(position) = load[index].iter().position(|s| *s == sport) {
                        load[index].remove(position);
                        load[destination].push(sport);
                        debug!(
                            %sport,
                            from = %days[index],
                            to = %days[destination],
                            "Moved back-to-back session"
                        );
                    }
                }
                None => warn!(
                    %sport,
                    weekday = %days[index],
                    "No free weekday to separate back-to-back sessions"
                ),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pierre_plan_core::errors::ErrorCode;

    use super::*;

    const WEEK: [Weekday; 7] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ];

    fn counts(entries: &[(Sport, u32)]) -> SportCounts {
        entries.iter().copied().collect()
    }

    #[test]
    fn test_even_spacing_three_over_seven() {
        let assignment = DayAssignmentScheduler::assign(
            &counts(&[(Sport::Running, 3)]),
            &WEEK,
            SessionPolicy::SINGLE_SESSION,
        )
        .unwrap();
        assert_eq!(
            assignment.weekdays_for(Sport::Running),
            vec![Weekday::Mon, Weekday::Wed, Weekday::Sat]
        );
    }

    #[test]
    fn test_repeat_moved_to_last_free_day() {
        let assignment = DayAssignmentScheduler::assign(
            &counts(&[(Sport::Running, 4)]),
            &WEEK,
            SessionPolicy::SINGLE_SESSION,
        )
        .unwrap();
        assert_eq!(
            assignment.weekdays_for(Sport::Running),
            vec![Weekday::Mon, Weekday::Wed, Weekday::Fri, Weekday::Sun]
        );
    }

    #[test]
    fn test_over_capacity_single_sport() {
        let err = DayAssignmentScheduler::assign(
            &counts(&[(Sport::Running, 8)]),
            &WEEK[..4],
            SessionPolicy::SINGLE_SESSION,
        )
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::OverCapacity);
    }

    #[test]
    fn test_aerobic_alternation() {
        let assignment = DayAssignmentScheduler::assign(
            &counts(&[(Sport::Running, 3), (Sport::Cycling, 3), (Sport::Swimming, 1)]),
            &WEEK[..5],
            SessionPolicy::SINGLE_SESSION,
        )
        .unwrap();
        assert_eq!(assignment.count_for(Sport::Running), 2);
        assert_eq!(assignment.count_for(Sport::Cycling), 2);
        assert_eq!(assignment.count_for(Sport::Swimming), 1);
    }

    #[test]
    fn test_multi_session_doubles_up() {
        let assignment = DayAssignmentScheduler::assign(
            &counts(&[(Sport::Running, 3), (Sport::Swimming, 2)]),
            &WEEK[..3],
            SessionPolicy::MULTI_SESSION,
        )
        .unwrap();
        assert_eq!(assignment.len(), 5);
    }

    #[test]
    fn test_no_days_is_invalid() {
        let err = DayAssignmentScheduler::assign(
            &counts(&[(Sport::Running, 1)]),
            &[],
            SessionPolicy::SINGLE_SESSION,
        )
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
    }
}
