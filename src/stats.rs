use crate::models::{AchievementTier, AppData, DayStat, ScopeStats, StatsResponse, Task, WEEKDAYS};
use crate::motivation::{weekday_motivation, weekend_motivation};

pub fn build_stats(data: &AppData) -> StatsResponse {
    let selected = data.selected_weekday;
    let weekend_mode = data.weekend_mode;

    let overall_tasks: Vec<&Task> = data
        .tasks
        .iter()
        .filter(|task| !weekend_mode || task.is_weekend)
        .collect();
    let overall_completed = overall_tasks.iter().filter(|task| task.completed).count();
    let overall = scope_stats(overall_completed, overall_tasks.len());

    // Today's scope ignores weekend mode.
    let today_tasks: Vec<&Task> = data
        .tasks
        .iter()
        .filter(|task| task.weekday == selected)
        .collect();
    let today_completed = today_tasks.iter().filter(|task| task.completed).count();
    let today = scope_stats(today_completed, today_tasks.len());

    let weekly = WEEKDAYS
        .iter()
        .filter(|day| !weekend_mode || day.is_weekend)
        .map(|day| {
            let total = data
                .tasks
                .iter()
                .filter(|task| task.weekday == day.key)
                .count();
            let completed = data
                .tasks
                .iter()
                .filter(|task| task.weekday == day.key && task.completed)
                .count();
            DayStat {
                day: day.key,
                label: day.short_label,
                is_weekend: day.is_weekend,
                gradient: day.gradient,
                total,
                completed,
                rate: completion_rate(completed, total),
            }
        })
        .collect();

    let motivation = if selected.is_weekend() {
        weekend_motivation(today_completed)
    } else {
        weekday_motivation(today_completed)
    };

    StatsResponse {
        selected_weekday: selected,
        weekend_mode,
        today,
        overall,
        weekly,
        motivation,
    }
}

/// Percentage of completed tasks, rounded to the nearest integer.
/// An empty scope is 0, never a division by zero.
pub fn completion_rate(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    ((completed as f64 / total as f64) * 100.0).round() as u8
}

pub fn achievement_tier(rate: u8) -> AchievementTier {
    if rate >= 90 {
        AchievementTier {
            emoji: "\u{1F3C6}",
            label: "Champion",
            color_class: "tier-champion",
        }
    } else if rate >= 75 {
        AchievementTier {
            emoji: "\u{1F947}",
            label: "Excellent",
            color_class: "tier-excellent",
        }
    } else if rate >= 50 {
        AchievementTier {
            emoji: "\u{1F3AF}",
            label: "Good",
            color_class: "tier-good",
        }
    } else if rate >= 25 {
        AchievementTier {
            emoji: "\u{1F4C8}",
            label: "Progress",
            color_class: "tier-progress",
        }
    } else {
        AchievementTier {
            emoji: "\u{1F331}",
            label: "Starting",
            color_class: "tier-starting",
        }
    }
}

fn scope_stats(completed: usize, total: usize) -> ScopeStats {
    let rate = completion_rate(completed, total);
    ScopeStats {
        total,
        completed,
        remaining: total - completed,
        rate,
        tier: achievement_tier(rate),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Weekday;

    fn data_with(tasks: &[(Weekday, bool)]) -> AppData {
        let mut data = AppData::default();
        for (weekday, completed) in tasks {
            data.add_task("task".into(), *weekday);
            data.tasks.last_mut().unwrap().completed = *completed;
        }
        data
    }

    #[test]
    fn empty_scope_rate_is_zero() {
        assert_eq!(completion_rate(0, 0), 0);
        let data = AppData::default();
        let stats = build_stats(&data);
        assert_eq!(stats.overall.rate, 0);
        assert_eq!(stats.today.rate, 0);
        for day in &stats.weekly {
            assert_eq!(day.rate, 0);
        }
    }

    #[test]
    fn rate_rounds_to_nearest_integer() {
        assert_eq!(completion_rate(2, 3), 67);
        assert_eq!(completion_rate(1, 3), 33);
        assert_eq!(completion_rate(1, 2), 50);
        assert_eq!(completion_rate(5, 5), 100);
    }

    #[test]
    fn rate_stays_within_bounds() {
        for total in 0..20usize {
            for completed in 0..=total {
                let rate = completion_rate(completed, total);
                assert!(rate <= 100);
            }
        }
    }

    #[test]
    fn tier_bounds_are_inclusive() {
        assert_eq!(achievement_tier(90).label, "Champion");
        assert_eq!(achievement_tier(89).label, "Excellent");
        assert_eq!(achievement_tier(75).label, "Excellent");
        assert_eq!(achievement_tier(74).label, "Good");
        assert_eq!(achievement_tier(50).label, "Good");
        assert_eq!(achievement_tier(49).label, "Progress");
        assert_eq!(achievement_tier(25).label, "Progress");
        assert_eq!(achievement_tier(24).label, "Starting");
        assert_eq!(achievement_tier(0).label, "Starting");
        assert_eq!(achievement_tier(100).label, "Champion");
    }

    #[test]
    fn worked_example_monday_week_mode() {
        let mut data = data_with(&[
            (Weekday::Monday, true),
            (Weekday::Monday, false),
            (Weekday::Saturday, true),
        ]);
        data.selected_weekday = Weekday::Monday;
        data.weekend_mode = false;

        let stats = build_stats(&data);
        assert_eq!(stats.today.rate, 50);
        assert_eq!(stats.overall.rate, 67);
        assert_eq!(stats.weekly.len(), 7);
    }

    #[test]
    fn weekend_mode_restricts_overall_and_breakdown() {
        let mut data = data_with(&[
            (Weekday::Monday, true),
            (Weekday::Monday, true),
            (Weekday::Saturday, false),
            (Weekday::Sunday, true),
        ]);
        data.selected_weekday = Weekday::Monday;
        data.weekend_mode = true;

        let stats = build_stats(&data);
        assert_eq!(stats.overall.total, 2);
        assert_eq!(stats.overall.completed, 1);
        assert_eq!(stats.overall.rate, 50);
        assert_eq!(stats.weekly.len(), 2);
        assert!(stats.weekly.iter().all(|day| day.is_weekend));
        // Today's scope still sees Monday's tasks.
        assert_eq!(stats.today.total, 2);
        assert_eq!(stats.today.rate, 100);
    }

    #[test]
    fn counts_are_consistent_in_every_scope() {
        let data = data_with(&[
            (Weekday::Monday, true),
            (Weekday::Tuesday, false),
            (Weekday::Saturday, true),
            (Weekday::Saturday, false),
        ]);
        let stats = build_stats(&data);
        assert_eq!(
            stats.overall.completed + stats.overall.remaining,
            stats.overall.total
        );
        assert_eq!(
            stats.today.completed + stats.today.remaining,
            stats.today.total
        );
        let breakdown_total: usize = stats.weekly.iter().map(|day| day.total).sum();
        assert_eq!(breakdown_total, data.tasks.len());
    }

    #[test]
    fn motivation_follows_selected_day() {
        let mut data = data_with(&[(Weekday::Saturday, true)]);
        data.selected_weekday = Weekday::Saturday;
        let weekend = build_stats(&data).motivation;
        data.selected_weekday = Weekday::Monday;
        let weekday = build_stats(&data).motivation;
        assert_ne!(weekend, weekday);
    }

    #[test]
    fn tiers_apply_independently_to_today_and_overall() {
        let mut data = data_with(&[
            (Weekday::Monday, true),
            (Weekday::Tuesday, false),
            (Weekday::Wednesday, false),
            (Weekday::Thursday, false),
        ]);
        data.selected_weekday = Weekday::Monday;
        let stats = build_stats(&data);
        assert_eq!(stats.today.tier.label, "Champion");
        assert_eq!(stats.overall.tier.label, "Progress");
    }
}
