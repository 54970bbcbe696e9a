//! Fixed motivation strings, bucketed by how many tasks are done today.

pub fn weekday_motivation(completed: usize) -> &'static str {
    match completed {
        0 => "Pick one small task to get the day moving.",
        1..=2 => "Nice start, keep the momentum going.",
        3..=5 => "Solid progress, the week is taking shape.",
        _ => "On fire today, the checklist doesn't stand a chance.",
    }
}

pub fn weekend_motivation(completed: usize) -> &'static str {
    match completed {
        0 => "No rush, weekends are for easing in.",
        1..=2 => "A little weekend progress goes a long way.",
        3..=5 => "Productive weekend, leave room to recharge.",
        _ => "Weekend champion, now go enjoy the rest of it.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buckets_cover_all_counts() {
        assert_eq!(weekday_motivation(0), weekday_motivation(0));
        assert_ne!(weekday_motivation(0), weekday_motivation(1));
        assert_eq!(weekday_motivation(1), weekday_motivation(2));
        assert_eq!(weekday_motivation(3), weekday_motivation(5));
        assert_eq!(weekday_motivation(6), weekday_motivation(100));
    }

    #[test]
    fn weekend_table_is_distinct() {
        assert_ne!(weekday_motivation(0), weekend_motivation(0));
        assert_ne!(weekday_motivation(4), weekend_motivation(4));
    }
}
