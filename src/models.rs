use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub fn is_weekend(self) -> bool {
        matches!(self, Weekday::Saturday | Weekday::Sunday)
    }

    /// The server's current local weekday.
    pub fn today() -> Self {
        match Local::now().date_naive().weekday() {
            chrono::Weekday::Mon => Weekday::Monday,
            chrono::Weekday::Tue => Weekday::Tuesday,
            chrono::Weekday::Wed => Weekday::Wednesday,
            chrono::Weekday::Thu => Weekday::Thursday,
            chrono::Weekday::Fri => Weekday::Friday,
            chrono::Weekday::Sat => Weekday::Saturday,
            chrono::Weekday::Sun => Weekday::Sunday,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }
}

/// Static per-day display metadata. Loaded once, never mutated.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct WeekdayDescriptor {
    pub key: Weekday,
    pub short_label: &'static str,
    pub is_weekend: bool,
    pub gradient: &'static str,
}

pub const WEEKDAYS: [WeekdayDescriptor; 7] = [
    WeekdayDescriptor {
        key: Weekday::Monday,
        short_label: "Mon",
        is_weekend: false,
        gradient: "linear-gradient(135deg, #60a5fa, #6366f1)",
    },
    WeekdayDescriptor {
        key: Weekday::Tuesday,
        short_label: "Tue",
        is_weekend: false,
        gradient: "linear-gradient(135deg, #34d399, #14b8a6)",
    },
    WeekdayDescriptor {
        key: Weekday::Wednesday,
        short_label: "Wed",
        is_weekend: false,
        gradient: "linear-gradient(135deg, #fbbf24, #f97316)",
    },
    WeekdayDescriptor {
        key: Weekday::Thursday,
        short_label: "Thu",
        is_weekend: false,
        gradient: "linear-gradient(135deg, #22d3ee, #3b82f6)",
    },
    WeekdayDescriptor {
        key: Weekday::Friday,
        short_label: "Fri",
        is_weekend: false,
        gradient: "linear-gradient(135deg, #a78bfa, #8b5cf6)",
    },
    WeekdayDescriptor {
        key: Weekday::Saturday,
        short_label: "Sat",
        is_weekend: true,
        gradient: "linear-gradient(135deg, #f472b6, #e11d48)",
    },
    WeekdayDescriptor {
        key: Weekday::Sunday,
        short_label: "Sun",
        is_weekend: true,
        gradient: "linear-gradient(135deg, #fb923c, #ef4444)",
    },
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub title: String,
    pub weekday: Weekday,
    pub completed: bool,
    pub is_weekend: bool,
}

#[derive(Debug, Clone)]
pub struct AppData {
    pub tasks: Vec<Task>,
    pub selected_weekday: Weekday,
    pub weekend_mode: bool,
    pub next_id: u64,
}

impl Default for AppData {
    fn default() -> Self {
        Self {
            tasks: Vec::new(),
            selected_weekday: Weekday::today(),
            weekend_mode: false,
            next_id: 1,
        }
    }
}

impl AppData {
    pub fn add_task(&mut self, title: String, weekday: Weekday) -> Task {
        let task = Task {
            id: self.next_id,
            title,
            weekday,
            completed: false,
            is_weekend: weekday.is_weekend(),
        };
        self.next_id += 1;
        self.tasks.push(task.clone());
        task
    }
}

/// Qualitative label for a completion rate, lower bounds inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AchievementTier {
    pub emoji: &'static str,
    pub label: &'static str,
    pub color_class: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
    pub title: String,
    pub weekday: Weekday,
}

#[derive(Debug, Deserialize)]
pub struct SelectDayRequest {
    pub weekday: Weekday,
}

#[derive(Debug, Deserialize)]
pub struct SetModeRequest {
    pub weekend: bool,
}

#[derive(Debug, Serialize)]
pub struct ModeResponse {
    pub weekend_mode: bool,
}

#[derive(Debug, Serialize)]
pub struct SelectedDayResponse {
    pub selected_weekday: Weekday,
}

/// Completion counts for one scope (a day, or the whole filtered list).
#[derive(Debug, Serialize)]
pub struct ScopeStats {
    pub total: usize,
    pub completed: usize,
    pub remaining: usize,
    pub rate: u8,
    pub tier: AchievementTier,
}

#[derive(Debug, Serialize)]
pub struct DayStat {
    pub day: Weekday,
    pub label: &'static str,
    pub is_weekend: bool,
    pub gradient: &'static str,
    pub total: usize,
    pub completed: usize,
    pub rate: u8,
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub selected_weekday: Weekday,
    pub weekend_mode: bool,
    pub today: ScopeStats,
    pub overall: ScopeStats,
    pub weekly: Vec<DayStat>,
    pub motivation: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weekday_serializes_lowercase() {
        let json = serde_json::to_string(&Weekday::Wednesday).unwrap();
        assert_eq!(json, "\"wednesday\"");
        let back: Weekday = serde_json::from_str("\"sunday\"").unwrap();
        assert_eq!(back, Weekday::Sunday);
    }

    #[test]
    fn weekend_days_are_saturday_and_sunday() {
        let weekend: Vec<Weekday> = WEEKDAYS
            .iter()
            .filter(|day| day.is_weekend)
            .map(|day| day.key)
            .collect();
        assert_eq!(weekend, vec![Weekday::Saturday, Weekday::Sunday]);
        assert!(Weekday::Saturday.is_weekend());
        assert!(!Weekday::Friday.is_weekend());
    }

    #[test]
    fn add_task_assigns_ids_and_weekend_flag() {
        let mut data = AppData::default();
        let first = data.add_task("laundry".into(), Weekday::Saturday);
        let second = data.add_task("emails".into(), Weekday::Monday);
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert!(first.is_weekend);
        assert!(!second.is_weekend);
        assert!(!first.completed);
        assert_eq!(data.tasks.len(), 2);
    }
}
