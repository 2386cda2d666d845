//! Daily word schedule
//!
//! Lists the answer for a run of days. A forced word is shown next to the
//! rotation word it replaced.

use crate::core::Word;
use crate::game::DailySchedule;
use chrono::NaiveDate;

/// One day of the schedule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledDay {
    pub date: NaiveDate,
    pub word: Word,
    /// Rotation word, when an override replaced it
    pub replaced: Option<Word>,
}

/// Answers for `days` consecutive days starting at `from`
#[must_use]
pub fn run_schedule(schedule: &DailySchedule, from: NaiveDate, days: usize) -> Vec<ScheduledDay> {
    let mut rotation = schedule.clone();
    rotation.clear_override();

    from.iter_days()
        .take(days)
        .map(|date| {
            let word = schedule.answer_for(date).clone();
            let base = rotation.answer_for(date);
            ScheduledDay {
                date,
                replaced: (*base != word).then(|| base.clone()),
                word,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, d).unwrap()
    }

    fn schedule() -> DailySchedule {
        let answers = ["CRANE", "SLATE", "TEMPO"]
            .iter()
            .map(|w| Word::new(*w).unwrap())
            .collect();
        DailySchedule::new(answers, day(1)).unwrap()
    }

    #[test]
    fn lists_rotation_words() {
        let days = run_schedule(&schedule(), day(2), 4);
        let words: Vec<&str> = days.iter().map(|d| d.word.text()).collect();
        assert_eq!(words, ["SLATE", "TEMPO", "CRANE", "SLATE"]);
        assert_eq!(days[3].date, day(5));
        assert!(days.iter().all(|d| d.replaced.is_none()));
    }

    #[test]
    fn override_shows_replaced_word() {
        let mut schedule = schedule();
        schedule.set_override(day(2), "tempo").unwrap();

        let days = run_schedule(&schedule, day(1), 3);
        assert_eq!(days[1].word.text(), "TEMPO");
        assert_eq!(days[1].replaced.as_ref().map(Word::text), Some("SLATE"));
        assert!(days[0].replaced.is_none());
        assert!(days[2].replaced.is_none());

        // The caller's override is untouched
        assert!(schedule.current_override().is_some());
    }
}
