//! Mood log, journal and the weekly wellness check-in.

use std::collections::{BTreeMap, HashMap};

use tracing::info;

use catalyst_core::stats::{days_ago, streak};
use catalyst_core::{
    CatalystError, CatalystResult, Clock, Collection, JournalEntry, Mood, MoodEntry, RecordStore,
    Trend,
};

use crate::optional_text;

const MAX_HISTORY_DAYS: i64 = 90;
const CHECKIN_DAYS: i64 = 7;

const JOURNAL_PROMPT: &str = "**Journal Prompt:**\n\
    What is one thing that went well this week, and what made it possible?\n\n\
    Take 5-10 minutes to write your thoughts. Call journal with your text when ready.";

pub struct Wellness<'a, S> {
    store: &'a S,
    clock: &'a dyn Clock,
}

impl<'a, S: RecordStore> Wellness<'a, S> {
    pub fn new(store: &'a S, clock: &'a dyn Clock) -> Self {
        Self { store, clock }
    }

    pub fn log_mood(&self, mood: &str, notes: &str) -> CatalystResult<String> {
        if mood.trim().is_empty() {
            return Err(CatalystError::Invalid(format!(
                "Please tell me how you're feeling. Options: {}",
                Mood::allowed()
            )));
        }
        let mood: Mood = mood.parse()?;

        let mut entries: Vec<MoodEntry> = self.store.load(Collection::Mood);
        let entry = MoodEntry {
            mood,
            notes: optional_text(notes),
            timestamp: self.clock.stamp(),
            date: self.clock.date_string(),
        };
        let mut lines = vec![format!("Mood logged: {mood} ({})", entry.timestamp)];
        entries.push(entry);
        self.store.save(Collection::Mood, &entries)?;
        info!("logged mood {mood}");

        lines.push(String::new());
        lines.push(
            if mood.is_positive() {
                "That's wonderful! Keep riding this energy."
            } else if mood == Mood::Okay {
                "Okay is fine. Not every day needs to be amazing."
            } else {
                "I hear you. Step away for a few minutes, breathe slowly and be kind to yourself today."
            }
            .into(),
        );

        let logged: HashMap<String, bool> =
            entries.iter().map(|e| (e.date.clone(), true)).collect();
        lines.push(format!(
            "\nMood tracking streak: {} days in a row | {} days logged total",
            streak(&logged, self.clock.today()),
            logged.len()
        ));

        Ok(lines.join("\n"))
    }

    pub fn mood_history(&self, days: i64) -> CatalystResult<String> {
        let entries: Vec<MoodEntry> = self.store.load(Collection::Mood);
        if entries.is_empty() {
            return Ok("No mood entries yet. Use log_mood to start tracking how you feel!".into());
        }

        let days = days.clamp(1, MAX_HISTORY_DAYS);
        let cutoff = days_ago(self.clock.today(), days);
        let recent: Vec<&MoodEntry> = entries.iter().filter(|e| e.date >= cutoff).collect();
        if recent.is_empty() {
            return Ok(format!("No mood entries in the last {days} days."));
        }

        let mut lines = vec![format!("Mood History (last {days} days):\n")];

        let mut by_date: BTreeMap<&str, Vec<&MoodEntry>> = BTreeMap::new();
        for &e in &recent {
            by_date.entry(e.date.as_str()).or_default().push(e);
        }
        for (date, day) in by_date.iter().rev() {
            let moods: Vec<&str> = day.iter().map(|e| e.mood.as_str()).collect();
            let notes: Vec<&str> = day
                .iter()
                .filter(|e| !e.notes.is_empty())
                .map(|e| e.notes.as_str())
                .collect();
            let notes = if notes.is_empty() {
                String::new()
            } else {
                format!(" - {}", notes.join("; "))
            };
            lines.push(format!("  {date}: {}{notes}", moods.join(", ")));
        }

        lines.push("\nMood breakdown:".into());
        for (mood, count) in mood_counts(&recent) {
            lines.push(format!(
                "  {:10} {} ({count})",
                mood.as_str(),
                "#".repeat(count)
            ));
        }

        lines.push(
            match Trend::of(recent.iter().map(|e| &e.mood)) {
                Trend::Positive => "\nOverall: You've been mostly positive! Keep it up.",
                Trend::Negative => "\nOverall: It's been a tough stretch. Be kind to yourself.",
                Trend::Mixed => "\nOverall: Mixed feelings are normal. You're doing fine.",
            }
            .into(),
        );

        Ok(lines.join("\n"))
    }

    pub fn journal(&self, entry: &str, get_prompt: bool) -> CatalystResult<String> {
        let text = entry.trim();
        if get_prompt || text.is_empty() {
            return Ok(JOURNAL_PROMPT.into());
        }

        let mut entries: Vec<JournalEntry> = self.store.load(Collection::Journal);
        let journal = JournalEntry {
            entry: text.to_string(),
            timestamp: self.clock.stamp(),
            date: self.clock.date_string(),
            word_count: text.split_whitespace().count(),
        };
        let reply_head = format!(
            "Journal entry saved! ({})\nWords: {}",
            journal.timestamp, journal.word_count
        );
        entries.push(journal);
        self.store.save(Collection::Journal, &entries)?;
        info!("saved journal entry #{}", entries.len());

        let total_words: usize = entries.iter().map(|e| e.word_count).sum();
        Ok(format!(
            "{reply_head}\nTotal entries: {} | Total words written: {total_words}\n\n\
             Writing is therapy. Great job taking time for yourself.",
            entries.len()
        ))
    }

    pub fn weekly_checkin(&self) -> CatalystResult<String> {
        let cutoff = days_ago(self.clock.today(), CHECKIN_DAYS);

        let moods: Vec<MoodEntry> = self.store.load(Collection::Mood);
        let recent_moods: Vec<&MoodEntry> = moods.iter().filter(|m| m.date >= cutoff).collect();

        let journals: Vec<JournalEntry> = self.store.load(Collection::Journal);
        let recent_journals: Vec<&JournalEntry> =
            journals.iter().filter(|j| j.date >= cutoff).collect();

        let mut lines = vec![
            "**Weekly Wellness Check-In**\n".to_string(),
            format!("Period: {cutoff} to {}\n", self.clock.date_string()),
        ];

        let counts = mood_counts(&recent_moods);
        if let Some((dominant, _)) = counts.first() {
            lines.push(format!(
                "**Mood Summary:** {} entries logged",
                recent_moods.len()
            ));
            for (mood, count) in &counts {
                lines.push(format!("  - {mood}: {count} times"));
            }
            lines.push(format!("  Dominant mood: {dominant}"));
            lines.push(
                match Trend::of(recent_moods.iter().map(|m| &m.mood)) {
                    Trend::Positive => "  Trend: Positive week overall!",
                    Trend::Negative => {
                        "  Trend: Rough week. Consider talking to someone you trust."
                    }
                    Trend::Mixed => "  Trend: Balanced week.",
                }
                .into(),
            );
        } else {
            lines.push("**Mood:** No mood entries this week. Try logging daily!".into());
        }
        lines.push(String::new());

        if recent_journals.is_empty() {
            lines.push("**Journal:** No entries this week. Even 5 minutes helps!".into());
        } else {
            let words: usize = recent_journals.iter().map(|j| j.word_count).sum();
            lines.push(format!(
                "**Journal:** {} entries, {words} words written",
                recent_journals.len()
            ));
        }
        lines.push(String::new());

        lines.push("**This Week's Recommendations:**".into());
        lines.push("  1. Try a slow breathing exercise when you feel overwhelmed".into());
        lines.push("  2. Write in your journal at least 3 times this week".into());
        lines.push("  3. Get outside for at least 20 minutes of sunlight daily".into());
        lines.push("  4. Celebrate one win from this week, no matter how small".into());

        Ok(lines.join("\n"))
    }
}

/// Per-mood counts, most frequent first. Ties keep the order in which each
/// mood first appears.
fn mood_counts(entries: &[&MoodEntry]) -> Vec<(Mood, usize)> {
    let mut counts: Vec<(Mood, usize)> = Vec::new();
    for e in entries {
        match counts.iter_mut().find(|(mood, _)| *mood == e.mood) {
            Some((_, count)) => *count += 1,
            None => counts.push((e.mood, 1)),
        }
    }
    // stable
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}
