//! Journal entries annotated with sentiment, and per-user topic activity.
//!
//! A learning journal records entries under topics. Each entry is scored
//! once when it is created; [`ActivityStore`] counts how often each user
//! touches each topic so the busiest and quietest topics can be listed.

use std::fmt;

use rustc_hash::FxHashMap;
use sentio_types::{Label, SentimentScore};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::scorer::Scorer;

/// Characters of entry text shown by the `Display` impl.
const PREVIEW_CHARS: usize = 50;

/// A journal entry with its sentiment fixed at creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    topic: String,
    author: String,
    text: String,
    sentiment: SentimentScore,
}

impl JournalEntry {
    /// Scores `text` and wraps it into an entry.
    pub fn annotate(
        scorer: &Scorer,
        topic: impl Into<String>,
        author: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        let text = text.into();
        let sentiment = scorer.analyze(&text);
        Self {
            topic: topic.into(),
            author: author.into(),
            text,
            sentiment,
        }
    }

    /// Topic the entry was filed under.
    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// Who wrote the entry.
    pub fn author(&self) -> &str {
        &self.author
    }

    /// The entry text as written.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Score computed when the entry was created.
    pub fn sentiment(&self) -> &SentimentScore {
        &self.sentiment
    }

    /// Shorthand for the sentiment label.
    pub fn label(&self) -> Label {
        self.sentiment.label
    }
}

impl fmt::Display for JournalEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let preview: String = self.text.chars().take(PREVIEW_CHARS).collect();
        write!(f, "{preview}... ({})", self.sentiment.label)
    }
}

/// How often one user has touched one topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicActivity {
    /// Topic name.
    pub topic: String,
    /// Times the user touched it.
    pub count: u64,
}

/// Per-user topic activity counters.
///
/// Implementations back this with whatever store the host application uses;
/// [`MemoryActivityStore`] keeps everything in process.
pub trait ActivityStore {
    /// Increments `user`'s count for `topic`, creating it at zero first if
    /// needed, and returns the new count.
    fn record(&mut self, user: &str, topic: &str) -> u64;

    /// All of `user`'s topics, busiest first. Equal counts order by topic
    /// name ascending.
    fn ranked(&self, user: &str) -> Vec<TopicActivity>;

    /// The busiest topic, if the user has any.
    fn most_active(&self, user: &str) -> Option<TopicActivity> {
        self.ranked(user).into_iter().next()
    }

    /// The quietest topic, if the user has any. Equal counts pick the topic
    /// name that sorts first.
    fn least_active(&self, user: &str) -> Option<TopicActivity> {
        self.ranked(user)
            .into_iter()
            .min_by(|a, b| a.count.cmp(&b.count).then_with(|| a.topic.cmp(&b.topic)))
    }
}

/// In-memory [`ActivityStore`].
#[derive(Debug, Clone, Default)]
pub struct MemoryActivityStore {
    users: FxHashMap<Box<str>, FxHashMap<Box<str>, u64>>,
}

impl MemoryActivityStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current count for one user and topic; zero if never recorded.
    pub fn count(&self, user: &str, topic: &str) -> u64 {
        self.users
            .get(user)
            .and_then(|topics| topics.get(topic))
            .copied()
            .unwrap_or(0)
    }
}

impl ActivityStore for MemoryActivityStore {
    fn record(&mut self, user: &str, topic: &str) -> u64 {
        let count = self
            .users
            .entry(Box::from(user))
            .or_default()
            .entry(Box::from(topic))
            .or_insert(0);
        *count += 1;
        debug!(user, topic, count = *count, "recorded activity");
        *count
    }

    fn ranked(&self, user: &str) -> Vec<TopicActivity> {
        let Some(topics) = self.users.get(user) else {
            return Vec::new();
        };

        let mut ranked: Vec<TopicActivity> = topics
            .iter()
            .map(|(topic, &count)| TopicActivity {
                topic: topic.to_string(),
                count,
            })
            .collect();
        ranked.sort_unstable_by(|a, b| b.count.cmp(&a.count).then_with(|| a.topic.cmp(&b.topic)));
        ranked
    }
}
