//! Built-in quote table
//!
//! Topic keys are lowercase and fixed at startup. Lookups never fail: an
//! unknown topic yields a single fallback line instead of an error.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Returned (as the only element) when a topic has no quotes.
pub const FALLBACK_MESSAGE: &str =
    "No quotes found for this topic. Try 'life', 'love', or 'success'.";

/// A quick-pick shortcut shown next to the search bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopicCategory {
    pub key: &'static str,
    pub label: &'static str,
}

/// Category shortcuts, in display order
pub const CATEGORIES: [TopicCategory; 3] = [
    TopicCategory { key: "life", label: "Life & Philosophy" },
    TopicCategory { key: "love", label: "Relationships" },
    TopicCategory { key: "success", label: "Business & Success" },
];

const BUILTIN: [(&str, [&str; 3]); 3] = [
    (
        "life",
        [
            "Life is what happens when you're busy making other plans.",
            "Live in the sunshine, swim in the sea, drink the wild air.",
            "Life itself is the most wonderful fairy tale.",
        ],
    ),
    (
        "love",
        [
            "Love is composed of a single soul inhabiting two bodies.",
            "To love and be loved is to feel the sun from both sides.",
            "The best thing to hold onto in life is each other.",
        ],
    ),
    (
        "success",
        [
            "Success is not final, failure is not fatal.",
            "The road to success and the road to failure are almost exactly the same.",
            "Don't be afraid to give up the good to go for the great.",
        ],
    ),
];

static BUILTIN_STORE: Lazy<QuoteStore> = Lazy::new(|| {
    QuoteStore::from_entries(BUILTIN.iter().map(|(topic, quotes)| {
        (
            topic.to_string(),
            quotes.iter().map(|q| q.to_string()).collect(),
        )
    }))
});

/// Immutable topic -> quotes table
#[derive(Debug, Clone)]
pub struct QuoteStore {
    entries: HashMap<String, Vec<String>>,
    order: Vec<String>,
}

impl QuoteStore {
    /// The process-wide built-in table
    pub fn builtin() -> &'static QuoteStore {
        &BUILTIN_STORE
    }

    /// Build a store, lowercasing keys. Empty sequences are skipped and a
    /// repeated key keeps its first definition.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, Vec<String>)>,
    {
        let mut map = HashMap::new();
        let mut order = Vec::new();

        for (topic, quotes) in entries {
            let key = topic.to_lowercase();
            if quotes.is_empty() || map.contains_key(&key) {
                tracing::debug!("Skipping quote entry {:?}", topic);
                continue;
            }
            order.push(key.clone());
            map.insert(key, quotes);
        }

        Self { entries: map, order }
    }

    /// Quotes for a topic, or the fallback line.
    ///
    /// The input is lowercased but not trimmed, so `" love"` does not match.
    pub fn lookup(&self, topic: &str) -> Vec<String> {
        match self.entries.get(&topic.to_lowercase()) {
            Some(quotes) => quotes.clone(),
            None => vec![FALLBACK_MESSAGE.to_string()],
        }
    }

    pub fn contains(&self, topic: &str) -> bool {
        self.entries.contains_key(&topic.to_lowercase())
    }

    /// Topic keys in definition order
    pub fn topics(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }
}

impl Default for QuoteStore {
    fn default() -> Self {
        Self::builtin().clone()
    }
}
