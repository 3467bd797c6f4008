//! Interaction controller
//!
//! Owns the single `SearchState` and every transition on it. Delayed work is
//! never slept on here: operations hand back a [`Timer`] and the host fires
//! its event into [`Controller::on_timer`] once the delay has passed.

use std::time::Duration;

use crate::clipboard::ClipboardWriter;
use crate::config::Delays;
use crate::quotes::QuoteStore;

/// Everything the view reads
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    /// Raw query as typed or selected, not lowercased
    pub query_text: String,
    /// Matched quotes or the single fallback line; empty until a search lands
    pub results: Vec<String>,
    pub is_loading: bool,
    pub selected_category: Option<String>,
    /// Quote whose "copied" notice is showing
    pub copied_index: Option<usize>,
}

/// Deferred work, fired back into the controller after its delay
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerEvent {
    SearchReady { search_id: u64 },
    CategoryDebounced,
    CopiedExpired { copy_id: u64 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timer {
    pub delay: Duration,
    pub event: TimerEvent,
}

impl Timer {
    fn new(delay: Duration, event: TimerEvent) -> Self {
        Self { delay, event }
    }

    /// Wait out the delay without blocking the runtime
    pub async fn elapsed(self) -> TimerEvent {
        tokio::time::sleep(self.delay).await;
        self.event
    }
}

#[derive(Debug)]
struct InFlight {
    id: u64,
    query: String,
}

pub struct Controller<C> {
    store: QuoteStore,
    delays: Delays,
    clipboard: C,
    state: SearchState,
    in_flight: Option<InFlight>,
    search_seq: u64,
    copy_seq: u64,
}

impl<C: ClipboardWriter> Controller<C> {
    pub fn new(store: QuoteStore, delays: Delays, clipboard: C) -> Self {
        Self {
            store,
            delays,
            clipboard,
            state: SearchState::default(),
            in_flight: None,
            search_seq: 0,
            copy_seq: 0,
        }
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn update_query_text(&mut self, text: impl Into<String>) {
        self.state.query_text = text.into();
    }

    /// Start a search for the current query.
    ///
    /// Blank queries are ignored. The query is captured now; the lookup runs
    /// when the returned timer fires.
    pub fn submit_search(&mut self) -> Option<Timer> {
        if self.state.query_text.trim().is_empty() {
            return None;
        }

        self.search_seq += 1;
        let id = self.search_seq;
        if let Some(previous) = self.in_flight.replace(InFlight {
            id,
            query: self.state.query_text.clone(),
        }) {
            tracing::debug!("Search {} superseded by {}", previous.id, id);
        }

        self.state.is_loading = true;
        self.state.results.clear();
        self.state.copied_index = None;
        tracing::debug!("Search {} started for {:?}", id, self.state.query_text);

        Some(Timer::new(
            self.delays.search(),
            TimerEvent::SearchReady { search_id: id },
        ))
    }

    /// Fill the input from a category shortcut, then search after a short
    /// debounce so the input visibly updates first.
    pub fn select_category(&mut self, key: impl Into<String>) -> Timer {
        let key = key.into();
        tracing::debug!("Category selected: {}", key);
        self.state.query_text = key.clone();
        self.state.selected_category = Some(key);
        Timer::new(self.delays.category_debounce(), TimerEvent::CategoryDebounced)
    }

    /// Copy a quote and flag it as copied until the flash delay runs out.
    ///
    /// Clipboard failures are logged and otherwise ignored. An index outside
    /// the current results is ignored entirely. Only the most recent copy's
    /// timer clears the notice, so re-copying the same quote restarts it.
    pub fn copy_quote(&mut self, text: &str, index: usize) -> Option<Timer> {
        if index >= self.state.results.len() {
            tracing::warn!(
                "Ignoring copy of index {} with {} results",
                index,
                self.state.results.len()
            );
            return None;
        }

        if let Err(e) = self.clipboard.write(text) {
            tracing::warn!("Clipboard write failed: {}", e);
        }

        self.copy_seq += 1;
        self.state.copied_index = Some(index);
        Some(Timer::new(
            self.delays.copied_flash(),
            TimerEvent::CopiedExpired { copy_id: self.copy_seq },
        ))
    }

    /// Apply an elapsed timer. May schedule follow-up work.
    pub fn on_timer(&mut self, event: TimerEvent) -> Option<Timer> {
        match event {
            TimerEvent::SearchReady { search_id } => {
                self.complete_search(search_id);
                None
            }
            TimerEvent::CategoryDebounced => self.submit_search(),
            TimerEvent::CopiedExpired { copy_id } => {
                if copy_id == self.copy_seq {
                    self.state.copied_index = None;
                }
                None
            }
        }
    }

    fn complete_search(&mut self, search_id: u64) {
        let query = match self.in_flight.take() {
            Some(in_flight) if in_flight.id == search_id => in_flight.query,
            other => {
                tracing::debug!("Dropping stale search {}", search_id);
                self.in_flight = other;
                return;
            }
        };

        self.state.results = self.store.lookup(&query);
        self.state.is_loading = false;
        tracing::debug!(
            "Search {} finished with {} result(s)",
            search_id,
            self.state.results.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClipboardError;
    use crate::quotes::FALLBACK_MESSAGE;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct RecordingClipboard {
        written: Arc<Mutex<Vec<String>>>,
    }

    impl ClipboardWriter for RecordingClipboard {
        fn write(&self, text: &str) -> Result<(), ClipboardError> {
            self.written.lock().unwrap().push(text.to_string());
            Ok(())
        }
    }

    struct BrokenClipboard;

    impl ClipboardWriter for BrokenClipboard {
        fn write(&self, _text: &str) -> Result<(), ClipboardError> {
            Err(ClipboardError::Unavailable("no display".to_string()))
        }
    }

    fn controller() -> Controller<RecordingClipboard> {
        Controller::new(
            QuoteStore::builtin().clone(),
            Delays::default(),
            RecordingClipboard::default(),
        )
    }

    fn love_quotes() -> Vec<String> {
        vec![
            "Love is composed of a single soul inhabiting two bodies.".to_string(),
            "To love and be loved is to feel the sun from both sides.".to_string(),
            "The best thing to hold onto in life is each other.".to_string(),
        ]
    }

    /// Fire timers one after another until nothing else is scheduled.
    async fn settle<C: ClipboardWriter>(controller: &mut Controller<C>, timer: Timer) {
        let mut next = Some(timer);
        while let Some(timer) = next {
            let event = timer.elapsed().await;
            next = controller.on_timer(event);
        }
    }

    #[test]
    fn test_initial_state() {
        let controller = controller();
        assert_eq!(controller.state(), &SearchState::default());
    }

    #[test]
    fn test_blank_submit_is_noop() {
        let mut controller = controller();
        for query in ["", "   ", "\t\n"] {
            controller.update_query_text(query);
            assert!(controller.submit_search().is_none());
            assert!(!controller.state().is_loading);
            assert!(controller.state().results.is_empty());
        }
    }

    #[test]
    fn test_blank_submit_while_searching_is_noop() {
        let mut controller = controller();
        controller.update_query_text("love");
        let pending = controller.submit_search().unwrap();

        controller.update_query_text("   ");
        assert!(controller.submit_search().is_none());
        assert!(controller.state().is_loading);
        assert!(controller.state().results.is_empty());

        controller.on_timer(pending.event);
        assert!(!controller.state().is_loading);
        assert_eq!(controller.state().results, love_quotes());
    }

    #[test]
    fn test_blank_submit_keeps_previous_results() {
        let mut controller = controller();
        controller.update_query_text("life");
        let timer = controller.submit_search().unwrap();
        controller.on_timer(timer.event);

        controller.update_query_text("  ");
        assert!(controller.submit_search().is_none());
        assert_eq!(controller.state().results, QuoteStore::builtin().lookup("life"));
    }

    #[test]
    fn test_update_query_text_is_verbatim() {
        let mut controller = controller();
        controller.update_query_text("  LoVe ");
        assert_eq!(controller.state().query_text, "  LoVe ");
    }

    #[test]
    fn test_submit_enters_loading_and_clears_results() {
        let mut controller = controller();
        controller.update_query_text("life");
        let timer = controller.submit_search().unwrap();
        controller.on_timer(timer.event);
        controller.copy_quote("Life itself is the most wonderful fairy tale.", 2);

        controller.update_query_text("success");
        let timer = controller.submit_search().unwrap();
        assert_eq!(timer.delay, Duration::from_millis(600));
        assert!(controller.state().is_loading);
        assert!(controller.state().results.is_empty());
        assert_eq!(controller.state().copied_index, None);
    }

    #[test]
    fn test_unknown_topic_yields_fallback() {
        let mut controller = controller();
        controller.update_query_text("friendship");
        let timer = controller.submit_search().unwrap();
        controller.on_timer(timer.event);
        assert_eq!(controller.state().results, vec![FALLBACK_MESSAGE.to_string()]);
        assert!(!controller.state().is_loading);
    }

    #[test]
    fn test_uppercase_query_matches() {
        let mut controller = controller();
        controller.update_query_text("LOVE");
        let timer = controller.submit_search().unwrap();
        controller.on_timer(timer.event);
        assert_eq!(controller.state().results, love_quotes());
        assert_eq!(controller.state().query_text, "LOVE");
    }

    #[test]
    fn test_newest_search_wins() {
        let mut controller = controller();
        controller.update_query_text("life");
        let first = controller.submit_search().unwrap();
        controller.update_query_text("love");
        let second = controller.submit_search().unwrap();

        controller.on_timer(first.event);
        assert!(controller.state().is_loading);
        assert!(controller.state().results.is_empty());

        controller.on_timer(second.event);
        assert!(!controller.state().is_loading);
        assert_eq!(controller.state().results, love_quotes());
    }

    #[test]
    fn test_search_uses_query_at_submit_time() {
        let mut controller = controller();
        controller.update_query_text("love");
        let timer = controller.submit_search().unwrap();
        controller.update_query_text("life");
        controller.on_timer(timer.event);
        assert_eq!(controller.state().results, love_quotes());
    }

    #[test]
    fn test_select_category_schedules_debounced_search() {
        let mut controller = controller();
        let timer = controller.select_category("success");
        assert_eq!(timer.delay, Duration::from_millis(100));
        assert_eq!(timer.event, TimerEvent::CategoryDebounced);
        assert_eq!(controller.state().query_text, "success");
        assert_eq!(controller.state().selected_category.as_deref(), Some("success"));
        assert!(!controller.state().is_loading);

        let search = controller.on_timer(timer.event).unwrap();
        assert!(controller.state().is_loading);
        controller.on_timer(search.event);
        assert_eq!(controller.state().results, QuoteStore::builtin().lookup("success"));
    }

    #[test]
    fn test_copy_sets_index_and_writes_clipboard() {
        let mut controller = controller();
        let written = controller.clipboard.written.clone();
        controller.update_query_text("love");
        let timer = controller.submit_search().unwrap();
        controller.on_timer(timer.event);

        let quote = controller.state().results[1].clone();
        let timer = controller.copy_quote(&quote, 1).unwrap();
        assert_eq!(timer.delay, Duration::from_millis(2000));
        assert_eq!(controller.state().copied_index, Some(1));
        assert_eq!(*written.lock().unwrap(), vec![quote]);

        controller.on_timer(timer.event);
        assert_eq!(controller.state().copied_index, None);
    }

    #[test]
    fn test_stale_copy_clear_keeps_newer_index() {
        let mut controller = controller();
        controller.update_query_text("life");
        let timer = controller.submit_search().unwrap();
        controller.on_timer(timer.event);

        let first = controller.copy_quote("a", 0).unwrap();
        let second = controller.copy_quote("b", 2).unwrap();
        controller.on_timer(first.event);
        assert_eq!(controller.state().copied_index, Some(2));
        controller.on_timer(second.event);
        assert_eq!(controller.state().copied_index, None);
    }

    #[test]
    fn test_recopy_same_index_restarts_flash() {
        let mut controller = controller();
        controller.update_query_text("life");
        let timer = controller.submit_search().unwrap();
        controller.on_timer(timer.event);

        let first = controller.copy_quote("a", 1).unwrap();
        let second = controller.copy_quote("a", 1).unwrap();
        controller.on_timer(first.event);
        assert_eq!(controller.state().copied_index, Some(1));
        controller.on_timer(second.event);
        assert_eq!(controller.state().copied_index, None);
    }

    #[test]
    fn test_copy_out_of_bounds_is_ignored() {
        let mut controller = controller();
        let written = controller.clipboard.written.clone();
        assert!(controller.copy_quote("nothing", 0).is_none());
        assert_eq!(controller.state().copied_index, None);
        assert!(written.lock().unwrap().is_empty());
    }

    #[test]
    fn test_clipboard_failure_is_swallowed() {
        let mut controller =
            Controller::new(QuoteStore::builtin().clone(), Delays::default(), BrokenClipboard);
        controller.update_query_text("love");
        let timer = controller.submit_search().unwrap();
        controller.on_timer(timer.event);

        assert!(controller.copy_quote("x", 0).is_some());
        assert_eq!(controller.state().copied_index, Some(0));
    }

    #[tokio::test(start_paused = true)]
    async fn test_loading_lasts_for_search_delay() {
        let mut controller = controller();
        controller.update_query_text("love");
        let timer = controller.submit_search().unwrap();
        assert!(controller.state().is_loading);

        let started = tokio::time::Instant::now();
        let event = timer.elapsed().await;
        assert!(started.elapsed() >= Duration::from_millis(600));
        assert!(controller.state().is_loading);

        controller.on_timer(event);
        assert!(!controller.state().is_loading);
        assert_eq!(controller.state().results, QuoteStore::builtin().lookup("love"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_select_category_eventually_shows_quotes() {
        let mut controller = controller();
        let started = tokio::time::Instant::now();
        let timer = controller.select_category("love");
        settle(&mut controller, timer).await;

        assert!(started.elapsed() >= Duration::from_millis(700));
        let state = controller.state();
        assert_eq!(state.selected_category.as_deref(), Some("love"));
        assert_eq!(state.query_text, "love");
        assert_eq!(state.results, love_quotes());
        assert!(!state.is_loading);
    }

    #[tokio::test(start_paused = true)]
    async fn test_end_to_end_love_search() {
        let mut controller = controller();
        assert!(controller.state().results.is_empty());
        assert!(!controller.state().is_loading);

        assert!(controller.submit_search().is_none());
        assert_eq!(controller.state(), &SearchState::default());

        controller.update_query_text("love");
        let timer = controller.submit_search().unwrap();
        assert!(controller.state().is_loading);
        settle(&mut controller, timer).await;

        assert_eq!(controller.state().results, love_quotes());
        assert!(!controller.state().is_loading);
    }

    #[tokio::test(start_paused = true)]
    async fn test_configured_delays_are_used() {
        let delays = Delays {
            search_ms: 5,
            category_debounce_ms: 1,
            copied_flash_ms: 10,
        };
        let mut controller =
            Controller::new(QuoteStore::builtin().clone(), delays, RecordingClipboard::default());
        let started = tokio::time::Instant::now();
        let timer = controller.select_category("life");
        settle(&mut controller, timer).await;
        assert!(started.elapsed() < Duration::from_millis(100));

        let timer = controller.copy_quote("x", 0).unwrap();
        assert_eq!(timer.delay, Duration::from_millis(10));
    }
}
