/// Scripted appearance lookup
///
/// Answers from a fixed table keyed by the searched name and counts calls.
use async_trait::async_trait;
use planet_catalog::modules::planet::domain::AppearanceCandidate;
use planet_catalog::modules::planet::AppearanceLookup;
use planet_catalog::shared::{AppError, AppResult};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

#[derive(Default)]
pub struct ScriptedLookup {
    answers: Mutex<HashMap<String, AppResult<Vec<AppearanceCandidate>>>>,
    calls: AtomicUsize,
}

impl ScriptedLookup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `search(name)` with one candidate per `(candidate name, film count)` pair
    pub fn with_candidates(self, name: &str, candidates: &[(&str, usize)]) -> Self {
        let candidates = candidates
            .iter()
            .map(|(candidate, films)| {
                let films = (1..=*films)
                    .map(|i| format!("https://swapi.dev/api/films/{}/", i))
                    .collect();
                AppearanceCandidate::new(*candidate, films)
            })
            .collect();
        self.answers
            .lock()
            .unwrap()
            .insert(name.to_string(), Ok(candidates));
        self
    }

    /// Fail `search(name)` the way a timed-out HTTP call does
    pub fn failing(self, name: &str) -> Self {
        self.answers.lock().unwrap().insert(
            name.to_string(),
            Err(AppError::ExternalServiceError("Request timeout".to_string())),
        );
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AppearanceLookup for ScriptedLookup {
    async fn search(&self, name: &str) -> AppResult<Vec<AppearanceCandidate>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.answers
            .lock()
            .unwrap()
            .get(name)
            .cloned()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}
