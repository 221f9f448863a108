//! Shared test helpers: scripted port implementations.
#![allow(dead_code)]

use async_trait::async_trait;
use marketscope::domain::entities::collected_data::Article;
use marketscope::domain::entities::query::Query;
use marketscope::domain::error::ProviderError;
use marketscope::domain::ports::completion::{CompletionProvider, CompletionRequest};
use marketscope::domain::ports::news_source::NewsSource;
use marketscope::domain::ports::translation::TranslationService;
use marketscope::domain::values::language::Language;
use marketscope::infrastructure::memory::report_repo::InMemoryReportRepo;
use marketscope::{MarketScope, Providers};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub fn setup() -> MarketScope {
    setup_with(Providers::offline())
}

pub fn setup_with(providers: Providers) -> MarketScope {
    MarketScope::with_providers(Arc::new(InMemoryReportRepo::new()), providers)
}

pub fn query(text: &str) -> Query {
    Query::new(text).unwrap()
}

pub fn article(title: &str, description: &str) -> Article {
    Article {
        title: title.to_string(),
        description: description.to_string(),
        source: "Test Wire".to_string(),
    }
}

/// Completion endpoint that always answers with the same result.
pub struct ScriptedCompletion {
    response: Result<String, ProviderError>,
    calls: AtomicUsize,
    last_request: Mutex<Option<CompletionRequest>>,
}

impl ScriptedCompletion {
    pub fn ok(content: &str) -> Arc<Self> {
        Arc::new(Self {
            response: Ok(content.to_string()),
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        })
    }

    pub fn failing(reason: &str) -> Arc<Self> {
        Arc::new(Self {
            response: Err(ProviderError::Transient(reason.to_string())),
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<CompletionRequest> {
        self.last_request.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionProvider for ScriptedCompletion {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<String, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some(request.clone());
        self.response.clone()
    }
}

pub struct ScriptedNews {
    result: Result<Vec<Article>, ProviderError>,
}

impl ScriptedNews {
    pub fn ok(articles: Vec<Article>) -> Arc<Self> {
        Arc::new(Self { result: Ok(articles) })
    }

    pub fn failing(reason: &str) -> Arc<Self> {
        Arc::new(Self {
            result: Err(ProviderError::Transient(reason.to_string())),
        })
    }
}

#[async_trait]
impl NewsSource for ScriptedNews {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn search(&self, _query: &Query) -> Result<Vec<Article>, ProviderError> {
        self.result.clone()
    }
}

/// A news source with a bug: it panics instead of returning an error.
pub struct PanickingNews;

#[async_trait]
impl NewsSource for PanickingNews {
    fn name(&self) -> &str {
        "panicking"
    }

    async fn search(&self, _query: &Query) -> Result<Vec<Article>, ProviderError> {
        panic!("news source exploded");
    }
}

/// Translation service backed by a phrase map. Unknown texts come back
/// unchanged; texts in `failing` raise a per-text error.
#[derive(Default)]
pub struct MapTranslation {
    phrases: HashMap<String, String>,
    failing: HashSet<String>,
}

impl MapTranslation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn translates(mut self, from: &str, to: &str) -> Self {
        self.phrases.insert(from.to_string(), to.to_string());
        self
    }

    pub fn fails_on(mut self, text: &str) -> Self {
        self.failing.insert(text.to_string());
        self
    }
}

#[async_trait]
impl TranslationService for MapTranslation {
    fn name(&self) -> &str {
        "map"
    }

    async fn translate(&self, text: &str, _target: Language) -> Result<String, ProviderError> {
        if self.failing.contains(text) {
            return Err(ProviderError::Transient(format!("cannot translate '{text}'")));
        }
        Ok(self.phrases.get(text).cloned().unwrap_or_else(|| text.to_string()))
    }
}

/// Translation service that is always unreachable. Counts calls.
#[derive(Default)]
pub struct UnreachableTranslation {
    calls: AtomicUsize,
}

impl UnreachableTranslation {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TranslationService for UnreachableTranslation {
    fn name(&self) -> &str {
        "unreachable"
    }

    async fn translate(&self, _text: &str, _target: Language) -> Result<String, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(ProviderError::TranslationUnavailable("connection timed out".into()))
    }
}
