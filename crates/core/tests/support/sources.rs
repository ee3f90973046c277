//! In-memory `RecordSource` implementations

use std::sync::Arc;

use async_trait::async_trait;
use kanban_core::RecordSource;
use kanban_domain::{KanbanError, Result as DomainResult, SheetResponse};
use parking_lot::Mutex;
use tokio::sync::Notify;

/// Shared, ordered log of worksheet names as fetches start
pub type FetchLog = Arc<Mutex<Vec<String>>>;

pub fn fetch_log() -> FetchLog {
    Arc::new(Mutex::new(Vec::new()))
}

#[derive(Clone)]
enum Reply<T> {
    Records(Vec<T>),
    Unsuccessful(Option<String>),
    Error(KanbanError),
}

/// Source returning a canned reply, optionally held open until released.
pub struct MockSource<T> {
    reply: Reply<T>,
    gate: Option<Arc<Notify>>,
    log: Option<FetchLog>,
}

impl<T> MockSource<T> {
    pub fn records(records: Vec<T>) -> Self {
        Self { reply: Reply::Records(records), gate: None, log: None }
    }

    /// Reply `{ success: false }`, with or without an error message
    pub fn unsuccessful(error: Option<&str>) -> Self {
        Self { reply: Reply::Unsuccessful(error.map(str::to_string)), gate: None, log: None }
    }

    pub fn failing(error: KanbanError) -> Self {
        Self { reply: Reply::Error(error), gate: None, log: None }
    }

    /// Block every fetch until `gate` is notified.
    pub fn gated(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    /// Record the worksheet name when a fetch starts.
    pub fn logged(mut self, log: FetchLog) -> Self {
        self.log = Some(log);
        self
    }
}

#[async_trait]
impl<T: Clone + Send + Sync> RecordSource<T> for MockSource<T> {
    async fn fetch(&self, worksheet: &str) -> DomainResult<SheetResponse<T>> {
        if let Some(log) = &self.log {
            log.lock().push(worksheet.to_string());
        }
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        match &self.reply {
            Reply::Records(records) => Ok(SheetResponse::ok(records.clone())),
            Reply::Unsuccessful(error) => Ok(SheetResponse {
                success: false,
                data: Vec::new(),
                error: error.clone(),
            }),
            Reply::Error(error) => Err(error.clone()),
        }
    }
}
