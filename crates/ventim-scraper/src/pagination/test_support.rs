use std::collections::VecDeque;
use std::sync::Mutex;

use serde_json::Value;

use crate::error::ScraperError;
use crate::transport::{HtmlResponse, JsonResponse, Query, Transport};

pub(crate) enum Scripted {
    Json(Value),
    Html(String),
    Status(u16),
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RecordedCall {
    pub endpoint: String,
    pub query: Vec<(String, String)>,
}

impl RecordedCall {
    pub fn param(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Replays scripted responses in order and records every fetch.
pub(crate) struct ScriptedTransport {
    responses: Mutex<VecDeque<Scripted>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedTransport {
    pub fn new(responses: impl IntoIterator<Item = Scripted>) -> Self {
        Self {
            responses: Mutex::new(responses.into_iter().collect()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn fetch_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn next(&self, endpoint: &str, query: &Query) -> Result<Scripted, ScraperError> {
        self.calls.lock().unwrap().push(RecordedCall {
            endpoint: endpoint.to_owned(),
            query: query.to_vec(),
        });
        let response = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("script exhausted: unexpected extra fetch");
        match response {
            Scripted::Status(status) => Err(ScraperError::UnexpectedStatus {
                status,
                reason: "scripted".to_owned(),
                url: endpoint.to_owned(),
            }),
            other => Ok(other),
        }
    }
}

impl Transport for ScriptedTransport {
    async fn fetch_json(
        &self,
        endpoint: &str,
        query: &Query,
    ) -> Result<JsonResponse, ScraperError> {
        match self.next(endpoint, query)? {
            Scripted::Json(body) => Ok(JsonResponse {
                status: 200,
                reason: "OK".to_owned(),
                body,
            }),
            _ => panic!("scripted a non-JSON response for a JSON fetch"),
        }
    }

    async fn fetch_html(
        &self,
        endpoint: &str,
        query: &Query,
    ) -> Result<HtmlResponse, ScraperError> {
        match self.next(endpoint, query)? {
            Scripted::Html(body) => Ok(HtmlResponse {
                status: 200,
                reason: "OK".to_owned(),
                body,
            }),
            _ => panic!("scripted a non-HTML response for an HTML fetch"),
        }
    }
}
