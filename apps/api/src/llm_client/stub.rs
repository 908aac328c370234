//! In-process `GenerationProvider` for tests. Replays canned responses and
//! records every call it receives.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use crate::llm_client::{Document, GenerationProvider, LlmError};

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub system: String,
    pub prompt: String,
    pub media_type: Option<String>,
    pub document_len: usize,
    pub schema: Value,
}

pub enum StubReply {
    Text(String),
    Fail(u16, String),
}

#[derive(Default)]
pub struct StubProvider {
    replies: Mutex<VecDeque<StubReply>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl StubProvider {
    pub fn replying(text: impl Into<String>) -> Self {
        let stub = Self::default();
        stub.push(StubReply::Text(text.into()));
        stub
    }

    pub fn failing(status: u16, message: &str) -> Self {
        let stub = Self::default();
        stub.push(StubReply::Fail(status, message.to_string()));
        stub
    }

    pub fn push(&self, reply: StubReply) {
        self.replies.lock().unwrap().push_back(reply);
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    fn answer(&self, call: RecordedCall) -> Result<String, LlmError> {
        self.calls.lock().unwrap().push(call);
        match self.replies.lock().unwrap().pop_front() {
            Some(StubReply::Text(text)) => Ok(text),
            Some(StubReply::Fail(status, message)) => Err(LlmError::Api { status, message }),
            None => Err(LlmError::EmptyContent),
        }
    }
}

#[async_trait]
impl GenerationProvider for StubProvider {
    async fn generate_structured(
        &self,
        system: &str,
        prompt: &str,
        schema: &Value,
    ) -> Result<String, LlmError> {
        self.answer(RecordedCall {
            system: system.to_string(),
            prompt: prompt.to_string(),
            media_type: None,
            document_len: 0,
            schema: schema.clone(),
        })
    }

    async fn extract_structured(
        &self,
        system: &str,
        prompt: &str,
        document: Document<'_>,
        schema: &Value,
    ) -> Result<String, LlmError> {
        self.answer(RecordedCall {
            system: system.to_string(),
            prompt: prompt.to_string(),
            media_type: Some(document.media_type.to_string()),
            document_len: document.bytes.len(),
            schema: schema.clone(),
        })
    }

    fn name(&self) -> &str {
        "stub"
    }
}
