#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use anyhow::Result;
use llm::{
    chat::{ChatMessage, ChatProvider, ChatResponse, Tool},
    error::LLMError,
};
use tagsmith::form::StatePersistence;

/// In-memory persistence backend for store and session tests.
#[derive(Default)]
pub(crate) struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries
            .lock()
            .expect("MemoryStore mutex poisoned")
            .contains_key(key)
    }

    pub fn put(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .expect("MemoryStore mutex poisoned")
            .insert(key.to_owned(), value.to_owned());
    }
}

impl StatePersistence for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self
            .entries
            .lock()
            .expect("MemoryStore mutex poisoned")
            .get(key)
            .cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        self.put(key, value);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries
            .lock()
            .expect("MemoryStore mutex poisoned")
            .remove(key);
        Ok(())
    }
}

/// Backend whose every operation fails, for degraded-persistence tests.
pub(crate) struct FailingStore;

impl StatePersistence for FailingStore {
    fn load(&self, _key: &str) -> Result<Option<String>> {
        Err(anyhow::anyhow!("backend unavailable"))
    }

    fn save(&self, _key: &str, _value: &str) -> Result<()> {
        Err(anyhow::anyhow!("backend unavailable"))
    }

    fn remove(&self, _key: &str) -> Result<()> {
        Err(anyhow::anyhow!("backend unavailable"))
    }
}

#[derive(Debug)]
struct StringResponse(String);

impl ChatResponse for StringResponse {
    fn text(&self) -> Option<String> {
        Some(self.0.clone())
    }

    fn tool_calls(&self) -> Option<Vec<llm::ToolCall>> {
        panic!()
    }

    fn thinking(&self) -> Option<String> {
        None
    }

    fn usage(&self) -> Option<llm::chat::Usage> {
        None
    }
}

impl std::fmt::Display for StringResponse {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// Provider answering every chat with a canned response.
pub(crate) struct StubLlmProvider {
    response_content: String,
}

impl StubLlmProvider {
    pub fn new(response_content: String) -> Self {
        StubLlmProvider { response_content }
    }
}

impl ChatProvider for StubLlmProvider {
    fn chat<'life0, 'life1, 'async_trait>(
        &'life0 self,
        _messages: &'life1 [ChatMessage],
    ) -> ::core::pin::Pin<
        Box<
            dyn ::core::future::Future<Output = Result<Box<dyn ChatResponse>, LLMError>>
                + ::core::marker::Send
                + 'async_trait,
        >,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        let content = self.response_content.clone();
        Box::pin(async move { Ok(Box::new(StringResponse(content)) as Box<dyn ChatResponse>) })
    }

    fn chat_with_tools<'life0, 'life1, 'life2, 'async_trait>(
        &'life0 self,
        _messages: &'life1 [ChatMessage],
        _tools: Option<&'life2 [Tool]>,
    ) -> ::core::pin::Pin<
        Box<
            dyn ::core::future::Future<Output = Result<Box<dyn ChatResponse>, LLMError>>
                + ::core::marker::Send
                + 'async_trait,
        >,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        'life2: 'async_trait,
        Self: 'async_trait,
    {
        panic!()
    }
}

/// Provider failing every chat, for error-normalization tests.
pub(crate) struct FailingLlmProvider;

impl ChatProvider for FailingLlmProvider {
    fn chat<'life0, 'life1, 'async_trait>(
        &'life0 self,
        _messages: &'life1 [ChatMessage],
    ) -> ::core::pin::Pin<
        Box<
            dyn ::core::future::Future<Output = Result<Box<dyn ChatResponse>, LLMError>>
                + ::core::marker::Send
                + 'async_trait,
        >,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move { Err(LLMError::Generic("provider exploded".to_string())) })
    }

    fn chat_with_tools<'life0, 'life1, 'life2, 'async_trait>(
        &'life0 self,
        _messages: &'life1 [ChatMessage],
        _tools: Option<&'life2 [Tool]>,
    ) -> ::core::pin::Pin<
        Box<
            dyn ::core::future::Future<Output = Result<Box<dyn ChatResponse>, LLMError>>
                + ::core::marker::Send
                + 'async_trait,
        >,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        'life2: 'async_trait,
        Self: 'async_trait,
    {
        panic!()
    }
}
