#![allow(dead_code)]

use async_trait::async_trait;
use haisha_interaction::{AgentError, AgentProvider, ChatMessage, CompletionAgent};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// What the scripted agent answers with.
#[derive(Clone)]
pub enum Script {
    Reply(String),
    Fail(AgentError),
}

/// Agent provider that records every call and answers from a script.
pub struct ScriptedProvider {
    script: Script,
    calls: Arc<AtomicUsize>,
    seen: Arc<Mutex<Vec<(String, Vec<ChatMessage>, f32)>>>,
}

impl ScriptedProvider {
    pub fn replying(text: &str) -> Arc<Self> {
        Arc::new(Self::new(Script::Reply(text.to_string())))
    }

    pub fn failing(err: AgentError) -> Arc<Self> {
        Arc::new(Self::new(Script::Fail(err)))
    }

    fn new(script: Script) -> Self {
        Self {
            script,
            calls: Arc::new(AtomicUsize::new(0)),
            seen: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Credential, messages and temperature of every completed call.
    pub fn seen(&self) -> Vec<(String, Vec<ChatMessage>, f32)> {
        self.seen.lock().unwrap().clone()
    }
}

impl AgentProvider for ScriptedProvider {
    fn agent_for(&self, credential: &str) -> Arc<dyn CompletionAgent> {
        Arc::new(ScriptedAgent {
            credential: credential.to_string(),
            script: self.script.clone(),
            calls: Arc::clone(&self.calls),
            seen: Arc::clone(&self.seen),
        })
    }
}

struct ScriptedAgent {
    credential: String,
    script: Script,
    calls: Arc<AtomicUsize>,
    seen: Arc<Mutex<Vec<(String, Vec<ChatMessage>, f32)>>>,
}

#[async_trait]
impl CompletionAgent for ScriptedAgent {
    async fn complete(
        &self,
        messages: &[ChatMessage],
        temperature: f32,
    ) -> Result<String, AgentError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen
            .lock()
            .unwrap()
            .push((self.credential.clone(), messages.to_vec(), temperature));
        match &self.script {
            Script::Reply(text) => Ok(text.clone()),
            Script::Fail(err) => Err(err.clone()),
        }
    }
}
