//! Scripted driver for testing actors without a model.

use async_trait::async_trait;
use scrivener_core::{GenerateRequest, GenerateResponse, Role};
use scrivener_error::{ModelsError, ModelsErrorKind, ScrivenerResult};
use scrivener_interface::ScrivenerDriver;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

type Responder = Arc<dyn Fn(&GenerateRequest) -> ScrivenerResult<String> + Send + Sync>;

/// How the mock answers.
#[derive(Clone)]
pub enum MockBehavior {
    /// Always return the given text
    Success(String),
    /// Return each text in turn, repeating the last one
    Sequence(Vec<String>),
    /// Always fail with the given error
    Error(ModelsErrorKind),
    /// Compute the reply from the request
    Respond(Responder),
}

/// Mock driver that records every request it receives.
pub struct MockDriver {
    behavior: MockBehavior,
    queue: Mutex<VecDeque<String>>,
    requests: Mutex<Vec<GenerateRequest>>,
}

impl MockDriver {
    fn with_behavior(behavior: MockBehavior) -> Arc<Self> {
        let queue = match &behavior {
            MockBehavior::Sequence(texts) => texts.iter().cloned().collect(),
            _ => VecDeque::new(),
        };
        Arc::new(Self {
            behavior,
            queue: Mutex::new(queue),
            requests: Mutex::new(Vec::new()),
        })
    }

    /// Mock that always answers with `text`.
    pub fn success(text: impl Into<String>) -> Arc<Self> {
        Self::with_behavior(MockBehavior::Success(text.into()))
    }

    /// Mock that answers with each text in order.
    pub fn sequence<I, S>(texts: I) -> Arc<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_behavior(MockBehavior::Sequence(
            texts.into_iter().map(Into::into).collect(),
        ))
    }

    /// Mock that always fails.
    pub fn error(kind: ModelsErrorKind) -> Arc<Self> {
        Self::with_behavior(MockBehavior::Error(kind))
    }

    /// Mock computing each reply from the request.
    pub fn respond(
        f: impl Fn(&GenerateRequest) -> ScrivenerResult<String> + Send + Sync + 'static,
    ) -> Arc<Self> {
        Self::with_behavior(MockBehavior::Respond(Arc::new(f)))
    }

    /// Requests received so far.
    pub fn requests(&self) -> Vec<GenerateRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Number of requests received.
    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// User prompt of the `index`-th request.
    pub fn user_prompt(&self, index: usize) -> String {
        self.requests()[index]
            .messages
            .iter()
            .find(|m| m.role == Role::User)
            .map(|m| m.content.clone())
            .unwrap_or_default()
    }
}

/// User prompt of a request.
pub fn prompt_of(request: &GenerateRequest) -> &str {
    request
        .messages
        .iter()
        .find(|m| m.role == Role::User)
        .map(|m| m.content.as_str())
        .unwrap_or_default()
}

#[async_trait]
impl ScrivenerDriver for MockDriver {
    async fn generate(&self, request: &GenerateRequest) -> ScrivenerResult<GenerateResponse> {
        self.requests.lock().unwrap().push(request.clone());

        let text = match &self.behavior {
            MockBehavior::Success(text) => text.clone(),
            MockBehavior::Sequence(texts) => {
                let mut queue = self.queue.lock().unwrap();
                if queue.len() > 1 {
                    queue.pop_front().unwrap()
                } else {
                    queue
                        .front()
                        .cloned()
                        .or_else(|| texts.last().cloned())
                        .unwrap_or_default()
                }
            }
            MockBehavior::Error(kind) => return Err(ModelsError::new(kind.clone()).into()),
            MockBehavior::Respond(f) => f(request)?,
        };

        Ok(GenerateResponse::from_text(text))
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}
