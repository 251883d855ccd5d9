use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use vidblog::completion::{CompletionRequest, CompletionService};
use vidblog::{Result, VidblogError};

#[derive(Clone, Default)]
pub struct MockCompletion {
    pub replies: Arc<Mutex<VecDeque<Result<String>>>>,
    pub calls: Arc<Mutex<Vec<CompletionRequest>>>,
}

impl MockCompletion {
    pub fn new(replies: &[&str]) -> Self {
        let mock = Self::default();
        for reply in replies {
            mock.replies.lock().unwrap().push_back(Ok(reply.to_string()));
        }
        mock
    }

    pub fn then_fail(self, msg: &str) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(Err(VidblogError::Completion(msg.to_string())));
        self
    }
}

#[async_trait]
impl CompletionService for MockCompletion {
    async fn complete(&self, request: &CompletionRequest) -> Result<String> {
        self.calls.lock().unwrap().push(request.clone());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(VidblogError::Completion("mock exhausted".to_string())))
    }
}
