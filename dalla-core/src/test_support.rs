//! Deterministic test doubles for the embedding gateway.
//!
//! Enabled behind the `test-support` feature so downstream crates can
//! exercise ranking end to end without a live embedding model.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::{Embedding, EmbeddingError, EmbeddingGateway};

/// Gateway that answers from a fixed text-to-vector table.
///
/// Unknown text yields [`EmbeddingError::Unavailable`], which mirrors how a
/// remote model behaves when it cannot serve a request. Every request is
/// recorded so tests can assert on call patterns.
///
/// # Examples
/// ```
/// use dalla_core::test_support::StaticGateway;
/// use dalla_core::EmbeddingGateway;
///
/// let gateway = StaticGateway::new([("beach", vec![1.0, 0.0])]);
/// assert_eq!(gateway.embed("beach").unwrap(), vec![1.0, 0.0]);
/// assert!(gateway.embed("unknown").is_err());
/// ```
#[derive(Debug, Default)]
pub struct StaticGateway {
    table: HashMap<String, Embedding>,
    requests: Mutex<Vec<String>>,
}

impl StaticGateway {
    /// Build a gateway from `(text, vector)` pairs.
    #[must_use]
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, Embedding)>,
        S: Into<String>,
    {
        Self {
            table: entries
                .into_iter()
                .map(|(text, vector)| (text.into(), vector))
                .collect(),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Texts embedded so far, in request order.
    #[must_use]
    pub fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }
}

impl EmbeddingGateway for StaticGateway {
    fn embed(&self, text: &str) -> Result<Embedding, EmbeddingError> {
        self.requests
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push(text.to_owned());
        self.table
            .get(text)
            .cloned()
            .ok_or_else(|| EmbeddingError::Unavailable {
                reason: format!("no static embedding registered for '{text}'"),
            })
    }
}

/// Gateway that fails every request, for exercising error paths.
#[derive(Debug, Default, Clone, Copy)]
pub struct FailingGateway;

impl EmbeddingGateway for FailingGateway {
    fn embed(&self, _text: &str) -> Result<Embedding, EmbeddingError> {
        Err(EmbeddingError::Unavailable {
            reason: "gateway configured to fail".to_owned(),
        })
    }
}
