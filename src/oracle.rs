//! The prediction oracle seam.
//!
//! The vision-language model that actually identifies objects lives outside
//! this crate; evaluation only needs something that can turn an item id
//! into a [`PredictionOutput`]. Production callers wrap their model client
//! in this trait; tests use [`MockOracle`].

use std::collections::HashMap;

use crate::error::Result;
use crate::schema::PredictionOutput;

/// An opaque prediction source.
///
/// Implementations resolve the item id to an image and run identification
/// however they like; the evaluator only sees the structured result. Errors
/// (model failure, timeout, missing image) are recorded on the per-item
/// result and never abort a corpus run.
pub trait Oracle: Send + Sync {
    /// Produce a prediction for the item with the given id.
    fn predict(&self, item_id: &str) -> Result<PredictionOutput>;

    /// Identifier for logs and reports.
    fn name(&self) -> &'static str {
        "unknown"
    }
}

/// A canned-answer oracle for tests and replayed evaluation runs.
///
/// Returns the registered prediction for an id and an oracle error for any
/// unregistered id, which doubles as a stand-in for a failing model call.
///
/// # Example
///
/// ```
/// use curio::{MockOracle, Oracle, PredictionOutput};
///
/// let oracle = MockOracle::new().with_prediction(
///     "eames-lounge",
///     PredictionOutput { name: "Eames Lounge Chair".into(), ..Default::default() },
/// );
/// assert!(oracle.predict("eames-lounge").is_ok());
/// assert!(oracle.predict("unseen-item").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockOracle {
    predictions: HashMap<String, PredictionOutput>,
}

impl MockOracle {
    /// Create an empty mock oracle (every call fails).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a prediction for an item id.
    #[must_use]
    pub fn with_prediction(mut self, item_id: impl Into<String>, prediction: PredictionOutput) -> Self {
        self.predictions.insert(item_id.into(), prediction);
        self
    }
}

impl Oracle for MockOracle {
    fn predict(&self, item_id: &str) -> Result<PredictionOutput> {
        self.predictions
            .get(item_id)
            .cloned()
            .ok_or_else(|| crate::error::Error::oracle(format!("no prediction for '{item_id}'")))
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}
