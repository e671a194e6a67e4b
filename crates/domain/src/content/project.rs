use serde::{Deserialize, Serialize};

/// A showcased project: what was wrong, what was used, what changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub problem: String,
    pub stack: Vec<String>,
    pub impact: String,
    /// External repository URL.
    pub repository: String,
}

impl Project {
    /// Stack labels joined for a one-line display.
    #[must_use]
    pub fn stack_line(&self) -> String {
        self.stack.join(" · ")
    }
}
