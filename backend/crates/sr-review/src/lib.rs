pub mod aggregator;
pub mod assignment;
pub mod error;
pub mod feedback;

pub use aggregator::{SnippetWithFeedback, SubmissionAggregator};
pub use assignment::ReviewAssignmentEngine;
pub use error::{ReviewError, Result};
pub use feedback::FeedbackService;
