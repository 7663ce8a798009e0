use qcheck_core::CheckOutcome;

/// Which remote operation a submission maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionKind {
    /// A file is attached: multipart upload to the bulk endpoint.
    BulkFile,
    /// No file, non-blank question: JSON body to the single endpoint.
    SingleQuestion,
    /// Nothing to send; rejected locally.
    Empty,
}

impl SubmissionKind {
    pub fn decide(question: &str, has_file: bool) -> Self {
        if has_file {
            SubmissionKind::BulkFile
        } else if question.trim().is_empty() {
            SubmissionKind::Empty
        } else {
            SubmissionKind::SingleQuestion
        }
    }
}

/// Lifecycle of one submission attempt. A page holds exactly one of these
/// in a signal; every transition replaces the whole value, so a result and
/// an error can never be on screen at the same time.
#[derive(Debug, Clone, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Completed(CheckOutcome),
    Failed(String),
}

impl SubmissionState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionState::Submitting)
    }

    /// True once a result or error is on screen.
    pub fn is_settled(&self) -> bool {
        matches!(
            self,
            SubmissionState::Completed(_) | SubmissionState::Failed(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qcheck_core::PredictionResult;

    #[test]
    fn an_attached_file_selects_bulk_mode() {
        assert_eq!(
            SubmissionKind::decide("what is tcp", true),
            SubmissionKind::BulkFile
        );
        assert_eq!(SubmissionKind::decide("", true), SubmissionKind::BulkFile);
    }

    #[test]
    fn question_text_alone_selects_single_mode() {
        assert_eq!(
            SubmissionKind::decide("what is tcp", false),
            SubmissionKind::SingleQuestion
        );
    }

    #[test]
    fn blank_input_is_rejected_locally() {
        assert_eq!(SubmissionKind::decide("", false), SubmissionKind::Empty);
        assert_eq!(SubmissionKind::decide("   ", false), SubmissionKind::Empty);
    }

    #[test]
    fn default_state_is_idle() {
        let state = SubmissionState::default();
        assert!(matches!(state, SubmissionState::Idle));
        assert!(!state.is_submitting());
        assert!(!state.is_settled());
    }

    #[test]
    fn submitting_is_not_settled() {
        let state = SubmissionState::Submitting;
        assert!(state.is_submitting());
        assert!(!state.is_settled());
    }

    #[test]
    fn results_and_errors_are_settled() {
        let result = PredictionResult {
            question: String::new(),
            similar_questions: true,
            same_topic: true,
            similar_question_name: "Q1".to_string(),
            predicted_topic: None,
            invalid_topic: None,
            marks: 5,
            weightage: 2,
        };
        assert!(SubmissionState::Completed(CheckOutcome::Single(result)).is_settled());
        assert!(SubmissionState::Failed("Server error.".to_string()).is_settled());
    }
}
