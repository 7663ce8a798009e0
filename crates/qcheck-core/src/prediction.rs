use serde::{Deserialize, Serialize};

/// JSON body for a single-question check. A `None` topic is omitted from
/// the serialized body entirely.
#[derive(Debug, Clone, Serialize)]
pub struct CheckRequest {
    pub question: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
}

/// The service's verdict on one question. Field names follow the wire
/// format; `question` and `predicted_topic` only appear in bulk responses,
/// `invalid_topic` only when a topic was submitted alongside the question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    #[serde(default)]
    pub question: String,
    pub similar_questions: bool,
    pub same_topic: bool,
    pub similar_question_name: String,
    #[serde(default)]
    pub predicted_topic: Option<String>,
    #[serde(default)]
    pub invalid_topic: Option<bool>,
    pub marks: u32,
    pub weightage: u32,
}

/// A check response is either one verdict or an ordered batch of them.
/// Decoded once at the API boundary so rendering can match on the variant
/// instead of inspecting JSON shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CheckOutcome {
    Bulk(Vec<PredictionResult>),
    Single(PredictionResult),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_object_decodes_with_absent_optionals() {
        let raw = r#"{
            "similar_questions": true,
            "same_topic": false,
            "similar_question_name": "Q1",
            "marks": 5,
            "weightage": 2
        }"#;
        let outcome: CheckOutcome = serde_json::from_str(raw).unwrap();
        match outcome {
            CheckOutcome::Single(result) => {
                assert!(result.similar_questions);
                assert!(!result.same_topic);
                assert_eq!(result.similar_question_name, "Q1");
                assert_eq!(result.marks, 5);
                assert_eq!(result.weightage, 2);
                assert_eq!(result.question, "");
                assert_eq!(result.predicted_topic, None);
                assert_eq!(result.invalid_topic, None);
            }
            CheckOutcome::Bulk(_) => panic!("expected a single result"),
        }
    }

    #[test]
    fn topic_response_carries_the_invalid_flag() {
        let raw = r#"{
            "similar_questions": false,
            "same_topic": false,
            "similar_question_name": "",
            "invalid_topic": true,
            "marks": 0,
            "weightage": 0
        }"#;
        let outcome: CheckOutcome = serde_json::from_str(raw).unwrap();
        let CheckOutcome::Single(result) = outcome else {
            panic!("expected a single result");
        };
        assert_eq!(result.invalid_topic, Some(true));
    }

    #[test]
    fn bulk_array_decodes_in_input_order() {
        let raw = r#"[
            {
                "question": "What is TCP?",
                "similar_questions": true,
                "same_topic": true,
                "similar_question_name": "Explain TCP",
                "predicted_topic": "Networks",
                "marks": 5,
                "weightage": 2
            },
            {
                "question": "Define a stack.",
                "similar_questions": false,
                "same_topic": false,
                "similar_question_name": "",
                "predicted_topic": "Data Structures",
                "marks": 2,
                "weightage": 1
            }
        ]"#;
        let outcome: CheckOutcome = serde_json::from_str(raw).unwrap();
        let CheckOutcome::Bulk(rows) = outcome else {
            panic!("expected a bulk result");
        };
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].question, "What is TCP?");
        assert_eq!(rows[0].predicted_topic.as_deref(), Some("Networks"));
        assert_eq!(rows[1].question, "Define a stack.");
        assert!(!rows[1].similar_questions);
    }

    #[test]
    fn empty_array_is_an_empty_bulk_result() {
        let outcome: CheckOutcome = serde_json::from_str("[]").unwrap();
        assert_eq!(outcome, CheckOutcome::Bulk(Vec::new()));
    }

    #[test]
    fn topic_is_omitted_from_a_topicless_request() {
        let body = serde_json::to_value(CheckRequest {
            question: "What is TCP/IP?".to_string(),
            topic: None,
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({ "question": "What is TCP/IP?" }));
    }

    #[test]
    fn chosen_topic_is_sent_alongside_the_question() {
        let body = serde_json::to_value(CheckRequest {
            question: "What is TCP/IP?".to_string(),
            topic: Some("Networks".to_string()),
        })
        .unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "question": "What is TCP/IP?", "topic": "Networks" })
        );
    }
}
