#![cfg(target_arch = "wasm32")]

use qcheck_core::CheckError;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
async fn blank_submission_fails_locally() {
    let err = qcheck_web::api::dispatch("   ", None, None)
        .await
        .expect_err("blank input must be rejected before any request is built");
    assert!(matches!(err, CheckError::EmptySubmission));
    assert_eq!(err.to_string(), "Please enter a question or upload a file.");
}
