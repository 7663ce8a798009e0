//! HTTP layer for the question-checking service.
//!
//! All requests go to a fixed local address and carry an abort timeout so a
//! stuck request cannot leave the page in the loading state forever.

use std::cell::Cell;
use std::rc::Rc;

use gloo_net::http::{Request, Response};
use leptos::logging;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{AbortController, AbortSignal, File, FormData};

use qcheck_core::{CheckError, CheckOutcome, CheckRequest, Result};

use crate::submission::SubmissionKind;

const DEFAULT_API_BASE: &str = "http://localhost:5000";

/// A request that produced no response within this window is aborted.
const REQUEST_TIMEOUT_MS: i32 = 30_000;

fn endpoint(path: &str) -> String {
    let base = option_env!("QCHECK_API_BASE").unwrap_or(DEFAULT_API_BASE);
    format!("{}{}", base, path)
}

/// Decide the remote operation for one submission: bulk upload when a file
/// is attached, single check when the question is non-blank, otherwise a
/// local validation failure with no network call.
pub async fn dispatch(
    question: &str,
    topic: Option<&str>,
    file: Option<File>,
) -> Result<CheckOutcome> {
    match SubmissionKind::decide(question, file.is_some()) {
        SubmissionKind::BulkFile => {
            // decide() only reports BulkFile when a file is attached
            let Some(file) = file else {
                return Err(CheckError::EmptySubmission);
            };
            check_file(&file).await
        }
        SubmissionKind::SingleQuestion => check_question(question.trim(), topic).await,
        SubmissionKind::Empty => Err(CheckError::EmptySubmission),
    }
}

/// One-time `GET /topics` for the selector on the topic page.
pub async fn fetch_topics() -> Result<Vec<String>> {
    let response = send_with_timeout(|signal| {
        Request::get(&endpoint("/topics"))
            .abort_signal(signal.as_ref())
            .build()
    })
    .await?;

    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        return Err(CheckError::rejected_from_body(&body));
    }
    response.json().await.map_err(decode_failed)
}

/// `POST /check_question` with a JSON body.
pub async fn check_question(question: &str, topic: Option<&str>) -> Result<CheckOutcome> {
    let body = CheckRequest {
        question: question.to_string(),
        topic: topic.map(str::to_string),
    };

    let response = send_with_timeout(|signal| {
        Request::post(&endpoint("/check_question"))
            .abort_signal(signal.as_ref())
            .json(&body)
    })
    .await?;
    read_outcome(response).await
}

/// `POST /check_file` with a multipart body carrying the selected file.
pub async fn check_file(file: &File) -> Result<CheckOutcome> {
    let form = FormData::new().map_err(|err| {
        logging::error!("failed to build multipart body: {err:?}");
        CheckError::Transport
    })?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|err| {
            logging::error!("failed to attach file to multipart body: {err:?}");
            CheckError::Transport
        })?;

    let response = send_with_timeout(move |signal| {
        Request::post(&endpoint("/check_file"))
            .abort_signal(signal.as_ref())
            .body(form)
    })
    .await?;
    read_outcome(response).await
}

async fn read_outcome(response: Response) -> Result<CheckOutcome> {
    if response.ok() {
        response.json().await.map_err(decode_failed)
    } else {
        let body = response.text().await.unwrap_or_default();
        Err(CheckError::rejected_from_body(&body))
    }
}

async fn send_with_timeout<F>(build: F) -> Result<Response>
where
    F: FnOnce(Option<AbortSignal>) -> std::result::Result<Request, gloo_net::Error>,
{
    let timeout = RequestTimeout::arm();
    let request = match build(timeout.signal()) {
        Ok(request) => request,
        Err(err) => {
            timeout.finish();
            return Err(request_failed(err));
        }
    };

    match request.send().await {
        Ok(response) => {
            timeout.finish();
            Ok(response)
        }
        Err(err) => {
            if timeout.finish() {
                Err(CheckError::Timeout)
            } else {
                Err(request_failed(err))
            }
        }
    }
}

/// An armed browser timer that aborts the associated fetch when it fires.
struct RequestTimeout {
    controller: Option<AbortController>,
    timer: Option<i32>,
    fired: Rc<Cell<bool>>,
}

impl RequestTimeout {
    fn arm() -> Self {
        let fired = Rc::new(Cell::new(false));
        let controller = AbortController::new().ok();
        let timer = controller.as_ref().and_then(|controller| {
            let controller = controller.clone();
            let fired = fired.clone();
            let abort = Closure::once_into_js(move || {
                fired.set(true);
                controller.abort();
            });
            web_sys::window()?
                .set_timeout_with_callback_and_timeout_and_arguments_0(
                    abort.unchecked_ref(),
                    REQUEST_TIMEOUT_MS,
                )
                .ok()
        });
        Self {
            controller,
            timer,
            fired,
        }
    }

    fn signal(&self) -> Option<AbortSignal> {
        self.controller.as_ref().map(|controller| controller.signal())
    }

    /// Disarm the timer; reports whether it had already fired.
    fn finish(self) -> bool {
        if let (Some(window), Some(timer)) = (web_sys::window(), self.timer) {
            window.clear_timeout_with_handle(timer);
        }
        self.fired.get()
    }
}

fn request_failed(err: gloo_net::Error) -> CheckError {
    logging::error!("request failed: {err}");
    CheckError::Transport
}

fn decode_failed(err: gloo_net::Error) -> CheckError {
    logging::error!("unexpected response body: {err}");
    CheckError::Transport
}
