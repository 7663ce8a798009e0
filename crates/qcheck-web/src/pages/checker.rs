use leptos::prelude::*;
use web_sys::File;

use qcheck_core::CheckOutcome;

use crate::api;
use crate::components::results::{BulkResultsTable, SingleResultPanel};
use crate::submission::SubmissionState;

/// Single-question or bulk-file checking; an attached file selects the
/// bulk mode. The file is read from the input element at submit time.
#[component]
pub fn CheckerPage() -> impl IntoView {
    let (question, set_question) = signal(String::new());
    let (state, set_state) = signal(SubmissionState::Idle);
    let file_input: NodeRef<leptos::html::Input> = NodeRef::new();

    let selected_file = move || -> Option<File> {
        file_input
            .get_untracked()
            .and_then(|input| input.files())
            .and_then(|files| files.get(0))
    };

    let submit = move || {
        if state.get_untracked().is_submitting() {
            return;
        }
        set_state.set(SubmissionState::Submitting);

        let q = question.get_untracked();
        let file = selected_file();
        wasm_bindgen_futures::spawn_local(async move {
            match api::dispatch(&q, None, file).await {
                Ok(outcome) => set_state.set(SubmissionState::Completed(outcome)),
                Err(err) => set_state.set(SubmissionState::Failed(err.to_string())),
            }
        });
    };

    let clear = move |_| {
        set_question.set(String::new());
        set_state.set(SubmissionState::Idle);
        if let Some(input) = file_input.get_untracked() {
            input.set_value("");
        }
    };

    view! {
        <div class="page checker-page">
            <h2>"Check a Question"</h2>

            <div class="config-panel">
                <div class="form-group">
                    <label>"Enter a Question"</label>
                    <input
                        type="text"
                        placeholder="Type your question here..."
                        prop:value=question
                        on:input=move |ev| set_question.set(event_target_value(&ev))
                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                if selected_file().is_none() {
                                    submit();
                                }
                            }
                        }
                    />
                </div>

                <div class="form-divider">"OR"</div>

                <div class="form-group">
                    <label>"Upload File (.csv, .xlsx, .docx)"</label>
                    <input type="file" accept=".csv,.xlsx,.xls,.docx" node_ref=file_input />
                </div>

                <div class="button-group">
                    <button
                        class="run-btn"
                        disabled=move || state.get().is_submitting()
                        on:click=move |_| submit()
                    >
                        {move || if state.get().is_submitting() {
                            view! { <span class="loading"><span class="spinner"></span>" Analyzing..."</span> }.into_any()
                        } else {
                            view! { <span>"Submit"</span> }.into_any()
                        }}
                    </button>
                    <button class="clear-btn" on:click=clear>"Clear"</button>
                </div>
            </div>

            {move || match state.get() {
                SubmissionState::Failed(message) => Some(view! {
                    <div class="error-panel"><p>{message}</p></div>
                }.into_any()),
                SubmissionState::Completed(CheckOutcome::Bulk(rows)) => Some(view! {
                    <BulkResultsTable rows=rows />
                }.into_any()),
                SubmissionState::Completed(CheckOutcome::Single(result)) => Some(view! {
                    <SingleResultPanel result=result />
                }.into_any()),
                _ => None,
            }}
        </div>
    }
}
