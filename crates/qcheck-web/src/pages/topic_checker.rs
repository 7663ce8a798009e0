use leptos::prelude::*;

use qcheck_core::CheckOutcome;

use crate::api;
use crate::components::results::{BulkResultsTable, TopicResultPanel};
use crate::submission::SubmissionState;

/// Single-question checking against a topic chosen from the service's list.
#[component]
pub fn TopicCheckerPage() -> impl IntoView {
    let (question, set_question) = signal(String::new());
    let (topic, set_topic) = signal(String::new());
    let (topics, set_topics) = signal(Vec::<String>::new());
    let (state, set_state) = signal(SubmissionState::Idle);

    // One-time topic fetch; a failure leaves the selector empty.
    Effect::new(move || {
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_topics().await {
                Ok(list) => set_topics.set(list),
                Err(err) => leptos::logging::error!("Failed to load topics: {err}"),
            }
        });
    });

    let is_incomplete =
        move || question.get().trim().is_empty() || topic.get().trim().is_empty();

    let submit = move |_| {
        if state.get_untracked().is_submitting() {
            return;
        }
        set_state.set(SubmissionState::Submitting);

        let q = question.get_untracked();
        let t = topic.get_untracked();
        wasm_bindgen_futures::spawn_local(async move {
            match api::dispatch(&q, Some(&t), None).await {
                Ok(outcome) => set_state.set(SubmissionState::Completed(outcome)),
                Err(err) => set_state.set(SubmissionState::Failed(err.to_string())),
            }
        });
    };

    let clear = move |_| {
        set_question.set(String::new());
        set_topic.set(String::new());
        set_state.set(SubmissionState::Idle);
    };

    view! {
        <div class="page topic-page">
            <h2>"Check Against a Topic"</h2>

            <div class="config-panel">
                <div class="form-group">
                    <label>"Enter Question"</label>
                    <input
                        type="text"
                        placeholder="e.g., What is TCP/IP?"
                        prop:value=question
                        on:input=move |ev| set_question.set(event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label>"Select Topic"</label>
                    <select
                        prop:value=topic
                        on:change=move |ev| set_topic.set(event_target_value(&ev))
                    >
                        <option value="">"Select Topic"</option>
                        {move || topics.get().into_iter().map(|name| {
                            let value = name.clone();
                            view! { <option value=value>{name}</option> }
                        }).collect::<Vec<_>>()}
                    </select>
                </div>

                <div class="button-group">
                    <button
                        class="run-btn"
                        disabled=move || is_incomplete() || state.get().is_submitting()
                        on:click=submit
                    >
                        {move || if state.get().is_submitting() {
                            view! { <span class="loading"><span class="spinner"></span>" Analyzing..."</span> }.into_any()
                        } else {
                            view! { <span>"Submit"</span> }.into_any()
                        }}
                    </button>
                    {move || state.get().is_settled().then(|| view! {
                        <button class="clear-btn" on:click=clear>"Remove Result"</button>
                    })}
                </div>
            </div>

            {move || match state.get() {
                SubmissionState::Failed(message) => Some(view! {
                    <div class="error-panel"><p>{message}</p></div>
                }.into_any()),
                SubmissionState::Completed(CheckOutcome::Single(result)) => Some(view! {
                    <TopicResultPanel result=result />
                }.into_any()),
                SubmissionState::Completed(CheckOutcome::Bulk(rows)) => Some(view! {
                    <BulkResultsTable rows=rows />
                }.into_any()),
                _ => None,
            }}
        </div>
    }
}
