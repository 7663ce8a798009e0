use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"Question Similarity Checker"</h1>
            <span class="subtitle">"Similarity, topic and marks prediction"</span>
        </header>
    }
}
