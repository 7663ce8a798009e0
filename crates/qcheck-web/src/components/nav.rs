use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NavTabs() -> impl IntoView {
    view! {
        <nav class="nav-tabs">
            <A href="/" attr:class="nav-tab">"Checker"</A>
            <A href="/topic" attr:class="nav-tab">"Topic Match"</A>
        </nav>
    }
}
