use leptos::prelude::*;

pub fn yes_no_label(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

/// Boolean wire fields render as a visually distinct yes/no pill.
#[component]
pub fn YesNoBadge(value: bool) -> impl IntoView {
    view! {
        <span class=if value { "badge badge-yes" } else { "badge badge-no" }>
            {yes_no_label(value)}
        </span>
    }
}
