use leptos::prelude::*;

/// ISO dates compare as strings; an empty bound counts as open.
pub fn is_ordered_range(start: &str, end: &str) -> bool {
    start.is_empty() || end.is_empty() || start <= end
}

/// Pair of native date pickers bound to `yyyy-mm-dd` strings
#[component]
pub fn DateRangeInputs(start: RwSignal<String>, end: RwSignal<String>) -> impl IntoView {
    let invalid = move || !is_ordered_range(&start.get(), &end.get());

    view! {
        <div class="date-range">
            <input
                type="date"
                class="date-range__input"
                prop:value=move || start.get()
                on:input=move |ev| start.set(event_target_value(&ev))
            />
            <span class="date-range__sep">"至"</span>
            <input
                type="date"
                class="date-range__input"
                class:date-range__input--invalid=invalid
                prop:value=move || end.get()
                on:input=move |ev| end.set(event_target_value(&ev))
            />
        </div>
    }
}
