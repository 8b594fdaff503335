use leptos::*;

use crate::config::RatingStyle;
use crate::models::review::rating_from_input;

/// Rating capture for the review form. The number box and the star row both
/// report a value in [1, 5]; the rest of the widget does not care which is used.
#[component]
pub fn RatingInput(
    style: RatingStyle,
    #[prop(into)] value: Signal<f64>,
    #[prop(into)] on_change: Callback<f64>,
) -> impl IntoView {
    match style {
        RatingStyle::Number => view! {
            <input
                type="number"
                class="form-control my-2"
                min="1"
                max="5"
                prop:value=move || value.get().to_string()
                on:input=move |e| {
                    if let Some(rating) = rating_from_input(&event_target_value(&e)) {
                        on_change.call(rating);
                    }
                }
            />
        }
        .into_view(),
        RatingStyle::Stars => view! {
            <div class="my-2">
                {(1..=5u8)
                    .map(|star| {
                        let star = f64::from(star);
                        let class = move || {
                            if value.get() >= star {
                                "btn btn-link p-0 text-warning"
                            } else {
                                "btn btn-link p-0 text-secondary"
                            }
                        };
                        view! {
                            <button
                                type="button"
                                class=class
                                on:click=move |_| on_change.call(star)
                            >
                                { "★" }
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        }
        .into_view(),
    }
}
