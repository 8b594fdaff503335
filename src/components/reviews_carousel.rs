/// Two review cards side by side with circular prev/next controls.
use leptos::*;

use crate::components::review_card::ReviewCard;
use crate::models::review::Review;

#[component]
pub fn ReviewsCarousel(
    /// Visible cards as (list index, review).
    #[prop(into)] slots: Signal<Vec<(usize, Review)>>,
    #[prop(into)] show_navigation: Signal<bool>,
    #[prop(into)] on_prev: Callback<()>,
    #[prop(into)] on_next: Callback<()>,
    #[prop(into)] on_delete: Callback<usize>,
) -> impl IntoView {
    view! {
        <div class="mt-4 d-flex justify-content-between align-items-center">
            <Show when=move || show_navigation.get()>
                <button class="btn btn-outline-secondary rounded-circle" on:click=move |_| on_prev.call(())>
                    { "<" }
                </button>
            </Show>

            <div class="d-flex gap-3">
                {move || {
                    slots
                        .get()
                        .into_iter()
                        .map(|(index, review)| view! {
                            <ReviewCard review=review index=index on_delete=on_delete />
                        })
                        .collect_view()
                }}
            </div>

            <Show when=move || show_navigation.get()>
                <button class="btn btn-outline-secondary rounded-circle" on:click=move |_| on_next.call(())>
                    { ">" }
                </button>
            </Show>
        </div>
    }
}
