use leptos::*;

use crate::board::DraftEdit;
use crate::components::rating_input::RatingInput;
use crate::config::RatingStyle;
use crate::models::review::DraftReview;
use crate::validation::FieldErrors;

#[component]
pub fn ReviewForm(
    #[prop(into)] draft: Signal<DraftReview>,
    #[prop(into)] errors: Signal<FieldErrors>,
    rating_style: RatingStyle,
    #[prop(into)] on_edit: Callback<DraftEdit>,
    #[prop(into)] on_submit: Callback<()>,
) -> impl IntoView {
    let name_error = move || errors.with(|e| e.name.clone());
    let feedback_error = move || errors.with(|e| e.feedback.clone());

    view! {
        <div class="mt-4 p-4 border rounded">
            <input
                type="text"
                class="form-control mb-2"
                placeholder="Name"
                prop:value=move || draft.with(|d| d.name.clone())
                on:input=move |e| on_edit.call(DraftEdit::Name(event_target_value(&e)))
            />
            <Show when=move || !name_error().is_empty()>
                <small class="text-danger">{name_error}</small>
            </Show>

            <RatingInput
                style=rating_style
                value=Signal::derive(move || draft.with(|d| d.rating))
                on_change=move |rating: f64| on_edit.call(DraftEdit::Rating(rating))
            />

            <textarea
                class="form-control mb-2"
                placeholder="Feedback"
                prop:value=move || draft.with(|d| d.feedback.clone())
                on:input=move |e| on_edit.call(DraftEdit::Feedback(event_target_value(&e)))
            />
            <Show when=move || !feedback_error().is_empty()>
                <small class="text-danger">{feedback_error}</small>
            </Show>

            <br/>
            <button class="btn btn-outline-success mt-2" on:click=move |_| on_submit.call(())>
                { "Submit" }
            </button>
        </div>
    }
}
