use leptos::*;

use crate::models::review::Review;

#[component]
pub fn ReviewCard(
    review: Review,
    index: usize, // Position in the list, used as the delete target
    #[prop(into)] on_delete: Callback<usize>,
) -> impl IntoView {
    let stars = " ⭐ ".repeat(review.star_count());

    view! {
        <div class="card" style="width: 18rem;">
            <div class="card-body">
                <h5 class="card-title">{ review.name }</h5>
                <p class="card-text">{ stars }</p>
                <p class="card-text">{ review.feedback }</p>
                <button class="btn btn-outline-danger mt-2" on:click=move |_| on_delete.call(index)>
                    { "Delete" }
                </button>
            </div>
        </div>
    }
}
