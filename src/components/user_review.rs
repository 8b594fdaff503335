/// The review widget: feedback form plus the carousel of saved reviews.
/// All state lives in one `ReviewBoard`; the views only read from it and send
/// events back through callbacks.
use leptos::*;

use crate::board::{DraftEdit, ReviewBoard};
use crate::components::{review_form::ReviewForm, reviews_carousel::ReviewsCarousel};
use crate::config::WidgetConfig;
use crate::store::{LocalStorage, ReviewStore};

#[component]
pub fn UserReview(#[prop(optional)] config: WidgetConfig) -> impl IntoView {
    let board = create_rw_signal(ReviewBoard::new(ReviewStore::with_key(
        LocalStorage,
        &config.storage_key,
    )));

    // Effects only run in the browser, which is where localStorage lives.
    create_effect(move |_| board.update(|b| b.load()));

    let on_edit = Callback::new(move |edit: DraftEdit| board.update(|b| b.edit(edit)));
    let on_submit = Callback::new(move |_: ()| {
        board.update(|b| {
            // Field errors stay on the board for the form; save failures are logged there.
            let _ = b.submit();
        })
    });
    let on_delete = Callback::new(move |index: usize| {
        board.update(|b| {
            let _ = b.delete(index);
        })
    });
    // The arrows only render with more than two reviews, so these always move.
    let on_prev = Callback::new(move |_: ()| {
        board.update(|b| {
            b.prev();
        })
    });
    let on_next = Callback::new(move |_: ()| {
        board.update(|b| {
            b.next();
        })
    });

    let draft = Signal::derive(move || board.with(|b| b.draft().clone()));
    let errors = Signal::derive(move || board.with(|b| b.errors().clone()));
    let slots = Signal::derive(move || {
        board.with(|b| {
            b.slots()
                .into_iter()
                .flatten()
                .map(|slot| (slot.index, slot.review.clone()))
                .collect::<Vec<_>>()
        })
    });
    let show_navigation = Signal::derive(move || board.with(|b| b.shows_navigation()));
    let rating_style = config.rating_style;

    view! {
        <div class="container my-4 w-50">
            <button class="btn btn-outline-primary" on:click=move |_| board.update(|b| b.open_form())>
                { "Share Your Feedback" }
            </button>

            <Show when=move || board.with(|b| b.is_form_open())>
                <ReviewForm
                    draft=draft
                    errors=errors
                    rating_style=rating_style
                    on_edit=on_edit
                    on_submit=on_submit
                />
            </Show>

            <ReviewsCarousel
                slots=slots
                show_navigation=show_navigation
                on_prev=on_prev
                on_next=on_next
                on_delete=on_delete
            />
        </div>
    }
}
