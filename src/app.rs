/// Main application entry point for the review widget page.
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::components::user_review::UserReview;
use crate::config::WidgetConfig;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="User Reviews"/>
        <Router>
            <main>
                <Routes>
                    <Route path="" view=HomePage/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    view! {
        <UserReview config=WidgetConfig::default() />
    }
}
