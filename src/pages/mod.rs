// Page components
use leptos::*;

pub mod dashboard;
pub mod users;

pub use dashboard::*;
pub use users::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>"The page you're looking for doesn't exist."</p>
            <a href="/" class="btn">"Go to Dashboard"</a>
        </div>
    }
}
