// Admin console UI: a Leptos single-page app over the dashboard API
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

pub mod api;
pub mod components;
pub mod config;
pub mod pages;
pub mod types;
pub mod utils;

use api::ApiClient;
use components::layout::Layout;
use pages::*;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(ApiClient::from_config());

    view! {
        <Title text="Admin Console"/>
        <Meta name="description" content="User registration statistics and user management"/>

        <Router>
            <Layout>
                <Routes>
                    <Route path="/" view=DashboardPage/>
                    <Route path="/users" view=UsersPage/>
                    <Route path="/*any" view=NotFoundPage/>
                </Routes>
            </Layout>
        </Router>
    }
}
