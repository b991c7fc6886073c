use leptos::*;

use crate::components::navigation::{Navbar, Sidebar};

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="dashboard-container">
            <Sidebar/>

            <main class="main-content">
                <Navbar/>
                {children()}
            </main>
        </div>
    }
}

#[component]
pub fn PageHeader(title: String, #[prop(optional)] description: Option<String>) -> impl IntoView {
    view! {
        <div class="page-header">
            <h2>{title}</h2>
            {description.map(|desc| view! { <p>{desc}</p> })}
        </div>
    }
}

#[component]
pub fn Card(
    #[prop(optional)] title: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="card">
            {title.map(|t| view! {
                <div class="card-header">{t}</div>
            })}
            <div class="card-body">
                {children()}
            </div>
        </div>
    }
}

#[component]
pub fn LoadingIndicator(label: &'static str) -> impl IntoView {
    view! {
        <div class="loading-indicator">
            <span class="spinner"></span>
            <span>{label}</span>
        </div>
    }
}
