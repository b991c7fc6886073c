// Sidebar and top navbar
use leptos::*;
use leptos_router::{use_location, use_navigate};

#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <aside class="sidebar">
            <div class="sidebar-brand">
                <GridIcon/>
                <span>"Admin Console"</span>
            </div>

            <SideLink href="/" label="Dashboard Overview"/>
            <SideLink href="/users" label="Registered Users"/>

            // Decoration only; there is no session to end.
            <button class="side-btn logout">"Logout"</button>
        </aside>
    }
}

#[component]
fn SideLink(href: &'static str, label: &'static str) -> impl IntoView {
    let location = use_location();
    let navigate = use_navigate();

    view! {
        <button
            class=move || {
                if location.pathname.get() == href {
                    "side-btn active"
                } else {
                    "side-btn"
                }
            }
            on:click=move |_| navigate(href, Default::default())
        >
            {label}
        </button>
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    // Static decoration; the search box and account chip are not wired up.
    view! {
        <div class="navbar">
            <input
                type="text"
                class="search-bar"
                placeholder="Search users by name or email"
            />
            <div class="navbar-right">
                <BellIcon/>
                <div class="admin-chip">
                    <div class="admin-avatar">"A"</div>
                    <span>"Hi, Admin"</span>
                </div>
            </div>
        </div>
    }
}

#[component]
fn GridIcon() -> impl IntoView {
    view! {
        <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
            <rect x="3" y="3" width="7" height="7" rx="1"/>
            <rect x="14" y="3" width="7" height="7" rx="1"/>
            <rect x="3" y="14" width="7" height="7" rx="1"/>
            <rect x="14" y="14" width="7" height="7" rx="1"/>
        </svg>
    }
}

#[component]
fn BellIcon() -> impl IntoView {
    view! {
        <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
            <path d="M18 8a6 6 0 00-12 0c0 7-3 9-3 9h18s-3-2-3-9"/>
            <path d="M13.7 21a2 2 0 01-3.4 0"/>
        </svg>
    }
}
