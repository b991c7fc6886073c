// Dashboard overview page
use leptos::*;

use crate::api::ApiClient;
use crate::components::charts::SignupChart;
use crate::components::layout::{Card, LoadingIndicator, PageHeader};
use crate::utils::format_count;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();

    // One fetch per mount, no retry. A failure is logged and leaves the
    // zero-valued stats in place with the chart omitted.
    let stats = create_local_resource(
        || (),
        move |_| {
            let client = client.clone();
            async move {
                match client.dashboard_stats().await {
                    Ok(stats) => Some(stats),
                    Err(err) => {
                        log::error!("Error fetching dashboard stats: {err}");
                        None
                    }
                }
            }
        },
    );

    view! {
        <PageHeader
            title="Overview".to_string()
            description="User registration activity at a glance".to_string()
        />

        {move || match stats.get() {
            None => view! { <LoadingIndicator label="Loading dashboard data..."/> }.into_view(),
            Some(result) => {
                let stats = result.unwrap_or_default();
                let series = stats.signup_series();
                let has_series = !series.is_empty();

                view! {
                    <div class="stat-grid">
                        <StatCard
                            title="Total Registered Users"
                            value=format_count(stats.total_users)
                            caption="All-time registrations"
                        />
                        <StatCard
                            title="Active Users"
                            value=format_count(stats.active_users)
                            caption="Active within last 30 days"
                        />
                        <StatCard
                            title="New Registrations"
                            value=format!(
                                "Today: {} • Week: {}",
                                stats.today_registrations, stats.weekly_registrations,
                            )
                            caption="Current period registrations"
                        />
                    </div>

                    <Card title="User Signups".to_string()>
                        {has_series.then(move || view! { <SignupChart series=series/> })}
                    </Card>
                }
                .into_view()
            }
        }}
    }
}

#[component]
fn StatCard(title: &'static str, value: String, caption: &'static str) -> impl IntoView {
    view! {
        <div class="stat-card">
            <p class="stat-title">{title}</p>
            <h3 class="stat-value">{value}</h3>
            <span class="stat-caption">{caption}</span>
        </div>
    }
}
