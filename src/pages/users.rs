// Registered-users page: filter, sort, and pagination controls over the
// server-side user list.
use leptos::*;

use crate::api::{ApiClient, RequestSeq};
use crate::components::layout::{Card, LoadingIndicator, PageHeader};
use crate::types::{DateFilter, Pagination, SortOrder, StatusFilter, User, UserQuery};
use crate::utils::format_date;

#[component]
pub fn UsersPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();

    let query = create_rw_signal(UserQuery::default());
    let (users, set_users) = create_signal(Vec::<User>::new());
    let (pagination, set_pagination) = create_signal(Pagination::default());
    let (loading, set_loading) = create_signal(true);
    let requests = store_value(RequestSeq::default());

    let load_users = create_action(move |query: &UserQuery| {
        let query = query.clone();
        let client = client.clone();
        async move {
            requests.update_value(|r| {
                r.begin();
            });
            let seq = requests.with_value(|r| r.latest());
            set_loading.set(true);

            match client.list_users(&query).await {
                // Rows and pagination metadata always land together, from
                // the same completed response.
                Ok(response) if requests.with_value(|r| r.is_current(seq)) => {
                    set_users.set(response.data);
                    set_pagination.set(response.pagination);
                    set_loading.set(false);
                }
                // A newer request was issued while this one was in flight.
                Ok(_) => log::debug!("Discarding stale user list response"),
                Err(err) => {
                    if requests.with_value(|r| r.is_current(seq)) {
                        log::error!("Error fetching users: {err}");
                        set_loading.set(false);
                    }
                }
            }
        }
    });

    // Filters and page share one signal, so every control interaction is a
    // single transition and dispatches exactly one request.
    create_effect(move |_| {
        load_users.dispatch(query.get());
    });

    let filters = move || query.get().filters;

    view! {
        <PageHeader title="Registered Users".to_string()/>

        <div class="filters-row">
            <input
                type="text"
                class="form-control"
                placeholder="Search email..."
                prop:value=move || query.get().filters.search
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    query.update(|q| q.update_filters(|f| f.search = value));
                }
            />

            <select
                class="form-select"
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    query.update(|q| q.update_filters(|f| {
                        f.status = StatusFilter::from_param(&value);
                    }));
                }
            >
                <option value="All" selected=move || filters().status == StatusFilter::All>
                    "Status: All"
                </option>
                <option value="Active" selected=move || filters().status == StatusFilter::Active>
                    "Active"
                </option>
                <option value="Inactive" selected=move || filters().status == StatusFilter::Inactive>
                    "Inactive"
                </option>
            </select>

            <select
                class="form-select"
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    query.update(|q| q.update_filters(|f| {
                        f.date_filter = DateFilter::from_param(&value);
                    }));
                }
            >
                <option value="30days" selected=move || filters().date_filter == DateFilter::Last30Days>
                    "Date: Last 30 days"
                </option>
                <option value="7days" selected=move || filters().date_filter == DateFilter::Last7Days>
                    "Last 7 days"
                </option>
                <option value="90days" selected=move || filters().date_filter == DateFilter::Last90Days>
                    "Last 90 days"
                </option>
            </select>

            <select
                class="form-select"
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    query.update(|q| q.update_filters(|f| {
                        f.sort = SortOrder::from_param(&value);
                    }));
                }
            >
                <option value="recent" selected=move || filters().sort == SortOrder::Recent>
                    "Sort: Recent"
                </option>
                <option value="oldest" selected=move || filters().sort == SortOrder::Oldest>
                    "Oldest"
                </option>
            </select>
        </div>

        // Refreshes keep the previous rows visible, dimmed, instead of
        // replacing them with a loading row.
        <Show when=move || loading.get() && !users.get().is_empty()>
            <LoadingIndicator label="Refreshing..."/>
        </Show>

        <Card>
            <table class="users-table">
                <thead>
                    <tr>
                        <th>"#"</th>
                        <th>"Email"</th>
                        <th>"Registration Date"</th>
                        <th>"Status"</th>
                        <th>"Plan"</th>
                        <th>"Action"</th>
                    </tr>
                </thead>
                <tbody class:dimmed=move || loading.get() && !users.get().is_empty()>
                    {move || {
                        let rows = users.get();
                        if loading.get() && rows.is_empty() {
                            view! {
                                <tr class="placeholder-row">
                                    <td colspan="6">"Loading users data..."</td>
                                </tr>
                            }
                            .into_view()
                        } else if rows.is_empty() {
                            view! {
                                <tr class="placeholder-row">
                                    <td colspan="6">"No users found"</td>
                                </tr>
                            }
                            .into_view()
                        } else {
                            rows.into_iter().map(|user| {
                                let details_href = format!("/users/{}", user.id);
                                let registered = format_date(&user.registration_date);
                                let status = user.status;
                                view! {
                                    <tr>
                                        <td>{user.id}</td>
                                        <td>{user.email}</td>
                                        <td>{registered}</td>
                                        <td>
                                            <span class=status.badge_class()>
                                                {format!("• {}", status.label())}
                                            </span>
                                        </td>
                                        <td>{user.plan}</td>
                                        <td>
                                            <a class="btn" href=details_href>"View Details"</a>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect_view()
                        }
                    }}
                </tbody>
            </table>
        </Card>

        {move || {
            let p = pagination.get();
            let shown = users.get().len();
            (p.total_pages > 1).then(move || view! {
                <div class="pagination-bar">
                    <div class="page-summary">
                        {format!("Showing {} of {} users", shown, p.total)}
                    </div>
                    <div class="pagination-buttons">
                        <button
                            class="btn"
                            disabled=!p.has_prev()
                            on:click=move |_| query.update(|q| q.prev_page())
                        >
                            "Previous"
                        </button>
                        <button
                            class="btn"
                            disabled=!p.has_next()
                            on:click=move |_| query.update(|q| q.next_page(p.total_pages))
                        >
                            "Next"
                        </button>
                    </div>
                </div>
            })
        }}
    }
}
