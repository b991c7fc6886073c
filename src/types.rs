use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::config;
use crate::utils::weekday_label;

/// Envelope for `GET /dashboard/stats`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StatsEnvelope {
    pub data: DashboardStats,
}

/// Aggregate registration metrics, computed server-side.
///
/// Zero-valued via `Default` until the first response arrives; replaced
/// wholesale on each successful fetch.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_users: u64,
    pub active_users: u64,
    pub today_registrations: u64,
    pub weekly_registrations: u64,
    #[serde(default)]
    pub daily_signups: Vec<DailySignup>,
}

/// One day of the signup series, keyed by the server's date string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DailySignup {
    #[serde(rename = "_id")]
    pub date_key: String,
    pub count: u64,
}

/// A chart-ready point: short weekday label plus signup count.
#[derive(Debug, Clone, PartialEq)]
pub struct SignupPoint {
    pub label: String,
    pub count: u64,
}

impl DashboardStats {
    /// Chart series in server order, one point per returned day.
    pub fn signup_series(&self) -> Vec<SignupPoint> {
        self.daily_signups
            .iter()
            .map(|day| SignupPoint {
                label: weekday_label(&day.date_key),
                count: day.count,
            })
            .collect()
    }
}

/// One row of the registered-users table. Immutable snapshot per fetch.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub registration_date: DateTime<Utc>,
    pub status: UserStatus,
    pub plan: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum UserStatus {
    Active,
    Inactive,
}

impl UserStatus {
    pub fn label(self) -> &'static str {
        match self {
            UserStatus::Active => "Active",
            UserStatus::Inactive => "Inactive",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            UserStatus::Active => "status-badge active",
            UserStatus::Inactive => "status-badge inactive",
        }
    }
}

/// Envelope for `GET /dashboard/users`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UsersResponse {
    pub data: Vec<User>,
    pub pagination: Pagination,
}

/// Server-reported pagination metadata. The server is authoritative for
/// `total_pages` and `total`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub current_page: u32,
    pub total_pages: u32,
    pub total: u64,
}

impl Pagination {
    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }
}

/// User-facing filter controls for the list query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryFilters {
    pub search: String,
    pub status: StatusFilter,
    pub date_filter: DateFilter,
    pub sort: SortOrder,
}

impl Default for QueryFilters {
    fn default() -> Self {
        Self {
            search: String::new(),
            status: StatusFilter::All,
            date_filter: DateFilter::Last30Days,
            sort: SortOrder::Recent,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Inactive,
}

impl StatusFilter {
    pub fn as_param(self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Active => "Active",
            StatusFilter::Inactive => "Inactive",
        }
    }

    pub fn from_param(value: &str) -> Self {
        match value {
            "Active" => StatusFilter::Active,
            "Inactive" => StatusFilter::Inactive,
            _ => StatusFilter::All,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateFilter {
    Last7Days,
    #[default]
    Last30Days,
    Last90Days,
}

impl DateFilter {
    pub fn as_param(self) -> &'static str {
        match self {
            DateFilter::Last7Days => "7days",
            DateFilter::Last30Days => "30days",
            DateFilter::Last90Days => "90days",
        }
    }

    pub fn from_param(value: &str) -> Self {
        match value {
            "7days" => DateFilter::Last7Days,
            "90days" => DateFilter::Last90Days,
            _ => DateFilter::Last30Days,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Recent,
    Oldest,
}

impl SortOrder {
    pub fn as_param(self) -> &'static str {
        match self {
            SortOrder::Recent => "recent",
            SortOrder::Oldest => "oldest",
        }
    }

    pub fn from_param(value: &str) -> Self {
        match value {
            "oldest" => SortOrder::Oldest,
            _ => SortOrder::Recent,
        }
    }
}

/// The complete state behind one list request: filters plus page number.
///
/// Filters and page live together so that any control interaction, including
/// a filter change that also resets the page, is a single state transition
/// and therefore issues exactly one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserQuery {
    pub filters: QueryFilters,
    pub page: u32,
}

impl Default for UserQuery {
    fn default() -> Self {
        Self {
            filters: QueryFilters::default(),
            page: 1,
        }
    }
}

impl UserQuery {
    /// Query parameters in the order the server documents them.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("page", self.page.to_string()),
            ("search", self.filters.search.clone()),
            ("status", self.filters.status.as_param().to_string()),
            ("dateFilter", self.filters.date_filter.as_param().to_string()),
            ("sort", self.filters.sort.as_param().to_string()),
        ]
    }

    /// Apply a filter change, resetting to page 1 when `reset_page` is set.
    pub fn apply_filters(&mut self, reset_page: bool, change: impl FnOnce(&mut QueryFilters)) {
        change(&mut self.filters);
        if reset_page {
            self.page = 1;
        }
    }

    /// Apply a filter change using the configured page-reset policy.
    pub fn update_filters(&mut self, change: impl FnOnce(&mut QueryFilters)) {
        self.apply_filters(config::RESET_PAGE_ON_FILTER_CHANGE, change);
    }

    pub fn prev_page(&mut self) {
        if self.page > 1 {
            self.page -= 1;
        }
    }

    pub fn next_page(&mut self, total_pages: u32) {
        if self.page < total_pages {
            self.page += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_envelope_deserializes_wire_shape() {
        let payload = r#"{
            "data": {
                "totalUsers": 1000,
                "activeUsers": 640,
                "todayRegistrations": 12,
                "weeklyRegistrations": 85,
                "dailySignups": [
                    { "_id": "2024-01-15", "count": 9 },
                    { "_id": "2024-01-16", "count": 14 }
                ]
            }
        }"#;

        let envelope: StatsEnvelope = serde_json::from_str(payload).unwrap();
        let stats = envelope.data;
        assert_eq!(stats.total_users, 1000);
        assert_eq!(stats.active_users, 640);
        assert_eq!(stats.today_registrations, 12);
        assert_eq!(stats.weekly_registrations, 85);
        assert_eq!(stats.daily_signups.len(), 2);
        assert_eq!(stats.daily_signups[0].date_key, "2024-01-15");
        assert_eq!(stats.daily_signups[1].count, 14);
    }

    #[test]
    fn signup_series_keeps_length_and_order() {
        let stats = DashboardStats {
            daily_signups: vec![
                DailySignup {
                    date_key: "2024-01-15".into(),
                    count: 3,
                },
                DailySignup {
                    date_key: "2024-01-16".into(),
                    count: 7,
                },
                DailySignup {
                    date_key: "not-a-date".into(),
                    count: 1,
                },
            ],
            ..Default::default()
        };

        let series = stats.signup_series();
        assert_eq!(series.len(), 3);
        assert_eq!(series[0].label, "Mon");
        assert_eq!(series[1].label, "Tue");
        // Unparseable keys pass through untouched.
        assert_eq!(series[2].label, "not-a-date");
        assert_eq!(series.iter().map(|p| p.count).collect::<Vec<_>>(), [3, 7, 1]);
    }

    #[test]
    fn users_response_deserializes_wire_shape() {
        let payload = r#"{
            "data": [
                {
                    "id": "u-17",
                    "email": "ada@example.com",
                    "registrationDate": "2024-01-15T09:30:00Z",
                    "status": "Active",
                    "plan": "Pro"
                }
            ],
            "pagination": { "currentPage": 1, "totalPages": 3, "total": 25 }
        }"#;

        let response: UsersResponse = serde_json::from_str(payload).unwrap();
        assert_eq!(response.data.len(), 1);
        assert_eq!(response.data[0].email, "ada@example.com");
        assert_eq!(response.data[0].status, UserStatus::Active);
        assert_eq!(response.pagination.current_page, 1);
        assert_eq!(response.pagination.total_pages, 3);
        assert_eq!(response.pagination.total, 25);
    }

    #[test]
    fn default_query_pairs_match_documented_request() {
        let query = UserQuery::default();
        assert_eq!(
            query.to_query_pairs(),
            vec![
                ("page", "1".to_string()),
                ("search", String::new()),
                ("status", "All".to_string()),
                ("dateFilter", "30days".to_string()),
                ("sort", "recent".to_string()),
            ]
        );
    }

    #[test]
    fn filter_params_round_trip_and_default_on_unknown() {
        assert_eq!(StatusFilter::from_param("Active"), StatusFilter::Active);
        assert_eq!(StatusFilter::from_param("bogus"), StatusFilter::All);
        assert_eq!(DateFilter::from_param("7days"), DateFilter::Last7Days);
        assert_eq!(DateFilter::from_param("90days"), DateFilter::Last90Days);
        assert_eq!(DateFilter::from_param(""), DateFilter::Last30Days);
        assert_eq!(SortOrder::from_param("oldest"), SortOrder::Oldest);
        assert_eq!(SortOrder::from_param("recent"), SortOrder::Recent);

        for status in [StatusFilter::All, StatusFilter::Active, StatusFilter::Inactive] {
            assert_eq!(StatusFilter::from_param(status.as_param()), status);
        }
    }

    #[test]
    fn filter_change_resets_page_only_when_asked() {
        let mut query = UserQuery {
            page: 4,
            ..Default::default()
        };
        query.apply_filters(false, |f| f.status = StatusFilter::Active);
        assert_eq!(query.page, 4);

        query.apply_filters(true, |f| f.sort = SortOrder::Oldest);
        assert_eq!(query.page, 1);
        assert_eq!(query.filters.status, StatusFilter::Active);
        assert_eq!(query.filters.sort, SortOrder::Oldest);
    }

    #[test]
    fn page_navigation_clamps_at_boundaries() {
        let mut query = UserQuery::default();
        query.prev_page();
        assert_eq!(query.page, 1);

        query.next_page(3);
        assert_eq!(query.page, 2);
        query.next_page(3);
        assert_eq!(query.page, 3);
        query.next_page(3);
        assert_eq!(query.page, 3);

        query.prev_page();
        assert_eq!(query.page, 2);
    }

    #[test]
    fn pagination_boundaries_drive_button_state() {
        let first = Pagination {
            current_page: 1,
            total_pages: 3,
            total: 25,
        };
        assert!(!first.has_prev());
        assert!(first.has_next());

        let last = Pagination {
            current_page: 3,
            total_pages: 3,
            total: 25,
        };
        assert!(last.has_prev());
        assert!(!last.has_next());

        let only = Pagination {
            current_page: 1,
            total_pages: 1,
            total: 2,
        };
        assert!(!only.has_prev());
        assert!(!only.has_next());
    }
}
