//! Runtime configuration.
//!
//! The API base URL is resolved, in order, from a `<meta>` tag injected by
//! whatever serves the bundle, from the `ADMIN_API_BASE_URL` environment
//! variable at compile time, and finally from a local default.

const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";
const API_URL_META_NAME: &str = "admin-console:api-url";

/// Whether a filter change snaps the user list back to page 1.
///
/// The legacy console kept the old page number after a filter change, which
/// could leave the user stranded past the end of the new result set. Set to
/// `false` to restore that behavior.
pub const RESET_PAGE_ON_FILTER_CHANGE: bool = true;

pub fn api_base_url() -> String {
    meta_content(API_URL_META_NAME)
        .or_else(|| option_env!("ADMIN_API_BASE_URL").map(str::to_string))
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
}

fn meta_content(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let tag = document
        .query_selector(&format!("meta[name='{name}']"))
        .ok()??;
    tag.get_attribute("content").filter(|c| !c.is_empty())
}
