use serde::Deserialize;

use crate::models::request::{FeatureRequest, Status};

/// Sort keys the board UI offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    Newest,
    Oldest,
    Upvotes,
    Comments,
}

/// Parameters of the derived list view.
#[derive(Debug, Clone, Default)]
pub struct ListQuery {
    /// Case-insensitive substring match against title, description, and
    /// author name. Empty matches everything.
    pub search: String,
    /// None means "all".
    pub status: Option<Status>,
    pub sort: SortKey,
}

fn matches(request: &FeatureRequest, query: &ListQuery) -> bool {
    if let Some(status) = query.status {
        if request.status != status {
            return false;
        }
    }

    if query.search.is_empty() {
        return true;
    }
    let needle = query.search.to_lowercase();
    request.title.to_lowercase().contains(&needle)
        || request.description.to_lowercase().contains(&needle)
        || request.user.name.to_lowercase().contains(&needle)
}

/// Compute the filtered, sorted projection of a request collection.
///
/// Pure: the input is not mutated and the result is recomputed from scratch
/// on every call. The sort is stable, so requests with equal keys keep their
/// relative input order; no secondary key is applied here.
pub fn filter_and_sort(requests: &[FeatureRequest], query: &ListQuery) -> Vec<FeatureRequest> {
    let mut out: Vec<FeatureRequest> = requests
        .iter()
        .filter(|r| matches(r, query))
        .cloned()
        .collect();

    match query.sort {
        SortKey::Newest => out.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortKey::Oldest => out.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        SortKey::Upvotes => out.sort_by(|a, b| b.upvotes.len().cmp(&a.upvotes.len())),
        SortKey::Comments => out.sort_by(|a, b| b.comments.len().cmp(&a.comments.len())),
    }

    out
}
