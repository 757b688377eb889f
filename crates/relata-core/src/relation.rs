//! Relation resolution for JSON-backed id lists.
//!
//! A user "has many" posts through the id array it stores, rather than a
//! foreign key on the post side. This module turns such an array back into
//! the posts that currently exist, against any [`PostStore`].

use std::collections::HashMap;

use crate::domain::Post;
use crate::error::RepoError;
use crate::ports::PostStore;

/// Resolve a stored id list into the posts that currently exist.
///
/// Ids with no matching row are silently omitted - a dangling reference is
/// normal data here, not an error. The result follows the order of `ids`,
/// and a duplicated id resolves to a repeated entry, so the output maps
/// positionally onto the input minus its dangling entries.
///
/// Read-only; store failures propagate unchanged.
pub async fn resolve_related(ids: &[i64], store: &dyn PostStore) -> Result<Vec<Post>, RepoError> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }

    // Query each distinct id once, then re-expand in input order.
    let mut distinct = Vec::with_capacity(ids.len());
    for &id in ids {
        if !distinct.contains(&id) {
            distinct.push(id);
        }
    }

    let found = store.find_by_ids(&distinct).await?;
    let by_id: HashMap<i64, Post> = found.into_iter().map(|post| (post.id, post)).collect();

    Ok(ids.iter().filter_map(|id| by_id.get(id).cloned()).collect())
}
