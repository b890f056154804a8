//! Shared query parameter types for API handlers.

use holonet_core::types::DbId;
use serde::Deserialize;

/// Optional owner filter for `DELETE /favorite/{kind}/{id}` (`?user_id=`).
///
/// Without it the delete matches favorites of any user.
#[derive(Debug, Default, Deserialize)]
pub struct FavoriteOwnerParams {
    pub user_id: Option<DbId>,
}
