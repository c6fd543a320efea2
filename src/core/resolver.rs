//! Channel handle resolution

use crate::error::RycError;
use crate::platform::DataApi;
use tracing::{debug, info};

/// Resolve a channel handle (e.g. `@name`) to a channel ID.
///
/// Runs a single channel search with the handle as query text and takes the
/// first hit. Ambiguous handles are not disambiguated.
pub async fn resolve_channel_id(api: &dyn DataApi, handle: &str) -> Result<String, RycError> {
    let query = handle.trim();
    info!("Resolving channel handle: {}", query);

    let response = api.search_channels(query, 1).await?;
    debug!("Channel search returned {} items", response.items.len());

    response
        .items
        .into_iter()
        .find_map(|item| item.id.channel_id)
        .filter(|id| !id.is_empty())
        .ok_or_else(|| RycError::ChannelNotFound(query.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testing::FakeApi;

    #[tokio::test]
    async fn test_resolve_known_handle() {
        let api = FakeApi::new().with_channel("@rustlang", "UC_rust");
        let id = resolve_channel_id(&api, "@rustlang").await.unwrap();
        assert_eq!(id, "UC_rust");
        assert_eq!(api.calls(), vec!["search_channels(@rustlang, 1)"]);
    }

    #[tokio::test]
    async fn test_resolve_trims_handle() {
        let api = FakeApi::new().with_channel("@rustlang", "UC_rust");
        let id = resolve_channel_id(&api, "  @rustlang \n").await.unwrap();
        assert_eq!(id, "UC_rust");
    }

    #[tokio::test]
    async fn test_resolve_unknown_handle() {
        let api = FakeApi::new();
        let err = resolve_channel_id(&api, "@nobody").await.unwrap_err();
        match err {
            RycError::ChannelNotFound(handle) => assert_eq!(handle, "@nobody"),
            other => panic!("expected ChannelNotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_resolve_propagates_transport_errors() {
        let api = FakeApi::new().failing_search();
        let err = resolve_channel_id(&api, "@rustlang").await.unwrap_err();
        assert!(err.is_transport_error());
    }
}
