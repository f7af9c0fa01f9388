use std::sync::Arc;

use crate::core::persistence::entities::EventEntity;
use crate::core::persistence::selection::{PageDescriptor, Selection, Sort};
use crate::core::persistence::store::MetricStore;
use crate::errors::AppError;

fn level_selection(base: Selection, event_level: &str) -> Selection {
    // Severities are stored title-cased ("Warning"); normalize the filter
    // the same way. An empty level means no constraint.
    base.filter_title_cased("event_level", event_level)
}

/// Stored events filtered by severity, newest first, paged.
pub async fn list_events(
    store: &Arc<dyn MetricStore>,
    event_level: &str,
    page: PageDescriptor,
) -> Result<Vec<EventEntity>, AppError> {
    let selection =
        level_selection(Selection::paged(page), event_level).sort(Sort::CreatedDesc);
    store.find_events(&selection).await
}

/// Same filter rule as [`list_events`], no pagination.
pub async fn count_events(
    store: &Arc<dyn MetricStore>,
    event_level: &str,
) -> Result<u64, AppError> {
    let selection = level_selection(Selection::unpaged(), event_level);
    store.count_events(&selection).await
}
