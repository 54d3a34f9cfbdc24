//! Home feed controller
//!
//! Owns the document list shown on the home screen: the active filter, the
//! entries of the current page, pagination and the inline error message.
//! Every change of filter or page triggers a refresh. Refreshes may overlap;
//! each one is sequenced and only the most recent is applied.

use domain_documents::{
    DocumentEntry, DocumentFilter, DocumentListingPort, Pagination, RequestSequencer, Sequenced,
    StatusTone,
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// What happened to a refresh once its response arrived
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// The page was loaded and shown
    Loaded,
    /// The request failed; the list was emptied and the error shown
    Failed,
    /// A newer refresh was started meanwhile; the response was dropped
    Stale,
}

/// Entry counts per status tone, for the summary cards
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeedSummary {
    pub success: usize,
    pub warning: usize,
    pub error: usize,
    pub neutral: usize,
}

impl FeedSummary {
    fn of(entries: &[DocumentEntry]) -> Self {
        entries.iter().fold(Self::default(), |mut summary, entry| {
            match entry.status_tone() {
                StatusTone::Success => summary.success += 1,
                StatusTone::Warning => summary.warning += 1,
                StatusTone::Error => summary.error += 1,
                StatusTone::Neutral => summary.neutral += 1,
            }
            summary
        })
    }

    pub fn total(&self) -> usize {
        self.success + self.warning + self.error + self.neutral
    }
}

#[derive(Debug, Default)]
struct FeedState {
    filter: DocumentFilter,
    entries: Vec<DocumentEntry>,
    pagination: Pagination,
    error: Option<String>,
    loading: bool,
}

/// Document list of the home screen
pub struct HomeFeed {
    lister: Arc<dyn DocumentListingPort>,
    sequencer: RequestSequencer,
    page_size: u32,
    state: RwLock<FeedState>,
}

impl HomeFeed {
    /// Creates an empty feed; nothing is fetched until the first refresh
    pub fn new(lister: Arc<dyn DocumentListingPort>, page_size: u32) -> Self {
        Self {
            lister,
            sequencer: RequestSequencer::new(),
            page_size,
            state: RwLock::new(FeedState {
                filter: Self::base_filter(page_size),
                ..Default::default()
            }),
        }
    }

    fn base_filter(page_size: u32) -> DocumentFilter {
        DocumentFilter::new().with_page(1).with_limit(page_size)
    }

    /// Reloads the current page with the current filter
    pub async fn refresh(&self) -> RefreshOutcome {
        // numbered under the lock that reads the filter
        let (seq, filter) = {
            let mut state = self.state.write().await;
            state.loading = true;
            (self.sequencer.issue(), state.filter.clone())
        };

        let response = Sequenced::new(seq, self.lister.list(&filter).await);

        let mut state = self.state.write().await;
        let Some(result) = self.sequencer.accept(response) else {
            return RefreshOutcome::Stale;
        };
        state.loading = false;

        match result {
            Ok(page) => {
                debug!(
                    documents = page.documents.len(),
                    page = page.pagination.page,
                    total = page.pagination.total,
                    "Home feed loaded"
                );
                state.entries = page.documents.into_iter().map(DocumentEntry::from).collect();
                state.pagination = page.pagination;
                state.error = None;
                RefreshOutcome::Loaded
            }
            Err(e) => {
                warn!(error = %e, "Home feed could not be loaded");
                state.entries.clear();
                state.pagination = Pagination::default();
                state.error = Some(e.message().to_string());
                RefreshOutcome::Failed
            }
        }
    }

    /// Replaces the filter and reloads from the first page.
    ///
    /// A filter without a page size gets the configured one.
    pub async fn apply_filter(&self, filter: DocumentFilter) -> RefreshOutcome {
        {
            let mut state = self.state.write().await;
            let limit = filter.limit.filter(|limit| *limit > 0).unwrap_or(self.page_size);
            state.filter = DocumentFilter {
                page: Some(1),
                limit: Some(limit),
                ..filter
            };
            info!(filters = state.filter.active_count(), "Applying document filter");
        }
        self.refresh().await
    }

    /// Drops every filter and reloads from the first page
    pub async fn clear_filter(&self) -> RefreshOutcome {
        self.state.write().await.filter = Self::base_filter(self.page_size);
        self.refresh().await
    }

    /// Moves to another page, keeping the filter. Page numbers start at 1.
    pub async fn go_to_page(&self, page: u32) -> RefreshOutcome {
        let page = page.max(1);
        {
            let mut state = self.state.write().await;
            state.filter = state.filter.for_page(page);
        }
        self.refresh().await
    }

    /// Moves forward when the service reports a next page; `None` otherwise
    pub async fn next_page(&self) -> Option<RefreshOutcome> {
        let pagination = self.pagination().await;
        if !pagination.has_next {
            return None;
        }
        Some(self.go_to_page(pagination.page.saturating_add(1)).await)
    }

    /// Moves back when the service reports a previous page; `None` otherwise
    pub async fn previous_page(&self) -> Option<RefreshOutcome> {
        let pagination = self.pagination().await;
        if !pagination.has_prev {
            return None;
        }
        Some(self.go_to_page(pagination.page.saturating_sub(1)).await)
    }

    pub async fn entries(&self) -> Vec<DocumentEntry> {
        self.state.read().await.entries.clone()
    }

    pub async fn pagination(&self) -> Pagination {
        self.state.read().await.pagination.clone()
    }

    pub async fn filter(&self) -> DocumentFilter {
        self.state.read().await.filter.clone()
    }

    /// Inline error message of the last applied refresh
    pub async fn error(&self) -> Option<String> {
        self.state.read().await.error.clone()
    }

    pub async fn is_loading(&self) -> bool {
        self.state.read().await.loading
    }

    /// Entry counts per status tone on the current page
    pub async fn summary(&self) -> FeedSummary {
        FeedSummary::of(&self.state.read().await.entries)
    }
}
