//! Lazy, pull-driven pagination.
//!
//! Every multi-page operation is a [`Pager`] over a [`PageSource`]. The pager
//! is a small state machine:
//!
//! ```text
//! Requesting(page) --fetch--> Emitting(items) --exhausted--> Advancing
//!      ^                                                         |
//!      +------------------ page + 1 <---- not last page ---------+
//!                                          last page ----------> Done
//! ```
//!
//! At most one request is issued per page, and only once the previous
//! page's items are used up. An empty page that is not the last one is
//! skipped, so a single call to [`Pager::next_item`] may fetch several
//! pages before it yields an item. A consumer that stops
//! pulling never triggers another request, and no connection is held
//! between pulls. A failed fetch is returned at the point it happens and
//! ends the sequence; nothing is retried or silently truncated.

mod component;
mod rest;

use std::future::Future;

use futures::Stream;
use serde_json::Value;

use crate::error::ScraperError;

pub use component::{extract_calendar_entries, CalendarSource, ComponentSource};
pub use rest::{ExplorationSource, PageEnvelope};

/// Items of one fetched page and whether iteration ends after them.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchedPage {
    pub items: Vec<Value>,
    pub last_page: bool,
}

/// One request per page; decides continuation from the response.
pub trait PageSource: Send {
    fn fetch_page(
        &mut self,
        page: u32,
    ) -> impl Future<Output = Result<FetchedPage, ScraperError>> + Send;
}

enum PagerState {
    Requesting {
        page: u32,
    },
    Emitting {
        page: u32,
        items: std::vec::IntoIter<Value>,
        last_page: bool,
    },
    Advancing {
        page: u32,
        last_page: bool,
    },
    Done,
}

/// Pull-driven item sequence over a [`PageSource`], starting at page 1.
pub struct Pager<S> {
    source: S,
    state: PagerState,
}

impl<S: PageSource> Pager<S> {
    #[must_use]
    pub fn new(source: S) -> Self {
        Self {
            source,
            state: PagerState::Requesting { page: 1 },
        }
    }

    /// Returns the next item, fetching the next page only when the current
    /// one is exhausted. Returns `Ok(None)` once the sequence is finished.
    ///
    /// # Errors
    ///
    /// Propagates the page source's error. The pager is finished afterwards.
    pub async fn next_item(&mut self) -> Result<Option<Value>, ScraperError> {
        loop {
            match std::mem::replace(&mut self.state, PagerState::Done) {
                PagerState::Requesting { page } => {
                    let fetched = self.source.fetch_page(page).await?;
                    self.state = PagerState::Emitting {
                        page,
                        items: fetched.items.into_iter(),
                        last_page: fetched.last_page,
                    };
                }
                PagerState::Emitting {
                    page,
                    mut items,
                    last_page,
                } => {
                    if let Some(item) = items.next() {
                        self.state = PagerState::Emitting {
                            page,
                            items,
                            last_page,
                        };
                        return Ok(Some(item));
                    }
                    self.state = PagerState::Advancing { page, last_page };
                }
                PagerState::Advancing { page, last_page } => {
                    if last_page {
                        tracing::debug!(page, "pagination finished");
                    } else {
                        self.state = PagerState::Requesting { page: page + 1 };
                    }
                }
                PagerState::Done => return Ok(None),
            }
        }
    }

    /// Adapts the pager into a [`Stream`]. The stream ends after the first
    /// error.
    pub fn into_stream(self) -> impl Stream<Item = Result<Value, ScraperError>> + Send {
        futures::stream::try_unfold(self, |mut pager| async move {
            let item = pager.next_item().await?;
            Ok(item.map(|item| (item, pager)))
        })
    }
}

#[cfg(test)]
pub(crate) mod test_support;
