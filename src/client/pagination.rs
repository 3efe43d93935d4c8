//! Pagination helpers for API requests
//!
//! Paginated list responses carry `offset`/`limit`/`total_count` plus
//! `first`/`last`/`previous`/`next` links. The cursor for the next page is the
//! `offset` query parameter of the `next` link, which [`next_offset`] extracts.
//! [`Pager`] drives any list fetcher across pages using that cursor.

use std::future::Future;
use std::marker::PhantomData;

use log::debug;
use serde::{Deserialize, Serialize};
use url::form_urlencoded;

use crate::error::{PaginationError, Result};

/// Largest page size the Posture Management API accepts.
pub const MAX_PAGE_SIZE: i64 = 100;

/// Page size used when the caller does not choose one.
pub const DEFAULT_PAGE_SIZE: i64 = 50;

/// Name of the query parameter carrying the page cursor.
const OFFSET_PARAM: &str = "offset";

/// Pagination parameters for list requests.
///
/// # Example
/// ```
/// use postureop::client::ListParams;
///
/// let params = ListParams::new().limit(25).offset(50);
/// assert_eq!(params.to_query_params().len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListParams {
    /// Zero-based index of the first item to return
    pub offset: Option<i64>,
    /// Number of items per page
    pub limit: Option<i64>,
}

impl ListParams {
    /// Create new list params with server defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the starting offset.
    pub fn offset(mut self, offset: i64) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Set the page size.
    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Convert to query string parameters.
    pub fn to_query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();

        if let Some(offset) = self.offset {
            params.push((OFFSET_PARAM, offset.to_string()));
        }

        if let Some(limit) = self.limit {
            params.push(("limit", limit.to_string()));
        }

        params
    }

    /// Check if any pagination parameters are set.
    pub fn is_empty(&self) -> bool {
        self.offset.is_none() && self.limit.is_none()
    }
}

/// A hyperlink to another page of results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageLink {
    /// Absolute or relative URL of the page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

impl PageLink {
    /// Create a link pointing at `href`.
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: Some(href.into()),
        }
    }

    /// Read the `offset` query parameter of this link.
    ///
    /// Returns `Ok(None)` when the link has no href, no query string, or no
    /// `offset` parameter.
    pub fn offset(&self) -> std::result::Result<Option<i64>, PaginationError> {
        match self.href.as_deref() {
            Some(href) => query_offset(href),
            None => Ok(None),
        }
    }
}

/// Pagination metadata shared by every paginated list response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    /// Index of the first item in this page
    #[serde(default)]
    pub offset: i64,

    /// Requested page size
    #[serde(default)]
    pub limit: i64,

    /// Total number of items across all pages
    #[serde(default)]
    pub total_count: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first: Option<PageLink>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last: Option<PageLink>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous: Option<PageLink>,

    /// Present only when a later page exists
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<PageLink>,
}

/// A list response that carries pagination metadata.
pub trait Paginated {
    /// The element type of the page payload
    type Item;

    /// Pagination metadata for this page.
    fn page(&self) -> &PageMeta;

    /// Items on this page.
    fn items(&self) -> &[Self::Item];

    /// Consume the page and return its items.
    fn into_items(self) -> Vec<Self::Item>;

    /// Offset of the next page, see [`next_offset`].
    fn next_offset(&self) -> std::result::Result<Option<i64>, PaginationError> {
        next_offset(self)
    }
}

/// Determine the offset to request for the page after `list`.
///
/// * no `next` link: `Ok(None)`, the last page was reached
/// * `next` link without an `offset` query parameter: `Ok(None)`
/// * `offset` parses as a base-10 integer: `Ok(Some(offset))`
/// * `offset` is not an integer: [`PaginationError::MalformedOffset`]
///
/// Only the query string of the link is inspected, so relative hrefs such
/// as `"ibm.com?offset=135"` work the same as absolute URLs.
pub fn next_offset<P: Paginated + ?Sized>(
    list: &P,
) -> std::result::Result<Option<i64>, PaginationError> {
    match list.page().next.as_ref() {
        Some(link) => link.offset(),
        None => Ok(None),
    }
}

/// Extract the first `offset` query parameter of `href` as an integer.
fn query_offset(href: &str) -> std::result::Result<Option<i64>, PaginationError> {
    let without_fragment = href.split_once('#').map_or(href, |(head, _)| head);

    let Some((_, query)) = without_fragment.split_once('?') else {
        return Ok(None);
    };

    let Some(value) = form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == OFFSET_PARAM)
        .map(|(_, value)| value.into_owned())
    else {
        return Ok(None);
    };

    value
        .parse::<i64>()
        .map(Some)
        .map_err(|source| PaginationError::MalformedOffset { value, source })
}

/// Walks a paginated list endpoint page by page.
///
/// The fetcher receives the [`ListParams`] for each request; after each page
/// the offset is advanced from the page's `next` link. Iteration ends when the
/// link carries no offset. A link whose offset does not move past the one just
/// requested fails with [`PaginationError::Stalled`].
///
/// # Example
/// ```ignore
/// let mut pager = Pager::new(ListParams::new().limit(50), |params| async move {
///     client.list_credentials(&params).await
/// });
/// while pager.has_next() {
///     let credentials = pager.next_page().await?;
///     // ...
/// }
/// ```
pub struct Pager<L, F> {
    fetch: F,
    params: ListParams,
    has_next: bool,
    pages_fetched: usize,
    _list: PhantomData<fn() -> L>,
}

impl<L, F, Fut> Pager<L, F>
where
    L: Paginated,
    F: FnMut(ListParams) -> Fut,
    Fut: Future<Output = Result<L>>,
{
    /// Create a pager starting at `params`.
    pub fn new(params: ListParams, fetch: F) -> Self {
        Self {
            fetch,
            params,
            has_next: true,
            pages_fetched: 0,
            _list: PhantomData,
        }
    }

    /// Whether another page can be fetched.
    pub fn has_next(&self) -> bool {
        self.has_next
    }

    /// Number of pages fetched so far.
    pub fn pages_fetched(&self) -> usize {
        self.pages_fetched
    }

    /// Fetch the next page and advance the cursor.
    pub async fn next_page(&mut self) -> Result<Vec<L::Item>> {
        if !self.has_next {
            return Err(PaginationError::Exhausted.into());
        }

        let list = (self.fetch)(self.params.clone()).await?;
        self.pages_fetched += 1;

        match list.next_offset()? {
            Some(offset) => {
                let current = self.params.offset.unwrap_or(0);
                if offset <= current {
                    self.has_next = false;
                    return Err(PaginationError::Stalled {
                        current,
                        next: offset,
                    }
                    .into());
                }
                debug!("Page {} done, next offset {}", self.pages_fetched, offset);
                self.params.offset = Some(offset);
            }
            None => {
                debug!("Page {} is the last page", self.pages_fetched);
                self.has_next = false;
            }
        }

        Ok(list.into_items())
    }

    /// Fetch every remaining page and concatenate the items.
    pub async fn collect_all(mut self) -> Result<Vec<L::Item>> {
        let mut all_items = Vec::new();

        while self.has_next {
            let items = self.next_page().await?;
            all_items.extend(items);
        }

        debug!(
            "Collected {} items across {} pages",
            all_items.len(),
            self.pages_fetched
        );
        Ok(all_items)
    }
}
