//! Sequential, lazy pagination over collection endpoints
//!
//! A page is requested only when the consumer pulls past the previous one.
//! A full page means "maybe more"; a short page ends the listing. When the
//! last page happens to be exactly full, one extra empty page is requested.

use futures::future;
use futures::stream::{self, Stream, StreamExt, TryStreamExt};
use log::{debug, warn};
use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::hcp::traits::PaginatedResponse;
use crate::hcp::TfeClient;

/// Pagination convention of an endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageScheme {
    /// `page[number]=N&page[size]=S`, N starting at 1 (JSON:API endpoints)
    Number,
    /// `offset=O&limit=S`, O starting at 0 (registry v1 endpoints)
    Offset,
}

impl PageScheme {
    fn first(self) -> u32 {
        match self {
            PageScheme::Number => 1,
            PageScheme::Offset => 0,
        }
    }

    fn advance(self, cursor: u32, page_size: u32) -> u32 {
        match self {
            PageScheme::Number => cursor + 1,
            PageScheme::Offset => cursor + page_size,
        }
    }

    /// Append this scheme's paging parameters to `url`
    pub fn page_url(self, url: &str, cursor: u32, page_size: u32) -> String {
        let separator = if url.contains('?') { "&" } else { "?" };
        match self {
            PageScheme::Number => format!(
                "{}{}page[number]={}&page[size]={}",
                url, separator, cursor, page_size
            ),
            PageScheme::Offset => {
                format!("{}{}offset={}&limit={}", url, separator, cursor, page_size)
            }
        }
    }
}

impl TfeClient {
    /// Lazily stream every item of a collection endpoint, failing on the
    /// first page that cannot be fetched.
    ///
    /// The stream ends right after yielding that error.
    pub fn try_paginate<'a, T, R>(
        &'a self,
        url: String,
        scheme: PageScheme,
    ) -> impl Stream<Item = Result<T>> + 'a
    where
        T: 'a,
        R: DeserializeOwned + PaginatedResponse<T> + 'a,
    {
        let page_size = self.page_size();

        stream::unfold(Some(scheme.first()), move |cursor| {
            let url = url.clone();
            async move {
                let cursor = cursor?;
                let page_url = scheme.page_url(&url, cursor, page_size);
                match self.fetch_page::<T, R>(&page_url).await {
                    Ok(items) => {
                        debug!("{}: page at {} returned {} items", url, cursor, items.len());
                        let next = (items.len() as u32 == page_size)
                            .then(|| scheme.advance(cursor, page_size));
                        Some((items.into_iter().map(Ok).collect::<Vec<_>>(), next))
                    }
                    Err(e) => Some((vec![Err(e)], None)),
                }
            }
        })
        .flat_map(stream::iter)
    }

    /// Lazily stream every item of a collection endpoint.
    ///
    /// A failed page ends the stream after the items already produced and
    /// logs a warning naming `context`.
    pub fn paginate<'a, T, R>(
        &'a self,
        url: String,
        scheme: PageScheme,
        context: String,
    ) -> impl Stream<Item = T> + 'a
    where
        T: 'a,
        R: DeserializeOwned + PaginatedResponse<T> + 'a,
    {
        self.try_paginate::<T, R>(url, scheme)
            .filter_map(move |item| {
                let item = match item {
                    Ok(item) => Some(item),
                    Err(e) => {
                        warn!("Listing {} stopped early; results are partial: {}", context, e);
                        None
                    }
                };
                future::ready(item)
            })
    }

    /// Collect every item of a collection endpoint
    pub async fn list_all<T, R>(&self, url: String, scheme: PageScheme, context: String) -> Vec<T>
    where
        R: DeserializeOwned + PaginatedResponse<T>,
    {
        self.paginate::<T, R>(url, scheme, context).collect().await
    }

    /// First item of a collection endpoint; requests a single page.
    ///
    /// A failed page is an error, not an empty result.
    pub async fn first_item<T, R>(&self, url: String, scheme: PageScheme) -> Result<Option<T>>
    where
        R: DeserializeOwned + PaginatedResponse<T>,
    {
        let mut items = std::pin::pin!(self.try_paginate::<T, R>(url, scheme));
        items.try_next().await
    }

    /// First item matching `predicate`; stops paging at the match.
    ///
    /// Used for name lookups, so a failed page is an error rather than
    /// "not found".
    pub async fn find_first<T, R, P>(
        &self,
        url: String,
        scheme: PageScheme,
        mut predicate: P,
    ) -> Result<Option<T>>
    where
        R: DeserializeOwned + PaginatedResponse<T>,
        P: FnMut(&T) -> bool,
    {
        let matches = self
            .try_paginate::<T, R>(url, scheme)
            .try_filter(move |item| future::ready(predicate(item)));
        let mut matches = std::pin::pin!(matches);
        matches.try_next().await
    }

    async fn fetch_page<T, R>(&self, url: &str) -> Result<Vec<T>>
    where
        R: DeserializeOwned + PaginatedResponse<T>,
    {
        let page: R = self.get_json(url).await?;
        Ok(page.into_data())
    }
}
