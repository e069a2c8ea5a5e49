//! Paginated stream for lazy iteration over API results.
//!
//! PayPal list endpoints return a page of items plus HATEOAS links. The
//! [`PaginatedStream`] yields the items one by one and follows the
//! `rel="next"` link when a page is exhausted.

use std::collections::VecDeque;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use futures_util::Stream;
use reqwest::Method;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::http::{resolve_url, ApiRequest};
use super::ClientInner;
use crate::models::Page;
use crate::{Error, Result};

/// Type alias for a boxed future used internally.
type BoxFuture<'a, T> = Pin<Box<dyn std::future::Future<Output = T> + Send + 'a>>;

type FetchPage<T> = Box<dyn Fn(Option<String>) -> BoxFuture<'static, Result<Page<T>>> + Send + Sync>;

enum Cursor {
    First,
    Next(String),
    Done,
}

/// A stream that lazily fetches pages from a paginated API endpoint.
///
/// This stream yields individual items from each page, automatically
/// fetching the next page when the current one is exhausted. After an error
/// is yielded the stream ends.
///
/// # Example
///
/// ```no_run
/// use futures_util::StreamExt;
/// use paypal_rs::models::DisputesQuery;
///
/// # async fn example(client: paypal_rs::PayPalClient) -> paypal_rs::Result<()> {
/// let mut stream = client.disputes().list_stream(DisputesQuery::default().page_size(20));
///
/// while let Some(result) = stream.next().await {
///     let dispute = result?;
///     println!("{} {:?}", dispute.dispute_id, dispute.status);
/// }
/// # Ok(())
/// # }
/// ```
pub struct PaginatedStream<T> {
    /// Fetches the first page for `None`, otherwise the page at the link.
    fetch_page: FetchPage<T>,
    current_items: VecDeque<T>,
    cursor: Cursor,
    pending_fetch: Option<BoxFuture<'static, Result<Page<T>>>>,
}

impl<T> PaginatedStream<T>
where
    T: DeserializeOwned + Send + 'static,
{
    /// Create a new paginated stream.
    ///
    /// `fetch_page` receives `None` for the first page and the `next` link
    /// of the previous page afterwards.
    pub fn new<F>(fetch_page: F) -> Self
    where
        F: Fn(Option<String>) -> BoxFuture<'static, Result<Page<T>>> + Send + Sync + 'static,
    {
        Self {
            fetch_page: Box::new(fetch_page),
            current_items: VecDeque::new(),
            cursor: Cursor::First,
            pending_fetch: None,
        }
    }
}

impl<T> Stream for PaginatedStream<T> {
    type Item = Result<T>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = &mut *self;

        loop {
            if let Some(item) = this.current_items.pop_front() {
                return Poll::Ready(Some(Ok(item)));
            }

            if let Some(ref mut fut) = this.pending_fetch {
                match fut.as_mut().poll(cx) {
                    Poll::Ready(Ok(page)) => {
                        this.pending_fetch = None;
                        this.cursor = match page.next_link() {
                            Some(link) => Cursor::Next(link.to_string()),
                            None => Cursor::Done,
                        };
                        this.current_items = page.items.into();

                        if !this.current_items.is_empty() {
                            continue;
                        }

                        // An empty page ends the listing even if it links onward
                        this.cursor = Cursor::Done;
                        return Poll::Ready(None);
                    }
                    Poll::Ready(Err(e)) => {
                        this.pending_fetch = None;
                        this.cursor = Cursor::Done;
                        return Poll::Ready(Some(Err(e)));
                    }
                    Poll::Pending => {
                        return Poll::Pending;
                    }
                }
            }

            let link = match std::mem::replace(&mut this.cursor, Cursor::Done) {
                Cursor::First => None,
                Cursor::Next(link) => Some(link),
                Cursor::Done => return Poll::Ready(None),
            };
            this.pending_fetch = Some((this.fetch_page)(link));
        }
    }
}

impl<T> Unpin for PaginatedStream<T> {}

/// Builder for creating paginated streams with query parameters.
pub(crate) struct PaginatedStreamBuilder<T> {
    inner: Arc<ClientInner>,
    path: String,
    _marker: std::marker::PhantomData<T>,
}

impl<T: DeserializeOwned + Send + 'static> PaginatedStreamBuilder<T> {
    /// Create a new builder.
    pub(crate) fn new(inner: Arc<ClientInner>, path: impl Into<String>) -> Self {
        Self {
            inner,
            path: path.into(),
            _marker: std::marker::PhantomData,
        }
    }

    /// Build the stream. `query` only applies to the first page; `next`
    /// links already carry the query of the listing.
    pub(crate) fn build_with_query<Q>(self, query: Q) -> PaginatedStream<T>
    where
        Q: serde::Serialize + Clone + Send + Sync + 'static,
    {
        let inner = self.inner;
        let path = self.path;

        PaginatedStream::new(move |link: Option<String>| {
            let inner = inner.clone();
            let path = path.clone();
            let query = query.clone();

            Box::pin(async move {
                match link {
                    Some(link) => {
                        let url = match resolve_url(&inner.base_url, &link) {
                            Ok(url) => url,
                            Err(e) => return Err(Error::from(e)),
                        };
                        // The bearer token only goes to the API host
                        if url.origin() != inner.base_url.origin() {
                            warn!(link = %link, "next link points to another host");
                            return Err(Error::InvalidInput(format!(
                                "Next page link is outside the API host: {}",
                                link
                            )));
                        }
                        debug!(link = %link, "fetching next page");
                        ApiRequest::new(inner, Method::GET, url.as_str()).send().await
                    }
                    None => {
                        ApiRequest::new(inner, Method::GET, &path)
                            .query(&query)
                            .send()
                            .await
                    }
                }
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Link;
    use futures_util::StreamExt;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn page(items: Vec<u32>, next: Option<&str>) -> Page<u32> {
        Page {
            items,
            total_items: None,
            total_pages: None,
            links: next
                .map(|href| {
                    vec![Link {
                        href: href.to_string(),
                        rel: "next".to_string(),
                        method: Some("GET".to_string()),
                        description: None,
                        enctype: None,
                    }]
                })
                .unwrap_or_default(),
        }
    }

    #[tokio::test]
    async fn test_follows_next_links() {
        let stream = PaginatedStream::new(|link: Option<String>| {
            Box::pin(async move {
                Ok(match link.as_deref() {
                    None => page(vec![1, 2], Some("https://example.test/p2")),
                    Some("https://example.test/p2") => page(vec![3], Some("https://example.test/p3")),
                    Some(_) => page(vec![4], None),
                })
            })
        });

        let items: Vec<u32> = stream.map(|r| r.unwrap()).collect().await;
        assert_eq!(items, vec![1, 2, 3, 4]);
    }

    #[tokio::test]
    async fn test_error_ends_stream() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();

        let stream = PaginatedStream::new(move |link: Option<String>| {
            counter.fetch_add(1, Ordering::SeqCst);
            Box::pin(async move {
                match link {
                    None => Ok(page(vec![1], Some("https://example.test/p2"))),
                    Some(_) => Err(crate::Error::InvalidInput("boom".into())),
                }
            })
        });

        let results: Vec<Result<u32>> = stream.collect().await;
        assert_eq!(results.len(), 2);
        assert!(results[0].is_ok());
        assert!(results[1].is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_empty_first_page() {
        let stream = PaginatedStream::<u32>::new(|_| Box::pin(async { Ok(page(vec![], None)) }));
        let items: Vec<Result<u32>> = stream.collect().await;
        assert!(items.is_empty());
    }
}
