//! Fetch worker executing provider requests off the event loop.
//!
//! The worker runs each [`FetchRequest`] as its own Tokio task and sends the
//! [`FetchResponse`] back over an unbounded channel. Requests are
//! fire-and-forget: nothing is cancelled, and the event loop decides on
//! arrival whether a response still applies.

use crate::provider::{MovieProvider, SearchQuery};
use crate::worker::{FetchRequest, FetchResponse};
use crate::Config;
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;
use tracing::Instrument;
use tracing_opentelemetry::OpenTelemetrySpanExt;

/// Home feed queries resolved from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedQueries {
    pub popular: SearchQuery,
    pub trending: SearchQuery,
}

impl FeedQueries {
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            popular: SearchQuery::new(config.popular_query.clone(), 1),
            trending: SearchQuery::new(config.trending_query.clone(), 1)
                .with_year(config.trending_year),
        }
    }
}

/// Dispatches fetch requests onto the Tokio runtime.
#[derive(Clone)]
pub struct FetchWorker {
    provider: Arc<dyn MovieProvider>,
    feeds: FeedQueries,
    sender: UnboundedSender<FetchResponse>,
}

impl FetchWorker {
    #[must_use]
    pub fn new(
        provider: Arc<dyn MovieProvider>,
        feeds: FeedQueries,
        sender: UnboundedSender<FetchResponse>,
    ) -> Self {
        Self {
            provider,
            feeds,
            sender,
        }
    }

    /// Spawns `request` on the current runtime.
    ///
    /// The response is delivered on the worker's channel. If the receiving
    /// side has gone away the response is dropped.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub fn dispatch(&self, request: FetchRequest) {
        let worker = self.clone();
        tokio::spawn(async move {
            let response = worker.handle_request(request).await;
            if worker.sender.send(response).is_err() {
                tracing::debug!("event loop closed, dropping fetch response");
            }
        });
    }

    /// Runs one request to completion and converts the outcome to a response.
    ///
    /// Provider failures become [`FetchResponse::Failed`] carrying the
    /// original request, so the event loop can offer a retry.
    pub async fn handle_request(&self, request: FetchRequest) -> FetchResponse {
        let span = tracing::debug_span!("fetch_request", kind = request.label());
        if let Some(parent) = parent_trace_context(&request) {
            span.set_parent(parent);
        }

        async {
            let result = match &request {
                FetchRequest::Search { term, page, .. } => {
                    let query = SearchQuery::new(term.clone(), *page);
                    self.provider.search(&query).await.map(|page_data| FetchResponse::SearchPage {
                        term: term.clone(),
                        page: *page,
                        total: page_data.total_results,
                        items: page_data.items,
                    })
                }
                FetchRequest::Popular { .. } => self
                    .provider
                    .search(&self.feeds.popular)
                    .await
                    .map(|page| FetchResponse::Popular { items: page.items }),
                FetchRequest::Trending { .. } => self
                    .provider
                    .search(&self.feeds.trending)
                    .await
                    .map(|page| FetchResponse::Trending { items: page.items }),
                FetchRequest::Details { id, .. } => self
                    .provider
                    .details(id)
                    .await
                    .map(|details| FetchResponse::Details { details }),
            };

            match result {
                Ok(response) => {
                    tracing::debug!("fetch succeeded");
                    response
                }
                Err(e) => {
                    tracing::warn!(error = %e, retryable = e.is_retryable(), "fetch failed");
                    FetchResponse::Failed {
                        message: e.to_string(),
                        request,
                    }
                }
            }
        }
        .instrument(span)
        .await
    }
}

impl std::fmt::Debug for FetchWorker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchWorker")
            .field("feeds", &self.feeds)
            .finish_non_exhaustive()
    }
}

/// Rebuilds the OpenTelemetry context captured when the request was built.
fn parent_trace_context(request: &FetchRequest) -> Option<opentelemetry::Context> {
    use opentelemetry::trace::{SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState};

    let trace_context = request.trace_context()?;

    let trace_id = TraceId::from_hex(&trace_context.trace_id).ok()?;
    let span_id = SpanId::from_hex(&trace_context.parent_span_id).ok()?;

    let span_context = SpanContext::new(
        trace_id,
        span_id,
        TraceFlags::SAMPLED,
        true,
        TraceState::default(),
    );

    Some(opentelemetry::Context::current().with_remote_span_context(span_context))
}
