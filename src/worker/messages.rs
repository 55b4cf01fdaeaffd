//! Fetch request and response types.
//!
//! This module defines the protocol between the application event loop and
//! the fetch worker. Every request records enough of its origin (search term
//! and page, or title id) for the response to be matched against the current
//! state when it arrives, and carries the OpenTelemetry context of the span
//! that issued it so worker spans join the same trace.

use crate::domain::{MovieDetails, MovieSummary};

/// Distributed tracing context for cross-task span propagation.
///
/// Captures the current trace and span IDs from OpenTelemetry to maintain
/// trace continuity when a request is handed to a spawned fetch task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceContext {
    /// OpenTelemetry trace ID as a hex string.
    pub trace_id: String,

    /// Parent span ID for linking spans across tasks.
    pub parent_span_id: String,
}

impl TraceContext {
    /// Creates a trace context from the current tracing span.
    ///
    /// Returns `None` if the current span has no valid OpenTelemetry context,
    /// which is the case whenever tracing is not initialized.
    pub fn from_current() -> Option<Self> {
        use opentelemetry::trace::TraceContextExt;
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let span = tracing::Span::current();

        let otel_context = span.context();
        let span_ref = otel_context.span();
        let span_context = span_ref.span_context();

        if span_context.is_valid() {
            Some(Self {
                trace_id: format!("{:032x}", span_context.trace_id()),
                parent_span_id: format!("{:016x}", span_context.span_id()),
            })
        } else {
            None
        }
    }
}

/// Generates constructors that attach the current trace context.
macro_rules! fetch_request_builders {
    (
        $(
            $builder_name:ident($variant:ident { $($field:ident: $ty:ty),* $(,)? })
        ),* $(,)?
    ) => {
        impl FetchRequest {
            $(
                #[doc = concat!("Create a ", stringify!($variant), " request with current trace context")]
                #[must_use]
                pub fn $builder_name($($field: $ty),*) -> Self {
                    Self::$variant {
                        $($field,)*
                        trace_context: TraceContext::from_current(),
                    }
                }
            )*
        }
    };
}

fetch_request_builders! {
    search(Search { term: String, page: u32 }),
    popular(Popular {}),
    trending(Trending {}),
    details(Details { id: String }),
}

/// Requests issued by the event loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchRequest {
    /// One page of results for a user search.
    Search {
        term: String,
        page: u32,
        trace_context: Option<TraceContext>,
    },

    /// First page of the configured popular query.
    Popular { trace_context: Option<TraceContext> },

    /// First page of the configured trending query.
    Trending { trace_context: Option<TraceContext> },

    /// Extended record for one title.
    Details {
        id: String,
        trace_context: Option<TraceContext>,
    },
}

impl FetchRequest {
    /// Trace context captured when the request was built.
    #[must_use]
    pub const fn trace_context(&self) -> Option<&TraceContext> {
        match self {
            Self::Search { trace_context, .. }
            | Self::Popular { trace_context }
            | Self::Trending { trace_context }
            | Self::Details { trace_context, .. } => trace_context.as_ref(),
        }
    }

    /// Short label for logs and error messages.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Search { .. } => "search",
            Self::Popular { .. } => "popular",
            Self::Trending { .. } => "trending",
            Self::Details { .. } => "details",
        }
    }
}

/// Results delivered back to the event loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchResponse {
    /// A search page for `term`.
    SearchPage {
        term: String,
        page: u32,
        items: Vec<MovieSummary>,
        /// Total matches reported for the term.
        total: usize,
    },

    /// The popular feed.
    Popular { items: Vec<MovieSummary> },

    /// The trending feed.
    Trending { items: Vec<MovieSummary> },

    /// Details for one title.
    Details { details: MovieDetails },

    /// The request failed; `message` is shown to the user.
    Failed {
        request: FetchRequest,
        message: String,
    },
}
