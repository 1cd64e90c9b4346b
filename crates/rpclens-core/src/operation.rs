//! Operation identity and outcome status.
//!
//! The RPC framework attaches an [`OperationIdentity`] to the request context
//! once routing succeeds and an [`OutcomeStatus`] once a response or error
//! has been produced. The hook sets read both back at completion.

use std::borrow::Cow;

use crate::label::sanitize;

/// Immutable (package, service, method) triple identifying one RPC operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationIdentity {
    /// Proto package (e.g., "billing").
    pub package: String,
    /// Service name within the package (e.g., "Invoices").
    pub service: String,
    /// Method name within the service (e.g., "Create").
    pub method: String,
}

impl OperationIdentity {
    pub fn new(
        package: impl Into<String>,
        service: impl Into<String>,
        method: impl Into<String>,
    ) -> Self {
        Self {
            package: package.into(),
            service: service.into(),
            method: method.into(),
        }
    }

    /// Label-safe projection of the triple, in (package, service, method) order.
    pub fn sanitized(&self) -> [Cow<'_, str>; 3] {
        [
            sanitize(&self.package),
            sanitize(&self.service),
            sanitize(&self.method),
        ]
    }
}

/// How a request finished (stable label set).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeStatus {
    /// Completed successfully.
    Ok,
    /// Canceled by the caller.
    Canceled,
    /// Invalid or malformed argument.
    InvalidArgument,
    /// Deadline expired before completion.
    DeadlineExceeded,
    /// Requested entity not found.
    NotFound,
    /// No route matched the request.
    BadRoute,
    /// Caller not authenticated.
    Unauthenticated,
    /// Quota or rate limit exhausted.
    ResourceExhausted,
    /// Internal server error.
    Internal,
    /// Service temporarily unavailable.
    Unavailable,
}

impl OutcomeStatus {
    /// Label value used in metrics and logs.
    /// Always within `[a-z_]`, so it needs no sanitizing.
    pub fn as_str(self) -> &'static str {
        match self {
            OutcomeStatus::Ok => "ok",
            OutcomeStatus::Canceled => "canceled",
            OutcomeStatus::InvalidArgument => "invalid_argument",
            OutcomeStatus::DeadlineExceeded => "deadline_exceeded",
            OutcomeStatus::NotFound => "not_found",
            OutcomeStatus::BadRoute => "bad_route",
            OutcomeStatus::Unauthenticated => "unauthenticated",
            OutcomeStatus::ResourceExhausted => "resource_exhausted",
            OutcomeStatus::Internal => "internal",
            OutcomeStatus::Unavailable => "unavailable",
        }
    }
}
