//! Request routing: validation, dispatch and outcome mapping.

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures_util::FutureExt;
use tracing::{Instrument, debug, error, info_span, warn};

use crate::api::dto::shorten::ShortenResponse;
use crate::application::services::link_allocator::{AllocationPolicy, LinkAllocator};
use crate::domain::entities::{RequestMethod, RoutedRequest};
use crate::domain::repositories::LinkStore;
use crate::error::AppError;
use crate::response::{ResponseBuilder, ResponseRecord};
use crate::utils::id_generator::{AlphanumericGenerator, IdGenerator};
use crate::utils::link_path::extract_link_id;
use crate::utils::url_validation::validate_url;

/// Turns one [`RoutedRequest`] into one [`ResponseRecord`].
///
/// # Transitions
///
/// - `GET /<id>` or `GET /<id>/` - lookup, then 301 to the stored URL
/// - `GET` anything else, or unknown id - 404
/// - `POST` with a scheme-prefixed `URL` - allocate, then 200 `{"UrlId": ...}`
/// - `POST` without a valid URL - 400
/// - any other method - 405, store untouched
/// - store failure, exhausted allocation or panic - 500
///
/// The router holds no per-request state; one instance serves every
/// invocation concurrently.
pub struct RequestRouter<
    S: LinkStore + ?Sized = dyn LinkStore,
    G: IdGenerator = AlphanumericGenerator,
> {
    store: Arc<S>,
    allocator: LinkAllocator<S, G>,
    responses: ResponseBuilder,
}

impl<S: LinkStore + ?Sized> RequestRouter<S> {
    /// Creates a router whose allocator draws random identifiers.
    pub fn new(store: Arc<S>, policy: AllocationPolicy, responses: ResponseBuilder) -> Self {
        let allocator = LinkAllocator::new(store.clone(), policy);
        Self::with_allocator(store, allocator, responses)
    }
}

impl<S: LinkStore + ?Sized, G: IdGenerator> RequestRouter<S, G> {
    /// Creates a router around an existing allocator.
    ///
    /// `store` must be the store the allocator writes to.
    pub fn with_allocator(
        store: Arc<S>,
        allocator: LinkAllocator<S, G>,
        responses: ResponseBuilder,
    ) -> Self {
        Self {
            store,
            allocator,
            responses,
        }
    }

    pub fn responses(&self) -> ResponseBuilder {
        self.responses
    }

    /// Handles one request.
    ///
    /// Never fails: every error, including a panic inside a store backend,
    /// becomes a canned response.
    pub async fn handle(&self, request: RoutedRequest) -> ResponseRecord {
        let span = info_span!(
            "invocation",
            request_id = %request.request_id,
            method = %request.method,
            path = %request.path,
        );

        async move {
            debug!(payload_url = ?request.payload_url, "Event received");

            match AssertUnwindSafe(self.dispatch(&request)).catch_unwind().await {
                Ok(Ok(record)) => record,
                Ok(Err(e)) => self.reject(e),
                Err(panic) => self.reject(panic_error(&*panic)),
            }
        }
        .instrument(span)
        .await
    }

    /// Resolves a read path to its stored URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidPath`] for malformed paths (checked before
    /// the store is read), [`AppError::NotFound`] for unknown ids and
    /// [`AppError::Store`] on backend failures.
    pub async fn resolve(&self, path: &str) -> Result<String, AppError> {
        let id = extract_link_id(path, self.allocator.policy().id_length)?;

        self.store
            .lookup(id)
            .await?
            .ok_or_else(|| AppError::NotFound(id.to_string()))
    }

    /// Validates a submitted URL and allocates an identifier for it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidUrl`] if the URL is missing or has no
    /// scheme (checked before the store is touched) and
    /// [`AppError::Allocate`] if allocation fails.
    pub async fn shorten(&self, url: Option<&str>) -> Result<String, AppError> {
        let url = validate_url(url)?;
        Ok(self.allocator.allocate(url).await?)
    }

    async fn dispatch(&self, request: &RoutedRequest) -> Result<ResponseRecord, AppError> {
        match &request.method {
            RequestMethod::Read => {
                let location = self.resolve(&request.path).await?;
                Ok(self.responses.redirect(&location))
            }
            RequestMethod::Write => {
                let url_id = self.shorten(request.payload_url.as_deref()).await?;
                Ok(self.responses.json(&ShortenResponse { url_id }))
            }
            RequestMethod::Other(method) => Err(AppError::MethodNotAllowed(method.clone())),
        }
    }

    /// Logs a failed request and picks its canned response.
    fn reject(&self, err: AppError) -> ResponseRecord {
        if err.is_client_error() {
            warn!("Error: {}", err);
        } else {
            error!("Error: {}", err);
        }

        self.responses.for_status(err.status_code())
    }
}

fn panic_error(panic: &(dyn Any + Send)) -> AppError {
    AppError::Internal(format!("request handler panicked: {}", panic_message(panic)))
}

fn panic_message(panic: &(dyn Any + Send)) -> &str {
    if let Some(message) = panic.downcast_ref::<&str>() {
        message
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message
    } else {
        "unknown panic"
    }
}
