//! The users collection service.
//!
//! [`UserService`] exposes list, get, update and delete calls against the
//! configured collection, plus an in-memory sort.
//!
//! Every call comes in two flavors:
//!
//! - `try_*` methods return `Result<_, ServiceError>`
//! - plain methods never fail: the error is logged through
//!   [`classify_error`] and an empty page, `None` or `false` is returned
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use gorest_client::{AccessToken, GoRestConfig, SortKey, TracingSink, UserService};
//!
//! let config = GoRestConfig::builder()
//!     .base_url("https://gorest.co.in")
//!     .access_token(AccessToken::new("my-token"))
//!     .build()?;
//! let service = UserService::new(&config, Arc::new(TracingSink));
//!
//! let mut page = service.list_page(3, None).await;
//! service.sort(&mut page.users, Some(SortKey::Name));
//! ```

use std::sync::Arc;

use crate::clients::{HttpClient, HttpMethod, HttpRequest, HttpResponse};
use crate::config::{GoRestConfig, PerPage};
use crate::gorest::{
    sort_users, PageResult, PaginationHeaders, RequestParams, ServiceError, SortKey, User,
    UserUpdate,
};
use crate::logging::{classify_error, Level, LogFields, LogSink};

/// Client for the users collection.
///
/// Holds no state between calls besides the precomputed request shape, so
/// one instance can serve any number of concurrent calls.
///
/// # Thread Safety
///
/// `UserService` is `Send + Sync`.
pub struct UserService {
    http_client: HttpClient,
    sink: Arc<dyn LogSink>,
    pagination_headers: PaginationHeaders,
    default_per_page: PerPage,
    strict_logging: bool,
}

// Verify UserService is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<UserService>();
};

impl std::fmt::Debug for UserService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserService")
            .field("http_client", &self.http_client)
            .field("pagination_headers", &self.pagination_headers)
            .field("default_per_page", &self.default_per_page)
            .field("strict_logging", &self.strict_logging)
            .finish_non_exhaustive()
    }
}

impl UserService {
    /// Creates a service for the configured collection, logging to `sink`.
    ///
    /// # Panics
    ///
    /// Panics if the underlying HTTP client cannot be created. See
    /// [`HttpClient::new`].
    #[must_use]
    pub fn new(config: &GoRestConfig, sink: Arc<dyn LogSink>) -> Self {
        Self {
            http_client: HttpClient::new(config),
            sink,
            pagination_headers: config.pagination_headers().clone(),
            default_per_page: config.default_per_page(),
            strict_logging: config.strict_logging(),
        }
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Returns the sink diagnostics are written to.
    #[must_use]
    pub fn sink(&self) -> &dyn LogSink {
        self.sink.as_ref()
    }

    /// Fetches one page of the collection.
    ///
    /// `per_page` defaults to the configured page size (10 unless set).
    pub async fn list_page(&self, page: u32, per_page: Option<PerPage>) -> PageResult {
        let params = RequestParams::page(page, per_page.unwrap_or(self.default_per_page));
        self.list(Some(&params)).await
    }

    /// Fetches one page of the collection.
    ///
    /// # Errors
    ///
    /// See [`try_list`](Self::try_list).
    pub async fn try_list_page(
        &self,
        page: u32,
        per_page: Option<PerPage>,
    ) -> Result<PageResult, ServiceError> {
        let params = RequestParams::page(page, per_page.unwrap_or(self.default_per_page));
        self.try_list(Some(&params)).await
    }

    /// Lists the collection with optional `page`/`per_page` parameters.
    ///
    /// Returns an empty page without pagination on any failure.
    pub async fn list(&self, params: Option<&RequestParams>) -> PageResult {
        match self.try_list(params).await {
            Ok(result) => result,
            Err(e) => {
                classify_error(&e, &list_label(params), self.sink());
                PageResult::default()
            }
        }
    }

    /// Lists the collection with optional `page`/`per_page` parameters.
    ///
    /// A success response with an empty body yields an empty page without
    /// pagination and a diagnostic.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::NotPositive`] without sending anything for
    /// page 0. Otherwise returns [`ServiceError`] if the request fails or is
    /// rejected, if the pagination headers are partial or non-numeric, or if
    /// the body is not an array of users.
    pub async fn try_list(
        &self,
        params: Option<&RequestParams>,
    ) -> Result<PageResult, ServiceError> {
        if let Some(page) = params.and_then(|p| p.page) {
            ensure_positive(u64::from(page), "list", "page")?;
        }
        let label = list_label(params);
        let mut builder = HttpRequest::builder(HttpMethod::Get, "");
        if let Some(params) = params {
            let query = params.to_query();
            if !query.is_empty() {
                builder = builder.query(query);
            }
        }
        let request = builder.build()?;

        let response = self.send(request).await?;

        if !response.has_body() {
            self.unexpected(
                &label,
                response.code,
                &format!("{label} returned status {} with an empty body", response.code),
            );
            return Ok(PageResult::default());
        }
        self.expect_status(&label, &response, 200);

        let pagination = self.pagination_headers.parse(&response)?;
        let users: Vec<User> =
            serde_json::from_value(response.body).map_err(|source| ServiceError::Decode {
                operation: "list",
                source,
            })?;

        Ok(PageResult { users, pagination })
    }

    /// Fetches a single user.
    ///
    /// Returns `None` when the user does not exist or the call fails.
    pub async fn get(&self, id: u64) -> Option<User> {
        match self.try_get(id).await {
            Ok(user) => user,
            Err(e) => {
                classify_error(&e, &format!("get {id}"), self.sink());
                None
            }
        }
    }

    /// Fetches a single user.
    ///
    /// A success response without a body yields `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::NotPositive`] without sending anything for
    /// id 0. Otherwise returns [`ServiceError`] if the request fails or is
    /// rejected (a 404 included), or if the body is not a user.
    pub async fn try_get(&self, id: u64) -> Result<Option<User>, ServiceError> {
        ensure_positive(id, "get", "id")?;
        let label = format!("get {id}");
        let request = HttpRequest::builder(HttpMethod::Get, id.to_string()).build()?;

        let response = self.send(request).await?;
        self.read_user(&label, "get", response)
    }

    /// Applies a partial update to a user.
    ///
    /// Returns the updated user, or `None` on any failure including an
    /// update without an id.
    pub async fn update(&self, update: &UserUpdate) -> Option<User> {
        match self.try_update(update).await {
            Ok(user) => user,
            Err(e) => {
                classify_error(&e, &update_label(update), self.sink());
                None
            }
        }
    }

    /// Applies a partial update to a user.
    ///
    /// The update is sent as the body of a `PUT` to the user's path.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::MissingId`] or [`ServiceError::NotPositive`]
    /// without sending anything if `update.id` is `None` or 0. Otherwise
    /// fails like [`try_get`](Self::try_get).
    pub async fn try_update(&self, update: &UserUpdate) -> Result<Option<User>, ServiceError> {
        let id = update.id.ok_or(ServiceError::MissingId {
            operation: "update",
        })?;
        ensure_positive(id, "update", "id")?;
        let label = update_label(update);
        let body = serde_json::to_value(update).map_err(|source| ServiceError::Encode {
            operation: "update",
            source,
        })?;
        let request = HttpRequest::builder(HttpMethod::Put, id.to_string())
            .body(body)
            .build()?;

        let response = self.send(request).await?;
        self.read_user(&label, "update", response)
    }

    /// Deletes a user.
    ///
    /// Returns `true` only for a `204 No Content` response.
    pub async fn delete(&self, id: u64) -> bool {
        match self.try_delete(id).await {
            Ok(deleted) => deleted,
            Err(e) => {
                classify_error(&e, &format!("delete {id}"), self.sink());
                false
            }
        }
    }

    /// Deletes a user.
    ///
    /// Any success status other than 204 yields `Ok(false)` and a
    /// diagnostic with the status and body.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::NotPositive`] without sending anything for
    /// id 0. Otherwise returns [`ServiceError`] if the request fails or is
    /// rejected.
    pub async fn try_delete(&self, id: u64) -> Result<bool, ServiceError> {
        ensure_positive(id, "delete", "id")?;
        let label = format!("delete {id}");
        let request = HttpRequest::builder(HttpMethod::Delete, id.to_string()).build()?;

        let response = self.send(request).await?;
        if response.code == 204 {
            return Ok(true);
        }

        self.unexpected(
            &label,
            response.code,
            &format!(
                "{label} returned status {} instead of 204: {}",
                response.code, response.body
            ),
        );
        Ok(false)
    }

    /// Sorts users in place by `key` (default [`SortKey::Id`]).
    ///
    /// The sort is stable and returns the same slice it was given.
    #[allow(clippy::unused_self)]
    pub fn sort<'a>(&self, users: &'a mut [User], key: Option<SortKey>) -> &'a mut [User] {
        sort_users(users, key.unwrap_or_default())
    }

    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ServiceError> {
        let mut line = format!(
            "{} {}",
            request.http_method,
            self.http_client.url_for(&request.path)
        );
        if let Some(query) = &request.query {
            line.push_str(&format!(" query={query:?}"));
        }
        self.sink.debug(&line);

        Ok(self.http_client.request(request).await?)
    }

    fn read_user(
        &self,
        label: &str,
        operation: &'static str,
        response: HttpResponse,
    ) -> Result<Option<User>, ServiceError> {
        if !response.has_body() {
            self.unexpected(
                label,
                response.code,
                &format!("{label} returned status {} with an empty body", response.code),
            );
            return Ok(None);
        }
        self.expect_status(label, &response, 200);

        serde_json::from_value(response.body)
            .map(Some)
            .map_err(|source| ServiceError::Decode { operation, source })
    }

    fn expect_status(&self, label: &str, response: &HttpResponse, expected: u16) {
        if response.code != expected {
            self.unexpected(
                label,
                response.code,
                &format!("{label} returned status {} instead of {expected}", response.code),
            );
        }
    }

    /// Logs a success response that is not the expected one.
    fn unexpected(&self, label: &str, status: u16, message: &str) {
        let level = if self.strict_logging {
            Level::ERROR
        } else {
            Level::WARN
        };
        let fields = LogFields {
            operation: Some(label),
            status: Some(status),
            kind: None,
        };
        self.sink.log_with(level, message, &fields);
    }
}

/// Rejects a zero page number or id before a request is built.
fn ensure_positive(
    value: u64,
    operation: &'static str,
    field: &'static str,
) -> Result<(), ServiceError> {
    if value == 0 {
        return Err(ServiceError::NotPositive { operation, field });
    }
    Ok(())
}

fn list_label(params: Option<&RequestParams>) -> String {
    match params.and_then(|p| p.page) {
        Some(page) => format!("list page {page}"),
        None => "list".to_string(),
    }
}

fn update_label(update: &UserUpdate) -> String {
    update
        .id
        .map_or_else(|| "update".to_string(), |id| format!("update {id}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AccessToken;
    use crate::logging::{Level, MemorySink};

    fn service_with(sink: Arc<MemorySink>, strict: bool) -> UserService {
        let config = GoRestConfig::builder()
            .base_url("http://localhost:1")
            .access_token(AccessToken::new("secret-token"))
            .strict_logging(strict)
            .build()
            .unwrap();
        UserService::new(&config, sink)
    }

    fn user(id: u64, name: &str) -> User {
        User {
            id,
            name: name.to_string(),
            ..User::default()
        }
    }

    #[test]
    fn test_sort_defaults_to_id() {
        let service = service_with(Arc::new(MemorySink::new()), false);
        let mut users = vec![user(3, "c"), user(1, "a"), user(2, "b")];

        let sorted = service.sort(&mut users, None);

        let ids: Vec<u64> = sorted.iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_sort_empty_slice() {
        let service = service_with(Arc::new(MemorySink::new()), false);
        let mut users: Vec<User> = Vec::new();
        assert!(service.sort(&mut users, Some(SortKey::Email)).is_empty());
    }

    #[test]
    fn test_sort_is_idempotent() {
        let service = service_with(Arc::new(MemorySink::new()), false);
        let mut users = vec![user(2, "Zed"), user(1, "Amy"), user(3, "Amy")];

        service.sort(&mut users, Some(SortKey::Name));
        let once = users.clone();
        service.sort(&mut users, Some(SortKey::Name));

        assert_eq!(users, once);
    }

    #[test]
    fn test_unexpected_uses_warn_when_lenient() {
        let sink = Arc::new(MemorySink::new());
        let service = service_with(sink.clone(), false);

        service.unexpected("get 1", 201, "odd");

        assert_eq!(sink.messages_at(Level::WARN), vec!["odd"]);
        assert!(sink.messages_at(Level::ERROR).is_empty());

        let record = &sink.records()[0];
        assert_eq!(record.operation.as_deref(), Some("get 1"));
        assert_eq!(record.status, Some(201));
        assert_eq!(record.kind, None);
    }

    #[test]
    fn test_unexpected_uses_error_when_strict() {
        let sink = Arc::new(MemorySink::new());
        let service = service_with(sink.clone(), true);

        service.unexpected("delete 1", 200, "odd");

        assert_eq!(sink.messages_at(Level::ERROR), vec!["odd"]);
    }

    #[test]
    fn test_debug_output_hides_token() {
        let service = service_with(Arc::new(MemorySink::new()), false);
        let debug_str = format!("{service:?}");
        assert!(debug_str.contains("UserService"));
        assert!(!debug_str.contains("secret-token"));
    }

    #[test]
    fn test_labels() {
        assert_eq!(list_label(None), "list");
        assert_eq!(
            list_label(Some(&RequestParams::page(3, PerPage::default()))),
            "list page 3"
        );
        assert_eq!(update_label(&UserUpdate::new(7)), "update 7");
        assert_eq!(update_label(&UserUpdate::default()), "update");
    }

    #[test]
    fn test_update_without_id_sends_nothing() {
        let sink = Arc::new(MemorySink::new());
        let service = service_with(sink.clone(), false);

        let result = tokio_test::block_on(service.try_update(&UserUpdate::default().name("x")));

        assert!(matches!(
            result,
            Err(ServiceError::MissingId {
                operation: "update"
            })
        ));
        assert!(sink.entries().is_empty());
    }

    #[test]
    fn test_zero_ids_and_pages_send_nothing() {
        let sink = Arc::new(MemorySink::new());
        let service = service_with(sink.clone(), false);

        let get = tokio_test::block_on(service.try_get(0));
        assert!(matches!(
            get,
            Err(ServiceError::NotPositive {
                operation: "get",
                field: "id"
            })
        ));

        let update = tokio_test::block_on(service.try_update(&UserUpdate::new(0).name("x")));
        assert!(matches!(
            update,
            Err(ServiceError::NotPositive {
                operation: "update",
                field: "id"
            })
        ));

        let delete = tokio_test::block_on(service.try_delete(0));
        assert!(matches!(
            delete,
            Err(ServiceError::NotPositive {
                operation: "delete",
                field: "id"
            })
        ));

        let page = tokio_test::block_on(service.try_list_page(0, None));
        assert!(matches!(
            page,
            Err(ServiceError::NotPositive {
                operation: "list",
                field: "page"
            })
        ));

        assert!(sink.entries().is_empty());
    }

    #[test]
    fn test_ensure_positive() {
        assert!(ensure_positive(1, "get", "id").is_ok());
        assert!(ensure_positive(0, "get", "id").is_err());
    }
}
