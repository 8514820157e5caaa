use std::sync::Arc;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{RequestBuilder, Response};

use crate::auth::{ClientHandle, TokenClientProvider};
use crate::bookmarks::model::Bookmark;
use crate::bookmarks::BookmarkService;
use crate::config::{AccessCodes, AppSettings};
use crate::error::ServiceError;
use crate::logging::ExceptionReporter;

const GET_BOOKMARKS_PATH: &str = "api/GetBookmarks";
const ADD_BOOKMARK_PATH: &str = "api/AddBookmark";
const ACCESS_CONTROL_ALLOW_ORIGIN: &str = "Access-Control-Allow-Origin";

/// Base URL and per-endpoint access codes of the bookmark API.
#[derive(Debug, Clone)]
pub struct BookmarkEndpoints {
    base_url: String,
    codes: AccessCodes,
}

impl BookmarkEndpoints {
    pub fn new(base_url: &str, codes: AccessCodes) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            codes,
        }
    }

    pub fn from_settings(settings: &AppSettings) -> Self {
        Self::new(&settings.api_base_url, settings.access_codes.clone())
    }

    fn list_url(&self) -> String {
        format!("{}/{}", self.base_url, GET_BOOKMARKS_PATH)
    }

    fn by_id_url(&self, id: &str) -> String {
        format!(
            "{}/{}/{}",
            self.base_url,
            GET_BOOKMARKS_PATH,
            urlencoding::encode(id)
        )
    }

    fn add_url(&self) -> String {
        format!("{}/{}", self.base_url, ADD_BOOKMARK_PATH)
    }
}

/// REST client for the bookmark API.
///
/// Public operations never fail: errors are sent to the
/// [`ExceptionReporter`] and the operation returns its empty value.
pub struct BookmarkClient {
    handle: ClientHandle,
    endpoints: BookmarkEndpoints,
    reporter: Arc<ExceptionReporter>,
}

impl BookmarkClient {
    /// Acquire a client handle for the configured application and return a
    /// ready client.
    ///
    /// A failed acquisition is reported and returned; it is not retried.
    pub async fn connect(
        provider: &TokenClientProvider,
        settings: &AppSettings,
        reporter: Arc<ExceptionReporter>,
    ) -> Result<Self, ServiceError> {
        match provider.acquire(&settings.azure_ad_app_client_id).await {
            Ok(handle) => Ok(Self::from_handle(
                handle,
                BookmarkEndpoints::from_settings(settings),
                reporter,
            )),
            Err(e) => {
                reporter.report(&e);
                Err(e)
            }
        }
    }

    pub fn from_handle(
        handle: ClientHandle,
        endpoints: BookmarkEndpoints,
        reporter: Arc<ExceptionReporter>,
    ) -> Self {
        Self {
            handle,
            endpoints,
            reporter,
        }
    }

    /// All bookmarks, or an empty list on failure.
    pub async fn list(&self) -> Vec<Bookmark> {
        self.try_list().await.unwrap_or_else(|e| {
            self.reporter.report(&e);
            Vec::new()
        })
    }

    /// The bookmark with `id`, or `None` when missing or on failure.
    pub async fn get_by_id(&self, id: &str) -> Option<Bookmark> {
        self.try_get_by_id(id)
            .await
            .map_err(|e| self.reporter.report(&e))
            .ok()
    }

    /// Create a bookmark and return the service's confirmation text.
    pub async fn add(&self, bookmark: &Bookmark) -> Option<String> {
        self.try_add(bookmark)
            .await
            .map_err(|e| self.reporter.report(&e))
            .ok()
    }

    async fn try_list(&self) -> Result<Vec<Bookmark>, ServiceError> {
        let request = with_code(
            self.handle.get(&self.endpoints.list_url()),
            self.endpoints.codes.get_bookmarks.as_deref(),
        );
        let resp = send(request.header(ACCEPT, "application/json")).await?;
        Ok(resp.json::<Vec<Bookmark>>().await?)
    }

    async fn try_get_by_id(&self, id: &str) -> Result<Bookmark, ServiceError> {
        let request = with_code(
            self.handle.get(&self.endpoints.by_id_url(id)),
            self.endpoints.codes.get_bookmark_by_id.as_deref(),
        );
        let resp = send(request.header(ACCEPT, "application/json")).await?;
        Ok(resp.json::<Bookmark>().await?)
    }

    async fn try_add(&self, bookmark: &Bookmark) -> Result<String, ServiceError> {
        let body = serde_json::to_vec(bookmark)?;
        let request = with_code(
            self.handle.post(&self.endpoints.add_url()),
            self.endpoints.codes.add_bookmark.as_deref(),
        )
        .header(CONTENT_TYPE, "application/json")
        .header(ACCESS_CONTROL_ALLOW_ORIGIN, "*")
        .header(ACCEPT, "application/json")
        .body(body);

        let resp = send(request).await?;
        Ok(resp.text().await?)
    }
}

#[async_trait]
impl BookmarkService for BookmarkClient {
    async fn add_bookmark(&self, bookmark: &Bookmark) -> Option<String> {
        self.add(bookmark).await
    }

    async fn get_bookmarks(&self) -> Vec<Bookmark> {
        self.list().await
    }

    async fn get_bookmark_by_id(&self, id: &str) -> Option<Bookmark> {
        self.get_by_id(id).await
    }
}

fn with_code(request: RequestBuilder, code: Option<&str>) -> RequestBuilder {
    match code {
        Some(code) => request.query(&[("code", code)]),
        None => request,
    }
}

/// Send a request, turning non-success statuses into `RemoteData` errors.
async fn send(request: RequestBuilder) -> Result<Response, ServiceError> {
    let resp = request.send().await?;

    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(ServiceError::remote(status.as_u16(), &body));
    }

    Ok(resp)
}
