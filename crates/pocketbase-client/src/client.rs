use crate::error::PocketBaseError;
use crate::Result;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

// Page size used by `full_list`. PocketBase caps perPage at 500.
const FULL_LIST_PAGE_SIZE: u32 = 200;

// ---------------------------------------------------------------------------
// ListOptions / ListPage
// ---------------------------------------------------------------------------

/// Query parameters for a records listing.
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    pub sort: Option<String>,
    pub filter: Option<String>,
}

impl ListOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sort expression, e.g. `-created` for newest first.
    pub fn sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    /// Filter expression; see [`crate::filter`] for safe construction.
    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }
}

/// One page of a records listing.
#[derive(Debug, Clone, Deserialize)]
pub struct ListPage<T> {
    pub page: u32,
    #[serde(rename = "perPage")]
    pub per_page: u32,
    #[serde(rename = "totalItems")]
    pub total_items: u64,
    #[serde(rename = "totalPages")]
    pub total_pages: u32,
    pub items: Vec<T>,
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// Handle on one PocketBase instance. Cheap to clone.
#[derive(Debug, Clone)]
pub struct Client {
    base_url: String,
    http: reqwest::Client,
}

impl Client {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn records_url(&self, collection: &str) -> String {
        format!("{}/api/collections/{collection}/records", self.base_url)
    }

    /// Fetch one page of records.
    pub async fn list<T: DeserializeOwned>(
        &self,
        collection: &str,
        opts: &ListOptions,
        page: u32,
        per_page: u32,
    ) -> Result<ListPage<T>> {
        let mut query: Vec<(&str, String)> = vec![
            ("page", page.to_string()),
            ("perPage", per_page.to_string()),
        ];
        if let Some(sort) = &opts.sort {
            query.push(("sort", sort.clone()));
        }
        if let Some(filter) = &opts.filter {
            query.push(("filter", filter.clone()));
        }
        let response = self
            .http
            .get(self.records_url(collection))
            .query(&query)
            .send()
            .await?;
        Ok(decode(response).await?)
    }

    /// Fetch every record matching `opts`, following pagination.
    pub async fn full_list<T: DeserializeOwned>(
        &self,
        collection: &str,
        opts: &ListOptions,
    ) -> Result<Vec<T>> {
        let mut items = Vec::new();
        let mut page = 1;
        loop {
            let batch: ListPage<T> = self
                .list(collection, opts, page, FULL_LIST_PAGE_SIZE)
                .await?;
            let total_pages = batch.total_pages;
            items.extend(batch.items);
            if page >= total_pages {
                return Ok(items);
            }
            page += 1;
        }
    }

    /// Fetch a single record by id.
    pub async fn view<T: DeserializeOwned>(&self, collection: &str, id: &str) -> Result<T> {
        let url = format!("{}/{id}", self.records_url(collection));
        let response = self.http.get(url).send().await?;
        decode(response).await
    }

    /// Create a record and return the server's view of it (id, system
    /// fields included).
    pub async fn create<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        collection: &str,
        body: &B,
    ) -> Result<T> {
        let response = self
            .http
            .post(self.records_url(collection))
            .json(body)
            .send()
            .await?;
        decode(response).await
    }

    /// Partially update a record by id; absent fields are left unchanged by
    /// the server.
    pub async fn update<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        collection: &str,
        id: &str,
        body: &B,
    ) -> Result<T> {
        let url = format!("{}/{id}", self.records_url(collection));
        let response = self.http.patch(url).json(body).send().await?;
        decode(response).await
    }

    /// Delete a record by id.
    pub async fn delete(&self, collection: &str, id: &str) -> Result<()> {
        let url = format!("{}/{id}", self.records_url(collection));
        let response = self.http.delete(url).send().await?;
        check_status(response).await?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Response handling
// ---------------------------------------------------------------------------

/// PocketBase error envelope: `{"code": 400, "message": "...", "data": {}}`.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    message: String,
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = match response.json::<ApiErrorBody>().await {
        Ok(body) if !body.message.is_empty() => body.message,
        _ => status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_string(),
    };
    tracing::debug!(status = status.as_u16(), %message, "pocketbase error response");
    Err(PocketBaseError::Api {
        status: status.as_u16(),
        message,
    })
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let response = check_status(response).await?;
    Ok(response.json::<T>().await?)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
