use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::json;

type SdkResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: i32,
    pub name: String,
    pub email: String,
}

/// Result of a successful create.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Created {
    pub id: i32,
    /// Value of the `Location` header, e.g. `/contacts/11`.
    pub location: Option<String>,
}

#[derive(Deserialize)]
struct CreatedBody {
    id: i32,
}

pub struct ContactsClient {
    client: Client,
    base_url: String,
}

impl ContactsClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Use a preconfigured `reqwest` client (timeouts, proxy settings).
    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub async fn hello(&self) -> SdkResult<String> {
        let resp = self.client.get(format!("{}/hello", self.base_url)).send().await?;
        Ok(expect_success(resp).await?.text().await?)
    }

    pub async fn hello_name(&self, name: &str, number: i32) -> SdkResult<String> {
        let resp = self.client
            .get(format!("{}/hello/{}/{}", self.base_url, name, number))
            .send()
            .await?;
        Ok(expect_success(resp).await?.text().await?)
    }

    pub async fn list(&self) -> SdkResult<Vec<Contact>> {
        let resp = self.client.get(format!("{}/contacts", self.base_url)).send().await?;
        Ok(expect_success(resp).await?.json().await?)
    }

    /// `None` when the service answers 404.
    pub async fn get(&self, id: i32) -> SdkResult<Option<Contact>> {
        let resp = self.client
            .get(format!("{}/contacts/{}", self.base_url, id))
            .send()
            .await?;
        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        Ok(Some(expect_success(resp).await?.json().await?))
    }

    pub async fn create(&self, name: &str, email: &str) -> SdkResult<Created> {
        let resp = self.client
            .post(format!("{}/contacts", self.base_url))
            .json(&json!({ "name": name, "email": email }))
            .send()
            .await?;
        let resp = expect_success(resp).await?;

        let location = resp
            .headers()
            .get(reqwest::header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body: CreatedBody = resp.json().await?;
        Ok(Created { id: body.id, location })
    }

    /// `None` when no contact has the given id.
    pub async fn update(&self, id: i32, name: &str, email: &str) -> SdkResult<Option<Contact>> {
        let resp = self.client
            .put(format!("{}/contacts/{}", self.base_url, id))
            .json(&json!({ "name": name, "email": email }))
            .send()
            .await?;
        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        Ok(Some(expect_success(resp).await?.json().await?))
    }

    /// `false` when no contact had the given id.
    pub async fn delete(&self, id: i32) -> SdkResult<bool> {
        let resp = self.client
            .delete(format!("{}/contacts/{}", self.base_url, id))
            .send()
            .await?;
        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(false);
        }
        expect_success(resp).await?;
        Ok(true)
    }
}

async fn expect_success(resp: Response) -> SdkResult<Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let text = resp.text().await.unwrap_or_default();
    Err(format!("Service returned error status {}: {}", status, text).into())
}
