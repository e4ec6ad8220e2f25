//! The five REST operations on the poll collection.

use poll_core::{Poll, PollPayload};

use crate::http::{check_response, read_json};
use crate::{ClientError, PollClient, RequestOptions, ResponseWrapper};

/// Data access for polls.
///
/// Every read converts the expiration from the server's date string to a local
/// date, every write converts it back; other fields pass through unchanged.
pub trait PollResource: Send + Sync {
    /// `POST` a new poll; returns the created poll with its id.
    fn create(&self, poll: &Poll) -> impl Future<Output = Result<Poll, ClientError>> + Send;

    /// `PUT` an existing poll; returns the updated poll.
    fn update(&self, poll: &Poll) -> impl Future<Output = Result<Poll, ClientError>> + Send;

    /// `GET` one poll by id.
    fn find(&self, id: i64) -> impl Future<Output = Result<Poll, ClientError>> + Send;

    /// `GET` a page of polls together with the response headers and status.
    fn query(
        &self,
        options: &RequestOptions,
    ) -> impl Future<Output = Result<ResponseWrapper, ClientError>> + Send;

    /// `DELETE` one poll by id; returns the response status.
    fn delete(&self, id: i64) -> impl Future<Output = Result<u16, ClientError>> + Send;
}

impl PollResource for PollClient {
    async fn create(&self, poll: &Poll) -> Result<Poll, ClientError> {
        if let Some(id) = poll.id {
            return Err(ClientError::InvalidRequest(format!(
                "a new poll cannot already have an id (got {id})"
            )));
        }
        let url = self.resource_url.as_str();
        tracing::debug!(method = "POST", url = %url, "poll request");
        let req = self.authorized(self.http.post(url)).json(&PollPayload::from_poll(poll));
        let resp = check_response(req.send().await?).await?;
        read_poll(resp).await
    }

    async fn update(&self, poll: &Poll) -> Result<Poll, ClientError> {
        let url = self.resource_url.as_str();
        tracing::debug!(method = "PUT", url = %url, id = ?poll.id, "poll request");
        let req = self.authorized(self.http.put(url)).json(&PollPayload::from_poll(poll));
        let resp = check_response(req.send().await?).await?;
        read_poll(resp).await
    }

    async fn find(&self, id: i64) -> Result<Poll, ClientError> {
        let url = self.item_url(id);
        tracing::debug!(method = "GET", url = %url, "poll request");
        let resp = check_response(self.authorized(self.http.get(&url)).send().await?).await?;
        read_poll(resp).await
    }

    async fn query(&self, options: &RequestOptions) -> Result<ResponseWrapper, ClientError> {
        let url = if options.is_empty() {
            self.resource_url.clone()
        } else {
            format!("{}?{}", self.resource_url, options.to_query_string())
        };
        tracing::debug!(method = "GET", url = %url, "poll request");
        let resp = check_response(self.authorized(self.http.get(&url)).send().await?).await?;

        let status = resp.status().as_u16();
        let headers = resp.headers().clone();
        let payloads: Vec<PollPayload> = read_json(resp).await?;
        let body = payloads
            .into_iter()
            .map(PollPayload::into_poll)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ResponseWrapper {
            headers,
            body,
            status,
        })
    }

    async fn delete(&self, id: i64) -> Result<u16, ClientError> {
        let url = self.item_url(id);
        tracing::debug!(method = "DELETE", url = %url, "poll request");
        let resp = check_response(self.authorized(self.http.delete(&url)).send().await?).await?;
        Ok(resp.status().as_u16())
    }
}

async fn read_poll(resp: reqwest::Response) -> Result<Poll, ClientError> {
    let payload: PollPayload = read_json(resp).await?;
    Ok(payload.into_poll()?)
}
