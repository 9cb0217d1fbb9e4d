//! # REST client for the users backend
//!
//! [`ApiClient`] is a thin `reqwest` wrapper: every call is described by an
//! [`Endpoint`], turned into a request against the configured base URL, and
//! its JSON response decoded into the `store` models. Non-success statuses
//! become [`ApiError::Status`] carrying the response body as the message.
//!
//! The client implements [`store::UserDirectory`], which is how the UI uses
//! it. It works unchanged on native targets and in the browser (`wasm32`),
//! where `reqwest` goes through `fetch`.

use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use store::{Interest, InterestId, InterestPayload, NewUser, User, UserDirectory, UserId};

use crate::endpoint::Endpoint;
use crate::error::ApiError;
use crate::settings::Settings;

#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.api.base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Build the request for an endpoint without sending it.
    pub fn build(&self, endpoint: &Endpoint<'_>) -> RequestBuilder {
        let mut builder = self.http.request(endpoint.method(), self.url(&endpoint.path()));
        let query = endpoint.query();
        if !query.is_empty() {
            builder = builder.query(&query);
        }
        match endpoint {
            Endpoint::CreateUser(user) => builder.json(user),
            Endpoint::AddInterest(_, interest_type)
            | Endpoint::CreateInterest(interest_type)
            | Endpoint::UpdateInterest(_, _, interest_type) => {
                builder.json(&InterestPayload::new(*interest_type))
            }
            _ => builder,
        }
    }

    async fn send(&self, endpoint: Endpoint<'_>) -> Result<Response, ApiError> {
        tracing::debug!("{endpoint}");
        let response = self.build(&endpoint).send().await?;
        check_status(response).await
    }

    async fn fetch<T: DeserializeOwned>(&self, endpoint: Endpoint<'_>) -> Result<T, ApiError> {
        let response = self.send(endpoint).await?;
        Ok(response.json::<T>().await?)
    }
}

/// Turn a non-success response into [`ApiError::Status`].
async fn check_status(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    let message = match body.trim() {
        "" => status.canonical_reason().unwrap_or("Request failed").to_string(),
        text => text.to_string(),
    };
    tracing::warn!("Backend returned {status}: {message}");
    Err(ApiError::Status {
        status: status.as_u16(),
        message,
    })
}

impl UserDirectory for ApiClient {
    async fn list_users(&self) -> store::Result<Vec<User>> {
        Ok(self.fetch(Endpoint::ListUsers).await?)
    }

    async fn find_by_interest(&self, interest: &str) -> store::Result<Vec<User>> {
        Ok(self.fetch(Endpoint::ByInterest(interest)).await?)
    }

    async fn find_by_all_interests(&self, interests: &[String]) -> store::Result<Vec<User>> {
        Ok(self.fetch(Endpoint::ByAllInterests(interests)).await?)
    }

    async fn find_by_any_interest(&self, interests: &[String]) -> store::Result<Vec<User>> {
        Ok(self.fetch(Endpoint::ByAnyInterest(interests)).await?)
    }

    async fn create_user(&self, user: &NewUser) -> store::Result<User> {
        Ok(self.fetch(Endpoint::CreateUser(user)).await?)
    }

    async fn delete_user(&self, id: UserId) -> store::Result<()> {
        self.send(Endpoint::DeleteUser(id)).await?;
        Ok(())
    }

    async fn add_interest(&self, user_id: UserId, interest_type: &str) -> store::Result<User> {
        Ok(self.fetch(Endpoint::AddInterest(user_id, interest_type)).await?)
    }

    async fn create_interest(&self, interest_type: &str) -> store::Result<Interest> {
        Ok(self.fetch(Endpoint::CreateInterest(interest_type)).await?)
    }

    async fn update_interest(
        &self,
        user_id: UserId,
        interest_id: InterestId,
        interest_type: &str,
    ) -> store::Result<()> {
        self.send(Endpoint::UpdateInterest(user_id, interest_id, interest_type))
            .await?;
        Ok(())
    }

    async fn remove_interest(&self, user_id: UserId, interest_name: &str) -> store::Result<()> {
        self.send(Endpoint::RemoveInterest(user_id, interest_name))
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ApiClient {
        ApiClient::new("http://localhost:8080/")
    }

    fn body_json(request: &reqwest::Request) -> serde_json::Value {
        let bytes = request.body().and_then(|b| b.as_bytes()).unwrap();
        serde_json::from_slice(bytes).unwrap()
    }

    #[test]
    fn test_base_url_trailing_slash_is_dropped() {
        assert_eq!(client().base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_list_and_single_search() {
        let request = client().build(&Endpoint::ListUsers).build().unwrap();
        assert_eq!(request.method(), reqwest::Method::GET);
        assert_eq!(request.url().as_str(), "http://localhost:8080/users");

        let request = client()
            .build(&Endpoint::ByInterest("board games"))
            .build()
            .unwrap();
        assert_eq!(
            request.url().as_str(),
            "http://localhost:8080/users/search?interest=board+games"
        );
    }

    #[test]
    fn test_multi_term_searches_repeat_the_key() {
        let terms = vec!["reading".to_string(), "running".to_string()];
        let all = client()
            .build(&Endpoint::ByAllInterests(&terms))
            .build()
            .unwrap();
        assert_eq!(all.url().path(), "/users/search/all");
        assert_eq!(all.url().query(), Some("interests=reading&interests=running"));

        let any = client()
            .build(&Endpoint::ByAnyInterest(&terms))
            .build()
            .unwrap();
        assert_eq!(any.url().path(), "/users/search/any");
    }

    #[test]
    fn test_interest_mutations() {
        let update = client()
            .build(&Endpoint::UpdateInterest(3, 9, "chess"))
            .build()
            .unwrap();
        assert_eq!(update.method(), reqwest::Method::PUT);
        assert_eq!(update.url().path(), "/users/3/interests/9");
        assert_eq!(body_json(&update), serde_json::json!({ "interestType": "chess" }));

        let remove = client()
            .build(&Endpoint::RemoveInterest(3, "chess"))
            .build()
            .unwrap();
        assert_eq!(remove.method(), reqwest::Method::DELETE);
        assert_eq!(
            remove.url().as_str(),
            "http://localhost:8080/users/3/interests?interestName=chess"
        );

        let add = client()
            .build(&Endpoint::AddInterest(3, "music"))
            .build()
            .unwrap();
        assert_eq!(add.method(), reqwest::Method::POST);
        assert_eq!(add.url().path(), "/users/3/interests");

        let global = client()
            .build(&Endpoint::CreateInterest("music"))
            .build()
            .unwrap();
        assert_eq!(global.url().path(), "/interests");
        assert_eq!(body_json(&global), serde_json::json!({ "interestType": "music" }));
    }

    #[test]
    fn test_user_mutations() {
        let new_user = NewUser {
            name: "Ann".to_string(),
            email: "ann@x.com".to_string(),
            age: Some(30),
        };
        let create = client()
            .build(&Endpoint::CreateUser(&new_user))
            .build()
            .unwrap();
        assert_eq!(create.method(), reqwest::Method::POST);
        assert_eq!(create.url().path(), "/users");
        assert_eq!(
            body_json(&create),
            serde_json::json!({ "name": "Ann", "email": "ann@x.com", "age": 30 })
        );

        let delete = client().build(&Endpoint::DeleteUser(5)).build().unwrap();
        assert_eq!(delete.method(), reqwest::Method::DELETE);
        assert_eq!(delete.url().path(), "/users/5");
    }

    #[tokio::test]
    async fn test_error_status_carries_body() {
        let response = http::Response::builder()
            .status(409)
            .body("Interest already exists")
            .unwrap();
        let err = check_status(Response::from(response)).await.unwrap_err();
        let err: store::Error = err.into();
        assert_eq!(
            err,
            store::Error::Status {
                status: 409,
                message: "Interest already exists".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_empty_error_body_uses_reason() {
        let response = http::Response::builder().status(404).body("").unwrap();
        let err = check_status(Response::from(response)).await.unwrap_err();
        assert!(matches!(
            err,
            ApiError::Status { status: 404, ref message } if message == "Not Found"
        ));
    }

    #[tokio::test]
    async fn test_bad_json_is_a_decode_error() {
        let response = http::Response::builder().status(200).body("not json").unwrap();
        let err: ApiError = Response::from(response)
            .json::<Vec<User>>()
            .await
            .unwrap_err()
            .into();
        assert!(matches!(store::Error::from(err), store::Error::Decode(_)));
    }

    #[test]
    fn test_transport_error_mapping() {
        let err = reqwest::Client::new().get("not a url").build().unwrap_err();
        let err: store::Error = ApiError::from(err).into();
        assert!(matches!(err, store::Error::Transport(_)));
        assert!(!err.is_validation());
    }
}
