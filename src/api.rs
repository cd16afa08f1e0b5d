use crate::errors::ApiError;
use crate::models::DayInfo;
use reqwest::{Client, Response, Url};
use std::future::Future;

/// Remote calls the day screen depends on.
pub trait HabitsApi: Send + Sync {
    fn fetch_day(&self, date: &str) -> impl Future<Output = Result<DayInfo, ApiError>> + Send;

    fn toggle_habit(&self, habit_id: &str) -> impl Future<Output = Result<(), ApiError>> + Send;

    fn delete_habit(&self, habit_id: &str) -> impl Future<Output = Result<(), ApiError>> + Send;
}

/// Thin reqwest client over the habits REST service.
#[derive(Debug, Clone)]
pub struct HttpHabitsApi {
    base_url: Url,
    http: Client,
}

impl HttpHabitsApi {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let base_url = Url::parse(base_url)
            .map_err(|err| ApiError::Config(format!("invalid habits api url {base_url}: {err}")))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::Config(format!(
                "habits api url {base_url} cannot carry a path"
            )));
        }

        let http = Client::builder().build()?;
        Ok(Self { base_url, http })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::Config(format!("cannot extend {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

impl HabitsApi for HttpHabitsApi {
    async fn fetch_day(&self, date: &str) -> Result<DayInfo, ApiError> {
        let url = self.endpoint(&["day"])?;
        let response = self.http.get(url).query(&[("date", date)]).send().await?;
        let bytes = ensure_success(response).await?.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn toggle_habit(&self, habit_id: &str) -> Result<(), ApiError> {
        let url = self.endpoint(&["habits", habit_id, "toggle"])?;
        let response = self.http.patch(url).send().await?;
        ensure_success(response).await?;
        Ok(())
    }

    async fn delete_habit(&self, habit_id: &str) -> Result<(), ApiError> {
        let url = self.endpoint(&["habits", habit_id])?;
        let response = self.http.delete(url).send().await?;
        ensure_success(response).await?;
        Ok(())
    }
}

async fn ensure_success(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(ApiError::Status {
        status: status.as_u16(),
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_extend_the_base_path() {
        let api = HttpHabitsApi::new("http://habits.local/api/").unwrap();
        let toggle = api.endpoint(&["habits", "a1", "toggle"]).unwrap();
        assert_eq!(toggle.as_str(), "http://habits.local/api/habits/a1/toggle");

        let api = HttpHabitsApi::new("http://localhost:3333").unwrap();
        let day = api.endpoint(&["day"]).unwrap();
        assert_eq!(day.as_str(), "http://localhost:3333/day");
    }

    #[test]
    fn habit_ids_are_escaped_as_one_segment() {
        let api = HttpHabitsApi::new("http://localhost:3333").unwrap();
        let url = api.endpoint(&["habits", "a/b c"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:3333/habits/a%2Fb%20c");
    }

    #[test]
    fn rejects_unusable_base_urls() {
        assert!(matches!(
            HttpHabitsApi::new("not a url"),
            Err(ApiError::Config(_))
        ));
        assert!(matches!(
            HttpHabitsApi::new("mailto:someone@example.com"),
            Err(ApiError::Config(_))
        ));
    }
}
