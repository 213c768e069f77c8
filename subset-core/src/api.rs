//! The data API consumed by the form: dataset list, dataset time range and
//! country list.

use crate::catalog::{CountryOption, DatasetOption};
use crate::error::Result;
use crate::months::TimeRange;

#[cfg(feature = "http")]
use crate::error::SubsetError;
#[cfg(feature = "http")]
use log::debug;
#[cfg(feature = "http")]
use reqwest::{Client, StatusCode, Url};

/// The three GET requests the form issues.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum ApiRequest {
    GetDatasets,
    GetTimes { dataset: String },
    GetCountries,
}

impl ApiRequest {
    pub fn name(&self) -> &'static str {
        match self {
            ApiRequest::GetDatasets => "GETDATASETS",
            ApiRequest::GetTimes { .. } => "GETTIMES",
            ApiRequest::GetCountries => "GETCOUNTRIES",
        }
    }

    /// Query parameters, e.g. `REQUEST=GETTIMES&DATASET=<id>`.
    pub fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        let mut pairs = vec![("REQUEST", self.name())];
        if let ApiRequest::GetTimes { dataset } = self {
            pairs.push(("DATASET", dataset.as_str()));
        }
        pairs
    }
}

/// Source of the listings that populate the form.
///
/// Implementations report a non-success GETTIMES status as
/// [`SubsetError::Unavailable`](crate::error::SubsetError::Unavailable) and
/// network failures as `Transport`.
#[allow(async_fn_in_trait)]
pub trait DataApi {
    /// Datasets in display order. An empty list means none are loaded yet.
    async fn datasets(&self) -> Result<Vec<DatasetOption>>;

    /// Available time extent of one dataset.
    async fn times(&self, dataset: &str) -> Result<TimeRange>;

    /// Countries sorted by name.
    async fn countries(&self) -> Result<Vec<CountryOption>>;
}

/// reqwest binding of [`DataApi`]. Works natively and in the browser, where
/// reqwest goes through `fetch`.
#[cfg(feature = "http")]
#[derive(Clone, Debug)]
pub struct HttpDataApi {
    client: Client,
    endpoint: Url,
}

#[cfg(feature = "http")]
impl HttpDataApi {
    /// `page_url` is the absolute URL of the page hosting the form; `endpoint`
    /// is resolved against it the way a relative link would be.
    pub fn new(page_url: &str, endpoint: &str) -> Result<Self> {
        let base = Url::parse(page_url).map_err(|e| SubsetError::InvalidUrl(e.to_string()))?;
        let endpoint = base
            .join(endpoint)
            .map_err(|e| SubsetError::InvalidUrl(e.to_string()))?;
        Ok(HttpDataApi {
            client: Client::new(),
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Issue one GET. Returns the status alongside the body so callers can
    /// decide what a non-success status means for their request.
    async fn get(&self, request: &ApiRequest) -> Result<(StatusCode, String)> {
        debug!("GET {} {:?}", self.endpoint, request.query_pairs());
        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&request.query_pairs())
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;
        Ok((status, body))
    }

    async fn get_ok(&self, request: &ApiRequest) -> Result<String> {
        let (status, body) = self.get(request).await?;
        if status != StatusCode::OK {
            return Err(SubsetError::Status {
                request: request.name().to_string(),
                status: status.as_u16(),
            });
        }
        Ok(body)
    }
}

#[cfg(feature = "http")]
impl DataApi for HttpDataApi {
    async fn datasets(&self) -> Result<Vec<DatasetOption>> {
        let body = self.get_ok(&ApiRequest::GetDatasets).await?;
        DatasetOption::parse_list(&body)
    }

    async fn times(&self, dataset: &str) -> Result<TimeRange> {
        let request = ApiRequest::GetTimes {
            dataset: dataset.to_string(),
        };
        let (status, body) = self.get(&request).await?;
        if status != StatusCode::OK {
            return Err(SubsetError::Unavailable {
                dataset: dataset.to_string(),
                status: status.as_u16(),
            });
        }
        TimeRange::from_json(&body)
    }

    async fn countries(&self) -> Result<Vec<CountryOption>> {
        let body = self.get_ok(&ApiRequest::GetCountries).await?;
        CountryOption::parse_list(&body)
    }
}
