use crate::auth::{AuthClient, ClientCredentials};
use crate::error::HttpError;
use crate::factory::*;
use crate::result::ChevreResult;
use crate::search::*;
use crate::util::{error_for_status, json_or_error, total_count, QueryParams};
use crate::SearchResult;
use async_trait::async_trait;
use futures::lock::Mutex;
use log::Level::Debug;
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use snafu::ResultExt;
use std::sync::Arc;

#[async_trait]
pub trait ChevreClient: Send + Sync {
    async fn search_category_codes(
        &self,
        conditions: &CategoryCodeSearchConditions,
    ) -> ChevreResult<SearchResult<CategoryCode>>;
    async fn create_category_code(&self, category_code: &CategoryCode) -> ChevreResult<CategoryCode>;
    async fn update_category_code(&self, id: &str, category_code: &CategoryCode) -> ChevreResult<()>;

    async fn search_screening_events(
        &self,
        conditions: &EventSearchConditions,
    ) -> ChevreResult<SearchResult<ScreeningEvent>>;
    async fn find_screening_event(&self, id: &str) -> ChevreResult<ScreeningEvent>;
    async fn create_screening_events(
        &self,
        attributes: &[ScreeningEventAttributes],
    ) -> ChevreResult<Vec<ScreeningEvent>>;
    async fn update_screening_event(&self, id: &str, attributes: &ScreeningEventAttributes) -> ChevreResult<()>;

    async fn search_screening_event_series(
        &self,
        conditions: &EventSearchConditions,
    ) -> ChevreResult<SearchResult<ScreeningEventSeries>>;
    async fn find_screening_event_series(&self, id: &str) -> ChevreResult<ScreeningEventSeries>;
    async fn create_screening_event_series(
        &self,
        attributes: &ScreeningEventSeriesAttributes,
    ) -> ChevreResult<ScreeningEventSeries>;
    async fn update_screening_event_series(
        &self,
        id: &str,
        attributes: &ScreeningEventSeriesAttributes,
    ) -> ChevreResult<()>;

    async fn search_movie_theaters(
        &self,
        conditions: &MovieTheaterSearchConditions,
    ) -> ChevreResult<SearchResult<MovieTheater>>;
    /// Unlike search results, the theater returned here carries its screening rooms.
    async fn find_movie_theater(&self, id: &str) -> ChevreResult<MovieTheater>;

    async fn search_movies(&self, conditions: &MovieSearchConditions) -> ChevreResult<SearchResult<Movie>>;

    async fn search_offer_catalogs(
        &self,
        conditions: &OfferCatalogSearchConditions,
    ) -> ChevreResult<SearchResult<OfferCatalog>>;
    async fn find_offer_catalog(&self, id: &str) -> ChevreResult<OfferCatalog>;
    async fn delete_offer_catalog(&self, id: &str) -> ChevreResult<()>;

    async fn search_ticket_types(
        &self,
        conditions: &TicketTypeSearchConditions,
    ) -> ChevreResult<SearchResult<TicketType>>;

    async fn search_orders(&self, conditions: &OrderSearchConditions) -> ChevreResult<SearchResult<Order>>;
    async fn start_return_order(&self, params: &StartReturnOrderParams) -> ChevreResult<ReturnOrderTransaction>;
    async fn confirm_return_order(&self, transaction: &ReturnOrderTransaction) -> ChevreResult<()>;

    fn box_clone(&self) -> Box<dyn ChevreClient>;
}

impl Clone for Box<dyn ChevreClient> {
    fn clone(&self) -> Self {
        self.box_clone()
    }
}

/// Talks to the ticketing API (master data and events) and the order API (orders and returns).
#[derive(Clone)]
pub struct HttpChevreClient {
    chevre_endpoint: String,
    cinerino_endpoint: String,
    http: reqwest::Client,
    auth: Arc<Mutex<AuthClient>>,
}

impl HttpChevreClient {
    pub fn new(chevre_endpoint: &str, cinerino_endpoint: &str, credentials: ClientCredentials) -> HttpChevreClient {
        let http = reqwest::Client::new();
        HttpChevreClient {
            chevre_endpoint: chevre_endpoint.trim_end_matches('/').to_string(),
            cinerino_endpoint: cinerino_endpoint.trim_end_matches('/').to_string(),
            auth: Arc::new(Mutex::new(AuthClient::new(credentials, http.clone()))),
            http,
        }
    }

    fn chevre_url(&self, path: &str) -> String {
        format!("{}/{}", self.chevre_endpoint, path)
    }

    fn cinerino_url(&self, path: &str) -> String {
        format!("{}/{}", self.cinerino_endpoint, path)
    }

    async fn request(&self, method: Method, url: &str) -> ChevreResult<RequestBuilder> {
        let token = self.auth.lock().await.get_token().await?;
        jlog!(Debug, "chevre", "Calling ticketing API", { "method": method.as_str(), "url": url });
        Ok(self.http.request(method, url).bearer_auth(token))
    }

    async fn send(&self, url: &str, request: RequestBuilder) -> ChevreResult<Response> {
        let resp = request.send().await.context(HttpError { url: url.to_string() })?;
        error_for_status(url, resp).await
    }

    async fn search<T: DeserializeOwned>(&self, url: String, query: QueryParams) -> ChevreResult<SearchResult<T>> {
        let request = self.request(Method::GET, &url).await?.query(query.pairs());
        let resp = self.send(&url, request).await?;
        let total = total_count(&resp);
        let data: Vec<T> = json_or_error(resp).await?;
        Ok(SearchResult::new(data, total))
    }

    async fn get<T: DeserializeOwned>(&self, url: String) -> ChevreResult<T> {
        let request = self.request(Method::GET, &url).await?;
        let resp = self.send(&url, request).await?;
        json_or_error(resp).await
    }

    async fn post<B, T>(&self, url: String, body: &B) -> ChevreResult<T>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.request(Method::POST, &url).await?.json(body);
        let resp = self.send(&url, request).await?;
        json_or_error(resp).await
    }

    /// For endpoints answering 204 No Content.
    async fn execute<B>(&self, method: Method, url: String, body: Option<&B>) -> ChevreResult<()>
    where
        B: Serialize + Sync + ?Sized,
    {
        let mut request = self.request(method, &url).await?;
        if let Some(body) = body {
            request = request.json(body);
        }
        self.send(&url, request).await?;
        Ok(())
    }
}

#[async_trait]
impl ChevreClient for HttpChevreClient {
    async fn search_category_codes(
        &self,
        conditions: &CategoryCodeSearchConditions,
    ) -> ChevreResult<SearchResult<CategoryCode>> {
        self.search(self.chevre_url("categoryCodes"), conditions.to_query())
            .await
    }

    async fn create_category_code(&self, category_code: &CategoryCode) -> ChevreResult<CategoryCode> {
        self.post(self.chevre_url("categoryCodes"), category_code).await
    }

    async fn update_category_code(&self, id: &str, category_code: &CategoryCode) -> ChevreResult<()> {
        let url = self.chevre_url(&format!("categoryCodes/{}", id));
        self.execute(Method::PUT, url, Some(category_code)).await
    }

    async fn search_screening_events(
        &self,
        conditions: &EventSearchConditions,
    ) -> ChevreResult<SearchResult<ScreeningEvent>> {
        let mut query = conditions.to_query();
        query.push("typeOf", EventType::ScreeningEvent);
        self.search(self.chevre_url("events"), query).await
    }

    async fn find_screening_event(&self, id: &str) -> ChevreResult<ScreeningEvent> {
        self.get(self.chevre_url(&format!("events/{}", id))).await
    }

    async fn create_screening_events(
        &self,
        attributes: &[ScreeningEventAttributes],
    ) -> ChevreResult<Vec<ScreeningEvent>> {
        self.post(self.chevre_url("events"), attributes).await
    }

    async fn update_screening_event(&self, id: &str, attributes: &ScreeningEventAttributes) -> ChevreResult<()> {
        let url = self.chevre_url(&format!("events/{}", id));
        self.execute(Method::PUT, url, Some(attributes)).await
    }

    async fn search_screening_event_series(
        &self,
        conditions: &EventSearchConditions,
    ) -> ChevreResult<SearchResult<ScreeningEventSeries>> {
        let mut query = conditions.to_query();
        query.push("typeOf", EventType::ScreeningEventSeries);
        self.search(self.chevre_url("events"), query).await
    }

    async fn find_screening_event_series(&self, id: &str) -> ChevreResult<ScreeningEventSeries> {
        self.get(self.chevre_url(&format!("events/{}", id))).await
    }

    async fn create_screening_event_series(
        &self,
        attributes: &ScreeningEventSeriesAttributes,
    ) -> ChevreResult<ScreeningEventSeries> {
        let created: Vec<ScreeningEventSeries> = self
            .post(self.chevre_url("events"), &[attributes])
            .await?;
        created
            .into_iter()
            .next()
            .ok_or_else(|| crate::ChevreError::not_found("ScreeningEventSeries", "created"))
    }

    async fn update_screening_event_series(
        &self,
        id: &str,
        attributes: &ScreeningEventSeriesAttributes,
    ) -> ChevreResult<()> {
        let url = self.chevre_url(&format!("events/{}", id));
        self.execute(Method::PUT, url, Some(attributes)).await
    }

    async fn search_movie_theaters(
        &self,
        conditions: &MovieTheaterSearchConditions,
    ) -> ChevreResult<SearchResult<MovieTheater>> {
        self.search(self.chevre_url("places/movieTheater"), conditions.to_query())
            .await
    }

    async fn find_movie_theater(&self, id: &str) -> ChevreResult<MovieTheater> {
        self.get(self.chevre_url(&format!("places/movieTheater/{}", id)))
            .await
    }

    async fn search_movies(&self, conditions: &MovieSearchConditions) -> ChevreResult<SearchResult<Movie>> {
        self.search(self.chevre_url("creativeWorks/movie"), conditions.to_query())
            .await
    }

    async fn search_offer_catalogs(
        &self,
        conditions: &OfferCatalogSearchConditions,
    ) -> ChevreResult<SearchResult<OfferCatalog>> {
        self.search(self.chevre_url("offerCatalogs"), conditions.to_query())
            .await
    }

    async fn find_offer_catalog(&self, id: &str) -> ChevreResult<OfferCatalog> {
        self.get(self.chevre_url(&format!("offerCatalogs/{}", id))).await
    }

    async fn delete_offer_catalog(&self, id: &str) -> ChevreResult<()> {
        let url = self.chevre_url(&format!("offerCatalogs/{}", id));
        self.execute::<()>(Method::DELETE, url, None).await
    }

    async fn search_ticket_types(
        &self,
        conditions: &TicketTypeSearchConditions,
    ) -> ChevreResult<SearchResult<TicketType>> {
        self.search(self.chevre_url("ticketTypes"), conditions.to_query())
            .await
    }

    async fn search_orders(&self, conditions: &OrderSearchConditions) -> ChevreResult<SearchResult<Order>> {
        self.search(self.cinerino_url("orders"), conditions.to_query())
            .await
    }

    async fn start_return_order(&self, params: &StartReturnOrderParams) -> ChevreResult<ReturnOrderTransaction> {
        self.post(self.cinerino_url("transactions/returnOrder/start"), params)
            .await
    }

    async fn confirm_return_order(&self, transaction: &ReturnOrderTransaction) -> ChevreResult<()> {
        let url = self.cinerino_url(&format!("transactions/returnOrder/{}/confirm", transaction.id));
        self.execute::<()>(Method::PUT, url, None).await
    }

    fn box_clone(&self) -> Box<dyn ChevreClient> {
        Box::new(self.clone())
    }
}
