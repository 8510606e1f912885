use crate::chevre_client::ChevreClient;
use crate::error::ChevreError;
use crate::factory::*;
use crate::result::ChevreResult;
use crate::search::*;
use crate::SearchResult;
use async_trait::async_trait;
use reqwest::StatusCode;
use std::sync::{Arc, Mutex, MutexGuard};
use uuid::Uuid;

#[derive(Default)]
struct TestStore {
    unavailable: bool,
    category_codes: Vec<CategoryCode>,
    screening_events: Vec<ScreeningEvent>,
    screening_event_series: Vec<ScreeningEventSeries>,
    movie_theaters: Vec<MovieTheater>,
    movies: Vec<Movie>,
    offer_catalogs: Vec<OfferCatalog>,
    ticket_types: Vec<TicketType>,
    orders: Vec<Order>,
    pending_returns: Vec<(ReturnOrderTransaction, String)>,
    returned_order_numbers: Vec<String>,
    last_event_search: Option<EventSearchConditions>,
    last_order_search: Option<OrderSearchConditions>,
}

/// In-memory stand-in for the remote APIs. Clones share the same store.
#[derive(Clone, Default)]
pub struct ChevreTestClient {
    store: Arc<Mutex<TestStore>>,
}

fn contains(haystack: &str, needle: &Option<String>) -> bool {
    match needle {
        Some(needle) => haystack.contains(needle.as_str()),
        None => true,
    }
}

fn any_or_empty<T: PartialEq>(values: &[T], value: &T) -> bool {
    values.is_empty() || values.contains(value)
}

fn paginate<T>(items: Vec<T>, limit: Option<u32>, page: Option<u32>) -> SearchResult<T> {
    let total = items.len() as u64;
    let data = match limit {
        Some(limit) => {
            let page = page.unwrap_or(1).max(1);
            items
                .into_iter()
                .skip(((page - 1) * limit) as usize)
                .take(limit as usize)
                .collect()
        }
        None => items,
    };
    SearchResult::new(data, Some(total))
}

impl ChevreTestClient {
    pub fn new() -> ChevreTestClient {
        ChevreTestClient::default()
    }

    fn store(&self) -> ChevreResult<MutexGuard<TestStore>> {
        let store = self.store.lock().map_err(|_| ChevreError::ConcurrencyError)?;
        if store.unavailable {
            return Err(ChevreError::ResponseError {
                url: "test://chevre".to_string(),
                status: StatusCode::SERVICE_UNAVAILABLE,
                message: "Service unavailable".to_string(),
            });
        }
        Ok(store)
    }

    fn with_store<R, F: FnOnce(&mut TestStore) -> R>(&self, f: F) -> R {
        let mut store = match self.store.lock() {
            Ok(store) => store,
            Err(poisoned) => poisoned.into_inner(),
        };
        f(&mut store)
    }

    /// Makes every call fail with 503 until switched back.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.with_store(|s| s.unavailable = unavailable)
    }

    pub fn add_category_code(&self, category_code: CategoryCode) -> CategoryCode {
        let mut category_code = category_code;
        if category_code.id.is_none() {
            category_code.id = Some(Uuid::new_v4().to_string());
        }
        self.with_store(|s| s.category_codes.push(category_code.clone()));
        category_code
    }

    pub fn add_movie_theater(&self, theater: MovieTheater) {
        self.with_store(|s| s.movie_theaters.push(theater))
    }

    pub fn add_movie(&self, movie: Movie) {
        self.with_store(|s| s.movies.push(movie))
    }

    pub fn add_offer_catalog(&self, catalog: OfferCatalog) {
        self.with_store(|s| s.offer_catalogs.push(catalog))
    }

    pub fn add_ticket_type(&self, ticket_type: TicketType) {
        self.with_store(|s| s.ticket_types.push(ticket_type))
    }

    pub fn add_order(&self, order: Order) {
        self.with_store(|s| s.orders.push(order))
    }

    pub fn add_screening_event_series(&self, series: ScreeningEventSeries) {
        self.with_store(|s| s.screening_event_series.push(series))
    }

    pub fn add_screening_event(&self, event: ScreeningEvent) {
        self.with_store(|s| s.screening_events.push(event))
    }

    pub fn category_codes(&self) -> Vec<CategoryCode> {
        self.with_store(|s| s.category_codes.clone())
    }

    pub fn screening_events(&self) -> Vec<ScreeningEvent> {
        self.with_store(|s| s.screening_events.clone())
    }

    pub fn screening_event_series(&self) -> Vec<ScreeningEventSeries> {
        self.with_store(|s| s.screening_event_series.clone())
    }

    pub fn offer_catalogs(&self) -> Vec<OfferCatalog> {
        self.with_store(|s| s.offer_catalogs.clone())
    }

    pub fn returned_order_numbers(&self) -> Vec<String> {
        self.with_store(|s| s.returned_order_numbers.clone())
    }

    pub fn last_event_search(&self) -> Option<EventSearchConditions> {
        self.with_store(|s| s.last_event_search.clone())
    }

    pub fn last_order_search(&self) -> Option<OrderSearchConditions> {
        self.with_store(|s| s.last_order_search.clone())
    }
}

#[async_trait]
impl ChevreClient for ChevreTestClient {
    async fn search_category_codes(
        &self,
        conditions: &CategoryCodeSearchConditions,
    ) -> ChevreResult<SearchResult<CategoryCode>> {
        let store = self.store()?;
        let found = store
            .category_codes
            .iter()
            .filter(|c| conditions.in_code_set.map_or(true, |i| c.in_code_set.identifier == i))
            .filter(|c| conditions.code_value.as_ref().map_or(true, |v| &c.code_value == v))
            .filter(|c| contains(&c.name.ja, &conditions.name))
            .cloned()
            .collect();
        Ok(paginate(found, conditions.limit, conditions.page))
    }

    async fn create_category_code(&self, category_code: &CategoryCode) -> ChevreResult<CategoryCode> {
        let mut store = self.store()?;
        let mut created = category_code.clone();
        created.id = Some(Uuid::new_v4().to_string());
        store.category_codes.push(created.clone());
        Ok(created)
    }

    async fn update_category_code(&self, id: &str, category_code: &CategoryCode) -> ChevreResult<()> {
        let mut store = self.store()?;
        let existing = store
            .category_codes
            .iter_mut()
            .find(|c| c.id.as_deref() == Some(id))
            .ok_or_else(|| ChevreError::not_found("CategoryCode", id))?;
        *existing = CategoryCode {
            id: Some(id.to_string()),
            ..category_code.clone()
        };
        Ok(())
    }

    async fn search_screening_events(
        &self,
        conditions: &EventSearchConditions,
    ) -> ChevreResult<SearchResult<ScreeningEvent>> {
        let mut store = self.store()?;
        store.last_event_search = Some(conditions.clone());
        let found = store
            .screening_events
            .iter()
            .filter(|e| any_or_empty(&conditions.ids, &e.id))
            .filter(|e| any_or_empty(&conditions.event_statuses, &e.attributes.event_status))
            .filter(|e| conditions.in_session_from.map_or(true, |from| e.attributes.end_date > from))
            .filter(|e| {
                conditions
                    .in_session_through
                    .map_or(true, |through| e.attributes.start_date < through)
            })
            .filter(|e| any_or_empty(&conditions.super_event_ids, &e.attributes.super_event.id))
            .filter(|e| {
                any_or_empty(
                    &conditions.super_event_location_branch_codes,
                    &e.attributes.super_event.attributes.location.branch_code,
                )
            })
            .filter(|e| any_or_empty(&conditions.location_branch_codes, &e.attributes.location.branch_code))
            .cloned()
            .collect();
        Ok(paginate(found, conditions.limit, conditions.page))
    }

    async fn find_screening_event(&self, id: &str) -> ChevreResult<ScreeningEvent> {
        let store = self.store()?;
        store
            .screening_events
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or_else(|| ChevreError::not_found("ScreeningEvent", id))
    }

    async fn create_screening_events(
        &self,
        attributes: &[ScreeningEventAttributes],
    ) -> ChevreResult<Vec<ScreeningEvent>> {
        let mut store = self.store()?;
        let created: Vec<ScreeningEvent> = attributes
            .iter()
            .map(|a| ScreeningEvent {
                id: Uuid::new_v4().to_string(),
                attributes: a.clone(),
            })
            .collect();
        store.screening_events.extend(created.iter().cloned());
        Ok(created)
    }

    async fn update_screening_event(&self, id: &str, attributes: &ScreeningEventAttributes) -> ChevreResult<()> {
        let mut store = self.store()?;
        let existing = store
            .screening_events
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| ChevreError::not_found("ScreeningEvent", id))?;
        existing.attributes = attributes.clone();
        Ok(())
    }

    async fn search_screening_event_series(
        &self,
        conditions: &EventSearchConditions,
    ) -> ChevreResult<SearchResult<ScreeningEventSeries>> {
        let store = self.store()?;
        let found = store
            .screening_event_series
            .iter()
            .filter(|e| any_or_empty(&conditions.ids, &e.id))
            .filter(|e| contains(&e.attributes.name.ja, &conditions.name))
            .filter(|e| any_or_empty(&conditions.location_branch_codes, &e.attributes.location.branch_code))
            .filter(|e| {
                any_or_empty(
                    &conditions.work_performed_identifiers,
                    &e.attributes.work_performed.identifier,
                )
            })
            .filter(|e| match (conditions.end_from, e.attributes.end_date) {
                (Some(from), Some(end)) => end >= from,
                _ => true,
            })
            .filter(|e| match (conditions.in_session_from, e.attributes.end_date) {
                (Some(from), Some(end)) => end > from,
                _ => true,
            })
            .filter(|e| match (conditions.in_session_through, e.attributes.start_date) {
                (Some(through), Some(start)) => start < through,
                _ => true,
            })
            .cloned()
            .collect();
        Ok(paginate(found, conditions.limit, conditions.page))
    }

    async fn find_screening_event_series(&self, id: &str) -> ChevreResult<ScreeningEventSeries> {
        let store = self.store()?;
        store
            .screening_event_series
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or_else(|| ChevreError::not_found("ScreeningEventSeries", id))
    }

    async fn create_screening_event_series(
        &self,
        attributes: &ScreeningEventSeriesAttributes,
    ) -> ChevreResult<ScreeningEventSeries> {
        let mut store = self.store()?;
        let created = ScreeningEventSeries {
            id: Uuid::new_v4().to_string(),
            attributes: attributes.clone(),
        };
        store.screening_event_series.push(created.clone());
        Ok(created)
    }

    async fn update_screening_event_series(
        &self,
        id: &str,
        attributes: &ScreeningEventSeriesAttributes,
    ) -> ChevreResult<()> {
        let mut store = self.store()?;
        let existing = store
            .screening_event_series
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| ChevreError::not_found("ScreeningEventSeries", id))?;
        existing.attributes = attributes.clone();
        Ok(())
    }

    async fn search_movie_theaters(
        &self,
        conditions: &MovieTheaterSearchConditions,
    ) -> ChevreResult<SearchResult<MovieTheater>> {
        let store = self.store()?;
        // Search results come without screening rooms, as the remote API answers.
        let found = store
            .movie_theaters
            .iter()
            .filter(|t| any_or_empty(&conditions.branch_codes, &t.branch_code))
            .filter(|t| contains(&t.name.ja, &conditions.name))
            .map(|t| MovieTheater {
                contains_place: vec![],
                ..t.clone()
            })
            .collect();
        Ok(paginate(found, conditions.limit, conditions.page))
    }

    async fn find_movie_theater(&self, id: &str) -> ChevreResult<MovieTheater> {
        let store = self.store()?;
        store
            .movie_theaters
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or_else(|| ChevreError::not_found("MovieTheater", id))
    }

    async fn search_movies(&self, conditions: &MovieSearchConditions) -> ChevreResult<SearchResult<Movie>> {
        let store = self.store()?;
        let mut found: Vec<Movie> = store
            .movies
            .iter()
            .filter(|m| conditions.identifier.as_ref().map_or(true, |i| &m.identifier == i))
            .cloned()
            .collect();
        if conditions.sort_by_date_published_desc {
            found.sort_by(|a, b| b.date_published.cmp(&a.date_published));
        }
        Ok(paginate(found, conditions.limit, conditions.page))
    }

    async fn search_offer_catalogs(
        &self,
        conditions: &OfferCatalogSearchConditions,
    ) -> ChevreResult<SearchResult<OfferCatalog>> {
        let store = self.store()?;
        let found = store
            .offer_catalogs
            .iter()
            .filter(|c| {
                conditions
                    .item_offered_type_of
                    .as_ref()
                    .map_or(true, |t| &c.item_offered.type_of == t)
            })
            .filter(|c| contains(&c.name.ja, &conditions.name))
            .cloned()
            .collect();
        Ok(paginate(found, conditions.limit, conditions.page))
    }

    async fn find_offer_catalog(&self, id: &str) -> ChevreResult<OfferCatalog> {
        let store = self.store()?;
        store
            .offer_catalogs
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| ChevreError::not_found("OfferCatalog", id))
    }

    async fn delete_offer_catalog(&self, id: &str) -> ChevreResult<()> {
        let mut store = self.store()?;
        let index = store
            .offer_catalogs
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| ChevreError::not_found("OfferCatalog", id))?;
        store.offer_catalogs.remove(index);
        Ok(())
    }

    async fn search_ticket_types(
        &self,
        conditions: &TicketTypeSearchConditions,
    ) -> ChevreResult<SearchResult<TicketType>> {
        let store = self.store()?;
        let found = store
            .ticket_types
            .iter()
            .filter(|t| conditions.price.map_or(true, |p| t.price() == Some(p)))
            .cloned()
            .collect();
        Ok(paginate(found, conditions.limit, conditions.page))
    }

    async fn search_orders(&self, conditions: &OrderSearchConditions) -> ChevreResult<SearchResult<Order>> {
        let mut store = self.store()?;
        store.last_order_search = Some(conditions.clone());
        let found = store
            .orders
            .iter()
            .filter(|o| {
                conditions.confirmation_numbers.is_empty()
                    || o.confirmation_number
                        .as_ref()
                        .map_or(false, |n| conditions.confirmation_numbers.contains(n))
            })
            .filter(|o| {
                conditions
                    .customer_telephone
                    .as_ref()
                    .map_or(true, |t| o.customer.telephone.as_ref() == Some(t))
            })
            .filter(|o| {
                conditions
                    .customer_identifiers
                    .iter()
                    .all(|i| o.customer.identifier.contains(i))
            })
            .filter(|o| conditions.order_date_from.map_or(true, |from| o.order_date >= from))
            .filter(|o| {
                conditions
                    .order_date_through
                    .map_or(true, |through| o.order_date <= through)
            })
            .cloned()
            .collect();
        Ok(paginate(found, conditions.limit, conditions.page))
    }

    async fn start_return_order(&self, params: &StartReturnOrderParams) -> ChevreResult<ReturnOrderTransaction> {
        let mut store = self.store()?;
        let order_number = &params.object.order.order_number;
        if !store.orders.iter().any(|o| &o.order_number == order_number) {
            return Err(ChevreError::not_found("Order", order_number));
        }
        let transaction = ReturnOrderTransaction {
            id: Uuid::new_v4().to_string(),
            type_of: Some("ReturnOrder".to_string()),
            expires: params.expires,
        };
        store
            .pending_returns
            .push((transaction.clone(), order_number.clone()));
        Ok(transaction)
    }

    async fn confirm_return_order(&self, transaction: &ReturnOrderTransaction) -> ChevreResult<()> {
        let mut store = self.store()?;
        let index = store
            .pending_returns
            .iter()
            .position(|(t, _)| t.id == transaction.id)
            .ok_or_else(|| ChevreError::not_found("ReturnOrderTransaction", &transaction.id))?;
        let (_, order_number) = store.pending_returns.remove(index);
        store.returned_order_numbers.push(order_number);
        Ok(())
    }

    fn box_clone(&self) -> Box<dyn ChevreClient> {
        Box::new(self.clone())
    }
}
