// src/application/list_page.rs
//
// Paginated, searchable list of one collection
//
// - (page, search, ordering) is the query; every change triggers one fetch
// - changing the search always goes back to page 1
// - Previous/Next follow the cursors of the last successful response
// - only the latest issued fetch may update the state

use std::marker::PhantomData;
use std::sync::Arc;

use crate::application::state::ViewState;
use crate::domain::{page_count, Page, Resource};
use crate::error::{AppError, AppResult};
use crate::integrations::api::ListQuery;
use crate::services::EncyclopediaService;

pub const LIST_LOAD_ERROR: &str = "Erreur lors du chargement";

/// Identifies one issued fetch. Results carrying an outdated ticket are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub generation: u64,
    pub query: ListQuery,
}

pub struct ListPage<R: Resource> {
    service: Arc<EncyclopediaService>,
    page_size: u32,
    query: ListQuery,
    state: ViewState<Page<R::Summary>>,
    generation: u64,
    _resource: PhantomData<R>,
}

impl<R: Resource> ListPage<R> {
    pub fn new(service: Arc<EncyclopediaService>, page_size: u32) -> Self {
        Self {
            service,
            page_size,
            query: ListQuery::default(),
            state: ViewState::Idle,
            generation: 0,
            _resource: PhantomData,
        }
    }

    pub fn with_query(mut self, query: ListQuery) -> Self {
        self.query = ListQuery {
            page: query.page.max(1),
            ..query
        };
        self
    }

    pub fn page(&self) -> u32 {
        self.query.page
    }

    pub fn search(&self) -> Option<&str> {
        self.query.search.as_deref()
    }

    pub fn state(&self) -> &ViewState<Page<R::Summary>> {
        &self.state
    }

    /// Items of the page on screen (stale ones while loading)
    pub fn results(&self) -> &[R::Summary] {
        self.state.data().map(|p| p.results.as_slice()).unwrap_or(&[])
    }

    pub fn can_next(&self) -> bool {
        self.state.data().is_some_and(Page::has_next)
    }

    pub fn can_previous(&self) -> bool {
        self.state.data().is_some_and(Page::has_previous)
    }

    /// ceil(count / page_size) of the page on screen, 0 without data
    pub fn page_count(&self) -> u64 {
        self.state
            .data()
            .map(|p| page_count(p.count, self.page_size))
            .unwrap_or(0)
    }

    // ========================================================================
    // FETCH CYCLE
    // ========================================================================

    /// Mark the page as loading and hand out the ticket for the current query
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.generation += 1;
        self.state.begin_loading(true);
        FetchTicket {
            generation: self.generation,
            query: self.query.clone(),
        }
    }

    /// Apply a fetch result. Returns false when the ticket is outdated.
    pub fn apply(&mut self, ticket: FetchTicket, result: AppResult<Page<R::Summary>>) -> bool {
        if ticket.generation != self.generation {
            log::warn!(
                "Dropping stale {} response (page {}, generation {} < {})",
                R::KIND.collection(),
                ticket.query.page,
                ticket.generation,
                self.generation
            );
            return false;
        }

        self.state = match result {
            Ok(page) => ViewState::Loaded(page),
            Err(err) => ViewState::Failed(list_error_message(&err)),
        };
        true
    }

    /// Fetch the current query
    pub async fn load(&mut self) {
        let ticket = self.begin_fetch();
        let result = self.service.list::<R>(&ticket.query).await;
        self.apply(ticket, result);
    }

    /// New search text: back to page 1, then fetch. Returns false, without a
    /// request, when neither the search nor the page changes.
    pub async fn set_search(&mut self, text: &str) -> bool {
        let search = if text.is_empty() {
            None
        } else {
            Some(text.to_string())
        };
        if search == self.query.search && self.query.page == 1 && !self.state.is_idle() {
            return false;
        }
        self.query.search = search;
        self.query.page = 1;
        self.load().await;
        true
    }

    pub async fn next_page(&mut self) -> bool {
        if !self.can_next() {
            return false;
        }
        let Some(next) = self.query.page.checked_add(1) else {
            return false;
        };
        self.query.page = next;
        self.load().await;
        true
    }

    pub async fn previous_page(&mut self) -> bool {
        if !self.can_previous() {
            return false;
        }
        self.query.page = self.query.page.saturating_sub(1).max(1);
        self.load().await;
        true
    }
}

/// Status errors get the generic list message, others their own
pub fn list_error_message(err: &AppError) -> String {
    if err.is_status() {
        LIST_LOAD_ERROR.to_string()
    } else {
        err.to_string()
    }
}
