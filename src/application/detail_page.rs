// src/application/detail_page.rs
//
// Single entity view: fetched on open, refetched only when the id changes

use std::marker::PhantomData;
use std::sync::Arc;

use crate::application::state::ViewState;
use crate::domain::{Resource, ResourceKind};
use crate::error::{AppError, AppResult};
use crate::services::EncyclopediaService;

pub struct DetailPage<R: Resource> {
    service: Arc<EncyclopediaService>,
    id: u64,
    state: ViewState<R::Detail>,
    generation: u64,
    _resource: PhantomData<R>,
}

impl<R: Resource> DetailPage<R> {
    pub fn new(service: Arc<EncyclopediaService>, id: u64) -> Self {
        Self {
            service,
            id,
            state: ViewState::Idle,
            generation: 0,
            _resource: PhantomData,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn state(&self) -> &ViewState<R::Detail> {
        &self.state
    }

    pub fn entity(&self) -> Option<&R::Detail> {
        self.state.data()
    }

    pub fn begin_fetch(&mut self) -> (u64, u64) {
        self.generation += 1;
        self.state.begin_loading(false);
        (self.generation, self.id)
    }

    /// Returns false when a newer fetch was issued in between
    pub fn apply(&mut self, generation: u64, result: AppResult<R::Detail>) -> bool {
        if generation != self.generation {
            log::warn!(
                "Dropping stale {} #{} response",
                R::KIND.collection(),
                self.id
            );
            return false;
        }

        self.state = match result {
            Ok(entity) => ViewState::Loaded(entity),
            Err(err) => ViewState::Failed(detail_error_message::<R>(&err)),
        };
        true
    }

    pub async fn load(&mut self) {
        let (generation, id) = self.begin_fetch();
        let result = self.service.get::<R>(id).await;
        self.apply(generation, result);
    }

    /// Switch to another entity of the same kind. Same id: nothing happens.
    pub async fn navigate(&mut self, id: u64) -> bool {
        if id == self.id && !self.state.is_idle() {
            return false;
        }
        log::info!("Navigating {} #{} -> #{}", R::KIND.collection(), self.id, id);
        self.id = id;
        self.load().await;
        true
    }

    pub async fn reload(&mut self) {
        self.load().await;
    }
}

/// Status errors read as "not found" for the resource, others keep their message
pub fn detail_error_message<R: Resource>(err: &AppError) -> String {
    kind_error_message(R::KIND, err)
}

pub fn kind_error_message(kind: ResourceKind, err: &AppError) -> String {
    if err.is_status() {
        kind.not_found().to_string()
    } else {
        err.to_string()
    }
}
