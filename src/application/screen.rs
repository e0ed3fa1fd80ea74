// src/application/screen.rs
//
// One routed page, whatever its resource
//
// The browser only talks to `Box<dyn Screen>`; open_screen picks the
// concrete ListPage/DetailPage for a route.

use async_trait::async_trait;
use std::sync::Arc;

use crate::application::detail_page::DetailPage;
use crate::application::list_page::ListPage;
use crate::application::router::Route;
use crate::domain::{Arcs, Characters, Crews, DevilFruits, Episodes, Resource, ResourceKind};
use crate::integrations::api::ListQuery;
use crate::services::EncyclopediaService;
use crate::views::{render_detail, render_list, CardView, DetailView, Document};

#[async_trait]
pub trait Screen: Send {
    /// Route of what is currently shown
    fn route(&self) -> Route;

    async fn load(&mut self);

    fn render(&self) -> Document;

    /// Message of the last failed fetch
    fn error(&self) -> Option<&str>;

    /// Returns false when the screen has no search box
    async fn search(&mut self, _text: &str) -> bool {
        false
    }

    async fn next(&mut self) -> bool {
        false
    }

    async fn previous(&mut self) -> bool {
        false
    }

    /// Show `route` in place. False means another screen must be opened.
    async fn navigate(&mut self, _route: &Route) -> bool {
        false
    }
}

#[async_trait]
impl<R> Screen for ListPage<R>
where
    R: Resource,
    R::Summary: CardView,
{
    fn route(&self) -> Route {
        Route::List(R::KIND)
    }

    async fn load(&mut self) {
        ListPage::load(self).await
    }

    fn render(&self) -> Document {
        render_list(self)
    }

    fn error(&self) -> Option<&str> {
        self.state().error()
    }

    async fn search(&mut self, text: &str) -> bool {
        self.set_search(text).await;
        true
    }

    async fn next(&mut self) -> bool {
        self.next_page().await
    }

    async fn previous(&mut self) -> bool {
        self.previous_page().await
    }
}

#[async_trait]
impl<R> Screen for DetailPage<R>
where
    R: Resource,
    R::Detail: DetailView,
{
    fn route(&self) -> Route {
        Route::Detail(R::KIND, self.id())
    }

    async fn load(&mut self) {
        DetailPage::load(self).await
    }

    fn render(&self) -> Document {
        render_detail(self)
    }

    fn error(&self) -> Option<&str> {
        self.state().error()
    }

    async fn navigate(&mut self, route: &Route) -> bool {
        match route {
            Route::Detail(kind, id) if *kind == R::KIND => {
                DetailPage::navigate(self, *id).await;
                true
            }
            _ => false,
        }
    }
}

/// Build the (not yet loaded) screen for `route`
pub fn open_screen(
    route: Route,
    service: Arc<EncyclopediaService>,
    page_size: u32,
) -> Box<dyn Screen> {
    match route {
        Route::List(kind) => open_list(kind, ListQuery::default(), service, page_size),
        Route::Detail(kind, id) => match kind {
            ResourceKind::Characters => Box::new(DetailPage::<Characters>::new(service, id)),
            ResourceKind::Crews => Box::new(DetailPage::<Crews>::new(service, id)),
            ResourceKind::DevilFruits => Box::new(DetailPage::<DevilFruits>::new(service, id)),
            ResourceKind::Arcs => Box::new(DetailPage::<Arcs>::new(service, id)),
            ResourceKind::Episodes => Box::new(DetailPage::<Episodes>::new(service, id)),
        },
    }
}

/// List screen starting on `query` instead of page 1
pub fn open_list(
    kind: ResourceKind,
    query: ListQuery,
    service: Arc<EncyclopediaService>,
    page_size: u32,
) -> Box<dyn Screen> {
    fn list<R>(query: ListQuery, service: Arc<EncyclopediaService>, page_size: u32) -> Box<dyn Screen>
    where
        R: Resource,
        R::Summary: CardView,
    {
        Box::new(ListPage::<R>::new(service, page_size).with_query(query))
    }

    match kind {
        ResourceKind::Characters => list::<Characters>(query, service, page_size),
        ResourceKind::Crews => list::<Crews>(query, service, page_size),
        ResourceKind::DevilFruits => list::<DevilFruits>(query, service, page_size),
        ResourceKind::Arcs => list::<Arcs>(query, service, page_size),
        ResourceKind::Episodes => list::<Episodes>(query, service, page_size),
    }
}
