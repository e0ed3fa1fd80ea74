// src/views/pages.rs
//
// Whole-screen rendering of list and detail pages

use crate::application::detail_page::DetailPage;
use crate::application::list_page::ListPage;
use crate::application::router::Route;
use crate::application::state::ViewState;
use crate::domain::{Resource, ResourceKind};
use crate::views::cards::CardView;
use crate::views::details::DetailView;
use crate::views::document::{Document, Tone};

pub const LOADING: &str = "Chargement...";
pub const SITE_TITLE: &str = "Encyclopédie de One Piece";

/// Site title and the route of every collection
pub fn navigation() -> Document {
    let mut doc = Document::new();
    doc.heading(SITE_TITLE);
    for kind in ResourceKind::ALL {
        doc.field(kind.title(), Route::List(kind));
    }
    doc
}

fn error(doc: &mut Document, message: &str) {
    doc.styled(format!("Erreur: {}", message), Tone::Danger);
}

pub fn render_list<R>(page: &ListPage<R>) -> Document
where
    R: Resource,
    R::Summary: CardView,
{
    let mut doc = Document::new();

    match page.state() {
        ViewState::Failed(message) => {
            error(&mut doc, message);
            return doc;
        }
        ViewState::Idle | ViewState::Loading(None) => {
            doc.styled(LOADING, Tone::Yellow);
            return doc;
        }
        ViewState::Loading(Some(_)) | ViewState::Loaded(_) => {}
    }

    doc.heading(R::TITLE);
    match page.search() {
        Some(search) => doc.field("Recherche", search),
        None => doc.styled(format!("/search {}", R::SEARCH_PLACEHOLDER), Tone::Muted),
    };
    if page.state().is_loading() {
        doc.styled(LOADING, Tone::Yellow);
    }
    doc.blank();

    for item in page.results() {
        item.card(&mut doc);
    }

    doc.blank();
    doc.text(format!("Page {} sur {}", page.page(), page.page_count()));
    doc.styled(
        pagination_label("p", "Précédent", page.can_previous()),
        if page.can_previous() { Tone::Plain } else { Tone::Muted },
    );
    doc.styled(
        pagination_label("n", "Suivant", page.can_next()),
        if page.can_next() { Tone::Plain } else { Tone::Muted },
    );
    doc
}

fn pagination_label(key: &str, label: &str, enabled: bool) -> String {
    if enabled {
        format!("[{}] {}", key, label)
    } else {
        format!("[{}] {} (désactivé)", key, label)
    }
}

pub fn render_detail<R>(page: &DetailPage<R>) -> Document
where
    R: Resource,
    R::Detail: DetailView,
{
    let mut doc = Document::new();

    match page.state() {
        ViewState::Failed(message) => error(&mut doc, message),
        ViewState::Loaded(entity) => {
            doc.link("Retour à la liste", Route::Detail(R::KIND, page.id()).parent());
            doc.blank();
            entity.detail(&mut doc);
        }
        ViewState::Idle | ViewState::Loading(_) => {
            doc.styled(LOADING, Tone::Yellow);
        }
    }
    doc
}
