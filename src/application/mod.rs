// src/application/mod.rs
//
// Application Layer
//
// - Page state machines driven by the front end (list, detail)
// - Routing between pages
// - Talks to the API only through EncyclopediaService

pub mod detail_page;
pub mod list_page;
pub mod router;
pub mod screen;
pub mod state;

pub use detail_page::{detail_error_message, kind_error_message, DetailPage};
pub use list_page::{list_error_message, FetchTicket, ListPage, LIST_LOAD_ERROR};
pub use router::Route;
pub use screen::{open_list, open_screen, Screen};
pub use state::ViewState;
