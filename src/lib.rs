// src/lib.rs
// OPKB Browser - terminal front end for the One Piece knowledge base API
//
// Architecture:
// - Domain: read-only DTOs of the API, labels and formatting rules
// - Integrations: HTTP transport behind the EncyclopediaApi port
// - Services: typed list/get over the port
// - Application: page state machines (list, detail) and routing
// - Views: pages rendered to text documents
// - CLI: one-shot commands and the interactive browser

// ============================================================================
// CORE
// ============================================================================

pub mod config;
pub mod domain;
pub mod error;
pub mod integrations;
pub mod services;

// ============================================================================
// FRONT END
// ============================================================================

pub mod application;
pub mod cli;
pub mod views;

// ============================================================================
// PUBLIC API
// ============================================================================

pub use config::Config;
pub use error::{AppError, AppResult};

pub use domain::{
    Arc as StoryArc, ArcSummary, Bounty, Character, CharacterSummary, Crew, CrewSummary, DevilFruit,
    DevilFruitSummary, Episode, EpisodeSummary, Page, Rarity, Resource, ResourceKind,
};

pub use integrations::{ApiClient, EncyclopediaApi, ListQuery};
pub use services::EncyclopediaService;

pub use application::{open_screen, DetailPage, ListPage, Route, Screen, ViewState};
pub use views::Document;
