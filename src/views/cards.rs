// src/views/cards.rs
//
// One card per list result: a link to the detail page and a few fields

use crate::application::router::Route;
use crate::domain::{
    ArcSummary, CharacterSummary, CrewSummary, DevilFruitSummary, EpisodeSummary, ResourceKind,
};
use crate::views::document::{Document, Tone};
use crate::views::format::{format_date, rarity_tone};

pub trait CardView {
    fn card(&self, doc: &mut Document);
}

impl CardView for CharacterSummary {
    fn card(&self, doc: &mut Document) {
        doc.link(&self.name, Route::Detail(ResourceKind::Characters, self.id));
        doc.indented(|doc| {
            if let Some(epithet) = &self.epithet {
                doc.styled(format!("\"{}\"", epithet), Tone::Orange);
            }
            doc.field("Rôle", self.role);
            if self.bounty.is_set() {
                doc.field_toned("Prime", self.bounty, Tone::Gold);
            }
            if !self.crews.is_empty() {
                let names: Vec<&str> = self.crews.iter().map(|c| c.name.as_str()).collect();
                doc.field("Équipages", names.join(", "));
            }
            if !self.current_fruits.is_empty() {
                let names: Vec<&str> = self.current_fruits.iter().map(|f| f.name.as_str()).collect();
                doc.field("Fruits", names.join(", "));
            }
        });
    }
}

impl CardView for CrewSummary {
    fn card(&self, doc: &mut Document) {
        doc.link(&self.name, Route::Detail(ResourceKind::Crews, self.id));
        doc.indented(|doc| {
            if let Some(ship) = &self.ship_name {
                doc.field("Navire", ship);
            }
            if let Some(base) = &self.base_location {
                doc.field("Base", base);
            }
        });
    }
}

impl CardView for DevilFruitSummary {
    fn card(&self, doc: &mut Document) {
        doc.link(&self.name, Route::Detail(ResourceKind::DevilFruits, self.id));
        doc.indented(|doc| {
            if let Some(romanji) = &self.romanji {
                doc.styled(romanji, Tone::Muted);
            }
            doc.field("Type", self.fruit_type);
            doc.field_toned("Rareté", self.rarity, rarity_tone(self.rarity));
        });
    }
}

impl CardView for ArcSummary {
    fn card(&self, doc: &mut Document) {
        doc.link(&self.name, Route::Detail(ResourceKind::Arcs, self.id));
        doc.indented(|doc| {
            if let Some(saga) = &self.saga {
                doc.field_toned("Saga", saga, Tone::Yellow);
            }
            doc.field("Épisodes", self.episode_span());
        });
    }
}

impl CardView for EpisodeSummary {
    fn card(&self, doc: &mut Document) {
        doc.link(
            format!("Épisode #{} - {}", self.number, self.title),
            Route::Detail(ResourceKind::Episodes, self.id),
        );
        if let Some(date) = self.air_date {
            doc.indented(|doc| {
                doc.field_toned("Diffusé le", format_date(date), Tone::Muted);
            });
        }
    }
}
