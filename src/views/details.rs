// src/views/details.rs
//
// Detail pages. Optional fields are shown only when present; nothing is computed.

use crate::application::router::Route;
use crate::domain::{Arc, Character, Crew, DevilFruit, Episode, ResourceKind};
use crate::views::document::{Document, Tone};
use crate::views::format::{bounty_or_none, format_date, rarity_tone};

pub trait DetailView {
    fn detail(&self, doc: &mut Document);
}

fn section(doc: &mut Document, title: impl Into<String>) {
    doc.blank();
    doc.heading(title);
}

impl DetailView for Character {
    fn detail(&self, doc: &mut Document) {
        doc.heading(&self.name);
        if let Some(epithet) = &self.epithet {
            doc.styled(format!("\"{}\"", epithet), Tone::Orange);
        }
        doc.blank();
        doc.field("Rôle", self.role);
        doc.field_toned("Prime", bounty_or_none(self.bounty), Tone::Gold);
        doc.field("Origine", self.origin.as_deref().unwrap_or("N/A"));
        doc.field("Statut", self.status);
        if let Some(first) = &self.first_appearance_episode {
            let mut value = format!("Épisode #{} - {}", first.number, first.title);
            if let Some(arc) = &first.arc {
                value.push_str(&format!(" ({})", arc));
            }
            doc.field("Première apparition", value);
        }

        if let Some(description) = &self.description {
            section(doc, "Description");
            doc.text(description);
        }

        if !self.crews.is_empty() {
            section(doc, "Équipages");
            for crew in &self.crews {
                doc.link(&crew.name, Route::Detail(ResourceKind::Crews, crew.id));
            }
        }

        if !self.fruits_history.is_empty() {
            section(doc, "Fruits du Démon");
            for holding in &self.fruits_history {
                let fruit = &holding.devil_fruit;
                doc.link(&fruit.name, Route::Detail(ResourceKind::DevilFruits, fruit.id));
                doc.indented(|doc| {
                    doc.styled(fruit.fruit_type.to_string(), Tone::Muted);
                    if holding.is_current {
                        doc.badge("Actuel");
                    }
                });
            }
        }
    }
}

impl DetailView for Crew {
    fn detail(&self, doc: &mut Document) {
        doc.heading(&self.name);
        doc.blank();
        if let Some(ship) = &self.ship_name {
            doc.field("Navire", ship);
        }
        if let Some(base) = &self.base_location {
            doc.field("Base", base);
        }
        if let Some(captain) = &self.captain {
            doc.styled("Capitaine:", Tone::Gold);
            doc.indented(|doc| {
                doc.link(&captain.name, Route::Detail(ResourceKind::Characters, captain.id));
            });
        }

        if let Some(description) = &self.description {
            section(doc, "Description");
            doc.text(description);
        }

        if !self.members.is_empty() {
            section(doc, format!("Membres ({})", self.members.len()));
            for member in &self.members {
                doc.link(&member.name, Route::Detail(ResourceKind::Characters, member.id));
                if member.bounty.is_set() {
                    doc.indented(|doc| {
                        doc.field_toned("Prime", member.bounty, Tone::Gold);
                    });
                }
            }
        }
    }
}

impl DetailView for DevilFruit {
    fn detail(&self, doc: &mut Document) {
        doc.heading(&self.name);
        if let Some(romanji) = &self.romanji {
            doc.styled(romanji, Tone::Muted);
        }
        doc.blank();
        doc.field("Type", self.fruit_type);
        doc.field_toned("Rareté", self.rarity, rarity_tone(self.rarity));
        doc.field("Statut", self.status);
        if let Some(holder) = self.current_holder() {
            doc.field("Détenteur actuel", &holder.character.name);
        }
        if let Some(arc) = &self.first_appearance_arc {
            doc.styled("Première apparition:", Tone::Blue);
            doc.indented(|doc| {
                doc.link(&arc.name, Route::Detail(ResourceKind::Arcs, arc.id));
            });
        }

        section(doc, "Capacité");
        doc.text(&self.ability);

        if let Some(weaknesses) = &self.weaknesses {
            section(doc, "Faiblesses");
            doc.styled(weaknesses, Tone::Danger);
        }

        if let Some(description) = &self.description {
            section(doc, "Description");
            doc.text(description);
        }

        if !self.holders.is_empty() {
            section(doc, "Détenteurs");
            for holder in &self.holders {
                doc.link(
                    &holder.character.name,
                    Route::Detail(ResourceKind::Characters, holder.character.id),
                );
                doc.indented(|doc| {
                    if holder.is_current {
                        doc.badge("Actuel");
                    }
                    if let Some(from) = holder.from_date {
                        doc.field_toned("Du", format_date(from), Tone::Muted);
                    }
                    if let Some(to) = holder.to_date {
                        doc.field_toned("Au", format_date(to), Tone::Muted);
                    }
                });
            }
        }
    }
}

impl DetailView for Arc {
    fn detail(&self, doc: &mut Document) {
        doc.heading(&self.name);
        doc.blank();
        if let Some(saga) = &self.saga {
            doc.field_toned("Saga", saga, Tone::Yellow);
        }
        doc.field("Épisodes", self.episode_span());

        if let Some(description) = &self.description {
            section(doc, "Description");
            doc.text(description);
        }

        if !self.episodes.is_empty() {
            section(doc, format!("Épisodes ({})", self.episodes.len()));
            for episode in &self.episodes {
                doc.link(
                    format!("Épisode #{}", episode.number),
                    Route::Detail(ResourceKind::Episodes, episode.id),
                );
                doc.indented(|doc| {
                    doc.text(&episode.title);
                    if let Some(date) = episode.air_date {
                        doc.field_toned("Diffusé le", format_date(date), Tone::Muted);
                    }
                });
            }
        }
    }
}

impl DetailView for Episode {
    fn detail(&self, doc: &mut Document) {
        doc.heading(format!("Épisode #{}", self.number));
        doc.text(&self.title);
        doc.blank();
        if let Some(date) = self.air_date {
            doc.field("Diffusé le", format_date(date));
        }
        if let Some(arc) = &self.arc {
            doc.field_toned("Arc", arc, Tone::Blue);
        }
    }
}
