use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, IntoStaticStr};

pub const EPIC_SCORE_THRESHOLD: f64 = 4.5;
pub const GOOD_SCORE_THRESHOLD: f64 = 3.0;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: i64,
    pub name: String,
    pub expansion: String,
    pub card_class: Option<String>,
    pub rarity: Option<String>,
    pub mana_cost: Option<i32>,
    pub pic: Option<String>,
    pub arena_score: Option<f64>,
    #[serde(default)]
    pub arena_win_rates: Option<HashMap<String, f64>>,
    pub short_review: Option<String>,
    pub reviewer_name: Option<String>,
}

/// Display bucket for a card's arena score.
#[derive(Clone, Copy, Debug, Default, Display, Eq, IntoStaticStr, PartialEq)]
#[strum(serialize_all = "kebab-case")]
pub enum ScoreTier {
    #[default]
    Unknown,
    Bad,
    Good,
    Epic,
}

impl Card {
    pub fn score_tier(&self) -> ScoreTier {
        match self.arena_score {
            Some(score) if score >= EPIC_SCORE_THRESHOLD => ScoreTier::Epic,
            Some(score) if score >= GOOD_SCORE_THRESHOLD => ScoreTier::Good,
            Some(_) => ScoreTier::Bad,
            None => ScoreTier::Unknown,
        }
    }

    /// Win rate of this card for one class, if known.
    pub fn win_rate_for_class(&self, card_class: &str) -> Option<f64> {
        self.arena_win_rates.as_ref()?.get(card_class).copied()
    }

    /// Mean win rate across all classes with data.
    pub fn average_win_rate(&self) -> Option<f64> {
        let win_rates = self.arena_win_rates.as_ref()?;
        if win_rates.is_empty() {
            return None;
        }
        Some(win_rates.values().sum::<f64>() / win_rates.len() as f64)
    }
}

/// Filter selection of the card list page. Blank selections are omitted
/// from the query string.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardFilters {
    pub expansion: Option<String>,
    pub card_class: Option<String>,
    pub rarity: Option<String>,
    pub search: Option<String>,
}

impl CardFilters {
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        push_non_blank(&mut query, "version", &self.expansion);
        push_non_blank(&mut query, "card_class", &self.card_class);
        push_non_blank(&mut query, "rarity", &self.rarity);
        push_non_blank(&mut query, "search", &self.search);
        query
    }
}

fn push_non_blank(query: &mut Vec<(&'static str, String)>, key: &'static str, value: &Option<String>) {
    if let Some(value) = value {
        let value = value.trim();
        if !value.is_empty() {
            query.push((key, String::from(value)));
        }
    }
}
