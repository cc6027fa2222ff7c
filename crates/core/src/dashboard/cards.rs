//! Filtering and ordering of the dashboard's patient cards.

use crate::constants::STATUS_ALL;
use crate::models::PatientCard;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use std::cmp::Ordering;

/// Status selector on the dashboard toolbar.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(String),
}

impl StatusFilter {
    /// `"all"` selects every card; any other value must equal a card's status exactly.
    pub fn from_value(value: &str) -> Self {
        if value == STATUS_ALL {
            Self::All
        } else {
            Self::Only(value.to_owned())
        }
    }

    pub fn matches(&self, status: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == status,
        }
    }
}

/// Sort selector on the dashboard toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    Name,
    /// Descending on the raw status label. Lexicographic, so not a clinical severity order.
    Critical,
    #[default]
    Recent,
}

impl SortKey {
    /// Unknown values fall back to `Recent`.
    pub fn from_value(value: &str) -> Self {
        match value {
            "name" => Self::Name,
            "critical" => Self::Critical,
            _ => Self::Recent,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardSlot {
    pub card: PatientCard,
    pub visible: bool,
}

/// The dashboard's patient list in display order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CardList {
    slots: Vec<CardSlot>,
}

impl CardList {
    /// All cards start visible, in the order given.
    pub fn new(cards: Vec<PatientCard>) -> Self {
        Self {
            slots: cards
                .into_iter()
                .map(|card| CardSlot {
                    card,
                    visible: true,
                })
                .collect(),
        }
    }

    pub fn slots(&self) -> &[CardSlot] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn visible(&self) -> impl Iterator<Item = &PatientCard> {
        self.slots.iter().filter(|s| s.visible).map(|s| &s.card)
    }

    /// Show exactly the cards whose name contains `search` (case-insensitive) and whose status
    /// passes `status`. Hides everything else.
    pub fn filter(&mut self, search: &str, status: &StatusFilter) {
        let needle = search.to_lowercase();
        for slot in &mut self.slots {
            slot.visible =
                slot.card.name.to_lowercase().contains(&needle) && status.matches(&slot.card.status);
        }
    }

    /// Reorder the cards. Visibility is carried with each card. Ties keep their current order.
    pub fn sort(&mut self, key: SortKey) {
        match key {
            SortKey::Name => self
                .slots
                .sort_by(|a, b| compare_text(&a.card.name, &b.card.name)),
            SortKey::Critical => self
                .slots
                .sort_by(|a, b| compare_text(&b.card.status, &a.card.status)),
            SortKey::Recent => self.slots.sort_by(|a, b| {
                compare_recent(
                    last_recorded(&a.card.last_vital_line),
                    last_recorded(&b.card.last_vital_line),
                )
            }),
        }
    }
}

/// Letter order regardless of case; texts that differ only in case fall back to byte order.
fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Newest first; cards without a readable date go last.
fn compare_recent(a: Option<NaiveDateTime>, b: Option<NaiveDateTime>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Read the timestamp out of a line such as `Last Recorded: 2024-03-01 10:15:00`.
///
/// Only the text between the first and second `": "` is considered.
pub fn last_recorded(line: &str) -> Option<NaiveDateTime> {
    let value = line.split(": ").nth(1)?.trim();

    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"] {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(value, format) {
            return Some(parsed);
        }
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.naive_utc());
    }
    if let Ok(parsed) = DateTime::parse_from_rfc2822(value) {
        return Some(parsed.naive_utc());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(name: &str, status: &str, last: &str) -> PatientCard {
        PatientCard {
            registration_id: format!("id-{name}"),
            name: name.into(),
            status: status.into(),
            last_vital_line: format!("Last Recorded: {last}"),
        }
    }

    fn sample() -> CardList {
        CardList::new(vec![
            card("Grace Hopper", "HIGH", "2024-03-02 09:00:00"),
            card("Ada Lovelace", "CRITICAL", "2024-03-05 14:30:00"),
            card("alan turing", "LOW", "2024-02-28"),
            card("Barbara Liskov", "MODERATE", "not recorded"),
        ])
    }

    fn names(list: &CardList) -> Vec<&str> {
        list.slots().iter().map(|s| s.card.name.as_str()).collect()
    }

    fn visible_names(list: &CardList) -> Vec<&str> {
        list.visible().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn filter_is_case_insensitive_substring() {
        let mut list = sample();
        list.filter("AL", &StatusFilter::All);
        assert_eq!(visible_names(&list), ["alan turing"]);

        list.filter("a", &StatusFilter::All);
        assert_eq!(list.visible().count(), 4);
    }

    #[test]
    fn filter_combines_search_and_status() {
        let mut list = sample();
        list.filter("", &StatusFilter::from_value("CRITICAL"));
        assert_eq!(visible_names(&list), ["Ada Lovelace"]);

        list.filter("grace", &StatusFilter::from_value("CRITICAL"));
        assert_eq!(list.visible().count(), 0);

        list.filter("grace", &StatusFilter::from_value("all"));
        assert_eq!(visible_names(&list), ["Grace Hopper"]);
    }

    #[test]
    fn status_match_is_exact() {
        let mut list = sample();
        list.filter("", &StatusFilter::from_value("critical"));
        assert_eq!(list.visible().count(), 0);
    }

    #[test]
    fn visibility_matches_predicate_for_every_card() {
        let searches = ["", "a", "LOVE", "zz", " "];
        let statuses = ["all", "HIGH", "LOW", "CRITICAL", "MODERATE", "UNKNOWN"];
        for search in searches {
            for status in statuses {
                let mut list = sample();
                let filter = StatusFilter::from_value(status);
                list.filter(search, &filter);
                for slot in list.slots() {
                    let expected = slot
                        .card
                        .name
                        .to_lowercase()
                        .contains(&search.to_lowercase())
                        && (status == "all" || slot.card.status == status);
                    assert_eq!(slot.visible, expected, "{search:?}/{status:?}/{}", slot.card.name);
                }
            }
        }
    }

    #[test]
    fn sort_by_name_ignores_case() {
        let mut list = sample();
        list.sort(SortKey::from_value("name"));
        let sorted = names(&list);
        assert!(sorted
            .windows(2)
            .all(|w| w[0].to_lowercase() <= w[1].to_lowercase()));
        assert_eq!(
            sorted,
            ["Ada Lovelace", "alan turing", "Barbara Liskov", "Grace Hopper"]
        );
    }

    #[test]
    fn case_only_differences_keep_a_fixed_order() {
        assert_eq!(compare_text("ada", "Ada"), Ordering::Greater);
        assert_eq!(compare_text("Ada", "ada"), Ordering::Less);
        assert_eq!(compare_text("Ada", "Ada"), Ordering::Equal);
        assert_eq!(compare_text("low", "HIGH"), Ordering::Greater);
    }

    #[test]
    fn sort_critical_is_descending_on_raw_label() {
        let mut list = sample();
        list.sort(SortKey::Critical);
        let statuses: Vec<&str> = list.slots().iter().map(|s| s.card.status.as_str()).collect();
        assert_eq!(statuses, ["MODERATE", "LOW", "HIGH", "CRITICAL"]);
    }

    #[test]
    fn sort_recent_puts_newest_first_and_undated_last() {
        let mut list = sample();
        list.sort(SortKey::from_value("whatever"));
        assert_eq!(
            names(&list),
            ["Ada Lovelace", "Grace Hopper", "alan turing", "Barbara Liskov"]
        );
    }

    #[test]
    fn sort_keeps_visibility_with_card() {
        let mut list = sample();
        list.filter("ada", &StatusFilter::All);
        list.sort(SortKey::Name);
        let ada = list
            .slots()
            .iter()
            .find(|s| s.card.name == "Ada Lovelace")
            .unwrap();
        assert!(ada.visible);
        assert_eq!(list.visible().count(), 1);
    }

    #[test]
    fn last_recorded_formats() {
        assert!(last_recorded("Last Recorded: 2024-03-01 10:15:00").is_some());
        assert!(last_recorded("Last Recorded: 2024-03-01T10:15:00").is_some());
        assert!(last_recorded("Last Recorded: Fri, 01 Mar 2024 10:15:00 GMT").is_some());
        assert!(last_recorded("Last Recorded: 2024-03-01").is_some());
        assert!(last_recorded("Last Recorded 2024-03-01").is_none());
        assert!(last_recorded("").is_none());
    }
}
