/// Remedy types and selection.
///
/// Selection order is fixed: every remedy of the primary category in authored
/// order, then the `Immediate` remedies of each secondary cause in rank order,
/// then, only if nothing was selected, the general fallback set. A remedy id
/// appears at most once.
use std::collections::HashSet;

use serde::Serialize;

use crate::category::Category;
use crate::remedy_table::{remedies_for, FALLBACK_REMEDIES};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RemedyKind {
    Immediate,
    ShortTerm,
    Preventive,
}

/// A static self-care suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Remedy {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub time_to_effect: &'static str,
    pub steps: &'static [&'static str],
    pub warnings: &'static [&'static str],
    pub kind: RemedyKind,
}

struct RemedyList {
    remedies: Vec<Remedy>,
    seen: HashSet<&'static str>,
}

impl RemedyList {
    fn new() -> Self {
        Self {
            remedies: Vec::new(),
            seen: HashSet::new(),
        }
    }

    fn extend<'a>(&mut self, candidates: impl IntoIterator<Item = &'a Remedy>) {
        for remedy in candidates {
            if self.seen.insert(remedy.id) {
                self.remedies.push(*remedy);
            }
        }
    }
}

/// Build the ordered, de-duplicated remedy list for a ranked diagnosis.
pub fn select_remedies(primary: Category, secondary: &[Category]) -> Vec<Remedy> {
    let mut list = RemedyList::new();

    list.extend(remedies_for(primary));

    for category in secondary {
        list.extend(
            remedies_for(*category)
                .iter()
                .filter(|r| r.kind == RemedyKind::Immediate),
        );
    }

    if list.remedies.is_empty() {
        list.extend(FALLBACK_REMEDIES);
    }

    list.remedies
}
