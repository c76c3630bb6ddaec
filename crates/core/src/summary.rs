//! Status aggregation over an in-memory list of work items.
//!
//! All functions here are pure: they take the latest fetched snapshot (rows
//! plus the set of item ids with an open time entry) and tally. Nothing is
//! cached; callers re-fetch and re-aggregate after every mutation.

use std::collections::{BTreeMap, HashSet};

use serde::Serialize;

use crate::status::StatusVocabulary;
use crate::types::DbId;

/// Bucket name for items with no assigned technician. Excluded from
/// per-technician listings; still part of the global totals.
pub const UNASSIGNED_BUCKET: &str = "Sem Técnico";

/// The status fields of one work item, as needed for aggregation.
///
/// The `data` crate's row model converts into this so the tallies stay
/// independent of the wire representation.
#[derive(Debug, Clone)]
pub struct StatusSnapshot {
    pub id: DbId,
    /// Denormalized technician display name; `None` means unassigned.
    pub tecnico_nome: Option<String>,
    pub status_api: String,
    pub status_teste: String,
    pub status_documentacao: String,
}

/// Counts for one scope (global, one technician, or one technician's list).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TaskCounts {
    pub total: usize,
    pub pendentes: usize,
    pub trabalhando: usize,
    pub concluidas: usize,
}

/// A work item is complete iff all three sub-statuses carry the terminal
/// spelling of the live vocabulary.
pub fn is_complete(item: &StatusSnapshot, vocab: &StatusVocabulary) -> bool {
    vocab.is_terminal(&item.status_api)
        && vocab.is_terminal(&item.status_teste)
        && vocab.is_terminal(&item.status_documentacao)
}

/// Global dashboard tallies.
///
/// `pendentes` counts items whose API facet is still pending; `trabalhando`
/// counts items with an open time entry (the "who is actually working"
/// signal), independent of their sub-statuses.
pub fn summarize(
    items: &[StatusSnapshot],
    open_ids: &HashSet<DbId>,
    vocab: &StatusVocabulary,
) -> TaskCounts {
    TaskCounts {
        total: items.len(),
        pendentes: items
            .iter()
            .filter(|i| i.status_api == vocab.pending)
            .count(),
        trabalhando: items.iter().filter(|i| open_ids.contains(&i.id)).count(),
        concluidas: items.iter().filter(|i| is_complete(i, vocab)).count(),
    }
}

/// Tallies for a technician's own task list.
///
/// Here "pendente" means "not yet complete", regardless of whether the item
/// is currently paused or running.
pub fn summarize_assigned(
    items: &[StatusSnapshot],
    open_ids: &HashSet<DbId>,
    vocab: &StatusVocabulary,
) -> TaskCounts {
    let total = items.len();
    let concluidas = items.iter().filter(|i| is_complete(i, vocab)).count();
    TaskCounts {
        total,
        pendentes: total - concluidas,
        trabalhando: items.iter().filter(|i| open_ids.contains(&i.id)).count(),
        concluidas,
    }
}

/// Per-technician tallies keyed by display name, ordered by name.
///
/// Unassigned items fall into [`UNASSIGNED_BUCKET`], which is removed from
/// the result — the per-technician view never lists it. The items are still
/// visible in the global [`summarize`] tallies.
pub fn group_by_technician(
    items: &[StatusSnapshot],
    open_ids: &HashSet<DbId>,
    vocab: &StatusVocabulary,
) -> BTreeMap<String, TaskCounts> {
    let mut groups: BTreeMap<String, TaskCounts> = BTreeMap::new();

    for item in items {
        let name = item
            .tecnico_nome
            .clone()
            .unwrap_or_else(|| UNASSIGNED_BUCKET.to_string());
        let counts = groups.entry(name).or_default();

        counts.total += 1;
        if item.status_api == vocab.pending {
            counts.pendentes += 1;
        }
        if open_ids.contains(&item.id) {
            counts.trabalhando += 1;
        }
        if is_complete(item, vocab) {
            counts.concluidas += 1;
        }
    }

    groups.remove(UNASSIGNED_BUCKET);
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: DbId, tecnico: Option<&str>, api: &str, teste: &str, doc: &str) -> StatusSnapshot {
        StatusSnapshot {
            id,
            tecnico_nome: tecnico.map(str::to_string),
            status_api: api.into(),
            status_teste: teste.into(),
            status_documentacao: doc.into(),
        }
    }

    fn vocab() -> StatusVocabulary {
        StatusVocabulary::default()
    }

    #[test]
    fn complete_requires_all_three_terminal() {
        let v = vocab();
        let done = item(1, None, "Finalizado", "Finalizado", "Finalizado");
        assert!(is_complete(&done, &v));

        for partial in [
            item(2, None, "Trabalhando", "Finalizado", "Finalizado"),
            item(3, None, "Finalizado", "Pendente", "Finalizado"),
            item(4, None, "Finalizado", "Finalizado", "Trabalhando"),
        ] {
            assert!(!is_complete(&partial, &v), "item {} must be incomplete", partial.id);
        }
    }

    #[test]
    fn completeness_follows_configured_terminal_spelling() {
        let legacy = StatusVocabulary {
            pending: "Pendente".into(),
            working: "Trabalhando".into(),
            terminal: "OK".into(),
        };
        let done = item(1, None, "OK", "OK", "OK");
        assert!(is_complete(&done, &legacy));
        // The other generation's spelling is not terminal under this config.
        let other = item(2, None, "Finalizado", "Finalizado", "Finalizado");
        assert!(!is_complete(&other, &legacy));
    }

    #[test]
    fn summarize_counts_each_bucket() {
        let v = vocab();
        let items = vec![
            item(1, Some("Ana"), "Pendente", "Pendente", "Pendente"),
            item(2, Some("Ana"), "Trabalhando", "Pendente", "Pendente"),
            item(3, Some("Bia"), "Finalizado", "Finalizado", "Finalizado"),
            item(4, None, "Pendente", "Pendente", "Pendente"),
        ];
        let open: HashSet<DbId> = [2].into_iter().collect();

        let counts = summarize(&items, &open, &v);
        assert_eq!(counts.total, 4);
        assert_eq!(counts.pendentes, 2);
        assert_eq!(counts.trabalhando, 1);
        assert_eq!(counts.concluidas, 1);
    }

    #[test]
    fn in_progress_is_driven_by_open_entries_not_statuses() {
        let v = vocab();
        // Status says working, but the timer is closed: not "trabalhando".
        let items = vec![item(1, Some("Ana"), "Trabalhando", "Pendente", "Pendente")];
        let counts = summarize(&items, &HashSet::new(), &v);
        assert_eq!(counts.trabalhando, 0);

        let open: HashSet<DbId> = [1].into_iter().collect();
        assert_eq!(summarize(&items, &open, &v).trabalhando, 1);
    }

    #[test]
    fn assigned_summary_counts_incomplete_as_pending() {
        let v = vocab();
        let items = vec![
            item(1, Some("Ana"), "Trabalhando", "Pendente", "Pendente"),
            item(2, Some("Ana"), "Finalizado", "Finalizado", "Finalizado"),
            item(3, Some("Ana"), "Pendente", "Pendente", "Pendente"),
        ];
        let open: HashSet<DbId> = [1].into_iter().collect();

        let counts = summarize_assigned(&items, &open, &v);
        assert_eq!(counts.total, 3);
        assert_eq!(counts.concluidas, 1);
        assert_eq!(counts.pendentes, 2);
        assert_eq!(counts.trabalhando, 1);
    }

    #[test]
    fn grouping_matches_manual_tallies_and_drops_sentinel() {
        let v = vocab();
        let items = vec![
            item(1, Some("Ana"), "Pendente", "Pendente", "Pendente"),
            item(2, Some("Ana"), "Trabalhando", "Pendente", "Pendente"),
            item(3, Some("Ana"), "Finalizado", "Finalizado", "Finalizado"),
            item(4, Some("Bia"), "Finalizado", "Finalizado", "Finalizado"),
            item(5, None, "Pendente", "Pendente", "Pendente"),
        ];
        let open: HashSet<DbId> = [2].into_iter().collect();

        let groups = group_by_technician(&items, &open, &v);
        assert_eq!(groups.len(), 2);
        assert!(!groups.contains_key(UNASSIGNED_BUCKET));

        let ana = &groups["Ana"];
        assert_eq!((ana.total, ana.pendentes, ana.trabalhando, ana.concluidas), (3, 1, 1, 1));
        let bia = &groups["Bia"];
        assert_eq!((bia.total, bia.pendentes, bia.trabalhando, bia.concluidas), (1, 0, 0, 1));

        // The unassigned item still counts globally.
        assert_eq!(summarize(&items, &open, &v).total, 5);
    }

    #[test]
    fn grouping_of_empty_list_is_empty() {
        let groups = group_by_technician(&[], &HashSet::new(), &vocab());
        assert!(groups.is_empty());
    }
}
