//! Snapshot category visibility
//!
//! The visibility list is the ordered list of category names the user wants
//! to see. [`toggle_category`] computes the next list; [`VisibilityStore`]
//! pushes it through a [`SettingsUpdater`] so the host can persist it.

use crate::config::{SettingsUpdate, SettingsUpdater};
use crate::error::SnapshotResult;

/// Toggle `category` in the visibility list
///
/// When `category` is present every occurrence is removed, otherwise it is
/// appended once at the end. Other entries, duplicates included, keep their
/// order. Names are not checked against the known categories.
pub fn toggle_category<S: AsRef<str>>(current: &[S], category: &str) -> Vec<String> {
    let present = current.iter().any(|c| c.as_ref() == category);

    let mut next: Vec<String> = current
        .iter()
        .map(|c| c.as_ref())
        .filter(|c| !present || *c != category)
        .map(str::to_string)
        .collect();

    if !present {
        next.push(category.to_string());
    }

    next
}

/// Applies visibility toggles to the settings held by an updater
pub struct VisibilityStore<'a, U: SettingsUpdater> {
    updater: &'a mut U,
}

impl<'a, U: SettingsUpdater> VisibilityStore<'a, U> {
    pub fn new(updater: &'a mut U) -> Self {
        Self { updater }
    }

    /// The visibility list as currently stored
    pub fn visible(&self) -> &[String] {
        &self.updater.settings().visible_snapshot_categories
    }

    /// Toggle `category`, hand the new list to the updater and return it
    pub fn toggle(&mut self, category: &str) -> SnapshotResult<Vec<String>> {
        let was_visible = self.visible().iter().any(|c| c == category);
        let next = toggle_category(self.visible(), category);

        self.updater
            .update_settings(SettingsUpdate::visible_categories(next.clone()))?;

        tracing::info!(
            category,
            visible = !was_visible,
            "toggled snapshot category"
        );
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MemorySettingsStore, Settings};

    fn list(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_toggle_absent_appends() {
        assert_eq!(
            toggle_category(&["Assets", "Liabilities"], "Income"),
            list(&["Assets", "Liabilities", "Income"])
        );
    }

    #[test]
    fn test_toggle_present_removes() {
        assert_eq!(
            toggle_category(&["Assets", "Liabilities"], "Assets"),
            list(&["Liabilities"])
        );
    }

    #[test]
    fn test_toggle_removes_every_occurrence() {
        let current = ["Income", "Assets", "Income", "Expenses", "Income"];
        assert_eq!(
            toggle_category(&current, "Income"),
            list(&["Assets", "Expenses"])
        );
    }

    #[test]
    fn test_toggle_keeps_other_duplicates() {
        let current = ["Assets", "Assets", "Expenses"];
        assert_eq!(
            toggle_category(&current, "Income"),
            list(&["Assets", "Assets", "Expenses", "Income"])
        );
    }

    #[test]
    fn test_toggle_twice_restores_absent_category() {
        let before = list(&["Assets", "Liabilities", "Expenses"]);
        let twice = toggle_category(&toggle_category(&before, "Income"), "Income");
        assert_eq!(twice, before);
    }

    #[test]
    fn test_toggle_twice_restores_present_category_as_set() {
        let before = list(&["Assets", "Liabilities", "Expenses"]);
        let mut twice = toggle_category(&toggle_category(&before, "Assets"), "Assets");
        assert_eq!(twice, list(&["Liabilities", "Expenses", "Assets"]));

        let mut expected = before.clone();
        twice.sort();
        expected.sort();
        assert_eq!(twice, expected);
    }

    #[test]
    fn test_toggle_twice_drops_existing_duplicates() {
        let before = list(&["Assets", "Income", "Assets"]);
        let twice = toggle_category(&toggle_category(&before, "Assets"), "Assets");
        assert_eq!(twice, list(&["Income", "Assets"]));
    }

    #[test]
    fn test_toggle_accepts_unknown_names() {
        assert_eq!(toggle_category(&[] as &[&str], "Equity"), list(&["Equity"]));
        assert!(toggle_category(&["Equity"], "Equity").is_empty());
    }

    #[test]
    fn test_toggle_is_case_sensitive() {
        assert_eq!(
            toggle_category(&["Assets"], "assets"),
            list(&["Assets", "assets"])
        );
    }

    #[test]
    fn test_store_persists_through_updater() {
        let mut updater = MemorySettingsStore::new(Settings::default());

        let next = VisibilityStore::new(&mut updater).toggle("Income").unwrap();
        assert_eq!(next, list(&["Assets", "Liabilities", "Expenses"]));
        assert_eq!(updater.settings().visible_snapshot_categories, next);
        assert_eq!(updater.update_count(), 1);

        let mut store = VisibilityStore::new(&mut updater);
        store.toggle("Income").unwrap();
        assert_eq!(
            store.visible(),
            ["Assets", "Liabilities", "Expenses", "Income"]
        );
    }

    #[test]
    fn test_store_leaves_other_settings_alone() {
        let mut settings = Settings::default();
        settings.currency_symbol = "€".to_string();
        let mut updater = MemorySettingsStore::new(settings);

        VisibilityStore::new(&mut updater).toggle("Assets").unwrap();
        assert_eq!(updater.settings().currency_symbol, "€");
        assert_eq!(updater.settings().ledger_file, "transactions.ledger");
    }
}
