//! Selection controller: the selector's state machine.
//!
//! [`SelectionController`] owns the three pieces of mutable selector state:
//! panel visibility, the search term (held inside
//! [`PanelState::Open`]), and the [`SelectionSet`]. All mutation goes through
//! its transition methods, which keep the coupling between them intact:
//!
//! - closing the panel, by any route, drops the search term
//! - the search term can only change while the panel is open
//! - selection survives every panel transition
//!
//! Every transition reports to the host through the controller's
//! [`SelectionListener`] before it returns.
//!
//! # Example
//!
//! ```rust
//! use multiselect::app::{Notification, RecordingListener, SelectionController};
//! use multiselect::{Config, Item};
//!
//! let config = Config { single: true, ..Config::default() };
//! let mut controller = SelectionController::new(config, RecordingListener::new());
//!
//! controller.open_panel();
//! controller.set_search_term("app");
//! controller.toggle_item(&Item::new(1, "Apple"));
//!
//! assert_eq!(controller.selected_keys(), &[1]);
//! assert!(!controller.is_open());
//! assert_eq!(controller.search_term(), "");
//! assert_eq!(
//!     controller.listener().notifications().last(),
//!     Some(&Notification::Submitted)
//! );
//! ```

use super::candidates::{compute_candidates, is_selected};
use super::listener::{NoopListener, SelectionListener};
use super::modes::PanelState;
use super::selection::{SelectionMode, SelectionSet};
use crate::domain::Item;
use crate::ui::viewmodel::{
    CandidateRow, EmptyState, HeaderInfo, PanelView, SearchBarInfo, SelectorView, TagView,
};
use crate::Config;
use std::fmt;

/// The selector state machine.
///
/// Generic over the item key type `K` and the host listener `L`.
#[derive(Debug, Clone)]
pub struct SelectionController<K, L = NoopListener> {
    config: Config,
    panel: PanelState,
    selection: SelectionSet<K>,
    listener: L,
}

impl<K, L> SelectionController<K, L>
where
    K: Clone + PartialEq + fmt::Debug,
    L: SelectionListener<K>,
{
    /// Creates a controller with an empty selection and a closed panel.
    #[must_use]
    pub fn new(config: Config, listener: L) -> Self {
        Self::with_selection(config, [], listener)
    }

    /// Creates a controller seeded with an existing selection.
    ///
    /// Duplicate keys are dropped; in single mode only the first key is kept.
    /// No notification is emitted for the seed.
    #[must_use]
    pub fn with_selection(
        config: Config,
        keys: impl IntoIterator<Item = K>,
        listener: L,
    ) -> Self {
        let selection = SelectionSet::with_keys(config.selection_mode(), keys);
        Self {
            config,
            panel: PanelState::Closed,
            selection,
            listener,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    pub const fn panel(&self) -> &PanelState {
        &self.panel
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.panel.is_open()
    }

    /// Current search term, empty while closed.
    #[must_use]
    pub fn search_term(&self) -> &str {
        self.panel.search_term()
    }

    #[must_use]
    pub const fn selection(&self) -> &SelectionSet<K> {
        &self.selection
    }

    /// Selected keys in selection order.
    #[must_use]
    pub fn selected_keys(&self) -> &[K] {
        self.selection.keys()
    }

    #[must_use]
    pub const fn listener(&self) -> &L {
        &self.listener
    }

    pub fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }

    #[must_use]
    pub fn into_listener(self) -> L {
        self.listener
    }

    /// Opens the panel with an empty search term.
    ///
    /// Leaves the selection alone and emits nothing. Returns `false` if the
    /// panel was already open.
    pub fn open_panel(&mut self) -> bool {
        if self.panel.is_open() {
            return false;
        }
        tracing::debug!("panel opened");
        self.panel = PanelState::open();
        true
    }

    /// Flips the panel between open and closed.
    ///
    /// Triggered by a header tap. Always notifies
    /// [`on_panel_toggled`](SelectionListener::on_panel_toggled), whichever
    /// state results.
    pub fn toggle_panel(&mut self) -> bool {
        self.panel = if self.panel.is_open() {
            PanelState::Closed
        } else {
            PanelState::open()
        };
        tracing::debug!(open = self.panel.is_open(), "panel toggled");
        self.listener.on_panel_toggled();
        true
    }

    /// Closes the panel and drops the search term, keeping the selection.
    ///
    /// Triggered by the back icon. Notifies
    /// [`on_panel_cleared`](SelectionListener::on_panel_cleared). Returns
    /// `false` without notifying if the panel was already closed.
    pub fn close_panel(&mut self) -> bool {
        if !self.panel.is_open() {
            return false;
        }
        tracing::debug!(query = %self.panel.search_term(), "panel closed");
        self.panel = PanelState::Closed;
        self.listener.on_panel_cleared();
        true
    }

    /// Replaces the search term.
    ///
    /// Ignored while the panel is closed. While open, stores `term` as typed
    /// and notifies [`on_search_changed`](SelectionListener::on_search_changed)
    /// with it.
    pub fn set_search_term(&mut self, term: impl Into<String>) -> bool {
        let PanelState::Open { search_term } = &mut self.panel else {
            tracing::debug!("search input ignored while panel is closed");
            return false;
        };

        *search_term = term.into();
        tracing::trace!(query = %search_term, "search term updated");
        self.listener.on_search_changed(search_term);
        true
    }

    /// Toggles an item's selection.
    ///
    /// Disabled items and items without a key are ignored. Otherwise the
    /// full new selection is reported through
    /// [`on_selection_changed`](SelectionListener::on_selection_changed).
    /// In single mode the toggle then submits: the panel closes, the search
    /// term is dropped and [`on_submitted`](SelectionListener::on_submitted)
    /// fires.
    ///
    /// # Returns
    ///
    /// `true` if the selection was touched.
    pub fn toggle_item(&mut self, item: &Item<K>) -> bool {
        if item.disabled {
            tracing::debug!(key = ?item.key, "ignoring tap on disabled item");
            return false;
        }

        let Some(key) = item.key.as_ref() else {
            tracing::warn!(
                label = %item.label(),
                unique_key = %self.config.unique_key,
                "item has no key, check the unique_key configuration"
            );
            return false;
        };

        let outcome = self.selection.toggle(key, item.disabled);
        if !outcome.toggled() {
            return false;
        }

        tracing::debug!(key = ?key, ?outcome, selected = self.selection.len(), "item toggled");
        self.listener.on_selection_changed(self.selection.keys());

        if self.selection.mode() == SelectionMode::Single {
            self.finish_submission();
        }
        true
    }

    /// Deselects `key` from outside the list, e.g. from a tag's remove icon.
    ///
    /// Notifies the new selection if the key was present.
    pub fn remove_item(&mut self, key: &K) -> bool {
        if !self.selection.remove(key) {
            return false;
        }
        tracing::debug!(key = ?key, selected = self.selection.len(), "item removed");
        self.listener.on_selection_changed(self.selection.keys());
        true
    }

    /// Submits a multi-mode selection.
    ///
    /// Valid only in multi mode with the panel open: closes the panel, drops
    /// the search term, keeps the selection and notifies
    /// [`on_submitted`](SelectionListener::on_submitted). Single mode submits
    /// through [`toggle_item`](Self::toggle_item) instead, so an explicit
    /// submit there is ignored.
    pub fn submit(&mut self) -> bool {
        if self.selection.mode() == SelectionMode::Single {
            tracing::debug!("explicit submit ignored in single mode");
            return false;
        }
        if !self.panel.is_open() {
            tracing::debug!("submit ignored while panel is closed");
            return false;
        }
        self.finish_submission();
        true
    }

    /// Asks the host to add a new item.
    ///
    /// Ignored unless `can_add_items` is configured.
    pub fn request_add_item(&mut self) -> bool {
        if !self.config.can_add_items {
            tracing::debug!("add item requested but adding items is disabled");
            return false;
        }
        self.listener.on_add_item_requested();
        true
    }

    fn finish_submission(&mut self) {
        self.panel = PanelState::Closed;
        tracing::debug!(selected = self.selection.len(), "selection submitted");
        self.listener.on_submitted();
    }

    /// Candidate items for the current search term and selection.
    ///
    /// Items are supplied on every call; the controller keeps no copy.
    #[must_use]
    pub fn candidates<'a>(&self, items: &'a [Item<K>]) -> Vec<&'a Item<K>> {
        compute_candidates(
            items,
            self.panel.search_term(),
            &self.selection,
            self.config.remove_selected,
            self.config.match_mode,
        )
    }

    /// Computes a render-ready view model for `items`.
    ///
    /// # View Rules
    ///
    /// - Header label is `select_text`, or `"{select_text} ({n} {selected_text})"`
    ///   when something is selected
    /// - Open panel: search bar, candidate rows (or the empty-state message),
    ///   submit affordance in multi mode only, back icon unless hidden,
    ///   add-item affordance if enabled
    /// - Closed, multi mode, tags not hidden: one tag per selected key in
    ///   selection order, labelled from the matching item
    #[must_use]
    pub fn compute_viewmodel(&self, items: &[Item<K>]) -> SelectorView<K> {
        let _span = tracing::debug_span!(
            "compute_viewmodel",
            total_items = items.len(),
            open = self.panel.is_open()
        )
        .entered();

        let multi = self.selection.mode() == SelectionMode::Multi;

        let panel = match &self.panel {
            PanelState::Closed => None,
            PanelState::Open { search_term } => Some(self.compute_panel(items, search_term, multi)),
        };

        let tags = if panel.is_none() && multi && !self.config.hide_tags {
            self.compute_tags(items)
        } else {
            vec![]
        };

        SelectorView {
            header: self.compute_header(),
            panel,
            tags,
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let selected_count = self.selection.len();
        let label = if selected_count == 0 {
            self.config.select_text.clone()
        } else {
            format!(
                "{} ({selected_count} {})",
                self.config.select_text, self.config.selected_text
            )
        };
        HeaderInfo {
            label,
            selected_count,
        }
    }

    fn compute_panel(&self, items: &[Item<K>], search_term: &str, multi: bool) -> PanelView<K> {
        let rows: Vec<CandidateRow<K>> = self
            .candidates(items)
            .into_iter()
            .map(|item| CandidateRow {
                key: item.key.clone(),
                label: item.label().to_string(),
                is_selected: is_selected(item, &self.selection),
                is_disabled: item.disabled,
            })
            .collect();

        let empty_state = rows.is_empty().then(|| EmptyState {
            message: self.config.no_items_text.clone(),
        });

        PanelView {
            search_bar: SearchBarInfo {
                query: search_term.to_string(),
                placeholder: self.config.search_placeholder.clone(),
            },
            rows,
            empty_state,
            submit: multi.then_some(self.config.submit_affordance),
            show_back_icon: !self.config.hide_back_icon,
            show_add_item: self.config.can_add_items,
        }
    }

    fn compute_tags(&self, items: &[Item<K>]) -> Vec<TagView<K>> {
        self.selection
            .keys()
            .iter()
            .map(|key| TagView {
                key: key.clone(),
                label: items
                    .iter()
                    .find(|item| item.has_key(key))
                    .map(|item| item.label().to_string()),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::actions::Notification;
    use crate::app::listener::RecordingListener;
    use crate::app::modes::SubmitAffordance;

    type Controller = SelectionController<u32, RecordingListener<u32>>;

    fn controller(config: Config) -> Controller {
        SelectionController::new(config, RecordingListener::new())
    }

    fn multi() -> Controller {
        controller(Config::default())
    }

    fn single() -> Controller {
        controller(Config {
            single: true,
            ..Config::default()
        })
    }

    fn items() -> Vec<Item<u32>> {
        vec![
            Item::new(1, "Apple"),
            Item::new(2, "Banana"),
            Item::new(3, "Cherry").disabled(),
        ]
    }

    #[test]
    fn starts_closed_and_empty() {
        let c = multi();
        assert_eq!(c.panel(), &PanelState::Closed);
        assert_eq!(c.search_term(), "");
        assert!(c.selection().is_empty());
    }

    #[test]
    fn open_panel_is_silent_and_idempotent() {
        let mut c = multi();
        assert!(c.open_panel());
        assert!(!c.open_panel());
        assert!(c.is_open());
        assert!(c.listener().notifications().is_empty());
    }

    #[test]
    fn toggle_panel_always_notifies() {
        let mut c = multi();
        c.toggle_panel();
        assert!(c.is_open());
        c.set_search_term("ap");
        c.toggle_panel();
        assert!(!c.is_open());
        assert_eq!(c.search_term(), "");
        assert_eq!(
            c.listener_mut().drain(),
            vec![
                Notification::PanelToggled,
                Notification::SearchChanged("ap".to_string()),
                Notification::PanelToggled,
            ]
        );
    }

    #[test]
    fn close_panel_clears_search_but_not_selection() {
        let mut c = multi();
        let items = items();
        c.open_panel();
        c.toggle_item(&items[0]);
        c.set_search_term("ban");
        c.listener_mut().drain();

        assert!(c.close_panel());
        assert!(!c.is_open());
        assert_eq!(c.search_term(), "");
        assert_eq!(c.selected_keys(), &[1]);
        assert_eq!(c.listener().notifications(), &[Notification::PanelCleared]);

        assert!(!c.close_panel());
        assert_eq!(c.listener().notifications().len(), 1);
    }

    #[test]
    fn search_is_ignored_while_closed() {
        let mut c = multi();
        assert!(!c.set_search_term("ban"));
        assert_eq!(c.search_term(), "");
        assert!(c.listener().notifications().is_empty());
    }

    #[test]
    fn search_reports_raw_term() {
        let mut c = multi();
        c.open_panel();
        c.set_search_term("  Ban ");
        assert_eq!(c.search_term(), "  Ban ");
        assert_eq!(
            c.listener().notifications(),
            &[Notification::SearchChanged("  Ban ".to_string())]
        );
    }

    #[test]
    fn multi_toggles_report_full_selection() {
        let mut c = multi();
        let items = items();
        c.toggle_item(&items[0]);
        c.toggle_item(&items[1]);
        c.toggle_item(&items[0]);
        assert_eq!(c.selected_keys(), &[2]);
        assert_eq!(
            c.listener().notifications(),
            &[
                Notification::SelectionChanged(vec![1]),
                Notification::SelectionChanged(vec![1, 2]),
                Notification::SelectionChanged(vec![2]),
            ]
        );
    }

    #[test]
    fn multi_toggle_keeps_panel_open() {
        let mut c = multi();
        c.open_panel();
        c.set_search_term("a");
        c.toggle_item(&items()[0]);
        assert!(c.is_open());
        assert_eq!(c.search_term(), "a");
    }

    #[test]
    fn single_toggle_submits() {
        let mut c = single();
        let items = items();
        c.open_panel();
        c.set_search_term("app");
        c.listener_mut().drain();

        assert!(c.toggle_item(&items[0]));
        assert_eq!(c.selected_keys(), &[1]);
        assert!(!c.is_open());
        assert_eq!(c.search_term(), "");
        assert_eq!(
            c.listener_mut().drain(),
            vec![Notification::SelectionChanged(vec![1]), Notification::Submitted]
        );

        c.open_panel();
        c.toggle_item(&items[1]);
        assert_eq!(c.selected_keys(), &[2]);

        c.open_panel();
        c.toggle_item(&items[1]);
        assert_eq!(c.selected_keys(), &[2]);
        assert!(!c.is_open());
    }

    #[test]
    fn disabled_items_are_ignored() {
        let mut c = single();
        c.open_panel();
        assert!(!c.toggle_item(&items()[2]));
        assert!(c.selection().is_empty());
        assert!(c.is_open());
        assert!(c.listener().notifications().is_empty());
    }

    #[test]
    fn keyless_items_cannot_be_selected() {
        let mut c = multi();
        let ghost = Item {
            key: None,
            display_value: Some("Ghost".to_string()),
            disabled: false,
        };
        assert!(!c.toggle_item(&ghost));
        assert!(c.selection().is_empty());
        assert!(c.listener().notifications().is_empty());
    }

    #[test]
    fn remove_item_notifies_only_when_present() {
        let mut c = SelectionController::with_selection(
            Config::default(),
            [1, 2, 3],
            RecordingListener::new(),
        );
        assert!(c.remove_item(&2));
        assert!(!c.remove_item(&9));
        assert_eq!(c.selected_keys(), &[1, 3]);
        assert_eq!(
            c.listener().notifications(),
            &[Notification::SelectionChanged(vec![1, 3])]
        );
    }

    #[test]
    fn submit_closes_multi_panel() {
        let mut c = multi();
        c.open_panel();
        c.toggle_item(&items()[1]);
        c.set_search_term("b");
        c.listener_mut().drain();

        assert!(c.submit());
        assert!(!c.is_open());
        assert_eq!(c.search_term(), "");
        assert_eq!(c.selected_keys(), &[2]);
        assert_eq!(c.listener().notifications(), &[Notification::Submitted]);
    }

    #[test]
    fn submit_requires_open_multi_panel() {
        let mut closed = multi();
        assert!(!closed.submit());

        let mut s = single();
        s.open_panel();
        assert!(!s.submit());
        assert!(s.is_open());
        assert!(s.listener().notifications().is_empty());
    }

    #[test]
    fn add_item_request_respects_config() {
        let mut c = multi();
        assert!(!c.request_add_item());

        let mut c = controller(Config {
            can_add_items: true,
            ..Config::default()
        });
        assert!(c.request_add_item());
        assert_eq!(c.listener().notifications(), &[Notification::AddItemRequested]);
    }

    #[test]
    fn seeded_single_selection_keeps_first_key() {
        let c: Controller = SelectionController::with_selection(
            Config {
                single: true,
                ..Config::default()
            },
            [4, 5],
            RecordingListener::new(),
        );
        assert_eq!(c.selected_keys(), &[4]);
    }

    #[test]
    fn candidates_follow_search_and_remove_selected() {
        let mut c = controller(Config {
            remove_selected: true,
            ..Config::default()
        });
        let items = items();
        c.toggle_item(&items[0]);
        c.open_panel();

        let keys: Vec<u32> = c.candidates(&items).iter().filter_map(|i| i.key).collect();
        assert_eq!(keys, vec![2, 3]);

        c.set_search_term("ch");
        let keys: Vec<u32> = c.candidates(&items).iter().filter_map(|i| i.key).collect();
        assert_eq!(keys, vec![3]);
    }

    #[test]
    fn viewmodel_closed_shows_header_and_tags() {
        let mut c = multi();
        let items = items();
        c.toggle_item(&items[1]);
        c.toggle_item(&items[0]);
        c.remove_item(&1);
        c.toggle_item(&items[0]);

        let vm = c.compute_viewmodel(&items);
        assert_eq!(vm.header.label, "Select (2 selected)");
        assert_eq!(vm.header.selected_count, 2);
        assert!(vm.panel.is_none());
        assert_eq!(
            vm.tags,
            vec![
                TagView { key: 2, label: Some("Banana".to_string()) },
                TagView { key: 1, label: Some("Apple".to_string()) },
            ]
        );
    }

    #[test]
    fn viewmodel_tags_for_missing_items_have_no_label() {
        let c: Controller =
            SelectionController::with_selection(Config::default(), [7], RecordingListener::new());
        let vm = c.compute_viewmodel(&items());
        assert_eq!(vm.tags, vec![TagView { key: 7, label: None }]);
    }

    #[test]
    fn viewmodel_hides_tags_in_single_mode_or_when_configured() {
        let mut s = single();
        s.toggle_item(&items()[0]);
        assert!(s.compute_viewmodel(&items()).tags.is_empty());

        let mut hidden = controller(Config {
            hide_tags: true,
            ..Config::default()
        });
        hidden.toggle_item(&items()[0]);
        assert!(hidden.compute_viewmodel(&items()).tags.is_empty());
    }

    #[test]
    fn viewmodel_open_panel_rows() {
        let mut c = multi();
        let items = items();
        c.toggle_item(&items[1]);
        c.open_panel();

        let vm = c.compute_viewmodel(&items);
        assert_eq!(vm.header.label, "Select (1 selected)");
        assert!(vm.tags.is_empty());

        let panel = vm.panel.expect("panel is open");
        assert_eq!(panel.search_bar.placeholder, "Search");
        assert_eq!(panel.submit, Some(SubmitAffordance::Button));
        assert!(panel.show_back_icon);
        assert!(!panel.show_add_item);
        assert!(panel.empty_state.is_none());
        assert_eq!(
            panel.rows,
            vec![
                CandidateRow { key: Some(1), label: "Apple".into(), is_selected: false, is_disabled: false },
                CandidateRow { key: Some(2), label: "Banana".into(), is_selected: true, is_disabled: false },
                CandidateRow { key: Some(3), label: "Cherry".into(), is_selected: false, is_disabled: true },
            ]
        );
    }

    #[test]
    fn viewmodel_empty_state_and_affordances() {
        let mut c = controller(Config {
            single: true,
            hide_back_icon: true,
            can_add_items: true,
            no_items_text: "Nothing".to_string(),
            ..Config::default()
        });
        c.open_panel();
        c.set_search_term("kiwi");

        let panel = c.compute_viewmodel(&items()).panel.expect("panel is open");
        assert!(panel.rows.is_empty());
        assert_eq!(panel.empty_state, Some(EmptyState { message: "Nothing".to_string() }));
        assert_eq!(panel.submit, None);
        assert!(!panel.show_back_icon);
        assert!(panel.show_add_item);
        assert_eq!(panel.search_bar.query, "kiwi");
    }

    #[test]
    fn viewmodel_indicator_affordance() {
        let mut c = controller(Config {
            submit_affordance: SubmitAffordance::Indicator,
            ..Config::default()
        });
        c.open_panel();
        let panel = c.compute_viewmodel(&items()).panel.expect("panel is open");
        assert_eq!(panel.submit, Some(SubmitAffordance::Indicator));
    }
}
