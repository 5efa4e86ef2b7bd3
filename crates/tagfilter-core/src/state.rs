//! Filter selection state and the toggle state machine.
//!
//! # How it works
//!
//! 1. [`Classification::of`] snapshots the enabled/disabled counts before anything changes
//! 2. [`Transition::decide`] picks the first matching rule for the clicked filter
//! 3. The transition is applied to the filter flags
//! 4. Row visibility is recomputed from scratch
//!
//! Starting from full selection, a click isolates the clicked filter. From
//! there, clicks flip filters on and off, except that re-enabling the last
//! disabled filter, or clicking the only enabled one, returns to full
//! selection with every row shown (untagged rows included).

use std::collections::HashSet;

use smol_str::SmolStr;

use crate::error::FilterError;
use crate::types::{Filter, FilterId, Row};

/// Counts taken from the filters before a toggle is applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Classification {
    pub enabled_count: usize,
    pub disabled_count: usize,
    /// The sole enabled filter, when exactly one is enabled.
    pub single_enabled: Option<FilterId>,
}

impl Classification {
    /// Classify a filter collection.
    pub fn of(filters: &[Filter]) -> Self {
        let mut enabled_count = 0;
        let mut last_enabled = None;
        for (index, filter) in filters.iter().enumerate() {
            if filter.is_enabled() {
                enabled_count += 1;
                last_enabled = Some(FilterId(index));
            }
        }

        Self {
            enabled_count,
            disabled_count: filters.len() - enabled_count,
            single_enabled: if enabled_count == 1 { last_enabled } else { None },
        }
    }

    /// No filter is disabled.
    pub fn is_full_selection(&self) -> bool {
        self.disabled_count == 0
    }

    /// Exactly one filter is enabled and it is `clicked`.
    pub fn is_single_enabled(&self, clicked: FilterId) -> bool {
        self.single_enabled == Some(clicked)
    }

    /// Exactly one filter is disabled, whichever it is.
    pub fn is_last_disabled_being_reenabled(&self) -> bool {
        self.disabled_count == 1
    }
}

/// The rule a toggle resolved to, in priority order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Full selection: keep only the clicked filter enabled.
    Isolate,
    /// One filter was disabled: back to full selection.
    ResetFromSingleDisabled,
    /// The clicked filter was the only enabled one: back to full selection.
    ResetFromLastEnabled,
    /// Re-enable the clicked filter.
    Enable,
    /// Disable the clicked filter.
    Disable,
}

impl Transition {
    /// Pick the first rule that applies to a click on `clicked`.
    pub fn decide(class: &Classification, clicked: &Filter, clicked_id: FilterId) -> Self {
        if class.is_full_selection() {
            Transition::Isolate
        } else if class.is_last_disabled_being_reenabled() {
            Transition::ResetFromSingleDisabled
        } else if class.is_single_enabled(clicked_id) {
            Transition::ResetFromLastEnabled
        } else if clicked.disabled {
            Transition::Enable
        } else {
            Transition::Disable
        }
    }

    /// Stable kebab-case name, for logs and JS callers.
    pub fn as_str(self) -> &'static str {
        match self {
            Transition::Isolate => "isolate",
            Transition::ResetFromSingleDisabled => "reset-from-single-disabled",
            Transition::ResetFromLastEnabled => "reset-from-last-enabled",
            Transition::Enable => "enable",
            Transition::Disable => "disable",
        }
    }

    /// Whether this transition ends in full selection.
    pub fn is_reset(self) -> bool {
        matches!(
            self,
            Transition::ResetFromSingleDisabled | Transition::ResetFromLastEnabled
        )
    }
}

/// What a toggle did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToggleOutcome {
    pub transition: Transition,
    /// Every row was shown unconditionally.
    pub reset: bool,
    pub visible_rows: usize,
}

/// Filters and rows of one listing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterState {
    pub filters: Vec<Filter>,
    pub rows: Vec<Row>,
}

impl FilterState {
    /// Create a state from an explicit snapshot of filters and rows.
    pub fn new(filters: Vec<Filter>, rows: Vec<Row>) -> Self {
        Self { filters, rows }
    }

    /// Derive the filters from the tags the rows carry.
    ///
    /// Filters come out in first-seen order, each counting the rows that
    /// carry its tag. Everything starts enabled and visible.
    pub fn from_rows(rows: Vec<Row>) -> Self {
        let mut filters: Vec<Filter> = Vec::new();
        for row in &rows {
            let mut seen: HashSet<&str> = HashSet::new();
            for tag in &row.tags {
                // A tag repeated on one row still counts that row once.
                if !seen.insert(tag.as_str()) {
                    continue;
                }
                match filters.iter_mut().find(|f| f.name == *tag) {
                    Some(filter) => filter.count += 1,
                    None => filters.push(Filter::new(tag.clone(), 1)),
                }
            }
        }

        let mut state = Self { filters, rows };
        state.reset();
        state
    }

    /// Look up a filter by name.
    pub fn find(&self, name: &str) -> Option<FilterId> {
        self.filters
            .iter()
            .position(|f| f.name == name)
            .map(FilterId)
    }

    pub fn filter(&self, id: FilterId) -> Option<&Filter> {
        self.filters.get(id.0)
    }

    pub fn classify(&self) -> Classification {
        Classification::of(&self.filters)
    }

    pub fn is_full_selection(&self) -> bool {
        self.filters.iter().all(Filter::is_enabled)
    }

    /// Names of all enabled filters.
    pub fn active_tags(&self) -> HashSet<SmolStr> {
        self.filters
            .iter()
            .filter(|f| f.is_enabled())
            .map(|f| f.name.clone())
            .collect()
    }

    pub fn visible_count(&self) -> usize {
        self.rows.iter().filter(|r| r.visible).count()
    }

    /// Enable every filter and show every row.
    pub fn reset(&mut self) {
        for filter in &mut self.filters {
            filter.disabled = false;
        }
        for row in &mut self.rows {
            row.visible = true;
        }
    }

    /// Apply a click on `clicked`.
    ///
    /// Updates the disabled flag of the filters and recomputes the visibility
    /// of every row. An unknown id is an error and leaves the state as it was.
    pub fn toggle(&mut self, clicked: FilterId) -> Result<ToggleOutcome, FilterError> {
        let class = self.classify();
        let Some(filter) = self.filters.get(clicked.0) else {
            return Err(FilterError::UnknownFilter {
                index: clicked.0,
                len: self.filters.len(),
            });
        };

        let transition = Transition::decide(&class, filter, clicked);
        tracing::debug!(
            filter = %filter.name,
            enabled = class.enabled_count,
            disabled = class.disabled_count,
            ?transition,
            "toggle filter"
        );

        match transition {
            Transition::Isolate => {
                for (index, filter) in self.filters.iter_mut().enumerate() {
                    filter.disabled = index != clicked.0;
                }
            }
            Transition::ResetFromSingleDisabled | Transition::ResetFromLastEnabled => {
                for filter in &mut self.filters {
                    filter.disabled = false;
                }
            }
            Transition::Enable => self.filters[clicked.0].disabled = false,
            Transition::Disable => self.filters[clicked.0].disabled = true,
        }

        let reset = transition.is_reset();
        if reset {
            for row in &mut self.rows {
                row.visible = true;
            }
        } else {
            let active = self.active_tags();
            for row in &mut self.rows {
                row.visible = row.tags.iter().any(|tag| active.contains(tag));
            }
        }

        Ok(ToggleOutcome {
            transition,
            reset,
            visible_rows: self.visible_count(),
        })
    }

    /// Pure form of [`toggle`](Self::toggle): returns the next state and
    /// leaves `self` alone.
    pub fn toggled(&self, clicked: FilterId) -> Result<(FilterState, ToggleOutcome), FilterError> {
        let mut next = self.clone();
        let outcome = next.toggle(clicked)?;
        Ok((next, outcome))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A(2), B(1), C(3); rows [A], [B, C], [].
    fn scenario() -> FilterState {
        FilterState::new(
            vec![Filter::new("A", 2), Filter::new("B", 1), Filter::new("C", 3)],
            vec![
                Row::new(["A"]),
                Row::new(["B", "C"]),
                Row::new(Vec::<&str>::new()),
            ],
        )
    }

    /// Five filters with one row per tag plus an untagged row.
    fn wide() -> FilterState {
        let names = ["a", "b", "c", "d", "e"];
        let mut rows: Vec<Row> = names.iter().map(|n| Row::new([*n])).collect();
        rows.push(Row::new(Vec::<&str>::new()));
        FilterState::new(names.iter().map(|n| Filter::new(*n, 1)).collect(), rows)
    }

    fn enabled(state: &FilterState) -> Vec<&str> {
        state
            .filters
            .iter()
            .filter(|f| f.is_enabled())
            .map(|f| f.name.as_str())
            .collect()
    }

    fn visible(state: &FilterState) -> Vec<bool> {
        state.rows.iter().map(|r| r.visible).collect()
    }

    /// One line per filter and row, for snapshots.
    fn summary(state: &FilterState) -> String {
        let mut lines = Vec::new();
        for filter in &state.filters {
            let mark = if filter.disabled { ' ' } else { 'x' };
            lines.push(format!("[{mark}] {}", filter.label()));
        }
        for row in &state.rows {
            let mark = if row.visible { "show" } else { "hide" };
            let tags = if row.is_untagged() {
                "-".to_owned()
            } else {
                row.tags.join(",")
            };
            lines.push(format!("{mark} {tags}"));
        }
        lines.join("\n")
    }

    #[test]
    fn test_classification() {
        let mut state = wide();
        let class = state.classify();
        assert!(class.is_full_selection());
        assert_eq!(class.enabled_count, 5);
        assert_eq!(class.single_enabled, None);

        for f in &mut state.filters[1..] {
            f.disabled = true;
        }
        let class = state.classify();
        assert_eq!(class.disabled_count, 4);
        assert!(class.is_single_enabled(FilterId(0)));
        assert!(!class.is_single_enabled(FilterId(1)));
        assert!(!class.is_last_disabled_being_reenabled());
    }

    #[test]
    fn test_full_selection_isolates() {
        let mut state = scenario();
        let outcome = state.toggle(FilterId(2)).unwrap();

        assert_eq!(outcome.transition, Transition::Isolate);
        assert!(!outcome.reset);
        assert_eq!(enabled(&state), vec!["C"]);
        assert_eq!(visible(&state), vec![false, true, false]);
        assert_eq!(outcome.visible_rows, 1);
    }

    #[test]
    fn test_single_disabled_resets_whichever_is_clicked() {
        // Clicking the disabled one.
        let mut state = wide();
        state.filters[3].disabled = true;
        let outcome = state.toggle(FilterId(3)).unwrap();
        assert_eq!(outcome.transition, Transition::ResetFromSingleDisabled);
        assert!(outcome.reset);
        assert!(state.is_full_selection());
        assert!(visible(&state).iter().all(|v| *v));

        // Clicking an enabled one resets too.
        let mut state = wide();
        state.filters[3].disabled = true;
        state.rows.iter_mut().for_each(|r| r.visible = false);
        let outcome = state.toggle(FilterId(0)).unwrap();
        assert_eq!(outcome.transition, Transition::ResetFromSingleDisabled);
        assert!(state.is_full_selection());
        assert_eq!(outcome.visible_rows, 6);
    }

    #[test]
    fn test_last_enabled_cannot_be_deselected() {
        let mut state = wide();
        state.toggle(FilterId(1)).unwrap();
        assert_eq!(enabled(&state), vec!["b"]);

        let outcome = state.toggle(FilterId(1)).unwrap();
        assert_eq!(outcome.transition, Transition::ResetFromLastEnabled);
        assert!(outcome.reset);
        assert!(state.is_full_selection());
        // Untagged row comes back as well.
        assert_eq!(state.visible_count(), 6);
    }

    #[test]
    fn test_plain_disable() {
        let mut state = wide();
        state.toggle(FilterId(0)).unwrap();
        state.toggle(FilterId(1)).unwrap();
        state.toggle(FilterId(2)).unwrap();
        assert_eq!(enabled(&state), vec!["a", "b", "c"]);

        let outcome = state.toggle(FilterId(1)).unwrap();
        assert_eq!(outcome.transition, Transition::Disable);
        assert!(!outcome.reset);
        assert_eq!(enabled(&state), vec!["a", "c"]);
        assert_eq!(visible(&state), vec![true, false, true, false, false, false]);
    }

    #[test]
    fn test_plain_enable() {
        let mut state = wide();
        state.toggle(FilterId(0)).unwrap();

        let outcome = state.toggle(FilterId(4)).unwrap();
        assert_eq!(outcome.transition, Transition::Enable);
        assert_eq!(enabled(&state), vec!["a", "e"]);
        assert_eq!(visible(&state), vec![true, false, false, false, true, false]);
        assert_eq!(outcome.visible_rows, 2);
    }

    #[test]
    fn test_enabling_to_one_disabled_is_not_a_reset() {
        // Going from two disabled to one disabled is a plain enable; the
        // reset only happens on the click after that.
        let mut state = wide();
        for f in &mut state.filters[3..] {
            f.disabled = true;
        }
        let outcome = state.toggle(FilterId(3)).unwrap();
        assert_eq!(outcome.transition, Transition::Enable);
        assert_eq!(state.classify().disabled_count, 1);
        assert!(!state.rows[5].visible);
    }

    #[test]
    fn test_scenario() {
        let mut state = scenario();

        state.toggle(FilterId(0)).unwrap();
        insta::assert_snapshot!(summary(&state), @r"
        [x] A(2)
        [ ] B(1)
        [ ] C(3)
        show A
        hide B,C
        hide -
        ");

        let outcome = state.toggle(FilterId(0)).unwrap();
        assert!(outcome.reset);
        insta::assert_snapshot!(summary(&state), @r"
        [x] A(2)
        [x] B(1)
        [x] C(3)
        show A
        show B,C
        show -
        ");
    }

    #[test]
    fn test_transition_names() {
        assert_eq!(Transition::Isolate.as_str(), "isolate");
        assert_eq!(Transition::ResetFromLastEnabled.as_str(), "reset-from-last-enabled");
        assert!(Transition::ResetFromSingleDisabled.is_reset());
        assert!(!Transition::Isolate.is_reset());
        assert!(!Transition::Disable.is_reset());
    }

    #[test]
    fn test_unknown_filter() {
        let mut state = scenario();
        let before = state.clone();
        let err = state.toggle(FilterId(7)).unwrap_err();
        assert_eq!(err, FilterError::UnknownFilter { index: 7, len: 3 });
        assert_eq!(state, before);
    }

    #[test]
    fn test_toggled_is_pure() {
        let state = scenario();
        let (next, outcome) = state.toggled(FilterId(1)).unwrap();
        assert_eq!(outcome.transition, Transition::Isolate);
        assert!(state.is_full_selection());
        assert_eq!(enabled(&next), vec!["B"]);
    }

    #[test]
    fn test_from_rows() {
        let state = FilterState::from_rows(vec![
            Row::new(["x", "y"]),
            Row::new(["y", "y"]),
            Row::new(Vec::<&str>::new()),
            Row::new(["z"]),
        ]);

        let labels: Vec<String> = state.filters.iter().map(Filter::label).collect();
        assert_eq!(labels, vec!["x(1)", "y(2)", "z(1)"]);
        assert!(state.is_full_selection());
        assert_eq!(state.visible_count(), 4);
        assert_eq!(state.find("z"), Some(FilterId(2)));
        assert_eq!(state.find("w"), None);
    }

    #[test]
    fn test_active_tags() {
        let mut state = scenario();
        state.filters[1].disabled = true;
        let active = state.active_tags();
        assert_eq!(active.len(), 2);
        assert!(active.contains("A"));
        assert!(!active.contains("B"));
    }

    #[test]
    fn test_reset() {
        let mut state = scenario();
        state.toggle(FilterId(1)).unwrap();
        state.reset();
        assert!(state.is_full_selection());
        assert_eq!(state.visible_count(), 3);
    }
}
