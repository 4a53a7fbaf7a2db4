use serde::Serialize;

use crate::{
    config::WidgetConfig,
    state::{Selection, Visibility},
    UserRecord,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Phase {
    /// Resolving usernames already present in the form field. No searches yet.
    Prefilling,
    Interactive,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Prefilled(Vec<UserRecord>),
    Results(Vec<UserRecord>),
    Select(UserRecord),
    Deselect(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CandidateView<'a> {
    Rows(Vec<&'a UserRecord>),
    NoUsersFound,
}

impl<'a> CandidateView<'a> {
    pub fn has_header(&self) -> bool {
        matches!(self, Self::Rows(_))
    }
}

/// Everything both lists are rendered from. Actions produce a new value, the
/// displayed rows are always derived from scratch.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Widget {
    #[serde(skip)]
    config: WidgetConfig,
    phase: Phase,
    selection: Selection,
    results: Vec<UserRecord>,
    field_dirty: bool,
}

impl Widget {
    pub fn new(config: WidgetConfig, pending_prefill: usize) -> Self {
        let phase = if pending_prefill > 0 {
            Phase::Prefilling
        } else {
            Phase::Interactive
        };

        Self {
            config,
            phase,
            selection: Selection::default(),
            results: Vec::new(),
            field_dirty: false,
        }
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_interactive(&self) -> bool {
        self.phase == Phase::Interactive
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn apply(&self, action: Action) -> Self {
        let mut next = self.clone();
        next.perform(action);
        next
    }

    fn perform(&mut self, action: Action) {
        match action {
            Action::Prefilled(users) => {
                for user in users {
                    self.selection.select(user);
                }
                log::debug!(
                    "widget:prefilled {:?}, interactive",
                    self.selection.serialized()
                );
                self.phase = Phase::Interactive;
            }
            Action::Results(users) => {
                self.results = users;
            }
            Action::Select(user) => {
                if !self.search_visible().is_shown() {
                    log::warn!("widget:select {} refused, at maximum", user.username);
                    return;
                }
                if self.selection.select(user) {
                    self.field_dirty = true;
                }
            }
            Action::Deselect(username) => {
                if self.selection.deselect(&username).is_some() {
                    self.field_dirty = true;
                }
            }
        }
    }

    /// Latest accepted results minus anyone already selected.
    pub fn candidates(&self) -> CandidateView<'_> {
        let rows = self
            .results
            .iter()
            .filter(|u| !self.selection.contains(&u.username))
            .collect::<Vec<_>>();

        if rows.is_empty() {
            CandidateView::NoUsersFound
        } else {
            CandidateView::Rows(rows)
        }
    }

    /// Value to write to the hidden form field, `None` until the user has changed
    /// the selection so that a prefilled field is left alone during load.
    pub fn form_value(&self) -> Option<String> {
        if self.field_dirty {
            Some(self.selection.serialized())
        } else {
            None
        }
    }

    pub fn search_visible(&self) -> Visibility {
        Visibility::for_count(self.selection.len(), self.config.max_selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(username: &str) -> UserRecord {
        UserRecord::new(username, &username.to_uppercase())
    }

    fn interactive() -> Widget {
        Widget::new(WidgetConfig::default(), 0)
    }

    fn rows(widget: &Widget) -> Vec<String> {
        match widget.candidates() {
            CandidateView::Rows(rows) => rows.into_iter().map(|u| u.username.clone()).collect(),
            CandidateView::NoUsersFound => Vec::new(),
        }
    }

    #[test]
    fn it_starts_interactive_without_prefill() {
        assert!(interactive().is_interactive());
        assert_eq!(
            Widget::new(WidgetConfig::default(), 2).phase(),
            Phase::Prefilling
        );
    }

    #[test]
    fn it_excludes_selected_users_from_candidates() {
        let widget = interactive()
            .apply(Action::Select(user("bob")))
            .apply(Action::Results(vec![user("alice"), user("bob"), user("carol")]));

        assert_eq!(rows(&widget), vec!["alice", "carol"]);
        assert!(widget.candidates().has_header());
    }

    #[test]
    fn it_shows_no_users_found_without_header() {
        let widget = interactive()
            .apply(Action::Results(vec![user("alice")]))
            .apply(Action::Select(user("alice")));

        assert_eq!(widget.candidates(), CandidateView::NoUsersFound);
        assert!(!widget.candidates().has_header());
        assert_eq!(interactive().candidates(), CandidateView::NoUsersFound);
    }

    #[test]
    fn it_syncs_form_field_after_interactive_changes() {
        let widget = interactive();
        assert_eq!(widget.form_value(), None);

        let widget = widget
            .apply(Action::Select(user("alice")))
            .apply(Action::Select(user("bob")));
        assert_eq!(widget.form_value().as_deref(), Some("alice,bob"));

        let widget = widget.apply(Action::Deselect("alice".into()));
        assert_eq!(widget.form_value().as_deref(), Some("bob"));

        let widget = widget.apply(Action::Deselect("bob".into()));
        assert_eq!(widget.form_value().as_deref(), Some(""));
        assert!(!widget.selection().has_header());
    }

    #[test]
    fn it_leaves_form_field_alone_during_prefill() {
        let widget = Widget::new(WidgetConfig::default(), 2)
            .apply(Action::Prefilled(vec![user("alice"), user("bob")]));

        assert!(widget.is_interactive());
        assert_eq!(widget.selection().serialized(), "alice,bob");
        assert_eq!(widget.form_value(), None);
    }

    #[test]
    fn it_ignores_deselect_of_unknown_user() {
        let widget = interactive().apply(Action::Deselect("ghost".into()));
        assert_eq!(widget, interactive());
    }

    #[test]
    fn it_toggles_search_visibility_at_maximum() {
        let config = WidgetConfig::default().with_max_selected(2);
        let widget = Widget::new(config, 0).apply(Action::Select(user("alice")));
        assert!(widget.search_visible().is_shown());

        let widget = widget.apply(Action::Select(user("bob")));
        assert!(!widget.search_visible().is_shown());

        let refused = widget.apply(Action::Select(user("carol")));
        assert_eq!(refused.selection().serialized(), "alice,bob");

        let widget = widget.apply(Action::Deselect("alice".into()));
        assert!(widget.search_visible().is_shown());
    }

    #[test]
    fn it_serializes_state() {
        let widget = interactive()
            .apply(Action::Results(vec![user("alice"), user("bob")]))
            .apply(Action::Select(user("bob")));

        insta::assert_json_snapshot!(widget, @r###"
        {
          "phase": "interactive",
          "selection": {
            "users": [
              {
                "username": "bob",
                "name": "BOB"
              }
            ]
          },
          "results": [
            {
              "username": "alice",
              "name": "ALICE"
            },
            {
              "username": "bob",
              "name": "BOB"
            }
          ],
          "fieldDirty": true
        }
        "###);
    }
}
