use serde::Serialize;

use crate::UserRecord;

/// Ordered set of chosen users, unique by username, in the order they were picked.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Selection {
    users: Vec<UserRecord>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn users(&self) -> &[UserRecord] {
        &self.users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn contains(&self, username: &str) -> bool {
        self.users.iter().any(|u| u.username == username)
    }

    /// Returns false and leaves the selection untouched for a duplicate.
    pub fn select(&mut self, user: UserRecord) -> bool {
        if self.contains(&user.username) {
            log::debug!("selection:duplicate {}", user.username);
            return false;
        }
        self.users.push(user);
        true
    }

    pub fn deselect(&mut self, username: &str) -> Option<UserRecord> {
        let index = self.users.iter().position(|u| u.username == username)?;
        Some(self.users.remove(index))
    }

    pub fn serialized(&self) -> String {
        self.users
            .iter()
            .map(|u| u.username.as_str())
            .collect::<Vec<_>>()
            .join(",")
    }

    /// The "Username / Full Name" header sits above the list only while it has rows.
    pub fn has_header(&self) -> bool {
        !self.is_empty()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    Shown,
    Hidden,
}

impl Visibility {
    pub fn for_count(count: usize, max_selected: Option<usize>) -> Self {
        match max_selected {
            Some(max) if count >= max => Self::Hidden,
            _ => Self::Shown,
        }
    }

    pub fn is_shown(&self) -> bool {
        matches!(self, Self::Shown)
    }

    pub fn style(&self) -> &'static str {
        match self {
            Self::Shown => "display: block",
            Self::Hidden => "display: none",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> UserRecord {
        UserRecord::new("alice", "Alice A")
    }

    fn bob() -> UserRecord {
        UserRecord::new("bob", "Bob B")
    }

    #[test]
    fn it_keeps_selection_order() {
        let mut selection = Selection::new();
        assert!(selection.select(bob()));
        assert!(selection.select(alice()));
        assert_eq!(selection.serialized(), "bob,alice");
    }

    #[test]
    fn it_refuses_duplicates() {
        let mut selection = Selection::new();
        assert!(selection.select(alice()));
        assert!(!selection.select(UserRecord::new("alice", "Someone Else")));
        assert_eq!(selection.len(), 1);
        assert_eq!(selection.users()[0].name, "Alice A");
    }

    #[test]
    fn it_ignores_deselecting_unknown_users() {
        let mut selection = Selection::new();
        selection.select(alice());
        assert_eq!(selection.deselect("ghost"), None);
        assert_eq!(selection.deselect("alice"), Some(alice()));
        assert_eq!(selection.deselect("alice"), None);
        assert!(selection.is_empty());
        assert_eq!(selection.serialized(), "");
    }

    #[test]
    fn it_never_holds_duplicates_across_mixed_operations() {
        let names = ["alice", "bob", "carol"];
        let mut selection = Selection::new();
        for step in 0..60usize {
            let name = names[(step * 7 + step / 3) % names.len()];
            if step % 4 == 3 {
                selection.deselect(name);
            } else {
                selection.select(UserRecord::new(name, name));
            }
            let mut seen = std::collections::HashSet::new();
            assert!(selection.users().iter().all(|u| seen.insert(&u.username)));
            assert_eq!(
                selection.serialized(),
                selection
                    .users()
                    .iter()
                    .map(|u| u.username.clone())
                    .collect::<Vec<_>>()
                    .join(",")
            );
        }
    }

    #[test]
    fn it_drops_header_with_last_user() {
        let mut selection = Selection::new();
        assert!(!selection.has_header());
        selection.select(alice());
        assert!(selection.has_header());
        selection.deselect("alice");
        assert!(!selection.has_header());
    }

    #[test]
    fn it_hides_search_at_maximum() {
        assert_eq!(Visibility::for_count(0, None), Visibility::Shown);
        assert_eq!(Visibility::for_count(100, None), Visibility::Shown);
        assert_eq!(Visibility::for_count(1, Some(2)), Visibility::Shown);
        assert_eq!(Visibility::for_count(2, Some(2)), Visibility::Hidden);
        assert_eq!(Visibility::for_count(0, Some(0)), Visibility::Hidden);
        assert_eq!(Visibility::Hidden.style(), "display: none");
    }
}
