use futures::future::join_all;

use crate::{search::search_or_empty, UserRecord, UserSearch};

/// Usernames already present in the form field.
pub fn tokens(value: &str) -> Vec<String> {
    let mut tokens: Vec<String> = Vec::new();
    for token in value.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        if !tokens.iter().any(|t| t == token) {
            tokens.push(token.to_owned());
        }
    }
    tokens
}

/// Looks every username up at once and returns what resolved, in field order.
pub async fn resolve<S: UserSearch + ?Sized>(search: &S, tokens: &[String]) -> Vec<UserRecord> {
    let lookups = tokens.iter().map(|token| async move {
        let found = search_or_empty(search, token).await.into_iter().next();
        if found.is_none() {
            log::debug!("prefill:unresolved {:?}", token);
        }
        found
    });

    join_all(lookups).await.into_iter().flatten().collect()
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;
    use crate::search::fakes::TableSearch;

    #[test]
    fn it_splits_and_discards_empty_tokens() {
        assert_eq!(tokens("alice,bob"), vec!["alice", "bob"]);
        assert_eq!(tokens(",alice,, bob ,"), vec!["alice", "bob"]);
        assert_eq!(tokens("alice,alice"), vec!["alice"]);
        assert!(tokens("").is_empty());
        assert!(tokens(" , ").is_empty());
    }

    #[test]
    fn it_resolves_in_field_order() {
        let search = TableSearch::default()
            .with("alice", &[("alice", "Alice A")])
            .with("bob", &[("bob", "Bob B"), ("bobby", "Bobby")]);

        let users = block_on(resolve(&search, &tokens("alice,bob")));

        assert_eq!(
            users,
            vec![UserRecord::new("alice", "Alice A"), UserRecord::new("bob", "Bob B")]
        );
        assert_eq!(*search.queries.borrow(), vec!["alice", "bob"]);
    }

    #[test]
    fn it_drops_unresolved_usernames() {
        let search = TableSearch::default()
            .with("alice", &[("alice", "Alice A")])
            .failing("broken");

        let users = block_on(resolve(&search, &tokens("alice,ghost,broken")));

        assert_eq!(users, vec![UserRecord::new("alice", "Alice A")]);
    }

    #[test]
    fn it_resolves_nothing_for_empty_field() {
        let search = TableSearch::default();
        assert!(block_on(resolve(&search, &[])).is_empty());
        assert!(search.queries.borrow().is_empty());
    }
}
