use std::fmt;
use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use selection::{prefill, search_or_empty, QueryDispatcher, UserRecord, WidgetConfig};

use crate::services::HttpSearch;

/// State handle for the [`use_search`] hook.
pub struct UseSearchHandle {
    service: Rc<HttpSearch>,
    dispatcher: QueryDispatcher,
}

impl UseSearchHandle {
    /// Fires a query, `done` only hears about it if nothing newer was sent meanwhile.
    pub fn run(&self, query: String, done: Callback<Vec<UserRecord>>) {
        let ticket = self.dispatcher.issue(&query);
        let dispatcher = self.dispatcher.clone();
        let service = Rc::clone(&self.service);

        spawn_local(async move {
            let users = search_or_empty(&*service, &query).await;
            if let Some(users) = dispatcher.accept(ticket, users) {
                done.emit(users);
            }
        });
    }

    pub fn prefill(&self, tokens: Vec<String>, done: Callback<Vec<UserRecord>>) {
        let service = Rc::clone(&self.service);

        spawn_local(async move {
            log::debug!("prefill:resolving {} usernames", tokens.len());
            let users = prefill::resolve(&*service, &tokens).await;
            done.emit(users);
        });
    }
}

impl Clone for UseSearchHandle {
    fn clone(&self) -> Self {
        Self {
            service: Rc::clone(&self.service),
            dispatcher: self.dispatcher.clone(),
        }
    }
}

impl PartialEq for UseSearchHandle {
    fn eq(&self, other: &Self) -> bool {
        self.service == other.service && self.dispatcher == other.dispatcher
    }
}

impl fmt::Debug for UseSearchHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UseSearchHandle")
            .field("service", &self.service)
            .finish()
    }
}

/// Search service for one widget instance, keeping track of which query is newest.
#[hook]
pub fn use_search(config: &WidgetConfig) -> UseSearchHandle {
    let service = use_memo(|config| HttpSearch::new(config.clone()), config.clone());
    let dispatcher = use_memo(|_| QueryDispatcher::new(), ());

    UseSearchHandle {
        service,
        dispatcher: (*dispatcher).clone(),
    }
}
