use futures::{future::LocalBoxFuture, FutureExt};
use reqwasm::http::Request;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlInputElement};

use selection::{
    search::decode_response, search_url, SearchError, UserRecord, UserSearch, WidgetConfig,
};

use crate::errors::MountError;

/// Queries the search endpoint over `fetch`.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpSearch {
    config: WidgetConfig,
}

impl HttpSearch {
    pub fn new(config: WidgetConfig) -> Self {
        Self { config }
    }
}

impl UserSearch for HttpSearch {
    fn search(&self, query: &str) -> LocalBoxFuture<'_, Result<Vec<UserRecord>, SearchError>> {
        let url = search_url(&self.config, query);

        async move {
            log::trace!("search:get {}", url);

            let response = Request::get(&url)
                .send()
                .await
                .map_err(|e| SearchError::Transport(e.to_string()))?;

            let status = response.status();
            let body = response
                .text()
                .await
                .map_err(|e| SearchError::Transport(e.to_string()))?;

            decode_response(status, &body)
        }
        .boxed_local()
    }
}

pub fn document() -> Result<Document, MountError> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or(MountError::NoDocument)
}

fn form_field(id: &str) -> Result<HtmlInputElement, MountError> {
    document()?
        .get_element_by_id(id)
        .ok_or_else(|| MountError::MissingField(id.to_owned()))?
        .dyn_into::<HtmlInputElement>()
        .map_err(|_| MountError::NotAnInput(id.to_owned()))
}

pub fn read_field(id: &str) -> Result<String, MountError> {
    Ok(form_field(id)?.value())
}

pub fn write_field(id: &str, value: &str) {
    match form_field(id) {
        Ok(field) => {
            log::debug!("field:write {} {:?}", id, value);
            field.set_value(value);
        }
        Err(e) => log::error!("field:write {}", e),
    }
}
