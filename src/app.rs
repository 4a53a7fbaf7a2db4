use anyhow::{Context, Result};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

use selection::{prefill, WidgetConfig};

use crate::errors::MountError;
use crate::pages::{UserSearchProps, UserSearchView, UserSelect, UserSelectProps};
use crate::services::{document, read_field};

pub const SELECT_MARKER: &str = "data-user-select";
pub const SEARCH_MARKER: &str = "data-user-search";

/// Mounts a widget into every marked element on the page.
pub fn mount_all() -> Result<()> {
    let document = document()?;

    for host in marked(&document, SELECT_MARKER)? {
        if let Err(e) = mount_select(host) {
            log::error!("mount:select {:?}", e);
        }
    }

    for host in marked(&document, SEARCH_MARKER)? {
        if let Err(e) = mount_search(host) {
            log::error!("mount:search {:?}", e);
        }
    }

    Ok(())
}

fn marked(document: &Document, marker: &str) -> Result<Vec<Element>, MountError> {
    let selector = format!("[{}]", marker);
    let nodes = document
        .query_selector_all(&selector)
        .map_err(|e| MountError::Query(selector.clone(), format!("{:?}", e)))?;

    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

fn config_for(host: &Element) -> Result<WidgetConfig, MountError> {
    Ok(WidgetConfig::from_attributes(|name| host.get_attribute(name))?)
}

fn mount_select(host: Element) -> Result<()> {
    let config = config_for(&host).context("reading widget configuration")?;
    let value = read_field(&config.field_id).context("reading prefilled selection")?;
    let prefill = prefill::tokens(&value);

    log::info!(
        "mount:select field={} max={:?} role={:?} prefill={}",
        config.field_id,
        config.max_selected,
        config.role_filter,
        prefill.len()
    );

    yew::Renderer::<UserSelect>::with_root_and_props(host, UserSelectProps { config, prefill })
        .render();

    Ok(())
}

fn mount_search(host: Element) -> Result<()> {
    let config = config_for(&host).context("reading search configuration")?;

    log::info!("mount:search role={:?}", config.role_filter);

    yew::Renderer::<UserSearchView>::with_root_and_props(host, UserSearchProps { config })
        .render();

    Ok(())
}
