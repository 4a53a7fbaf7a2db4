use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_hooks::use_mount;

use selection::{Action, CandidateView, UserRecord, WidgetConfig};

use crate::hooks::use_search;
use crate::services::write_field;
use crate::shared::*;
use crate::types::WidgetModel;

#[derive(Properties, Clone, PartialEq)]
pub struct UserSelectProps {
    pub config: WidgetConfig,
    /// Usernames found in the form field at load.
    #[prop_or_default]
    pub prefill: Vec<String>,
}

#[function_component(UserSelect)]
pub fn user_select(props: &UserSelectProps) -> Html {
    let widget = {
        let config = props.config.clone();
        let pending = props.prefill.len();
        use_reducer(move || WidgetModel::new(config, pending))
    };
    let search = use_search(&props.config);

    let on_results = {
        let widget = widget.clone();
        Callback::from(move |users: Vec<UserRecord>| widget.dispatch(Action::Results(users)))
    };

    {
        let widget = widget.clone();
        let search = search.clone();
        let tokens = props.prefill.clone();
        use_mount(move || {
            if !tokens.is_empty() {
                search.prefill(
                    tokens,
                    Callback::from(move |users| widget.dispatch(Action::Prefilled(users))),
                );
            }
        });
    }

    {
        let search = search.clone();
        let on_results = on_results.clone();
        use_effect_with_deps(
            move |interactive| {
                if *interactive {
                    search.run(String::new(), on_results);
                }
                || ()
            },
            widget.is_interactive(),
        );
    }

    {
        let field_id = props.config.field_id.clone();
        use_effect_with_deps(
            move |value: &Option<String>| {
                if let Some(value) = value {
                    write_field(&field_id, value);
                }
                || ()
            },
            widget.form_value(),
        );
    }

    let oninput = {
        let search = search.clone();
        let interactive = widget.is_interactive();
        Callback::from(move |e: InputEvent| {
            if !interactive {
                return;
            }
            let input: HtmlInputElement = e.target_unchecked_into();
            search.run(input.value(), on_results.clone());
        })
    };

    let on_select = {
        let widget = widget.clone();
        Callback::from(move |user: UserRecord| widget.dispatch(Action::Select(user)))
    };

    let on_deselect = {
        let widget = widget.clone();
        Callback::from(move |user: UserRecord| widget.dispatch(Action::Deselect(user.username)))
    };

    let candidates = match widget.candidates() {
        CandidateView::Rows(rows) => html! {
            <>
                <HeaderRow />
                { for rows.into_iter().map(|user| html! {
                    <UserRow key={user.username.clone()} user={user.clone()}
                        label={AttrValue::from("Select")} onclick={on_select.clone()} />
                }) }
            </>
        },
        CandidateView::NoUsersFound => html! { <NoUsersFound /> },
    };

    let selection = widget.selection();

    html! {
        <div class="user-select">
            <div class="user-selection-container" style={widget.search_visible().style()}>
                <input
                    class="search-input form-control"
                    type="text"
                    placeholder="Search users"
                    disabled={!widget.is_interactive()}
                    {oninput}
                    />
                <div class="dynamic-results">{ candidates }</div>
            </div>
            <div class="dynamic-selected-users">
                if selection.has_header() {
                    <HeaderRow />
                }
                { for selection.users().iter().map(|user| html! {
                    <UserRow key={user.username.clone()} user={user.clone()}
                        label={AttrValue::from("Remove")} onclick={on_deselect.clone()} />
                }) }
            </div>
        </div>
    }
}
