use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_hooks::use_mount;

use selection::{UserRecord, WidgetConfig};

use crate::hooks::use_search;
use crate::shared::*;

#[derive(Properties, Clone, PartialEq)]
pub struct UserSearchProps {
    pub config: WidgetConfig,
}

/// Read-only user lookup, nothing is selected.
#[function_component(UserSearchView)]
pub fn user_search_view(props: &UserSearchProps) -> Html {
    let results = use_state(Vec::<UserRecord>::new);
    let search = use_search(&props.config);

    let on_results = {
        let results = results.clone();
        Callback::from(move |users: Vec<UserRecord>| results.set(users))
    };

    {
        let search = search.clone();
        let on_results = on_results.clone();
        use_mount(move || search.run(String::new(), on_results));
    }

    let oninput = Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        search.run(input.value(), on_results.clone());
    });

    html! {
        <div class="user-search">
            <input
                class="search-input form-control"
                type="text"
                placeholder="Search users"
                {oninput}
                />
            <div class="dynamic-results">
                if results.is_empty() {
                    <NoUsersFound />
                } else {
                    { for results.iter().map(|user| html! {
                        <UserRow key={user.username.clone()} user={user.clone()} />
                    }) }
                }
            </div>
        </div>
    }
}
