use yew::prelude::*;

use selection::{UserRecord, NO_USERS_FOUND};

#[function_component(HeaderRow)]
pub fn header_row() -> Html {
    html! {
        <div class="user-header">
            <p class="user-column">{ "Username" }</p>{ "Full Name" }
        </div>
    }
}

#[function_component(NoUsersFound)]
pub fn no_users_found() -> Html {
    html! { <p class="no-results">{ NO_USERS_FOUND }</p> }
}

#[derive(Properties, Clone, PartialEq)]
pub struct UserRowProps {
    pub user: UserRecord,
    #[prop_or_default]
    pub label: Option<AttrValue>,
    #[prop_or_default]
    pub onclick: Option<Callback<UserRecord>>,
}

#[function_component(UserRow)]
pub fn user_row(props: &UserRowProps) -> Html {
    let user = &props.user;

    let action = match (&props.label, &props.onclick) {
        (Some(label), Some(onclick)) => {
            let onclick = {
                let onclick = onclick.clone();
                let user = user.clone();
                Callback::from(move |_: MouseEvent| onclick.emit(user.clone()))
            };
            html! { <button type="button" {onclick}>{ label.to_string() }</button> }
        }
        _ => html! {},
    };

    html! {
        <div class="result-item">
            <li>
                <p>
                    <a class="user-column" href={user.profile_href()}>{ user.username.clone() }</a>
                    { " " }{ user.name.clone() }
                    { action }
                </p>
            </li>
        </div>
    }
}
