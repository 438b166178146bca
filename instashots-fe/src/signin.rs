// Copyright (C) 2025 The instashots authors
//
// This file is part of instashots.
//
// instashots is free software: you can redistribute it and/or modify it under the terms of the GNU
// General Public License as published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// instashots is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without
// even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License along with instashots.  If not,
// see <http://www.gnu.org/licenses/>.

//! # instashots-fe "sign-in" page

use leptos::{
    html::{self},
    prelude::*,
};
use tracing::{debug, error, info};

use instashots_shared::api::handle_error;

use crate::{
    services::{current_user, login, logout},
    types::{Api, CurrentUser, Token},
};

/// Forget the session, both here & at the API
///
/// We clear our side regardless of whether the API heard us.
pub async fn sign_out(api: &str, token: Token, user: CurrentUser) {
    if let Err(err) = logout(api, token).await {
        error!("Logout failed: {err:?}");
    }
    token.set(None);
    user.set(None);
}

/// The instashots login page
#[component]
pub fn SignIn() -> impl IntoView {
    debug!("SignIn invoked.");
    // I think this is one of those things that "should never fail"; or where failure indicates a
    // coding error.
    let api = use_context::<Api>()
        .expect("No context for the API location!?")
        .0;

    let username_element: NodeRef<html::Input> = NodeRef::new();
    let password_element: NodeRef<html::Input> = NodeRef::new();

    // Displayed below the form in the case of error
    let (error, set_error): (ReadSignal<Option<String>>, WriteSignal<Option<String>>) =
        signal(None);

    let token = use_context::<Token>().expect("No token Cell!?");
    let user = use_context::<CurrentUser>().expect("No current user!?");

    let navigate = leptos_router::hooks::use_navigate();

    let on_submit = Action::new_local(move |_: &()| {
        let username = username_element
            .get()
            .map(|el| el.value())
            .unwrap_or_default();
        let password = password_element
            .get()
            .map(|el| el.value())
            .unwrap_or_default();
        let api = api.clone();
        async move {
            let access_token = login(&api, username, password).await?;
            token.set(Some(access_token));
            // Fill-in the rest of the session before anyone goes looking for it
            let me = current_user(&api, token).await?;
            info!("Signed-in as {}", me.username());
            user.set(Some(me));
            Ok(())
        }
    });

    Effect::new(move |_| match on_submit.value().get() {
        Some(Ok(())) => navigate("/", Default::default()),
        Some(Err(err)) => set_error.set(Some(handle_error(&err))),
        None => (),
    });

    // Ugh: I really need to move this stuff to CSS:
    view! {
        <div style="display: flex; align-items: center; justify-content: space-around; flex-direction: column;">
            <form style="padding: 1em;" on:submit=move |ev| {
                // If I don't say this, the page reloads before the HTTP call returns
                ev.prevent_default();
                on_submit.dispatch(());
            }>
                <div style="margin-bottom: 8px;">
                    <label for="username" style="width: 100px; display: inline-block;">"Username:"</label>
                    <input type="text" id="username" name="username" node_ref=username_element required />
                </div>
                <div style="margin-bottom: 12px;">
                    <label for="password" style="width: 100px; display: inline-block;">"Password:"</label>
                    <input type="password" id="password" name="password" node_ref=password_element required />
                </div>
                <div style="display: flex; align-items: center; justify-content: space-around;">
                    <input type="submit" value="Login" />
                </div>
            </form>
            <Show when=move || error.get().is_some()>
                <div style="color: red;">
                { move || error.get().unwrap_or_default() }
                </div>
            </Show>
        </div>
    }
}
