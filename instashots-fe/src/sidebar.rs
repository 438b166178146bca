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

//! # The home page's sidebar
//!
//! Who's signed-in, who they might like to follow, & the way out.

use chrono::{Datelike, Utc};
use leptos::{
    either::{Either, EitherOf3},
    prelude::*,
};
use leptos_router::hooks::use_navigate;
use thaw::Spinner;
use tracing::{debug, info};

use instashots_shared::{
    User, UserId,
    api::handle_error,
    follow::{FollowToggle, apply_follow_rsp, is_disabled},
};

use crate::{
    services::{follow_user, get_suggested_users},
    signin::sign_out,
    types::{Api, CurrentUser, Token},
};

/// A user's profile picture, or failing that, their initial
#[component]
pub fn Avatar(user: User) -> impl IntoView {
    match user.profile_picture() {
        Some(url) => Either::Left(view! {
            <img class="avatar" src=url.to_string() alt=user.username().to_owned()
                 style="width: 32px; height: 32px; border-radius: 50%;"/>
        }),
        None => Either::Right(view! {
            <span class="avatar" style="width: 32px; height: 32px; border-radius: 50%; display: inline-flex; align-items: center; justify-content: center; background: #ddd;">
                { user.initial().map(|c| c.to_uppercase().to_string()).unwrap_or_default() }
            </span>
        }),
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    debug!("Sidebar invoked.");
    let api = use_context::<Api>()
        .expect("No context for the API location!?")
        .0;
    let token = use_context::<Token>().expect("No token Cell!?");
    let user = use_context::<CurrentUser>().expect("No current user!?");

    let suggested_api = api.clone();
    let suggested = LocalResource::new(move || {
        let api = suggested_api.clone();
        async move { get_suggested_users(&api, token).await }
    });

    // One loading flag for the whole list; see [FollowToggle]
    let toggle = RwSignal::new(FollowToggle::default());
    let (notice, set_notice): (ReadSignal<Option<String>>, WriteSignal<Option<String>>) =
        signal(None);

    let follow_api = api.clone();
    let on_follow = Action::new_local(move |(index, target): &(usize, UserId)| {
        let target = target.clone();
        let api = follow_api.clone();
        toggle.update(|toggle| toggle.begin(*index));
        async move {
            let message = match follow_user(&api, token, &target).await {
                Ok((status, rsp)) => user
                    .try_update(|viewer| apply_follow_rsp(viewer, status, rsp))
                    .flatten(),
                Err(err) => Some(handle_error(&err)),
            };
            if let Some(message) = message {
                info!("{message}");
                set_notice.set(Some(message));
            }
            toggle.update(|toggle| toggle.finish());
        }
    });

    let navigate = use_navigate();
    let on_logout = Action::new_local(move |_: &()| {
        let api = api.clone();
        async move { sign_out(&api, token, user).await }
    });
    Effect::new(move |_| {
        if on_logout.value().get().is_some() {
            navigate("/signin", Default::default());
        }
    });

    view! {
        <div class="sidebar" style="flex: 1; margin: 6px; display: flex; flex-direction: column; gap: 12px;">
            { move || user.get().map(|me| {
                let href = format!("/profile/{}", me.username());
                view! {
                    <div class="me" style="display: flex; align-items: center; gap: 8px;">
                        <Avatar user=me.clone()/>
                        <div>
                            <a href=href>{ me.username().to_owned() }</a>
                            <div style="font-size: smaller; color: #888;">{ me.fullname().to_owned() }</div>
                        </div>
                        <button type="button" on:click=move |_| { on_logout.dispatch(()); }>"Logout"</button>
                    </div>
                }
            })}
            <div class="suggested">
                <div style="font-weight: bold;">"Suggested for you"</div>
                { move || match suggested.get() {
                    None => EitherOf3::A(view! { <Spinner/> }),
                    Some(Err(err)) => EitherOf3::B(view! {
                        <div style="color: red;">{ handle_error(&err) }</div>
                    }),
                    Some(Ok(users)) => EitherOf3::C(
                        users
                            .into_iter()
                            .enumerate()
                            .map(|(index, target)| {
                                let href = format!("/profile/{}", target.username());
                                let id = target.id().clone();
                                let label_id = id.clone();
                                let disabled_id = id.clone();
                                view! {
                                    <div class="suggestion" style="display: flex; align-items: center; gap: 8px; padding: 4px 0;">
                                        <Avatar user=target.clone()/>
                                        <a href=href style="flex: 1;">{ target.username().to_owned() }</a>
                                        <button
                                            type="button"
                                            disabled=move || user.with(|viewer| is_disabled(viewer.as_ref(), &disabled_id))
                                            on:click=move |_| { on_follow.dispatch((index, id.clone())); }
                                        >
                                            { move || toggle.with(|toggle| {
                                                user.with(|viewer| toggle.label(index, viewer.as_ref(), &label_id))
                                            }).to_string() }
                                        </button>
                                    </div>
                                }
                            })
                            .collect_view(),
                    ),
                }}
                <Show when=move || notice.get().is_some()>
                    <div class="notice" style="font-size: smaller; color: #888;">
                        { move || notice.get().unwrap_or_default() }
                    </div>
                </Show>
            </div>
            <footer style="font-size: smaller; color: #888;">
                { format!("© {} Instashots", Utc::now().year()) }
            </footer>
        </div>
    }
}
