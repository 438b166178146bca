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

//! # A user's profile page
//!
//! For now this is just a header & the "likes" tab; posts, followers & the rest will hang off it
//! later.

use leptos::{either::Either, prelude::*};
use leptos_router::hooks::use_params_map;
use tracing::debug;

use instashots_shared::api::handle_error;

use crate::{
    likes::Likes,
    sidebar::Avatar,
    services::{get_liked_posts, get_profile},
    types::{Api, CurrentUser, Token},
};

#[component]
pub fn Profile() -> impl IntoView {
    debug!("Profile invoked.");

    let api = use_context::<Api>()
        .expect("Failed to retrieve the API net location")
        .0;
    let token = use_context::<Token>().expect("No token Cell!?");
    let user = use_context::<CurrentUser>().expect("No current user!?");

    let params = use_params_map();
    let username = move || params.with(|params| params.get("username").unwrap_or_default());

    let api0 = api.clone();
    let profile = LocalResource::new(move || {
        let api = api0.clone();
        let username = username();
        async move { get_profile(&api, token, &username).await }
    });
    let liked = LocalResource::new(move || {
        let api = api.clone();
        let username = username();
        async move { get_liked_posts(&api, token, &username).await }
    });

    view! {
        <div class="profile-view">
            {move || match profile.get() {
                None => Either::Left(view! { <p>"Loading..."</p> }),
                Some(Err(err)) => Either::Right(Either::Left(view! {
                    <span class="error">{ handle_error(&err) }</span>
                })),
                Some(Ok(profile)) => {
                    let header = profile.clone();
                    Either::Right(Either::Right(view! {
                        <div class="profile-header" style="display: flex; align-items: center; gap: 8px;">
                            <Avatar user=header.clone()/>
                            <p class="username">{ header.username().to_owned() }</p>
                            <p class="fullname">{ header.fullname().to_owned() }</p>
                        </div>
                        {move || {
                            // A failure to load likes reads the same as having none
                            let liked_posts = liked.get().map(|res| res.unwrap_or_else(|err| {
                                handle_error(&err);
                                Vec::new()
                            }));
                            view! {
                                <Likes liked_posts user=user.get() profile=Some(profile.clone())/>
                            }
                        }}
                    }))
                }
            }}
        </div>
    }
}
