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

//! # instashots-fe Home component
//!
//! The feed proper lives in [FeedAccumulator]; this module just wires it to the API & the DOM.
//! There are three moving parts:
//!
//! 1. the page to fetch, which is derived from the accumulator
//! 2. a [LocalResource] that fetches that page whenever it changes
//! 3. a couple of effects that fold what the resource reports (data, errors & whether it's still
//!    loading) back into the accumulator
//!
//! Results are tagged with the page they answer, so a stale replay of an old result just merges
//! again, which the accumulator tolerates.

use leptos::{either::EitherOf3, prelude::*};
use tap::Pipe;
use thaw::Spinner;
use tracing::debug;

use instashots_shared::{
    FeedAccumulator, Post, PostsPage,
    api::{ClientError, handle_error},
};

use crate::{
    infinite_scroll::use_infinite_scroll,
    services::get_posts,
    sidebar::Sidebar,
    types::{Api, Token},
};

/// One post in the feed
#[component]
fn PostCard(post: Post) -> impl IntoView {
    let posted = post
        .created_at()
        .map(|posted| posted.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_default();
    let cover = post.cover().map(|url| url.to_string());
    let likes = post.likes().count();
    view! {
        <div class="post-card" style="margin: 6px 0; border: 1px solid #ccc;">
            { cover.map(|src| view! { <img src=src style="width: 100%; display: block;"/> }) }
            <div class="post-caption" style="padding: 4px 6px;">{ post.caption().to_owned() }</div>
            <div style="padding: 2px 6px; font-size: smaller; color: #888;">
                { posted } " · " { likes } " likes"
            </div>
        </div>
    }
}

/// Placeholders to show until the first page lands
#[component]
fn FeedSkeleton() -> impl IntoView {
    (0..3)
        .map(|_| {
            view! {
                <div class="post-skeleton" style="margin: 6px 0; height: 240px; background: #eee;"></div>
            }
        })
        .collect_view()
}

/// The instashots' home page: the user's feed, with the sidebar alongside
#[component]
pub fn Home() -> impl IntoView {
    debug!("Home invoked.");

    let api = use_context::<Api>()
        .expect("Failed to retrieve the API net location")
        .0;
    let token = use_context::<Token>().expect("No token Cell!?");

    document().set_title("Your Instashot feed");

    let feed = RwSignal::new(FeedAccumulator::new());
    let page = Memo::new(move |_| feed.with(|feed| feed.page()));

    async fn load_data(
        api: String,
        token: Token,
        page: usize,
    ) -> (usize, Result<PostsPage, ClientError>) {
        get_posts(&api, token, page).await.pipe(|rsp| (page, rsp))
    }

    let page_data = LocalResource::new(move || load_data(api.clone(), token, page.get()));

    // Fold each result into the feed...
    Effect::new(move |_| {
        if let Some((page, rsp)) = page_data.get() {
            match rsp {
                Ok(rsp) => feed.update(|feed| feed.on_page_result_received(page, Some(&rsp))),
                Err(err) => {
                    let message = handle_error(&err);
                    feed.update(|feed| feed.on_fetch_error(message));
                }
            }
        }
    });

    // along with whether we're still waiting on one. We're loading whenever the latest result
    // doesn't answer the page we're on.
    let fetching =
        Memo::new(move |_| page_data.get().map(|(page, _)| page) != Some(page.get()));
    Effect::new(move |_| {
        let loading = fetching.get();
        feed.update(|feed| feed.on_fetch_loading(loading));
    });

    let marker = use_infinite_scroll(
        fetching.into(),
        Signal::derive(move || feed.with(|feed| feed.has_more())),
        Signal::derive(move || feed.with(|feed| feed.len())),
        move |update| {
            feed.update(|feed| {
                feed.load_more(update);
            })
        },
    );

    let on_refresh = move |_| {
        let was = feed.with_untracked(|feed| feed.page());
        feed.update(|feed| feed.refresh());
        // If we were already on page one, the page won't change & so nothing will be re-fetched
        if was == 1 {
            page_data.refetch();
        }
    };

    view! {
        <div class="home" style="display: flex;">
            <div class="feed" style="flex: 3; margin: 6px;">
                <div class="feed-nav" style="display: flex; font-size: smaller; color: #888">
                    <span style="padding: 2px 6px;">
                        <a href="#" on:click=on_refresh>"refresh"</a>
                    </span>
                </div>
                { move || {
                    if page_data.get().is_none() {
                        EitherOf3::A(view! { <FeedSkeleton/> })
                    } else if feed.with(|feed| feed.is_empty()) {
                        EitherOf3::B(view! { <p class="empty-feed">"No posts to display"</p> })
                    } else {
                        EitherOf3::C(())
                    }
                }}
                <div class="post-list">
                    <For each=move || feed.with(|feed| feed.posts().to_vec())
                         key=|post| post.id().clone()
                         let:post>
                        <PostCard post/>
                    </For>
                </div>
                <div node_ref=marker class="scroll-marker" style="height: 1px;"></div>
                <Show when=move || feed.with(|feed| feed.is_loading_more())>
                    <div style="display: flex; justify-content: center; padding: 8px;">
                        <Spinner/>
                    </div>
                </Show>
                { move || feed.with(|feed| feed.error().map(str::to_owned)).map(|err| view! {
                    <div class="feed-error" style="color: red; padding: 4px 6px;">{ err }</div>
                })}
            </div>
            <Sidebar/>
        </div>
    }
}
