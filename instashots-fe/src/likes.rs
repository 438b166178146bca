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

//! # The "likes" tab of a profile

use leptos::{either::EitherOf3, prelude::*};

use instashots_shared::{
    Post, User,
    likes::{LikesView, likes_view},
};

#[component]
fn Notice(title: &'static str, detail: &'static str) -> impl IntoView {
    view! {
        <div class="likes-notice" style="display: flex; flex-direction: column; align-items: center; justify-content: center; height: 300px; gap: 1rem;">
            <h1 style="font-size: 1.25rem; font-weight: 600; color: #4b5563;">{ title }</h1>
            <p style="color: #6b7280;">{ detail }</p>
        </div>
    }
}

/// Render `profile`'s liked posts for `user`
///
/// `liked_posts` is `None` while they're still on their way.
#[component]
pub fn Likes(
    liked_posts: Option<Vec<Post>>,
    user: Option<User>,
    profile: Option<User>,
) -> impl IntoView {
    match likes_view(liked_posts.as_deref(), user.as_ref(), profile.as_ref()) {
        LikesView::Private => EitherOf3::A(view! {
            <Notice title="You cannot view this page" detail="This content is private"/>
        }),
        LikesView::Empty => EitherOf3::B(view! {
            <Notice title="No liked posts yet" detail="Like posts to view them here later"/>
        }),
        LikesView::Grid(tiles) => EitherOf3::C(view! {
            <div class="likes-grid" style="display: grid; grid-template-columns: repeat(3, 1fr); gap: 1rem;">
                {
                    tiles.into_iter().map(|tile| {
                        let alt = tile.caption.clone();
                        let image = tile.image.map(|url| view! {
                            <img src=url.to_string() alt=alt loading="lazy"/>
                        });
                        view! {
                            <a href=tile.href class="like-tile">
                                { image }
                                <div class="like-tile-overlay">
                                    <p>{ tile.caption }</p>
                                </div>
                            </a>
                        }
                    }).collect_view()
                }
            </div>
        }),
    }
}
