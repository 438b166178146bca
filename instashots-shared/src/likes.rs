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

//! # A profile's "likes" tab

use crate::entities::{Post, PostId, StorUrl, User};

/// One square in the likes grid
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LikeTile {
    pub id: PostId,
    pub href: String,
    pub image: Option<StorUrl>,
    pub caption: String,
}

impl From<&Post> for LikeTile {
    fn from(post: &Post) -> Self {
        LikeTile {
            id: post.id().clone(),
            href: format!("/post/{}", post.id()),
            image: post.cover().cloned(),
            caption: post.caption().to_owned(),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum LikesView {
    /// Somebody else's likes
    Private,
    /// Your likes, of which there are none
    Empty,
    Grid(Vec<LikeTile>),
}

/// Decide what `viewer` gets to see of `profile`'s liked posts
///
/// Likes are only visible to their owner; if we don't know who either party is, nobody owns them.
/// `liked` is `None` while the posts are still loading, which renders as an empty grid rather than
/// the "no liked posts" message.
pub fn likes_view(
    liked: Option<&[Post]>,
    viewer: Option<&User>,
    profile: Option<&User>,
) -> LikesView {
    let authorized = match (viewer, profile) {
        (Some(viewer), Some(profile)) => viewer.id() == profile.id(),
        _ => false,
    };
    if !authorized {
        return LikesView::Private;
    }
    match liked {
        Some([]) => LikesView::Empty,
        Some(liked) => LikesView::Grid(liked.iter().map(LikeTile::from).collect()),
        None => LikesView::Grid(Vec::new()),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use crate::entities::UserId;

    fn user(id: &str) -> User {
        User::new(&UserId::new(id).unwrap(), id, id)
    }

    #[test]
    fn private() {
        let none: &[Post] = &[];
        assert_eq!(
            likes_view(Some(none), Some(&user("a")), Some(&user("b"))),
            LikesView::Private
        );
        assert_eq!(
            likes_view(Some(none), None, Some(&user("b"))),
            LikesView::Private
        );
        assert_eq!(likes_view(Some(none), None, None), LikesView::Private);
    }

    #[test]
    fn own_likes() {
        let me = user("me");
        let none: &[Post] = &[];
        assert_eq!(likes_view(Some(none), Some(&me), Some(&me)), LikesView::Empty);
        assert_eq!(likes_view(None, Some(&me), Some(&me)), LikesView::Grid(vec![]));

        let posts = vec![
            Post::new(
                &PostId::new("p1").unwrap(),
                "beach",
                &[
                    StorUrl::try_from("https://cdn.example.com/1.jpg").unwrap(),
                    StorUrl::try_from("https://cdn.example.com/2.jpg").unwrap(),
                ],
            ),
            Post::new(&PostId::new("p2").unwrap(), "text only", &[]),
        ];
        let LikesView::Grid(tiles) = likes_view(Some(posts.as_slice()), Some(&me), Some(&me)) else {
            panic!("Expected a grid");
        };
        assert_eq!(tiles.len(), 2);
        assert_eq!(tiles[0].href, "/post/p1");
        assert_eq!(
            tiles[0].image.as_ref().map(|u| u.to_string()),
            Some("https://cdn.example.com/1.jpg".to_owned())
        );
        assert_eq!(tiles[0].caption, "beach");
        assert_eq!(tiles[1].image, None);
    }
}
