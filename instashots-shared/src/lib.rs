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

//! # instashots-shared
//!
//! Types & state machines that don't depend on the browser. Everything the instashots front end
//! does that's more interesting than "render this" or "send that" lives here, so that it can be
//! built & tested for the host target without dragging a browser along.
//!
//! - [entities]: posts, users & their identifiers
//! - [api]: request & response bodies for the instashots REST API, plus the front end's error type
//! - [feed]: the Feed Accumulator, which merges pages of posts into the home feed
//! - [load_more]: the Idle/Fetching latch guarding the "load more" trigger
//! - [follow]: state behind the "Follow"/"Unfollow" buttons
//! - [likes]: what to show on a profile's "likes" tab

pub mod api;
pub mod entities;
pub mod feed;
pub mod follow;
pub mod likes;
#[path = "load-more.rs"]
pub mod load_more;

pub use api::{ClientError, Pagination, PostsPage};
pub use entities::{Post, PostId, StorUrl, User, UserId, UserPatch};
pub use feed::{FeedAccumulator, PageUpdate};
pub use load_more::LoadMoreLatch;
