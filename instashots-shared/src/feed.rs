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

//! # The Home Feed
//!
//! ## Introduction
//!
//! The API serves the home feed one page at a time: ask for page `n`, get back a list of posts &
//! an indication of whether there's a page `n+1`. The front end, on the other hand, wants to show
//! one ever-growing list that extends itself as the user scrolls to the bottom ("infinite
//! scroll"). The [FeedAccumulator] sits between the two.
//!
//! ## The Model
//!
//! The feed is an ordered list of posts, unique by [PostId]. Pages get merged into it as they
//! arrive:
//!
//! - page 1 *replaces* the feed, whatever it held before; that's how both the initial load & a
//!   refresh work
//! - any later page is *appended*, minus any post we've already got
//!
//! Either way, a post appearing twice in the same page is only kept the first time.
//!
//! Posts shift between pages when new things get posted while the user is scrolling, so the same
//! post turning up on pages 2 & 3 is routine. Dropping the second copy keeps the list stable: once
//! a post has a place in the feed it keeps it, & the same page applied twice is a no-op.
//!
//! Results are applied in whatever order they arrive. If a request for page 2 somehow resolves
//! after the request for page 3, its posts land after page 3's. In practice the load-more latch
//! (see [crate::load_more]) keeps more than one page from being outstanding at a time.

use std::collections::HashSet;

use tracing::debug;

use crate::{
    api::PostsPage,
    entities::{Post, PostId},
    load_more::LoadMoreLatch,
};

////////////////////////////////////////////////////////////////////////////////////////////////////
//                                           PageUpdate                                           //
////////////////////////////////////////////////////////////////////////////////////////////////////

/// A change to the page counter
///
/// Whoever advances the counter may either know the next value outright, or only know how to
/// compute it from the current one ("one more than whatever it is now"); we take both.
pub enum PageUpdate {
    Set(usize),
    Map(Box<dyn FnOnce(usize) -> usize>),
}

impl PageUpdate {
    /// "The page after this one"
    pub fn next() -> PageUpdate {
        PageUpdate::Map(Box::new(|prev| prev + 1))
    }
    pub fn apply(self, prev: usize) -> usize {
        match self {
            PageUpdate::Set(next) => next,
            PageUpdate::Map(f) => f(prev),
        }
    }
}

impl std::fmt::Debug for PageUpdate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PageUpdate::Set(n) => write!(f, "PageUpdate::Set({n})"),
            PageUpdate::Map(_) => write!(f, "PageUpdate::Map(..)"),
        }
    }
}

impl From<usize> for PageUpdate {
    fn from(value: usize) -> Self {
        PageUpdate::Set(value)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
//                                        FeedAccumulator                                         //
////////////////////////////////////////////////////////////////////////////////////////////////////

/// Client-side state for the home feed
#[derive(Clone, Debug, PartialEq)]
pub struct FeedAccumulator {
    posts: Vec<Post>,
    // 1-indexed; the page we want (or have) most recently
    page: usize,
    latch: LoadMoreLatch,
    // From the most recent pagination descriptor
    has_more: bool,
    error: Option<String>,
}

impl Default for FeedAccumulator {
    fn default() -> Self {
        FeedAccumulator::new()
    }
}

impl FeedAccumulator {
    pub fn new() -> FeedAccumulator {
        FeedAccumulator {
            posts: Vec::new(),
            page: 1,
            latch: LoadMoreLatch::Idle,
            has_more: false,
            error: None,
        }
    }
    /// Merge one page of results into the feed
    ///
    /// `page` is the page counter that was in effect when the request went out; `result` is `None`
    /// if the request hasn't come back yet, in which case nothing happens.
    pub fn on_page_result_received(&mut self, page: usize, result: Option<&PostsPage>) {
        let Some(result) = result else {
            return;
        };

        if page == 1 {
            debug!("Page 1: resetting the feed.");
            self.posts.clear();
        }

        let mut seen = self
            .posts
            .iter()
            .map(|post| post.id().clone())
            .collect::<HashSet<PostId>>();
        let before = self.posts.len();
        self.posts.extend(
            result
                .posts
                .iter()
                .filter(|post| seen.insert(post.id().clone()))
                .cloned(),
        );
        debug!(
            "Page {page}: {} new posts of {}.",
            self.posts.len() - before,
            result.posts.len()
        );

        self.has_more = result.pagination.has_more;
        self.error = None;
    }
    /// The infinite-scroll marker came into view
    ///
    /// Shorthand for [load_more](Self::load_more) with "the next page".
    pub fn on_load_more_triggered(&mut self) -> bool {
        self.load_more(PageUpdate::next())
    }
    /// Engage the latch & move the page counter; answer whether we did
    ///
    /// Does nothing if we're already loading more, or the last page told us there are no more.
    pub fn load_more(&mut self, update: impl Into<PageUpdate>) -> bool {
        if !self.latch.try_engage(self.has_more) {
            return false;
        }
        self.set_page(update);
        true
    }
    /// Report whether the paged fetch is in progress
    pub fn on_fetch_loading(&mut self, loading: bool) {
        self.latch.observe_fetch(loading);
    }
    /// The paged fetch failed; hold onto the message for display
    ///
    /// No retry, & the feed is left as it was.
    pub fn on_fetch_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }
    /// Start over from page 1
    pub fn refresh(&mut self) {
        self.set_page(PageUpdate::Set(1));
    }
    pub fn set_page(&mut self, update: impl Into<PageUpdate>) {
        self.page = update.into().apply(self.page);
    }
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
    pub fn has_more(&self) -> bool {
        self.has_more
    }
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
    pub fn is_loading_more(&self) -> bool {
        self.latch.is_fetching()
    }
    pub fn len(&self) -> usize {
        self.posts.len()
    }
    pub fn page(&self) -> usize {
        self.page
    }
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use crate::api::Pagination;

    fn page(ids: &[&str], has_more: bool) -> PostsPage {
        PostsPage {
            posts: ids
                .iter()
                .map(|id| Post::new(&PostId::new(id).unwrap(), id, &[]))
                .collect(),
            pagination: Pagination { has_more },
        }
    }

    fn ids(feed: &FeedAccumulator) -> Vec<&str> {
        feed.posts().iter().map(|post| post.id().as_str()).collect()
    }

    #[test]
    fn absent_result_is_a_no_op() {
        let mut feed = FeedAccumulator::new();
        feed.on_page_result_received(1, Some(&page(&["1", "2"], true)));
        let before = feed.clone();
        feed.on_page_result_received(2, None);
        feed.on_page_result_received(1, None);
        assert_eq!(feed, before);
    }

    #[test]
    fn merge_then_reset() {
        let mut feed = FeedAccumulator::new();
        feed.on_page_result_received(1, Some(&page(&["1", "2"], true)));
        feed.on_page_result_received(2, Some(&page(&["2", "3"], true)));
        assert_eq!(ids(&feed), vec!["1", "2", "3"]);
        feed.on_page_result_received(1, Some(&page(&["5"], false)));
        assert_eq!(ids(&feed), vec!["5"]);
        assert!(!feed.has_more());
    }

    #[test]
    fn duplicates_within_a_page() {
        let mut feed = FeedAccumulator::new();
        feed.on_page_result_received(1, Some(&page(&["1"], true)));
        feed.on_page_result_received(2, Some(&page(&["2", "2", "1", "3"], true)));
        assert_eq!(ids(&feed), vec!["1", "2", "3"]);
    }

    #[test]
    fn page_updates() {
        let mut feed = FeedAccumulator::new();
        assert_eq!(feed.page(), 1);
        feed.set_page(4usize);
        assert_eq!(feed.page(), 4);
        feed.set_page(PageUpdate::Map(Box::new(|prev| prev * 2)));
        assert_eq!(feed.page(), 8);
        feed.refresh();
        assert_eq!(feed.page(), 1);
    }

    #[test]
    fn load_more() {
        let mut feed = FeedAccumulator::new();
        // Nothing has told us there's more, yet
        assert!(!feed.on_load_more_triggered());
        assert!(!feed.is_loading_more());
        assert_eq!(feed.page(), 1);

        feed.on_page_result_received(1, Some(&page(&["1", "2"], true)));
        assert!(feed.on_load_more_triggered());
        assert!(feed.is_loading_more());
        assert_eq!(feed.page(), 2);
        // Scrolling around while page 2 is in flight changes nothing
        assert!(!feed.on_load_more_triggered());
        assert!(!feed.load_more(7usize));
        assert_eq!(feed.page(), 2);

        feed.on_fetch_loading(true);
        assert!(feed.is_loading_more());
        feed.on_page_result_received(2, Some(&page(&["3"], false)));
        feed.on_fetch_loading(false);
        assert!(!feed.is_loading_more());

        // Last page
        assert!(!feed.on_load_more_triggered());
        assert!(!feed.is_loading_more());
        assert_eq!(feed.page(), 2);
    }

    #[test]
    fn errors_leave_the_feed_alone() {
        let mut feed = FeedAccumulator::new();
        feed.on_page_result_received(1, Some(&page(&["1", "2"], true)));
        assert!(feed.on_load_more_triggered());
        feed.on_fetch_error("Network Error");
        feed.on_fetch_loading(false);
        assert_eq!(feed.error(), Some("Network Error"));
        assert_eq!(ids(&feed), vec!["1", "2"]);
        assert!(!feed.is_loading_more());

        // The next good page clears it
        feed.on_page_result_received(2, Some(&page(&["3"], true)));
        assert_eq!(feed.error(), None);
    }
}
