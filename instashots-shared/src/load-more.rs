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

//! # The "load more" latch
//!
//! Scrolling the last post into view asks for another page. The browser is perfectly happy to tell
//! us about that intersection several times before the page arrives, so we need something to say
//! "already on it". This is that something: two states, no queue.
//!
//! The latch is released by *observing* that the fetch isn't in progress, not by being told that
//! it finished. Every observation of "not loading" releases it, so it can't get stuck if the
//! loading flag flickers false-true-false before we look.

use tracing::debug;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LoadMoreLatch {
    #[default]
    Idle,
    Fetching,
}

impl LoadMoreLatch {
    /// Attempt Idle → Fetching; answer whether we made the transition
    ///
    /// Refused while already fetching, or when there's nothing more to fetch.
    pub fn try_engage(&mut self, has_more: bool) -> bool {
        match self {
            LoadMoreLatch::Idle if has_more => {
                *self = LoadMoreLatch::Fetching;
                true
            }
            LoadMoreLatch::Idle => {
                debug!("Nothing more to load; ignoring the trigger.");
                false
            }
            LoadMoreLatch::Fetching => {
                debug!("Already loading more; ignoring the trigger.");
                false
            }
        }
    }
    /// Report the current state of the paged fetch
    pub fn observe_fetch(&mut self, loading: bool) {
        if !loading {
            *self = LoadMoreLatch::Idle;
        }
    }
    pub fn is_fetching(&self) -> bool {
        matches!(self, LoadMoreLatch::Fetching)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn guards() {
        let mut latch = LoadMoreLatch::default();
        assert!(!latch.try_engage(false));
        assert!(!latch.is_fetching());

        assert!(latch.try_engage(true));
        assert!(latch.is_fetching());
        // Re-entrant triggers bounce off
        assert!(!latch.try_engage(true));
        assert!(latch.is_fetching());
    }

    #[test]
    fn level_triggered() {
        let mut latch = LoadMoreLatch::default();
        assert!(latch.try_engage(true));
        // Still loading: stays put
        latch.observe_fetch(true);
        assert!(latch.is_fetching());
        latch.observe_fetch(false);
        assert_eq!(latch, LoadMoreLatch::Idle);
        // Repeated observations are harmless
        latch.observe_fetch(false);
        assert_eq!(latch, LoadMoreLatch::Idle);
        // And observing "loading" never engages the latch by itself
        latch.observe_fetch(true);
        assert_eq!(latch, LoadMoreLatch::Idle);
    }
}
