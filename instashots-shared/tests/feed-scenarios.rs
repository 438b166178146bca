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

//! Drive the [FeedAccumulator] the way the home page does: pages arriving off the wire, the scroll
//! trigger firing whenever it pleases.

use std::collections::HashSet;

use instashots_shared::{FeedAccumulator, PageUpdate, PostsPage};

fn page_from_json(ids: &[u32], has_more: bool) -> PostsPage {
    let posts = ids
        .iter()
        .map(|id| format!(r#"{{"_id": "{id}", "caption": "post {id}", "media": []}}"#))
        .collect::<Vec<_>>()
        .join(",");
    serde_json::from_str(&format!(
        r#"{{"posts": [{posts}], "pagination": {{"hasMore": {has_more}}}}}"#
    ))
    .unwrap()
}

fn ids(feed: &FeedAccumulator) -> Vec<String> {
    feed.posts().iter().map(|p| p.id().to_string()).collect()
}

// A small, deterministic source of "arbitrary" pages
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u32 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        (self.0 >> 33) as u32
    }
    fn page(&mut self) -> Vec<u32> {
        let n = self.next() % 6;
        (0..n).map(|_| self.next() % 20).collect()
    }
}

#[test]
fn scenarios() {
    let mut feed = FeedAccumulator::new();
    feed.on_page_result_received(1, Some(&page_from_json(&[1, 2], true)));
    feed.on_page_result_received(2, Some(&page_from_json(&[2, 3], true)));
    assert_eq!(ids(&feed), vec!["1", "2", "3"]);

    let mut feed = FeedAccumulator::new();
    feed.on_page_result_received(1, Some(&page_from_json(&[1, 2], true)));
    feed.on_page_result_received(1, Some(&page_from_json(&[5], true)));
    assert_eq!(ids(&feed), vec!["5"]);
}

#[test]
fn never_any_duplicates() {
    let mut rng = Lcg(0x1234_5678);
    for _ in 0..50 {
        let mut feed = FeedAccumulator::new();
        for _ in 0..10 {
            let page_no = 1 + (rng.next() % 4) as usize;
            feed.on_page_result_received(page_no, Some(&page_from_json(&rng.page(), true)));
            let ids = ids(&feed);
            let unique = ids.iter().collect::<HashSet<_>>();
            assert_eq!(unique.len(), ids.len(), "duplicates in {ids:?}");
        }
    }
}

#[test]
fn page_one_always_resets() {
    let mut rng = Lcg(42);
    for _ in 0..50 {
        let mut feed = FeedAccumulator::new();
        for _ in 0..5 {
            feed.on_page_result_received(2, Some(&page_from_json(&rng.page(), true)));
        }
        feed.on_page_result_received(1, Some(&page_from_json(&[7, 8, 9], true)));
        assert_eq!(ids(&feed), vec!["7", "8", "9"]);
    }
}

#[test]
fn later_pages_are_idempotent() {
    let mut rng = Lcg(7);
    for _ in 0..50 {
        let mut feed = FeedAccumulator::new();
        feed.on_page_result_received(1, Some(&page_from_json(&rng.page(), true)));
        let page = page_from_json(&rng.page(), true);
        let page_no = 2 + (rng.next() % 5) as usize;
        feed.on_page_result_received(page_no, Some(&page));
        let once = feed.clone();
        feed.on_page_result_received(page_no, Some(&page));
        assert_eq!(feed, once);
    }
}

#[test]
fn infinite_scroll() {
    let mut feed = FeedAccumulator::new();
    // The trigger may fire before anything has loaded; no page 1 yet means no "more"
    assert!(!feed.on_load_more_triggered());
    assert!(!feed.is_loading_more());

    feed.on_fetch_loading(true);
    feed.on_page_result_received(feed.page(), Some(&page_from_json(&[1, 2, 3], true)));
    feed.on_fetch_loading(false);

    // The scroll hook hands us a function of the previous page, as often as it likes
    assert!(feed.load_more(PageUpdate::Map(Box::new(|prev| prev + 1))));
    for _ in 0..3 {
        assert!(!feed.load_more(PageUpdate::Map(Box::new(|prev| prev + 1))));
    }
    assert_eq!(feed.page(), 2);

    // The fetch for page 2 starts, finishes, & loading drops. Observations of "not loading" may
    // come in more than once, & interleaved with "loading"
    feed.on_fetch_loading(true);
    feed.on_page_result_received(2, Some(&page_from_json(&[3, 4], false)));
    feed.on_fetch_loading(false);
    feed.on_fetch_loading(false);
    assert!(!feed.is_loading_more());
    assert_eq!(ids(&feed), vec!["1", "2", "3", "4"]);

    // That was the last page
    assert!(!feed.load_more(PageUpdate::Set(3)));
    assert!(!feed.is_loading_more());

    // Refresh
    feed.refresh();
    assert_eq!(feed.page(), 1);
    feed.on_page_result_received(feed.page(), Some(&page_from_json(&[10], true)));
    assert_eq!(ids(&feed), vec!["10"]);
}
