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

//! # Infinite scroll
//!
//! The browser will tell us when an element scrolls into view, via an [IntersectionObserver]. We
//! hand back a [NodeRef]; the caller attaches it to the bottom of its list, & when that comes into
//! view we ask for the next page.
//!
//! An observer only reports *changes* in visibility (plus one report when it starts watching). If
//! the next page is short enough that the marker is still in view once it's rendered, nothing
//! changes & we'd never hear about it again. So we re-observe the marker every time the list grows,
//! which gets us a fresh initial report.

use leptos::{html, prelude::*};
use tracing::{debug, error};
use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, js_sys::Array};

use instashots_shared::PageUpdate;

type OnIntersect = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Call `set_page` with "the next page" whenever the returned marker scrolls into view, as long as
/// we're not `loading` & there `has_more` pages
///
/// `items` should track the length of the list the marker sits beneath.
pub fn use_infinite_scroll<F>(
    loading: Signal<bool>,
    has_more: Signal<bool>,
    items: Signal<usize>,
    set_page: F,
) -> NodeRef<html::Div>
where
    F: Fn(PageUpdate) + 'static,
{
    let marker: NodeRef<html::Div> = NodeRef::new();

    let on_intersect: OnIntersect = Closure::new(move |entries: Array, _: IntersectionObserver| {
        let visible = entries.iter().any(|entry| {
            entry
                .dyn_into::<IntersectionObserverEntry>()
                .is_ok_and(|entry| entry.is_intersecting())
        });
        if visible && !loading.get_untracked() && has_more.get_untracked() {
            debug!("Infinite-scroll marker in view; advancing the page.");
            set_page(PageUpdate::next());
        }
    });

    let observer = match IntersectionObserver::new(on_intersect.as_ref().unchecked_ref()) {
        Ok(observer) => observer,
        Err(err) => {
            error!("Failed to create an IntersectionObserver: {err:?}");
            return marker;
        }
    };

    // The closure has to outlive every callback the observer might make, so they live & die
    // together.
    let observer = StoredValue::new_local(Some((observer, on_intersect)));
    on_cleanup(move || {
        observer.update_value(|observer| {
            if let Some((observer, _)) = observer.take() {
                observer.disconnect();
            }
        })
    });

    Effect::new(move |_| {
        let n = items.get();
        if let Some(el) = marker.get() {
            observer.with_value(|observer| {
                if let Some((observer, _)) = observer {
                    debug!("Watching the infinite-scroll marker beneath {n} items.");
                    observer.unobserve(&el);
                    observer.observe(&el);
                }
            });
        }
    });

    marker
}
