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

//! # instashots frontend
//!
//! A single-page app built on [Leptos]. The interesting state (the feed, the follow toggle, the
//! "likes" tab) is modelled in `instashots-shared`, where it can be unit tested without a browser;
//! the modules here bind that state to the API & the DOM.
//!
//! ## The session
//!
//! We hold an access token in memory, & the API holds a refresh token for us in an HTTP-only
//! cookie. On load we don't know whether we're signed-in, so we try to trade the cookie for a fresh
//! access token; until that resolves, protected routes report "still loading" rather than
//! redirecting to the sign-in page.
//!
//! [Leptos]: https://book.leptos.dev

use leptos::prelude::*;
use leptos_router::{
    components::{ProtectedRoute, Route, Router, Routes},
    path,
};
use thaw::{ConfigProvider, Layout, LayoutHeader};
use tracing::{info, warn};
use tracing_subscriber::fmt;
use tracing_subscriber_wasm::MakeConsoleWriter;

mod home;
mod http;
#[path = "infinite-scroll.rs"]
mod infinite_scroll;
mod likes;
#[path = "not-found.rs"]
mod not_found;
mod profile;
mod services;
mod sidebar;
mod signin;
mod types;

use home::Home;
use not_found::NotFoundRoute;
use profile::Profile;
use signin::SignIn;
use types::{API_LOCATION, Api, CurrentUser, Token};

/// [instashots-fe](crate) root component
#[component]
fn App() -> impl IntoView {
    // Make the API location & the session available to any of our sub-components (avoiding "prop
    // drilling"-- making these a parameter into every single component below us):
    provide_context(Api(API_LOCATION.to_owned()));
    let token: Token = RwSignal::new(None);
    provide_context(token);
    let user: CurrentUser = RwSignal::new(None);
    provide_context(user);

    // Pick-up where we left off, if the refresh cookie is still good
    let restoring = RwSignal::new(true);
    let restore = Action::new_local(move |_: &()| async move {
        let api = API_LOCATION;
        match http::refresh_token(api, token).await {
            Ok(()) => match services::current_user(api, token).await {
                Ok(me) => {
                    info!("Session restored for {}", me.username());
                    user.set(Some(me));
                }
                Err(err) => {
                    warn!("Refreshed our token, but couldn't say who for: {err}");
                    token.set(None);
                }
            },
            Err(err) => info!("No session to restore ({err}); sign-in required."),
        }
        restoring.set(false);
    });
    restore.dispatch(());

    // Some(true) means display, Some(false) means do *not* display, and None means that this
    // information is still loading
    let signed_in = move || {
        if restoring.get() {
            None
        } else {
            Some(token.get().is_some())
        }
    };

    view! {
        <ConfigProvider>
            // thaw's `Layout` (https://thawui.vercel.app/components/layout)
            <Layout>
                <LayoutHeader class="banner">
                    <h1 class="logo">"Instashots"</h1>
                </LayoutHeader>
                <Layout>
                    <main>
                        <Router>
                            <Routes fallback=NotFoundRoute>
                                <Route path=path!("/signin") view=SignIn />
                                <ProtectedRoute
                                    path=path!("/")
                                    condition=signed_in
                                    redirect_path=|| "/signin"
                                    view=Home
                                />
                                <ProtectedRoute
                                    path=path!("/profile/:username")
                                    condition=signed_in
                                    redirect_path=|| "/signin"
                                    view=Profile
                                />
                            </Routes>
                        </Router>
                    </main>
                </Layout>
            </Layout>
        </ConfigProvider>
    }
}

fn main() {
    // We can setup a bog standard tracing-subscriber `Subscriber`, configured to output to the
    // browser console:
    fmt()
        .with_writer(MakeConsoleWriter::default().map_trace_level_to(tracing::Level::DEBUG))
        .without_time()
        .with_ansi(false)
        .init();
    // Without this, panics in the browser show up as "Unreachable executed"; with it, we get a Rust
    // stack trace (https://book.leptos.dev/getting_started/leptos_dx.html).
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
