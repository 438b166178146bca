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

//! # The "not found" page

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

/// Whatever the user was looking for, it isn't here
#[component]
pub fn NotFoundRoute() -> impl IntoView {
    let navigate = use_navigate();

    view! {
        <div class="container">
            <div style="display: flex; justify-content: center; align-items: center; min-height: 100vh;">
                <div style="text-align: center;">
                    <h1 style="font-weight: bold; font-size: 2.25rem;">"OOPS!"</h1>
                    <p>"The page you're looking for does not exist"</p>
                    <p>"Let's help you get back"</p>
                    <button class="btn go-back" on:click=move |_| navigate("/", Default::default())>
                        "Go back"
                    </button>
                </div>
            </div>
        </div>
    }
}
