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

//! # instashots-fe Types & Constants
//!
//! I normally loathe these sorts of "types" or "entities" modules, but there really is a set of
//! shared types for this crate: the things we hand down through context rather than drilling
//! through every component's props.

use leptos::prelude::RwSignal;

use instashots_shared::User;

////////////////////////////////////////////////////////////////////////////////////////////////////
//                                   instashots-fe common types                                   //
////////////////////////////////////////////////////////////////////////////////////////////////////

// A new type for `use_context()`
#[derive(Clone, Debug)]
pub struct Api(pub String); // Make this a proper `Url`

// The session: the access token, & who it belongs to. Both are `None` when signed-out.
pub type Token = RwSignal<Option<String>>;
pub type CurrentUser = RwSignal<Option<User>>;

////////////////////////////////////////////////////////////////////////////////////////////////////
//                                    instashots-fe constants                                     //
////////////////////////////////////////////////////////////////////////////////////////////////////

pub static USER_AGENT: &str = "instashots-fe/0.1.0";

/// Where to find the instashots API; set `INSTASHOTS_API` at build time to override
pub static API_LOCATION: &str = match option_env!("INSTASHOTS_API") {
    Some(api) => api,
    None => "http://127.0.0.1:8000",
};
