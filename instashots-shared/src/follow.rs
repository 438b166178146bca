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

//! # Follow/Unfollow buttons
//!
//! The "Suggested for you" list carries one button per user. There is *one* loading flag for all of
//! them, plus the index of the button most recently clicked; only that button says "Updating...".
//! Click two buttons in quick succession and both requests go out, but only the second shows
//! progress, and the first one to finish clears the flag for both. That's how the product behaves
//! today; if it's to change, it should change here.

use std::fmt::Display;

use tracing::debug;

use crate::{
    api::FollowRsp,
    entities::{User, UserId},
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FollowLabel {
    Follow,
    Unfollow,
    Updating,
}

impl Display for FollowLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                FollowLabel::Follow => "Follow",
                FollowLabel::Unfollow => "Unfollow",
                FollowLabel::Updating => "Updating...",
            }
        )
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct FollowToggle {
    active: usize,
    loading: bool,
}

impl FollowToggle {
    /// The button at `index` was clicked & its request is going out
    pub fn begin(&mut self, index: usize) {
        debug!("Follow toggle {index} in flight.");
        self.active = index;
        self.loading = true;
    }
    /// A request finished, one way or another
    pub fn finish(&mut self) {
        self.loading = false;
    }
    pub fn active(&self) -> usize {
        self.active
    }
    pub fn is_loading(&self) -> bool {
        self.loading
    }
    /// What the button at `index`, for `target`, should say to `viewer`
    pub fn label(&self, index: usize, viewer: Option<&User>, target: &UserId) -> FollowLabel {
        if self.active == index && self.loading {
            FollowLabel::Updating
        } else if viewer.is_some_and(|viewer| viewer.follows(target)) {
            FollowLabel::Unfollow
        } else {
            FollowLabel::Follow
        }
    }
}

/// You can't follow yourself
pub fn is_disabled(viewer: Option<&User>, target: &UserId) -> bool {
    viewer.is_some_and(|viewer| viewer.id() == target)
}

/// Fold a completed follow toggle into the viewer
///
/// Only a 200 counts; anything else in the 2xx range leaves the viewer untouched. Returns the message
/// to show, if any.
pub fn apply_follow_rsp(viewer: &mut Option<User>, status: u16, rsp: FollowRsp) -> Option<String> {
    if status != 200 {
        debug!("Follow toggle returned {status}; ignoring.");
        return None;
    }
    if let Some(viewer) = viewer.as_mut() {
        viewer.merge(rsp.user);
    }
    Some(rsp.message)
}

#[cfg(test)]
mod test {
    use super::*;

    use crate::entities::UserPatch;

    fn uid(s: &str) -> UserId {
        UserId::new(s).unwrap()
    }

    #[test]
    fn labels() {
        let me = User::new(&uid("me"), "me", "Me");
        let mut toggle = FollowToggle::default();
        assert_eq!(toggle.label(0, Some(&me), &uid("a")), FollowLabel::Follow);
        assert_eq!(toggle.label(0, None, &uid("a")), FollowLabel::Follow);

        toggle.begin(1);
        assert_eq!(toggle.label(0, Some(&me), &uid("a")), FollowLabel::Follow);
        assert_eq!(toggle.label(1, Some(&me), &uid("b")), FollowLabel::Updating);
        assert_eq!(FollowLabel::Updating.to_string(), "Updating...");

        assert!(is_disabled(Some(&me), &uid("me")));
        assert!(!is_disabled(Some(&me), &uid("a")));
        assert!(!is_disabled(None, &uid("me")));
    }

    #[test]
    fn overlapping_toggles() {
        let mut viewer = Some(User::new(&uid("me"), "me", "Me"));
        let mut toggle = FollowToggle::default();

        // Click "a", then "b" before "a" resolves: the flag is shared, so only "b" shows progress
        toggle.begin(0);
        toggle.begin(1);
        assert_eq!(toggle.active(), 1);
        assert_eq!(toggle.label(0, viewer.as_ref(), &uid("a")), FollowLabel::Follow);
        assert_eq!(toggle.label(1, viewer.as_ref(), &uid("b")), FollowLabel::Updating);

        // "a" resolves with a 200
        let message = apply_follow_rsp(
            &mut viewer,
            200,
            FollowRsp {
                message: "Followed a".to_owned(),
                user: UserPatch {
                    following: Some(vec![uid("a")]),
                    ..Default::default()
                },
            },
        );
        toggle.finish();
        assert_eq!(message.as_deref(), Some("Followed a"));
        assert!(!toggle.is_loading());
        assert_eq!(toggle.label(0, viewer.as_ref(), &uid("a")), FollowLabel::Unfollow);
        assert_eq!(toggle.label(1, viewer.as_ref(), &uid("b")), FollowLabel::Follow);

        // "b" fails; the flag is cleared regardless
        toggle.finish();
        assert!(!toggle.is_loading());
        assert!(viewer.as_ref().unwrap().follows(&uid("a")));
    }

    #[test]
    fn non_200() {
        let mut viewer = Some(User::new(&uid("me"), "me", "Me"));
        let message = apply_follow_rsp(
            &mut viewer,
            202,
            FollowRsp {
                message: "Queued".to_owned(),
                user: UserPatch {
                    following: Some(vec![uid("a")]),
                    ..Default::default()
                },
            },
        );
        assert!(message.is_none());
        assert!(!viewer.unwrap().follows(&uid("a")));
    }
}
