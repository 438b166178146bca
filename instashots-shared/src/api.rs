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

//! # instashots API types
//!
//! Request & response bodies for the endpoints the front end calls. We don't own the API, so
//! responses are deliberately *not* `deny_unknown_fields`: the server is free to send more than we
//! read.

use serde::{Deserialize, Serialize};
use snafu::Snafu;
use tracing::error;

use crate::entities::{Post, User, UserPatch};

////////////////////////////////////////////////////////////////////////////////////////////////////
//                                          Client errors                                         //
////////////////////////////////////////////////////////////////////////////////////////////////////

/// Failure modes for a call through to the instashots API
///
/// I'd prefer to carry the underlying error as a `source`, but these need to be `Clone` so that they
/// can ride along in reactive signals & resources, and `gloo_net::Error` isn't. So we render the
/// source at the point of failure & carry the string.
#[derive(Clone, Debug, Eq, PartialEq, Snafu)]
pub enum ClientError {
    #[snafu(display("{message}"))]
    Decode { message: String },
    #[snafu(display("Couldn't form the request: {message}"))]
    Encode { message: String },
    #[snafu(display("Your session has expired; please sign-in again"))]
    NotAuthorized,
    #[snafu(display("{message}"))]
    Status { status: u16, message: String },
    #[snafu(display("{message}"))]
    Transport { message: String },
}

impl ClientError {
    /// The HTTP status that produced this error, if there was one
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::NotAuthorized => Some(401),
            ClientError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// The generic error handler: log `err` & hand back what the user should see
pub fn handle_error(err: &ClientError) -> String {
    error!("{err:?}");
    err.to_string()
}

/// Error bodies, when the API bothers to send one
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ErrorRsp {
    pub message: String,
}

////////////////////////////////////////////////////////////////////////////////////////////////////
//                                             Posts                                              //
////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    #[serde(default)]
    pub has_more: bool,
}

/// One page of the home feed: `GET /api/v1/posts?page=N`
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct PostsPage {
    #[serde(default)]
    pub posts: Vec<Post>,
    #[serde(default)]
    pub pagination: Pagination,
}

/// Query parameters for `GET /api/v1/posts`
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
pub struct PostsReq {
    pub page: usize,
}

/// `GET /api/v1/posts/liked/{username}`
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct LikedPostsRsp {
    #[serde(default)]
    pub posts: Vec<Post>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////
//                                             Users                                              //
////////////////////////////////////////////////////////////////////////////////////////////////////

/// `PATCH /api/v1/users/{id}/follow`
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct FollowRsp {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub user: UserPatch,
}

/// `GET /api/v1/users/suggested`
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestedUsersRsp {
    #[serde(default)]
    pub random_users: Vec<User>,
}

/// `GET /api/v1/users/profile/{username}` & `GET /api/v1/auth/user`
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct UserRsp {
    pub user: User,
}

////////////////////////////////////////////////////////////////////////////////////////////////////
//                                             Auth                                               //
////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct LoginReq {
    pub username: String,
    pub password: String,
}

/// Returned from both `/auth/login` & `/auth/refresh`
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRsp {
    pub access_token: String,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn posts_page() {
        let page: PostsPage = serde_json::from_str(
            r#"{
                "posts": [{"_id": "a", "caption": "one"}, {"_id": "b", "caption": "two"}],
                "pagination": {"currentPage": 1, "totalPages": 4, "hasMore": true}
            }"#,
        )
        .unwrap();
        assert_eq!(page.posts.len(), 2);
        assert!(page.pagination.has_more);

        // A missing pagination descriptor means there's nothing more to get
        let page: PostsPage = serde_json::from_str(r#"{"posts": []}"#).unwrap();
        assert!(!page.pagination.has_more);
    }

    #[test]
    fn users() {
        let rsp: SuggestedUsersRsp = serde_json::from_str(
            r#"{"randomUsers": [{"_id": "u9", "username": "ada", "profilePicture": "https://cdn.example.com/ada.png"}]}"#,
        )
        .unwrap();
        assert_eq!(rsp.random_users.len(), 1);
        assert!(rsp.random_users[0].profile_picture().is_some());

        let rsp: FollowRsp = serde_json::from_str(
            r#"{"message": "Followed ada", "user": {"following": ["u9"]}}"#,
        )
        .unwrap();
        assert_eq!(rsp.message, "Followed ada");
        assert_eq!(rsp.user.following.map(|v| v.len()), Some(1));

        let rsp: LoginRsp = serde_json::from_str(r#"{"accessToken": "t0k3n"}"#).unwrap();
        assert_eq!(rsp.access_token, "t0k3n");
    }

    #[test]
    fn errors() {
        let err = ClientError::Status {
            status: 404,
            message: "User not found".to_owned(),
        };
        assert_eq!(err.status(), Some(404));
        assert_eq!(handle_error(&err), "User not found");
        assert_eq!(
            ClientError::Transport {
                message: "offline".to_owned()
            }
            .status(),
            None
        );
    }
}
