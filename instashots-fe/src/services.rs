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

//! # Calls through to the instashots API
//!
//! One function per endpoint. The session (API location & access token) is handed in explicitly
//! rather than fished out of context: these run *after* an `.await`, by which time there may no
//! longer be a reactive owner to ask.

use gloo_net::http::Request;
use tracing::{debug, info};

use instashots_shared::{
    Post, PostsPage, User, UserId,
    api::{
        ClientError, FollowRsp, LikedPostsRsp, LoginReq, LoginRsp, PostsReq, SuggestedUsersRsp,
        UserRsp,
    },
};

use crate::{
    http::{decode_error, error_for_status, send_with_retry, transport_error},
    types::{Token, USER_AGENT},
};

/// The paged fetch: one page of the home feed
pub async fn get_posts(api: &str, token: Token, page: usize) -> Result<PostsPage, ClientError> {
    let query = serde_urlencoded::to_string(PostsReq { page }).map_err(|err| {
        ClientError::Encode {
            message: err.to_string(),
        }
    })?;
    let url = format!("{api}/api/v1/posts?{query}");
    let rsp = send_with_retry(api, token, |bearer| {
        Request::get(&url)
            .header("User-Agent", USER_AGENT)
            .header("Authorization", &format!("Bearer {bearer}"))
            .send()
    })
    .await?
    .json::<PostsPage>()
    .await
    .map_err(decode_error)?;
    debug!("Page {page}: loaded {} posts.", rsp.posts.len());
    Ok(rsp)
}

/// Follow `target` if we don't already, un-follow them if we do
///
/// Hands back the HTTP status along with the body; the caller decides what counts as success.
pub async fn follow_user(
    api: &str,
    token: Token,
    target: &UserId,
) -> Result<(u16, FollowRsp), ClientError> {
    let url = format!("{api}/api/v1/users/{target}/follow");
    let rsp = send_with_retry(api, token, |bearer| {
        Request::patch(&url)
            .header("User-Agent", USER_AGENT)
            .header("Authorization", &format!("Bearer {bearer}"))
            .send()
    })
    .await?;
    let status = rsp.status();
    let body = rsp.json::<FollowRsp>().await.map_err(decode_error)?;
    Ok((status, body))
}

pub async fn get_suggested_users(api: &str, token: Token) -> Result<Vec<User>, ClientError> {
    let url = format!("{api}/api/v1/users/suggested");
    Ok(send_with_retry(api, token, |bearer| {
        Request::get(&url)
            .header("User-Agent", USER_AGENT)
            .header("Authorization", &format!("Bearer {bearer}"))
            .send()
    })
    .await?
    .json::<SuggestedUsersRsp>()
    .await
    .map_err(decode_error)?
    .random_users)
}

pub async fn get_profile(api: &str, token: Token, username: &str) -> Result<User, ClientError> {
    let url = format!("{api}/api/v1/users/profile/{username}");
    Ok(send_with_retry(api, token, |bearer| {
        Request::get(&url)
            .header("User-Agent", USER_AGENT)
            .header("Authorization", &format!("Bearer {bearer}"))
            .send()
    })
    .await?
    .json::<UserRsp>()
    .await
    .map_err(decode_error)?
    .user)
}

pub async fn get_liked_posts(
    api: &str,
    token: Token,
    username: &str,
) -> Result<Vec<Post>, ClientError> {
    let url = format!("{api}/api/v1/posts/liked/{username}");
    Ok(send_with_retry(api, token, |bearer| {
        Request::get(&url)
            .header("User-Agent", USER_AGENT)
            .header("Authorization", &format!("Bearer {bearer}"))
            .send()
    })
    .await?
    .json::<LikedPostsRsp>()
    .await
    .map_err(decode_error)?
    .posts)
}

/// Who does our access token belong to?
pub async fn current_user(api: &str, token: Token) -> Result<User, ClientError> {
    let url = format!("{api}/api/v1/auth/user");
    Ok(send_with_retry(api, token, |bearer| {
        Request::get(&url)
            .header("User-Agent", USER_AGENT)
            .header("Authorization", &format!("Bearer {bearer}"))
            .send()
    })
    .await?
    .json::<UserRsp>()
    .await
    .map_err(decode_error)?
    .user)
}

/// Exchange credentials for an access token (& a refresh cookie)
pub async fn login(
    api: &str,
    username: impl Into<String>,
    password: impl Into<String>,
) -> Result<String, ClientError> {
    let rsp = Request::post(&format!("{api}/api/v1/auth/login"))
        .header("User-Agent", USER_AGENT)
        .credentials(web_sys::RequestCredentials::Include)
        .json(&LoginReq {
            username: username.into(),
            password: password.into(),
        })
        .map_err(|err| ClientError::Encode {
            message: err.to_string(),
        })?
        .send()
        .await
        .map_err(transport_error)?;
    let rsp = error_for_status(rsp)
        .await?
        .json::<LoginRsp>()
        .await
        .map_err(decode_error)?;
    info!("Login successful");
    Ok(rsp.access_token)
}

/// Let the API know we're done with our refresh cookie
pub async fn logout(api: &str, token: Token) -> Result<(), ClientError> {
    let url = format!("{api}/api/v1/auth/logout");
    send_with_retry(api, token, |bearer| {
        Request::post(&url)
            .header("User-Agent", USER_AGENT)
            .header("Authorization", &format!("Bearer {bearer}"))
            .credentials(web_sys::RequestCredentials::Include)
            .send()
    })
    .await?;
    Ok(())
}
