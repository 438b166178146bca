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

//! # instashots-fe HTTP utilities

use gloo_net::http::{Request, Response};
use leptos::prelude::*;
use tracing::debug;

use instashots_shared::api::{ClientError, ErrorRsp, LoginRsp};

use crate::types::{Token, USER_AGENT};

pub fn transport_error(err: gloo_net::Error) -> ClientError {
    ClientError::Transport {
        message: err.to_string(),
    }
}

pub fn decode_error(err: gloo_net::Error) -> ClientError {
    ClientError::Decode {
        message: err.to_string(),
    }
}

/// Map non-2xx responses to a [ClientError], preferring the API's own explanation if it sent one
pub async fn error_for_status(rsp: Response) -> Result<Response, ClientError> {
    let status = rsp.status();
    if (200..300).contains(&status) {
        Ok(rsp)
    } else if status == 401 {
        Err(ClientError::NotAuthorized)
    } else {
        let message = match rsp.json::<ErrorRsp>().await {
            Ok(body) => body.message,
            Err(_) => rsp.status_text(),
        };
        Err(ClientError::Status { status, message })
    }
}

/// Trade the refresh cookie for a new access token
pub async fn refresh_token(api: &str, token: Token) -> Result<(), ClientError> {
    let rsp = Request::post(&format!("{api}/api/v1/auth/refresh"))
        .credentials(web_sys::RequestCredentials::Include)
        .header("User-Agent", USER_AGENT)
        .send()
        .await
        .map_err(transport_error)?;
    let rsp = error_for_status(rsp)
        .await?
        .json::<LoginRsp>()
        .await
        .map_err(decode_error)?;
    token.set(Some(rsp.access_token));
    Ok(())
}

/// Attempt a request; if the request is denied with 401 Unauthorized, refresh our access token &
/// re-try
///
/// `make_request` is handed the access token to present, & may be called twice.
pub async fn send_with_retry<F, Fut>(
    api: &str,
    token: Token,
    make_request: F,
) -> Result<Response, ClientError>
where
    F: Fn(String) -> Fut,
    Fut: Future<Output = Result<Response, gloo_net::Error>>,
{
    let rsp = make_request(token.get_untracked().unwrap_or_default())
        .await
        .map_err(transport_error)?;
    if rsp.status() != 401 {
        return error_for_status(rsp).await;
    }

    // Huh. Seems prolix.
    debug!("Access token rejected; refreshing.");
    refresh_token(api, token).await?;
    let rsp = make_request(token.get_untracked().unwrap_or_default())
        .await
        .map_err(transport_error)?;
    error_for_status(rsp).await
}
