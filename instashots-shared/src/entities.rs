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

//! # instashots entities
//!
//! Posts & users, as the instashots API hands them to us. The API is backed by a document store,
//! so its field names follow JavaScript conventions (`camelCase`, with identifiers in `_id`); we
//! rename on the way in.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use snafu::{Backtrace, prelude::*};
use url::Url;

use std::{fmt::Display, ops::Deref, str::FromStr};

type StdResult<T, E> = std::result::Result<T, E>;

////////////////////////////////////////////////////////////////////////////////////////////////////
//                                       module Error type                                        //
////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("An empty string is not a valid {typ}"))]
    EmptyId {
        typ: &'static str,
        backtrace: Backtrace,
    },
    #[snafu(display("Failed to parse {text} as an URL: {source}"))]
    Url {
        text: String,
        source: url::ParseError,
        backtrace: Backtrace,
    },
}

type Result<T> = std::result::Result<T, Error>;

fn mk_serde_de_err<'de, D: serde::Deserializer<'de>>(err: impl std::error::Error) -> D::Error {
    <D::Error as serde::de::Error>::custom(format!("{:?}", err))
}

////////////////////////////////////////////////////////////////////////////////////////////////////
//                                          Identifiers                                           //
////////////////////////////////////////////////////////////////////////////////////////////////////

/// Declare a type to be used as an opaque identifier for some other sort of entity.
///
/// The API assigns identifiers server-side & we never look inside them; all we need is to compare,
/// hash & print them. That said, I couldn't bring myself to use `String` for post & user
/// identifiers alike: handing a [UserId] to something expecting a [PostId] should be a compile-time
/// error.
///
/// The generated newtype refuses to wrap the empty string, both at construction & when
/// deserializing.
macro_rules! define_id {
    ($type_name:ident) => {
        #[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
        #[serde(transparent)]
        pub struct $type_name(String);
        impl $type_name {
            pub fn new(s: &str) -> Result<$type_name> {
                ensure!(
                    !s.is_empty(),
                    EmptyIdSnafu {
                        typ: stringify!($type_name)
                    }
                );
                Ok($type_name(s.to_owned()))
            }
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }
        impl Display for $type_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
        impl FromStr for $type_name {
            type Err = Error;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                $type_name::new(s)
            }
        }
        impl AsRef<str> for $type_name {
            fn as_ref(&self) -> &str {
                self.deref()
            }
        }
        impl Deref for $type_name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }
        impl From<$type_name> for String {
            fn from(value: $type_name) -> Self {
                value.0
            }
        }
        // Implement `Deserialize` by hand to fail on an empty identifier
        impl<'de> Deserialize<'de> for $type_name {
            fn deserialize<D>(deserializer: D) -> StdResult<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                let s = <String as serde::Deserialize>::deserialize(deserializer)?;
                $type_name::new(&s).map_err(mk_serde_de_err::<'de, D>)
            }
        }
    };
}

define_id!(UserId);
define_id!(PostId);

////////////////////////////////////////////////////////////////////////////////////////////////////
//                                            StorUrl                                             //
////////////////////////////////////////////////////////////////////////////////////////////////////

/// Newtype to work around Rust's orphaned traits rule
///
/// Media references & profile pictures are URLs pointing at wherever the API stashed the upload;
/// refusing to deserialize anything else means the view code never has to wonder.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct StorUrl(Url);

// Implement `Deserialize` by hand to fail if the serialized value isn't a legit URL
impl<'de> Deserialize<'de> for StorUrl {
    fn deserialize<D>(deserializer: D) -> StdResult<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        StorUrl::try_from(s).map_err(mk_serde_de_err::<'de, D>)
    }
}

impl Deref for StorUrl {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

impl AsRef<str> for StorUrl {
    fn as_ref(&self) -> &str {
        self.deref()
    }
}

impl From<Url> for StorUrl {
    fn from(value: Url) -> Self {
        Self(value)
    }
}

impl TryFrom<String> for StorUrl {
    type Error = Error;

    fn try_from(s: String) -> std::result::Result<Self, Self::Error> {
        Ok(StorUrl(Url::parse(&s).context(UrlSnafu { text: s })?))
    }
}

impl TryFrom<&str> for StorUrl {
    type Error = Error;

    fn try_from(s: &str) -> std::result::Result<Self, Self::Error> {
        StorUrl::try_from(s.to_owned())
    }
}

impl Display for StorUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
//                                              Post                                              //
////////////////////////////////////////////////////////////////////////////////////////////////////

/// Represents an instashots post
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[serde(rename = "_id")]
    id: PostId,
    #[serde(default)]
    caption: String,
    #[serde(default)]
    media: Vec<StorUrl>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    user: Option<UserId>,
    #[serde(default)]
    likes: Vec<UserId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    created_at: Option<DateTime<Utc>>,
}

impl Post {
    pub fn new(id: &PostId, caption: &str, media: &[StorUrl]) -> Post {
        Post {
            id: id.clone(),
            caption: caption.to_owned(),
            media: media.to_vec(),
            user: None,
            likes: Vec::new(),
            created_at: None,
        }
    }
    pub fn with_author(mut self, user: &UserId) -> Post {
        self.user = Some(user.clone());
        self
    }
    pub fn author(&self) -> Option<&UserId> {
        self.user.as_ref()
    }
    pub fn caption(&self) -> &str {
        &self.caption
    }
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }
    pub fn id(&self) -> &PostId {
        &self.id
    }
    /// The post's cover image, if it has any media at all
    pub fn cover(&self) -> Option<&StorUrl> {
        self.media.first()
    }
    pub fn likes(&self) -> impl Iterator<Item = &UserId> {
        self.likes.iter()
    }
    pub fn media(&self) -> impl Iterator<Item = &StorUrl> {
        self.media.iter()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
//                                              User                                              //
////////////////////////////////////////////////////////////////////////////////////////////////////

/// An instashots user, as seen by other users
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    id: UserId,
    username: String,
    #[serde(default)]
    fullname: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    profile_picture: Option<StorUrl>,
    #[serde(default)]
    following: Vec<UserId>,
}

impl User {
    pub fn new(id: &UserId, username: &str, fullname: &str) -> User {
        User {
            id: id.clone(),
            username: username.to_owned(),
            fullname: fullname.to_owned(),
            profile_picture: None,
            following: Vec::new(),
        }
    }
    pub fn follows(&self, other: &UserId) -> bool {
        self.following.contains(other)
    }
    pub fn following(&self) -> impl Iterator<Item = &UserId> {
        self.following.iter()
    }
    pub fn fullname(&self) -> &str {
        &self.fullname
    }
    pub fn id(&self) -> &UserId {
        &self.id
    }
    /// The character to show in place of a missing profile picture
    pub fn initial(&self) -> Option<char> {
        self.username.chars().next()
    }
    /// Overwrite every field present in `patch`; leave the rest alone
    pub fn merge(&mut self, patch: UserPatch) {
        if let Some(username) = patch.username {
            self.username = username;
        }
        if let Some(fullname) = patch.fullname {
            self.fullname = fullname;
        }
        if let Some(profile_picture) = patch.profile_picture {
            self.profile_picture = Some(profile_picture);
        }
        if let Some(following) = patch.following {
            self.following = following;
        }
    }
    pub fn profile_picture(&self) -> Option<&StorUrl> {
        self.profile_picture.as_ref()
    }
    pub fn username(&self) -> &str {
        &self.username
    }
}

/// A partial [User]
///
/// Some endpoints (following or un-following someone, for instance) only send back the fields that
/// changed. Identity is deliberately absent: a patch can't turn one user into another.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fullname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<StorUrl>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub following: Option<Vec<UserId>>,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn ids() {
        assert!(PostId::new("").is_err());
        assert!(UserId::new("").is_err());
        assert_eq!(PostId::new("6650c1e2").unwrap().as_str(), "6650c1e2");
        assert!(serde_json::from_str::<PostId>("\"\"").is_err());
    }

    #[test]
    fn post_from_wire() {
        let post: Post = serde_json::from_str(
            r#"{
                "_id": "p1",
                "caption": "sunset",
                "media": ["https://cdn.example.com/a.jpg", "https://cdn.example.com/b.jpg"],
                "user": "u1",
                "likes": ["u2", "u3"],
                "createdAt": "2025-05-20T10:00:00Z",
                "comments": []
            }"#,
        )
        .unwrap();
        assert_eq!(post.id().as_str(), "p1");
        assert_eq!(post.caption(), "sunset");
        assert_eq!(
            post.cover().map(|u| u.to_string()),
            Some("https://cdn.example.com/a.jpg".to_owned())
        );
        assert_eq!(post.media().count(), 2);
        assert_eq!(post.likes().count(), 2);
        assert_eq!(post.author().map(|u| u.as_str()), Some("u1"));
        assert!(post.created_at().is_some());

        // Media has to be made of URLs
        assert!(serde_json::from_str::<Post>(r#"{"_id": "p1", "media": ["not a url"]}"#).is_err());
    }

    #[test]
    fn merge_patch() {
        let mut user: User = serde_json::from_str(
            r#"{"_id": "u1", "username": "joseph", "fullname": "Joseph", "following": ["u2"]}"#,
        )
        .unwrap();
        assert!(user.follows(&UserId::new("u2").unwrap()));
        assert_eq!(user.initial(), Some('j'));

        let patch: UserPatch = serde_json::from_str(r#"{"following": ["u2", "u3"]}"#).unwrap();
        user.merge(patch);
        assert!(user.follows(&UserId::new("u3").unwrap()));
        assert_eq!(user.username(), "joseph");
        assert_eq!(user.fullname(), "Joseph");
        assert_eq!(user.id().as_str(), "u1");

        user.merge(UserPatch {
            profile_picture: Some(StorUrl::try_from("https://cdn.example.com/me.png").unwrap()),
            ..Default::default()
        });
        assert!(user.profile_picture().is_some());
        assert_eq!(user.following().count(), 2);
    }
}
