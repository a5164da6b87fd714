use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Client, Envelope, Error, Result};

/// The server-assigned identifier of a [`User`]. Immutable once assigned.
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[repr(transparent)]
#[serde(transparent)]
pub struct UserId(pub u64);

impl Display for UserId {
    #[inline]
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl AsRef<u64> for UserId {
    #[inline]
    fn as_ref(&self) -> &u64 {
        &self.0
    }
}

impl PartialEq<u64> for UserId {
    #[inline]
    fn eq(&self, other: &u64) -> bool {
        self.0 == *other
    }
}

impl From<u64> for UserId {
    #[inline]
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl FromStr for UserId {
    type Err = <u64 as FromStr>::Err;

    #[inline]
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self(s.parse::<u64>()?))
    }
}

/// A user record as the server returns it. The password is write-only and
/// never part of a read payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub id: UserId,
    pub name: String,
    pub email: String,
}

/// The payload for creating a new [`User`]. All fields are required.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// The payload for updating an existing [`User`].
///
/// A `None` password is stripped from the payload entirely, telling the
/// server to keep the existing password.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateUser {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl UpdateUser {
    /// Creates a new `UpdateUser`. A blank `password` means "keep the
    /// existing password" and is omitted from the payload.
    pub fn new(name: String, email: String, password: String) -> Self {
        Self {
            name,
            email,
            password: if password.is_empty() {
                None
            } else {
                Some(password)
            },
        }
    }
}

pub struct UsersClient<'a> {
    client: &'a Client,
}

impl<'a> UsersClient<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Returns all users in the order the server stores them.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list(&self) -> Result<Vec<User>> {
        log::debug!("GET {}", self.client.base_url());

        let req = self.client.request().build();

        let resp = self.client.send(req).await?;
        if !resp.is_success() {
            return Err(Error::BadStatusCode(resp.status()));
        }

        let users: Envelope<Vec<User>> = resp.json().await?;
        Ok(users.into_inner())
    }

    /// Creates a new [`User`], returning the created record with its
    /// server-assigned id.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails. The server answers 422 when
    /// the email is already taken or the password is rejected.
    pub async fn create(&self, user: &CreateUser) -> Result<User> {
        log::debug!("POST {}", self.client.base_url());

        let req = self.client.request().post().body(user).build();

        let resp = self.client.send(req).await?;
        if !resp.is_success() {
            return Err(Error::BadStatusCode(resp.status()));
        }

        let user: Envelope<User> = resp.json().await?;
        Ok(user.into_inner())
    }

    /// Updates the [`User`] with the given `id`, returning the updated
    /// record.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails. The server answers 422 when
    /// the email is already taken or the password is rejected.
    pub async fn update(&self, id: UserId, user: &UpdateUser) -> Result<User> {
        log::debug!("PUT {}/{}", self.client.base_url(), id);

        let req = self
            .client
            .request()
            .put()
            .uri(&format!("/{}", id))
            .body(user)
            .build();

        let resp = self.client.send(req).await?;
        if !resp.is_success() {
            return Err(Error::BadStatusCode(resp.status()));
        }

        let user: Envelope<User> = resp.json().await?;
        Ok(user.into_inner())
    }

    /// Deletes the [`User`] with the given `id`. The response body is
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn delete(&self, id: UserId) -> Result<()> {
        log::debug!("DELETE {}/{}", self.client.base_url(), id);

        let req = self.client.request().delete().uri(&format!("/{}", id)).build();

        let resp = self.client.send(req).await?;
        if !resp.is_success() {
            return Err(Error::BadStatusCode(resp.status()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use serde_test::{assert_tokens, Token};

    use super::{CreateUser, UpdateUser, User, UserId};
    use crate::Envelope;

    #[test]
    fn test_user_id_tokens() {
        assert_tokens(&UserId(7), &[Token::U64(7)]);
    }

    #[test]
    fn test_create_user_fields() {
        let user = CreateUser {
            name: String::from("Ann"),
            email: String::from("ann@x.com"),
            password: String::from("secret123"),
        };

        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "Ann",
                "email": "ann@x.com",
                "password": "secret123",
            })
        );
    }

    #[test]
    fn test_update_user_strips_blank_password() {
        let user = UpdateUser::new(
            String::from("Ann"),
            String::from("ann@x.com"),
            String::new(),
        );

        let value = serde_json::to_value(&user).unwrap();
        assert!(value.get("password").is_none());
        assert_eq!(
            value,
            json!({
                "name": "Ann",
                "email": "ann@x.com",
            })
        );
    }

    #[test]
    fn test_update_user_keeps_password() {
        let user = UpdateUser::new(
            String::from("Ann"),
            String::from("ann@x.com"),
            String::from("secret123"),
        );

        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "Ann",
                "email": "ann@x.com",
                "password": "secret123",
            })
        );
    }

    #[test]
    fn test_user_list_envelope() {
        let body = r#"{"data":[{"id":1,"name":"Ann","email":"ann@x.com"}]}"#;

        let users: Envelope<Vec<User>> = serde_json::from_str(body).unwrap();
        let users = users.into_inner();

        assert_eq!(users.len(), 1);
        assert_eq!(users[0].id, 1);
        assert_eq!(users[0].name, "Ann");
        assert_eq!(users[0].email, "ann@x.com");
    }

    #[test]
    fn test_user_without_id() {
        let user: User = serde_json::from_str(r#"{"name":"Ann","email":"ann@x.com"}"#).unwrap();

        assert_eq!(user.id, UserId::default());
    }
}
