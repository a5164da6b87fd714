use user_admin_api::{CreateUser, Error, UpdateUser, User, UserId};
use yew::prelude::*;

use crate::components::providers::ClientProvider;
use crate::components::{Button, Input};
use crate::services::Toaster;
use crate::utils::FetchData;
use crate::Title;

/// The form contents, keyed by field name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct Fields {
    name: String,
    email: String,
    password: String,
}

impl Fields {
    /// Resets the form, pre-filling it from `user` when one is given. The
    /// password is always left blank.
    fn reset(&mut self, user: Option<&User>) {
        *self = match user {
            Some(user) => Self {
                name: user.name.clone(),
                email: user.email.clone(),
                password: String::new(),
            },
            None => Self::default(),
        };
    }

    /// Returns an error message when the fields cannot be submitted.
    ///
    /// The password is only required when creating a new user; a blank
    /// password on an update keeps the existing one.
    fn validate(&self, creating: bool) -> Result<(), &'static str> {
        if self.name.is_empty() {
            return Err("Name is required.");
        }

        if self.email.is_empty() {
            return Err("Email is required.");
        }

        if creating && self.password.is_empty() {
            return Err("Password is required.");
        }

        Ok(())
    }
}

/// Maps a failed create/update to the message shown to the user.
///
/// The server answers 422 when the email is already taken or the password is
/// shorter than 8 characters; everything else is a generic failure.
fn submit_error_message(err: &Error) -> &'static str {
    match err {
        Error::BadStatusCode(status) if status.as_u16() == 422 => {
            "Email already taken or password shorter than 8 characters."
        }
        _ => "Something went wrong. Try again!",
    }
}

/// The user management page.
///
/// Holds the last fetched user list and the editing selection. The list is
/// never mutated locally; every successful mutation triggers a full re-fetch.
pub struct Users {
    users: FetchData<Vec<User>>,
    editing: Option<User>,
    fields: Fields,
}

impl Users {
    fn fetch_users(ctx: &Context<Self>) {
        let client = ClientProvider::get(ctx);

        ctx.link().send_future(async move {
            let users = match client.users().list().await {
                Ok(users) => FetchData::from(users),
                Err(err) => FetchData::from_err(err),
            };

            Message::UpdateUsers(users)
        });
    }
}

impl Component for Users {
    type Message = Message;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        Title::set("Users");

        Self::fetch_users(ctx);

        Self {
            users: FetchData::new(),
            editing: None,
            fields: Fields::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Message::UpdateUsers(users) => {
                self.users = users;
                true
            }
            Message::UpdateName(name) => {
                self.fields.name = name;
                true
            }
            Message::UpdateEmail(email) => {
                self.fields.email = email;
                true
            }
            Message::UpdatePassword(password) => {
                self.fields.password = password;
                true
            }
            Message::Submit => {
                if let Err(msg) = self.fields.validate(self.editing.is_none()) {
                    Toaster::error(msg);
                    return false;
                }

                let client = ClientProvider::get(ctx);
                let fields = self.fields.clone();

                match &self.editing {
                    Some(user) => {
                        let id = user.id;

                        ctx.link().send_future(async move {
                            let payload =
                                UpdateUser::new(fields.name, fields.email, fields.password);

                            let res = client.users().update(id, &payload).await;
                            Message::SubmitResult(res)
                        });
                    }
                    None => {
                        ctx.link().send_future(async move {
                            let payload = CreateUser {
                                name: fields.name,
                                email: fields.email,
                                password: fields.password,
                            };

                            let res = client.users().create(&payload).await;
                            Message::SubmitResult(res)
                        });
                    }
                }

                false
            }
            Message::SubmitResult(res) => match res {
                Ok(_) => {
                    if self.editing.is_some() {
                        Toaster::success("User updated.");
                    } else {
                        Toaster::success("User created.");
                    }

                    self.editing = None;
                    self.fields.reset(None);
                    Self::fetch_users(ctx);

                    true
                }
                Err(err) => {
                    log::error!("Failed to save user: {}", err);
                    Toaster::error(submit_error_message(&err));

                    false
                }
            },
            Message::StartEdit(user) => {
                self.fields.reset(Some(&user));
                self.editing = Some(user);
                true
            }
            Message::CancelEdit => {
                self.editing = None;
                self.fields.reset(None);
                true
            }
            Message::Delete(id) => {
                let client = ClientProvider::get(ctx);

                ctx.link().send_future(async move {
                    let res = client.users().delete(id).await;
                    Message::DeleteResult(res)
                });

                false
            }
            Message::DeleteResult(res) => {
                match res {
                    Ok(()) => {
                        Toaster::success("User deleted.");
                        Self::fetch_users(ctx);
                    }
                    Err(err) => {
                        log::error!("Failed to delete user: {}", err);
                        Toaster::error("Failed to delete user. Try again!");
                    }
                }

                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let on_name = ctx.link().callback(Message::UpdateName);
        let on_email = ctx.link().callback(Message::UpdateEmail);
        let on_password = ctx.link().callback(Message::UpdatePassword);

        let onsubmit = ctx.link().callback(|event: FocusEvent| {
            event.prevent_default();
            Message::Submit
        });

        let submit_label = match self.editing {
            Some(_) => "Update User",
            None => "Add User",
        };

        let cancel = match self.editing {
            Some(_) => {
                let onclick = ctx.link().callback(|_| Message::CancelEdit);

                html! {
                    <button type="button" class="button" {onclick}>{ "Cancel" }</button>
                }
            }
            None => html! {},
        };

        let table = self.users.render(|users| {
            let body = if users.is_empty() {
                html! {
                    <tr>
                        <td class="empty" colspan="4">{ "No users found." }</td>
                    </tr>
                }
            } else {
                users
                    .iter()
                    .map(|user| {
                        let id = user.id;
                        let delete = ctx.link().callback(move |_| Message::Delete(id));

                        let row_user = user.clone();
                        let edit = ctx
                            .link()
                            .callback(move |_| Message::StartEdit(row_user.clone()));

                        html! {
                            <tr>
                                <td>{ user.id.to_string() }</td>
                                <td>{ user.name.clone() }</td>
                                <td>{ user.email.clone() }</td>
                                <td class="actions">
                                    <Button title="Edit" onclick={edit}>{ "Edit" }</Button>
                                    <Button title="Delete" onclick={delete}>{ "Delete" }</Button>
                                </td>
                            </tr>
                        }
                    })
                    .collect::<Html>()
            };

            html! {
                <table class="table-striped">
                    <tr class="table-head">
                        <th>{ "ID" }</th>
                        <th>{ "Name" }</th>
                        <th>{ "Email" }</th>
                        <th>{ "Actions" }</th>
                    </tr>
                    { body }
                </table>
            }
        });

        html! {
            <div>
                <form {onsubmit}>
                    <Input
                        kind="text"
                        placeholder="Name"
                        value={self.fields.name.clone()}
                        oninput={on_name}
                        required=true
                    />
                    <Input
                        kind="email"
                        placeholder="Email"
                        value={self.fields.email.clone()}
                        oninput={on_email}
                        required=true
                    />
                    <Input
                        kind="password"
                        placeholder="Password"
                        value={self.fields.password.clone()}
                        oninput={on_password}
                        required={self.editing.is_none()}
                    />
                    <div class="form-buttons">
                        <button type="submit" class="button">{ submit_label }</button>
                        { cancel }
                    </div>
                </form>
                { table }
            </div>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        Title::clear();
    }
}

pub enum Message {
    UpdateUsers(FetchData<Vec<User>>),
    UpdateName(String),
    UpdateEmail(String),
    UpdatePassword(String),
    Submit,
    SubmitResult(Result<User, Error>),
    StartEdit(User),
    CancelEdit,
    Delete(UserId),
    DeleteResult(Result<(), Error>),
}

#[cfg(test)]
mod tests {
    use user_admin_api::{Error, StatusCode, User, UserId};

    use super::{submit_error_message, Fields};

    fn fields(name: &str, email: &str, password: &str) -> Fields {
        Fields {
            name: name.to_owned(),
            email: email.to_owned(),
            password: password.to_owned(),
        }
    }

    #[test]
    fn test_validate_create() {
        assert!(fields("Ann", "ann@x.com", "secret123").validate(true).is_ok());

        assert!(fields("", "ann@x.com", "secret123").validate(true).is_err());
        assert!(fields("Ann", "", "secret123").validate(true).is_err());
        assert!(fields("Ann", "ann@x.com", "").validate(true).is_err());
    }

    #[test]
    fn test_validate_edit_blank_password() {
        // A blank password keeps the existing one when editing.
        assert!(fields("Ann", "ann@x.com", "").validate(false).is_ok());

        assert!(fields("", "ann@x.com", "").validate(false).is_err());
        assert!(fields("Ann", "", "").validate(false).is_err());
    }

    #[test]
    fn test_reset_from_user() {
        let user = User {
            id: UserId(3),
            name: String::from("Ann"),
            email: String::from("ann@x.com"),
        };

        let mut fields = fields("old", "old@x.com", "oldpass");
        fields.reset(Some(&user));

        assert_eq!(fields.name, "Ann");
        assert_eq!(fields.email, "ann@x.com");
        assert!(fields.password.is_empty());

        fields.reset(None);
        assert_eq!(fields, Fields::default());
    }

    #[test]
    fn test_submit_error_message() {
        let conflict = Error::BadStatusCode(StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            submit_error_message(&conflict),
            "Email already taken or password shorter than 8 characters."
        );

        for status in [
            StatusCode::BAD_REQUEST,
            StatusCode::NOT_FOUND,
            StatusCode::INTERNAL_SERVER_ERROR,
        ] {
            let err = Error::BadStatusCode(status);
            assert_eq!(submit_error_message(&err), "Something went wrong. Try again!");
        }
    }
}
