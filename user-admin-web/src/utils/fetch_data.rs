use yew::{html, Html};

use crate::components::{Error, Loader};

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A wrapper around an `Option<Result<T>>`.
///
/// Renders a [`Loader`] while uninitialized, an [`Error`] when the fetch
/// failed and hands the value to a closure otherwise.
#[derive(Debug)]
pub struct FetchData<T> {
    inner: Option<Result<T, BoxError>>,
}

impl<T> FetchData<T> {
    /// Creates a new `FetchData` with an uninitialized state.
    pub fn new() -> Self {
        Self { inner: None }
    }

    /// Creates a new `FetchData` from a failed fetch.
    pub fn from_err<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self {
            inner: Some(Err(Box::new(error))),
        }
    }

    pub fn render<F>(&self, f: F) -> Html
    where
        F: FnOnce(&T) -> Html,
    {
        match &self.inner {
            Some(Ok(value)) => f(value),
            Some(Err(err)) => html! {
                <Error error={err.to_string()} />
            },
            None => html! {
                <Loader />
            },
        }
    }
}

impl<T> Default for FetchData<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<T> for FetchData<T> {
    fn from(value: T) -> Self {
        Self {
            inner: Some(Ok(value)),
        }
    }
}
