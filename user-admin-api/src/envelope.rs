use serde::{Deserialize, Serialize};

/// The `{ "data": ... }` wrapper the server puts around every payload.
///
/// # Examples
///
/// ```
/// # use user_admin_api::Envelope;
/// let envelope: Envelope<Vec<u64>> = serde_json::from_str(r#"{"data":[1,2,3]}"#).unwrap();
///
/// assert_eq!(envelope.into_inner(), vec![1, 2, 3]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope<T> {
    data: T,
}

impl<T> Envelope<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }

    /// Consumes the `Envelope`, returning the wrapped payload.
    #[inline]
    pub fn into_inner(self) -> T {
        self.data
    }
}

impl<T> AsRef<T> for Envelope<T> {
    #[inline]
    fn as_ref(&self) -> &T {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use serde_test::{assert_tokens, Token};

    use super::Envelope;

    #[test]
    fn test_envelope_tokens() {
        let envelope = Envelope::new(3u8);

        assert_tokens(
            &envelope,
            &[
                Token::Struct {
                    name: "Envelope",
                    len: 1,
                },
                Token::Str("data"),
                Token::U8(3),
                Token::StructEnd,
            ],
        );
    }

    #[test]
    fn test_envelope_empty_list() {
        let envelope: Envelope<Vec<u64>> = serde_json::from_str(r#"{"data":[]}"#).unwrap();

        assert!(envelope.into_inner().is_empty());
    }
}
