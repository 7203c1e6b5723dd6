//! Raw message value handed to a delivery backend.

/// An already-serialized email message.
///
/// The caller (usually a mail-sending framework) builds the full MIME
/// document itself; this type only carries that text plus the two envelope
/// fields a framework may or may not expose. A message that carries no
/// explicit recipients or envelope sender simply leaves those fields
/// `None`, and the remote service derives them from the MIME headers.
///
/// # Examples
///
/// ```
/// use ses_relay::RawMessage;
///
/// let message = RawMessage::new("Subject: Hi\r\n\r\nBody")
///     .destinations(["a@example.com", "b@example.com"])
///     .sender("bounces@example.com");
///
/// assert_eq!(message.destinations.as_ref().map(|d| d.len()), Some(2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawMessage {
    /// Complete MIME-formatted message text.
    pub data: String,
    /// Explicit envelope recipients. `None` when the message does not
    /// expose a recipient list.
    pub destinations: Option<Vec<String>>,
    /// Explicit envelope sender (bounce/origin address, distinct from the
    /// `From` header). `None` when the message does not expose one.
    pub sender: Option<String>,
}

impl RawMessage {
    /// Create a message from its serialized MIME text.
    pub fn new(data: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            destinations: None,
            sender: None,
        }
    }

    /// Replace the explicit recipient list.
    pub fn destinations<I, S>(mut self, addrs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.destinations = Some(addrs.into_iter().map(Into::into).collect());
        self
    }

    /// Add a single explicit recipient.
    ///
    /// Can be called multiple times to add multiple recipients.
    pub fn destination(mut self, addr: impl Into<String>) -> Self {
        self.destinations
            .get_or_insert_with(Vec::new)
            .push(addr.into());
        self
    }

    /// Set the explicit envelope sender.
    pub fn sender(mut self, addr: impl Into<String>) -> Self {
        self.sender = Some(addr.into());
        self
    }
}

// From &str / String - serialized text only, no envelope fields
impl From<&str> for RawMessage {
    fn from(data: &str) -> Self {
        Self::new(data)
    }
}

impl From<String> for RawMessage {
    fn from(data: String) -> Self {
        Self::new(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_has_no_envelope_fields() {
        let message = RawMessage::new("Subject: Hi\r\n\r\nBody");
        assert_eq!(message.data, "Subject: Hi\r\n\r\nBody");
        assert_eq!(message.destinations, None);
        assert_eq!(message.sender, None);
    }

    #[test]
    fn test_builder() {
        let message = RawMessage::new("raw")
            .destinations(["a@x.com", "b@x.com"])
            .sender("c@x.com");

        assert_eq!(
            message.destinations,
            Some(vec!["a@x.com".to_string(), "b@x.com".to_string()])
        );
        assert_eq!(message.sender, Some("c@x.com".to_string()));
    }

    #[test]
    fn test_single_destinations_accumulate() {
        let message = RawMessage::new("raw")
            .destination("one@x.com")
            .destination("two@x.com");

        assert_eq!(
            message.destinations,
            Some(vec!["one@x.com".to_string(), "two@x.com".to_string()])
        );
    }

    #[test]
    fn test_empty_destination_list_is_not_absence() {
        // An explicit empty list is still "exposed", just empty.
        let message = RawMessage::new("raw").destinations(Vec::<String>::new());
        assert_eq!(message.destinations, Some(vec![]));
    }

    #[test]
    fn test_from_str() {
        let message: RawMessage = "Subject: Hi\r\n\r\nBody".into();
        assert_eq!(message.data, "Subject: Hi\r\n\r\nBody");
        assert_eq!(message.destinations, None);
    }
}
