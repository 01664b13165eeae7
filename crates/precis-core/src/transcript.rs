use crate::Message;

/// An ordered conversation transcript, oldest message first.
///
/// The transcript is owned by the caller and mutated in place by reducers.
/// Messages are never reordered; the only structural mutation is
/// [`collapse_prefix`](Transcript::collapse_prefix), which replaces a
/// contiguous prefix with a single message.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message at the end of the transcript.
    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Message> {
        self.messages.iter()
    }

    /// Remove the first `remove_count` messages and insert `summary` at the
    /// front, as one operation.
    ///
    /// `remove_count` is clamped to the current length. There is no
    /// intermediate state in which the prefix is gone but the summary is not
    /// yet present.
    pub fn collapse_prefix(&mut self, remove_count: usize, summary: Message) {
        let remove_count = remove_count.min(self.messages.len());
        let mut collapsed = Vec::with_capacity(self.messages.len() - remove_count + 1);
        collapsed.push(summary);
        collapsed.extend_from_slice(&self.messages[remove_count..]);
        self.messages = collapsed;
    }
}

impl From<Vec<Message>> for Transcript {
    fn from(messages: Vec<Message>) -> Self {
        Self { messages }
    }
}

impl<'a> IntoIterator for &'a Transcript {
    type Item = &'a Message;
    type IntoIter = std::slice::Iter<'a, Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}
