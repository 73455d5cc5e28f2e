/// Output buffer for rendered names with an optional byte capacity.
///
/// Appends past the capacity are cut at the last character boundary that
/// still fits, so the text is always valid UTF-8 and never longer than the
/// capacity. Once an append has been cut the buffer takes nothing more, so
/// the text stays a prefix of the untruncated name. Truncation is silent.
#[derive(Debug, Clone, Default)]
pub struct NameBuffer {
    text: String,
    capacity: Option<usize>,
    truncated: bool,
}

impl NameBuffer {
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            text: String::with_capacity(capacity),
            capacity: Some(capacity),
            truncated: false,
        }
    }

    pub fn new(capacity: Option<usize>) -> Self {
        match capacity {
            Some(cap) => Self::with_capacity(cap),
            None => Self::unbounded(),
        }
    }

    pub fn push_str(&mut self, s: &str) {
        if self.truncated {
            return;
        }
        let Some(cap) = self.capacity else {
            self.text.push_str(s);
            return;
        };
        let room = cap.saturating_sub(self.text.len());
        if s.len() <= room {
            self.text.push_str(s);
            return;
        }
        let mut end = room;
        while !s.is_char_boundary(end) {
            end -= 1;
        }
        self.text.push_str(&s[..end]);
        self.truncated = true;
    }

    /// True once the buffer takes no more text.
    pub fn is_full(&self) -> bool {
        self.truncated || self.capacity.is_some_and(|cap| self.text.len() >= cap)
    }

    /// True if any append was cut short.
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn into_string(self) -> String {
        self.text
    }
}
