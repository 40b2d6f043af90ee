use crate::headers::Headers;

/// Response-mutation capability the host hands to the evaluator.
pub trait ResponseWriter {
    /// Replaces any existing value of `name`.
    fn set_header(&mut self, name: &str, value: &str);

    /// Adds `value` to `name` without removing existing values.
    fn append_header(&mut self, name: &str, value: &str);

    fn set_status(&mut self, status: u16);
}

/// In-memory response, useful for hosts that build the real response later.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BufferedResponse {
    pub status: Option<u16>,
    pub headers: Headers,
}

impl BufferedResponse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

impl ResponseWriter for BufferedResponse {
    fn set_header(&mut self, name: &str, value: &str) {
        self.headers.retain(|key, _| !key.eq_ignore_ascii_case(name));
        self.headers.insert(name.to_string(), value.to_string());
    }

    fn append_header(&mut self, name: &str, value: &str) {
        match self
            .headers
            .iter_mut()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
        {
            Some((_, existing)) => {
                existing.push_str(", ");
                existing.push_str(value);
            }
            None => {
                self.headers.insert(name.to_string(), value.to_string());
            }
        }
    }

    fn set_status(&mut self, status: u16) {
        self.status = Some(status);
    }
}

#[cfg(test)]
#[path = "response_test.rs"]
mod response_test;
