use indexmap::IndexMap;
use sha2::{Digest, Sha256};
use url::form_urlencoded;

/// An ordered, multi-valued form submission body
///
/// Keys keep the position of their first insertion; values under one key
/// keep insertion order. Encoding is therefore deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormPayload {
    fields: IndexMap<String, Vec<String>>,
}

impl FormPayload {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key` to exactly one value, replacing any earlier values
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(key.into(), vec![value.into()]);
    }

    /// Appends one more occurrence of `key`
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.entry(key.into()).or_default().push(value.into());
    }

    /// First value of `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .get(key)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Every value of `key`, in insertion order
    pub fn get_all(&self, key: &str) -> &[String] {
        self.fields.get(key).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Every `(key, value)` occurrence in encoding order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().flat_map(|(key, values)| {
            values
                .iter()
                .map(move |value| (key.as_str(), value.as_str()))
        })
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// `application/x-www-form-urlencoded` body
    pub fn encode(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in self.iter() {
            serializer.append_pair(key, value);
        }
        serializer.finish()
    }

    /// Parses an encoded body back into a payload
    pub fn decode(body: &str) -> Self {
        let mut payload = Self::new();
        for (key, value) in form_urlencoded::parse(body.as_bytes()) {
            payload.add(key, value);
        }
        payload
    }

    /// Hex SHA-256 of the encoded body
    pub fn fingerprint(&self) -> String {
        hex::encode(Sha256::digest(self.encode().as_bytes()))
    }
}
