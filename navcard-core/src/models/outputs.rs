use serde::Serialize;

/// One computed output. `None` means "cannot compute".
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OutputValue {
    pub key: &'static str,
    pub value: Option<f64>,
}

/// The results of one formula, in the order of its output fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Outputs {
    values: Vec<OutputValue>,
}

impl Outputs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a computed value.
    pub fn with(
        mut self,
        key: &'static str,
        value: f64,
    ) -> Self {
        self.values.push(OutputValue {
            key,
            value: Some(value),
        });
        self
    }

    /// Appends a value that may be missing.
    pub fn with_optional(
        mut self,
        key: &'static str,
        value: Option<f64>,
    ) -> Self {
        self.values.push(OutputValue { key, value });
        self
    }

    /// Returns the value for `key`, or `None` when it is null or not present.
    pub fn get(
        &self,
        key: &str,
    ) -> Option<f64> {
        self.values
            .iter()
            .find(|output| output.key == key)
            .and_then(|output| output.value)
    }

    /// Returns `true` if an entry exists for `key`, even a null one.
    pub fn contains(
        &self,
        key: &str,
    ) -> bool {
        self.values.iter().any(|output| output.key == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &OutputValue> {
        self.values.iter()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<'a> IntoIterator for &'a Outputs {
    type Item = &'a OutputValue;
    type IntoIter = std::slice::Iter<'a, OutputValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn builder_preserves_insertion_order() {
        let outputs = Outputs::new()
            .with("inboundNM", 13.0)
            .with("outboundNM", 17.0);

        let keys: Vec<_> = outputs.iter().map(|o| o.key).collect();
        assert_eq!(keys, vec!["inboundNM", "outboundNM"]);
    }

    #[test]
    fn get_treats_null_and_missing_alike() {
        let outputs = Outputs::new().with_optional("vviFpm", None);

        assert_eq!(outputs.get("vviFpm"), None);
        assert_eq!(outputs.get("missing"), None);
        assert!(outputs.contains("vviFpm"));
        assert!(!outputs.contains("missing"));
    }

    #[test]
    fn get_returns_value() {
        let outputs = Outputs::new().with("rNM", 0.5);

        assert_eq!(outputs.get("rNM"), Some(0.5));
        assert_eq!(outputs.len(), 1);
        assert!(!outputs.is_empty());
    }
}
