use serde::Serialize;

/// Describes one labeled input on a formula card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InputField {
    /// Key into the input store. Keys are shared across formulas.
    pub key: &'static str,
    pub label: &'static str,

    /// Text placed in the store when it is created or cleared.
    pub default: Option<&'static str>,

    /// Advisory only; a missing value still falls back to zero or null.
    pub optional: bool,
}

impl InputField {
    pub const fn new(
        key: &'static str,
        label: &'static str,
    ) -> Self {
        Self {
            key,
            label,
            default: None,
            optional: false,
        }
    }

    pub const fn with_default(
        mut self,
        default: &'static str,
    ) -> Self {
        self.default = Some(default);
        self
    }

    pub const fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// The text this field starts with: its default, or the empty string.
    pub fn initial_text(&self) -> &'static str {
        self.default.unwrap_or("")
    }
}

/// Describes one labeled output on a formula card. Carries no value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OutputField {
    pub key: &'static str,
    pub label: &'static str,
}

impl OutputField {
    pub const fn new(
        key: &'static str,
        label: &'static str,
    ) -> Self {
        Self { key, label }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn new_input_field_is_required_without_default() {
        let field = InputField::new("tasKt", "TAS (kt)");

        assert_eq!(field.default, None);
        assert!(!field.optional);
        assert_eq!(field.initial_text(), "");
    }

    #[test]
    fn builder_methods_set_default_and_optional() {
        let field = InputField::new("bankDeg", "Bank (°)")
            .with_default("30")
            .optional();

        assert_eq!(field.default, Some("30"));
        assert!(field.optional);
        assert_eq!(field.initial_text(), "30");
    }
}
