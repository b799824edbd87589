// Edit model behind a numeric form input.
// The canonical value is owned by the form; the display string is transient and switches
// between the formatted form (unfocused) and a plain edit form (focused).
use crate::brazilian_format::{self, SeparatorPolicy};
use crate::models::NumberKind;
use tracing::trace;

#[derive(Debug, Clone, PartialEq)]
pub struct NumericField {
    kind: NumberKind,
    policy: SeparatorPolicy,
    value: f64,
    display: String,
    focused: bool,
}

impl NumericField {
    pub fn new(kind: NumberKind, value: f64) -> Self {
        Self::with_policy(kind, value, SeparatorPolicy::default())
    }

    pub fn with_policy(kind: NumberKind, value: f64, policy: SeparatorPolicy) -> Self {
        NumericField {
            kind,
            policy,
            value,
            display: brazilian_format::format(value, kind),
            focused: false,
        }
    }

    pub fn kind(&self) -> NumberKind {
        self.kind
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Switches to the plain edit text ("1234,5") so grouping and affixes don't get in the way.
    pub fn focus(&mut self) {
        self.focused = true;
        self.display = brazilian_format::to_edit_text(self.value);
        trace!(kind = %self.kind, display = %self.display, "numeric field focused");
    }

    /// Handles a keystroke-level change and returns the new canonical value.
    pub fn input(&mut self, raw: &str) -> f64 {
        self.display = brazilian_format::sanitize_with(raw, &self.policy);
        self.value = brazilian_format::parse(&self.display);
        trace!(raw, display = %self.display, value = self.value, "numeric field input");
        self.value
    }

    pub fn blur(&mut self) {
        self.focused = false;
        self.display = brazilian_format::format(self.value, self.kind);
        trace!(kind = %self.kind, display = %self.display, "numeric field blurred");
    }

    /// Applies a value pushed by the parent form. An echo of the current value is ignored,
    /// otherwise half-typed text like "12," would be replaced while the user is typing.
    pub fn set_value(&mut self, value: f64) {
        if value == self.value {
            return;
        }
        self.value = value;
        self.display = if self.focused {
            brazilian_format::to_edit_text(value)
        } else {
            brazilian_format::format(value, self.kind)
        };
        trace!(value, display = %self.display, "numeric field value set externally");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brazilian_format::ThreeDigitGroupRule;

    #[test]
    fn test_new_field_shows_formatted_value() {
        let field = NumericField::new(NumberKind::Currency, 1234.5);
        assert_eq!(field.display(), "R$ 1.234,50");
        assert_eq!(field.value(), 1234.5);
        assert!(!field.is_focused());
    }

    #[test]
    fn test_focus_shows_edit_text() {
        let mut field = NumericField::new(NumberKind::Currency, 1234.5);
        field.focus();
        assert!(field.is_focused());
        assert_eq!(field.display(), "1234,5");

        let mut empty = NumericField::new(NumberKind::Quantity, 0.0);
        empty.focus();
        assert_eq!(empty.display(), "");
    }

    #[test]
    fn test_typing_session() {
        let mut field = NumericField::new(NumberKind::Currency, 0.0);
        field.focus();
        for (typed, display, value) in [
            ("1", "1", 1.0),
            ("12", "12", 12.0),
            ("12.", "12,", 12.0),
            ("12.5", "12,5", 12.5),
            ("12.500", "12500", 12500.0),
            ("12500,7", "12500,7", 12500.7),
        ] {
            assert_eq!(field.input(typed), value, "value after typing {:?}", typed);
            assert_eq!(field.display(), display, "display after typing {:?}", typed);
        }
        field.blur();
        assert_eq!(field.display(), "R$ 12.500,70");
        assert_eq!(field.value(), 12500.7);
    }

    #[test]
    fn test_input_strips_garbage() {
        let mut field = NumericField::new(NumberKind::Percentage, 0.0);
        field.focus();
        assert_eq!(field.input("abc"), 0.0);
        assert_eq!(field.display(), "");
        field.blur();
        assert_eq!(field.display(), "0%");
    }

    #[test]
    fn test_overflowing_input_keeps_value_finite() {
        let mut field = NumericField::new(NumberKind::Quantity, 5.0);
        field.focus();
        assert_eq!(field.input(&"9".repeat(400)), 0.0);
        assert!(field.value().is_finite());
        field.blur();
        assert_eq!(field.display(), "0");
        assert_eq!(brazilian_format::parse(field.display()), field.value());
    }

    #[test]
    fn test_set_value_while_unfocused() {
        let mut field = NumericField::new(NumberKind::Quantity, 10.0);
        field.set_value(2500.0);
        assert_eq!(field.display(), "2.500");
        assert_eq!(field.value(), 2500.0);
    }

    #[test]
    fn test_set_value_echo_keeps_partial_text() {
        let mut field = NumericField::new(NumberKind::Currency, 0.0);
        field.focus();
        let value = field.input("12,");
        field.set_value(value);
        assert_eq!(field.display(), "12,");
    }

    #[test]
    fn test_set_value_while_focused_uses_edit_text() {
        let mut field = NumericField::new(NumberKind::Currency, 0.0);
        field.focus();
        field.input("5");
        field.set_value(99.9);
        assert_eq!(field.display(), "99,9");
        assert!(field.is_focused());
    }

    #[test]
    fn test_field_policy_is_used() {
        let policy = SeparatorPolicy { three_digit_group: ThreeDigitGroupRule::Decimal, ..Default::default() };
        let mut field = NumericField::with_policy(NumberKind::Quantity, 0.0, policy);
        field.focus();
        assert_eq!(field.input("12.500"), 12.5);
        assert_eq!(field.display(), "12,500");
    }
}
