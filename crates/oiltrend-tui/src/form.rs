//! Numeric input buffers for the data-entry form.

use oiltrend_core::schema::{Field, FIELD_COUNT};

/// Increment applied by the Up/Down keys. Display hint only; typed
/// values are not snapped to it.
pub const STEP: f64 = 0.1;

/// One numeric input control. The raw buffer is shown while editing;
/// elsewhere the parsed value is displayed with two decimals.
#[derive(Debug, Clone)]
pub struct FieldInput {
    buffer: String,
}

impl Default for FieldInput {
    fn default() -> Self {
        Self {
            buffer: "0.00".to_string(),
        }
    }
}

impl FieldInput {
    /// Raw edit buffer.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.buffer
    }

    /// Parsed value; unparsable or empty buffers count as 0.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.buffer.parse().unwrap_or(0.0)
    }

    /// Two-decimal display form of the current value.
    #[must_use]
    pub fn display(&self) -> String {
        format!("{:.2}", self.value())
    }

    /// Append a character. Only digits, one dot, and a leading minus
    /// are accepted; everything else is ignored.
    pub fn push_char(&mut self, c: char) {
        let ok = match c {
            '0'..='9' => true,
            '.' => !self.buffer.contains('.'),
            '-' => self.buffer.is_empty(),
            _ => false,
        };
        if ok {
            self.buffer.push(c);
        }
    }

    pub fn backspace(&mut self) {
        self.buffer.pop();
    }

    /// Nudge the value by `delta` and reformat to two decimals.
    pub fn step(&mut self, delta: f64) {
        self.buffer = format!("{:.2}", self.value() + delta);
    }
}

/// State of the eight-field entry form. Inputs keep their values after
/// a submit so that similar entries can be recorded back to back.
#[derive(Debug, Clone, Default)]
pub struct EntryForm {
    inputs: [FieldInput; FIELD_COUNT],
    selected: usize,
}

impl EntryForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the focused input.
    #[must_use]
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Input for a given field.
    #[must_use]
    pub fn input(&self, field: Field) -> &FieldInput {
        &self.inputs[field.index()]
    }

    pub fn next_field(&mut self) {
        self.selected = (self.selected + 1) % FIELD_COUNT;
    }

    pub fn prev_field(&mut self) {
        self.selected = (self.selected + FIELD_COUNT - 1) % FIELD_COUNT;
    }

    pub fn input_char(&mut self, c: char) {
        self.inputs[self.selected].push_char(c);
    }

    pub fn backspace(&mut self) {
        self.inputs[self.selected].backspace();
    }

    pub fn step_up(&mut self) {
        self.inputs[self.selected].step(STEP);
    }

    pub fn step_down(&mut self) {
        self.inputs[self.selected].step(-STEP);
    }

    /// Current values of all fields in declared order.
    #[must_use]
    pub fn values(&self) -> [f64; FIELD_COUNT] {
        let mut out = [0.0; FIELD_COUNT];
        for (slot, input) in out.iter_mut().zip(&self.inputs) {
            *slot = input.value();
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_defaults_to_zero() {
        let input = FieldInput::default();
        assert!((input.value()).abs() < f64::EPSILON);
        assert_eq!(input.display(), "0.00");
    }

    #[test]
    fn typed_value_parses() {
        let mut input = FieldInput::default();
        for _ in 0..4 {
            input.backspace();
        }
        for c in "15.75".chars() {
            input.push_char(c);
        }
        assert!((input.value() - 15.75).abs() < f64::EPSILON);
    }

    #[test]
    fn second_dot_is_ignored() {
        let mut input = FieldInput::default();
        input.push_char('.');
        assert_eq!(input.text(), "0.00");
    }

    #[test]
    fn minus_only_at_start() {
        let mut input = FieldInput::default();
        input.push_char('-');
        assert_eq!(input.text(), "0.00");

        for _ in 0..4 {
            input.backspace();
        }
        input.push_char('-');
        input.push_char('1');
        assert!((input.value() + 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_buffer_counts_as_zero() {
        let mut input = FieldInput::default();
        for _ in 0..4 {
            input.backspace();
        }
        assert_eq!(input.text(), "");
        assert!(input.value().abs() < f64::EPSILON);
    }

    #[test]
    fn step_changes_by_tenth() {
        let mut input = FieldInput::default();
        input.step(STEP);
        assert_eq!(input.text(), "0.10");
        input.step(STEP);
        assert_eq!(input.text(), "0.20");
        input.step(-STEP);
        assert_eq!(input.text(), "0.10");
    }

    #[test]
    fn step_is_a_hint_not_a_snap() {
        let mut input = FieldInput::default();
        for _ in 0..4 {
            input.backspace();
        }
        for c in "0.15".chars() {
            input.push_char(c);
        }
        input.step(STEP);
        assert_eq!(input.text(), "0.25");
    }

    #[test]
    fn form_field_cycle_wraps() {
        let mut form = EntryForm::new();
        assert_eq!(form.selected(), 0);
        for _ in 0..FIELD_COUNT {
            form.next_field();
        }
        assert_eq!(form.selected(), 0);
        form.prev_field();
        assert_eq!(form.selected(), FIELD_COUNT - 1);
    }

    #[test]
    fn form_edits_focused_field_only() {
        let mut form = EntryForm::new();
        form.next_field();
        form.step_up();

        let values = form.values();
        assert!(values[0].abs() < f64::EPSILON);
        assert!((values[1] - 0.1).abs() < f64::EPSILON);
        for v in &values[2..] {
            assert!(v.abs() < f64::EPSILON);
        }
    }

    #[test]
    fn values_default_to_all_zero() {
        let form = EntryForm::new();
        assert_eq!(form.values(), [0.0; FIELD_COUNT]);
    }
}
