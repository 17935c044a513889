//! Form state helpers

use std::collections::HashMap;

/// A single form field owned by the caller
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormControl {
    pub value: String,
    /// Set once the user has interacted with the field; validation
    /// messages display only for touched fields
    pub touched: bool,
}

impl FormControl {
    /// Create an untouched control with a value
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            touched: false,
        }
    }
}

/// Caller-owned form state keyed by field name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormGroup {
    pub controls: HashMap<String, FormControl>,
}

impl FormGroup {
    /// Add or replace a control
    pub fn insert(&mut self, name: impl Into<String>, control: FormControl) {
        self.controls.insert(name.into(), control);
    }

    /// Look up a control by field name
    pub fn control(&self, name: &str) -> Option<&FormControl> {
        self.controls.get(name)
    }
}

/// Mark every control as touched so validation messages display
pub fn mark_form_controls_as_touched(group: &mut FormGroup) {
    for control in group.controls.values_mut() {
        control.touched = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marks_every_control() {
        let mut group = FormGroup::default();
        group.insert("name", FormControl::new("server-01"));
        group.insert("ipAddress", FormControl::new("192.168.1.1"));
        group.insert("memory", FormControl::new(""));

        mark_form_controls_as_touched(&mut group);

        assert!(group.controls.values().all(|c| c.touched));
    }

    #[test]
    fn test_values_left_intact() {
        let mut group = FormGroup::default();
        group.insert("name", FormControl::new("server-01"));

        mark_form_controls_as_touched(&mut group);

        assert_eq!(group.control("name").unwrap().value, "server-01");
    }

    #[test]
    fn test_empty_group_is_fine() {
        let mut group = FormGroup::default();
        mark_form_controls_as_touched(&mut group);
        assert!(group.controls.is_empty());
    }
}
