use std::collections::HashMap;

/// Kind of form control, as far as completeness checking cares
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormControl {
    Radio { checked: bool },
    Checkbox { checked: bool },
    /// Text, select, hidden, buttons - not validated for completeness
    Other,
}

/// One control lifted out of a DOM form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: String,
    pub control: FormControl,
}

impl FormField {
    pub fn new(name: impl Into<String>, control: FormControl) -> Self {
        FormField {
            name: name.into(),
            control,
        }
    }
}

/// Check that every question group in the form has an answer
///
/// Radio and checkbox controls sharing a name form a group; each group needs
/// at least one checked member. Other controls are not validated. Unnamed
/// checkables cannot be submitted and are skipped.
pub fn is_form_complete(fields: &[FormField]) -> bool {
    let mut groups: HashMap<&str, bool> = HashMap::new();

    for field in fields {
        let checked = match field.control {
            FormControl::Radio { checked } | FormControl::Checkbox { checked } => checked,
            FormControl::Other => continue,
        };

        if field.name.is_empty() {
            continue;
        }

        let answered = groups.entry(field.name.as_str()).or_insert(false);
        *answered = *answered || checked;
    }

    groups.values().all(|&answered| answered)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checkbox(name: &str, checked: bool) -> FormField {
        FormField::new(name, FormControl::Checkbox { checked })
    }

    fn radio(name: &str, checked: bool) -> FormField {
        FormField::new(name, FormControl::Radio { checked })
    }

    #[test]
    fn test_empty_form_is_complete() {
        assert!(is_form_complete(&[]));
    }

    #[test]
    fn test_unchecked_checkbox_group_fails() {
        let fields = vec![checkbox("q1", false), checkbox("q1", false)];

        assert!(!is_form_complete(&fields));
    }

    #[test]
    fn test_checking_one_member_completes_group() {
        let fields = vec![checkbox("q1", false), checkbox("q1", true)];

        assert!(is_form_complete(&fields));
    }

    #[test]
    fn test_radio_group_needs_a_selection() {
        let unanswered = vec![radio("q1", false), radio("q1", false), radio("q1", false)];
        assert!(!is_form_complete(&unanswered));

        let answered = vec![radio("q1", false), radio("q1", true), radio("q1", false)];
        assert!(is_form_complete(&answered));
    }

    #[test]
    fn test_every_group_must_be_answered() {
        let fields = vec![
            radio("q1", true),
            radio("q1", false),
            checkbox("q2", false),
            checkbox("q2", false),
        ];

        assert!(!is_form_complete(&fields));
    }

    #[test]
    fn test_multiple_answered_groups() {
        let fields = vec![
            radio("q1", true),
            radio("q1", false),
            checkbox("q2", true),
            checkbox("q2", true),
        ];

        assert!(is_form_complete(&fields));
    }

    #[test]
    fn test_text_inputs_are_not_validated() {
        // An empty text input does not block completion
        let fields = vec![FormField::new("comment", FormControl::Other), radio("q1", true)];

        assert!(is_form_complete(&fields));
    }

    #[test]
    fn test_unnamed_checkables_are_skipped() {
        let fields = vec![checkbox("", false), radio("q1", true)];

        assert!(is_form_complete(&fields));
    }
}
