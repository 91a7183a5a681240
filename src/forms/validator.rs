use std::collections::HashMap;

/// Raw field values captured from a form at submit time, keyed by field name.
pub type FormFields = HashMap<String, String>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormKind {
    Contact,
    Newsletter,
    Callback,
}

impl FormKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormKind::Contact => "contact",
            FormKind::Newsletter => "newsletter",
            FormKind::Callback => "callback",
        }
    }
}

/// Outcome of checking one form's fields. `errors` keeps the field
/// declaration order of the form, one message per violated rule.
#[derive(Clone, Debug, PartialEq)]
pub struct ValidationResult {
    pub ok: bool,
    pub errors: Vec<String>,
}

pub fn validate(kind: FormKind, fields: &FormFields) -> ValidationResult {
    let mut errors = Vec::new();

    match kind {
        FormKind::Contact => {
            if !has_min_len(fields, "firstName", 2) {
                errors.push("First name must be at least 2 characters".to_string());
            }
            if !has_min_len(fields, "lastName", 2) {
                errors.push("Last name must be at least 2 characters".to_string());
            }
            if !is_valid_email(field(fields, "email")) {
                errors.push("Please enter a valid email address".to_string());
            }
            if !has_min_len(fields, "phone", 10) {
                errors.push("Please enter a valid phone number".to_string());
            }
            if field(fields, "subject").is_empty() {
                errors.push("Please select a subject".to_string());
            }
        }
        FormKind::Callback => {
            if !has_min_len(fields, "name", 2) {
                errors.push("Name must be at least 2 characters".to_string());
            }
            if !has_min_len(fields, "phone", 10) {
                errors.push("Please enter a valid phone number".to_string());
            }
            if !is_valid_email(field(fields, "email")) {
                errors.push("Please enter a valid email address".to_string());
            }
        }
        FormKind::Newsletter => {
            if !is_valid_email(field(fields, "email")) {
                errors.push("Please enter a valid email address".to_string());
            }
        }
    }

    ValidationResult {
        ok: errors.is_empty(),
        errors,
    }
}

/// Coarse syntactic check: something@something.something, where no part
/// may contain whitespace or another `@`. Deliberately permissive beyond
/// that (consecutive dots pass, quoted local parts fail).
pub fn is_valid_email(raw: &str) -> bool {
    let value = raw.trim();
    let (local, rest) = match value.split_once('@') {
        Some(parts) => parts,
        None => return false,
    };
    let (host, tld) = match rest.rsplit_once('.') {
        Some(parts) => parts,
        None => return false,
    };
    !local.is_empty()
        && !host.is_empty()
        && !tld.is_empty()
        && [local, host, tld]
            .iter()
            .all(|part| part.chars().all(|c| !c.is_whitespace() && c != '@'))
}

fn field<'a>(fields: &'a FormFields, name: &str) -> &'a str {
    fields.get(name).map(String::as_str).unwrap_or("")
}

fn has_min_len(fields: &FormFields, name: &str, min: usize) -> bool {
    field(fields, name).trim().chars().count() >= min
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(pairs: &[(&str, &str)]) -> FormFields {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn contact_passes_with_all_rules_satisfied() {
        let result = validate(
            FormKind::Contact,
            &fields(&[
                ("firstName", "Al"),
                ("lastName", "Li"),
                ("email", "a@b.co"),
                ("phone", "1234567890"),
                ("subject", "general"),
            ]),
        );
        assert!(result.ok);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn contact_errors_keep_field_declaration_order() {
        let result = validate(
            FormKind::Contact,
            &fields(&[
                ("firstName", "A"),
                ("lastName", ""),
                ("email", "nope"),
                ("phone", "123"),
                ("subject", ""),
            ]),
        );
        assert!(!result.ok);
        assert_eq!(
            result.errors,
            vec![
                "First name must be at least 2 characters",
                "Last name must be at least 2 characters",
                "Please enter a valid email address",
                "Please enter a valid phone number",
                "Please select a subject",
            ]
        );
    }

    #[test]
    fn contact_collects_only_violated_rules_in_order() {
        let result = validate(
            FormKind::Contact,
            &fields(&[
                ("firstName", "Alice"),
                ("lastName", "L"),
                ("email", "alice@example.com"),
                ("phone", "12"),
                ("subject", "quote"),
            ]),
        );
        assert_eq!(
            result.errors,
            vec![
                "Last name must be at least 2 characters",
                "Please enter a valid phone number",
            ]
        );
    }

    #[test]
    fn callback_reports_three_failures() {
        let result = validate(
            FormKind::Callback,
            &fields(&[("name", "A"), ("phone", "123"), ("email", "bad")]),
        );
        assert!(!result.ok);
        assert_eq!(
            result.errors,
            vec![
                "Name must be at least 2 characters",
                "Please enter a valid phone number",
                "Please enter a valid email address",
            ]
        );
    }

    #[test]
    fn newsletter_accepts_a_plain_address() {
        let result = validate(FormKind::Newsletter, &fields(&[("email", "a@b.c")]));
        assert!(result.ok);
    }

    #[test]
    fn missing_fields_count_as_empty() {
        let result = validate(FormKind::Callback, &fields(&[]));
        assert_eq!(result.errors.len(), 3);
    }

    #[test]
    fn length_rules_trim_before_counting() {
        let result = validate(
            FormKind::Callback,
            &fields(&[
                ("name", "  B  "),
                ("phone", "  1234567890  "),
                ("email", "a@b.c"),
            ]),
        );
        assert_eq!(
            result.errors,
            vec!["Name must be at least 2 characters"]
        );
    }

    #[test]
    fn email_shape_cases() {
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email(" a@b.c "));
        assert!(is_valid_email("first.last@mail.example.org"));
        assert!(is_valid_email("a..b@x.y")); // permissive on consecutive dots
        assert!(!is_valid_email("abc"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a@b."));
        assert!(!is_valid_email("a@.c"));
        assert!(!is_valid_email("@b.c"));
        assert!(!is_valid_email("a@@b.c"));
        assert!(!is_valid_email("a b@c.d"));
        assert!(!is_valid_email(""));
    }
}
