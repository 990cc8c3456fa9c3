// ✅ Input Validation - raw form text → list of user-facing errors
// Every rule runs; only a non-numeric age stops the age range check.

// ============================================================================
// MESSAGES
// ============================================================================

pub const NAME_REQUIRED: &str = "You must enter a name.";
pub const NAME_INVALID: &str = "The name cannot contain numbers.";
pub const SURNAME_REQUIRED: &str = "You must enter at least one surname.";
pub const SURNAME_INVALID: &str = "The surname cannot contain numbers.";
pub const AGE_NOT_NUMERIC: &str = "The 'Age' field must be numeric.";
pub const AGE_OUT_OF_RANGE: &str = "Enter a valid age (1-100).";

pub const MIN_AGE: i32 = 1;
pub const MAX_AGE: i32 = 100;

// ============================================================================
// RULES
// ============================================================================

/// Validate the three raw form fields.
///
/// Returns the messages in rule order (name, surname, age). An empty
/// vector means the input is valid.
pub fn validate(name: &str, surname: &str, age_text: &str) -> Vec<String> {
    let mut errors = Vec::new();

    if let Some(message) = check_text(name, NAME_REQUIRED, NAME_INVALID) {
        errors.push(message.to_string());
    }

    if let Some(message) = check_text(surname, SURNAME_REQUIRED, SURNAME_INVALID) {
        errors.push(message.to_string());
    }

    let age = match parse_age(age_text) {
        Some(age) => age,
        None => {
            errors.push(AGE_NOT_NUMERIC.to_string());
            return errors;
        }
    };

    if !(MIN_AGE..=MAX_AGE).contains(&age) {
        errors.push(AGE_OUT_OF_RANGE.to_string());
    }

    errors
}

/// Parse age text the way the form reads it: trimmed, 32-bit, optional sign.
pub fn parse_age(age_text: &str) -> Option<i32> {
    age_text.trim().parse::<i32>().ok()
}

/// Letters allowed in names: ASCII letters, Spanish accented vowels, Ñ/ñ
/// and whitespace.
pub fn is_name_char(c: char) -> bool {
    c.is_ascii_alphabetic()
        || matches!(
            c,
            'á' | 'é' | 'í' | 'ó' | 'ú' | 'Á' | 'É' | 'Í' | 'Ó' | 'Ú' | 'Ñ' | 'ñ'
        )
        || is_form_whitespace(c)
}

// Same set a regex `\s` accepts: space, tab, newline, vertical tab, form feed, CR
fn is_form_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\u{0B}' | '\u{0C}' | '\r')
}

fn check_text(
    value: &str,
    required: &'static str,
    invalid: &'static str,
) -> Option<&'static str> {
    let value = value.trim();

    if value.is_empty() {
        Some(required)
    } else if !value.chars().all(is_name_char) {
        Some(invalid)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_input_has_no_errors() {
        assert!(validate("John", "Smith", "30").is_empty());
        assert!(validate("María José", "Núñez Ortiz", "1").is_empty());
        assert!(validate("  Ana ", " López", " 100 ").is_empty());
    }

    #[test]
    fn test_name_required() {
        let errors = validate("", "Smith", "30");
        assert_eq!(errors, vec![NAME_REQUIRED.to_string()]);

        // Whitespace only counts as empty
        let errors = validate("   ", "Smith", "30");
        assert_eq!(errors, vec![NAME_REQUIRED.to_string()]);
    }

    #[test]
    fn test_name_with_digits() {
        let errors = validate("John1", "Smith", "30");
        assert_eq!(errors, vec![NAME_INVALID.to_string()]);
    }

    #[test]
    fn test_punctuation_is_rejected_with_same_message() {
        let errors = validate("O'Brien", "Smith-Jones", "30");
        assert_eq!(
            errors,
            vec![NAME_INVALID.to_string(), SURNAME_INVALID.to_string()]
        );
    }

    #[test]
    fn test_accents_outside_the_set_are_rejected() {
        // ü and è are not in the accepted set
        assert_eq!(validate("Müller", "Smith", "30"), vec![NAME_INVALID.to_string()]);
        assert_eq!(validate("Inés", "Ibáñez", "30").len(), 0);
        assert_eq!(validate("John", "Brè", "30"), vec![SURNAME_INVALID.to_string()]);
    }

    #[test]
    fn test_non_numeric_age_skips_range_check() {
        let errors = validate("John", "Smith", "abc");
        assert_eq!(errors, vec![AGE_NOT_NUMERIC.to_string()]);

        let errors = validate("John", "Smith", "");
        assert_eq!(errors, vec![AGE_NOT_NUMERIC.to_string()]);

        let errors = validate("John", "Smith", "30.5");
        assert_eq!(errors, vec![AGE_NOT_NUMERIC.to_string()]);
    }

    #[test]
    fn test_age_out_of_range() {
        assert_eq!(validate("John", "Smith", "150"), vec![AGE_OUT_OF_RANGE.to_string()]);
        assert_eq!(validate("John", "Smith", "0"), vec![AGE_OUT_OF_RANGE.to_string()]);
        assert_eq!(validate("John", "Smith", "-5"), vec![AGE_OUT_OF_RANGE.to_string()]);
        assert_eq!(validate("John", "Smith", "101"), vec![AGE_OUT_OF_RANGE.to_string()]);
    }

    #[test]
    fn test_errors_accumulate_in_rule_order() {
        let errors = validate("", "Sm1th", "abc");
        assert_eq!(
            errors,
            vec![
                NAME_REQUIRED.to_string(),
                SURNAME_INVALID.to_string(),
                AGE_NOT_NUMERIC.to_string(),
            ]
        );

        let errors = validate("J0hn", "", "0");
        assert_eq!(
            errors,
            vec![
                NAME_INVALID.to_string(),
                SURNAME_REQUIRED.to_string(),
                AGE_OUT_OF_RANGE.to_string(),
            ]
        );
    }

    #[test]
    fn test_parse_age() {
        assert_eq!(parse_age(" 42 "), Some(42));
        assert_eq!(parse_age("+7"), Some(7));
        assert_eq!(parse_age("-1"), Some(-1));
        assert_eq!(parse_age("99999999999"), None);
        assert_eq!(parse_age("4 2"), None);
    }
}
