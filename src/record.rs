// 👤 Persona Record - name, surname, age
//
// "The row is the IDENTITY, the fields are VALUES"
//
// - UUID is assigned once and survives every edit, so a table row keeps
//   pointing at the same person after an update
// - Equality only looks at the values: trimmed, case-insensitive names and
//   the exact age

use chrono::{DateTime, Utc};
use serde::Serialize;

// ============================================================================
// RECORD
// ============================================================================

/// A single person in the roster.
///
/// Built only from input that already passed [`crate::validation::validate`].
#[derive(Debug, Clone, Serialize)]
pub struct Record {
    // ========================================================================
    // IDENTITY (never changes)
    // ========================================================================
    pub id: String,

    // ========================================================================
    // VALUES (overwritten in place by update)
    // ========================================================================
    pub name: String,
    pub surname: String,
    pub age: i32,

    // ========================================================================
    // VERSIONING
    // ========================================================================
    pub version: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Record {
    /// Create a record with a fresh UUID. Names are stored trimmed.
    pub fn new(name: &str, surname: &str, age: i32) -> Self {
        let now = Utc::now();

        Record {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.trim().to_string(),
            surname: surname.trim().to_string(),
            age,
            version: 1,
            created_at: now,
            updated_at: now,
        }
    }

    /// Does this record hold the given values?
    pub fn matches(&self, name: &str, surname: &str, age: i32) -> bool {
        self.age == age
            && eq_ignore_case(&self.name, name)
            && eq_ignore_case(&self.surname, surname)
    }

    /// Overwrite the values, keeping the identity
    pub fn overwrite(&mut self, name: &str, surname: &str, age: i32) {
        self.name = name.trim().to_string();
        self.surname = surname.trim().to_string();
        self.age = age;
        self.version += 1;
        self.updated_at = Utc::now();
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.matches(&other.name, &other.surname, other.age)
    }
}

impl Eq for Record {}

/// Case-insensitive comparison after trimming both sides.
///
/// Lowercases full Unicode so "ÑANDÚ" and "ñandú" compare equal.
fn eq_ignore_case(a: &str, b: &str) -> bool {
    let a = a.trim();
    let b = b.trim();
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_creation() {
        let record = Record::new("  Ana ", "López ", 30);

        assert!(!record.id.is_empty());
        assert_eq!(record.name, "Ana");
        assert_eq!(record.surname, "López");
        assert_eq!(record.age, 30);
        assert_eq!(record.version, 1);
        assert_eq!(record.created_at, record.updated_at);
    }

    #[test]
    fn test_equality_ignores_case_and_identity() {
        let a = Record::new("Ana", "Lopez", 30);
        let b = Record::new("ana", "LOPEZ", 30);

        assert_ne!(a.id, b.id);
        assert_eq!(a, b);
    }

    #[test]
    fn test_equality_requires_exact_age() {
        let a = Record::new("Ana", "Lopez", 30);
        let b = Record::new("Ana", "Lopez", 31);

        assert_ne!(a, b);
    }

    #[test]
    fn test_matches_trims_candidate() {
        let record = Record::new("José", "Ñandú", 44);

        assert!(record.matches(" JOSÉ ", "ñandú", 44));
        assert!(!record.matches("Jose", "Ñandú", 44));
        assert!(!record.matches("José", "Ñandú", 45));
    }

    #[test]
    fn test_overwrite_keeps_identity() {
        let mut record = Record::new("Ana", "Lopez", 30);
        let id = record.id.clone();
        let created_at = record.created_at;

        record.overwrite(" Eva ", "Martín", 41);

        assert_eq!(record.id, id);
        assert_eq!(record.created_at, created_at);
        assert_eq!(record.name, "Eva");
        assert_eq!(record.surname, "Martín");
        assert_eq!(record.age, 41);
        assert_eq!(record.version, 2);
        assert!(record.updated_at >= created_at);
    }

    #[test]
    fn test_record_serializes_to_json() {
        let record = Record::new("Ana", "Lopez", 30);
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["name"], "Ana");
        assert_eq!(json["surname"], "Lopez");
        assert_eq!(json["age"], 30);
        assert_eq!(json["id"], record.id.as_str());
    }
}
