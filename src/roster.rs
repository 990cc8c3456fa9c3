// 📋 Roster - ordered in-memory list of persons
// Insertion order is display order. One owned Vec; the UI only reads it.

use crate::error::{Action, Result, RosterError};
use crate::record::Record;
use crate::validation::{parse_age, validate};
use serde::Serialize;
use tracing::{debug, warn};

// ============================================================================
// DUPLICATE DETECTION
// ============================================================================

/// Is there an entry equal to (name, surname, age)?
///
/// Strings compare trimmed and case-insensitive, the age exactly.
pub fn is_duplicate(name: &str, surname: &str, age: i32, records: &[Record]) -> bool {
    records.iter().any(|r| r.matches(name, surname, age))
}

// ============================================================================
// ROSTER
// ============================================================================

#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Roster {
    records: Vec<Record>,
}

impl Roster {
    /// Empty roster, as at startup
    pub fn new() -> Self {
        Roster {
            records: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn is_duplicate(&self, name: &str, surname: &str, age: i32) -> bool {
        is_duplicate(name, surname, age, &self.records)
    }

    /// Validate, reject duplicates, then append.
    ///
    /// Returns the index of the new row.
    pub fn add(&mut self, name: &str, surname: &str, age_text: &str) -> Result<usize> {
        let age = checked_age(name, surname, age_text, Action::Add)?;

        if self.is_duplicate(name, surname, age) {
            warn!(name = name.trim(), surname = surname.trim(), age, "duplicate person rejected");
            return Err(RosterError::Duplicate { action: Action::Add });
        }

        let record = Record::new(name, surname, age);
        debug!(id = %record.id, "person added");
        self.records.push(record);

        Ok(self.records.len() - 1)
    }

    /// Overwrite the row at `index` with new values.
    ///
    /// The duplicate check runs before validation and does not exempt the
    /// row being edited, so resubmitting unchanged values is rejected.
    pub fn update(
        &mut self,
        index: Option<usize>,
        name: &str,
        surname: &str,
        age_text: &str,
    ) -> Result<&Record> {
        let index = self.selected(index, Action::Update)?;

        // An age that doesn't parse can't match anything; validation reports it
        if let Some(age) = parse_age(age_text) {
            if self.is_duplicate(name, surname, age) {
                warn!(index, "update rejected: would duplicate an existing person");
                return Err(RosterError::Duplicate {
                    action: Action::Update,
                });
            }
        }

        let age = checked_age(name, surname, age_text, Action::Update)?;

        let record = &mut self.records[index];
        record.overwrite(name, surname, age);
        debug!(id = %record.id, version = record.version, "person updated");

        Ok(record)
    }

    /// Remove the row at `index`, returning it.
    pub fn remove(&mut self, index: Option<usize>) -> Result<Record> {
        let index = self.selected(index, Action::Remove)?;

        let record = self.records.remove(index);
        debug!(id = %record.id, "person removed");

        Ok(record)
    }

    // No selection and a stale selection past the end are the same thing
    fn selected(&self, index: Option<usize>, action: Action) -> Result<usize> {
        match index {
            Some(i) if i < self.records.len() => Ok(i),
            _ => {
                warn!(action = action.as_str(), ?index, "no person selected");
                Err(RosterError::NoSelection { action })
            }
        }
    }
}

fn checked_age(name: &str, surname: &str, age_text: &str, action: Action) -> Result<i32> {
    let errors = validate(name, surname, age_text);

    match parse_age(age_text) {
        Some(age) if errors.is_empty() => Ok(age),
        _ => {
            debug!(action = action.as_str(), count = errors.len(), "validation failed");
            Err(RosterError::Validation(errors))
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{AGE_NOT_NUMERIC, AGE_OUT_OF_RANGE, NAME_REQUIRED};

    fn roster_with(people: &[(&str, &str, &str)]) -> Roster {
        let mut roster = Roster::new();
        for (name, surname, age) in people {
            roster.add(name, surname, age).unwrap();
        }
        roster
    }

    #[test]
    fn test_add_appends_in_order() {
        let roster = roster_with(&[("Ana", "Lopez", "30"), ("Luis", "García", "45")]);

        assert_eq!(roster.len(), 2);
        assert_eq!(roster.get(0).unwrap().name, "Ana");
        assert_eq!(roster.get(1).unwrap().name, "Luis");
    }

    #[test]
    fn test_add_rejects_case_insensitive_duplicate() {
        let mut roster = roster_with(&[("Ana", "Lopez", "30")]);

        let err = roster.add("ana", "lopez", "30").unwrap_err();
        assert_eq!(err, RosterError::Duplicate { action: Action::Add });
        assert_eq!(roster.len(), 1);

        // Same names, different age is a different person
        assert_eq!(roster.add("ana", "lopez", "31").unwrap(), 1);
    }

    #[test]
    fn test_add_validates_before_duplicate_check() {
        let mut roster = roster_with(&[("Ana", "Lopez", "30")]);

        let err = roster.add("", "Lopez", "abc").unwrap_err();
        assert_eq!(
            err,
            RosterError::Validation(vec![NAME_REQUIRED.to_string(), AGE_NOT_NUMERIC.to_string()])
        );
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn test_add_then_is_duplicate() {
        let roster = roster_with(&[("Ana", "Lopez", "30")]);

        assert!(roster.is_duplicate("Ana", "Lopez", 30));
        assert!(roster.is_duplicate(" ANA ", "lopez", 30));
        assert!(!roster.is_duplicate("Ana", "Lopez", 29));
        assert!(is_duplicate("ana", "LOPEZ", 30, roster.records()));
    }

    #[test]
    fn test_remove() {
        let mut roster = roster_with(&[("Ana", "Lopez", "30"), ("Luis", "García", "45")]);

        let removed = roster.remove(Some(0)).unwrap();
        assert_eq!(removed.name, "Ana");
        assert_eq!(roster.len(), 1);
        assert_eq!(roster.get(0).unwrap().name, "Luis");
    }

    #[test]
    fn test_remove_without_selection() {
        let mut roster = roster_with(&[("Ana", "Lopez", "30")]);

        assert_eq!(
            roster.remove(None).unwrap_err(),
            RosterError::NoSelection { action: Action::Remove }
        );
        assert_eq!(
            roster.remove(Some(5)).unwrap_err(),
            RosterError::NoSelection { action: Action::Remove }
        );
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn test_update_overwrites_in_place() {
        let mut roster = roster_with(&[("Ana", "Lopez", "30"), ("Luis", "García", "45")]);
        let id = roster.get(1).unwrap().id.clone();

        let updated = roster.update(Some(1), "Luisa", "García", "46").unwrap();
        assert_eq!(updated.name, "Luisa");
        assert_eq!(updated.age, 46);
        assert_eq!(updated.version, 2);

        assert_eq!(roster.len(), 2);
        assert_eq!(roster.get(1).unwrap().id, id);
        assert_eq!(roster.get(0).unwrap().name, "Ana");
    }

    #[test]
    fn test_update_without_selection_leaves_roster_alone() {
        let mut roster = roster_with(&[("Ana", "Lopez", "30")]);

        let err = roster.update(None, "Eva", "Ruiz", "20").unwrap_err();
        assert_eq!(err, RosterError::NoSelection { action: Action::Update });

        let record = roster.get(0).unwrap();
        assert_eq!(record.name, "Ana");
        assert_eq!(record.version, 1);
    }

    #[test]
    fn test_update_rejects_unchanged_values() {
        let mut roster = roster_with(&[("Ana", "Lopez", "30")]);

        let err = roster.update(Some(0), "Ana", "Lopez", "30").unwrap_err();
        assert_eq!(err, RosterError::Duplicate { action: Action::Update });
    }

    #[test]
    fn test_update_rejects_other_row_values() {
        let mut roster = roster_with(&[("Ana", "Lopez", "30"), ("Luis", "García", "45")]);

        let err = roster.update(Some(1), "ANA", "lopez", "30").unwrap_err();
        assert_eq!(err, RosterError::Duplicate { action: Action::Update });
        assert_eq!(roster.get(1).unwrap().name, "Luis");
    }

    #[test]
    fn test_update_checks_duplicate_before_validation() {
        let mut roster = roster_with(&[("Ana", "Lopez", "30")]);

        // Out of range age that still matches nobody
        let err = roster.update(Some(0), "Eva", "Ruiz", "150").unwrap_err();
        assert_eq!(err, RosterError::Validation(vec![AGE_OUT_OF_RANGE.to_string()]));

        // Non-numeric age skips the duplicate check and fails validation
        let err = roster.update(Some(0), "Ana", "Lopez", "x").unwrap_err();
        assert_eq!(err, RosterError::Validation(vec![AGE_NOT_NUMERIC.to_string()]));
        assert_eq!(roster.get(0).unwrap().version, 1);
    }

    #[test]
    fn test_roster_serializes_as_array() {
        let roster = roster_with(&[("Ana", "Lopez", "30")]);
        let json = serde_json::to_value(&roster).unwrap();

        assert!(json.is_array());
        assert_eq!(json[0]["surname"], "Lopez");
    }
}
