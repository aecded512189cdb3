use crate::codec::DELIMITER;
use crate::error::{CareError, Result};
use std::fmt;

pub const MAX_NAME: usize = 49;
pub const MAX_ADDRESS: usize = 119;
pub const MAX_NEED: usize = 99;
pub const MAX_CONTACT: usize = 29;
pub const MAX_AGE: u32 = 150;

/// One beneficiary entry. The `id` is assigned by the store and never changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub id: u32,
    pub name: String,
    pub age: u32,
    pub address: String,
    pub need: String,
    pub contact: String,
}

impl Record {
    pub fn new(id: u32, fields: NewRecord) -> Self {
        Self {
            id,
            name: fields.name,
            age: fields.age,
            address: fields.address,
            need: fields.need,
            contact: fields.contact,
        }
    }
}

/// The caller-supplied part of a record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewRecord {
    pub name: String,
    pub age: u32,
    pub address: String,
    pub need: String,
    pub contact: String,
}

impl NewRecord {
    pub fn new(
        name: impl Into<String>,
        age: u32,
        address: impl Into<String>,
        need: impl Into<String>,
        contact: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            age,
            address: address.into(),
            need: need.into(),
            contact: contact.into(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        validate_text(Field::Name, &self.name)?;
        validate_age(self.age)?;
        validate_text(Field::Address, &self.address)?;
        validate_text(Field::Need, &self.need)?;
        validate_text(Field::Contact, &self.contact)?;
        Ok(())
    }
}

/// Partial update. `None` and blank text both mean "keep the current value".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordPatch {
    pub name: Option<String>,
    pub age: Option<u32>,
    pub address: Option<String>,
    pub need: Option<String>,
    pub contact: Option<String>,
}

impl RecordPatch {
    pub fn is_empty(&self) -> bool {
        provided(&self.name).is_none()
            && self.age.is_none()
            && provided(&self.address).is_none()
            && provided(&self.need).is_none()
            && provided(&self.contact).is_none()
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(name) = provided(&self.name) {
            validate_text(Field::Name, name)?;
        }
        if let Some(age) = self.age {
            validate_age(age)?;
        }
        if let Some(address) = provided(&self.address) {
            validate_text(Field::Address, address)?;
        }
        if let Some(need) = provided(&self.need) {
            validate_text(Field::Need, need)?;
        }
        if let Some(contact) = provided(&self.contact) {
            validate_text(Field::Contact, contact)?;
        }
        Ok(())
    }

    pub(crate) fn apply(&self, record: &mut Record) {
        if let Some(name) = provided(&self.name) {
            record.name = name.to_string();
        }
        if let Some(age) = self.age {
            record.age = age;
        }
        if let Some(address) = provided(&self.address) {
            record.address = address.to_string();
        }
        if let Some(need) = provided(&self.need) {
            record.need = need.to_string();
        }
        if let Some(contact) = provided(&self.contact) {
            record.contact = contact.to_string();
        }
    }
}

fn provided(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Address,
    Need,
    Contact,
}

impl Field {
    pub fn max_len(&self) -> usize {
        match self {
            Field::Name => MAX_NAME,
            Field::Address => MAX_ADDRESS,
            Field::Need => MAX_NEED,
            Field::Contact => MAX_CONTACT,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Field::Name => "name",
            Field::Address => "address",
            Field::Need => "need",
            Field::Contact => "contact",
        };
        write!(f, "{}", label)
    }
}

/// Rejects values that would corrupt the stored line format or exceed the field limit.
pub fn validate_text(field: Field, value: &str) -> Result<()> {
    if value.contains(DELIMITER) {
        return Err(CareError::Validation(format!(
            "{} must not contain '{}'",
            field, DELIMITER
        )));
    }
    if value.contains(['\n', '\r']) {
        return Err(CareError::Validation(format!(
            "{} must not contain line breaks",
            field
        )));
    }
    let len = value.chars().count();
    if len > field.max_len() {
        return Err(CareError::Validation(format!(
            "{} is too long ({} characters, max {})",
            field,
            len,
            field.max_len()
        )));
    }
    Ok(())
}

pub fn validate_age(age: u32) -> Result<()> {
    if age > MAX_AGE {
        return Err(CareError::Validation(format!(
            "age must be between 0 and {}",
            MAX_AGE
        )));
    }
    Ok(())
}

/// Parses an age typed by the user.
pub fn parse_age(input: &str) -> Result<u32> {
    let trimmed = input.trim();
    let age: u32 = trimmed
        .parse()
        .map_err(|_| CareError::Validation(format!("'{}' is not a valid age", trimmed)))?;
    validate_age(age)?;
    Ok(age)
}

/// Parses a record id typed by the user.
pub fn parse_id(input: &str) -> Result<u32> {
    let trimmed = input.trim();
    trimmed
        .parse()
        .map_err(|_| CareError::Validation(format!("'{}' is not a valid ID", trimmed)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_delimiter_in_fields() {
        let record = NewRecord::new("Ann|Lee", 70, "1 Road", "meals", "555");
        assert!(matches!(record.validate(), Err(CareError::Validation(_))));
    }

    #[test]
    fn rejects_overlong_name() {
        let record = NewRecord::new("x".repeat(MAX_NAME + 1), 70, "", "", "");
        assert!(record.validate().is_err());

        let record = NewRecord::new("x".repeat(MAX_NAME), 70, "", "", "");
        assert!(record.validate().is_ok());
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        assert!(validate_text(Field::Contact, &"é".repeat(MAX_CONTACT)).is_ok());
    }

    #[test]
    fn parse_age_bounds() {
        assert_eq!(parse_age(" 72 ").unwrap(), 72);
        assert!(parse_age("abc").is_err());
        assert!(parse_age("-1").is_err());
        assert!(parse_age("151").is_err());
    }

    #[test]
    fn blank_patch_is_empty() {
        let patch = RecordPatch {
            name: Some("   ".into()),
            contact: Some(String::new()),
            ..Default::default()
        };
        assert!(patch.is_empty());
    }

    #[test]
    fn patch_applies_only_provided_fields() {
        let mut record = Record::new(
            1000,
            NewRecord::new("Maria Lopez", 72, "12 Oak St", "grocery delivery", "555-0100"),
        );
        let patch = RecordPatch {
            name: Some(String::new()),
            need: Some("medication reminders".into()),
            ..Default::default()
        };
        patch.apply(&mut record);

        assert_eq!(record.name, "Maria Lopez");
        assert_eq!(record.age, 72);
        assert_eq!(record.need, "medication reminders");
    }

    #[test]
    fn each_text_field_enforces_its_limit() {
        for field in [Field::Name, Field::Address, Field::Need, Field::Contact] {
            assert!(validate_text(field, &"x".repeat(field.max_len())).is_ok());
            let err = validate_text(field, &"x".repeat(field.max_len() + 1)).unwrap_err();
            assert!(err.to_string().contains(&field.to_string()), "{field}");
        }
    }
}
