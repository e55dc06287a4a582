//! Contact record: one person's name, phones, and optional birthday.

use crate::domain::{Birthday, ContactName, PhoneNumber, ValidationError};
use crate::error::{LookupError, RecordResult};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single contact entry.
///
/// The name is the record's identity and is immutable after construction.
/// Phones are an ordered list; duplicates are permitted. At most one
/// birthday may be set.
///
/// All field values are validated when they enter the record, so a record
/// never observably holds an invalid value. Deserialization trusts the
/// stored file and does not re-validate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactRecord {
    name: ContactName,
    #[serde(default)]
    phones: Vec<PhoneNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl ContactRecord {
    /// Create a new record with a name and an optional `YYYY-MM-DD` birthday.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the name or the birthday string fails
    /// its field validation.
    pub fn new(name: &str, birthday: Option<&str>) -> Result<Self, ValidationError> {
        let name = ContactName::new(name)?;
        let birthday = birthday.map(Birthday::parse).transpose()?;

        Ok(Self {
            name,
            phones: Vec::new(),
            birthday,
        })
    }

    /// The record's name (its identity in the book).
    pub fn name(&self) -> &ContactName {
        &self.name
    }

    /// All phone numbers, in insertion order.
    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// The birthday, if one is set.
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate and append a phone number.
    ///
    /// Duplicates are not rejected; the same number may appear several times.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if `raw` is not 10 digits.
    pub fn add_phone(&mut self, raw: &str) -> Result<(), ValidationError> {
        let phone = PhoneNumber::new(raw)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Remove every phone entry equal to `raw`. No-op if none match.
    pub fn remove_phone(&mut self, raw: &str) {
        self.phones.retain(|phone| phone != raw);
    }

    /// Replace the first phone equal to `old` with a validated `new` value.
    ///
    /// # Errors
    ///
    /// Returns `LookupError::PhoneNotFound` if no phone equals `old`, or
    /// `ValidationError::InvalidPhone` if `new` is malformed. The phone list
    /// is unchanged on any failure.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> RecordResult<()> {
        let index = self
            .phones
            .iter()
            .position(|phone| phone == old)
            .ok_or_else(|| LookupError::PhoneNotFound(old.to_string()))?;

        self.phones[index] = PhoneNumber::new(new)?;
        Ok(())
    }

    /// Find the first phone with exactly this value.
    pub fn find_phone(&self, raw: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|phone| *phone == raw)
    }

    /// Days from today until the next birthday, or `None` if no birthday is set.
    ///
    /// Returns 0 on the birthday itself. Uses the local calendar date; see
    /// [`days_to_birthday_from`](Self::days_to_birthday_from) for a fixed
    /// reference date.
    pub fn days_to_birthday(&self) -> Option<i64> {
        self.days_to_birthday_from(Local::now().date_naive())
    }

    /// Days from `today` until the next birthday, or `None` if no birthday is set.
    pub fn days_to_birthday_from(&self, today: NaiveDate) -> Option<i64> {
        self.birthday
            .as_ref()
            .map(|birthday| birthday.days_until_next(today))
    }
}

impl fmt::Display for ContactRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(PhoneNumber::as_str).collect();
        write!(f, "Contact name: {}, phones: {}, birthday: ", self.name, phones.join("; "))?;
        match &self.birthday {
            Some(birthday) => write!(f, "{}", birthday),
            None => write!(f, "none"),
        }
    }
}
