//! LEGO set — the single record kind held by the catalog.
//!
//! Three shapes travel through the system:
//! - [`LegoSetDraft`] — a candidate record as received, every field optional
//! - [`NewLegoSet`] — a validated draft, still without identity or timestamps
//! - [`LegoSet`] — a stored record
//!
//! Updates are expressed as a [`LegoSetChanges`] merged into a stored record.
//!
//! A value counts as *blank* when it is an empty string or a numeric zero.
//! Whitespace is a real value. Blank values are treated exactly like absent ones:
//! they fail the required-field check on create and are skipped on update.

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, ValidationError};
use crate::id::LegoSetId;
use crate::time::Timestamp;

/// A LEGO set stored in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegoSet {
    pub id: LegoSetId,
    /// Manufacturer catalog number, unique across the catalog.
    pub set_number: String,
    pub name: String,
    pub pieces: u32,
    pub price: f64,
    pub age_range: String,
    pub theme: String,
    pub release_year: u16,
    pub image_url: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Values that can be "blank" (zero or empty) while still being present.
trait Blank {
    fn is_blank(&self) -> bool;
}

impl Blank for String {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl Blank for u32 {
    fn is_blank(&self) -> bool {
        *self == 0
    }
}

impl Blank for u16 {
    fn is_blank(&self) -> bool {
        *self == 0
    }
}

impl Blank for f64 {
    #[allow(clippy::float_cmp)]
    fn is_blank(&self) -> bool {
        *self == 0.0
    }
}

fn present<T: Blank>(value: Option<T>) -> Option<T> {
    value.filter(|inner| !inner.is_blank())
}

fn ensure_present<T: Blank>(value: &T, field: &'static str) -> Result<(), ValidationError> {
    if value.is_blank() {
        return Err(ValidationError::MissingField(field));
    }
    Ok(())
}

fn ensure_valid_price(price: f64) -> Result<(), ValidationError> {
    if !price.is_finite() || price < 0.0 {
        return Err(ValidationError::InvalidPrice);
    }
    Ok(())
}

fn merge<T: Blank>(slot: &mut T, value: Option<T>) {
    if let Some(value) = present(value) {
        *slot = value;
    }
}

/// A candidate set as submitted for creation, before any validation.
///
/// Doubles as a builder: chain the setters, then call [`build`](Self::build).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LegoSetDraft {
    pub set_number: Option<String>,
    pub name: Option<String>,
    pub pieces: Option<u32>,
    pub price: Option<f64>,
    pub age_range: Option<String>,
    pub theme: Option<String>,
    pub release_year: Option<u16>,
    pub image_url: Option<String>,
}

impl LegoSetDraft {
    #[must_use]
    pub fn set_number(mut self, set_number: impl Into<String>) -> Self {
        self.set_number = Some(set_number.into());
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn pieces(mut self, pieces: u32) -> Self {
        self.pieces = Some(pieces);
        self
    }

    #[must_use]
    pub fn price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    #[must_use]
    pub fn age_range(mut self, age_range: impl Into<String>) -> Self {
        self.age_range = Some(age_range.into());
        self
    }

    #[must_use]
    pub fn theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = Some(theme.into());
        self
    }

    #[must_use]
    pub fn release_year(mut self, release_year: u16) -> Self {
        self.release_year = Some(release_year);
        self
    }

    #[must_use]
    pub fn image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    /// Consume the draft, validate, and return a [`NewLegoSet`].
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Validation`] naming the first absent or blank
    /// field (in wire order), or when the price is negative or not finite.
    pub fn build(self) -> Result<NewLegoSet, CatalogError> {
        let missing = ValidationError::MissingField;
        let new = NewLegoSet {
            set_number: self.set_number.ok_or(missing("setNumber"))?,
            name: self.name.ok_or(missing("name"))?,
            pieces: self.pieces.ok_or(missing("pieces"))?,
            price: self.price.ok_or(missing("price"))?,
            age_range: self.age_range.ok_or(missing("ageRange"))?,
            theme: self.theme.ok_or(missing("theme"))?,
            release_year: self.release_year.ok_or(missing("releaseYear"))?,
            image_url: self.image_url.ok_or(missing("imageUrl"))?,
        };
        new.validate()?;
        Ok(new)
    }
}

/// A validated set that has not been assigned an identifier yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewLegoSet {
    pub set_number: String,
    pub name: String,
    pub pieces: u32,
    pub price: f64,
    pub age_range: String,
    pub theme: String,
    pub release_year: u16,
    pub image_url: String,
}

impl NewLegoSet {
    /// Start a [`LegoSetDraft`] builder.
    #[must_use]
    pub fn builder() -> LegoSetDraft {
        LegoSetDraft::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Validation`] when a field is blank or the
    /// price is negative or not finite.
    pub fn validate(&self) -> Result<(), CatalogError> {
        ensure_present(&self.set_number, "setNumber")?;
        ensure_present(&self.name, "name")?;
        ensure_present(&self.pieces, "pieces")?;
        ensure_present(&self.price, "price")?;
        ensure_present(&self.age_range, "ageRange")?;
        ensure_present(&self.theme, "theme")?;
        ensure_present(&self.release_year, "releaseYear")?;
        ensure_present(&self.image_url, "imageUrl")?;
        ensure_valid_price(self.price)?;
        Ok(())
    }

    /// Give the set its identity. Both timestamps are set to `now`.
    #[must_use]
    pub fn into_lego_set(self, id: LegoSetId, now: Timestamp) -> LegoSet {
        LegoSet {
            id,
            set_number: self.set_number,
            name: self.name,
            pieces: self.pieces,
            price: self.price,
            age_range: self.age_range,
            theme: self.theme,
            release_year: self.release_year,
            image_url: self.image_url,
            created_at: now,
            updated_at: now,
        }
    }
}

/// A partial update. Absent and blank fields leave the stored value alone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LegoSetChanges {
    pub set_number: Option<String>,
    pub name: Option<String>,
    pub pieces: Option<u32>,
    pub price: Option<f64>,
    pub age_range: Option<String>,
    pub theme: Option<String>,
    pub release_year: Option<u16>,
    pub image_url: Option<String>,
}

impl LegoSetChanges {
    #[must_use]
    pub fn set_number(mut self, set_number: impl Into<String>) -> Self {
        self.set_number = Some(set_number.into());
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn pieces(mut self, pieces: u32) -> Self {
        self.pieces = Some(pieces);
        self
    }

    #[must_use]
    pub fn price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    /// Check the provided values.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Validation`] when a non-blank price is
    /// negative or not finite.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if let Some(price) = present(self.price) {
            ensure_valid_price(price)?;
        }
        Ok(())
    }

    /// The catalog number this change would move the set to, if any.
    #[must_use]
    pub fn requested_set_number(&self) -> Option<&str> {
        self.set_number
            .as_deref()
            .filter(|set_number| !set_number.is_empty())
    }

    /// Merge into `set` and refresh its `updated_at`.
    ///
    /// `id` and `created_at` are never touched.
    pub fn apply_to(self, set: &mut LegoSet, now: Timestamp) {
        merge(&mut set.set_number, self.set_number);
        merge(&mut set.name, self.name);
        merge(&mut set.pieces, self.pieces);
        merge(&mut set.price, self.price);
        merge(&mut set.age_range, self.age_range);
        merge(&mut set.theme, self.theme);
        merge(&mut set.release_year, self.release_year);
        merge(&mut set.image_url, self.image_url);
        set.updated_at = now;
    }
}
