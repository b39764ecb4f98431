use std::hash::{Hash, Hasher};

/// A nullable `i32`.
///
/// `valid == false` means null. In that state `value` carries no meaning and
/// is kept at zero by every constructor and decoder in this crate, so two
/// null values always compare equal.
///
/// JSON encodes it as a bare integer or `null`; text encodes it as decimal
/// digits or the empty string. See [`crate::adapters`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Int32 {
    pub value: i32,
    pub valid: bool,
}

impl Int32 {
    pub const fn new(value: i32, valid: bool) -> Self {
        Self { value, valid }
    }

    pub const fn null() -> Self {
        Self {
            value: 0,
            valid: false,
        }
    }

    /// Always valid, including for zero.
    pub const fn from_value(value: i32) -> Self {
        Self { value, valid: true }
    }

    pub fn from_option(value: Option<i32>) -> Self {
        match value {
            Some(v) => Self::from_value(v),
            None => Self::null(),
        }
    }

    pub fn from_ref(value: Option<&i32>) -> Self {
        Self::from_option(value.copied())
    }

    pub fn set_valid(&mut self, value: i32) {
        self.value = value;
        self.valid = true;
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn value_or_zero(&self) -> i32 {
        if self.valid {
            self.value
        } else {
            0
        }
    }

    /// Returns an owned copy of the value, or `None` when null.
    pub fn to_option(&self) -> Option<i32> {
        self.valid.then_some(self.value)
    }

    /// True for null *and* for a valid zero.
    ///
    /// This is a zero-or-absent check, not an is-null check; use
    /// [`Int32::is_valid`] to tell the two apart.
    pub fn is_zero(&self) -> bool {
        !self.valid || self.value == 0
    }

    /// Drops the value and marks it null.
    pub(crate) fn reset(&mut self) {
        *self = Self::null();
    }
}

// Null values compare equal regardless of the stored value.
impl PartialEq for Int32 {
    fn eq(&self, other: &Self) -> bool {
        self.valid == other.valid && (!self.valid || self.value == other.value)
    }
}

impl Eq for Int32 {}

impl Hash for Int32 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_option().hash(state);
    }
}

impl From<i32> for Int32 {
    fn from(value: i32) -> Self {
        Self::from_value(value)
    }
}

impl From<Option<i32>> for Int32 {
    fn from(value: Option<i32>) -> Self {
        Self::from_option(value)
    }
}

impl From<Int32> for Option<i32> {
    fn from(value: Int32) -> Self {
        value.to_option()
    }
}
