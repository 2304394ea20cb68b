//! Sortable customer columns.

use std::cmp::Ordering;

use rentalhub_core::types::SortKey;

use super::model::Customer;

/// Columns a customer listing can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomerSortKey {
    /// Primary key.
    Id,
    /// Name.
    Name,
    /// Postal code.
    PostalCode,
    /// Phone number.
    Phone,
}

impl SortKey for CustomerSortKey {
    const TIE_BREAKER: Self = Self::Id;

    fn default_keys() -> &'static [Self] {
        &[Self::Name, Self::Id]
    }

    fn natural_keys() -> &'static [Self] {
        &[Self::Id]
    }

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "id" => Some(Self::Id),
            "name" => Some(Self::Name),
            "postal_code" => Some(Self::PostalCode),
            "phone" => Some(Self::Phone),
            _ => None,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::PostalCode => "postal_code",
            Self::Phone => "phone",
        }
    }

    fn column(&self) -> &'static str {
        self.name()
    }
}

impl CustomerSortKey {
    /// Ascending comparison of two customers on this key.
    pub fn compare(self, a: &Customer, b: &Customer) -> Ordering {
        match self {
            Self::Id => a.id.cmp(&b.id),
            Self::Name => a.name.cmp(&b.name),
            Self::PostalCode => a.postal_code.cmp(&b.postal_code),
            Self::Phone => a.phone.cmp(&b.phone),
        }
    }
}
