use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};


/// One of the four entity axes a query token can be classified into.
///
/// The string form is the persistent identifier ("categories", "brands", ...);
/// parsing also accepts the singular spelling.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[strum(ascii_case_insensitive)]
pub enum Domain {
    #[serde(rename = "categories", alias = "category")]
    #[strum(to_string = "categories", serialize = "category")]
    Category,
    #[serde(rename = "brands", alias = "brand")]
    #[strum(to_string = "brands", serialize = "brand")]
    Brand,
    #[serde(rename = "colors", alias = "color")]
    #[strum(to_string = "colors", serialize = "color")]
    Color,
    #[serde(rename = "genders", alias = "gender")]
    #[strum(to_string = "genders", serialize = "gender")]
    Gender,
}

impl Domain {

    pub fn all() -> impl Iterator<Item = Domain> {
        Domain::iter()
    }

    /// `self` first, then the remaining domains in declaration order.
    pub fn lookup_order(self) -> impl Iterator<Item = Domain> {
        std::iter::once(self).chain(Domain::iter().filter(move |d| *d != self))
    }
}
