//! Module defining the item record in its loose (property bag) and typed (entity) forms

/// A single `name`/`value` pair of an item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub name: String,
    pub value: String,
}

impl Property {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// The untyped form of an item, as read from the XML document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyBag {
    properties: Vec<Property>,
}

impl PropertyBag {
    pub fn new(properties: Vec<Property>) -> Self {
        Self { properties }
    }

    pub(crate) fn push(&mut self, property: Property) {
        self.properties.push(property);
    }

    /// Value of the first property called `name`.
    ///
    /// An absent property is `None`. This is a different condition from a property whose value
    /// is present but malformed, and callers must not fold the two together.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.value.as_str())
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }
}

/// The typed item built from a [`PropertyBag`].
///
/// `None` in any field means the bag had no such property.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemEntity {
    pub item_id: Option<String>,
    pub item_description: Option<String>,
    pub item_code: Option<String>,
    pub item_cost: Option<i32>,
}
