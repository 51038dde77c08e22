use serde::Serialize;

/// Identifier of a catalog item.
///
/// Serialized as a plain JSON string (`"1"`, `"2"`), never a number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Returns the item ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A single record of the item catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub description: String,
}

impl Item {
    pub fn new(
        id: impl Into<ItemId>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Returns the fixed item catalog in id order.
pub fn catalog() -> Vec<Item> {
    vec![
        Item::new("1", "Item One", "First item from Rust Backend"),
        Item::new("2", "Item Two", "Second item from Rust Backend"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_two_items_in_id_order() {
        let items = catalog();
        let ids: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
        assert_eq!(items[0].name, "Item One");
        assert_eq!(items[1].name, "Item Two");
    }

    #[test]
    fn item_serializes_id_as_string() {
        let json = serde_json::to_value(Item::new("1", "Item One", "First")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "id": "1", "name": "Item One", "description": "First" })
        );
    }
}
