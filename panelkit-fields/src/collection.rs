//! Ordered, name-indexed collections of field descriptions.

use indexmap::IndexMap;

use crate::description::FieldDescription;

/// The field descriptions of one admin context, in insertion order.
///
/// Adding a description whose name is already present replaces it in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldDescriptionCollection {
    elements: IndexMap<String, FieldDescription>,
}

impl FieldDescriptionCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: FieldDescription) {
        self.elements.insert(field.name().to_string(), field);
    }

    pub fn get(&self, name: &str) -> Option<&FieldDescription> {
        self.elements.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut FieldDescription> {
        self.elements.get_mut(name)
    }

    pub fn has(&self, name: &str) -> bool {
        self.elements.contains_key(name)
    }

    /// Remove a description, keeping the order of the others.
    pub fn remove(&mut self, name: &str) -> Option<FieldDescription> {
        self.elements.shift_remove(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldDescription> {
        self.elements.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.elements.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl FromIterator<FieldDescription> for FieldDescriptionCollection {
    fn from_iter<I: IntoIterator<Item = FieldDescription>>(iter: I) -> Self {
        let mut collection = Self::new();
        for field in iter {
            collection.add(field);
        }
        collection
    }
}

impl<'a> IntoIterator for &'a FieldDescriptionCollection {
    type Item = &'a FieldDescription;
    type IntoIter = indexmap::map::Values<'a, String, FieldDescription>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collection() -> FieldDescriptionCollection {
        ["title", "author.name", "created_at"]
            .into_iter()
            .map(FieldDescription::new)
            .collect()
    }

    #[test]
    fn keeps_insertion_order() {
        let c = collection();
        assert_eq!(
            c.names().collect::<Vec<_>>(),
            vec!["title", "author.name", "created_at"]
        );
        assert_eq!(c.len(), 3);
    }

    #[test]
    fn add_same_name_replaces_in_place() {
        let mut c = collection();
        let mut replacement = FieldDescription::new("author.name");
        replacement.set_option("label", "Author");
        c.add(replacement);

        assert_eq!(c.len(), 3);
        assert_eq!(c.names().nth(1), Some("author.name"));
        assert_eq!(c.get("author.name").unwrap().label(), Some("Author"));
    }

    #[test]
    fn remove_keeps_order_of_others() {
        let mut c = collection();
        let removed = c.remove("title").unwrap();
        assert_eq!(removed.name(), "title");
        assert!(!c.has("title"));
        assert_eq!(c.names().collect::<Vec<_>>(), vec!["author.name", "created_at"]);
        assert!(c.remove("title").is_none());
    }

    #[test]
    fn get_mut_edits_in_place() {
        let mut c = collection();
        c.get_mut("created_at").unwrap().set_option("sortable", true);
        assert!(c.get("created_at").unwrap().is_sortable());
        assert!(!c.get("title").unwrap().is_sortable());
    }
}
