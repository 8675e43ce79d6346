//! Category tree model.

use serde::{Deserialize, Serialize};

use crate::types::CategoryId;

/// A node in the product category tree.
///
/// Children are owned by their parent; `parent_id` points back up the tree
/// for flat representations where children are not nested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<CategoryId>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Category>,
}

impl Category {
    /// Create a root category with no children.
    #[must_use]
    pub fn root(id: impl Into<CategoryId>, name: &str, slug: &str) -> Self {
        Self {
            id: id.into(),
            name: name.to_string(),
            slug: slug.to_string(),
            parent_id: None,
            children: Vec::new(),
        }
    }

    /// Attach a child, setting its `parent_id` to this category.
    #[must_use]
    pub fn with_child(mut self, mut child: Self) -> Self {
        child.parent_id = Some(self.id.clone());
        self.children.push(child);
        self
    }

    /// Whether this category sits at the top of the tree.
    #[must_use]
    pub const fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    /// Depth-first search for a category by slug, including `self`.
    #[must_use]
    pub fn find(&self, slug: &str) -> Option<&Self> {
        if self.slug == slug {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(slug))
    }

    /// Storefront path listing this category's products.
    #[must_use]
    pub fn href(&self) -> String {
        format!("/products?category={}", self.slug)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn women() -> Category {
        Category::root("cat_women", "Women", "women").with_child(
            Category::root("cat_bags", "Bags", "bags")
                .with_child(Category::root("cat_totes", "Totes", "totes")),
        )
    }

    #[test]
    fn test_with_child_sets_parent() {
        let tree = women();
        let bags = tree.find("bags").unwrap();
        assert_eq!(bags.parent_id.as_ref().unwrap().as_str(), "cat_women");
        assert!(tree.is_root());
        assert!(!bags.is_root());
    }

    #[test]
    fn test_find_is_depth_first() {
        let tree = women();
        assert_eq!(tree.find("totes").unwrap().name, "Totes");
        assert!(tree.find("watches").is_none());
    }

    #[test]
    fn test_href() {
        assert_eq!(women().href(), "/products?category=women");
    }
}
