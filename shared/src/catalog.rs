//! Category and text filtering over the static menu card list.
//!
//! Filters never mutate the list; they return one visibility flag per item in
//! the order the items were given.

/// Searchable data read from one menu card.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuItem {
    pub category: Option<String>,
    pub title: String,
    pub description: Option<String>,
}

impl MenuItem {
    pub fn new(category: Option<&str>, title: &str, description: Option<&str>) -> Self {
        Self {
            category: category.map(str::to_string),
            title: title.to_string(),
            description: description.map(str::to_string),
        }
    }

    /// `needle` must already be lowercased and trimmed.
    fn matches_needle(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.title.to_lowercase().contains(needle)
            || self
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(needle))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Tag(String),
}

impl CategoryFilter {
    pub const ALL: &'static str = "all";

    pub fn from_tag(tag: &str) -> Self {
        if tag == Self::ALL {
            CategoryFilter::All
        } else {
            CategoryFilter::Tag(tag.to_string())
        }
    }

    pub fn admits(&self, item: &MenuItem) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Tag(tag) => item.category.as_deref() == Some(tag.as_str()),
        }
    }
}

pub fn filter_by_category(items: &[MenuItem], filter: &CategoryFilter) -> Vec<bool> {
    items.iter().map(|item| filter.admits(item)).collect()
}

/// Case-insensitive substring match against title and description.
pub fn search(items: &[MenuItem], query: &str) -> Vec<bool> {
    let needle = query.trim().to_lowercase();
    items.iter().map(|item| item.matches_needle(&needle)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn menu() -> Vec<MenuItem> {
        vec![
            MenuItem::new(Some("burgers"), "Cheese Burger", Some("Beef, cheddar")),
            MenuItem::new(Some("tacos"), "Tacos Poulet", Some("Served with a mini BURGER sauce")),
            MenuItem::new(Some("drinks"), "Mojito", None),
            MenuItem::new(None, "Plat du jour", Some("Ask the chef")),
        ]
    }

    #[test]
    fn test_all_shows_everything() {
        let items = menu();
        let visible = filter_by_category(&items, &CategoryFilter::from_tag("all"));
        assert!(visible.iter().all(|v| *v));
    }

    #[test]
    fn test_tag_hides_other_categories() {
        let items = menu();
        let visible = filter_by_category(&items, &CategoryFilter::from_tag("tacos"));
        assert_eq!(visible, vec![false, true, false, false]);
    }

    #[test]
    fn test_all_after_tag_restores_everything() {
        let items = menu();
        let _ = filter_by_category(&items, &CategoryFilter::from_tag("drinks"));
        let visible = filter_by_category(&items, &CategoryFilter::All);
        assert_eq!(visible, vec![true; 4]);
    }

    #[test]
    fn test_empty_search_shows_all() {
        let items = menu();
        assert_eq!(search(&items, ""), vec![true; 4]);
        assert_eq!(search(&items, "   "), vec![true; 4]);
    }

    #[test]
    fn test_search_title_and_description_case_insensitive() {
        let items = menu();
        assert_eq!(search(&items, "burger"), vec![true, true, false, false]);
        assert_eq!(search(&items, "  MOJITO "), vec![false, false, true, false]);
    }

    #[test]
    fn test_search_without_description() {
        let items = menu();
        assert_eq!(search(&items, "chef"), vec![false, false, false, true]);
    }
}
