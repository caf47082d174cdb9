use crate::db::EmailSummary;
use crate::email::Category;

/// Category selection on the list. `All` disables category filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => *wanted == category,
        }
    }

    /// Chip text: `All`, or the category's short label.
    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(category) => category.short_label(),
        }
    }
}

/// The filter chips in display order: `All` followed by every category.
pub fn filter_chips() -> Vec<CategoryFilter> {
    std::iter::once(CategoryFilter::All)
        .chain(Category::ALL.into_iter().map(CategoryFilter::Only))
        .collect()
}

/// Search text plus category selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmailFilter {
    pub query: String,
    pub category: CategoryFilter,
}

impl EmailFilter {
    /// Case-insensitive substring match of the query against subject,
    /// sender, summary and sender address, combined with the category
    /// selection. An empty query matches everything.
    pub fn matches(&self, email: &EmailSummary) -> bool {
        self.category.matches(email.category) && self.matches_query(email)
    }

    fn matches_query(&self, email: &EmailSummary) -> bool {
        if self.query.is_empty() {
            return true;
        }
        let needle = self.query.to_lowercase();
        [
            &email.subject,
            &email.sender,
            &email.summary,
            &email.sender_email,
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
    }

    pub fn apply<'a>(&self, emails: &'a [EmailSummary]) -> Vec<&'a EmailSummary> {
        emails.iter().filter(|email| self.matches(email)).collect()
    }
}
