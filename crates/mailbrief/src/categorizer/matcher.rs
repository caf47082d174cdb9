use crate::email::Category;

/// A set of keywords that, when any is found in a subject, assigns a category.
#[derive(Debug, Clone)]
pub struct KeywordRule {
    pub category: Category,
    pub keywords: &'static [&'static str],
}

/// Ordered keyword rules. The first rule with a matching keyword wins.
const DEFAULT_RULES: &[KeywordRule] = &[
    KeywordRule {
        category: Category::Meeting,
        keywords: &["meeting", "schedule"],
    },
    KeywordRule {
        category: Category::Invoice,
        keywords: &["invoice", "payment", "bill"],
    },
    KeywordRule {
        category: Category::SupportRequest,
        keywords: &["urgent", "issue", "problem"],
    },
    KeywordRule {
        category: Category::Newsletter,
        keywords: &["newsletter", "digest", "week in"],
    },
    KeywordRule {
        category: Category::Announcement,
        keywords: &["announcement", "important", "maintenance"],
    },
    KeywordRule {
        category: Category::Personal,
        keywords: &["job", "deliverable", "project"],
    },
];

pub struct Categorizer {
    rules: Vec<KeywordRule>,
    default_category: Category,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorizationResult {
    /// Index of the matching rule, `None` when the default applied.
    pub rule_index: Option<usize>,
    /// The keyword that triggered the match.
    pub keyword: Option<&'static str>,
    pub category: Category,
}

impl Default for Categorizer {
    fn default() -> Self {
        Self::new(DEFAULT_RULES.to_vec(), Category::Other)
    }
}

impl Categorizer {
    /// Rules are evaluated in the given order; keywords must be lower-case.
    pub fn new(rules: Vec<KeywordRule>, default_category: Category) -> Self {
        Self {
            rules,
            default_category,
        }
    }

    pub fn rules(&self) -> &[KeywordRule] {
        &self.rules
    }

    /// Classifies a subject line. Total: always yields exactly one category.
    pub fn categorize(&self, subject: &str) -> CategorizationResult {
        let subject = subject.to_lowercase();

        for (index, rule) in self.rules.iter().enumerate() {
            if let Some(keyword) = rule.keywords.iter().copied().find(|k| subject.contains(k)) {
                return CategorizationResult {
                    rule_index: Some(index),
                    keyword: Some(keyword),
                    category: rule.category,
                };
            }
        }

        CategorizationResult {
            rule_index: None,
            keyword: None,
            category: self.default_category,
        }
    }
}
