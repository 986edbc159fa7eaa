//! Citation aggregation: group raw citations by source, merge pages.

use serde::{Deserialize, Serialize};

use crate::turn::Citation;

/// Citations merged by source id, pages combined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregatedCitation {
    pub source_id: String,
    /// Sorted ascending, unique.
    pub pages: Vec<u32>,
}

impl AggregatedCitation {
    /// Reference link to the source document, deep-linking to the first
    /// cited page when one exists.
    pub fn reference_link(&self, docs_base: &str) -> String {
        let base = docs_base.trim_end_matches('/');
        match self.pages.first() {
            Some(page) => format!("{}/{}#page={}", base, self.source_id, page),
            None => format!("{}/{}", base, self.source_id),
        }
    }
}

/// Group citations by `source_id` in first-seen order. Pages are merged,
/// de-duplicated, and sorted; citations with an empty source id are dropped.
/// Pure function.
pub fn aggregate(citations: &[Citation]) -> Vec<AggregatedCitation> {
    let mut groups: Vec<AggregatedCitation> = Vec::new();
    for citation in citations {
        if citation.source_id.trim().is_empty() {
            continue;
        }
        match groups
            .iter_mut()
            .find(|g| g.source_id == citation.source_id)
        {
            Some(group) => {
                if let Some(page) = citation.page {
                    if !group.pages.contains(&page) {
                        group.pages.push(page);
                    }
                }
            }
            None => groups.push(AggregatedCitation {
                source_id: citation.source_id.clone(),
                pages: citation.page.into_iter().collect(),
            }),
        }
    }
    for group in &mut groups {
        group.pages.sort_unstable();
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_source_pages_merge() {
        let groups = aggregate(&[
            Citation::new("a.pdf").with_page(2),
            Citation::new("a.pdf").with_page(5),
        ]);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].source_id, "a.pdf");
        assert_eq!(groups[0].pages, vec![2, 5]);
    }

    #[test]
    fn pages_sorted_and_deduped() {
        let groups = aggregate(&[
            Citation::new("a.pdf").with_page(9),
            Citation::new("a.pdf").with_page(2),
            Citation::new("a.pdf").with_page(9),
        ]);
        assert_eq!(groups[0].pages, vec![2, 9]);
    }

    #[test]
    fn first_seen_order_preserved() {
        let groups = aggregate(&[
            Citation::new("b.pdf"),
            Citation::new("a.pdf"),
            Citation::new("b.pdf").with_page(1),
        ]);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].source_id, "b.pdf");
        assert_eq!(groups[1].source_id, "a.pdf");
    }

    #[test]
    fn empty_source_dropped() {
        let groups = aggregate(&[
            Citation::new(""),
            Citation::new("  "),
            Citation::new("a.pdf"),
        ]);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].source_id, "a.pdf");
    }

    #[test]
    fn pageless_citation_contributes_no_pages() {
        let groups = aggregate(&[
            Citation::new("a.pdf"),
            Citation::new("a.pdf").with_page(4),
            Citation::new("a.pdf"),
        ]);
        assert_eq!(groups[0].pages, vec![4]);
    }

    #[test]
    fn group_count_bounded_by_distinct_sources() {
        let input = vec![
            Citation::new("a.pdf").with_page(1),
            Citation::new("b.pdf").with_page(1),
            Citation::new("a.pdf").with_page(2),
            Citation::new(""),
        ];
        let groups = aggregate(&input);
        assert!(groups.len() <= 2);
    }

    #[test]
    fn empty_input_empty_output() {
        assert!(aggregate(&[]).is_empty());
    }

    #[test]
    fn reference_link_with_page() {
        let group = AggregatedCitation {
            source_id: "faq.pdf".to_string(),
            pages: vec![2, 5],
        };
        assert_eq!(
            group.reference_link("https://docs.example/"),
            "https://docs.example/faq.pdf#page=2"
        );
    }

    #[test]
    fn reference_link_without_page() {
        let group = AggregatedCitation {
            source_id: "faq.pdf".to_string(),
            pages: vec![],
        };
        assert_eq!(
            group.reference_link("https://docs.example"),
            "https://docs.example/faq.pdf"
        );
    }
}
