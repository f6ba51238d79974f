//! Member Content
//!
//! The dashboard content list and its free/premium split. The split is
//! positional: the first [`FREE_PREVIEW_COUNT`] items are the free preview,
//! everything after is premium. No per-item flag decides this.

/// Number of leading content items visible to free users
pub const FREE_PREVIEW_COUNT: usize = 2;

/// A single dashboard content card
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContentItem {
    pub title: &'static str,
    pub description: &'static str,
    /// Symbolic icon name resolved by the icon component
    pub icon: &'static str,
    /// Card CTA label; `None` uses the default
    pub cta: Option<&'static str>,
}

impl ContentItem {
    /// CTA label with the default applied
    pub fn cta_label(&self) -> &'static str {
        self.cta.unwrap_or("Access Now")
    }
}

/// Split the content list into (free, premium) subsequences.
///
/// Order-preserving and total: short lists yield a short free preview and an
/// empty premium set rather than panicking.
pub fn partition_content(items: &[ContentItem]) -> (&[ContentItem], &[ContentItem]) {
    items.split_at(items.len().min(FREE_PREVIEW_COUNT))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SITE;

    fn item(title: &'static str) -> ContentItem {
        ContentItem {
            title,
            description: "",
            icon: "check",
            cta: None,
        }
    }

    #[test]
    fn test_partition_lengths() {
        for len in 0..6 {
            let items: Vec<ContentItem> = (0..len).map(|_| item("x")).collect();
            let (free, premium) = partition_content(&items);
            assert_eq!(free.len(), len.min(FREE_PREVIEW_COUNT));
            assert_eq!(premium.len(), len.saturating_sub(FREE_PREVIEW_COUNT));
        }
    }

    #[test]
    fn test_partition_preserves_order_and_disjointness() {
        let items = [item("a"), item("b"), item("c"), item("d")];
        let (free, premium) = partition_content(&items);
        assert_eq!(
            free.iter().map(|i| i.title).collect::<Vec<_>>(),
            ["a", "b"]
        );
        assert_eq!(
            premium.iter().map(|i| i.title).collect::<Vec<_>>(),
            ["c", "d"]
        );
    }

    #[test]
    fn test_partition_empty_and_short_input() {
        let (free, premium) = partition_content(&[]);
        assert!(free.is_empty());
        assert!(premium.is_empty());

        let one = [item("only")];
        let (free, premium) = partition_content(&one);
        assert_eq!(free.len(), 1);
        assert!(premium.is_empty());
    }

    #[test]
    fn test_configured_content_has_premium_remainder() {
        let (free, premium) = partition_content(SITE.member_content);
        assert_eq!(free.len(), FREE_PREVIEW_COUNT);
        assert_eq!(
            free.len() + premium.len(),
            SITE.member_content.len()
        );
    }

    #[test]
    fn test_cta_label_default() {
        assert_eq!(item("x").cta_label(), "Access Now");
        let with_cta = ContentItem {
            cta: Some("Watch Now"),
            ..item("y")
        };
        assert_eq!(with_cta.cta_label(), "Watch Now");
    }
}
