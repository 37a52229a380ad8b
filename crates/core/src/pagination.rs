//! Pure pagination strip logic for the post detail page.

use serde::Serialize;

/// Highest post id served by the remote dataset.
pub const MAX_POST_ID: u64 = 100;

/// Number of neighbouring ids shown on each side of the current post.
const NEIGHBOURS: u64 = 3;

/// A single link in the pagination strip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageLink {
    pub id: u64,
    pub href: String,
    /// True for the post currently displayed.
    pub current: bool,
}

impl PageLink {
    fn new(id: u64, current: bool) -> Self {
        Self {
            id,
            href: format!("/posts/{id}"),
            current,
        }
    }
}

/// Returns the links surrounding `post_id`, in ascending order.
///
/// Ids below 1 or above `last_id` are omitted.
pub fn pagination_window(post_id: u64, last_id: u64) -> Vec<PageLink> {
    let first = post_id.saturating_sub(NEIGHBOURS).max(1);
    let last = post_id.saturating_add(NEIGHBOURS).min(last_id);

    let mut links: Vec<PageLink> = (first..post_id)
        .filter(|id| *id <= last_id)
        .map(|id| PageLink::new(id, false))
        .collect();
    links.push(PageLink::new(post_id, true));
    if let Some(next) = post_id.checked_add(1) {
        links.extend((next..=last).map(|id| PageLink::new(id, false)));
    }
    links
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(links: &[PageLink]) -> Vec<u64> {
        links.iter().map(|l| l.id).collect()
    }

    #[test]
    fn test_window_in_the_middle() {
        let links = pagination_window(5, MAX_POST_ID);
        assert_eq!(ids(&links), vec![2, 3, 4, 5, 6, 7, 8]);

        let current: Vec<u64> = links.iter().filter(|l| l.current).map(|l| l.id).collect();
        assert_eq!(current, vec![5]);
    }

    #[test]
    fn test_window_omits_ids_below_one() {
        assert_eq!(ids(&pagination_window(1, MAX_POST_ID)), vec![1, 2, 3, 4]);
        assert_eq!(ids(&pagination_window(2, MAX_POST_ID)), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_window_omits_ids_above_last() {
        assert_eq!(ids(&pagination_window(100, MAX_POST_ID)), vec![97, 98, 99, 100]);
        assert_eq!(
            ids(&pagination_window(99, MAX_POST_ID)),
            vec![96, 97, 98, 99, 100]
        );
    }

    #[test]
    fn test_links_point_at_post_pages() {
        let links = pagination_window(10, MAX_POST_ID);
        assert_eq!(links[0].href, "/posts/7");
        assert_eq!(links[3].href, "/posts/10");
    }

    #[test]
    fn test_current_is_kept_beyond_last_id() {
        // An out-of-range page still shows itself, with no neighbours.
        assert_eq!(ids(&pagination_window(150, MAX_POST_ID)), vec![150]);
        assert_eq!(ids(&pagination_window(102, MAX_POST_ID)), vec![99, 100, 102]);
    }

    #[test]
    fn test_largest_id_does_not_overflow() {
        assert_eq!(ids(&pagination_window(u64::MAX, MAX_POST_ID)), vec![u64::MAX]);
        assert_eq!(ids(&pagination_window(u64::MAX, u64::MAX)).len(), 4);
    }
}
