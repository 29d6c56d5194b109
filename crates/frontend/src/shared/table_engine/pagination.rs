/// Numbered page links shown before the ellipsis
pub const VISIBLE_PAGE_LINKS: usize = 3;

/// One entry of the pagination bar between "previous" and "next"
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageLink {
    /// Zero-based page index
    Page(usize),
    Ellipsis,
}

/// First pages, then an ellipsis and the last page when there are more
pub fn page_links(page_count: usize) -> Vec<PageLink> {
    let mut links: Vec<PageLink> = (0..page_count.min(VISIBLE_PAGE_LINKS))
        .map(PageLink::Page)
        .collect();
    if page_count > VISIBLE_PAGE_LINKS {
        links.push(PageLink::Ellipsis);
        links.push(PageLink::Page(page_count - 1));
    }
    links
}

/// `ceil(total / page_size)`
pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        0
    } else {
        total.div_ceil(page_size)
    }
}
