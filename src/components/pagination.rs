use crate::api::Pagination as PageInfo;
use crate::components::{Icon, ListingRoute};
use dioxus::prelude::*;

const MAX_VISIBLE_PAGES: u32 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSlot {
    Page(u32),
    Gap,
}

/// Page buttons to render: everything up to seven pages, otherwise the first
/// and last page around a window of the current one, with gaps between.
pub fn page_numbers(current: u32, total: u32) -> Vec<PageSlot> {
    let total = total.max(1);
    let current = current.clamp(1, total);

    if total <= MAX_VISIBLE_PAGES {
        return (1..=total).map(PageSlot::Page).collect();
    }

    let mut start = current.saturating_sub(2).max(2);
    let mut end = (current + 2).min(total - 1);
    if current <= 3 {
        end = 5;
    }
    if current >= total - 2 {
        start = total - 4;
    }

    let mut slots = vec![PageSlot::Page(1)];
    if start > 2 {
        slots.push(PageSlot::Gap);
    }
    slots.extend((start..=end).map(PageSlot::Page));
    if end < total - 1 {
        slots.push(PageSlot::Gap);
    }
    slots.push(PageSlot::Page(total));
    slots
}

const NAV_ENABLED: &str = "h-10 px-3 sm:px-4 flex items-center gap-2 rounded-lg font-medium text-sm bg-gray-800 text-gray-300 hover:bg-gray-700 hover:text-white transition-colors";
const NAV_DISABLED: &str = "h-10 px-3 sm:px-4 flex items-center gap-2 rounded-lg font-medium text-sm bg-gray-800/50 text-gray-500 cursor-not-allowed pointer-events-none";

#[component]
pub fn Pagination(info: PageInfo, route: ListingRoute) -> Element {
    let total = info.total_pages.max(1);
    let current = info.current_page.clamp(1, total);
    if total <= 1 {
        return rsx! {};
    }

    let has_prev = info.has_prev_page || current > 1;
    let has_next = info.has_next_page || current < total;
    let prev_page = current.saturating_sub(1).max(1);
    let next_page = (current + 1).min(total);

    rsx! {
        nav {
            class: "flex flex-wrap items-center justify-center gap-2 mt-10",
            aria_label: "Pagination",
            PageNavLink {
                to: route.page(1),
                enabled: current > 2,
                label: "First",
                icon: "chevrons-left",
                icon_first: true,
            }
            PageNavLink {
                to: route.page(prev_page),
                enabled: has_prev,
                label: "Prev",
                icon: "chevron-left",
                icon_first: true,
            }

            div { class: "hidden sm:flex items-center gap-2",
                for (index, slot) in page_numbers(current, total).into_iter().enumerate() {
                    {match slot {
                        PageSlot::Gap => rsx! {
                            span {
                                key: "gap-{index}",
                                class: "min-w-[42px] h-10 flex items-center justify-center text-gray-500",
                                "..."
                            }
                        },
                        PageSlot::Page(page) if page == current => rsx! {
                            span {
                                key: "{page}",
                                class: "min-w-[42px] h-10 flex items-center justify-center rounded-lg text-sm font-medium bg-red-600 text-white shadow-lg shadow-red-500/20",
                                aria_current: "page",
                                "{page}"
                            }
                        },
                        PageSlot::Page(page) => rsx! {
                            Link {
                                key: "{page}",
                                to: route.page(page),
                                class: "min-w-[42px] h-10 flex items-center justify-center rounded-lg text-sm font-medium bg-gray-800 text-gray-300 hover:bg-gray-700 hover:text-white transition-colors",
                                "{page}"
                            }
                        },
                    }}
                }
            }

            span { class: "sm:hidden px-4 py-2 bg-gray-800 rounded-lg text-sm text-white",
                "{current} "
                span { class: "text-gray-400", "/ {total}" }
            }

            PageNavLink {
                to: route.page(next_page),
                enabled: has_next,
                label: "Next",
                icon: "chevron-right",
                icon_first: false,
            }
            PageNavLink {
                to: route.page(total),
                enabled: current + 1 < total,
                label: "Last",
                icon: "chevrons-right",
                icon_first: false,
            }
        }
    }
}

#[component]
fn PageNavLink(
    to: crate::components::AppView,
    enabled: bool,
    label: &'static str,
    icon: &'static str,
    icon_first: bool,
) -> Element {
    let icon = rsx! {
        Icon { name: icon.to_string(), class: "w-4 h-4".to_string() }
    };
    let text = rsx! {
        span { class: "hidden sm:inline", "{label}" }
    };

    if !enabled {
        return rsx! {
            span { class: NAV_DISABLED, aria_disabled: "true",
                if icon_first { {icon} {text} } else { {text} {icon} }
            }
        };
    }

    rsx! {
        Link { to, class: NAV_ENABLED,
            if icon_first { {icon} {text} } else { {text} {icon} }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageSlot::{Gap, Page};

    #[test]
    fn short_ranges_show_every_page() {
        assert_eq!(page_numbers(1, 1), vec![Page(1)]);
        assert_eq!(page_numbers(3, 7), (1..=7).map(Page).collect::<Vec<_>>());
    }

    #[test]
    fn window_near_the_start() {
        assert_eq!(
            page_numbers(1, 20),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Gap, Page(20)]
        );
    }

    #[test]
    fn window_in_the_middle() {
        assert_eq!(
            page_numbers(10, 20),
            vec![Page(1), Gap, Page(8), Page(9), Page(10), Page(11), Page(12), Gap, Page(20)]
        );
    }

    #[test]
    fn window_near_the_end() {
        assert_eq!(
            page_numbers(20, 20),
            vec![Page(1), Gap, Page(16), Page(17), Page(18), Page(19), Page(20)]
        );
    }

    #[test]
    fn out_of_range_pages_are_clamped() {
        assert_eq!(page_numbers(0, 3), vec![Page(1), Page(2), Page(3)]);
        assert_eq!(page_numbers(99, 8).last(), Some(&Page(8)));
    }
}
