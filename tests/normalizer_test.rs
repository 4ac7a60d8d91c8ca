//! Category normalizer behaviour on hand-built marker streams.

use std::collections::HashSet;

use bookmark_pages::{normalize, BookmarkNode, Category, Level, Link, Options};
use proptest::prelude::*;

fn run(markers: Vec<BookmarkNode>) -> Vec<Category> {
    normalize(markers, &Options::default())
}

/// Characters an anchor may contain after derivation.
fn is_fragment_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-' || ('\u{4e00}'..='\u{9fff}').contains(&c)
}

#[test]
fn fragment_chars_cover_ascii_and_cjk_only() {
    assert!("rust-工具_2".chars().all(is_fragment_char));
    assert!(!is_fragment_char('A'));
    assert!(!is_fragment_char(' '));
    assert!(!is_fragment_char('!'));
}

#[test]
fn work_and_tools_form_primary_and_secondary() {
    let categories = run(vec![
        BookmarkNode::category("Work", 1),
        BookmarkNode::link("Site A", "http://a"),
        BookmarkNode::category("Tools", 2),
        BookmarkNode::link("Site B", "http://b"),
    ]);

    assert_eq!(categories.len(), 2);

    assert_eq!(categories[0].title, "Work");
    assert_eq!(categories[0].unique_id, "Work");
    assert_eq!(categories[0].level, Level::Primary);
    assert_eq!(categories[0].links, vec![Link::new("Site A", "http://a")]);

    assert_eq!(categories[1].title, "Tools");
    assert_eq!(categories[1].unique_id, "Work-Tools");
    assert_eq!(categories[1].level, Level::Secondary);
    assert_eq!(categories[1].links, vec![Link::new("Site B", "http://b")]);
}

#[test]
fn repeated_category_drops_following_links() {
    let categories = run(vec![
        BookmarkNode::category("Work", 1),
        BookmarkNode::category("Work", 1),
        BookmarkNode::link("X", "http://x"),
    ]);

    assert_eq!(categories.len(), 1);
    assert_eq!(categories[0].title, "Work");
    assert!(categories[0].links.is_empty());
}

#[test]
fn root_label_is_skipped() {
    let categories = run(vec![
        BookmarkNode::category("Bookmarks", 1),
        BookmarkNode::category("News", 1),
        BookmarkNode::link("Y", "http://y"),
    ]);

    assert_eq!(categories.len(), 1);
    assert_eq!(categories[0].title, "News");
    assert_eq!(categories[0].links, vec![Link::new("Y", "http://y")]);
}

#[test]
fn duplicate_link_is_kept_once() {
    let categories = run(vec![
        BookmarkNode::category("Misc", 1),
        BookmarkNode::link("Z", "http://z"),
        BookmarkNode::link("Z", "http://z"),
    ]);

    assert_eq!(categories[0].links, vec![Link::new("Z", "http://z")]);
}

#[test]
fn same_href_with_different_text_is_not_a_duplicate() {
    let categories = run(vec![
        BookmarkNode::category("Misc", 1),
        BookmarkNode::link("Z", "http://z"),
        BookmarkNode::link("Zed", "http://z"),
        BookmarkNode::link("Z", "http://z/"),
    ]);

    assert_eq!(categories[0].links.len(), 3);
}

#[test]
fn root_label_matching_ignores_case() {
    for title in ["Bookmarks", "BOOKMARKS", "bookmarks", "BookMarks"] {
        let categories = run(vec![BookmarkNode::category(title, 1)]);
        assert!(categories.is_empty(), "{title} produced a category");
    }
}

#[test]
fn secondary_ids_use_nearest_primary() {
    let categories = run(vec![
        BookmarkNode::category("A", 1),
        BookmarkNode::category("x", 2),
        BookmarkNode::category("B", 1),
        BookmarkNode::category("x", 3),
    ]);

    let ids: Vec<&str> = categories.iter().map(|c| c.unique_id.as_str()).collect();
    assert_eq!(ids, vec!["A", "A-x", "B", "B-x"]);
}

#[test]
fn secondary_key_can_collide_with_primary_title() {
    // "Work-Tools" as a primary title and as a derived key are the same key.
    let categories = run(vec![
        BookmarkNode::category("Work-Tools", 1),
        BookmarkNode::category("Work", 1),
        BookmarkNode::category("Tools", 2),
        BookmarkNode::link("lost", "http://lost"),
    ]);

    let ids: Vec<&str> = categories.iter().map(|c| c.unique_id.as_str()).collect();
    assert_eq!(ids, vec!["Work-Tools", "Work"]);
    assert!(categories.iter().all(|c| c.links.is_empty()));
}

// === Properties ===

fn marker_strategy() -> impl Strategy<Value = BookmarkNode> {
    let title = prop_oneof![
        Just("Work".to_string()),
        Just("work".to_string()),
        Just("A B".to_string()),
        Just("A-B".to_string()),
        Just("Bookmarks".to_string()),
        Just("收藏夹".to_string()),
        Just("开发 工具".to_string()),
        Just("!!".to_string()),
        Just(" ".to_string()),
        "[a-zA-Z -]{0,6}",
    ];
    let text = prop_oneof![Just("Z".to_string()), Just("Y".to_string()), "[a-z]{1,3}"];
    let href = prop_oneof![Just("http://z".to_string()), Just("http://y".to_string()), "http://[a-z]{1,3}"];

    prop_oneof![
        (title, 1usize..4).prop_map(|(t, d)| BookmarkNode::category(t, d)),
        (text, href).prop_map(|(t, h)| BookmarkNode::link(t, h)),
    ]
}

proptest! {
    #[test]
    fn normalize_is_deterministic(markers in prop::collection::vec(marker_strategy(), 0..40)) {
        let first = run(markers.clone());
        let second = run(markers);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn unique_ids_and_anchors_never_repeat(markers in prop::collection::vec(marker_strategy(), 0..40)) {
        let categories = run(markers);

        let ids: HashSet<&str> = categories.iter().map(|c| c.unique_id.as_str()).collect();
        let anchors: HashSet<&str> = categories.iter().map(|c| c.anchor.as_str()).collect();
        prop_assert_eq!(ids.len(), categories.len());
        prop_assert_eq!(anchors.len(), categories.len());
    }

    #[test]
    fn anchors_are_fragment_safe(markers in prop::collection::vec(marker_strategy(), 0..40)) {
        for category in run(markers) {
            prop_assert!(!category.anchor.is_empty());
            prop_assert!(!category.anchor.starts_with('-') && !category.anchor.ends_with('-'));
            prop_assert!(
                category.anchor.chars().all(is_fragment_char),
                "unexpected character in anchor {:?}",
                category.anchor
            );
        }
    }

    #[test]
    fn links_are_unique_in_first_seen_order(markers in prop::collection::vec(marker_strategy(), 0..40)) {
        for category in run(markers) {
            let mut seen = HashSet::new();
            for link in &category.links {
                prop_assert!(seen.insert((link.text.clone(), link.href.clone())));
            }
        }
    }

    #[test]
    fn levels_follow_depth(markers in prop::collection::vec(marker_strategy(), 0..40)) {
        let depth_one: HashSet<String> = markers
            .iter()
            .filter_map(|m| match m {
                BookmarkNode::Category { title, depth: 1 } => Some(title.trim().to_string()),
                _ => None,
            })
            .collect();

        for category in run(markers) {
            if category.level == Level::Primary {
                prop_assert!(depth_one.contains(&category.title));
                prop_assert_eq!(&category.unique_id, &category.title);
            }
        }
    }

    #[test]
    fn root_labels_never_materialize(markers in prop::collection::vec(marker_strategy(), 0..40)) {
        for category in run(markers) {
            prop_assert!(!category.title.eq_ignore_ascii_case("bookmarks"));
            prop_assert_ne!(category.title.as_str(), "收藏夹");
            prop_assert!(!category.title.is_empty());
        }
    }
}
