use super::Tab;

/// Where a moved tab lands in its destination sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Front,
    Back,
}

/// Result of [`move_tab`]: the rewritten sequences and whether a tab moved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabMove {
    pub source: Vec<Tab>,
    pub dest: Vec<Tab>,
    pub moved: bool,
}

/// Move the first tab in `source` whose value equals `value` into `dest`.
///
/// Only the first match moves; later duplicates stay where they are. When
/// nothing matches both sequences come back unchanged with `moved == false`.
pub fn move_tab(mut source: Vec<Tab>, mut dest: Vec<Tab>, value: &str, placement: Placement) -> TabMove {
    let Some(index) = source.iter().position(|tab| tab.value == value) else {
        return TabMove {
            source,
            dest,
            moved: false,
        };
    };

    let tab = source.remove(index);
    match placement {
        Placement::Front => dest.insert(0, tab),
        Placement::Back => dest.push(tab),
    }

    TabMove {
        source,
        dest,
        moved: true,
    }
}

/// Flag the tab matching `category` as active and clear every other flag.
///
/// An unknown category leaves no tab active.
pub fn mark_active(tabs: Vec<Tab>, category: &str) -> Vec<Tab> {
    tabs.into_iter()
        .map(|mut tab| {
            tab.active = tab.value == category;
            tab
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tabs::{default_menu_tabs, default_other_menu_tabs};
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn values(tabs: &[Tab]) -> Vec<&str> {
        tabs.iter().map(|t| t.value.as_str()).collect()
    }

    #[test]
    fn test_move_to_front() {
        let result = move_tab(
            default_menu_tabs(),
            default_other_menu_tabs(),
            "tiyu",
            Placement::Front,
        );

        assert!(result.moved);
        assert_eq!(result.source.len(), 8);
        assert!(!values(&result.source).contains(&"tiyu"));
        assert_eq!(
            values(&result.dest),
            vec!["tiyu", "shipin", "keji", "caijing", "dongman"]
        );
    }

    #[test]
    fn test_move_to_back() {
        let result = move_tab(
            default_other_menu_tabs(),
            default_menu_tabs(),
            "keji",
            Placement::Back,
        );

        assert!(result.moved);
        assert_eq!(values(&result.source), vec!["shipin", "caijing", "dongman"]);
        assert_eq!(result.dest.last().map(|t| t.value.as_str()), Some("keji"));
        assert_eq!(result.dest.len(), 10);
    }

    #[test]
    fn test_move_unknown_value_is_noop() {
        let result = move_tab(
            default_menu_tabs(),
            default_other_menu_tabs(),
            "nope",
            Placement::Front,
        );

        assert!(!result.moved);
        assert_eq!(result.source, default_menu_tabs());
        assert_eq!(result.dest, default_other_menu_tabs());
    }

    #[test]
    fn test_move_first_duplicate_only() {
        let source = vec![Tab::new("A", "dup"), Tab::new("B", "x"), Tab::new("C", "dup")];
        let result = move_tab(source, Vec::new(), "dup", Placement::Back);

        assert_eq!(values(&result.source), vec!["x", "dup"]);
        assert_eq!(result.source[1].text, "C");
        assert_eq!(result.dest[0].text, "A");
    }

    #[test]
    fn test_moved_tab_keeps_its_fields() {
        let mut source = default_menu_tabs();
        source[1].active = true;
        let result = move_tab(source, Vec::new(), "yule", Placement::Front);

        assert_eq!(result.dest[0].text, "娱乐");
        assert!(result.dest[0].active);
    }

    #[test]
    fn test_mark_active_single() {
        let tabs = mark_active(default_menu_tabs(), "junshi");
        let active: Vec<&str> = tabs.iter().filter(|t| t.active).map(|t| t.value.as_str()).collect();
        assert_eq!(active, vec!["junshi"]);

        let tabs = mark_active(tabs, "remen");
        let active: Vec<&str> = tabs.iter().filter(|t| t.active).map(|t| t.value.as_str()).collect();
        assert_eq!(active, vec!["remen"]);
    }

    #[test]
    fn test_mark_active_unknown_clears_all() {
        let tabs = mark_active(mark_active(default_menu_tabs(), "tiyu"), "keji");
        assert!(tabs.iter().all(|t| !t.active));
    }

    fn seed_values() -> Vec<String> {
        default_menu_tabs()
            .into_iter()
            .chain(default_other_menu_tabs())
            .map(|t| t.value)
            .collect()
    }

    proptest! {
        #[test]
        fn prop_every_seed_value_lives_in_exactly_one_sequence(
            ops in proptest::collection::vec((any::<bool>(), 0usize..15), 0..64)
        ) {
            let seeds = seed_values();
            let mut menu = default_menu_tabs();
            let mut other = default_other_menu_tabs();

            for (to_overflow, pick) in ops {
                // Indices past the seed list exercise the no-match path.
                let value = seeds.get(pick).cloned().unwrap_or_else(|| "unknown".to_string());
                if to_overflow {
                    let m = move_tab(menu, other, &value, Placement::Front);
                    menu = m.source;
                    other = m.dest;
                } else {
                    let m = move_tab(other, menu, &value, Placement::Back);
                    other = m.source;
                    menu = m.dest;
                }
            }

            for value in &seeds {
                let in_menu = menu.iter().filter(|t| &t.value == value).count();
                let in_other = other.iter().filter(|t| &t.value == value).count();
                prop_assert_eq!(in_menu + in_other, 1);
            }
            prop_assert_eq!(menu.len() + other.len(), seeds.len());
        }
    }
}
