use super::Tab;

/// Category selected when nothing else has been chosen ("hot").
pub const DEFAULT_CATEGORY: &str = "remen";

const MENU_TABS: &[(&str, &str)] = &[
    ("热点", DEFAULT_CATEGORY),
    ("娱乐", "yule"),
    ("体育", "tiyu"),
    ("军事", "junshi"),
    ("社会", "shehui"),
    ("汽车", "qiche"),
    ("国内", "guonei"),
    ("国际", "guoji"),
    ("美女", "meinv"),
];

const OTHER_MENU_TABS: &[(&str, &str)] = &[
    ("视频", "shipin"),
    ("科技", "keji"),
    ("财经", "caijing"),
    ("动漫", "dongman"),
];

fn build(seed: &[(&str, &str)]) -> Vec<Tab> {
    seed.iter().map(|(text, value)| Tab::new(*text, *value)).collect()
}

/// Visible tabs used when nothing usable is persisted.
pub fn default_menu_tabs() -> Vec<Tab> {
    build(MENU_TABS)
}

/// Overflow tabs used when nothing usable is persisted.
pub fn default_other_menu_tabs() -> Vec<Tab> {
    build(OTHER_MENU_TABS)
}
