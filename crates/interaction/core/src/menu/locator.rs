//! Two-tier lookup of a menu entry's clickable region.
//!
//! The structured UI tree gives exact bounds and is tried first. When it is
//! absent, hidden, or has no matching label, the raw entry list is used and the
//! row position is estimated from the menu anchor and a fixed row height. The
//! estimate ignores wrapped or variable-height rows.
use strum::Display;

use crate::env::{MenuOracle, MenuWidget};
use crate::geometry::Hitbox;

use super::entries::MenuEntryView;
use super::query::MenuQuery;
use super::text::{MatchPolicy, normalize};

/// Fixed vertical layout of the contextual menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MenuLayout {
    /// Pixels between the menu anchor and the first row.
    pub header_offset: i32,
    pub row_height: i32,
}

impl MenuLayout {
    pub const HEADER_OFFSET: i32 = 19;
    pub const ROW_HEIGHT: i32 = 15;
}

impl Default for MenuLayout {
    fn default() -> Self {
        Self {
            header_offset: Self::HEADER_OFFSET,
            row_height: Self::ROW_HEIGHT,
        }
    }
}

/// Which tier produced a located entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum LocateTier {
    /// Bounds read from the menu UI tree.
    Widget,
    /// Bounds estimated from the raw entry list.
    Estimated,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LocatedEntry {
    pub hitbox: Hitbox,
    pub tier: LocateTier,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct MenuEntryLocator {
    policy: MatchPolicy,
    layout: MenuLayout,
}

impl MenuEntryLocator {
    pub fn new(policy: MatchPolicy, layout: MenuLayout) -> Self {
        Self { policy, layout }
    }

    pub fn policy(&self) -> MatchPolicy {
        self.policy
    }

    /// Finds the open menu's entry for `query`. Reads live state on every call.
    pub fn locate<O>(&self, oracle: &O, query: &MenuQuery) -> Option<LocatedEntry>
    where
        O: MenuOracle + ?Sized,
    {
        if query.is_empty() {
            return None;
        }

        if let Some(root) = oracle.menu_widget()
            && !root.hidden
            && let Some(hitbox) = self.scan_widget(&root, query)
        {
            tracing::trace!("located '{}' in menu widget at {}", query, hitbox);
            return Some(LocatedEntry {
                hitbox,
                tier: LocateTier::Widget,
            });
        }

        let hitbox = self.estimate_from_entries(oracle, query)?;
        tracing::trace!("estimated '{}' from menu entries at {}", query, hitbox);
        Some(LocatedEntry {
            hitbox,
            tier: LocateTier::Estimated,
        })
    }

    /// Scans the root's children and, for each child, its own children.
    fn scan_widget(&self, root: &MenuWidget, query: &MenuQuery) -> Option<Hitbox> {
        for child in root.visible_children() {
            if let Some(hitbox) = self.match_node(child, query) {
                return Some(hitbox);
            }
            for nested in child.visible_children() {
                if let Some(hitbox) = self.match_node(nested, query) {
                    return Some(hitbox);
                }
            }
        }
        None
    }

    fn match_node(&self, node: &MenuWidget, query: &MenuQuery) -> Option<Hitbox> {
        let label = normalize(node.text.as_deref()?);
        if !query.matches_label(self.policy, &label) {
            return None;
        }
        node.bounds.filter(Hitbox::has_area)
    }

    fn estimate_from_entries<O>(&self, oracle: &O, query: &MenuQuery) -> Option<Hitbox>
    where
        O: MenuOracle + ?Sized,
    {
        let geometry = oracle.menu_geometry();
        let view = MenuEntryView::collect(&oracle.menu_entries())
            .into_iter()
            .find(|view| {
                query.matches_entry(
                    self.policy,
                    &normalize(&view.action_text),
                    &normalize(&view.target_text),
                    view.identifier,
                )
            })?;

        let row = i32::try_from(view.display_order).ok()?;
        let hitbox = Hitbox::new(
            geometry.x,
            geometry.y + self.layout.header_offset + row * self.layout.row_height,
            geometry.width,
            self.layout.row_height,
        );
        hitbox.has_area().then_some(hitbox)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{MenuEntry, MenuGeometry};

    #[derive(Default)]
    struct StaticMenu {
        widget: Option<MenuWidget>,
        entries: Vec<MenuEntry>,
        geometry: MenuGeometry,
    }

    impl MenuOracle for StaticMenu {
        fn menu_widget(&self) -> Option<MenuWidget> {
            self.widget.clone()
        }

        fn menu_entries(&self) -> Vec<MenuEntry> {
            self.entries.clone()
        }

        fn menu_geometry(&self) -> MenuGeometry {
            self.geometry
        }

        fn is_menu_open(&self) -> bool {
            true
        }
    }

    fn locator() -> MenuEntryLocator {
        MenuEntryLocator::default()
    }

    #[test]
    fn widget_tier_returns_first_positive_area_match() {
        let menu = StaticMenu {
            widget: Some(MenuWidget::container(vec![
                MenuWidget::label("Walk here", Hitbox::new(400, 219, 120, 15)),
                MenuWidget::label("<col=ffffff>Bank</col>", Hitbox::new(400, 234, 0, 15)),
                MenuWidget::label("Bank", Hitbox::new(400, 249, 120, 15)),
                MenuWidget::label("Bank", Hitbox::new(400, 264, 120, 15)),
            ])),
            ..StaticMenu::default()
        };

        let located = locator()
            .locate(&menu, &MenuQuery::new("bank"))
            .expect("bank entry");
        assert_eq!(located.tier, LocateTier::Widget);
        assert_eq!(located.hitbox, Hitbox::new(400, 249, 120, 15));
    }

    #[test]
    fn widget_tier_finds_grandchild_label() {
        let target = Hitbox::new(400, 234, 120, 15);
        let menu = StaticMenu {
            widget: Some(MenuWidget::container(vec![
                MenuWidget::container(vec![MenuWidget::label("Examine", Hitbox::new(400, 219, 120, 15))]),
                MenuWidget::container(vec![MenuWidget::label("Take <col=ff9040>Bones", target)]),
            ])),
            ..StaticMenu::default()
        };

        let query = MenuQuery::new("Take").with_target("Bones");
        let located = locator().locate(&menu, &query).expect("nested entry");
        assert_eq!(located.hitbox, target);
    }

    #[test]
    fn hidden_nodes_are_skipped() {
        let menu = StaticMenu {
            widget: Some(MenuWidget::container(vec![
                MenuWidget::label("Bank", Hitbox::new(400, 219, 120, 15)).hidden(),
            ])),
            ..StaticMenu::default()
        };

        assert_eq!(locator().locate(&menu, &MenuQuery::new("Bank")), None);
    }

    #[test]
    fn entry_tier_uses_display_index_for_row() {
        let menu = StaticMenu {
            entries: vec![
                MenuEntry::new("C", "", 0),
                MenuEntry::new("B", "", 0),
                MenuEntry::new("A", "", 0),
            ],
            geometry: MenuGeometry::new(300, 100, 140),
            ..StaticMenu::default()
        };

        let expect_row = |action: &str, index: i32| {
            let located = locator()
                .locate(&menu, &MenuQuery::new(action))
                .expect("entry present");
            assert_eq!(located.tier, LocateTier::Estimated);
            assert_eq!(located.hitbox, Hitbox::new(300, 100 + 19 + index * 15, 140, 15));
        };

        expect_row("A", 0);
        expect_row("B", 1);
        expect_row("C", 2);
    }

    #[test]
    fn entry_tier_prefers_the_topmost_duplicate() {
        let menu = StaticMenu {
            entries: vec![
                MenuEntry::new("Cancel", "", 0),
                MenuEntry::new("Take", "Bones", 526),
                MenuEntry::new("Take", "Coins", 995),
                MenuEntry::new("Take", "Bones", 526),
                MenuEntry::new("Walk here", "", 0),
            ],
            geometry: MenuGeometry::new(300, 100, 140),
            ..StaticMenu::default()
        };

        let query = MenuQuery::new("Take").with_target("Bones");
        let located = locator().locate(&menu, &query).expect("bones entry");
        assert_eq!(located.hitbox, Hitbox::new(300, 100 + 19 + 15, 140, 15));
    }

    #[test]
    fn entry_tier_runs_when_widget_has_no_match() {
        let menu = StaticMenu {
            widget: Some(MenuWidget::container(vec![MenuWidget::label(
                "Walk here",
                Hitbox::new(400, 219, 120, 15),
            )])),
            entries: vec![
                MenuEntry::new("Cancel", "", 0),
                MenuEntry::new("Take", "<col=ff9040>Bones", 526),
                MenuEntry::new("Take", "<col=ff9040>Coins", 995),
            ],
            geometry: MenuGeometry::new(10, 20, 90),
        };

        let query = MenuQuery::new("Take").with_target("Bones");
        let located = locator().locate(&menu, &query).expect("estimated entry");
        assert_eq!(located.tier, LocateTier::Estimated);
        assert_eq!(located.hitbox, Hitbox::new(10, 20 + 19 + 15, 90, 15));
    }

    #[test]
    fn exact_policy_rejects_partial_text_that_contains_policy_accepts() {
        let menu = StaticMenu {
            entries: vec![MenuEntry::new("Take", "<col=ff9040>Big bones", 532)],
            geometry: MenuGeometry::new(10, 20, 90),
            ..StaticMenu::default()
        };
        let query = MenuQuery::new("Take").with_target("bones");

        assert_eq!(locator().locate(&menu, &query), None);

        let lenient = MenuEntryLocator::new(MatchPolicy::Contains, MenuLayout::default());
        assert!(lenient.locate(&menu, &query).is_some());
    }

    #[test]
    fn zero_width_menu_is_not_a_match() {
        let menu = StaticMenu {
            entries: vec![MenuEntry::new("Bank", "", 0)],
            geometry: MenuGeometry::new(10, 20, 0),
            ..StaticMenu::default()
        };
        assert_eq!(locator().locate(&menu, &MenuQuery::new("Bank")), None);
    }

    #[test]
    fn empty_menu_is_not_found() {
        assert_eq!(locator().locate(&StaticMenu::default(), &MenuQuery::new("Bank")), None);
    }
}
