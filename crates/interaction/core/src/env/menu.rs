use crate::geometry::Hitbox;

/// Live contextual-menu state.
pub trait MenuOracle: Send + Sync {
    /// Structured menu UI element, if the client exposes one.
    fn menu_widget(&self) -> Option<MenuWidget>;

    /// Raw menu entries in storage order: bottom-to-top, so the last entry is
    /// the one a bare primary click triggers.
    fn menu_entries(&self) -> Vec<MenuEntry>;

    /// Screen anchor and width of the open menu.
    fn menu_geometry(&self) -> MenuGeometry;

    /// Whether a contextual menu is currently open.
    fn is_menu_open(&self) -> bool;

    /// Open and populated, i.e. safe to search.
    fn is_menu_ready(&self) -> bool {
        self.is_menu_open() && !self.menu_entries().is_empty()
    }
}

/// One raw menu row as stored by the client.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MenuEntry {
    /// Verb, e.g. `"Take"`.
    pub option: String,
    /// Object text, usually with markup, e.g. `"<col=ff9040>Bones"`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub target: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub identifier: i32,
}

impl MenuEntry {
    pub fn new(option: impl Into<String>, target: impl Into<String>, identifier: i32) -> Self {
        Self {
            option: option.into(),
            target: target.into(),
            identifier,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MenuGeometry {
    pub x: i32,
    pub y: i32,
    pub width: i32,
}

impl MenuGeometry {
    pub const fn new(x: i32, y: i32, width: i32) -> Self {
        Self { x, y, width }
    }
}

/// Snapshot of a node in the structured menu UI tree.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MenuWidget {
    pub text: Option<String>,
    pub bounds: Option<Hitbox>,
    pub hidden: bool,
    pub children: Vec<MenuWidget>,
}

impl MenuWidget {
    pub fn container(children: Vec<MenuWidget>) -> Self {
        Self {
            children,
            ..Self::default()
        }
    }

    pub fn label(text: impl Into<String>, bounds: Hitbox) -> Self {
        Self {
            text: Some(text.into()),
            bounds: Some(bounds),
            ..Self::default()
        }
    }

    pub fn with_children(mut self, children: Vec<MenuWidget>) -> Self {
        self.children = children;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// Non-hidden direct children.
    pub fn visible_children(&self) -> impl Iterator<Item = &MenuWidget> {
        self.children.iter().filter(|child| !child.hidden)
    }
}
