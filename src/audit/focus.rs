// src/audit/focus.rs
//
// Roving focus over an ordered list of focusable items (menus, card lists).

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavKey {
    Next,
    Prev,
    Home,
    End,
}

impl NavKey {
    /// DOM `KeyboardEvent.key` names. Anything else isn't a navigation key.
    pub fn from_key_name(key: &str) -> Option<Self> {
        match key {
            "ArrowDown" | "ArrowRight" => Some(NavKey::Next),
            "ArrowUp" | "ArrowLeft" => Some(NavKey::Prev),
            "Home" => Some(NavKey::Home),
            "End" => Some(NavKey::End),
            _ => None,
        }
    }
}

/// Index to focus after `key`, wrapping at both ends.
/// `current` outside the list counts as "before the first item".
pub fn next_focus(current: Option<usize>, len: usize, key: NavKey) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let last = len - 1;
    let current = current.filter(|&i| i < len);

    let next = match key {
        NavKey::Next => match current {
            Some(i) if i < last => i + 1,
            _ => 0,
        },
        NavKey::Prev => match current {
            Some(i) if i > 0 => i - 1,
            _ => last,
        },
        NavKey::Home => 0,
        NavKey::End => last,
    };
    Some(next)
}
