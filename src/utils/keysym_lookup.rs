//! Key-name to X keysym translation for binding configuration.
use x11_dl::keysym;

/// An X11 key symbol.
pub type XKeysym = u32;

/// Looks up the keysym for a key name as it appears in a binding config.
///
/// Key names follow the X keysym naming scheme (`Alt_L`, `Tab`, `grave`).
/// Single printable ASCII characters resolve through the Latin-1 rule, where
/// the keysym equals the character code.
#[must_use]
pub fn into_keysym(key: &str) -> Option<XKeysym> {
    let sym = match key {
        "Shift_L" => keysym::XK_Shift_L,
        "Shift_R" => keysym::XK_Shift_R,
        "Control_L" => keysym::XK_Control_L,
        "Control_R" => keysym::XK_Control_R,
        "Alt_L" => keysym::XK_Alt_L,
        "Alt_R" => keysym::XK_Alt_R,
        "Meta_L" => keysym::XK_Meta_L,
        "Meta_R" => keysym::XK_Meta_R,
        "Super_L" => keysym::XK_Super_L,
        "Super_R" => keysym::XK_Super_R,
        "Hyper_L" => keysym::XK_Hyper_L,
        "Hyper_R" => keysym::XK_Hyper_R,
        "Caps_Lock" => keysym::XK_Caps_Lock,
        "Tab" => keysym::XK_Tab,
        "ISO_Left_Tab" => keysym::XK_ISO_Left_Tab,
        "grave" => keysym::XK_grave,
        "space" => keysym::XK_space,
        "Return" => keysym::XK_Return,
        "Escape" => keysym::XK_Escape,
        "BackSpace" => keysym::XK_BackSpace,
        "Delete" => keysym::XK_Delete,
        "Home" => keysym::XK_Home,
        "End" => keysym::XK_End,
        "Left" => keysym::XK_Left,
        "Up" => keysym::XK_Up,
        "Right" => keysym::XK_Right,
        "Down" => keysym::XK_Down,
        single => {
            let mut chars = single.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if c.is_ascii_graphic() => c as XKeysym,
                _ => return None,
            }
        }
    };
    Some(sym)
}

/// Resolves a whole list of key names, or `None` if any name is unknown.
#[must_use]
pub fn into_keysyms(keys: &[String]) -> Option<Vec<XKeysym>> {
    keys.iter().map(|key| into_keysym(key)).collect()
}
