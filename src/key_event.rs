use crate::utils::keysym_lookup::XKeysym;

/// A raw keyboard event read while the cycle grab is held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    Press(XKeysym),
    Release(XKeysym),
}
