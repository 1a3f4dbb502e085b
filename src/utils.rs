//! Various shared functions that viewcycle uses.
pub mod helpers;
pub mod keysym_lookup;
