//! Shared UI constants such as colors and stacking order.

pub const BG_BASE: &str = "#0a0a0b";
pub const BG_ELEVATED: &str = "#141414";
pub const BG_SURFACE: &str = "#1a1a1a";
pub const BG_HOVER: &str = "#262626";

pub const BORDER_SUBTLE: &str = "#1f1f1f";
pub const BORDER_DEFAULT: &str = "#27272a";
pub const BORDER_STRONG: &str = "#3f3f46";

pub const TEXT_PRIMARY: &str = "#fafafa";
pub const TEXT_SECONDARY: &str = "#a1a1aa";
pub const TEXT_MUTED: &str = "#71717a";
pub const TEXT_DIM: &str = "#52525b";

pub const ACCENT_PRIMARY: &str = "#5e6ad2";

// Stacking order. Popovers spawned from inside the dialog must sit above
// the dialog panel, and each popover's click-away backdrop sits just
// below the popover itself.
pub const LAYER_MODAL: i32 = 2000;
pub const LAYER_POPOVER_BACKDROP: i32 = 2100;
pub const LAYER_POPOVER: i32 = 2101;
