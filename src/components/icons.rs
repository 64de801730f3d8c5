//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuClipboard as Copy, LuFile as File, LuLogIn as Login, LuPencil as Edit, LuPlus as Plus,
        LuRefreshCw as Refresh, LuSave as Save, LuTrash2 as Trash, LuUser as User,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowClockwise as Refresh, BsBoxArrowInRight as Login, BsClipboard as Copy,
        BsFileEarmark as File, BsPencil as Edit, BsPerson as User, BsPlusLg as Plus,
        BsSave as Save, BsTrash as Trash,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(COPY, Copy);
themed_icon!(EDIT, Edit);
themed_icon!(FILE, File);
themed_icon!(LOGIN, Login);
themed_icon!(PLUS, Plus);
themed_icon!(REFRESH, Refresh);
themed_icon!(SAVE, Save);
themed_icon!(TRASH, Trash);
themed_icon!(USER, User);
