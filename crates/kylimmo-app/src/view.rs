// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::model::ViewMode;

/// Logical-width breakpoint below which the catalog renders as a list.
pub const GRID_BREAKPOINT: u32 = 768;

/// View mode chosen once at first render from the viewport width.
pub fn initial_view_mode(width: u32) -> ViewMode {
    if width < GRID_BREAKPOINT {
        ViewMode::List
    } else {
        ViewMode::Grid
    }
}

/// Resize rule: shrinking below the breakpoint forces list; growing back
/// never auto-restores grid. Manual toggles hold until the next qualifying
/// downward resize.
pub fn view_mode_after_resize(current: ViewMode, width: u32) -> ViewMode {
    if width < GRID_BREAKPOINT {
        ViewMode::List
    } else {
        current
    }
}
