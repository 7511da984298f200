// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Shared UI context.
//!
//! The theme and active route live in one explicit context object passed to
//! the views; there is no global state. Views own their ephemeral selection
//! state themselves and drop it on navigation.

use crate::tui::routes::Route;
use crate::tui::theme::ThemeMode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiContext {
    route: Route,
    theme_mode: ThemeMode,
    rev: u64,
}

impl Default for UiContext {
    fn default() -> Self {
        Self {
            route: Route::Home,
            theme_mode: ThemeMode::Dark,
            rev: 0,
        }
    }
}

impl UiContext {
    pub fn new(route: Route, theme_mode: ThemeMode) -> Self {
        Self {
            route,
            theme_mode,
            rev: 0,
        }
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn theme_mode(&self) -> ThemeMode {
        self.theme_mode
    }

    pub fn rev(&self) -> u64 {
        self.rev
    }

    /// Switches the active route. Returns `false` when already there.
    pub fn navigate(&mut self, route: Route) -> bool {
        if self.route == route {
            return false;
        }
        self.route = route;
        self.rev = self.rev.wrapping_add(1);
        true
    }

    pub fn toggle_theme(&mut self) -> ThemeMode {
        self.theme_mode = self.theme_mode.toggled();
        self.rev = self.rev.wrapping_add(1);
        self.theme_mode
    }
}
