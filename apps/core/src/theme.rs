use crate::model::Theme;
use crate::storage::{KvStore, THEME_KEY};

/// Tri-state theme preference resolution.
///
/// `os_prefers_dark` mirrors the platform dark-mode media query; `None`
/// means the platform cannot report it, in which case `system` resolves to
/// light. Every mutation is persisted through the injected store.
pub struct ThemeController {
    store: Box<dyn KvStore>,
    theme: Theme,
    os_prefers_dark: Option<bool>,
}

impl ThemeController {
    pub fn new(store: Box<dyn KvStore>, default_theme: Theme, os_prefers_dark: Option<bool>) -> Self {
        let theme = store
            .get(THEME_KEY)
            .and_then(|raw| Theme::parse(&raw))
            .unwrap_or(default_theme);
        Self {
            store,
            theme,
            os_prefers_dark,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn is_dark(&self) -> bool {
        match self.theme {
            Theme::Dark => true,
            Theme::Light => false,
            Theme::System => self.os_prefers_dark.unwrap_or(false),
        }
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.store.set(THEME_KEY, theme.as_str());
    }

    /// Jumps straight to the opposite of the current resolved appearance.
    pub fn toggle(&mut self) {
        if self.is_dark() {
            self.set_theme(Theme::Light);
        } else {
            self.set_theme(Theme::Dark);
        }
    }

    /// light -> dark -> system -> light.
    pub fn cycle(&mut self) {
        let next = match self.theme {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::System,
            Theme::System => Theme::Light,
        };
        self.set_theme(next);
    }

    pub fn on_os_preference_changed(&mut self, prefers_dark: bool) {
        self.os_prefers_dark = Some(prefers_dark);
    }
}

#[cfg(test)]
mod tests {
    use super::ThemeController;
    use crate::model::Theme;
    use crate::storage::{KvStore, MemoryStore, THEME_KEY};

    fn controller(os_dark: Option<bool>) -> ThemeController {
        ThemeController::new(Box::new(MemoryStore::new()), Theme::System, os_dark)
    }

    #[test]
    fn system_theme_follows_os_preference() {
        let dark = controller(Some(true));
        assert!(dark.is_dark());

        let light = controller(Some(false));
        assert!(!light.is_dark());
    }

    #[test]
    fn missing_os_preference_falls_back_to_light() {
        let themed = controller(None);
        assert_eq!(themed.theme(), Theme::System);
        assert!(!themed.is_dark());
    }

    #[test]
    fn cycle_walks_light_dark_system() {
        let mut themed = controller(Some(false));
        themed.set_theme(Theme::Light);
        themed.cycle();
        assert_eq!(themed.theme(), Theme::Dark);
        themed.cycle();
        assert_eq!(themed.theme(), Theme::System);
        themed.cycle();
        assert_eq!(themed.theme(), Theme::Light);
    }

    #[test]
    fn toggle_flips_resolved_appearance() {
        let mut themed = controller(Some(true));
        assert!(themed.is_dark());
        themed.toggle();
        assert_eq!(themed.theme(), Theme::Light);
        themed.toggle();
        assert_eq!(themed.theme(), Theme::Dark);
    }

    #[test]
    fn os_preference_change_retriggers_resolution() {
        let mut themed = controller(Some(false));
        assert!(!themed.is_dark());
        themed.on_os_preference_changed(true);
        assert!(themed.is_dark());
    }

    #[test]
    fn stored_garbage_falls_back_to_default_theme() {
        let mut store = MemoryStore::new();
        store.set(THEME_KEY, "solarized");
        let themed = ThemeController::new(Box::new(store), Theme::Light, Some(true));
        assert_eq!(themed.theme(), Theme::Light);
    }
}
