// Muxkeys End-to-End Test Scenarios
//
// These tests simulate real-world sessions: a host application with its own
// pane state receives actions from the dispatcher, and unconsumed keys are
// forwarded to the focused pane.
//
// Run with: cargo test -p muxkeys-core --test e2e_scenarios

mod e2e_tests {
    use std::fs;

    use muxkeys_core::{
        load_and_compile, Action, ActionHandler, ActionRegistry, ConfigHandle, Dispatcher,
        DEFAULT_CONFIG,
    };

    // =========================================================================
    // Test Helpers
    // =========================================================================

    /// Minimal stand-in for the multiplexer's root context
    #[derive(Debug, Default)]
    struct Universe {
        panes: usize,
        selected: usize,
        width_delta: i32,
        height_delta: i32,
        fullscreen: bool,
        forwarded: Vec<String>,
    }

    impl ActionHandler for Universe {
        fn perform(&mut self, action: Action) {
            match action {
                Action::NewPane | Action::SplitPaneVert | Action::SplitPaneHoriz => {
                    self.panes += 1;
                    self.selected = self.panes - 1;
                }
                Action::KillPane => {
                    self.panes = self.panes.saturating_sub(1);
                    self.selected = self.selected.min(self.panes.saturating_sub(1));
                }
                Action::AllPaneKill => {
                    self.panes = 0;
                    self.selected = 0;
                }
                Action::ToggleFullscreen => self.fullscreen = !self.fullscreen,
                Action::MoveSelectionLeft | Action::MoveSelectionUp => {
                    self.selected = self.selected.saturating_sub(1);
                }
                Action::MoveSelectionRight | Action::MoveSelectionDown => {
                    self.selected = (self.selected + 1).min(self.panes.saturating_sub(1));
                }
                Action::ResizeUp => self.height_delta += 1,
                Action::ResizeDown => self.height_delta -= 1,
                Action::ResizeLeft => self.width_delta -= 1,
                Action::ResizeRight => self.width_delta += 1,
                _ => {}
            }
        }
    }

    /// Feed keys the way the input reader does: unconsumed keys go to the pane
    fn type_keys(dispatcher: &mut Dispatcher, universe: &mut Universe, keys: &[&str]) {
        for key in keys {
            if !dispatcher.dispatch(key, &mut *universe) {
                universe.forwarded.push(key.to_string());
            }
        }
    }

    fn default_dispatcher() -> Dispatcher {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        Dispatcher::new(load_and_compile(&path, &ActionRegistry::builtin()).unwrap())
    }

    // =========================================================================
    // Scenarios
    // =========================================================================

    #[test]
    fn scenario_split_and_navigate() {
        let mut dispatcher = default_dispatcher();
        let mut universe = Universe::default();

        type_keys(
            &mut dispatcher,
            &mut universe,
            &["Alt+n", "Alt+v", "Alt+h", "Alt+Left", "Alt+Left", "Alt+f"],
        );

        assert_eq!(universe.panes, 3);
        assert_eq!(universe.selected, 0);
        assert!(universe.fullscreen);
        assert!(universe.forwarded.is_empty());
    }

    #[test]
    fn scenario_resize_session_then_typing() {
        let mut dispatcher = default_dispatcher();
        let mut universe = Universe::default();

        // Sticky resize mode: several adjustments, then plain typing cancels it
        type_keys(
            &mut dispatcher,
            &mut universe,
            &["Alt+n", "Alt+r", "Up", "Up", "l", "l", "l", "e", "c", "h", "o"],
        );

        assert_eq!(universe.height_delta, 2);
        assert_eq!(universe.width_delta, 3);
        // "e" cancels the mode and is forwarded; "h" is no longer a resize key
        assert_eq!(universe.forwarded, vec!["e", "c", "h", "o"]);
        assert_eq!(dispatcher.current_mode(), None);
    }

    #[test]
    fn scenario_plain_typing_passes_through() {
        let mut dispatcher = default_dispatcher();
        let mut universe = Universe::default();

        type_keys(&mut dispatcher, &mut universe, &["l", "s", "Enter"]);

        assert_eq!(universe.forwarded, vec!["l", "s", "Enter"]);
        assert_eq!(universe.panes, 0);
    }

    #[test]
    fn scenario_first_run_generates_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("muxkeys").join("config.toml");

        let config = load_and_compile(&path, &ActionRegistry::builtin()).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), DEFAULT_CONFIG);
        assert!(config.default_bindings().contains_key("alt+n"));
    }

    #[test]
    fn scenario_user_edits_config_and_reloads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[keys]\nnew-pane = ['Alt+n']\n").unwrap();

        let registry = ActionRegistry::builtin();
        let handle = ConfigHandle::new(load_and_compile(&path, &registry).unwrap());
        let mut dispatcher = Dispatcher::with_handle(handle.clone());
        let mut universe = Universe::default();

        type_keys(&mut dispatcher, &mut universe, &["Alt+n", "Ctrl+k"]);
        assert_eq!(universe.panes, 1);

        fs::write(
            &path,
            r#"
[keys]
new-pane = ['Alt+n']
kill-pane = ['Ctrl+K']
"#,
        )
        .unwrap();
        handle.replace(load_and_compile(&path, &registry).unwrap());

        type_keys(&mut dispatcher, &mut universe, &["Ctrl+k"]);
        assert_eq!(universe.panes, 0);
        assert_eq!(universe.forwarded, vec!["Ctrl+k"]);
    }

    #[test]
    fn scenario_stale_config_still_starts() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
[keys]
new-pane = ['Alt+n']
all-session-kill-quit = ['Ctrl+q']
toggle-fullscreen = 'Alt+f'

[modes.layout]
mode-start = ['Alt+L']
rotate-layout = ['r']
resize-up = ['k']
"#,
        )
        .unwrap();

        let config = load_and_compile(&path, &ActionRegistry::builtin()).unwrap();
        assert_eq!(config.warnings().len(), 3);

        let mut dispatcher = Dispatcher::new(config);
        let mut universe = Universe::default();
        type_keys(
            &mut dispatcher,
            &mut universe,
            &["Alt+n", "Ctrl+q", "Alt+f", "Alt+l", "k", "k"],
        );

        assert_eq!(universe.panes, 1);
        assert!(!universe.fullscreen);
        assert_eq!(universe.height_delta, 1);
        assert_eq!(universe.forwarded, vec!["Ctrl+q", "Alt+f", "k"]);
    }
}
