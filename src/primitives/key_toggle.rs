use gpui::{App, Keystroke, Modifiers, Subscription, Window};
use log::warn;

/// Keystroke that shows and hides the grid overlay unless configured otherwise.
pub const DEFAULT_TOGGLE_KEYSTROKE: &str = "ctrl-g";

/// A live subscription to every keystroke in the application that calls back
/// when the toggle keystroke is pressed.
///
/// Keystrokes are intercepted before they reach the focused element, so the
/// callback fires even when the host view stops propagation. It fires on key
/// down, once per press.
///
/// Listening starts with [`KeyToggleListener::start`] and ends when the
/// listener is dropped or [`stop`](KeyToggleListener::stop)ped, so the owner
/// can't leak the subscription on any exit path.
pub struct KeyToggleListener {
    keystroke: Keystroke,
    _subscription: Subscription,
}

impl KeyToggleListener {
    pub fn start(
        keystroke: Keystroke,
        cx: &mut App,
        mut on_toggle: impl FnMut(&mut Window, &mut App) + 'static,
    ) -> Self {
        let binding = keystroke.clone();
        let subscription = cx.intercept_keystrokes(move |event, window, cx| {
            if matches_toggle(&binding, &event.keystroke) {
                on_toggle(window, cx);
            }
        });

        Self {
            keystroke,
            _subscription: subscription,
        }
    }

    pub fn keystroke(&self) -> &Keystroke {
        &self.keystroke
    }

    /// Stops listening. Same as dropping the listener.
    pub fn stop(self) {}
}

/// Whether `pressed` triggers `binding`: same key, with at least the
/// binding's modifiers held.
pub fn matches_toggle(binding: &Keystroke, pressed: &Keystroke) -> bool {
    pressed.key.eq_ignore_ascii_case(&binding.key) && holds(&pressed.modifiers, &binding.modifiers)
}

fn holds(pressed: &Modifiers, required: &Modifiers) -> bool {
    (!required.control || pressed.control)
        && (!required.alt || pressed.alt)
        && (!required.shift || pressed.shift)
        && (!required.platform || pressed.platform)
        && (!required.function || pressed.function)
}

/// Parses `source`, falling back to [`DEFAULT_TOGGLE_KEYSTROKE`] with a warning.
pub fn parse_toggle_keystroke(source: &str) -> Option<Keystroke> {
    Keystroke::parse(source)
        .or_else(|_| {
            warn!(
                "grid debugger: `{source}` is not a keystroke, using `{DEFAULT_TOGGLE_KEYSTROKE}`"
            );
            Keystroke::parse(DEFAULT_TOGGLE_KEYSTROKE)
        })
        .ok()
}
