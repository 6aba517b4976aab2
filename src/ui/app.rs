use crate::ui::control::Control;
use crate::ui::counter::{CounterIntent, CounterReducer, CounterState};
use crate::ui::message::{MessageIntent, MessageReducer, MessageState};
use crate::ui::mvi::Reducer;
use crate::ui::timer::TimerHandle;
use crate::ui::view::ViewModel;

/// Called with the fresh view after every state-changing mutation.
pub type RenderCallback = Box<dyn FnMut(&ViewModel)>;

/// Generic MVI dispatch: runs the reducer on the field and reports whether
/// the value changed.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {{
        let previous = $self.$field.clone();
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
        $self.$field != previous
    }};
}

/// The click counter component.
///
/// Holds the two state fields and exposes one explicit update function per
/// user action. The terminal host calls [`App::mount`] before the first
/// frame and [`App::unmount`] on the way out.
pub struct App {
    should_quit: bool,
    mounted: bool,
    focus: Control,
    size: Option<(u16, u16)>,
    counter: CounterState,
    message: MessageState,
    /// Latent timer slot, released on unmount.
    pending_timer: Option<TimerHandle>,
    needs_redraw: bool,
    on_render: Option<RenderCallback>,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            should_quit: false,
            mounted: false,
            focus: Control::Increment,
            size: None,
            counter: CounterState::default(),
            message: MessageState::default(),
            pending_timer: None,
            needs_redraw: true,
            on_render: None,
        }
    }

    // ========================================================================
    // Lifecycle
    // ========================================================================

    pub fn mount(&mut self) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        self.needs_redraw = true;
        tracing::info!("Component mounted");
    }

    /// Tear down: cancel the pending timer (if any) and discard state.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        tracing::info!("Component unmounting");
        if let Some(timer) = self.pending_timer.take() {
            timer.cancel();
            tracing::debug!("Pending timer cancelled");
        }
        self.mounted = false;
        self.counter = CounterState::default();
        self.message = MessageState::default();
        self.focus = Control::Increment;
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Hand a timer over to the component; it is cancelled on unmount.
    /// A previously attached timer is cancelled first.
    pub fn attach_timer(&mut self, timer: TimerHandle) {
        if let Some(previous) = self.pending_timer.replace(timer) {
            previous.cancel();
        }
    }

    pub fn has_pending_timer(&self) -> bool {
        self.pending_timer.is_some()
    }

    pub fn set_render_callback(&mut self, callback: RenderCallback) {
        self.on_render = Some(callback);
    }

    // ========================================================================
    // Counter control
    // ========================================================================

    pub fn increment(&mut self) {
        if !self.accepts_input("increment") {
            return;
        }
        if dispatch_mvi!(self, counter, CounterReducer, CounterIntent::Increment) {
            tracing::info!(clicks = self.counter.clicks(), "Counter incremented");
            self.commit();
        }
    }

    /// No-op while the counter is zero (the reset button is disabled).
    pub fn reset(&mut self) {
        if !self.accepts_input("reset") {
            return;
        }
        if dispatch_mvi!(self, counter, CounterReducer, CounterIntent::Reset) {
            tracing::info!("Counter reset");
            self.commit();
        }
    }

    pub fn clicks(&self) -> u64 {
        self.counter.clicks()
    }

    pub fn is_counter_even(&self) -> bool {
        self.counter.is_even()
    }

    pub fn can_reset(&self) -> bool {
        self.counter.can_reset()
    }

    // ========================================================================
    // Message control
    // ========================================================================

    pub fn set_message(&mut self, text: impl Into<String>) {
        if !self.accepts_input("set_message") {
            return;
        }
        let text = text.into();
        if dispatch_mvi!(self, message, MessageReducer, MessageIntent::Set { text }) {
            tracing::trace!(len = self.message.text().len(), "Message updated");
            self.commit();
        }
    }

    /// No-op while the message is empty (the clear button is disabled).
    pub fn clear_message(&mut self) {
        if !self.accepts_input("clear_message") {
            return;
        }
        if dispatch_mvi!(self, message, MessageReducer, MessageIntent::Clear) {
            tracing::info!("Message cleared");
            self.commit();
        }
    }

    pub fn message(&self) -> &str {
        self.message.text()
    }

    pub fn message_display(&self) -> &str {
        self.message.display()
    }

    pub fn can_clear(&self) -> bool {
        self.message.can_clear()
    }

    // ========================================================================
    // Focus
    // ========================================================================

    pub fn focus(&self) -> Control {
        self.focus
    }

    pub fn is_enabled(&self, control: Control) -> bool {
        match control {
            Control::Increment | Control::MessageInput => true,
            Control::Reset => self.can_reset(),
            Control::Clear => self.can_clear(),
        }
    }

    /// Move focus to `control`. Disabled controls cannot take focus.
    pub fn focus_control(&mut self, control: Control) -> bool {
        if !self.is_enabled(control) {
            return false;
        }
        if self.focus != control {
            self.focus = control;
            self.needs_redraw = true;
        }
        true
    }

    pub fn focus_next(&mut self) {
        if let Some(next) = self.focus.cycle_forward().find(|c| self.is_enabled(*c)) {
            self.focus_control(next);
        }
    }

    pub fn focus_prev(&mut self) {
        if let Some(prev) = self.focus.cycle_backward().find(|c| self.is_enabled(*c)) {
            self.focus_control(prev);
        }
    }

    /// Press a button. Returns false for disabled controls, the input, and
    /// any press while the component is not mounted.
    pub fn activate(&mut self, control: Control) -> bool {
        if !self.accepts_input("activate") || !self.is_enabled(control) {
            return false;
        }
        match control {
            Control::Increment => self.increment(),
            Control::Reset => self.reset(),
            Control::Clear => self.clear_message(),
            Control::MessageInput => return false,
        }
        true
    }

    pub fn activate_focused(&mut self) -> bool {
        self.activate(self.focus)
    }

    // ========================================================================
    // Host plumbing
    // ========================================================================

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
        self.needs_redraw = true;
    }

    pub fn size(&self) -> Option<(u16, u16)> {
        self.size
    }

    /// Returns true once per batch of changes since the last frame.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    pub fn view(&self) -> ViewModel {
        ViewModel {
            counter_text: self.counter.clicks().to_string(),
            counter_even: self.counter.is_even(),
            input_text: self.message.text().to_string(),
            message_display: self.message.display().to_string(),
            message_is_placeholder: self.message.is_empty(),
            reset_enabled: self.can_reset(),
            clear_enabled: self.can_clear(),
            focus: self.focus,
        }
    }

    fn accepts_input(&self, operation: &str) -> bool {
        if !self.mounted {
            tracing::debug!(operation, "Ignored: component not mounted");
        }
        self.mounted
    }

    /// Post-mutation bookkeeping: keep focus on an enabled control,
    /// schedule a redraw and notify the render callback.
    fn commit(&mut self) {
        if !self.is_enabled(self.focus) {
            self.focus_next();
        }
        self.needs_redraw = true;
        if let Some(mut callback) = self.on_render.take() {
            let view = self.view();
            callback(&view);
            self.on_render = Some(callback);
        }
    }
}
