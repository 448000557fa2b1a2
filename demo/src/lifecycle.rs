//! Desktop windows do not have a lifecycle of their own. A window is started while it is not
//! minimized, and resumed while it also has the focus.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Start,
    Resume,
    Pause,
    Stop,
}

#[derive(Debug, Default)]
pub struct WindowLifecycle {
    started: bool,
    resumed: bool,
}

impl WindowLifecycle {
    /// Transitions needed to catch up with the window's state, in the order they should be
    /// delivered.
    pub fn update(&mut self, focused: bool, minimized: bool) -> Vec<Transition> {
        let started = !minimized;
        let resumed = started && focused;
        let mut transitions = Vec::new();

        if self.resumed && !resumed {
            transitions.push(Transition::Pause);
        }
        if self.started && !started {
            transitions.push(Transition::Stop);
        }
        if !self.started && started {
            transitions.push(Transition::Start);
        }
        if !self.resumed && resumed {
            transitions.push(Transition::Resume);
        }

        self.started = started;
        self.resumed = resumed;
        transitions
    }

    /// Transitions which bring the window down, e.g. when the app exits.
    pub fn shutdown(&mut self) -> Vec<Transition> {
        self.update(false, true)
    }
}
