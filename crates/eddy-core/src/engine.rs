//! Synchronous core of the runtime
//!
//! The engine owns the current `(model, command)` pair and applies messages
//! one at a time. It never performs effects itself; `dispatch` reports the
//! command the host should hand to the executor, if any.

use crate::{Command, Program, Transition, TransitionLog};

/// Owns the model of one unit and serializes its transitions
pub struct Engine<P: Program> {
    /// The pure update function
    program: P,
    /// Current model and the command that produced it
    current: Transition<P::Model, P::Cmd>,
    /// Number of messages applied
    dispatched: u64,
    /// Change-only trace of models
    log: TransitionLog<P::Model>,
}

impl<P: Program> Engine<P> {
    /// Create an engine from the initial transition
    ///
    /// Returns the initial command when it is an effect. The command before
    /// `init` counts as "no effect", so a `None` initial command runs nothing.
    pub fn new(program: P, init: Transition<P::Model, P::Cmd>) -> (Self, Option<P::Cmd>) {
        let mut log = TransitionLog::new(std::any::type_name::<P>());
        log.record(&init.model);

        let first = (!init.cmd.is_none()).then(|| init.cmd.clone());
        let engine = Self {
            program,
            current: init,
            dispatched: 0,
            log,
        };
        (engine, first)
    }

    /// Apply one message
    ///
    /// Replaces the stored model with the one `update` returns and compares
    /// the new command with the previous one. Returns the new command if and
    /// only if they differ.
    pub fn dispatch(&mut self, msg: P::Msg) -> Option<P::Cmd> {
        tracing::trace!(msg = ?msg, "dispatch");
        let next = self.program.update(&self.current.model, msg);
        self.dispatched += 1;

        let changed = next.cmd != self.current.cmd;
        self.log.record(&next.model);
        self.current = next;

        if changed {
            tracing::debug!(cmd = ?self.current.cmd, "command changed");
            Some(self.current.cmd.clone())
        } else {
            None
        }
    }

    /// The current model
    pub fn model(&self) -> &P::Model {
        &self.current.model
    }

    /// The command produced by the latest transition
    pub fn command(&self) -> &P::Cmd {
        &self.current.cmd
    }

    /// Number of messages applied so far
    pub fn dispatched(&self) -> u64 {
        self.dispatched
    }

    /// The program driving this engine
    pub fn program(&self) -> &P {
        &self.program
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A counter that asks to save every even value
    struct Counter;

    #[derive(Debug)]
    enum Msg {
        Increment,
        Noop,
        Resave,
    }

    #[derive(Debug, Clone, PartialEq)]
    enum Cmd {
        None,
        Save(u32),
    }

    impl Command for Cmd {
        fn is_none(&self) -> bool {
            matches!(self, Cmd::None)
        }
    }

    impl Program for Counter {
        type Model = u32;
        type Msg = Msg;
        type Cmd = Cmd;

        fn update(&self, model: &u32, msg: Msg) -> Transition<u32, Cmd> {
            match msg {
                Msg::Increment => {
                    let next = model + 1;
                    let cmd = if next % 2 == 0 { Cmd::Save(next) } else { Cmd::None };
                    Transition::new(next, cmd)
                }
                Msg::Noop => Transition::new(*model, Cmd::None),
                Msg::Resave => Transition::new(*model, Cmd::Save(*model)),
            }
        }
    }

    #[test]
    fn test_initial_command() {
        let (_, first) = Engine::new(Counter, Transition::new(0, Cmd::Save(0)));
        assert_eq!(first, Some(Cmd::Save(0)));

        let (_, first) = Engine::new(Counter, Transition::new(0, Cmd::None));
        assert_eq!(first, None);
    }

    #[test]
    fn test_dispatch_replaces_model() {
        let (mut engine, _) = Engine::new(Counter, Transition::new(0, Cmd::None));

        assert_eq!(engine.dispatch(Msg::Increment), None);
        assert_eq!(*engine.model(), 1);
        assert_eq!(engine.dispatch(Msg::Increment), Some(Cmd::Save(2)));
        assert_eq!(*engine.model(), 2);
        assert_eq!(engine.dispatched(), 2);
    }

    #[test]
    fn test_none_persisting_is_not_reexecuted() {
        let (mut engine, _) = Engine::new(Counter, Transition::new(0, Cmd::None));

        for _ in 0..5 {
            assert_eq!(engine.dispatch(Msg::Noop), None);
        }
        assert_eq!(engine.command(), &Cmd::None);
    }

    #[test]
    fn test_equal_command_is_not_reexecuted() {
        let (mut engine, _) = Engine::new(Counter, Transition::new(4, Cmd::None));

        assert_eq!(engine.dispatch(Msg::Resave), Some(Cmd::Save(4)));
        assert_eq!(engine.dispatch(Msg::Resave), None);

        // Going through None makes the same save distinct from its predecessor again
        assert_eq!(engine.dispatch(Msg::Noop), Some(Cmd::None));
        assert_eq!(engine.dispatch(Msg::Resave), Some(Cmd::Save(4)));
    }

    #[test]
    fn test_at_most_one_command_per_dispatch() {
        let (mut engine, _) = Engine::new(Counter, Transition::new(0, Cmd::None));
        let script = [
            Msg::Increment,
            Msg::Resave,
            Msg::Noop,
            Msg::Increment,
            Msg::Increment,
            Msg::Resave,
            Msg::Resave,
        ];

        let mut previous = engine.command().clone();
        for msg in script {
            let handed = engine.dispatch(msg);
            let current = engine.command().clone();
            match handed {
                Some(cmd) => {
                    assert_ne!(cmd, previous);
                    assert_eq!(cmd, current);
                }
                None => assert_eq!(current, previous),
            }
            previous = current;
        }
    }
}
