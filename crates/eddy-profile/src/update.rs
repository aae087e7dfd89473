//! Profile editor transitions

use crate::{ProfileCmd, ProfileModel, ProfileMsg};
use eddy_core::{DebounceState, Millis, Program, RequestId, TickOutcome, Transition};
use serde::{Deserialize, Serialize};

/// Initial model: saved names, nothing to do
pub fn init() -> Transition<ProfileModel, ProfileCmd> {
    Transition::new(
        ProfileModel {
            first_name: "Bob".to_string(),
            last_name: "Bobski".to_string(),
            state: DebounceState::Clean,
            next_request_id: RequestId::ZERO,
        },
        ProfileCmd::None,
    )
}

fn default_debounce_interval_ms() -> Millis {
    1000
}

/// Update function of the profile editor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileProgram {
    /// Quiet time required after the last edit before saving
    #[serde(default = "default_debounce_interval_ms")]
    pub debounce_interval_ms: Millis,
}

impl Default for ProfileProgram {
    fn default() -> Self {
        Self {
            debounce_interval_ms: default_debounce_interval_ms(),
        }
    }
}

impl ProfileProgram {
    /// Create a program with a custom debounce interval
    pub fn with_interval(debounce_interval_ms: Millis) -> Self {
        Self {
            debounce_interval_ms,
        }
    }
}

impl Program for ProfileProgram {
    type Model = ProfileModel;
    type Msg = ProfileMsg;
    type Cmd = ProfileCmd;

    fn update(&self, model: &ProfileModel, msg: ProfileMsg) -> Transition<ProfileModel, ProfileCmd> {
        match msg {
            ProfileMsg::FirstNameEdited(first_name) => idle(ProfileModel {
                first_name,
                state: DebounceState::edited(),
                ..model.clone()
            }),
            ProfileMsg::LastNameEdited(last_name) => idle(ProfileModel {
                last_name,
                state: DebounceState::edited(),
                ..model.clone()
            }),
            ProfileMsg::Tick { time_ms } => {
                match model.state.on_tick(time_ms, self.debounce_interval_ms, model.next_request_id) {
                    TickOutcome::Unchanged => idle(model.clone()),
                    TickOutcome::Baseline(state) => idle(ProfileModel {
                        state,
                        ..model.clone()
                    }),
                    TickOutcome::Commit(id) => Transition::new(
                        ProfileModel {
                            state: DebounceState::Saving { request_id: id },
                            next_request_id: id.next(),
                            ..model.clone()
                        },
                        ProfileCmd::Request {
                            id,
                            first_name: model.first_name.clone(),
                            last_name: model.last_name.clone(),
                        },
                    ),
                }
            }
            ProfileMsg::GotResponse { request_id } => settle(model, request_id, true),
            ProfileMsg::RequestFailed { request_id } => settle(model, request_id, false),
        }
    }
}

fn idle(model: ProfileModel) -> Transition<ProfileModel, ProfileCmd> {
    Transition::new(model, ProfileCmd::None)
}

fn settle(model: &ProfileModel, request_id: RequestId, ok: bool) -> Transition<ProfileModel, ProfileCmd> {
    match model.state.settle(request_id, ok) {
        Some(state) => idle(ProfileModel {
            state,
            ..model.clone()
        }),
        None => idle(model.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eddy_core::Engine;

    fn step(model: &ProfileModel, msg: ProfileMsg) -> Transition<ProfileModel, ProfileCmd> {
        ProfileProgram::default().update(model, msg)
    }

    fn tick(time_ms: Millis) -> ProfileMsg {
        ProfileMsg::Tick { time_ms }
    }

    fn saving(id: u64) -> ProfileModel {
        ProfileModel {
            state: DebounceState::Saving {
                request_id: RequestId::new(id),
            },
            next_request_id: RequestId::new(id + 1),
            ..init().model
        }
    }

    #[test]
    fn test_init() {
        let Transition { model, cmd } = init();
        assert_eq!(model.full_name(), "Bob Bobski");
        assert_eq!(model.state, DebounceState::Clean);
        assert_eq!(model.next_request_id, RequestId::ZERO);
        assert_eq!(cmd, ProfileCmd::None);
    }

    #[test]
    fn test_commit_after_interval() {
        let model = step(&init().model, ProfileMsg::FirstNameEdited("Ann".to_string())).model;
        assert_eq!(model.state, DebounceState::EditedUnknownTime);

        let model = step(&model, tick(1000)).model;
        assert_eq!(model.state, DebounceState::Edited { edit_time_ms: 1000 });

        let early = step(&model, tick(1999));
        assert_eq!(early.model, model);
        assert_eq!(early.cmd, ProfileCmd::None);

        let due = step(&model, tick(2000));
        assert_eq!(
            due.model.state,
            DebounceState::Saving {
                request_id: RequestId::ZERO
            }
        );
        assert_eq!(due.model.next_request_id, RequestId::new(1));
        assert_eq!(
            due.cmd,
            ProfileCmd::Request {
                id: RequestId::ZERO,
                first_name: "Ann".to_string(),
                last_name: "Bobski".to_string(),
            }
        );
    }

    #[test]
    fn test_edit_resets_baseline() {
        let mut model = init().model;
        model = step(&model, ProfileMsg::LastNameEdited("L".to_string())).model;
        model = step(&model, tick(1000)).model;
        model = step(&model, ProfileMsg::LastNameEdited("Le".to_string())).model;
        assert_eq!(model.state, DebounceState::EditedUnknownTime);

        // Would have committed without the second edit
        let next = step(&model, tick(2000));
        assert_eq!(next.model.state, DebounceState::Edited { edit_time_ms: 2000 });
        assert_eq!(next.cmd, ProfileCmd::None);

        let next = step(&next.model, tick(3000));
        assert!(matches!(next.cmd, ProfileCmd::Request { ref last_name, .. } if last_name == "Le"));
    }

    #[test]
    fn test_edit_while_saving() {
        let model = step(&saving(0), ProfileMsg::FirstNameEdited("Cy".to_string())).model;
        assert_eq!(model.state, DebounceState::EditedUnknownTime);

        // The response to the superseded save no longer settles anything
        let late = step(&model, ProfileMsg::GotResponse { request_id: RequestId::ZERO });
        assert_eq!(late.model, model);
        assert_eq!(model.next_request_id, RequestId::new(1));
    }

    #[test]
    fn test_settle_results() {
        let ok = step(&saving(2), ProfileMsg::GotResponse { request_id: RequestId::new(2) });
        assert_eq!(ok.model.state, DebounceState::Clean);
        assert_eq!(ok.cmd, ProfileCmd::None);

        let failed = step(&saving(2), ProfileMsg::RequestFailed { request_id: RequestId::new(2) });
        assert_eq!(failed.model.state, DebounceState::FailedToSave);
        assert_eq!(failed.model.next_request_id, RequestId::new(3));
    }

    #[test]
    fn test_stale_results_are_noops() {
        let models = [init().model, saving(5), step(&init().model, tick(10)).model];
        for model in &models {
            for msg in [
                ProfileMsg::GotResponse { request_id: RequestId::new(4) },
                ProfileMsg::RequestFailed { request_id: RequestId::new(6) },
            ] {
                let next = step(model, msg);
                assert_eq!(&next.model, model);
                assert_eq!(next.cmd, ProfileCmd::None);
            }
        }
    }

    #[test]
    fn test_custom_interval() {
        let program = ProfileProgram::with_interval(250);
        let model = step(&init().model, ProfileMsg::FirstNameEdited("Ann".to_string())).model;
        let model = program.update(&model, tick(100)).model;

        assert_eq!(program.update(&model, tick(349)).cmd, ProfileCmd::None);
        assert!(matches!(program.update(&model, tick(350)).cmd, ProfileCmd::Request { .. }));
    }

    #[test]
    fn test_request_ids_increase_per_save() {
        let (mut engine, first) = Engine::new(ProfileProgram::default(), init());
        assert_eq!(first, None);
        assert_eq!(engine.program().debounce_interval_ms, 1000);

        let mut issued = Vec::new();
        let mut now = 0;
        for name in ["A", "B", "C"] {
            engine.dispatch(ProfileMsg::FirstNameEdited(name.to_string()));
            for _ in 0..2 {
                now += 1000;
                if let Some(ProfileCmd::Request { id, .. }) = engine.dispatch(tick(now)) {
                    issued.push(id);
                    engine.dispatch(ProfileMsg::GotResponse { request_id: id });
                }
            }
        }

        assert_eq!(issued, vec![RequestId::new(0), RequestId::new(1), RequestId::new(2)]);
        assert_eq!(engine.model().state, DebounceState::Clean);
    }

    #[test]
    fn test_program_config_from_ron() {
        let program: ProfileProgram = ron::from_str("(debounce_interval_ms: 500)").unwrap();
        assert_eq!(program, ProfileProgram::with_interval(500));

        let program: ProfileProgram = ron::from_str("()").unwrap();
        assert_eq!(program, ProfileProgram::default());
    }
}
