//! People list transitions
//!
//! Every response-like message carries the identity of the fetch it answers.
//! Only a message whose identity equals the model's `fetch_id` is applied;
//! applying a response or a failure advances `fetch_id`, which retires the
//! fetch and everything still in flight for it.

use crate::{FetchStatus, PeopleCmd, PeopleModel, PeopleMsg};
use eddy_core::{Program, RequestId, Transition};

/// Initial model and command: start loading straight away
pub fn init() -> Transition<PeopleModel, PeopleCmd> {
    let fetch_id = RequestId::ZERO;
    Transition::new(
        PeopleModel {
            fetch_id,
            time_ms: None,
            status: FetchStatus::Loading {
                last_people: Vec::new(),
            },
        },
        PeopleCmd::Fetch { id: fetch_id },
    )
}

/// Update function of the people list
#[derive(Debug, Clone, Copy, Default)]
pub struct PeopleProgram;

impl Program for PeopleProgram {
    type Model = PeopleModel;
    type Msg = PeopleMsg;
    type Cmd = PeopleCmd;

    fn update(&self, model: &PeopleModel, msg: PeopleMsg) -> Transition<PeopleModel, PeopleCmd> {
        match msg {
            PeopleMsg::GotResponse { people, fetch_id } => {
                if !model.fetch_id.matches(fetch_id) {
                    return unchanged(model);
                }
                settled(model, FetchStatus::Loaded { people })
            }
            PeopleMsg::WaitedLong { fetch_id } => {
                if !model.fetch_id.matches(fetch_id) {
                    return unchanged(model);
                }
                Transition::new(
                    PeopleModel {
                        status: FetchStatus::LoadingLong,
                        ..model.clone()
                    },
                    PeopleCmd::None,
                )
            }
            PeopleMsg::RefetchRequested => Transition::new(
                PeopleModel {
                    status: FetchStatus::Loading {
                        last_people: model.best_known_people(),
                    },
                    ..model.clone()
                },
                PeopleCmd::Fetch { id: model.fetch_id },
            ),
            PeopleMsg::FetchFailed { fetch_id, error } => {
                if !model.fetch_id.matches(fetch_id) {
                    return unchanged(model);
                }
                settled(
                    model,
                    FetchStatus::Failed {
                        last_people: model.best_known_people(),
                        error,
                    },
                )
            }
            PeopleMsg::Tick { time_ms } => Transition::new(
                PeopleModel {
                    time_ms: Some(time_ms),
                    ..model.clone()
                },
                PeopleCmd::None,
            ),
        }
    }
}

fn unchanged(model: &PeopleModel) -> Transition<PeopleModel, PeopleCmd> {
    Transition::new(model.clone(), PeopleCmd::None)
}

/// Retire the current fetch with its final status
fn settled(model: &PeopleModel, status: FetchStatus) -> Transition<PeopleModel, PeopleCmd> {
    Transition::new(
        PeopleModel {
            fetch_id: model.fetch_id.next(),
            time_ms: model.time_ms,
            status,
        },
        PeopleCmd::None,
    )
}
