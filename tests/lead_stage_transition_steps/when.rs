//! When steps for lead stage transition BDD scenarios.

use super::world::{StageTransitionWorld, run_async};
use canvass::lead::{
    domain::{ClosedReason, StageKind},
    services::TransitionRequest,
};
use rstest_bdd_macros::when;

fn run_transition(
    world: &mut StageTransitionWorld,
    build: impl FnOnce(TransitionRequest) -> TransitionRequest,
    target: StageKind,
) -> Result<(), eyre::Report> {
    let lead = world
        .current_lead
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing lead in scenario world"))?;

    let request = build(TransitionRequest::new(lead.id(), target));
    let result = run_async(world.service.transition(request));
    if let Ok(ref updated) = result {
        world.current_lead = Some(updated.clone());
    }
    world.last_transition_result = Some(result);
    Ok(())
}

#[when(r#"the lead is moved to "{stage}""#)]
fn move_lead(world: &mut StageTransitionWorld, stage: String) -> Result<(), eyre::Report> {
    let target = StageKind::try_from(stage.as_str())
        .map_err(|err| eyre::eyre!("invalid stage in scenario: {err}"))?;
    run_transition(world, |request| request, target)
}

#[when("the lead is closed as won")]
fn close_as_won(world: &mut StageTransitionWorld) -> Result<(), eyre::Report> {
    run_transition(
        world,
        |request| request.with_closed_reason(ClosedReason::Won),
        StageKind::Closed,
    )
}

#[when(r#"the lead is closed as "{reason}" with note "{note}""#)]
fn close_with_note(
    world: &mut StageTransitionWorld,
    reason: String,
    note: String,
) -> Result<(), eyre::Report> {
    let parsed = ClosedReason::try_from(reason.as_str())
        .map_err(|err| eyre::eyre!("invalid closed reason in scenario: {err}"))?;
    run_transition(
        world,
        |request| request.with_closed_reason(parsed).with_closed_note(note),
        StageKind::Closed,
    )
}

#[when(r#"the lead is closed as "{reason}" without a note"#)]
fn close_without_note(
    world: &mut StageTransitionWorld,
    reason: String,
) -> Result<(), eyre::Report> {
    let parsed = ClosedReason::try_from(reason.as_str())
        .map_err(|err| eyre::eyre!("invalid closed reason in scenario: {err}"))?;
    run_transition(
        world,
        |request| request.with_closed_reason(parsed),
        StageKind::Closed,
    )
}

#[when("the lead is closed without choosing a reason")]
fn close_without_reason(world: &mut StageTransitionWorld) -> Result<(), eyre::Report> {
    run_transition(world, |request| request, StageKind::Closed)
}
