//! Then steps for lead stage transition BDD scenarios.

use super::world::{StageTransitionWorld, run_async};
use canvass::lead::{
    domain::{Lead, LeadDomainError},
    ports::LeadRepository,
    services::PipelineError,
};
use eyre::WrapErr;
use rstest_bdd_macros::then;

fn stored_lead(world: &StageTransitionWorld) -> Result<Lead, eyre::Report> {
    let lead = world
        .current_lead
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing lead in scenario world"))?;
    run_async(world.repository.find_by_id(lead.id()))
        .wrap_err("fetch stored lead")?
        .ok_or_else(|| eyre::eyre!("lead is not in the store"))
}

#[then(r#"the stored stage label is "{label}""#)]
fn stored_stage_label_is(world: &StageTransitionWorld, label: String) -> Result<(), eyre::Report> {
    let lead = stored_lead(world)?;

    if lead.stage().label() != label {
        return Err(eyre::eyre!(
            "expected stage label {label}, found {}",
            lead.stage().label()
        ));
    }
    Ok(())
}

#[then(r#"the stored loss note is "{note}""#)]
fn stored_loss_note_is(world: &StageTransitionWorld, note: String) -> Result<(), eyre::Report> {
    let lead = stored_lead(world)?;

    let stored_note = lead
        .stage()
        .closed_outcome()
        .and_then(|outcome| outcome.loss_note())
        .ok_or_else(|| eyre::eyre!("stored lead carries no loss note"))?;
    if stored_note.as_str() != note {
        return Err(eyre::eyre!(
            "expected loss note {note}, found {stored_note}"
        ));
    }
    Ok(())
}

#[then("the stored lead has no closed outcome")]
fn stored_lead_has_no_outcome(world: &StageTransitionWorld) -> Result<(), eyre::Report> {
    let lead = stored_lead(world)?;

    if lead.stage().closed_outcome().is_some() {
        return Err(eyre::eyre!(
            "expected no closed outcome, found {:?}",
            lead.stage()
        ));
    }
    Ok(())
}

#[then("the transition fails because a closed reason is required")]
fn transition_requires_reason(world: &StageTransitionWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_transition_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing transition result"))?;

    if !matches!(
        result,
        Err(PipelineError::Domain(LeadDomainError::MissingClosedReason))
    ) {
        return Err(eyre::eyre!("expected MissingClosedReason, got {result:?}"));
    }
    Ok(())
}

#[then("the transition fails because a loss justification is required")]
fn transition_requires_loss_note(world: &StageTransitionWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_transition_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing transition result"))?;

    if !matches!(
        result,
        Err(PipelineError::Domain(LeadDomainError::EmptyLossNote))
    ) {
        return Err(eyre::eyre!("expected EmptyLossNote, got {result:?}"));
    }
    Ok(())
}
