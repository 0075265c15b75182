//! Given steps for lead stage transition BDD scenarios.

use super::world::{StageTransitionWorld, run_async};
use canvass::lead::{
    domain::{ClientName, ClosedReason, Lead, LeadDetails, LeadSource, OwnerName, StageKind},
    ports::LeadRepository,
    services::TransitionRequest,
};
use eyre::WrapErr;
use mockable::DefaultClock;
use rstest_bdd_macros::given;

#[given(r#"a lead for "{client}" owned by "{owner}""#)]
fn lead_exists(
    world: &mut StageTransitionWorld,
    client: String,
    owner: String,
) -> Result<(), eyre::Report> {
    let details = LeadDetails::new(
        ClientName::new(client)?,
        OwnerName::new(owner)?,
        LeadSource::Website,
    );
    let lead = Lead::new(details, &DefaultClock);
    run_async(world.repository.store(&lead)).wrap_err("store lead for scenario")?;
    world.current_lead = Some(lead);
    Ok(())
}

#[given("the lead has been closed as won")]
fn lead_closed_as_won(world: &mut StageTransitionWorld) -> Result<(), eyre::Report> {
    let lead = world
        .current_lead
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing lead in scenario world"))?;

    let request = TransitionRequest::new(lead.id(), StageKind::Closed)
        .with_closed_reason(ClosedReason::Won);
    let updated =
        run_async(world.service.transition(request)).wrap_err("close lead in scenario setup")?;

    world.current_lead = Some(updated);
    Ok(())
}
