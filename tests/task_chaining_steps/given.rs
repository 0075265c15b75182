//! Given steps for follow-up task chaining BDD scenarios.

use super::world::{TaskChainingWorld, run_async};
use canvass::followup::services::CreateTaskRequest;
use canvass::lead::{
    domain::{ClientName, Lead, LeadDetails, LeadSource, OwnerName},
    ports::LeadRepository,
};
use eyre::WrapErr;
use mockable::DefaultClock;
use rstest_bdd_macros::given;

#[given(r#"a lead for "{client}" owned by "{owner}""#)]
fn lead_exists(
    world: &mut TaskChainingWorld,
    client: String,
    owner: String,
) -> Result<(), eyre::Report> {
    let details = LeadDetails::new(
        ClientName::new(client)?,
        OwnerName::new(owner)?,
        LeadSource::Website,
    );
    let lead = Lead::new(details, &DefaultClock);
    run_async(world.leads.store(&lead)).wrap_err("store lead for scenario")?;
    world.current_lead = Some(lead);
    Ok(())
}

#[given(r#"the lead has an open task "{subject}""#)]
fn lead_has_open_task(
    world: &mut TaskChainingWorld,
    subject: String,
) -> Result<(), eyre::Report> {
    let lead = world
        .current_lead
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing lead in scenario world"))?;

    let task = run_async(
        world
            .service
            .create_task(CreateTaskRequest::new(lead.id(), subject)),
    )
    .wrap_err("create task in scenario setup")?;

    world.current_task = Some(task);
    Ok(())
}
