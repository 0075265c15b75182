//! When steps for follow-up task chaining BDD scenarios.

use super::world::{TaskChainingWorld, run_async};
use canvass::followup::services::ChainRequest;
use chrono::NaiveDate;
use rstest_bdd_macros::when;

fn run_chain(world: &mut TaskChainingWorld, request: ChainRequest) {
    let result = run_async(world.service.save_notes_and_chain(request));
    if let Ok(ref outcome) = result {
        // A spawned successor becomes the task the next step works on.
        let next = outcome.spawned.as_ref().unwrap_or(&outcome.updated);
        world.current_task = Some(next.clone());
    }
    world.last_outcome = Some(result);
}

fn current_request(
    world: &TaskChainingWorld,
    notes: String,
) -> Result<ChainRequest, eyre::Report> {
    let task = world
        .current_task
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing task in scenario world"))?;
    Ok(ChainRequest::new(task.id(), notes))
}

fn parse_due(due: &str) -> Result<NaiveDate, eyre::Report> {
    NaiveDate::parse_from_str(due, "%Y-%m-%d")
        .map_err(|err| eyre::eyre!("invalid due date in scenario: {err}"))
}

#[when(r#"notes "{notes}" are saved with a follow-up "{subject}" due on "{due}""#)]
fn save_notes_with_subject_and_due(
    world: &mut TaskChainingWorld,
    notes: String,
    subject: String,
    due: String,
) -> Result<(), eyre::Report> {
    let request = current_request(world, notes)?
        .with_follow_up_subject(subject)
        .with_follow_up_due_date(parse_due(&due)?);
    run_chain(world, request);
    Ok(())
}

#[when(r#"notes "{notes}" are saved with a follow-up due on "{due}""#)]
fn save_notes_with_due(
    world: &mut TaskChainingWorld,
    notes: String,
    due: String,
) -> Result<(), eyre::Report> {
    let request = current_request(world, notes)?.with_follow_up_due_date(parse_due(&due)?);
    run_chain(world, request);
    Ok(())
}

#[when(r#"notes "{notes}" are saved without scheduling a follow-up"#)]
fn save_notes_without_follow_up(
    world: &mut TaskChainingWorld,
    notes: String,
) -> Result<(), eyre::Report> {
    let request = current_request(world, notes)?;
    run_chain(world, request);
    Ok(())
}
