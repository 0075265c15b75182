//! Then steps for follow-up task chaining BDD scenarios.

use super::world::{TaskChainingWorld, run_async};
use canvass::followup::{
    domain::{FollowUpTask, TaskStatus},
    ports::TaskRepository,
    services::ChainOutcome,
};
use chrono::NaiveDate;
use eyre::WrapErr;
use rstest_bdd_macros::then;

fn chain_outcome(world: &TaskChainingWorld) -> Result<&ChainOutcome, eyre::Report> {
    world
        .last_outcome
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing chain outcome"))?
        .as_ref()
        .map_err(|err| eyre::eyre!("chaining failed in scenario: {err}"))
}

fn spawned_task(world: &TaskChainingWorld) -> Result<&FollowUpTask, eyre::Report> {
    chain_outcome(world)?
        .spawned
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no successor task was spawned"))
}

#[then("the task is completed")]
fn task_is_completed(world: &TaskChainingWorld) -> Result<(), eyre::Report> {
    let updated = &chain_outcome(world)?.updated;

    if updated.status() != TaskStatus::Completed {
        return Err(eyre::eyre!(
            "expected a completed task, found {}",
            updated.status()
        ));
    }
    if updated.completed_date().is_none() {
        return Err(eyre::eyre!("completed task carries no completion date"));
    }

    let stored = run_async(world.tasks.find_by_id(updated.id()))
        .wrap_err("fetch stored task")?
        .ok_or_else(|| eyre::eyre!("completed task is not in the store"))?;
    if stored != *updated {
        return Err(eyre::eyre!("stored task differs from the chain outcome"));
    }
    Ok(())
}

#[then(r#"a successor task "{subject}" is spawned for the lead"#)]
fn successor_is_spawned(world: &TaskChainingWorld, subject: String) -> Result<(), eyre::Report> {
    let lead = world
        .current_lead
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing lead in scenario world"))?;
    let spawned = spawned_task(world)?;

    if spawned.subject().as_str() != subject {
        return Err(eyre::eyre!(
            "expected successor subject {subject}, found {}",
            spawned.subject()
        ));
    }
    if spawned.status() != TaskStatus::NotStarted {
        return Err(eyre::eyre!(
            "expected a not-started successor, found {}",
            spawned.status()
        ));
    }
    if spawned.lead_id() != lead.id() {
        return Err(eyre::eyre!("successor belongs to a different lead"));
    }
    Ok(())
}

#[then(r#"the successor is assigned to "{assignee}""#)]
fn successor_is_assigned_to(
    world: &TaskChainingWorld,
    assignee: String,
) -> Result<(), eyre::Report> {
    let spawned = spawned_task(world)?;

    if spawned.assigned_to() != assignee {
        return Err(eyre::eyre!(
            "expected assignee {assignee}, found {}",
            spawned.assigned_to()
        ));
    }
    Ok(())
}

#[then(r#"the successor is due on "{due}""#)]
fn successor_is_due_on(world: &TaskChainingWorld, due: String) -> Result<(), eyre::Report> {
    let expected = NaiveDate::parse_from_str(&due, "%Y-%m-%d")
        .map_err(|err| eyre::eyre!("invalid due date in scenario: {err}"))?;
    let spawned = spawned_task(world)?;

    if spawned.due_date() != Some(expected) {
        return Err(eyre::eyre!(
            "expected due date {expected}, found {:?}",
            spawned.due_date()
        ));
    }
    Ok(())
}

#[then("no successor task is spawned")]
fn no_successor_is_spawned(world: &TaskChainingWorld) -> Result<(), eyre::Report> {
    let outcome = chain_outcome(world)?;
    if let Some(ref spawned) = outcome.spawned {
        return Err(eyre::eyre!(
            "expected no successor, found {}",
            spawned.subject()
        ));
    }

    let lead = world
        .current_lead
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing lead in scenario world"))?;
    let listed = run_async(world.tasks.list_for_lead(lead.id())).wrap_err("list lead tasks")?;
    if listed.len() != 1 {
        return Err(eyre::eyre!("expected one stored task, found {}", listed.len()));
    }
    Ok(())
}

#[then("the lead has {count:usize} tasks")]
fn lead_has_tasks(world: &TaskChainingWorld, count: usize) -> Result<(), eyre::Report> {
    let lead = world
        .current_lead
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing lead in scenario world"))?;

    let listed = run_async(world.tasks.list_for_lead(lead.id())).wrap_err("list lead tasks")?;
    if listed.len() != count {
        return Err(eyre::eyre!(
            "expected {count} tasks for the lead, found {}",
            listed.len()
        ));
    }
    Ok(())
}
