//! Then steps for task ownership BDD scenarios.

use super::world::{OwnershipWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::then;
use taskward::{
    auth::services::AuthError,
    task::{domain::TaskStatus, services::TaskLifecycleError},
};

#[then("the task is pending")]
fn task_is_pending(world: &OwnershipWorld) -> Result<(), eyre::Report> {
    let task = world.task()?;
    if task.status() != TaskStatus::Pending {
        return Err(eyre::eyre!("expected Pending, found {}", task.status()));
    }
    Ok(())
}

#[then(r#"the task is owned by "{name}""#)]
fn task_is_owned_by(world: &OwnershipWorld, name: String) -> Result<(), eyre::Report> {
    let owner = world.user_id(&name)?;
    if !world.task()?.is_owned_by(owner) {
        return Err(eyre::eyre!("task is not owned by {name}"));
    }
    Ok(())
}

#[then("the task has no completion time")]
fn task_has_no_completion_time(world: &OwnershipWorld) -> Result<(), eyre::Report> {
    if let Some(at) = world.task()?.completed_at() {
        return Err(eyre::eyre!("expected no completion time, found {at}"));
    }
    Ok(())
}

#[then(r#"the task status is "{status}""#)]
fn task_status_is(world: &OwnershipWorld, status: String) -> Result<(), eyre::Report> {
    let expected: TaskStatus = status
        .parse()
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))?;
    let task = world.task()?;
    if task.status() != expected {
        return Err(eyre::eyre!("expected {expected}, found {}", task.status()));
    }
    Ok(())
}

#[then("the completion time is not before the creation time")]
fn completion_not_before_creation(world: &OwnershipWorld) -> Result<(), eyre::Report> {
    let task = world.task()?;
    let completed_at = task
        .completed_at()
        .ok_or_else(|| eyre::eyre!("expected a completion time"))?;
    if completed_at < task.created_at() {
        return Err(eyre::eyre!(
            "completion {completed_at} precedes creation {}",
            task.created_at()
        ));
    }
    Ok(())
}

#[then("the request is forbidden")]
fn request_is_forbidden(world: &OwnershipWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing lifecycle result"))?;
    if !matches!(result, Err(TaskLifecycleError::Forbidden { .. })) {
        return Err(eyre::eyre!("expected Forbidden, got {result:?}"));
    }
    Ok(())
}

#[then("the task is not found")]
fn task_is_not_found(world: &OwnershipWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing lifecycle result"))?;
    if !matches!(result, Err(TaskLifecycleError::NotFound(_))) {
        return Err(eyre::eyre!("expected NotFound, got {result:?}"));
    }
    Ok(())
}

#[then(r#"the listing holds only "{title}""#)]
fn listing_holds_only(world: &OwnershipWorld, title: String) -> Result<(), eyre::Report> {
    let listing = world
        .last_listing
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing listing"))?;
    let titles: Vec<Option<&str>> = listing.iter().map(|task| task.title()).collect();
    if titles != [Some(title.as_str())] {
        return Err(eyre::eyre!("expected only {title:?}, found {titles:?}"));
    }
    Ok(())
}

#[then("login is refused")]
fn login_is_refused(world: &OwnershipWorld) -> Result<(), eyre::Report> {
    if world.token.is_some() {
        return Err(eyre::eyre!("expected no token to be issued"));
    }
    if !matches!(world.login_failure, Some(AuthError::InvalidCredentials)) {
        return Err(eyre::eyre!(
            "expected InvalidCredentials, got {:?}",
            world.login_failure
        ));
    }
    Ok(())
}

#[then(r#"authentication is rejected as "{reason}""#)]
fn authentication_rejected_as(world: &OwnershipWorld, reason: String) -> Result<(), eyre::Report> {
    match &world.auth_failure {
        Some(AuthError::TokenRejected(actual)) if actual.as_str() == reason => Ok(()),
        other => Err(eyre::eyre!("expected rejection {reason}, got {other:?}")),
    }
}

#[then(r#""{name}" has no tasks"#)]
fn user_has_no_tasks(world: &OwnershipWorld, name: String) -> Result<(), eyre::Report> {
    let owner = world.user_id(&name)?;
    let tasks = run_async(world.service.get_all_for_owner(owner))
        .wrap_err("list tasks in scenario assertion")?;
    if !tasks.is_empty() {
        return Err(eyre::eyre!("expected no tasks for {name}, found {}", tasks.len()));
    }
    Ok(())
}
