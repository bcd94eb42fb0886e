//! Given steps for task ownership BDD scenarios.

use super::world::{OwnershipWorld, run_async};
use eyre::WrapErr;
use mockable::DefaultClock;
use rstest_bdd_macros::given;
use taskward::{
    auth::domain::Secret,
    identity::domain::{EmailAddress, User},
    task::services::CreateTaskRequest,
};

#[given(r#"a registered user "{name}""#)]
fn registered_user(world: &mut OwnershipWorld, name: String) -> Result<(), eyre::Report> {
    let email = EmailAddress::new(format!("{name}@example.com"))
        .wrap_err("build scenario email address")?;
    let user = User::new(email, &DefaultClock);
    world
        .directory
        .insert(user.clone())
        .wrap_err("register scenario user")?;
    world.users.insert(name, user);
    Ok(())
}

#[given(r#""{name}" uses the login secret "{secret}""#)]
fn user_has_secret(
    world: &mut OwnershipWorld,
    name: String,
    secret: String,
) -> Result<(), eyre::Report> {
    let user = world.user(&name)?.clone();
    world
        .credentials
        .register(&user, &Secret::new(secret))
        .wrap_err("register scenario credentials")?;
    Ok(())
}

#[given(r#""{name}" has a task titled "{title}""#)]
fn user_has_task(
    world: &mut OwnershipWorld,
    name: String,
    title: String,
) -> Result<(), eyre::Report> {
    let owner = world.user_id(&name)?;
    let created = run_async(
        world
            .service
            .create(CreateTaskRequest::untitled().with_title(title), owner),
    )
    .wrap_err("create task in scenario setup")?;
    world.current_task = Some(created);
    Ok(())
}
