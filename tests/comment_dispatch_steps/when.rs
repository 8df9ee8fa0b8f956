//! When steps for comment dispatch BDD scenarios.

use super::world::{DispatchWorld, run_async};
use rstest_bdd_macros::when;

#[when(r#""{commenter}" comments "{body}""#)]
fn user_comments(
    world: &mut DispatchWorld,
    commenter: String,
    body: String,
) -> Result<(), eyre::Report> {
    let (event, dispatcher) = world.prepare(&commenter, &body)?;
    world.last_result = Some(run_async(dispatcher.dispatch(&event)));
    Ok(())
}
