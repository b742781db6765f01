//! Update block resolution

use crate::models::manifest::Update;

/// The plan's update policy verbatim, or `default` when the plan has none
pub fn resolve_update_block(plan_update: Option<&Update>, default: &Update) -> Update {
    plan_update.cloned().unwrap_or_else(|| default.clone())
}
