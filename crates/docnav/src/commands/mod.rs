//! CLI command implementations.

mod check;
mod nav;
mod project;
mod scaffold;
mod sections;
mod sync;

pub(crate) use check::CheckArgs;
pub(crate) use nav::NavArgs;
pub(crate) use scaffold::ScaffoldArgs;
pub(crate) use sections::SectionsArgs;
pub(crate) use sync::SyncArgs;
