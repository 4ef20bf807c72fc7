//! CLI command implementations, one module per subcommand.

mod copy;
mod link;
mod list;
mod makedir;
mod mv;
mod remove;
mod resolve;
mod space;
mod stat;

pub use copy::CopyCommand;
pub use link::LinkCommand;
pub use list::ListCommand;
pub use makedir::MakedirCommand;
pub use mv::MoveCommand;
pub use remove::RemoveCommand;
pub use resolve::ResolveCommand;
pub use space::SpaceCommand;
pub use stat::StatCommand;
