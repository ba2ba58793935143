mod directory;
mod ledger;
mod money;

pub use directory::*;
pub use ledger::*;
pub use money::*;
