pub mod event;
pub mod privilege;

pub use event::{Event, EventDetails, EventView};
pub use privilege::{Privilege, PrivilegeTable};
