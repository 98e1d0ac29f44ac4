mod backend_link;

pub use self::backend_link::{BackendLink, LinkReceiver};
