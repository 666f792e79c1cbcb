mod id;
pub mod test_util;

pub use id::Id;
