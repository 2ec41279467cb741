pub mod fixtures;
pub mod test_db;

#[allow(unused_imports)]
pub use fixtures::{test_feedback, test_snippet, test_user};
#[allow(unused_imports)]
pub use test_db::create_test_pool;
