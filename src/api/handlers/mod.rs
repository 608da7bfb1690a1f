// API handlers - thin HTTP orchestration layer:
// 1. Extract and validate the request
// 2. Translate it into a query plan
// 3. Run the plan against the datastore
// 4. Format rows into the response contract

pub mod catalog;
pub mod distribution;
pub mod signups;
pub mod system;

pub use catalog::query_catalog_handler;
pub use distribution::{deity_distribution_handler, tempo_distribution_handler};
pub use signups::{create_signup_handler, query_signups_handler};
pub use system::{health_handler, test_connection_handler};
