pub mod schema;
pub mod settings;
pub mod sync;
pub mod wire;

pub use schema::schema_command;
pub use settings::settings_command;
pub use sync::{plan_command, reconcile_command};
pub use wire::wire_command;
