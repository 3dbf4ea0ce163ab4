mod users;
pub use users::{AppState, UsersView};
