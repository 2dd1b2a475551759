pub mod create_user;
pub mod delete_user;
pub mod get_current_user;
pub mod get_user;
pub mod update_user;

pub use create_user::create_user;
pub use delete_user::delete_user;
pub use get_current_user::get_current_user;
pub use get_user::get_user;
pub use update_user::update_user;
