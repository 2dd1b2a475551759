pub mod create_item;
pub mod delete_item;
pub mod get_item;
pub mod list_items;
pub mod replace_item;
pub mod update_item;

pub use create_item::create_item;
pub use delete_item::delete_item;
pub use get_item::get_item;
pub use list_items::list_items;
pub use replace_item::replace_item;
pub use update_item::update_item;
