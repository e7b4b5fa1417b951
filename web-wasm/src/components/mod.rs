pub mod header;
pub mod option_menu;
pub mod shutdown_dialog;
pub mod thumbnail_list;
pub mod toast;
