pub mod home;
pub use self::home::home;

pub mod health;
pub use self::health::health;

pub mod toggle;
pub use self::toggle::update_toggles;

pub mod login;
pub use self::login::{login, login_form};

pub mod logout;
pub use self::logout::logout;

pub mod accounts;
pub use self::accounts::{admin_accounts, user_accounts};

pub mod messages;
pub use self::messages::{list_messages, post_message};
