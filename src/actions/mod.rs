mod load_profile;
mod login;
mod logout;
mod refresh_session;

pub use load_profile::LoadProfileAction;
pub use login::LoginAction;
pub use logout::LogoutAction;
pub use refresh_session::{RefreshConfig, RefreshSessionAction};
