mod login;
mod service;

pub use login::LoginUserCommand;
pub use service::UserCommandService;
