//! User Use Cases

mod create_user;
mod get_user_by_username;
mod list_users;

pub use create_user::CreateUserUseCase;
pub use get_user_by_username::GetUserByUsernameUseCase;
pub use list_users::ListUsersUseCase;
