pub use super::comment::Entity as Comment;
pub use super::project::Entity as Project;
pub use super::project_user::Entity as ProjectUser;
pub use super::task::Entity as Task;
pub use super::team::Entity as Team;
pub use super::team_user::Entity as TeamUser;
pub use super::user::Entity as User;
