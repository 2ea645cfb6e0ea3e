pub use super::board_article::Entity as BoardArticle;
pub use super::car::Entity as Car;
pub use super::comment::Entity as Comment;
pub use super::follow::Entity as Follow;
pub use super::like::Entity as Like;
pub use super::member::Entity as Member;
pub use super::notification::Entity as Notification;
pub use super::view::Entity as View;
