pub use super::agreement::Entity as Agreement;
pub use super::agreement_team::Entity as AgreementTeam;
pub use super::brand::Entity as Brand;
pub use super::comment::Entity as Comment;
pub use super::comment_reaction::Entity as CommentReaction;
pub use super::company::Entity as Company;
pub use super::event::Entity as Event;
pub use super::feedback::Entity as Feedback;
pub use super::feedback_answer::Entity as FeedbackAnswer;
pub use super::location::Entity as Location;
pub use super::motorcycle::Entity as Motorcycle;
pub use super::participation::Entity as Participation;
pub use super::path::Entity as Path;
pub use super::post::Entity as Post;
pub use super::post_tag::Entity as PostTag;
pub use super::profile::Entity as Profile;
pub use super::review::Entity as Review;
pub use super::role::Entity as Role;
pub use super::tag::Entity as Tag;
pub use super::team::Entity as Team;
pub use super::user::Entity as User;
