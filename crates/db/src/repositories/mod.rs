//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Methods that must run
//! inside a caller-owned transaction take `&mut PgConnection` instead.

pub mod achievement_repo;
pub mod course_repo;
pub mod notification_preference_repo;
pub mod notification_repo;
pub mod preference_repo;
pub mod progress_repo;
pub mod pronunciation_repo;
pub mod recommendation_repo;
pub mod user_repo;
pub mod word_of_the_day_repo;
pub mod xp_account_repo;

pub use achievement_repo::AchievementRepo;
pub use course_repo::CourseRepo;
pub use notification_preference_repo::NotificationPreferenceRepo;
pub use notification_repo::NotificationRepo;
pub use preference_repo::PreferenceRepo;
pub use progress_repo::ProgressRepo;
pub use pronunciation_repo::PronunciationRepo;
pub use recommendation_repo::RecommendationRepo;
pub use user_repo::UserRepo;
pub use word_of_the_day_repo::WordOfTheDayRepo;
pub use xp_account_repo::XpAccountRepo;
