pub mod home_feed;
pub mod home_feed_posts;
pub mod post_card;
pub mod trending_posts;

pub use home_feed::HomeFeed;
pub use home_feed_posts::HomeFeedPosts;
pub use post_card::PostCard;
pub use trending_posts::TrendingPosts;
