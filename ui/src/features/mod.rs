pub mod feed;
pub mod signup;
