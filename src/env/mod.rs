pub mod foraging;

pub use foraging::ForagingEnv;
