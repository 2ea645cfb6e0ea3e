//! Factory methods for creating test data.
//!
//! Each entity has a `Factory` struct for customization and a `create_*` convenience
//! function for quick default creation. Members must exist before the cars and
//! articles that reference them.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let agent = factory::member::MemberFactory::new(&db)
//!     .member_type(MemberType::Agent)
//!     .build()
//!     .await?;
//! let car = factory::car::CarFactory::new(&db, agent.id)
//!     .likes(3)
//!     .views(10)
//!     .build()
//!     .await?;
//! ```

pub mod board_article;
pub mod car;
pub mod helpers;
pub mod member;

pub use board_article::create_article;
pub use car::create_car;
pub use member::{create_agent, create_member};
