//! Engagement domain: target kinds, counters and the statistic modifier command.

use std::fmt;

use entity::sea_orm_active_enums::EngagementGroup;

use crate::{
    model::{
        api::{DirectionDto, LikeToggleDto},
        comment::TargetKindDto,
    },
    server::model::{article::Article, car::Car, member::Member},
};

/// Kind of entity a like, view, comment or counter update points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetKind {
    Car,
    Article,
    Member,
}

impl TargetKind {
    /// Discriminator stored on engagement rows.
    pub fn group(self) -> EngagementGroup {
        match self {
            Self::Car => EngagementGroup::Cars,
            Self::Article => EngagementGroup::Article,
            Self::Member => EngagementGroup::Member,
        }
    }

    pub fn from_group(group: EngagementGroup) -> Self {
        match group {
            EngagementGroup::Cars => Self::Car,
            EngagementGroup::Article => Self::Article,
            EngagementGroup::Member => Self::Member,
        }
    }

    pub fn from_dto(dto: TargetKindDto) -> Self {
        match dto {
            TargetKindDto::Car => Self::Car,
            TargetKindDto::Article => Self::Article,
            TargetKindDto::Member => Self::Member,
        }
    }

    pub fn into_dto(self) -> TargetKindDto {
        match self {
            Self::Car => TargetKindDto::Car,
            Self::Article => TargetKindDto::Article,
            Self::Member => TargetKindDto::Member,
        }
    }
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Car => "car",
            Self::Article => "article",
            Self::Member => "member",
        };
        f.write_str(name)
    }
}

/// Integer statistic stored on a target row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Counter {
    Views,
    Likes,
    Comments,
    Rank,
    /// Listings owned by a member.
    Cars,
    Articles,
    Followers,
    Followings,
}

impl Counter {
    /// Whether targets of `kind` carry this counter.
    ///
    /// Cars and articles carry the four engagement counters, members carry all of them.
    pub fn is_tracked_on(self, kind: TargetKind) -> bool {
        match self {
            Self::Views | Self::Likes | Self::Comments | Self::Rank => true,
            Self::Cars | Self::Articles | Self::Followers | Self::Followings => {
                kind == TargetKind::Member
            }
        }
    }
}

impl fmt::Display for Counter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Views => "views",
            Self::Likes => "likes",
            Self::Comments => "comments",
            Self::Rank => "rank",
            Self::Cars => "cars",
            Self::Articles => "articles",
            Self::Followers => "followers",
            Self::Followings => "followings",
        };
        f.write_str(name)
    }
}

/// Command applying `delta` to one counter of one target. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatisticModifier {
    pub kind: TargetKind,
    pub target_id: i32,
    pub counter: Counter,
    pub delta: i32,
}

impl StatisticModifier {
    pub fn new(kind: TargetKind, target_id: i32, counter: Counter, delta: i32) -> Self {
        Self {
            kind,
            target_id,
            counter,
            delta,
        }
    }
}

/// How the stats editor treats a decrement that would take a counter below zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CounterPolicy {
    /// Clamp the stored value at zero.
    #[default]
    FloorAtZero,
    /// Store the raw sum, negative values included.
    AllowNegative,
}

/// Engagement table a listing is projected from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngagementSource {
    /// "My favorites"
    Like,
    /// "Recently viewed"
    View,
}

/// Sort direction. `Asc` always means ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Asc,
    #[default]
    Desc,
}

impl Direction {
    pub fn from_dto(dto: DirectionDto) -> Self {
        match dto {
            DirectionDto::Asc => Self::Asc,
            DirectionDto::Desc => Self::Desc,
        }
    }

    pub fn order(self) -> sea_orm::Order {
        match self {
            Self::Asc => sea_orm::Order::Asc,
            Self::Desc => sea_orm::Order::Desc,
        }
    }
}

/// Outcome of a like toggle together with the target's counters afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct LikeToggle {
    /// `1` when a like was added, `-1` when removed.
    pub delta: i32,
    pub snapshot: TargetSnapshot,
}

impl LikeToggle {
    pub fn liked(&self) -> bool {
        self.delta > 0
    }

    pub fn into_dto(self) -> LikeToggleDto {
        LikeToggleDto {
            delta: self.delta,
            liked: self.liked(),
            likes: self.snapshot.counter(Counter::Likes).unwrap_or_default(),
        }
    }
}

/// Target row as read back after a counter update.
#[derive(Debug, Clone, PartialEq)]
pub enum TargetSnapshot {
    Car(Car),
    Article(Article),
    Member(Member),
}

impl TargetSnapshot {
    pub fn kind(&self) -> TargetKind {
        match self {
            Self::Car(_) => TargetKind::Car,
            Self::Article(_) => TargetKind::Article,
            Self::Member(_) => TargetKind::Member,
        }
    }

    pub fn into_car(self) -> Option<Car> {
        match self {
            Self::Car(car) => Some(car),
            _ => None,
        }
    }

    pub fn into_article(self) -> Option<Article> {
        match self {
            Self::Article(article) => Some(article),
            _ => None,
        }
    }

    pub fn into_member(self) -> Option<Member> {
        match self {
            Self::Member(member) => Some(member),
            _ => None,
        }
    }

    /// Current value of `counter`, or `None` when the target does not carry it.
    pub fn counter(&self, counter: Counter) -> Option<i32> {
        match self {
            Self::Car(car) => match counter {
                Counter::Views => Some(car.views),
                Counter::Likes => Some(car.likes),
                Counter::Comments => Some(car.comments),
                Counter::Rank => Some(car.rank),
                _ => None,
            },
            Self::Article(article) => match counter {
                Counter::Views => Some(article.views),
                Counter::Likes => Some(article.likes),
                Counter::Comments => Some(article.comments),
                Counter::Rank => Some(article.rank),
                _ => None,
            },
            Self::Member(member) => Some(match counter {
                Counter::Views => member.views,
                Counter::Likes => member.likes,
                Counter::Comments => member.comments,
                Counter::Rank => member.rank,
                Counter::Cars => member.cars,
                Counter::Articles => member.articles,
                Counter::Followers => member.followers,
                Counter::Followings => member.followings,
            }),
        }
    }
}
