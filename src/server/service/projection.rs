//! "My favorites" and "recently viewed" listings.
//!
//! Each listing joins the caller's like or view records back to the targets and decorates
//! them exactly like the regular entity listings. An empty result is a page with total 0.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::projection::ProjectionRepository,
    error::AppError,
    model::{
        article::{Article, ArticleDetail},
        car::{Car, CarDetail},
        engagement::{CounterPolicy, EngagementSource},
        member::{Member, MemberDetail},
        page::{Page, PageParam},
    },
    service::{board_article::ArticleService, car::CarService, member::MemberService},
};

pub struct ProjectionService<'a> {
    db: &'a DatabaseConnection,
    policy: CounterPolicy,
}

impl<'a> ProjectionService<'a> {
    pub fn new(db: &'a DatabaseConnection, policy: CounterPolicy) -> Self {
        Self { db, policy }
    }

    /// Cars the member liked or viewed, most recent engagement first.
    pub async fn cars(
        &self,
        source: EngagementSource,
        member_id: i32,
        page: PageParam,
    ) -> Result<Page<CarDetail>, AppError> {
        let (cars, total) = ProjectionRepository::new(self.db)
            .cars(source, member_id, page)
            .await?;
        if total == 0 {
            return Ok(Page::empty(page));
        }

        let cars = Page::new(cars.into_iter().map(Car::from_entity).collect(), total, page);

        CarService::new(self.db, self.policy)
            .decorate(Some(member_id), cars)
            .await
    }

    /// Articles the member liked or viewed, most recent engagement first.
    pub async fn articles(
        &self,
        source: EngagementSource,
        member_id: i32,
        page: PageParam,
    ) -> Result<Page<ArticleDetail>, AppError> {
        let (articles, total) = ProjectionRepository::new(self.db)
            .articles(source, member_id, page)
            .await?;
        if total == 0 {
            return Ok(Page::empty(page));
        }

        let articles = Page::new(
            articles.into_iter().map(Article::from_entity).collect(),
            total,
            page,
        );

        ArticleService::new(self.db, self.policy)
            .decorate(Some(member_id), articles)
            .await
    }

    /// Members the member liked or viewed, most recent engagement first.
    pub async fn members(
        &self,
        source: EngagementSource,
        member_id: i32,
        page: PageParam,
    ) -> Result<Page<MemberDetail>, AppError> {
        let (members, total) = ProjectionRepository::new(self.db)
            .members(source, member_id, page)
            .await?;
        if total == 0 {
            return Ok(Page::empty(page));
        }

        let members = Page::new(
            members.into_iter().map(Member::from_entity).collect(),
            total,
            page,
        );

        MemberService::new(self.db, self.policy)
            .decorate(Some(member_id), members)
            .await
    }
}
