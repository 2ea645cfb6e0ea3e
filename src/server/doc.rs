//! OpenAPI document served by Swagger UI at `/api/docs`.

use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::{
    model::{
        api::{DirectionDto, ErrorDto, LikeToggleDto},
        article::{ArticleCategoryDto, ArticleDto, CreateArticleDto, PaginatedArticlesDto},
        car::{
            CarDto, CarSortDto, CarStatusDto, CreateCarDto, PaginatedCarsDto, UpdateCarDto,
            UpdateCarStatusDto,
        },
        comment::{CommentDto, CreateCommentDto, PaginatedCommentsDto, TargetKindDto},
        member::{
            CreateMemberDto, FollowDto, MemberDto, MemberStatusDto, MemberTypeDto,
            PaginatedMembersDto, UpdateMemberDto, UpdateMemberStatusDto,
        },
        notification::{MarkedReadDto, NotificationDto, PaginatedNotificationsDto},
        rank::{RankJobStateDto, RankReportDto},
    },
    server::controller::{admin, article, car, comment, member, notification},
};

/// Registers the bearer scheme referenced by authenticated endpoints.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "carmart API",
        description = "Car marketplace listings, board articles and member engagement."
    ),
    paths(
        car::create_car,
        car::get_car,
        car::list_cars,
        car::update_car_status,
        car::own_cars,
        car::update_car,
        car::all_cars,
        car::remove_car,
        car::like_car,
        car::favorite_cars,
        car::visited_cars,
        article::create_article,
        article::get_article,
        article::list_articles,
        article::like_article,
        article::remove_article,
        article::favorite_articles,
        article::visited_articles,
        member::register_member,
        member::get_member,
        member::top_agents,
        member::like_member,
        member::follow_member,
        member::unfollow_member,
        member::followers,
        member::followings,
        member::favorite_members,
        member::visited_members,
        member::update_member,
        member::update_member_status,
        comment::create_comment,
        comment::remove_comment,
        comment::list_comments,
        notification::list_notifications,
        notification::mark_notification_read,
        notification::mark_all_notifications_read,
        admin::run_rank_job,
        admin::rank_job_state,
    ),
    components(schemas(
        ErrorDto,
        DirectionDto,
        LikeToggleDto,
        CarDto,
        CarSortDto,
        CarStatusDto,
        CreateCarDto,
        PaginatedCarsDto,
        UpdateCarDto,
        UpdateCarStatusDto,
        ArticleCategoryDto,
        ArticleDto,
        CreateArticleDto,
        PaginatedArticlesDto,
        CommentDto,
        CreateCommentDto,
        PaginatedCommentsDto,
        TargetKindDto,
        CreateMemberDto,
        FollowDto,
        MemberDto,
        MemberStatusDto,
        MemberTypeDto,
        PaginatedMembersDto,
        UpdateMemberDto,
        UpdateMemberStatusDto,
        MarkedReadDto,
        NotificationDto,
        PaginatedNotificationsDto,
        RankJobStateDto,
        RankReportDto,
    )),
    tags(
        (name = "car", description = "Car listings"),
        (name = "article", description = "Community board articles"),
        (name = "member", description = "Member profiles and follows"),
        (name = "comment", description = "Comments on cars, articles and members"),
        (name = "notification", description = "Like and comment notifications"),
        (name = "admin", description = "Rank job administration")
    )
)]
pub struct ApiDoc;
