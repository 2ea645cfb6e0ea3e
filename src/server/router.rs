use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use crate::server::{
    controller::{
        admin::{rank_job_state, run_rank_job},
        article::{
            create_article, favorite_articles, get_article, like_article, list_articles,
            remove_article, visited_articles,
        },
        car::{
            all_cars, create_car, favorite_cars, get_car, like_car, list_cars, own_cars,
            remove_car, update_car, update_car_status, visited_cars,
        },
        comment::{create_comment, list_comments, remove_comment},
        member::{
            favorite_members, follow_member, followers, followings, get_member, like_member,
            register_member, top_agents, unfollow_member, update_member, update_member_status,
            visited_members,
        },
        notification::{list_notifications, mark_all_notifications_read, mark_notification_read},
    },
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/cars", post(create_car).get(list_cars))
        .route("/api/cars/favorites", get(favorite_cars))
        .route("/api/cars/visited", get(visited_cars))
        .route("/api/cars/mine", get(own_cars))
        .route("/api/cars/{id}", get(get_car).patch(update_car))
        .route("/api/cars/{id}/status", patch(update_car_status))
        .route("/api/cars/{id}/like", post(like_car))
        .route("/api/articles", post(create_article).get(list_articles))
        .route("/api/articles/favorites", get(favorite_articles))
        .route("/api/articles/visited", get(visited_articles))
        .route("/api/articles/{id}", get(get_article).delete(remove_article))
        .route("/api/articles/{id}/like", post(like_article))
        .route("/api/members", post(register_member).patch(update_member))
        .route("/api/members/agents", get(top_agents))
        .route("/api/members/favorites", get(favorite_members))
        .route("/api/members/visited", get(visited_members))
        .route("/api/members/{id}", get(get_member))
        .route("/api/members/{id}/like", post(like_member))
        .route(
            "/api/members/{id}/follow",
            post(follow_member).delete(unfollow_member),
        )
        .route("/api/members/{id}/followers", get(followers))
        .route("/api/members/{id}/followings", get(followings))
        .route("/api/comments", post(create_comment).get(list_comments))
        .route("/api/comments/{id}", delete(remove_comment))
        .route("/api/notifications", get(list_notifications))
        .route("/api/notifications/read", post(mark_all_notifications_read))
        .route("/api/notifications/{id}/read", post(mark_notification_read))
        .route("/api/admin/cars", get(all_cars))
        .route("/api/admin/cars/{id}", delete(remove_car))
        .route("/api/admin/members/{id}/status", patch(update_member_status))
        .route("/api/admin/rank", get(rank_job_state))
        .route("/api/admin/rank/run", post(run_rank_job))
}
