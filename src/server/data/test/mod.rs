mod board_article;
mod car;
mod comment;
mod follow;
mod like;
mod projection;
mod stats;
mod view;
