mod agreement;
mod auth;
mod event;
mod feedback;
mod motorcycle;
mod post;
mod user;
