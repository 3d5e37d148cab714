mod comment;
mod project;
mod task;
mod team;
mod user;
