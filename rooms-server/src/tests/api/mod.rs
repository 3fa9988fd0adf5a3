mod auth_flow;
mod extractors;
mod oauth_flow;
mod rooms;
