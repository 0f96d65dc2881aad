pub mod jwt;
pub mod oauth_http_client;
pub mod profile_query_postgres;
pub mod sea_orm_entity;
pub mod security;
pub mod token_blacklist_redis;
