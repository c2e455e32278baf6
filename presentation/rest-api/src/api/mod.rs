pub mod daily_log {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
pub mod error;
pub mod health {
    pub mod routes;
}
pub mod mood {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
pub mod recommendation {
    pub mod dto;
    pub mod routes;
}
pub mod tags;
