pub mod activity;

pub use activity::{Activity, ActivityMap, ErrorDetail, MessageResponse};
