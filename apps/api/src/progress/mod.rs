// Learning progress: per-user completion and feedback on content ids.

pub mod handlers;
pub mod upsert;
