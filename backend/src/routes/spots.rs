use crate::api::Spot;
use serde::{Deserialize, Serialize};

/// One page of the spot directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpotListResponse {
    pub spots: Vec<Spot>,
    pub limit: usize,
    pub offset: usize,
}

pub const LIST_SPOTS: &str = "list_spots";
pub const GET_SPOT: &str = "get_spot";
