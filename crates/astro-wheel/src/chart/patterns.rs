use crate::catalog::{BodyId, Sign};
use crate::chart::data::ChartBody;
use serde::{Deserialize, Serialize};

/// Fewest bodies sharing a sign that count as a stellium
pub const STELLIUM_MIN_BODIES: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stellium {
    pub chart: String,
    pub sign: Sign,
    pub bodies: Vec<BodyId>,
}

/// Signs holding three or more non-angle bodies, in zodiac order
pub fn find_stelliums(chart: &str, bodies: &[ChartBody]) -> Vec<Stellium> {
    Sign::all()
        .filter_map(|sign| {
            let members: Vec<BodyId> = bodies
                .iter()
                .filter(|b| !b.id.is_angle() && b.sign == sign)
                .map(|b| b.id)
                .collect();
            (members.len() >= STELLIUM_MIN_BODIES).then(|| Stellium {
                chart: chart.to_string(),
                sign,
                bodies: members,
            })
        })
        .collect()
}
