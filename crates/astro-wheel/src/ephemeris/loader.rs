use crate::ephemeris::types::ChartPositions;
use crate::error::ChartError;

/// Load chart positions from a JSON string
pub fn load_positions_from_json(json: &str) -> Result<ChartPositions, ChartError> {
    let parsed: serde_json::Value =
        serde_json::from_str(json).map_err(|e| ChartError::InvalidJson(e.to_string()))?;

    validate_positions_shape(&parsed)?;

    serde_json::from_value(parsed).map_err(|e| ChartError::InvalidJson(e.to_string()))
}

/// Check the overall shape before deserializing, so the reported error names the field
fn validate_positions_shape(value: &serde_json::Value) -> Result<(), ChartError> {
    let obj = value
        .as_object()
        .ok_or_else(|| ChartError::InvalidJson("chart positions must be an object".to_string()))?;

    match obj.get("bodies") {
        Some(bodies) if bodies.is_array() => {}
        Some(_) => {
            return Err(ChartError::InvalidJson("bodies must be an array".to_string()));
        }
        None => {
            return Err(ChartError::InvalidJson("missing required field: bodies".to_string()));
        }
    }

    let cusps = obj
        .get("cusps")
        .ok_or_else(|| ChartError::InvalidJson("missing required field: cusps".to_string()))?;
    let cusps = cusps
        .as_array()
        .ok_or_else(|| ChartError::InvalidJson("cusps must be an array".to_string()))?;
    if cusps.len() != 12 {
        return Err(ChartError::InvalidCuspCount { found: cusps.len() });
    }
    if let Some((i, _)) = cusps.iter().enumerate().find(|(_, c)| !c.is_number()) {
        return Err(ChartError::InvalidJson(format!("cusp {} must be a number", i + 1)));
    }

    Ok(())
}
