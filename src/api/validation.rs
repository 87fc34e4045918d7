use crate::error::{ChartError, ChartResult};

use super::PlotMargins;

pub(super) fn validate_margins(margins: PlotMargins) -> ChartResult<PlotMargins> {
    for (side, value) in [
        ("top", margins.top),
        ("right", margins.right),
        ("bottom", margins.bottom),
        ("left", margins.left),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(ChartError::InvalidData(format!(
                "plot margin `{side}` must be finite and >= 0"
            )));
        }
    }
    Ok(margins)
}

pub(super) fn validate_top_k(top_k: usize) -> ChartResult<usize> {
    if top_k == 0 {
        return Err(ChartError::InvalidData(
            "tooltip top-k must be >= 1".to_owned(),
        ));
    }
    Ok(top_k)
}

pub(super) fn validate_dimmed_opacity(opacity: f64) -> ChartResult<f64> {
    if !opacity.is_finite() || !(0.0..=1.0).contains(&opacity) {
        return Err(ChartError::InvalidData(
            "dimmed opacity must be finite and in [0, 1]".to_owned(),
        ));
    }
    Ok(opacity)
}

pub(super) fn validate_pointer(x: f64, y: f64) -> ChartResult<()> {
    if !x.is_finite() || !y.is_finite() {
        return Err(ChartError::InvalidData(
            "pointer coordinates must be finite".to_owned(),
        ));
    }
    Ok(())
}
