use crate::error::WeatherError;

/// Approximates the wet-bulb temperature (°C) from air temperature (°C) and
/// relative humidity (%), using Stull (2011), "Wet-Bulb Temperature from
/// Relative Humidity and Air Temperature".
///
/// # Errors
///
/// Returns [`WeatherError::Domain`] for negative humidity, where the
/// formula's square root and power terms are undefined, and for any
/// non-finite input.
pub fn compute_wetbulb(temp_c: f64, rh_pct: f64) -> Result<f64, WeatherError> {
    if !temp_c.is_finite() || !rh_pct.is_finite() || rh_pct < 0.0 {
        return Err(WeatherError::Domain {
            temp: temp_c,
            rh: rh_pct,
        });
    }

    let t = temp_c;
    let rh = rh_pct;

    Ok(t * (0.151977 * (rh + 8.313659).sqrt()).atan() + (t + rh).atan()
        - (rh - 1.676331).atan()
        + 0.00391838 * rh.powf(1.5) * (0.023101 * rh).atan()
        - 4.686035)
}
