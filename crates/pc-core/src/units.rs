// pc-core/src/units.rs

use uom::si::f64::{
    Pressure as UomPressure, ThermodynamicTemperature as UomThermodynamicTemperature,
    VolumeRate as UomVolumeRate,
};

// Public canonical unit types (SI, f64)
pub type FlowRate = UomVolumeRate;
pub type Pressure = UomPressure;
pub type Temperature = UomThermodynamicTemperature;

pub const SECONDS_PER_HOUR: f64 = 3_600.0;

/// Volumetric flow from m³/h, the catalog flow unit.
#[inline]
pub fn m3ph(v: f64) -> FlowRate {
    use uom::si::volume_rate::cubic_meter_per_second;
    FlowRate::new::<cubic_meter_per_second>(v / SECONDS_PER_HOUR)
}

/// Gauge pressure from bar, the catalog pressure unit.
#[inline]
pub fn bar(v: f64) -> Pressure {
    use uom::si::pressure::bar;
    Pressure::new::<bar>(v)
}

#[inline]
pub fn degc(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::degree_celsius;
    Temperature::new::<degree_celsius>(v)
}

#[inline]
pub fn as_m3ph(q: FlowRate) -> f64 {
    use uom::si::volume_rate::cubic_meter_per_second;
    q.get::<cubic_meter_per_second>() * SECONDS_PER_HOUR
}

#[inline]
pub fn as_bar(p: Pressure) -> f64 {
    use uom::si::pressure::bar;
    p.get::<bar>()
}

#[inline]
pub fn as_degc(t: Temperature) -> f64 {
    use uom::si::thermodynamic_temperature::degree_celsius;
    t.get::<degree_celsius>()
}
