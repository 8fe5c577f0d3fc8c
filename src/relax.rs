/// Longitudinal magnetization `time` seconds after an RF pulse of the given
/// flip angle:
///
/// `Mz(t) = M0_equi - (M0_equi - M0_init * cos(flip_angle)) * exp(-t / T1)`
///
/// `m0_equi` is the equilibrium magnetization, `m0_init` the magnetization
/// right before the pulse. Units: `time` and `t1` in `s`, `flip_angle` in
/// `rad`. `t1` must be positive; the sequence boundary validates this before
/// any curve is computed.
pub fn longitudinal_recovery(
    time: f64,
    m0_equi: f64,
    m0_init: f64,
    flip_angle: f64,
    t1: f64,
) -> f64 {
    m0_equi - (m0_equi - m0_init * flip_angle.cos()) * (-time / t1).exp()
}

#[cfg(test)]
mod tests {
    use super::longitudinal_recovery;
    use assert2::check;

    #[test]
    fn zero_flip_keeps_magnetization() {
        for _ in 0..1000 {
            let t = rand::random::<f64>() * 10.0;
            let m = rand::random::<f64>() * 2.0 - 1.0;

            check!((longitudinal_recovery(t, m, m, 0.0, 1.9) - m).abs() < 1e-12);
        }
    }

    #[test]
    fn pulse_instant_projects_onto_z() {
        for _ in 0..1000 {
            let angle = rand::random::<f64>() * std::f64::consts::PI;
            let m0_init = rand::random::<f64>() * 2.0 - 1.0;

            let mz = longitudinal_recovery(0.0, 1.0, m0_init, angle, 1.9);
            check!((mz - m0_init * angle.cos()).abs() < 1e-12);
        }
    }

    #[test]
    fn relaxes_to_equilibrium() {
        // Even a full inversion ends up back at equilibrium.
        let mz = longitudinal_recovery(1e3, 1.0, -1.0, std::f64::consts::PI, 1.9);
        check!((mz - 1.0).abs() < 1e-9);
    }
}
