use approx::assert_relative_eq;
use nanoprism::{
    Complex64, CrossSections, Metal, NanoprismError, PrismGeometry, cross_sections,
    dipole_polarizability, extinction_cross_section, scattering_cross_section,
};

fn reference_prism() -> PrismGeometry {
    PrismGeometry::new(50.0, 20.0, 2.0).unwrap()
}

#[test]
fn test_known_value_silver_400nm() {
    let prism = reference_prism();
    let d = prism.effective_diameter();
    assert_relative_eq!(d, 34.58, epsilon = 0.01);

    let eps_m = Metal::Silver.size_corrected_permittivity(400.0, d).unwrap();
    let alpha = dipole_polarizability(400.0, eps_m, 1.0, &prism).unwrap();
    assert!(alpha.re.is_finite() && alpha.im.is_finite());
    assert!(alpha.im >= 0.0, "alpha = {alpha}");
    assert_relative_eq!(alpha.re, -12_128.679_148_510_615, max_relative = 1e-6);
    assert_relative_eq!(alpha.im, 3_901.823_192_639_169, max_relative = 1e-6);

    let ext = extinction_cross_section(400.0, eps_m, 1.0, &prism).unwrap();
    assert!(ext > 1e-12 && ext < 1e-10, "ext = {ext}");
    assert_relative_eq!(ext, 7.701_890_270_868_816e-12, max_relative = 1e-6);

    let sca = scattering_cross_section(400.0, eps_m, 1.0, &prism).unwrap();
    assert_relative_eq!(sca, 8.279_315_756_675_183e-13, max_relative = 1e-6);
}

#[test]
fn test_extinction_exceeds_scattering_for_passive_metals() {
    let prism = reference_prism();
    let d = prism.effective_diameter();
    for metal in Metal::ALL {
        for eps_h in [1.0, 1.77, 2.25] {
            for i in 0..=50 {
                let wl = 300.0 + 10.0 * i as f64;
                let eps_m = metal.size_corrected_permittivity(wl, d).unwrap();
                assert!(eps_m.im > 0.0);
                let cs = cross_sections(wl, eps_m, eps_h, &prism).unwrap();
                assert!(
                    cs.extinction >= cs.scattering,
                    "{metal} at {wl} nm in eps_h={eps_h}: ext {} < sca {}",
                    cs.extinction,
                    cs.scattering
                );
                assert!(cs.absorption() >= 0.0);
            }
        }
    }
}

#[test]
fn test_lossless_metal_does_not_absorb() {
    // with Im(eps_m) = 0 only radiative damping is left: extinction == scattering
    let prism = reference_prism();
    for eps_m in [Complex64::new(-5.0, 0.0), Complex64::new(-12.0, 0.0)] {
        for wl in [400.0, 600.0] {
            let cs = cross_sections(wl, eps_m, 1.0, &prism).unwrap();
            assert_relative_eq!(cs.extinction, cs.scattering, max_relative = 1e-9);
        }
    }
}

#[test]
fn test_cross_sections_match_single_calls() {
    let prism = PrismGeometry::new(80.0, 10.0, 3.0).unwrap();
    let eps_m = Metal::Gold
        .size_corrected_permittivity(650.0, prism.effective_diameter())
        .unwrap();

    let both = cross_sections(650.0, eps_m, 1.77, &prism).unwrap();
    let sca = scattering_cross_section(650.0, eps_m, 1.77, &prism).unwrap();
    let ext = extinction_cross_section(650.0, eps_m, 1.77, &prism).unwrap();
    assert_eq!(both.scattering, sca);
    assert_eq!(both.extinction, ext);

    let alpha = dipole_polarizability(650.0, eps_m, 1.77, &prism).unwrap();
    assert_eq!(CrossSections::from_polarizability(650.0, 1.77, alpha), both);
}

#[test]
fn test_polarizability_scales_with_host() {
    // a denser host red-shifts the resonance: at 560 nm water beats vacuum
    let prism = reference_prism();
    let d = prism.effective_diameter();
    let eps_m = Metal::Silver.size_corrected_permittivity(560.0, d).unwrap();
    let vacuum = extinction_cross_section(560.0, eps_m, 1.0, &prism).unwrap();
    let water = extinction_cross_section(560.0, eps_m, 1.77, &prism).unwrap();
    assert!(water > vacuum, "water {water} vs vacuum {vacuum}");
}

#[test]
fn test_invalid_model_inputs() {
    let prism = reference_prism();
    let eps_m = Complex64::new(-10.0, 1.0);

    let err = dipole_polarizability(400.0, eps_m, 0.0, &prism).unwrap_err();
    assert_eq!(err, NanoprismError::InvalidHostPermittivity(0.0));
    let err = scattering_cross_section(-1.0, eps_m, 1.0, &prism).unwrap_err();
    assert_eq!(err, NanoprismError::InvalidWavelength(-1.0));
    assert!(extinction_cross_section(400.0, eps_m, f64::NAN, &prism).is_err());
}
